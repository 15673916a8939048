//! Terminal formatting for cosmologies and distance rows.
//!
//! Formatting lives here so the numerical code stays free of presentation
//! concerns.

use crate::background::{esqr, hubble};
use crate::domain::{Cosmology, DistanceConfig, DistanceRow};
use crate::error::AppError;

/// Describe a cosmology and its derived curvature quantities.
pub fn format_cosmology(cosmo: &Cosmology, config: &DistanceConfig) -> Result<String, AppError> {
    let curvature = cosmo.curvature()?;
    let mut out = String::new();

    out.push_str("=== cosmo - background cosmology ===\n");
    out.push_str(&format!(
        "Omega_c={:.5} Omega_b={:.5} Omega_m={:.5} Omega_de={:.5}\n",
        cosmo.omega_c,
        cosmo.omega_b,
        cosmo.omega_m(),
        cosmo.omega_de()
    ));
    out.push_str(&format!(
        "h={:.4} n_s={:.4} sigma8={:.4} w0={:.3} wa={:.3}\n",
        cosmo.h, cosmo.n_s, cosmo.sigma8, cosmo.w0, cosmo.wa
    ));
    out.push_str(&format!(
        "Curvature: {} (k={}, Omega_k={}, sqrtk={:.6})\n",
        curvature.display_name(),
        cosmo.k,
        cosmo.omega_k,
        cosmo.sqrtk
    ));
    out.push_str(&format!(
        "E^2(a=0.5)={:.6} H(a=0.5)={:.3} h km/s/Mpc\n",
        esqr(cosmo, 0.5),
        hubble(cosmo, 0.5)
    ));
    out.push_str(&format!(
        "Integration: {} Simpson panels, series below |x|<{:e}\n",
        config.integration_steps, config.small_x
    ));
    Ok(out)
}

/// Format rows as an aligned table (Mpc/h).
pub fn format_rows(rows: &[DistanceRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10} {:>10} {:>14} {:>14} {:>14}\n",
        "a", "z", "chi", "f_k", "d_A"
    ));
    for r in rows {
        out.push_str(&format!(
            "{:>10.6} {:>10.4} {:>14.4} {:>14.4} {:>14.4}\n",
            r.a, r.z, r.chi, r.f_k, r.d_a
        ));
    }
    out
}
