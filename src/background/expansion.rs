//! Expansion history for a wCDM background with CPL dark energy.
//!
//! - `w(a) = w0 + wa (1 - a)`
//! - `ρ_de(a) / ρ_de(1) = a^{f_de(a)}` with
//!   `f_de(a) = -3(1 + w0 + wa) + 3 wa (a - 1) / ln(a)`
//! - `E²(a) = Ω_m a⁻³ + Ω_k a⁻² + Ω_de a^{f_de(a)}`
//!
//! Radiation is neglected.

use crate::domain::Cosmology;

/// Below this `|a - 1|` the ratio `(a - 1) / ln(a)` is taken from its series.
const NEAR_TODAY: f64 = 1e-6;

/// Dark energy equation of state `w(a)`.
pub fn w(cosmo: &Cosmology, a: f64) -> f64 {
    cosmo.w0 + cosmo.wa * (1.0 - a)
}

/// Exponent `f_de(a)` of the dark energy density evolution.
pub fn f_de(cosmo: &Cosmology, a: f64) -> f64 {
    let x = a - 1.0;
    // x / ln(1 + x) ≈ 1 + x/2 - x²/12
    let ratio = if x.abs() < NEAR_TODAY {
        1.0 + x / 2.0 - (x * x) / 12.0
    } else {
        x / x.ln_1p()
    };
    -3.0 * (1.0 + cosmo.w0 + cosmo.wa) + 3.0 * cosmo.wa * ratio
}

/// Square of the normalized expansion rate `E(a) = H(a) / H0`.
pub fn esqr(cosmo: &Cosmology, a: f64) -> f64 {
    cosmo.omega_m() * a.powi(-3)
        + cosmo.omega_k * a.powi(-2)
        + cosmo.omega_de() * a.powf(f_de(cosmo, a))
}

/// Hubble parameter in units of h km/s/Mpc.
pub fn hubble(cosmo: &Cosmology, a: f64) -> f64 {
    100.0 * esqr(cosmo, a).sqrt()
}

/// Matter density parameter at scale factor `a`.
pub fn omega_m_a(cosmo: &Cosmology, a: f64) -> f64 {
    cosmo.omega_m() * a.powi(-3) / esqr(cosmo, a)
}

/// Dark energy density parameter at scale factor `a`.
pub fn omega_de_a(cosmo: &Cosmology, a: f64) -> f64 {
    cosmo.omega_de() * a.powf(f_de(cosmo, a)) / esqr(cosmo, a)
}
