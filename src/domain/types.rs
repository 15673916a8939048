//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - used in-memory during distance evaluation
//! - loaded from / exported to JSON
//! - shared read-only across threads (`Cosmology` is never mutated here)

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::DistanceError;

/// Hubble radius `c / H0` in Mpc/h (`H0 = 100 h` km/s/Mpc).
pub const RH: f64 = 2997.92458;

/// Raw cosmological parameters, as written in cosmology JSON files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosmologyParams {
    /// Cold dark matter density fraction today.
    pub omega_c: f64,
    /// Baryon density fraction today.
    pub omega_b: f64,
    /// Reduced Hubble constant.
    pub h: f64,
    /// Primordial scalar spectral index.
    pub n_s: f64,
    /// Variance of matter density perturbations at 8 Mpc/h.
    pub sigma8: f64,
    /// Curvature density fraction today (`> 0` open, `< 0` closed).
    #[serde(default)]
    pub omega_k: f64,
    /// Dark energy equation of state today.
    #[serde(default = "default_w0")]
    pub w0: f64,
    /// Linear evolution of the equation of state with `1 - a`.
    #[serde(default)]
    pub wa: f64,
}

fn default_w0() -> f64 {
    -1.0
}

/// Immutable cosmology descriptor.
///
/// `k` and `sqrtk` are derived from `omega_k` at construction:
///
/// - `k = -sign(Ω_k)`: `-1` open, `0` flat, `+1` closed
/// - `sqrtk = sqrt(|Ω_k|)`
///
/// Both are public so callers holding an externally produced descriptor can
/// carry them through unchanged; the dispatcher validates `k` before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CosmologyParams", into = "CosmologyParams")]
pub struct Cosmology {
    pub omega_c: f64,
    pub omega_b: f64,
    pub h: f64,
    pub n_s: f64,
    pub sigma8: f64,
    pub omega_k: f64,
    pub w0: f64,
    pub wa: f64,
    /// Curvature indicator.
    pub k: i8,
    /// `sqrt(|Ω_k|)`.
    pub sqrtk: f64,
}

impl Cosmology {
    /// Build a descriptor from raw parameters, deriving `k` and `sqrtk`.
    pub fn new(params: CosmologyParams) -> Result<Self, DistanceError> {
        let checks: [(&'static str, f64); 8] = [
            ("omega_c", params.omega_c),
            ("omega_b", params.omega_b),
            ("h", params.h),
            ("n_s", params.n_s),
            ("sigma8", params.sigma8),
            ("omega_k", params.omega_k),
            ("w0", params.w0),
            ("wa", params.wa),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(DistanceError::InvalidParameter { name, value });
            }
        }
        if params.omega_c < 0.0 {
            return Err(DistanceError::InvalidParameter {
                name: "omega_c",
                value: params.omega_c,
            });
        }
        if params.omega_b < 0.0 {
            return Err(DistanceError::InvalidParameter {
                name: "omega_b",
                value: params.omega_b,
            });
        }
        if params.h <= 0.0 {
            return Err(DistanceError::InvalidParameter {
                name: "h",
                value: params.h,
            });
        }

        Ok(Self::derive(params))
    }

    fn derive(params: CosmologyParams) -> Self {
        let k = if params.omega_k > 0.0 {
            -1
        } else if params.omega_k < 0.0 {
            1
        } else {
            0
        };

        Self {
            omega_c: params.omega_c,
            omega_b: params.omega_b,
            h: params.h,
            n_s: params.n_s,
            sigma8: params.sigma8,
            omega_k: params.omega_k,
            w0: params.w0,
            wa: params.wa,
            k,
            sqrtk: params.omega_k.abs().sqrt(),
        }
    }

    /// Replace the derived curvature fields.
    ///
    /// Useful when `k`/`sqrtk` come from another source; no consistency check
    /// against `omega_k` is made here.
    pub fn with_curvature_indicator(mut self, k: i8, sqrtk: f64) -> Self {
        self.k = k;
        self.sqrtk = sqrtk;
        self
    }

    /// Raw parameters of this descriptor.
    pub fn params(&self) -> CosmologyParams {
        CosmologyParams {
            omega_c: self.omega_c,
            omega_b: self.omega_b,
            h: self.h,
            n_s: self.n_s,
            sigma8: self.sigma8,
            omega_k: self.omega_k,
            w0: self.w0,
            wa: self.wa,
        }
    }

    /// Total matter density fraction today.
    pub fn omega_m(&self) -> f64 {
        self.omega_c + self.omega_b
    }

    /// Dark energy density fraction today (closes the budget).
    pub fn omega_de(&self) -> f64 {
        1.0 - self.omega_m() - self.omega_k
    }

    /// Validated curvature branch for this descriptor.
    pub fn curvature(&self) -> Result<Curvature, DistanceError> {
        Curvature::from_k(self.k)
    }
}

impl TryFrom<CosmologyParams> for Cosmology {
    type Error = DistanceError;

    fn try_from(value: CosmologyParams) -> Result<Self, Self::Error> {
        Cosmology::new(value)
    }
}

impl From<Cosmology> for CosmologyParams {
    fn from(value: Cosmology) -> Self {
        value.params()
    }
}

/// Spatial curvature branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curvature {
    /// `k = -1`, `Ω_k > 0`.
    Open,
    /// `k = 0`.
    Flat,
    /// `k = +1`, `Ω_k < 0`.
    Closed,
}

impl Curvature {
    pub const ALL: [Curvature; 3] = [Curvature::Open, Curvature::Flat, Curvature::Closed];

    /// Map a curvature indicator onto its branch.
    pub fn from_k(k: i8) -> Result<Self, DistanceError> {
        match k {
            -1 => Ok(Curvature::Open),
            0 => Ok(Curvature::Flat),
            1 => Ok(Curvature::Closed),
            _ => Err(DistanceError::InvalidCurvature { k }),
        }
    }

    /// The curvature indicator `k`.
    pub fn k(self) -> i8 {
        match self {
            Curvature::Open => -1,
            Curvature::Flat => 0,
            Curvature::Closed => 1,
        }
    }

    /// Branch index `k + 1`.
    pub fn index(self) -> usize {
        (self.k() + 1) as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Curvature::Open => "open",
            Curvature::Flat => "flat",
            Curvature::Closed => "closed",
        }
    }
}

impl TryFrom<i8> for Curvature {
    type Error = DistanceError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Curvature::from_k(value)
    }
}

/// Built-in parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Planck 2015 (TT,TE,EE+lowP+lensing+ext), flat.
    Planck15,
    /// Round-number flat ΛCDM (`Ω_m = 0.3`).
    FlatLcdm,
    /// Planck 2015 with `Ω_k = +0.05`.
    Open,
    /// Planck 2015 with `Ω_k = -0.05`.
    Closed,
}

impl Preset {
    pub fn params(self) -> CosmologyParams {
        let planck15 = CosmologyParams {
            omega_c: 0.2589,
            omega_b: 0.04860,
            h: 0.6774,
            n_s: 0.9667,
            sigma8: 0.8159,
            omega_k: 0.0,
            w0: -1.0,
            wa: 0.0,
        };
        match self {
            Preset::Planck15 => planck15,
            Preset::FlatLcdm => CosmologyParams {
                omega_c: 0.25,
                omega_b: 0.05,
                h: 0.7,
                n_s: 0.96,
                sigma8: 0.8,
                omega_k: 0.0,
                w0: -1.0,
                wa: 0.0,
            },
            Preset::Open => CosmologyParams {
                omega_k: 0.05,
                ..planck15
            },
            Preset::Closed => CosmologyParams {
                omega_k: -0.05,
                ..planck15
            },
        }
    }

    pub fn cosmology(self) -> Cosmology {
        Cosmology::derive(self.params())
    }
}

/// Numerical settings for distance evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceConfig {
    /// Simpson panels used for each radial integral (rounded up to even).
    pub integration_steps: usize,
    /// `|x|` below which `sinh(x)/x` and `sin(x)/x` use their series.
    pub small_x: f64,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            integration_steps: 512,
            small_x: crate::math::SMALL_X,
        }
    }
}

impl DistanceConfig {
    pub fn validate(&self) -> Result<(), DistanceError> {
        if self.integration_steps < 2 {
            return Err(DistanceError::InvalidConfig(format!(
                "integration_steps must be >= 2 (got {})",
                self.integration_steps
            )));
        }
        if !(self.small_x.is_finite() && self.small_x > 0.0 && self.small_x < 1.0) {
            return Err(DistanceError::InvalidConfig(format!(
                "small_x must be in (0, 1) (got {})",
                self.small_x
            )));
        }
        Ok(())
    }
}

/// Distances at one scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRow {
    pub a: f64,
    /// Redshift `1/a - 1`.
    pub z: f64,
    /// Radial comoving distance χ (Mpc/h).
    pub chi: f64,
    /// Transverse comoving distance f_k (Mpc/h).
    pub f_k: f64,
    /// Angular diameter distance `a f_k` (Mpc/h).
    pub d_a: f64,
}

/// A saved distance table (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceTable {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub cosmology: Cosmology,
    pub curvature: Curvature,
    pub config: DistanceConfig,
    pub rows: Vec<DistanceRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_follows_opposite_sign_of_omega_k() {
        assert_eq!(Preset::Open.cosmology().k, -1);
        assert_eq!(Preset::Planck15.cosmology().k, 0);
        assert_eq!(Preset::Closed.cosmology().k, 1);

        let open = Preset::Open.cosmology();
        assert!((open.sqrtk - 0.05f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn curvature_index_is_k_plus_one() {
        for c in Curvature::ALL {
            assert_eq!(c.index() as i8, c.k() + 1);
            assert_eq!(Curvature::from_k(c.k()).unwrap(), c);
        }
    }

    #[test]
    fn invalid_k_is_rejected() {
        assert_eq!(
            Curvature::from_k(2),
            Err(DistanceError::InvalidCurvature { k: 2 })
        );
        let cosmo = Preset::Planck15.cosmology().with_curvature_indicator(-3, 0.1);
        assert!(matches!(
            cosmo.curvature(),
            Err(DistanceError::InvalidCurvature { k: -3 })
        ));
    }

    #[test]
    fn rejects_unphysical_parameters() {
        let bad_h = CosmologyParams {
            h: 0.0,
            ..Preset::Planck15.params()
        };
        assert!(matches!(
            Cosmology::new(bad_h),
            Err(DistanceError::InvalidParameter { name: "h", .. })
        ));

        let nan = CosmologyParams {
            omega_k: f64::NAN,
            ..Preset::Planck15.params()
        };
        assert!(Cosmology::new(nan).is_err());
    }

    #[test]
    fn json_roundtrip_rederives_curvature() {
        let json = r#"{"omega_c":0.25,"omega_b":0.05,"h":0.7,"n_s":0.96,"sigma8":0.8,"omega_k":-0.01}"#;
        let cosmo: Cosmology = serde_json::from_str(json).unwrap();
        assert_eq!(cosmo.k, 1);
        assert_eq!(cosmo.w0, -1.0);
        assert!((cosmo.sqrtk - 0.1).abs() < 1e-15);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(DistanceConfig::default().validate().is_ok());
        let bad = DistanceConfig {
            integration_steps: 1,
            ..DistanceConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
