//! Radial comoving distance.
//!
//! ```text
//! χ(a) = R_H ∫_a^1 da' / (a'² E(a'))
//! ```
//!
//! The integral is evaluated in `ln a`, where the integrand `1 / (a E(a))`
//! stays bounded as `a → 0` (it scales like `a^{1/2}` in matter domination).
//!
//! `RadialDistance` is the seam used by the transverse calculator, so callers
//! can substitute a tabulated or externally computed `χ`.

use crate::domain::{Cosmology, DistanceConfig, RH};
use crate::error::DistanceError;
use crate::math::simpson;

use super::expansion::esqr;

/// Source of radial comoving distances χ(a) in Mpc/h.
pub trait RadialDistance: Send + Sync {
    fn radial_comoving_distance(&self, cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError>;
}

/// Reject scale factors outside `(0, 1]`.
pub fn validate_scale_factor(a: f64) -> Result<(), DistanceError> {
    if a.is_finite() && a > 0.0 && a <= 1.0 {
        Ok(())
    } else {
        Err(DistanceError::InvalidScaleFactor { a })
    }
}

/// `dχ/da = R_H / (a² E(a))`. `NaN` where `E² <= 0`.
pub fn dchioverda(cosmo: &Cosmology, a: f64) -> f64 {
    let e2 = esqr(cosmo, a);
    if !(e2 > 0.0) {
        return f64::NAN;
    }
    RH / (a * a * e2.sqrt())
}

/// Composite-Simpson integration of `dχ/da` in `ln a`.
#[derive(Debug, Clone, Copy)]
pub struct SimpsonRadial {
    intervals: usize,
}

impl SimpsonRadial {
    pub fn new(config: &DistanceConfig) -> Self {
        Self {
            intervals: config.integration_steps,
        }
    }

    pub fn intervals(&self) -> usize {
        self.intervals
    }
}

impl Default for SimpsonRadial {
    fn default() -> Self {
        Self::new(&DistanceConfig::default())
    }
}

impl RadialDistance for SimpsonRadial {
    fn radial_comoving_distance(&self, cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
        validate_scale_factor(a)?;
        if a == 1.0 {
            return Ok(0.0);
        }

        // dχ = dχ/da · a · d(ln a)
        let integral = simpson(
            |ln_a| {
                let x = ln_a.exp();
                dchioverda(cosmo, x) * x
            },
            a.ln(),
            0.0,
            self.intervals,
        );

        if !integral.is_finite() {
            return Err(DistanceError::Integration {
                a,
                reason: "expansion rate E(a)^2 is not positive on [a, 1]".to_string(),
            });
        }
        Ok(integral)
    }
}

/// Adapter turning a closure into a `RadialDistance`.
pub struct FnRadial<F>(pub F);

impl<F> RadialDistance for FnRadial<F>
where
    F: Fn(&Cosmology, f64) -> Result<f64, DistanceError> + Send + Sync,
{
    fn radial_comoving_distance(&self, cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
        (self.0)(cosmo, a)
    }
}
