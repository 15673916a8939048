//! Transverse comoving distance.
//!
//! ```text
//! f_k(a) = R_H / √|Ω_k| · sinh(√|Ω_k| χ(a) / R_H)   k = -1 (open)
//! f_k(a) = χ(a)                                   k =  0 (flat)
//! f_k(a) = R_H / √|Ω_k| · sin (√|Ω_k| χ(a) / R_H)   k = +1 (closed)
//! ```
//!
//! The curved branches are evaluated as `χ · sinh(x)/x` and `χ · sin(x)/x`
//! with `x = √|Ω_k| χ / R_H`, so `√|Ω_k| → 0` reduces to `χ` without dividing
//! by the curvature.

use nalgebra::DVector;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::domain::{Cosmology, Curvature, DistanceConfig, DistanceRow, RH};
use crate::error::DistanceError;
use crate::math::{sinc, sinhc};

use super::radial::{RadialDistance, SimpsonRadial};

/// Map a radial distance onto the transverse distance for a curvature branch.
pub fn curvature_transform(curvature: Curvature, sqrtk: f64, chi: f64, small_x: f64) -> f64 {
    match curvature {
        Curvature::Open => chi * sinhc(sqrtk * chi / RH, small_x),
        Curvature::Flat => chi,
        Curvature::Closed => chi * sinc(sqrtk * chi / RH, small_x),
    }
}

/// Distance calculator: a radial provider plus the curvature transform.
#[derive(Debug, Clone)]
pub struct DistanceCalculator<R = SimpsonRadial> {
    radial: R,
    config: DistanceConfig,
}

impl DistanceCalculator<SimpsonRadial> {
    /// Calculator using the built-in Simpson radial integrator.
    pub fn new(config: DistanceConfig) -> Result<Self, DistanceError> {
        Self::with_radial(SimpsonRadial::new(&config), config)
    }
}

impl Default for DistanceCalculator<SimpsonRadial> {
    fn default() -> Self {
        let config = DistanceConfig::default();
        Self {
            radial: SimpsonRadial::new(&config),
            config,
        }
    }
}

impl<R: RadialDistance> DistanceCalculator<R> {
    /// Calculator using a caller-supplied radial provider.
    pub fn with_radial(radial: R, config: DistanceConfig) -> Result<Self, DistanceError> {
        config.validate()?;
        Ok(Self { radial, config })
    }

    pub fn config(&self) -> &DistanceConfig {
        &self.config
    }

    /// χ(a) from the underlying provider, unchanged.
    pub fn radial_comoving_distance(&self, cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
        self.radial.radial_comoving_distance(cosmo, a)
    }

    /// f_k(a) in Mpc/h.
    ///
    /// The curvature indicator is validated before the provider is called.
    pub fn transverse_comoving_distance(&self, cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
        let curvature = cosmo.curvature()?;
        let chi = self.radial.radial_comoving_distance(cosmo, a)?;
        Ok(curvature_transform(curvature, cosmo.sqrtk, chi, self.config.small_x))
    }

    /// Element-wise f_k for a slice of scale factors; output order matches input.
    pub fn transverse_comoving_distances(
        &self,
        cosmo: &Cosmology,
        a: &[f64],
    ) -> Result<Vec<f64>, DistanceError> {
        let curvature = cosmo.curvature()?;
        debug!(
            curvature = curvature.display_name(),
            sqrtk = cosmo.sqrtk,
            n = a.len(),
            "evaluating transverse comoving distances"
        );
        a.par_iter()
            .map(|&ai| {
                let chi = self.radial.radial_comoving_distance(cosmo, ai)?;
                let f_k = curvature_transform(curvature, cosmo.sqrtk, chi, self.config.small_x);
                trace!(a = ai, chi, f_k, "transverse distance");
                Ok(f_k)
            })
            .collect()
    }

    /// Same as [`Self::transverse_comoving_distances`] for an `nalgebra` vector.
    pub fn transverse_comoving_distance_vec(
        &self,
        cosmo: &Cosmology,
        a: &DVector<f64>,
    ) -> Result<DVector<f64>, DistanceError> {
        let out = self.transverse_comoving_distances(cosmo, a.as_slice())?;
        Ok(DVector::from_vec(out))
    }

    /// Angular diameter distance `a · f_k(a)` in Mpc/h.
    pub fn angular_diameter_distance(&self, cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
        Ok(a * self.transverse_comoving_distance(cosmo, a)?)
    }

    /// All distances at one scale factor.
    pub fn evaluate(&self, cosmo: &Cosmology, a: f64) -> Result<DistanceRow, DistanceError> {
        let curvature = cosmo.curvature()?;
        let chi = self.radial.radial_comoving_distance(cosmo, a)?;
        Ok(row(curvature, cosmo.sqrtk, a, chi, self.config.small_x))
    }

    /// All distances for each scale factor (parallel, order preserved).
    pub fn evaluate_many(&self, cosmo: &Cosmology, a: &[f64]) -> Result<Vec<DistanceRow>, DistanceError> {
        let curvature = cosmo.curvature()?;
        debug!(
            curvature = curvature.display_name(),
            n = a.len(),
            steps = self.config.integration_steps,
            "evaluating distance rows"
        );
        a.par_iter()
            .map(|&ai| {
                let chi = self.radial.radial_comoving_distance(cosmo, ai)?;
                Ok(row(curvature, cosmo.sqrtk, ai, chi, self.config.small_x))
            })
            .collect()
    }
}

fn row(curvature: Curvature, sqrtk: f64, a: f64, chi: f64, small_x: f64) -> DistanceRow {
    let f_k = curvature_transform(curvature, sqrtk, chi, small_x);
    DistanceRow {
        a,
        z: 1.0 / a - 1.0,
        chi,
        f_k,
        d_a: a * f_k,
    }
}

/// f_k(a) with the default calculator.
pub fn transverse_comoving_distance(cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
    DistanceCalculator::<SimpsonRadial>::default().transverse_comoving_distance(cosmo, a)
}

/// f_k for each element of `a` with the default calculator.
pub fn transverse_comoving_distances(cosmo: &Cosmology, a: &[f64]) -> Result<Vec<f64>, DistanceError> {
    DistanceCalculator::<SimpsonRadial>::default().transverse_comoving_distances(cosmo, a)
}

/// χ(a) with the default Simpson integrator.
pub fn radial_comoving_distance(cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
    SimpsonRadial::default().radial_comoving_distance(cosmo, a)
}

/// `a · f_k(a)` with the default calculator.
pub fn angular_diameter_distance(cosmo: &Cosmology, a: f64) -> Result<f64, DistanceError> {
    DistanceCalculator::<SimpsonRadial>::default().angular_diameter_distance(cosmo, a)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::background::radial::FnRadial;
    use crate::domain::{CosmologyParams, Preset};

    /// Provider returning the same χ for every scale factor.
    struct FixedChi(f64);

    impl RadialDistance for FixedChi {
        fn radial_comoving_distance(&self, _: &Cosmology, _: f64) -> Result<f64, DistanceError> {
            Ok(self.0)
        }
    }

    fn fixed_chi(chi: f64) -> DistanceCalculator<FixedChi> {
        DistanceCalculator::with_radial(FixedChi(chi), DistanceConfig::default()).unwrap()
    }

    fn with_omega_k(omega_k: f64) -> Cosmology {
        Cosmology::new(CosmologyParams {
            omega_k,
            ..Preset::Planck15.params()
        })
        .unwrap()
    }

    #[test]
    fn flat_equals_radial_exactly() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        let c = Preset::Planck15.cosmology();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let a: f64 = rng.gen_range(0.01..=1.0);
            let chi = calc.radial_comoving_distance(&c, a).unwrap();
            assert_eq!(calc.transverse_comoving_distance(&c, a).unwrap(), chi);
        }
    }

    #[test]
    fn flat_today_is_zero() {
        let c = Preset::Planck15.cosmology();
        assert_eq!(transverse_comoving_distance(&c, 1.0).unwrap(), 0.0);
        for preset in [Preset::Open, Preset::Closed] {
            assert_eq!(transverse_comoving_distance(&preset.cosmology(), 1.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn open_branch_matches_direct_formula() {
        let c = Preset::Open.cosmology().with_curvature_indicator(-1, 0.01);
        let f_k = fixed_chi(100.0).transverse_comoving_distance(&c, 0.9).unwrap();
        let expected = RH / 0.01 * (0.01 * 100.0 / RH).sinh();
        assert!(((f_k - expected) / expected).abs() < 1e-6, "{f_k} vs {expected}");
    }

    #[test]
    fn curved_branches_match_direct_formula_for_large_curvature() {
        let calc = fixed_chi(3000.0);
        let sqrtk = 0.5;
        let x = sqrtk * 3000.0 / RH;

        let open = Preset::Open.cosmology().with_curvature_indicator(-1, sqrtk);
        let closed = Preset::Closed.cosmology().with_curvature_indicator(1, sqrtk);
        let f_open = calc.transverse_comoving_distance(&open, 0.5).unwrap();
        let f_closed = calc.transverse_comoving_distance(&closed, 0.5).unwrap();

        assert!((f_open - RH / sqrtk * x.sinh()).abs() < 1e-9);
        assert!((f_closed - RH / sqrtk * x.sin()).abs() < 1e-9);
    }

    #[test]
    fn curved_branches_converge_to_flat_limit() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        let flat = Preset::Planck15.cosmology();
        for &a in &[0.9, 0.5, 0.1] {
            let chi = calc.radial_comoving_distance(&flat, a).unwrap();
            for k in [-1, 1] {
                let gaps: Vec<f64> = [1e-1, 1e-2, 1e-4, 1e-8]
                    .iter()
                    .map(|&sqrtk| {
                        let c = flat.clone().with_curvature_indicator(k, sqrtk);
                        let f_k = calc.transverse_comoving_distance(&c, a).unwrap();
                        ((f_k - chi) / chi).abs()
                    })
                    .collect();
                assert!(gaps.windows(2).all(|w| w[1] <= w[0]), "a={a} k={k}: {gaps:?}");
                assert!(gaps[gaps.len() - 1] < 1e-14, "a={a} k={k}: {gaps:?}");
            }
        }
    }

    #[test]
    fn zero_sqrtk_in_curved_branch_is_exactly_flat() {
        let calc = fixed_chi(1234.5);
        for k in [-1, 1] {
            let c = Preset::Planck15.cosmology().with_curvature_indicator(k, 0.0);
            assert_eq!(calc.transverse_comoving_distance(&c, 0.3).unwrap(), 1234.5);
        }
    }

    #[test]
    fn non_decreasing_as_a_decreases() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        let a: Vec<f64> = (0..60).map(|i| 1.0 - i as f64 * (0.99 / 59.0)).collect();
        for preset in [Preset::Planck15, Preset::FlatLcdm, Preset::Open, Preset::Closed] {
            let f = calc.transverse_comoving_distances(&preset.cosmology(), &a).unwrap();
            for w in f.windows(2) {
                assert!(w[1] >= w[0], "{preset:?}: {} then {}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn random_cosmologies_are_monotone() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        let mut rng = StdRng::seed_from_u64(42);
        let a = [1.0, 0.8, 0.6, 0.4, 0.2, 0.05];
        for _ in 0..16 {
            let c = with_omega_k(rng.gen_range(-0.1..0.1));
            let f = calc.transverse_comoving_distances(&c, &a).unwrap();
            assert!(f.windows(2).all(|w| w[1] >= w[0]), "omega_k={}", c.omega_k);
        }
    }

    #[test]
    fn array_output_matches_input_shape() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        let c = Preset::Open.cosmology();
        let a = [1.0, 0.5, 0.1];

        let f = calc.transverse_comoving_distances(&c, &a).unwrap();
        assert_eq!(f.len(), a.len());
        for (ai, fi) in a.iter().zip(&f) {
            assert_eq!(*fi, calc.transverse_comoving_distance(&c, *ai).unwrap());
        }

        let v = calc
            .transverse_comoving_distance_vec(&c, &DVector::from_row_slice(&a))
            .unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), f.as_slice());

        assert!(calc.transverse_comoving_distances(&c, &[]).unwrap().is_empty());
    }

    // The flat branch used to be returned for every curvature. Curved
    // universes must now differ from χ in the physically expected direction.
    #[test]
    fn curved_universes_do_not_fall_back_to_flat() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        for &a in &[0.5, 0.1] {
            let open = Preset::Open.cosmology();
            let chi = calc.radial_comoving_distance(&open, a).unwrap();
            let f_k = calc.transverse_comoving_distance(&open, a).unwrap();
            assert!(f_k > chi * (1.0 + 1e-4), "open a={a}: f_k={f_k} chi={chi}");

            let closed = Preset::Closed.cosmology();
            let chi = calc.radial_comoving_distance(&closed, a).unwrap();
            let f_k = calc.transverse_comoving_distance(&closed, a).unwrap();
            assert!(f_k < chi * (1.0 - 1e-4), "closed a={a}: f_k={f_k} chi={chi}");
        }
    }

    #[test]
    fn invalid_k_fails_before_integrating() {
        let calls = AtomicUsize::new(0);
        let calc = DistanceCalculator::with_radial(
            FnRadial(|_: &Cosmology, _: f64| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<f64, DistanceError>(1.0)
            }),
            DistanceConfig::default(),
        )
        .unwrap();
        let c = Preset::Planck15.cosmology().with_curvature_indicator(2, 0.1);

        assert_eq!(
            calc.transverse_comoving_distance(&c, 0.5),
            Err(DistanceError::InvalidCurvature { k: 2 })
        );
        assert!(calc.transverse_comoving_distances(&c, &[0.5, 0.2]).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn provider_errors_propagate_unchanged() {
        let err = DistanceError::Integration {
            a: 0.25,
            reason: "did not converge".to_string(),
        };
        let expected = err.clone();
        let calc = DistanceCalculator::with_radial(
            FnRadial(move |_: &Cosmology, _: f64| Err::<f64, DistanceError>(err.clone())),
            DistanceConfig::default(),
        )
        .unwrap();
        let c = Preset::Open.cosmology();
        assert_eq!(calc.transverse_comoving_distance(&c, 0.25), Err(expected.clone()));
        assert_eq!(calc.evaluate_many(&c, &[0.25]).unwrap_err(), expected);
    }

    #[test]
    fn evaluate_reports_consistent_row() {
        let calc: DistanceCalculator = DistanceCalculator::default();
        let c = Preset::Closed.cosmology();
        let row = calc.evaluate(&c, 0.5).unwrap();
        assert!((row.z - 1.0).abs() < 1e-15);
        assert_eq!(row.f_k, calc.transverse_comoving_distance(&c, 0.5).unwrap());
        assert_eq!(row.d_a, 0.5 * row.f_k);
        assert_eq!(row.d_a, calc.angular_diameter_distance(&c, 0.5).unwrap());
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = DistanceConfig {
            small_x: 0.0,
            ..DistanceConfig::default()
        };
        assert!(DistanceCalculator::new(cfg).is_err());
    }
}
