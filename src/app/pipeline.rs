//! Shared evaluation logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! resolve cosmology -> build settings -> evaluate rows
//!
//! The subcommand handlers then focus on presentation (printing vs exports).

use tracing::info;

use crate::background::DistanceCalculator;
use crate::cli::CosmologyArgs;
use crate::domain::{Cosmology, DistanceConfig, DistanceRow};
use crate::error::AppError;
use crate::math::log_space;

/// All computed outputs of a single evaluation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub cosmology: Cosmology,
    pub config: DistanceConfig,
    pub rows: Vec<DistanceRow>,
}

/// Resolve the cosmology from a JSON file or preset, then apply overrides.
pub fn resolve_cosmology(args: &CosmologyArgs) -> Result<Cosmology, AppError> {
    let base = match &args.cosmology {
        Some(path) => crate::io::read_cosmology_json(path)?,
        None => args.preset.cosmology(),
    };

    if args.omega_k.is_none() && args.w0.is_none() && args.wa.is_none() {
        return Ok(base);
    }

    let mut params = base.params();
    if let Some(v) = args.omega_k {
        params.omega_k = v;
    }
    if let Some(v) = args.w0 {
        params.w0 = v;
    }
    if let Some(v) = args.wa {
        params.wa = v;
    }
    Ok(Cosmology::new(params)?)
}

/// Numerical settings from CLI/env.
pub fn distance_config(args: &CosmologyArgs) -> Result<DistanceConfig, AppError> {
    let config = DistanceConfig {
        integration_steps: args.integration_steps,
        small_x: args.small_x,
    };
    config.validate()?;
    Ok(config)
}

/// Evaluate distances at explicit scale factors.
pub fn run_distances(args: &CosmologyArgs, scale_factors: &[f64]) -> Result<RunOutput, AppError> {
    let cosmology = resolve_cosmology(args)?;
    let config = distance_config(args)?;
    let calc = DistanceCalculator::new(config)?;

    info!(
        k = cosmology.k,
        omega_k = cosmology.omega_k,
        n = scale_factors.len(),
        "evaluating distances"
    );
    let rows = calc.evaluate_many(&cosmology, scale_factors)?;

    Ok(RunOutput {
        cosmology,
        config,
        rows,
    })
}

/// Evaluate distances on a log-spaced grid, ordered from `a_max` down to `a_min`.
pub fn run_grid(args: &CosmologyArgs, a_min: f64, a_max: f64, steps: usize) -> Result<RunOutput, AppError> {
    let mut grid = log_space(a_min, a_max, steps)?;
    grid.reverse();
    run_distances(args, &grid)
}
