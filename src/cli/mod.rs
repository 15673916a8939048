//! Command-line parsing for the `cosmo` distance calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! cosmology/math code.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::Preset;
use crate::math::SMALL_X;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cosmo", version, about = "Comoving distances for FLRW cosmologies")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved cosmology and derived curvature quantities.
    Show(ShowArgs),
    /// Evaluate distances at explicit scale factors.
    Distance(DistanceArgs),
    /// Evaluate distances on a log-spaced grid in `a` and optionally export it.
    Table(TableArgs),
}

/// Cosmology selection and numerical settings shared by all subcommands.
#[derive(Debug, Args, Clone)]
pub struct CosmologyArgs {
    /// Built-in parameter set.
    #[arg(long, value_enum, env = "COSMO_PRESET", default_value_t = Preset::Planck15)]
    pub preset: Preset,

    /// Cosmology JSON file (takes precedence over --preset).
    #[arg(long, value_name = "JSON")]
    pub cosmology: Option<PathBuf>,

    /// Override the curvature density Omega_k (> 0 open, < 0 closed).
    #[arg(long, allow_negative_numbers = true)]
    pub omega_k: Option<f64>,

    /// Override the dark energy equation of state today.
    #[arg(long, allow_negative_numbers = true)]
    pub w0: Option<f64>,

    /// Override the dark energy equation of state slope.
    #[arg(long, allow_negative_numbers = true)]
    pub wa: Option<f64>,

    /// Simpson panels per radial integral.
    #[arg(long, env = "COSMO_INTEGRATION_STEPS", default_value_t = 512)]
    pub integration_steps: usize,

    /// Argument magnitude below which sinh(x)/x and sin(x)/x use their series.
    #[arg(long, default_value_t = SMALL_X)]
    pub small_x: f64,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub cosmo: CosmologyArgs,

    /// Save the resolved cosmology to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub save: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub cosmo: CosmologyArgs,

    /// Scale factor(s) in (0, 1]; repeat or pass several values.
    #[arg(short = 'a', long = "scale-factor", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub scale_factors: Vec<f64>,

    /// Export rows to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub cosmo: CosmologyArgs,

    /// Smallest scale factor of the grid.
    #[arg(long, default_value_t = 0.01)]
    pub a_min: f64,

    /// Largest scale factor of the grid.
    #[arg(long, default_value_t = 1.0)]
    pub a_max: f64,

    /// Number of grid points.
    #[arg(long, default_value_t = 50)]
    pub steps: usize,

    /// Do not print the table to stdout.
    #[arg(long)]
    pub quiet: bool,

    /// Export rows to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,

    /// Export the table (cosmology + settings + rows) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}
