//! `cosmo-distances` library crate.
//!
//! Distance measures for FLRW cosmologies: radial comoving distance χ(a) by
//! quadrature, and the curvature-dependent transverse comoving distance f_k(a).
//!
//! The binary (`cosmo`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the calculator can be embedded in other pipelines

pub mod app;
pub mod background;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;

pub use background::{
    DistanceCalculator, RadialDistance, angular_diameter_distance, radial_comoving_distance,
    transverse_comoving_distance, transverse_comoving_distances,
};
pub use domain::{Cosmology, CosmologyParams, Curvature, DistanceConfig, Preset, RH};
pub use error::DistanceError;
