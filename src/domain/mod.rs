//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the cosmology descriptor (`Cosmology`, `CosmologyParams`, `Preset`)
//! - the curvature branch (`Curvature`)
//! - evaluation settings and outputs (`DistanceConfig`, `DistanceRow`, `DistanceTable`)

pub mod types;

pub use types::*;
