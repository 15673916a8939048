//! Background cosmology: expansion rate and distances.
//!
//! - `expansion`: `E²(a)`, `H(a)`, dark energy evolution
//! - `radial`: radial comoving distance χ(a) and the provider seam
//! - `transverse`: curvature transform χ → f_k and the distance calculator

pub mod expansion;
pub mod radial;
pub mod transverse;

pub use expansion::*;
pub use radial::*;
pub use transverse::*;
