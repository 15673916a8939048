//! Mathematical utilities: small-argument-safe trig ratios and quadrature.

pub mod quadrature;
pub mod series;

pub use quadrature::*;
pub use series::*;
