//! Stable "cardinal" sine functions used by the curvature transforms.
//!
//! The transverse comoving distance in a curved universe is
//!
//! - open:   `R_H / s * sinh(s χ / R_H)`
//! - closed: `R_H / s * sin(s χ / R_H)`
//!
//! Writing `x = s χ / R_H` both become `χ * g(x)` with `g = sinh(x)/x` or
//! `g = sin(x)/x`. Evaluating `g` directly divides by a vanishing `x` when the
//! curvature goes to zero, so for small `x` we switch to the Taylor series:
//!
//! - `sinh(x)/x ≈ 1 + x²/6 + x⁴/120`
//! - `sin(x)/x  ≈ 1 - x²/6 + x⁴/120`
//!
//! At `x = 0` both are exactly `1`, which makes the flat limit exact.

/// Default threshold below which the series form is used.
pub const SMALL_X: f64 = 1e-4;

/// `sinh(x) / x`, continuous through `x = 0`.
pub fn sinhc(x: f64, small_x: f64) -> f64 {
    if x.abs() < small_x {
        let x2 = x * x;
        return 1.0 + x2 / 6.0 + (x2 * x2) / 120.0;
    }
    x.sinh() / x
}

/// `sin(x) / x`, continuous through `x = 0`.
pub fn sinc(x: f64, small_x: f64) -> f64 {
    if x.abs() < small_x {
        let x2 = x * x;
        return 1.0 - x2 / 6.0 + (x2 * x2) / 120.0;
    }
    x.sin() / x
}
