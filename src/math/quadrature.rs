//! Numerical integration and grid helpers.
//!
//! Radial comoving distance is a smooth one-dimensional integral on a bounded
//! interval, so composite Simpson with a fixed, even interval count is accurate
//! enough and fully deterministic.

use crate::error::DistanceError;

/// Integrate `f` over `[lo, hi]` with composite Simpson using `intervals` panels.
///
/// `intervals` is rounded up to the next even number. Returns `0.0` when
/// `lo == hi`; the integral is signed when `hi < lo`.
pub fn simpson<F>(f: F, lo: f64, hi: f64, intervals: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    if lo == hi {
        return 0.0;
    }
    let n = intervals.max(2);
    let n = if n % 2 == 1 { n + 1 } else { n };
    let h = (hi - lo) / n as f64;

    let mut acc = f(lo) + f(hi);
    for i in 1..n {
        let x = lo + h * i as f64;
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        acc += weight * f(x);
    }
    acc * h / 3.0
}

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, DistanceError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0 && max > min) {
        return Err(DistanceError::InvalidConfig(format!(
            "invalid grid range: min={min}, max={max} (must be finite, >0, and max>min)"
        )));
    }
    if steps < 2 {
        return Err(DistanceError::InvalidConfig("grid steps must be >= 2".to_string()));
    }

    let ln_min = min.ln();
    let ln_max = max.ln();
    let step = (ln_max - ln_min) / (steps as f64 - 1.0);

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push((ln_min + step * i as f64).exp());
    }
    // Pin the endpoints so a grid ending at `a = 1` yields `χ = 0` exactly.
    out[0] = min;
    out[steps - 1] = max;
    Ok(out)
}
