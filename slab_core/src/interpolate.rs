//! One-dimensional table interpolation.
//!
//! Design tables are sampled at a handful of breakpoints. Between breakpoints
//! values are linear; outside the tabulated range the nearest endpoint is
//! returned (no extrapolation).

/// Linear blend between `a` and `b` at parameter `t` (0 → a, 1 → b).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Piecewise-linear interpolation over `(x, y)` points sorted by ascending x.
///
/// Returns the first/last `y` when `x` lies at or beyond the ends of the
/// table. An empty table yields 0.0.
///
/// # Example
///
/// ```rust
/// use slab_core::interpolate::interp_clamped;
///
/// let pts = [(1.0, 0.025), (1.5, 0.045), (2.0, 0.062)];
/// assert!((interp_clamped(&pts, 1.25) - 0.035).abs() < 1e-12);
/// assert_eq!(interp_clamped(&pts, 0.8), 0.025);
/// assert_eq!(interp_clamped(&pts, 3.0), 0.062);
/// ```
pub fn interp_clamped(points: &[(f64, f64)], x: f64) -> f64 {
    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return 0.0,
    };
    if x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }

    // First breakpoint at or above x; guaranteed to exist and be > 0 here.
    let hi = points
        .iter()
        .position(|&(xi, _)| xi >= x)
        .unwrap_or(points.len() - 1);
    let (x1, y1) = points[hi - 1];
    let (x2, y2) = points[hi];
    lerp(y1, y2, (x - x1) / (x2 - x1))
}
