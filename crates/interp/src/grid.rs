//! Evenly spaced sample grids and quadrature over sampled functions.

/// Returns `n` evenly spaced values from `start` to `end` inclusive.
///
/// `n == 0` yields an empty grid and `n == 1` yields `[start]`. The last
/// value is set to `end` exactly so grids close cleanly under rounding.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = end;
            grid
        }
    }
}

/// Trapezoidal integral of samples `ys` taken at positions `xs`.
///
/// Positions may be unevenly spaced. Fewer than two samples integrate to
/// zero.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    assert_eq!(
        xs.len(),
        ys.len(),
        "trapezoid: positions and samples must have the same length"
    );
    let mut total = 0.0;
    for i in 1..xs.len() {
        total += (xs[i] - xs[i - 1]) * (ys[i] + ys[i - 1]) / 2.0;
    }
    total
}
