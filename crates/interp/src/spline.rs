//! Natural cubic spline interpolation over arbitrary strictly increasing knots.

use crate::error::InterpError;

/// A natural cubic spline fitted to a set of knots.
///
/// Natural boundary conditions: the second derivative is zero at both end
/// knots. Evaluation outside the knot range extends the boundary polynomial
/// of the nearest interval, so slight extrapolation is continuous but grows
/// cubically away from the data.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative of the spline at each knot.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fits a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// Knot positions must be finite and strictly increasing. Two knots fit
    /// a straight line. Non-finite `ys` values are accepted but poison the
    /// fitted curvatures, so callers should fill NaN gaps first.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length, fewer than two knots
    /// are given, or the knot positions are not finite and strictly
    /// increasing.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewKnots { n: xs.len() });
        }
        for (i, &x) in xs.iter().enumerate() {
            if !x.is_finite() {
                return Err(InterpError::NonFiniteKnot { index: i });
            }
            if i > 0 && x <= xs[i - 1] {
                return Err(InterpError::KnotsNotIncreasing { index: i });
            }
        }

        let m = solve_second_derivatives(xs, ys);
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    /// Evaluates the spline at `x`, extrapolating beyond the knot range.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();
        // Index of the interval containing x, clamped so that points outside
        // the knot range reuse the first or last polynomial piece.
        let upper = self.xs.partition_point(|&knot| knot <= x);
        let p = upper.saturating_sub(1).min(n - 2);

        let h = self.xs[p + 1] - self.xs[p];
        let t = x - self.xs[p];
        let slope = (self.ys[p + 1] - self.ys[p]) / h;
        let b = slope - h * (2.0 * self.m[p] + self.m[p + 1]) / 6.0;
        let c = self.m[p] / 2.0;
        let d = (self.m[p + 1] - self.m[p]) / (6.0 * h);

        self.ys[p] + t * (b + t * (c + t * d))
    }

    /// Evaluates the spline at every position in `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// Solves the natural-spline tridiagonal system for the knot second
/// derivatives via the Thomas algorithm. The system is strictly diagonally
/// dominant, so no pivoting is needed and no pivot can vanish.
fn solve_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut m = vec![0.0; n];
    if n == 2 {
        return m;
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

    // Interior unknowns m[1]..=m[n-2]; row j corresponds to knot j + 1.
    let k = n - 2;
    let mut diag = vec![0.0; k];
    let mut rhs = vec![0.0; k];
    for j in 0..k {
        let i = j + 1;
        diag[j] = 2.0 * (h[i - 1] + h[i]);
        rhs[j] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
    }

    // Forward sweep: row j has sub-diagonal h[j] and super-diagonal h[j + 1].
    for j in 1..k {
        let w = h[j] / diag[j - 1];
        diag[j] -= w * h[j];
        rhs[j] -= w * rhs[j - 1];
    }

    m[k] = rhs[k - 1] / diag[k - 1];
    for j in (0..k - 1).rev() {
        m[j + 1] = (rhs[j] - h[j + 1] * m[j + 2]) / diag[j];
    }
    m
}
