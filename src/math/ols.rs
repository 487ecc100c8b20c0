//! Straight-line ordinary least squares via the normal equations.
//!
//! For a line `y = m x + b` over `n` points the closed form is:
//!
//! ```text
//! m = (n Σxy - Σx Σy) / (n Σx² - (Σx)²)
//! b = (Σy - m Σx) / n
//! ```
//!
//! The data sets here are a handful of points, so accumulating the raw sums is
//! accurate enough and keeps the intermediate values available for reporting.

/// Running sums for a straight-line fit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_xx: f64,
}

impl LineSums {
    pub fn push(&mut self, x: f64, y: f64) {
        self.n += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xy += x * y;
        self.sum_xx += x * x;
    }

    /// `n Σx² - (Σx)²`; zero when every `x` is identical.
    pub fn denominator(&self) -> f64 {
        self.n as f64 * self.sum_xx - self.sum_x * self.sum_x
    }
}

impl FromIterator<(f64, f64)> for LineSums {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut sums = LineSums::default();
        for (x, y) in iter {
            sums.push(x, y);
        }
        sums
    }
}

/// A fitted straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

/// Solve the normal equations for the accumulated sums.
///
/// Returns `None` with fewer than two points or when the `x` values have no
/// spread (the slope is not unique).
pub fn solve_line(sums: &LineSums) -> Option<Line> {
    if sums.n < 2 {
        return None;
    }
    let denom = sums.denominator();
    if denom == 0.0 {
        return None;
    }
    let n = sums.n as f64;
    let slope = (n * sums.sum_xy - sums.sum_x * sums.sum_y) / denom;
    let intercept = (sums.sum_y - slope * sums.sum_x) / n;
    Some(Line { slope, intercept })
}
