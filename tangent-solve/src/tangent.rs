use crate::Sample;

/// The tangent line through a sample.
///
/// Newton's method replaces the curve with this line and takes its
/// x-intercept as the next guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangent {
    pub point: Sample,
    pub slope: f64,
}

impl Tangent {
    /// Creates the line through `point` with the given slope.
    #[must_use]
    pub fn at(point: Sample, slope: f64) -> Self {
        Self { point, slope }
    }

    /// Returns the line's value at `x`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.point.y + self.slope * (x - self.point.x)
    }

    /// Returns where the line crosses the x axis.
    ///
    /// Returns `None` for a flat line or an intercept that overflows.
    #[must_use]
    pub fn x_intercept(&self) -> Option<f64> {
        #[allow(clippy::float_cmp)]
        if self.slope == 0.0 {
            return None;
        }
        let x = self.point.x - self.point.y / self.slope;
        x.is_finite().then_some(x)
    }

    /// Returns the endpoints of a segment of the line with total `length`,
    /// centered on the tangent point.
    #[must_use]
    pub fn segment(&self, length: f64) -> [[f64; 2]; 2] {
        let half = 0.5 * length / self.slope.hypot(1.0);
        let (x0, y0) = (self.point.x, self.point.y);
        [
            [x0 - half, y0 - self.slope * half],
            [x0 + half, y0 + self.slope * half],
        ]
    }
}
