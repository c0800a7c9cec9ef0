use crate::Function;

/// A function evaluated at a single input: the pair `(x, f(x))`.
///
/// Samples are never updated in place. Each Newton update produces a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    /// Evaluates `f` at `x`.
    pub fn of<F: Function + ?Sized>(f: &F, x: f64) -> Self {
        Self { x, y: f.call(x) }
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The sample as a point on the curve.
    #[must_use]
    pub fn point(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// The foot of the vertical guide line, on the x axis below the sample.
    #[must_use]
    pub fn axis_foot(&self) -> [f64; 2] {
        [self.x, 0.0]
    }

    /// The end of the horizontal guide line, on the y axis level with the sample.
    #[must_use]
    pub fn axis_level(&self) -> [f64; 2] {
        [0.0, self.y]
    }
}
