use crate::Difference;

/// Configuration for the Newton root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Finite-difference step used to estimate the derivative.
    pub step: f64,
    /// Convergence threshold on the distance between successive iterates.
    pub tolerance: f64,
    /// Maximum number of Newton updates.
    pub max_iters: usize,
    /// Slopes with a smaller magnitude are treated as zero.
    pub min_slope: f64,
    /// Finite-difference scheme used to estimate the derivative.
    pub difference: Difference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 1e-3,
            tolerance: 1e-3,
            max_iters: 100,
            min_slope: f64::EPSILON,
            difference: Difference::Forward,
        }
    }
}

impl Config {
    /// Validates the step, tolerances, and iteration bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is zero or non-finite, the tolerance is
    /// not strictly positive, `min_slope` is negative or non-finite, or
    /// `max_iters` is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_step(self.step)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        if !self.min_slope.is_finite() || self.min_slope < 0.0 {
            return Err("min_slope must be finite and non-negative");
        }
        if self.max_iters == 0 {
            return Err("max_iters must be at least 1");
        }
        Ok(())
    }
}

/// Validates a finite-difference step on its own.
pub(super) fn validate_step(step: f64) -> Result<(), &'static str> {
    #[allow(clippy::float_cmp)]
    if !step.is_finite() || step == 0.0 {
        return Err("step must be finite and nonzero");
    }
    Ok(())
}
