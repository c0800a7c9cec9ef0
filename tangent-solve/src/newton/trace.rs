use thiserror::Error;

use crate::{Sample, Tangent};

/// Indicates why the root finder stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Status {
    /// Successive iterates came within the configured tolerance.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The ordered sequence of Newton iterates, starting with the initial guess.
///
/// A trace always holds at least two samples: the initial guess and the
/// result of the first update. Consecutive samples are linked by the update
/// `x[n + 1] = x[n] - y[n] / slope[n]`, with `slope[n]` recorded alongside.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTrace")
)]
pub struct Trace {
    status: Status,
    samples: Vec<Sample>,
    slopes: Vec<f64>,
}

/// Errors that can occur when rebuilding a [`Trace`] from its parts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    /// Fewer than two samples: no update was recorded.
    #[error("trace needs at least two samples, got {len}")]
    TooShort { len: usize },
    /// The slope count does not match the number of updates.
    #[error("trace has {samples} samples but {slopes} slopes")]
    SlopeMismatch { samples: usize, slopes: usize },
    /// A sample has a NaN or infinite coordinate.
    #[error("sample {index} is not finite")]
    NonFiniteSample { index: usize },
    /// A recorded slope is NaN or infinite.
    #[error("slope {index} is not finite")]
    NonFiniteSlope { index: usize },
}

/// Unchecked trace fields as they arrive from a serializer.
#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
struct RawTrace {
    status: Status,
    samples: Vec<Sample>,
    slopes: Vec<f64>,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawTrace> for Trace {
    type Error = TraceError;

    fn try_from(raw: RawTrace) -> Result<Self, Self::Error> {
        Trace::from_parts(raw.status, raw.samples, raw.slopes)
    }
}

impl Trace {
    /// Rebuilds a trace from its parts, checking its shape.
    ///
    /// # Errors
    ///
    /// Returns a [`TraceError`] if there are fewer than two samples, the
    /// slope count is not one less than the sample count, or any value is
    /// not finite.
    pub fn from_parts(
        status: Status,
        samples: Vec<Sample>,
        slopes: Vec<f64>,
    ) -> Result<Self, TraceError> {
        if samples.len() < 2 {
            return Err(TraceError::TooShort { len: samples.len() });
        }
        if slopes.len() != samples.len() - 1 {
            return Err(TraceError::SlopeMismatch {
                samples: samples.len(),
                slopes: slopes.len(),
            });
        }
        if let Some(index) = samples.iter().position(|sample| !sample.is_finite()) {
            return Err(TraceError::NonFiniteSample { index });
        }
        if let Some(index) = slopes.iter().position(|slope| !slope.is_finite()) {
            return Err(TraceError::NonFiniteSlope { index });
        }

        Ok(Self {
            status,
            samples,
            slopes,
        })
    }

    /// Starts a trace at the initial guess.
    pub(super) fn start(initial: Sample) -> Self {
        Self {
            status: Status::Converged,
            samples: vec![initial],
            slopes: Vec::new(),
        }
    }

    /// Appends the sample produced by an update with the given slope.
    pub(super) fn push(&mut self, slope: f64, sample: Sample) {
        self.slopes.push(slope);
        self.samples.push(sample);
    }

    /// Seals the trace with its final status.
    pub(super) fn finish(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Final solver status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// All samples in iteration order, initial guess first.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The initial guess.
    #[must_use]
    pub fn initial(&self) -> Sample {
        self.samples[0]
    }

    /// The last iterate, i.e. the root estimate.
    #[must_use]
    pub fn root(&self) -> Sample {
        self.samples[self.samples.len() - 1]
    }

    /// Number of samples, including the initial guess.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the trace holds no samples.
    ///
    /// Traces returned by the solver or rebuilt with [`Trace::from_parts`]
    /// hold at least two samples, so this is false for them.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of Newton updates performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.slopes.len()
    }

    /// Distance between the last two iterates.
    #[must_use]
    pub fn last_delta(&self) -> f64 {
        self.steps().last().map_or(0.0, |step| step.delta())
    }

    /// Iterates over each update as a [`Step`].
    pub fn steps(&self) -> impl ExactSizeIterator<Item = Step> + '_ {
        self.samples
            .windows(2)
            .zip(&self.slopes)
            .enumerate()
            .map(|(i, (pair, &slope))| Step {
                iter: i + 1,
                from: pair[0],
                to: pair[1],
                slope,
            })
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// One Newton update: the tangent at `from` meets the x axis at `to.x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Iteration counter (1-based); `to` is iterate `x_{iter}`.
    pub iter: usize,
    /// Sample the tangent was drawn at.
    pub from: Sample,
    /// Sample at the tangent's x-intercept.
    pub to: Sample,
    /// Slope estimate used for the update.
    pub slope: f64,
}

impl Step {
    /// The tangent line used for this update.
    #[must_use]
    pub fn tangent(&self) -> Tangent {
        Tangent::at(self.from, self.slope)
    }

    /// Distance moved by this update.
    #[must_use]
    pub fn delta(&self) -> f64 {
        (self.to.x - self.from.x).abs()
    }

    /// Label for the new iterate, e.g. `x_3`.
    #[must_use]
    pub fn x_label(&self) -> String {
        format!("x_{}", self.iter)
    }

    /// Label for the function value at the new iterate, e.g. `f(x_3)`.
    #[must_use]
    pub fn y_label(&self) -> String {
        format!("f(x_{})", self.iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample(x: f64) -> Sample {
        Sample { x, y: x * x - 4.0 }
    }

    fn trace() -> Trace {
        let mut trace = Trace::start(sample(3.0));
        trace.push(6.0, sample(3.0 - 5.0 / 6.0));
        trace.push(4.5, sample(2.0));
        trace.finish(Status::Converged)
    }

    #[test]
    fn accessors() {
        let trace = trace();

        assert_eq!(trace.status(), Status::Converged);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.iters(), 2);
        assert!(!trace.is_empty());
        assert_relative_eq!(trace.initial().x, 3.0);
        assert_relative_eq!(trace.root().x, 2.0);
        assert_relative_eq!(trace.last_delta(), 1.0 / 6.0, epsilon = 1e-12);

        let xs: Vec<f64> = (&trace).into_iter().map(|sample| sample.x).collect();
        assert_eq!(xs.len(), 3);
        assert_relative_eq!(xs[2], 2.0);
    }

    #[test]
    fn steps_pair_consecutive_samples() {
        let trace = trace();
        let steps: Vec<Step> = trace.steps().collect();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].iter, 1);
        assert_eq!(steps[1].iter, 2);
        assert_eq!(steps[0].to, steps[1].from);
        assert_eq!(steps[1].x_label(), "x_2");
        assert_eq!(steps[1].y_label(), "f(x_2)");

        let intercept = steps[0].tangent().x_intercept().expect("sloped tangent");
        assert_relative_eq!(intercept, steps[0].to.x, epsilon = 1e-12);
    }

    #[test]
    fn from_parts_accepts_solver_shaped_traces() {
        let built = trace();
        let rebuilt = Trace::from_parts(
            built.status(),
            built.samples().to_vec(),
            built.steps().map(|step| step.slope).collect(),
        )
        .expect("valid trace");

        assert_eq!(rebuilt, built);
        assert!(!rebuilt.is_empty());
    }

    #[test]
    fn from_parts_rejects_bad_shapes() {
        assert_eq!(
            Trace::from_parts(Status::Converged, vec![], vec![]),
            Err(TraceError::TooShort { len: 0 })
        );
        assert_eq!(
            Trace::from_parts(Status::Converged, vec![sample(1.0)], vec![]),
            Err(TraceError::TooShort { len: 1 })
        );
        assert_eq!(
            Trace::from_parts(Status::Converged, vec![sample(1.0), sample(2.0)], vec![]),
            Err(TraceError::SlopeMismatch {
                samples: 2,
                slopes: 0
            })
        );
    }

    #[test]
    fn from_parts_rejects_non_finite_values() {
        let samples = vec![sample(1.0), Sample { x: 2.0, y: f64::NAN }];
        assert_eq!(
            Trace::from_parts(Status::Converged, samples, vec![2.0]),
            Err(TraceError::NonFiniteSample { index: 1 })
        );

        let samples = vec![sample(1.0), sample(2.0)];
        assert_eq!(
            Trace::from_parts(Status::Converged, samples, vec![f64::INFINITY]),
            Err(TraceError::NonFiniteSlope { index: 0 })
        );
    }

    #[test]
    fn finish_records_status() {
        let trace = Trace::start(sample(1.0)).finish(Status::StoppedByObserver);
        assert_eq!(trace.status(), Status::StoppedByObserver);
        assert_eq!(trace.iters(), 0);
        assert_relative_eq!(trace.last_delta(), 0.0);
    }
}
