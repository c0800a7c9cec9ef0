use crate::Sample;

use super::Step;

/// Control actions supported by the Newton root finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the trace built so far.
    StopEarly,
}

/// Iteration event emitted by the Newton root finder after each update.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The update that was just performed.
    pub step: Step,
    /// Every sample produced so far, initial guess first, ending with `step.to`.
    pub samples: &'a [Sample],
}

impl Event<'_> {
    /// Iteration counter (1-based).
    #[must_use]
    pub fn iter(&self) -> usize {
        self.step.iter
    }

    /// Returns true if this update met the given tolerance.
    #[must_use]
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.step.delta() <= tolerance
    }
}
