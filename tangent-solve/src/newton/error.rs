use thiserror::Error;

/// Errors that can occur while iterating Newton's method.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    #[error("derivative estimate {slope} at x = {x} is too close to zero")]
    DerivativeZero { x: f64, slope: f64 },

    #[error("did not converge within {iters} iterations: last x = {x}, last step = {delta}")]
    NonConvergence { iters: usize, x: f64, delta: f64 },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("update from x = {x} with slope {slope} is not finite")]
    NonFiniteIterate { x: f64, slope: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_values() {
        let err = Error::DerivativeZero { x: 2.5, slope: 0.0 };
        assert_eq!(
            err.to_string(),
            "derivative estimate 0 at x = 2.5 is too close to zero"
        );

        let err = Error::InvalidInput {
            reason: "tolerance must be finite and positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid input: tolerance must be finite and positive"
        );
    }
}
