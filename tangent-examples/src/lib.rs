//! Shared setup for the tangent examples: the curve and starting point of the
//! classic Newton's method walkthrough.

use tangent_solve::newton::Config;

/// Initial guess used throughout the walkthrough.
pub const INITIAL_GUESS: f64 = 0.9;

/// The walkthrough curve, `1 - x^2 + 2^x`.
pub fn curve(x: f64) -> f64 {
    1.0 - x * x + x.exp2()
}

/// Finite-difference step and tolerance of the walkthrough.
pub fn config() -> Config {
    Config {
        step: 0.001,
        tolerance: 0.001,
        ..Config::default()
    }
}
