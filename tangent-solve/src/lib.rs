//! Newton's method root finding with a step-by-step iteration trace.
//!
//! The crate computes the sequence of Newton iterates for a scalar function
//! and hands back every intermediate guess, so a caller can replay the
//! method one tangent line at a time:
//!
//! - [`Function`] — the callable `f64 → f64` whose root is sought
//! - [`derivative`], [`central_derivative`] — finite-difference slopes
//! - [`Sample`] — an immutable `(x, f(x))` pair
//! - [`Tangent`] — the tangent line through a sample
//! - [`Observer`] — receives each update as it happens and may stop the loop
//! - [`newton`] — the root finder itself
//!
//! # Example
//!
//! ```
//! use tangent_solve::newton::{self, Config, Status};
//!
//! let trace = newton::iterate(&|x: f64| x * x - 2.0, 1.0, &Config::default())
//!     .expect("should converge");
//!
//! assert_eq!(trace.status(), Status::Converged);
//! assert!((trace.root().x - std::f64::consts::SQRT_2).abs() < 1e-3);
//! ```

mod derivative;
mod function;
mod observe;
mod sample;
mod tangent;

pub mod newton;

pub use derivative::{Difference, central_derivative, derivative};
pub use function::Function;
pub use observe::Observer;
pub use sample::Sample;
pub use tangent::Tangent;
