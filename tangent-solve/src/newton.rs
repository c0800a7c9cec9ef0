//! Newton's method with a finite-difference derivative.
//!
//! Starting from an initial guess, each update replaces the function with its
//! tangent line and moves to the tangent's x-intercept:
//!
//! ```text
//! x[n + 1] = x[n] - f(x[n]) / f'(x[n])
//! ```
//!
//! Iteration stops when two successive iterates are within
//! [`Config::tolerance`] of each other. The residual `|f(x)|` is not part of
//! the test, so a sequence whose steps shrink below the tolerance reports
//! convergence even if it is not near a root.

mod config;
mod error;
mod event;
mod trace;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use trace::{Status, Step, Trace, TraceError};

use crate::{Difference, Function, Observer, Sample};

/// Computes the next Newton iterate from `x` using a forward difference.
///
/// Slopes with magnitude below `f64::EPSILON` are treated as zero.
///
/// # Errors
///
/// Returns an error if `step` is zero or non-finite, `x` or `f(x)` is not
/// finite, the derivative estimate is zero, or the update overflows.
pub fn next_iterate<F: Function + ?Sized>(f: &F, x: f64, step: f64) -> Result<f64, Error> {
    config::validate_step(step).map_err(|reason| Error::InvalidInput { reason })?;
    if !x.is_finite() {
        return Err(Error::InvalidInput {
            reason: "x must be finite",
        });
    }

    let from = evaluate(f, x)?;
    let (_, next) = update(f, from, step, Difference::Forward, f64::EPSILON)?;
    Ok(next)
}

/// Iterates Newton's method from `x0` until successive iterates converge.
///
/// # Errors
///
/// Returns an error if the config or initial guess is invalid, a derivative
/// estimate is zero, a function value or update is not finite, or
/// `config.max_iters` updates pass without converging.
pub fn iterate<F: Function + ?Sized>(f: &F, x0: f64, config: &Config) -> Result<Trace, Error> {
    iterate_observed(f, x0, config, ())
}

/// Iterates Newton's method from `x0`, reporting each update to `observer`.
///
/// The observer sees every update before the convergence check and may
/// return [`Action::StopEarly`] to end the iteration with
/// [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns an error if the config or initial guess is invalid, a derivative
/// estimate is zero, a function value or update is not finite, or
/// `config.max_iters` updates pass without converging.
pub fn iterate_observed<F, Obs>(
    f: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Trace, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidInput { reason })?;
    if !x0.is_finite() {
        return Err(Error::InvalidInput {
            reason: "initial guess must be finite",
        });
    }

    log::debug!("starting newton iteration at x0 = {x0} with {config:?}");

    let mut current = evaluate(f, x0)?;
    let mut trace = Trace::start(current);

    for iter in 1..=config.max_iters {
        let (slope, x) = update(
            f,
            current,
            config.step,
            config.difference,
            config.min_slope,
        )?;
        let next = evaluate(f, x)?;
        trace.push(slope, next);

        let step = Step {
            iter,
            from: current,
            to: next,
            slope,
        };
        log::trace!(
            "iteration {iter}: x = {}, f(x) = {}, slope = {slope}, delta = {}",
            next.x,
            next.y,
            step.delta(),
        );

        let event = Event {
            step,
            samples: trace.samples(),
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    log::debug!("stopped by observer after {iter} iterations at x = {}", next.x);
                    return Ok(trace.finish(Status::StoppedByObserver));
                }
            }
        }

        if step.delta() <= config.tolerance {
            log::debug!("converged after {iter} iterations at x = {}", next.x);
            return Ok(trace.finish(Status::Converged));
        }

        current = next;
    }

    let delta = trace.last_delta();
    log::debug!(
        "no convergence after {} iterations: x = {}, delta = {delta}",
        config.max_iters,
        current.x,
    );
    Err(Error::NonConvergence {
        iters: config.max_iters,
        x: current.x,
        delta,
    })
}

/// Evaluates `f` at `x`, rejecting non-finite values.
fn evaluate<F: Function + ?Sized>(f: &F, x: f64) -> Result<Sample, Error> {
    let sample = Sample::of(f, x);
    if !sample.is_finite() {
        return Err(Error::NonFiniteValue { x, value: sample.y });
    }
    Ok(sample)
}

/// Performs one Newton update from `from`, returning the slope and new `x`.
fn update<F: Function + ?Sized>(
    f: &F,
    from: Sample,
    step: f64,
    difference: Difference,
    min_slope: f64,
) -> Result<(f64, f64), Error> {
    let slope = difference.estimate(f, from.x, step);
    if !slope.is_finite() {
        return Err(Error::NonFiniteIterate { x: from.x, slope });
    }

    #[allow(clippy::float_cmp)]
    if slope == 0.0 || slope.abs() < min_slope {
        return Err(Error::DerivativeZero { x: from.x, slope });
    }

    let next = from.x - from.y / slope;
    if !next.is_finite() {
        return Err(Error::NonFiniteIterate { x: from.x, slope });
    }
    Ok((slope, next))
}
