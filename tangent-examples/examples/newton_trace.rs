//! Walks Newton's method over `1 - x^2 + 2^x` from `x0 = 0.9`, printing each
//! update the way the classic animation narrates it.
//!
//! Run with `RUST_LOG=trace` to see the solver's own per-iteration logging.

use tangent_examples::{INITIAL_GUESS, config, curve};
use tangent_solve::newton::{self, Action, Event};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_env()?;

    let config = config();

    println!("{:>4}  {:>12}  {:>12}  {:>12}", "i", "x_old", "x_new", "f(x_new)");
    let observer = |event: &Event<'_>| {
        let step = event.step;
        let marker = if event.is_within(config.tolerance) { "*" } else { "" };
        println!(
            "{:>4}  {:>12.6}  {:>12.6}  {:>12.6} {marker}",
            step.iter, step.from.x, step.to.x, step.to.y
        );
        None::<Action>
    };

    let trace = newton::iterate_observed(&curve, INITIAL_GUESS, &config, observer)?;
    let root = trace.root();
    log::info!(
        "root x = {:.6} with f(x) = {:.3e} after {} iterations",
        root.x,
        root.y,
        trace.iters()
    );

    Ok(())
}
