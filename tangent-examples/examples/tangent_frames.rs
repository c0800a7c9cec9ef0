//! Emits the geometry of every Newton update as JSON lines, one frame per
//! update, for an external renderer to draw.
//!
//! Each frame holds the tangent segment at the previous guess, the new guess
//! on the x axis, the dashed guide lines to the curve, and the labels.

use serde_json::json;
use tangent_examples::{INITIAL_GUESS, config, curve};
use tangent_solve::newton;

/// Length of each drawn tangent segment, in data units.
const TANGENT_LENGTH: f64 = 20.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Warn)?;

    let trace = newton::iterate(&curve, INITIAL_GUESS, &config())?;

    let initial = trace.initial();
    println!(
        "{}",
        json!({
            "label": ["x_0", "f(x_0)"],
            "point": initial.point(),
            "v_line": [initial.axis_foot(), initial.point()],
            "h_line": [initial.point(), initial.axis_level()],
        })
    );

    for step in trace.steps() {
        let to = step.to;
        println!(
            "{}",
            json!({
                "iter": step.iter,
                "label": [step.x_label(), step.y_label()],
                "tangent": step.tangent().segment(TANGENT_LENGTH),
                "intercept": to.axis_foot(),
                "point": to.point(),
                "v_line": [to.axis_foot(), to.point()],
                "h_line": [to.point(), to.axis_level()],
            })
        );
    }

    println!("{}", serde_json::to_string(&trace)?);
    Ok(())
}
