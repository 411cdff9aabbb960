//! Plain-text summary of a finished run.

use crate::simulation::events::{Event, SimulationOutput};
use crate::simulation::states::{NVec2, PointObject, StepPosition};

fn fmt_vec(v: NVec2) -> String {
    format!("({:?}, {:?})", v.x, v.y)
}

fn fmt_event(event: &Event) -> String {
    let names: Vec<String> = event.indexes().iter().map(|i| format!("n={}", i)).collect();
    format!("{} at k={}", names.join(", "), event.step())
}

/// Start and end position of every point object followed by the event lists
///
/// The close call section is only written when there is at least one.
pub fn generate_report(output: &SimulationOutput, points: &[PointObject]) -> String {
    let start = output.simulation_steps.first();
    let mut report = String::from("Objects:\n");

    for (i, point) in points.iter().enumerate() {
        let start_pos = match start.and_then(|s| s.get(i)) {
            Some(StepPosition::Active(p)) => fmt_vec(*p),
            _ => String::from("(retired)"),
        };
        report.push_str(&format!(
            "n={}, start position = {}, end position = {}\n",
            i,
            start_pos,
            fmt_vec(point.position())
        ));
    }

    report.push_str("\nCollisions:\n");
    for collision in &output.collisions {
        report.push_str(&fmt_event(collision));
        report.push('\n');
    }

    if !output.close_calls.is_empty() {
        report.push_str("\nClose calls:\n");
        for close_call in &output.close_calls {
            report.push_str(&fmt_event(close_call));
            report.push('\n');
        }
    }

    report
}
