//! Action-transcript rendering for solution paths.
//!
//! Pure string producers; printing is left to binaries.

use wayfind_engine::path::Path;

/// Message for the empty-solution case.
pub const NO_SOLUTION_MESSAGE: &str = "There is no solution!";

/// Render a solution as an action transcript.
///
/// One indented line per action label (the sentinel edge is skipped),
/// then the total cost in moves:
///
/// ```text
/// Actions:
///   slide 4 down
///   slide 1 right
///
/// Total cost: 2 moves.
/// ```
#[must_use]
pub fn action_transcript<S>(path: &Path<S>) -> String {
    let mut lines = String::from("Actions:\n");
    for label in path.action_labels() {
        lines.push_str("  ");
        lines.push_str(label);
        lines.push('\n');
    }
    format!("{lines}\nTotal cost: {} moves.", path.total_cost())
}
