use crate::maze::CellId;

use super::TraceEntry;

/// Reconstructs the unique start-to-goal path from a discovery trace.
///
/// Returns the path goal-first: `[goal, .., start]`. Callers wanting
/// start-first reverse it.
///
/// The scan walks the trace backward once, each time taking the most recent
/// unscanned entry whose child is the cell currently looked for. A cell can
/// appear as a child under several parents (it is pushed onto the worklist by
/// every open neighbor that gets visited, even after the cell itself was
/// visited); the most recent entry at or before the child's own discovery
/// still names a real passable edge, so the walk only moves along tree edges
/// and each hop was traced strictly earlier, which forces it back to `start`.
///
/// The degenerate `start == goal` yields `[start]` without scanning.
///
/// # Panics
/// If the trace does not lead from `goal` back to `start`. Traces produced by
/// a completed search or a finished manual session always do; anything else
/// is a contract violation.
pub fn reconstruct_path(trace: &[TraceEntry], start: CellId, goal: CellId) -> Vec<CellId> {
    let mut path = vec![goal];
    if start == goal {
        return path;
    }

    let mut looking_for = goal;
    for &(parent, child) in trace.iter().rev() {
        if child == looking_for {
            path.push(parent);
            if parent == start {
                return path;
            }
            looking_for = parent;
        }
    }
    panic!("parent-trace does not connect cell {goal} back to cell {start}");
}
