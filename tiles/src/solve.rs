//! First-solution orchestration: wire a tile graph into the engine.

use wayfind_engine::frontier::AStarFrontier;
use wayfind_engine::path::Path;
use wayfind_engine::search::graph_search;

use crate::board::TileBoard;
use crate::graph::TileGraph;

/// Frontier accounting captured after a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// States finalized (popped and expanded) during the run.
    pub expansions: u64,
    /// Paths the frontier accepted over the run.
    pub admitted: u64,
    /// Paths discarded through the visited set, at add or at pop.
    pub suppressed: u64,
    /// High-water mark of the frontier's queued entry count.
    pub frontier_high_water: u64,
}

/// Result of a solve run: the best solution, if any, plus stats.
#[derive(Debug)]
pub struct SolveOutcome {
    /// Minimum-cost solution path, or `None` when the goal is unreachable.
    pub solution: Option<Path<TileBoard>>,
    /// Frontier accounting for the run.
    pub stats: SolveStats,
}

/// Run A* over `graph` and take the first (minimum-cost) solution.
///
/// An unsolvable position exhausts the reachable half of the permutation
/// space and returns `solution: None`; that is an answer, not an error.
#[must_use]
pub fn solve(graph: &TileGraph) -> SolveOutcome {
    let mut solutions = graph_search(graph, AStarFrontier::new(graph));
    let solution = solutions.next();
    let frontier = solutions.frontier();
    SolveOutcome {
        solution,
        stats: SolveStats {
            expansions: frontier.visited_count(),
            admitted: frontier.admitted(),
            suppressed: frontier.suppressed(),
            frontier_high_water: frontier.high_water(),
        },
    }
}
