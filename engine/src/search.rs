//! The strategy-blind search driver.

use crate::contract::StateGraph;
use crate::frontier::Frontier;
use crate::path::Path;

/// Run a graph search, returning a lazy, resumable producer of solutions.
///
/// The frontier is seeded with the one-edge sentinel path at
/// `graph.start()`. Traversal order, and with it which search this is,
/// is decided entirely by the frontier; the driver only pulls, extends,
/// and tests goals.
///
/// Absence of a solution is represented by the iterator being empty, not
/// by an error. An unreachable goal in a finite reachable component simply
/// exhausts the sequence; in an unbounded space it is the caller's
/// responsibility to stop pulling.
pub fn graph_search<G, F>(graph: &G, mut frontier: F) -> Solutions<'_, G, F>
where
    G: StateGraph,
    F: Frontier<G::State>,
{
    frontier.add(Path::start(graph.start()));
    Solutions { graph, frontier }
}

/// Iterator over goal paths, in the frontier's order.
///
/// Each pull resumes the same traversal: the frontier's visited set,
/// collection contents, and counters persist between pulls, so the next
/// pull finds the *next*-best goal path rather than recomputing from
/// scratch. Dropping the iterator abandons the traversal; no cleanup is
/// required since no external resources are held.
pub struct Solutions<'g, G: StateGraph, F> {
    graph: &'g G,
    frontier: F,
}

impl<G: StateGraph, F> Solutions<'_, G, F> {
    /// The frontier, for post-hoc instrumentation reads.
    #[must_use]
    pub fn frontier(&self) -> &F {
        &self.frontier
    }
}

impl<G, F> Iterator for Solutions<'_, G, F>
where
    G: StateGraph,
    F: Frontier<G::State>,
{
    type Item = Path<G::State>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.frontier.next_path() {
            let end = path.end().clone();
            // Expansion happens whether or not this path is a goal: further
            // solutions may lie beyond it.
            for edge in self.graph.outgoing_edges(&end) {
                self.frontier.add(path.extend(edge));
            }
            if self.graph.is_goal(&end) {
                return Some(path);
            }
        }
        None
    }
}
