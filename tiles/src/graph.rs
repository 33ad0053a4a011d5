//! `TileGraph`: the 8-puzzle as an implicit state graph.

use wayfind_engine::contract::StateGraph;
use wayfind_engine::edge::Edge;

use crate::board::{Move, TileBoard};

/// The 8-puzzle state space, rooted at a given start position.
///
/// Edges are the legal blank moves (cost 1 each), generated lazily in the
/// fixed [`Move::ALL`] order so traversal tie-breaks are reproducible.
/// The goal is the canonical solved position.
pub struct TileGraph {
    start: TileBoard,
    goal: TileBoard,
}

impl TileGraph {
    /// A graph rooted at `start`, targeting the solved position.
    #[must_use]
    pub fn new(start: TileBoard) -> Self {
        Self {
            start,
            goal: TileBoard::solved(),
        }
    }

    /// The start position.
    #[must_use]
    pub fn start_board(&self) -> &TileBoard {
        &self.start
    }
}

impl StateGraph for TileGraph {
    type State = TileBoard;

    fn start(&self) -> TileBoard {
        self.start
    }

    fn is_goal(&self, state: &TileBoard) -> bool {
        *state == self.goal
    }

    fn outgoing_edges(&self, state: &TileBoard) -> Box<dyn Iterator<Item = Edge<TileBoard>> + '_> {
        let tail = *state;
        Box::new(Move::ALL.into_iter().filter_map(move |mv| {
            tail.slide(mv).map(|(head, tile)| {
                let label = format!("slide {tile} {}", mv.tile_direction());
                Edge::new(tail, head, label, 1)
            })
        }))
    }

    fn estimated_cost_to_goal(&self, state: &TileBoard) -> u64 {
        state.manhattan_to_solved()
    }
}
