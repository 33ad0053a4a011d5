//! Immutable paths as prefix-sharing linked walks.
//!
//! A path is a non-empty sequence of edges from the start state. Extension
//! never copies the existing edges: each path holds an `Arc` link to its
//! tip, and branches produced during search share their common prefix.

use std::sync::Arc;

use crate::edge::Edge;

/// One link in the walk: the newest edge plus the walk it extends.
#[derive(Debug)]
struct Link<S> {
    edge: Edge<S>,
    parent: Option<Arc<Link<S>>>,
    /// Cost of the whole walk up to and including `edge`.
    total_cost: u64,
    /// Number of edges in the whole walk, sentinel included.
    edge_count: usize,
}

/// An ordered, non-empty, immutable sequence of edges from the start state.
///
/// Invariants:
/// - the first edge is the sentinel: `tail == head ==` the graph's start
///   state, with [`crate::edge::START_LABEL`] and cost 0
/// - every later edge's `tail` equals the previous edge's `head`
/// - extension produces a new path; existing paths are never mutated
///
/// Cloning is cheap (one `Arc` bump).
#[derive(Debug, Clone)]
pub struct Path<S> {
    tip: Arc<Link<S>>,
}

impl<S: Clone> Path<S> {
    /// The zero-length walk: just the sentinel edge at `state`.
    #[must_use]
    pub fn start(state: S) -> Self {
        Self {
            tip: Arc::new(Link {
                edge: Edge::start(state),
                parent: None,
                total_cost: 0,
                edge_count: 1,
            }),
        }
    }

    /// A new path consisting of this walk followed by `edge`.
    ///
    /// The receiver is unchanged and keeps sharing its links with the
    /// returned path.
    #[must_use]
    pub fn extend(&self, edge: Edge<S>) -> Self {
        let total_cost = self.tip.total_cost.saturating_add(edge.cost);
        Self {
            tip: Arc::new(Link {
                edge,
                parent: Some(Arc::clone(&self.tip)),
                total_cost,
                edge_count: self.tip.edge_count + 1,
            }),
        }
    }
}

impl<S> Path<S> {
    /// The path's end state: the head of its last edge.
    #[must_use]
    pub fn end(&self) -> &S {
        &self.tip.edge.head
    }

    /// The most recently appended edge.
    #[must_use]
    pub fn last_edge(&self) -> &Edge<S> {
        &self.tip.edge
    }

    /// Sum of edge costs over the whole walk.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.tip.total_cost
    }

    /// Number of edges in the walk, sentinel included. Always ≥ 1.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.tip.edge_count
    }

    /// The edges in walk order, sentinel first.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<S>> + '_ {
        let mut stack = Vec::with_capacity(self.tip.edge_count);
        let mut cursor = Some(&self.tip);
        while let Some(link) = cursor {
            stack.push(&link.edge);
            cursor = link.parent.as_ref();
        }
        stack.reverse();
        stack.into_iter()
    }

    /// The action labels in walk order, sentinel skipped.
    pub fn action_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges().skip(1).map(|e| e.label.as_str())
    }
}
