//! Wayfind Engine: a generic, pluggable graph-search core.
//!
//! The engine separates three concerns so that each can vary independently:
//!
//! - the **driver** ([`search::graph_search`]) — a strategy-blind loop that
//!   pulls paths from a frontier and extends them with outgoing edges
//! - the **frontier policy** ([`frontier::Frontier`]) — the data structure
//!   deciding which path is explored next ([`frontier::AStarFrontier`],
//!   [`frontier::BreadthFirstFrontier`])
//! - the **graph model** ([`contract::StateGraph`]) — an implicit graph that
//!   lazily generates successor edges on demand
//!
//! Swapping the frontier implementation changes the traversal strategy
//! (A*, breadth-first, ...) without the driver or the graph knowing.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_engine  ←  wayfind_tiles  ←  solve-tests / wayfind-benchmarks
//! (generic core)     (8-puzzle world)   (acceptance, benches)
//! ```
//!
//! # Key types
//!
//! - [`edge::Edge`] — labeled, costed transition between two states
//! - [`path::Path`] — immutable walk from the start state, prefix-sharing
//! - [`contract::StateGraph`] — implicit-graph capability contract
//! - [`frontier::Frontier`] — admission + ordered lazy yield contract
//! - [`search::Solutions`] — resumable iterator over goal paths

#![forbid(unsafe_code)]

pub mod contract;
pub mod edge;
pub mod frontier;
pub mod path;
pub mod search;
