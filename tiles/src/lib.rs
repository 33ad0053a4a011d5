//! Wayfind Tiles: the 8-puzzle world for the wayfind engine.
//!
//! This crate is a concrete state-space model: it implements the engine's
//! [`wayfind_engine::contract::StateGraph`] contract for the classic 3×3
//! sliding-tile puzzle and packages solve runs as deterministic artifacts.
//! It contains no search logic of its own; traversal is entirely the
//! engine's concern.
//!
//! # Key types
//!
//! - [`board::TileBoard`] — validated 3×3 permutation state, blank cached
//! - [`graph::TileGraph`] — `StateGraph` impl with a Manhattan heuristic
//! - [`solve::solve`] — first-solution A* orchestration with stats
//! - [`report::SolveReportV1`] — content-addressed JSON solve artifact

#![forbid(unsafe_code)]

pub mod board;
pub mod graph;
pub mod render;
pub mod report;
pub mod solve;
