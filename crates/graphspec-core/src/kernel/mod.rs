//! # Shared Kernel
//!
//! Algorithms and cached facts shared by every axis computer.
//!
//! - `algorithms`: adjacency, connectivity, Kahn, 2-colouring, MCS chordality,
//!   holes, comparability, asteroidal triples, cographs
//! - `facts`: the call-scoped [`GraphFacts`] cache and [`ComputeBudget`]
//! - `pattern`: induced small-pattern matching

pub mod algorithms;
pub mod facts;
pub mod pattern;

pub use algorithms::{Adjacency, Components, UnionFind};
pub use facts::{ComputeBudget, EdgeCensus, GraphFacts};
pub use pattern::{Pattern, contains_induced};
