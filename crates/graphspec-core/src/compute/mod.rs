//! # Axis Computers
//!
//! One function per axis, grouped by family. Every computer takes the
//! call-scoped [`GraphFacts`] and returns one of its declared variants. None
//! of them fail: an unmet precondition, a size guard or an expired budget
//! maps to the axis fallback.

use crate::kernel::{Adjacency, GraphFacts};

pub mod advanced;
pub mod basic;
pub mod forbidden;
pub mod geometric;
pub mod metadata;
pub mod network;
pub mod paths;
pub mod structural;

/// The adjacency if the simple undirected precondition holds.
pub(crate) fn simple_adjacency<'f>(facts: &'f GraphFacts<'_>) -> Option<&'f Adjacency> {
    facts.is_simple_undirected().then(|| facts.adjacency())
}

/// Log an abstention forced by a size guard.
pub(crate) fn guard_abstains(axis: &'static str, vertices: usize, limit: usize) -> bool {
    if vertices > limit {
        tracing::debug!(axis, vertices, limit, "size guard exceeded, abstaining");
        true
    } else {
        false
    }
}
