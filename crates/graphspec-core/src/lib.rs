//! # graphspec-core
//!
//! The graph-property inference engine for graphspec.
//!
//! Given an abstract graph (vertices, edges, optional weights, labels and
//! metadata) this crate classifies it along a fixed vocabulary of axes:
//! direction, cycles, connectivity, chordality, perfection, planarity,
//! regularity, Hamiltonicity, scale-freeness and more. Each axis is a closed
//! sum type; [`compute_graph_spec`] assembles all of them into one
//! [`InferredGraphSpec`].
//!
//! ## Architectural Constraints
//!
//! - Every computer is total: unmet preconditions, size guards and expired
//!   deadlines map to a fallback variant, never to an error or a panic
//! - Computers are pure functions of (graph, policy) and never read each
//!   other's results
//! - Exponential searches sit behind named guards in [`primitives`]
//! - NO async, NO persistence, NO network (pure Rust)
//!
//! ## Example
//!
//! ```
//! use graphspec_core::{Graph, compute_graph_spec};
//! use graphspec_core::compute::structural::DegreeConstraint;
//!
//! let triangle = Graph::builder()
//!     .vertices(["a", "b", "c"])
//!     .undirected("a", "b")
//!     .undirected("b", "c")
//!     .undirected("c", "a")
//!     .build();
//!
//! let spec = compute_graph_spec(&triangle, None);
//! assert_eq!(spec.degree_constraint, DegreeConstraint::Regular { degree: 2 });
//! assert_eq!(spec.kind_of("completeness"), Some("complete"));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod axis;
pub mod compute;
pub mod fixtures;
pub mod kernel;
pub mod policy;
pub mod predicates;
pub mod primitives;
pub mod spec;
pub mod types;

// =============================================================================
// RE-EXPORTS: Graph Model
// =============================================================================

pub use types::{
    AttrValue, Attrs, Edge, EdgeId, Graph, GraphBuilder, GraphSpecError, Sign, Vertex, VertexId,
};

// =============================================================================
// RE-EXPORTS: Policy
// =============================================================================

pub use policy::{ComputePolicy, PolicyOverride};

// =============================================================================
// RE-EXPORTS: Inference
// =============================================================================

pub use axis::AxisKind;
pub use kernel::{ComputeBudget, GraphFacts};
pub use spec::{
    AXES, AxisField, InferredGraphSpec, PartialGraphSpec, compute_graph_spec,
    compute_graph_spec_within, compute_graph_spec_with_policy, declared_kinds,
    try_compute_graph_spec,
};
