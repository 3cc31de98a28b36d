//! # Graph Spec Orchestrator
//!
//! [`InferredGraphSpec`] holds one value per axis. The orchestrator builds a
//! single [`GraphFacts`] cache for the call, runs every computer once against
//! it and assembles the record. Computers never read each other's results,
//! so the order of the field list below carries no meaning.
//!
//! [`PartialGraphSpec`] mirrors the record with every field optional; it is
//! the query shape for [`crate::predicates::has_graph_spec`].

use crate::axis::AxisKind;
use crate::compute::{
    advanced, basic, forbidden, geometric, metadata, network, paths, structural,
};
use crate::kernel::{ComputeBudget, GraphFacts};
use crate::policy::{ComputePolicy, PolicyOverride};
use crate::types::{Graph, GraphSpecError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An axis type that occupies exactly one field of [`InferredGraphSpec`].
pub trait AxisField: AxisKind + PartialEq + Sized {
    /// Field name in the spec record.
    const FIELD: &'static str;

    /// Borrow this axis out of a spec.
    fn project(spec: &InferredGraphSpec) -> &Self;
}

macro_rules! graph_spec {
    ( $( $field:ident : $ty:ty = $computer:path ),+ $(,)? ) => {
        /// Every axis inferred for one graph.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct InferredGraphSpec {
            $( pub $field: $ty, )+
        }

        /// Any subset of axes, for partial matching.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct PartialGraphSpec {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        /// Field names of [`InferredGraphSpec`], in declaration order.
        pub const AXES: &[&str] = &[ $( stringify!($field) ),+ ];

        /// Every kind string the named axis can produce.
        #[must_use]
        pub fn declared_kinds(axis: &str) -> Option<&'static [&'static str]> {
            match axis {
                $( stringify!($field) => Some(<$ty as AxisKind>::KINDS), )+
                _ => None,
            }
        }

        impl InferredGraphSpec {
            fn assemble(facts: &GraphFacts<'_>) -> Self {
                Self {
                    $(
                        $field: {
                            let value = $computer(facts);
                            tracing::trace!(axis = stringify!($field), kind = value.kind(), "axis inferred");
                            value
                        },
                    )+
                }
            }

            /// `(axis, kind)` for every axis, in declaration order.
            #[must_use]
            pub fn kinds(&self) -> Vec<(&'static str, &'static str)> {
                vec![ $( (stringify!($field), self.$field.kind()) ),+ ]
            }

            /// Kind string of the named axis.
            #[must_use]
            pub fn kind_of(&self, axis: &str) -> Option<&'static str> {
                match axis {
                    $( stringify!($field) => Some(self.$field.kind()), )+
                    _ => None,
                }
            }
        }

        impl PartialGraphSpec {
            /// Every present field equals the spec's, payloads included.
            #[must_use]
            pub fn matches(&self, spec: &InferredGraphSpec) -> bool {
                $( self.$field.as_ref().is_none_or(|expected| *expected == spec.$field) )&&+
            }
        }

        $(
            impl AxisField for $ty {
                const FIELD: &'static str = stringify!($field);

                fn project(spec: &InferredGraphSpec) -> &Self {
                    &spec.$field
                }
            }
        )+
    };
}

graph_spec! {
    // core properties
    cardinality: basic::Cardinality = basic::cardinality,
    directionality: basic::Directionality = basic::directionality,
    edge_arity: basic::EdgeArity = basic::edge_arity,
    edge_multiplicity: basic::EdgeMultiplicity = basic::edge_multiplicity,
    self_loops: basic::SelfLoops = basic::self_loops,
    weighting: basic::Weighting = basic::weighting,
    signedness: basic::Signedness = basic::signedness,
    uncertainty: basic::Uncertainty = basic::uncertainty,
    vertex_data: basic::VertexData = basic::vertex_data,
    edge_data: basic::EdgeData = basic::edge_data,
    schema: basic::Schema = basic::schema,

    // structure
    connectivity: structural::Connectivity = structural::connectivity,
    cycles: structural::Cycles = structural::cycles,
    degree_constraint: structural::DegreeConstraint = structural::degree_constraint,
    completeness: structural::Completeness = structural::completeness,
    partiteness: structural::Partiteness = structural::partiteness,
    density: structural::Density = structural::density,

    // graph classes
    chordality: advanced::Chordality = advanced::chordal,
    perfection: advanced::Perfection = advanced::perfect,
    split: advanced::Split = advanced::split,
    cograph: advanced::Cograph = advanced::cograph,
    threshold: advanced::Threshold = advanced::threshold,
    comparability: advanced::Comparability = advanced::comparability,
    interval: advanced::Interval = advanced::interval,
    claw_free: advanced::ClawFree = advanced::claw_free,
    line_graph: advanced::LineGraph = advanced::line_graph,
    cubic: advanced::Cubic = advanced::cubic,
    regularity: advanced::Regularity = advanced::regularity,
    strongly_regular: advanced::StronglyRegular = advanced::strongly_regular,
    self_complementary: advanced::SelfComplementary = advanced::self_complementary,
    vertex_transitive: advanced::VertexTransitive = advanced::vertex_transitive,
    complete_bipartite: advanced::CompleteBipartite = advanced::complete_bipartite,

    // forbidden subgraphs
    p5_free: forbidden::P5Free = forbidden::p5_free,
    c5_free: forbidden::C5Free = forbidden::c5_free,
    bull_free: forbidden::BullFree = forbidden::bull_free,
    gem_free: forbidden::GemFree = forbidden::gem_free,
    at_free: forbidden::AtFree = forbidden::at_free,
    hh_free: forbidden::HhFree = forbidden::hh_free,
    weakly_chordal: forbidden::WeaklyChordal = forbidden::weakly_chordal,
    distance_hereditary: forbidden::DistanceHereditary = forbidden::distance_hereditary,
    modular: forbidden::Modular = forbidden::modular,
    ptolemaic: forbidden::Ptolemaic = forbidden::ptolemaic,
    quasi_line: forbidden::QuasiLine = forbidden::quasi_line,

    // intersection and probe classes
    planarity: geometric::Planarity = geometric::planar,
    circular_arc: geometric::CircularArc = geometric::circular_arc,
    proper_circular_arc: geometric::ProperCircularArc = geometric::proper_circular_arc,
    probe_chordal: geometric::ProbeChordal = geometric::probe_chordal,
    probe_interval: geometric::ProbeInterval = geometric::probe_interval,

    // spanning paths
    hamiltonicity: paths::Hamiltonicity = paths::hamiltonian,
    traceability: paths::Traceability = paths::traceable,

    // network statistics
    scale_free: network::ScaleFree = network::scale_free,
    small_world: network::SmallWorld = network::small_world,
    community_structure: network::CommunityStructure = network::community_structure,

    // metadata
    embedding: metadata::Embedding = metadata::embedding,
    rooting: metadata::Rooting = metadata::rooting,
    temporal: metadata::Temporal = metadata::temporal,
    layering: metadata::Layering = metadata::layering,
    edge_ordering: metadata::EdgeOrdering = metadata::edge_ordering,
    ports: metadata::Ports = metadata::ports,
    observability: metadata::Observability = metadata::observability,
    operational: metadata::Operational = metadata::operational,
    measure: metadata::Measure = metadata::measure,
}

impl InferredGraphSpec {
    /// The spec as a JSON value; each axis is `{"kind": ..., ...payload}`.
    pub fn to_json(&self) -> Result<serde_json::Value, GraphSpecError> {
        serde_json::to_value(self).map_err(|e| GraphSpecError::SerializationError(e.to_string()))
    }
}

// =============================================================================
// ORCHESTRATOR
// =============================================================================

/// Infer every axis, merging `overrides` over the default policy.
#[must_use]
pub fn compute_graph_spec(graph: &Graph, overrides: Option<&PolicyOverride>) -> InferredGraphSpec {
    run(graph, policy_for(overrides), ComputeBudget::unlimited())
}

/// As [`compute_graph_spec`], but searches still running after `limit`
/// abstain instead of finishing.
#[must_use]
pub fn compute_graph_spec_within(
    graph: &Graph,
    overrides: Option<&PolicyOverride>,
    limit: Duration,
) -> InferredGraphSpec {
    run(graph, policy_for(overrides), ComputeBudget::within(limit))
}

/// Infer every axis under a complete policy, e.g. one loaded from TOML.
#[must_use]
pub fn compute_graph_spec_with_policy(graph: &Graph, policy: &ComputePolicy) -> InferredGraphSpec {
    run(graph, policy.clone(), ComputeBudget::unlimited())
}

/// Validate the graph, then infer every axis.
pub fn try_compute_graph_spec(
    graph: &Graph,
    overrides: Option<&PolicyOverride>,
) -> Result<InferredGraphSpec, GraphSpecError> {
    graph.validate()?;
    Ok(compute_graph_spec(graph, overrides))
}

fn policy_for(overrides: Option<&PolicyOverride>) -> ComputePolicy {
    overrides.map(ComputePolicy::merged).unwrap_or_default()
}

fn run(graph: &Graph, policy: ComputePolicy, budget: ComputeBudget) -> InferredGraphSpec {
    let span = tracing::debug_span!(
        "compute_graph_spec",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    let _enter = span.enter();

    let facts = GraphFacts::with_budget(graph, policy, budget);
    let spec = InferredGraphSpec::assemble(&facts);
    tracing::debug!(axes = AXES.len(), "graph spec inferred");
    spec
}

// =============================================================================
// TESTS
// =============================================================================
