//! # Metadata Axes
//!
//! Axes driven by policy-named attributes: spatial embedding, roots,
//! timestamps, layers, edge order, ports, observability, and the operational
//! and measure readings of the graph.
//!
//! Attribute lookups go through the typed accessors below; computers never
//! index an attribute bag with a literal key.

use crate::axis::define_axis;
use crate::compute::basic::has_probabilities;
use crate::kernel::GraphFacts;
use crate::policy::ComputePolicy;
use crate::types::{AttrValue, Attrs, Edge, Vertex, VertexId};
use std::collections::BTreeSet;

// =============================================================================
// TYPED ACCESSORS
// =============================================================================

/// Numeric coordinate list under the policy `position` key.
#[must_use]
pub fn position(vertex: &Vertex, policy: &ComputePolicy) -> Option<Vec<f64>> {
    vertex.attrs.get(&policy.position)?.as_number_list()
}

/// The policy `root` key is `true`.
#[must_use]
pub fn is_root(vertex: &Vertex, policy: &ComputePolicy) -> bool {
    flag(&vertex.attrs, &policy.root) == Some(true)
}

/// Numeric timestamp under the policy `time` key.
#[must_use]
pub fn timestamp(attrs: &Attrs, policy: &ComputePolicy) -> Option<f64> {
    attrs.get(&policy.time)?.as_f64()
}

/// Layer tag under the policy `layer` key, as a grouping key.
#[must_use]
pub fn layer_key(attrs: &Attrs, policy: &ComputePolicy) -> Option<String> {
    attrs.get(&policy.layer)?.group_key()
}

/// Ordering index under the policy `edge_order` key.
#[must_use]
pub fn edge_order(edge: &Edge, policy: &ComputePolicy) -> Option<f64> {
    edge.attrs.get(&policy.edge_order)?.as_f64()
}

/// Port count: the length of a port list, or a non-negative number.
#[must_use]
pub fn port_count(vertex: &Vertex, policy: &ComputePolicy) -> Option<usize> {
    match vertex.attrs.get(&policy.ports)? {
        AttrValue::List(ports) => Some(ports.len()),
        AttrValue::Number(n) if n.is_finite() && *n >= 0.0 => Some(n.round() as usize),
        _ => None,
    }
}

/// Edge existence probability: the record field, else the policy
/// `probability` attribute.
#[must_use]
pub fn probability(edge: &Edge, policy: &ComputePolicy) -> Option<f64> {
    edge.probability.or_else(|| edge.attrs.get(&policy.probability)?.as_f64())
}

/// Numeric weight vector under the policy `weight_vector` key.
#[must_use]
pub fn weight_vector(edge: &Edge, policy: &ComputePolicy) -> Option<Vec<f64>> {
    edge.attrs.get(&policy.weight_vector)?.as_number_list()
}

/// The policy `probe` key is `false`.
#[must_use]
pub fn is_non_probe(vertex: &Vertex, policy: &ComputePolicy) -> bool {
    flag(&vertex.attrs, &policy.probe) == Some(false)
}

/// The policy `observed` key is `false`.
#[must_use]
pub fn is_hidden(attrs: &Attrs, policy: &ComputePolicy) -> bool {
    flag(attrs, &policy.observed) == Some(false)
}

fn flag(attrs: &Attrs, key: &str) -> Option<bool> {
    attrs.get(key)?.as_bool()
}

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// Vertex coordinates.
    Embedding {
        Abstract => "abstract",
        Spatial { dims: usize } => "spatial",
    }
}

define_axis! {
    /// Designated root vertices.
    Rooting {
        Unrooted => "unrooted",
        Rooted { root: VertexId } => "rooted",
        MultiRooted { count: usize } => "multi_rooted",
    }
}

define_axis! {
    /// Timestamped vertices or edges.
    Temporal {
        Static => "static",
        Temporal { stamped_vertices: usize, stamped_edges: usize } => "temporal",
    }
}

define_axis! {
    /// Distinct layer tags.
    Layering {
        SingleLayer => "single_layer",
        MultiLayer { layers: usize } => "multi_layer",
    }
}

define_axis! {
    /// Edges carrying an ordering index.
    EdgeOrdering {
        Unordered => "unordered",
        Ordered => "ordered",
    }
}

define_axis! {
    /// Vertices exposing ports.
    Ports {
        NoPorts => "no_ports",
        Ported { max_ports: usize } => "ported",
    }
}

define_axis! {
    /// Elements marked unobserved.
    Observability {
        FullyObserved => "fully_observed",
        PartiallyObserved { hidden: usize } => "partially_observed",
    }
}

define_axis! {
    /// Operational reading of a directed graph.
    Operational {
        Structural => "structural",
        Dataflow => "dataflow",
        TransitionSystem => "transition_system",
    }
}

define_axis! {
    /// What edge numbers measure.
    Measure {
        Unmeasured => "unmeasured",
        Cost => "cost",
        SignedMeasure => "signed_measure",
        Probability => "probability",
    }
}

// =============================================================================
// COMPUTERS
// =============================================================================

/// Every vertex has a position of one common, non-zero length.
pub fn embedding(facts: &GraphFacts<'_>) -> Embedding {
    let policy = facts.policy();
    let mut dims: Option<usize> = None;
    for vertex in facts.graph().vertices() {
        let Some(len) = position(vertex, policy).map(|p| p.len()) else {
            return Embedding::Abstract;
        };
        if len == 0 || dims.is_some_and(|d| d != len) {
            return Embedding::Abstract;
        }
        dims = Some(len);
    }
    match dims {
        Some(dims) => Embedding::Spatial { dims },
        None => Embedding::Abstract,
    }
}

/// Vertices whose root flag is `true`.
pub fn rooting(facts: &GraphFacts<'_>) -> Rooting {
    let policy = facts.policy();
    let roots: Vec<&Vertex> = facts
        .graph()
        .vertices()
        .iter()
        .filter(|v| is_root(v, policy))
        .collect();
    match roots.as_slice() {
        [] => Rooting::Unrooted,
        [root] => Rooting::Rooted {
            root: root.id.clone(),
        },
        many => Rooting::MultiRooted { count: many.len() },
    }
}

/// Counts of timestamped vertices and edges.
pub fn temporal(facts: &GraphFacts<'_>) -> Temporal {
    let policy = facts.policy();
    let graph = facts.graph();
    let stamped_vertices = graph
        .vertices()
        .iter()
        .filter(|v| timestamp(&v.attrs, policy).is_some())
        .count();
    let stamped_edges = graph
        .edges()
        .iter()
        .filter(|e| timestamp(&e.attrs, policy).is_some())
        .count();

    if stamped_vertices == 0 && stamped_edges == 0 {
        Temporal::Static
    } else {
        Temporal::Temporal {
            stamped_vertices,
            stamped_edges,
        }
    }
}

/// Two or more distinct layer tags.
pub fn layering(facts: &GraphFacts<'_>) -> Layering {
    let policy = facts.policy();
    let layers: BTreeSet<String> = facts
        .graph()
        .vertices()
        .iter()
        .filter_map(|v| layer_key(&v.attrs, policy))
        .collect();
    if layers.len() >= 2 {
        Layering::MultiLayer {
            layers: layers.len(),
        }
    } else {
        Layering::SingleLayer
    }
}

/// Any edge carries an ordering index.
pub fn edge_ordering(facts: &GraphFacts<'_>) -> EdgeOrdering {
    let policy = facts.policy();
    if facts
        .graph()
        .edges()
        .iter()
        .any(|e| edge_order(e, policy).is_some())
    {
        EdgeOrdering::Ordered
    } else {
        EdgeOrdering::Unordered
    }
}

/// Largest port count across vertices.
pub fn ports(facts: &GraphFacts<'_>) -> Ports {
    let policy = facts.policy();
    let max_ports = facts
        .graph()
        .vertices()
        .iter()
        .filter_map(|v| port_count(v, policy))
        .max()
        .unwrap_or(0);
    if max_ports == 0 {
        Ports::NoPorts
    } else {
        Ports::Ported { max_ports }
    }
}

/// Vertices and edges whose observed flag is `false`.
pub fn observability(facts: &GraphFacts<'_>) -> Observability {
    let policy = facts.policy();
    let graph = facts.graph();
    let hidden = graph
        .vertices()
        .iter()
        .filter(|v| is_hidden(&v.attrs, policy))
        .count()
        + graph
            .edges()
            .iter()
            .filter(|e| is_hidden(&e.attrs, policy))
            .count();
    if hidden == 0 {
        Observability::FullyObserved
    } else {
        Observability::PartiallyObserved { hidden }
    }
}

/// Directed with ports → dataflow; directed with labelled edges →
/// transition system.
pub fn operational(facts: &GraphFacts<'_>) -> Operational {
    let census = facts.census();
    if census.directed == 0 || census.undirected > 0 {
        return Operational::Structural;
    }

    let policy = facts.policy();
    let graph = facts.graph();
    if graph
        .vertices()
        .iter()
        .any(|v| port_count(v, policy).is_some_and(|p| p > 0))
    {
        Operational::Dataflow
    } else if graph.edges().iter().any(|e| e.label.is_some()) {
        Operational::TransitionSystem
    } else {
        Operational::Structural
    }
}

/// Probabilities, then negative weights, then non-negative weights.
pub fn measure(facts: &GraphFacts<'_>) -> Measure {
    let edges = facts.graph().edges();
    if has_probabilities(facts) {
        Measure::Probability
    } else if edges.iter().any(|e| e.weight.is_some_and(|w| w < 0.0)) {
        Measure::SignedMeasure
    } else if edges.iter().any(|e| e.weight.is_some()) {
        Measure::Cost
    } else {
        Measure::Unmeasured
    }
}

// =============================================================================
// TESTS
// =============================================================================
