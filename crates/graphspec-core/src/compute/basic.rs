//! # Core Properties
//!
//! Axes read straight off the vertex and edge records: size, direction,
//! arity, multiplicity, loops, weights, signs, probabilities and data shape.

use crate::axis::define_axis;
use crate::compute::metadata;
use crate::kernel::GraphFacts;
use crate::policy::ComputePolicy;
use crate::types::Attrs;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// Whether the graph has any vertices.
    Cardinality {
        Empty => "empty",
        Finite { vertices: usize, edges: usize } => "finite",
    }
}

define_axis! {
    /// Edge direction pattern.
    Directionality {
        Undirected => "undirected",
        Directed => "directed",
        /// Every arc has a distinct reverse arc.
        Bidirected => "bidirected",
        /// Every vertex is a pure source or a pure sink.
        Antidirected => "antidirected",
        Mixed => "mixed",
    }
}

define_axis! {
    /// Endpoint counts across edges.
    EdgeArity {
        Binary => "binary",
        KUniform { k: usize } => "k_uniform",
        NonUniform { max: usize } => "non_uniform",
    }
}

define_axis! {
    /// Whether two edges join the same endpoints.
    EdgeMultiplicity {
        Simple => "simple",
        Multi => "multi",
    }
}

define_axis! {
    /// Whether any edge repeats an endpoint.
    SelfLoops {
        NoLoops => "no_loops",
        Loops => "loops",
    }
}

define_axis! {
    /// Scalar or vector edge weights.
    Weighting {
        Unweighted => "unweighted",
        Weighted => "weighted",
        VectorWeighted { dims: usize } => "vector_weighted",
    }
}

define_axis! {
    /// Whether edges carry signs.
    Signedness {
        Unsigned => "unsigned",
        Signed => "signed",
    }
}

define_axis! {
    /// Whether edges carry existence probabilities.
    Uncertainty {
        Deterministic => "deterministic",
        Probabilistic => "probabilistic",
    }
}

define_axis! {
    /// Shape of the data attached to vertices.
    VertexData {
        Unlabelled => "unlabelled",
        Labelled => "labelled",
        Attributed => "attributed",
    }
}

define_axis! {
    /// Shape of the data attached to edges.
    EdgeData {
        Unlabelled => "unlabelled",
        Labelled => "labelled",
        Attributed => "attributed",
    }
}

define_axis! {
    /// Whether all vertices (and all edges) share one attribute key set.
    Schema {
        Homogeneous => "homogeneous",
        Heterogeneous => "heterogeneous",
    }
}

// =============================================================================
// COMPUTERS
// =============================================================================

/// `empty` iff there are no vertices.
pub fn cardinality(facts: &GraphFacts<'_>) -> Cardinality {
    let graph = facts.graph();
    if graph.vertex_count() == 0 {
        Cardinality::Empty
    } else {
        Cardinality::Finite {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        }
    }
}

/// Classify the direction pattern of the edge list.
pub fn directionality(facts: &GraphFacts<'_>) -> Directionality {
    let census = facts.census();
    if census.directed == 0 {
        return Directionality::Undirected;
    }
    if census.undirected > 0 {
        return Directionality::Mixed;
    }
    if !facts.all_binary() {
        return Directionality::Directed;
    }

    let arcs = facts.arcs();
    if arcs.is_empty() {
        return Directionality::Directed;
    }

    let mut multiplicity: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for &arc in arcs {
        *multiplicity.entry(arc).or_insert(0) += 1;
    }
    let bidirected = multiplicity.iter().all(|(&(u, v), &count)| {
        let reverse = multiplicity.get(&(v, u)).copied().unwrap_or(0);
        if u == v { count >= 2 } else { reverse >= 1 }
    });
    if bidirected {
        return Directionality::Bidirected;
    }

    let n = facts.vertex_count();
    let mut out_degree = vec![0usize; n];
    let mut in_degree = vec![0usize; n];
    for &(u, v) in arcs {
        out_degree[u] += 1;
        in_degree[v] += 1;
    }
    let pure = (0..n).all(|v| out_degree[v] == 0 || in_degree[v] == 0);
    let branching = (0..n).any(|v| out_degree[v] + in_degree[v] >= 2);
    if pure && branching {
        Directionality::Antidirected
    } else {
        Directionality::Directed
    }
}

/// Binary, uniform k-ary, or mixed arities. Degenerate edges are ignored.
pub fn edge_arity(facts: &GraphFacts<'_>) -> EdgeArity {
    let arities = &facts.census().arities;
    match (arities.first().copied(), arities.last().copied()) {
        (Some(lo), Some(hi)) if lo != hi => EdgeArity::NonUniform { max: hi },
        (Some(k), _) if k != 2 => EdgeArity::KUniform { k },
        _ => EdgeArity::Binary,
    }
}

/// Duplicate endpoint keys: ordered for directed binary edges, otherwise the
/// sorted endpoint multiset.
pub fn edge_multiplicity(facts: &GraphFacts<'_>) -> EdgeMultiplicity {
    if facts.census().parallel {
        EdgeMultiplicity::Multi
    } else {
        EdgeMultiplicity::Simple
    }
}

/// Binary loops and hyperedges with a repeated endpoint.
pub fn self_loops(facts: &GraphFacts<'_>) -> SelfLoops {
    if facts.census().self_loops > 0 {
        SelfLoops::Loops
    } else {
        SelfLoops::NoLoops
    }
}

/// The policy weight-vector attribute wins over the scalar weight.
pub fn weighting(facts: &GraphFacts<'_>) -> Weighting {
    let policy = facts.policy();
    let edges = facts.graph().edges();

    let dims = edges
        .iter()
        .filter_map(|edge| metadata::weight_vector(edge, policy))
        .map(|vector| vector.len())
        .filter(|&len| len > 0)
        .max();

    match dims {
        Some(dims) => Weighting::VectorWeighted { dims },
        None if edges.iter().any(|edge| edge.weight.is_some()) => Weighting::Weighted,
        None => Weighting::Unweighted,
    }
}

/// Any explicit sign or negative weight.
pub fn signedness(facts: &GraphFacts<'_>) -> Signedness {
    let signed = facts
        .graph()
        .edges()
        .iter()
        .any(|edge| edge.sign.is_some() || edge.weight.is_some_and(|w| w < 0.0));
    if signed {
        Signedness::Signed
    } else {
        Signedness::Unsigned
    }
}

/// Any edge probability, from the record field or the policy attribute.
pub fn uncertainty(facts: &GraphFacts<'_>) -> Uncertainty {
    if has_probabilities(facts) {
        Uncertainty::Probabilistic
    } else {
        Uncertainty::Deterministic
    }
}

/// Vertex data shape. Policy metadata keys do not count as data.
pub fn vertex_data(facts: &GraphFacts<'_>) -> VertexData {
    let policy = facts.policy();
    let vertices = facts.graph().vertices();
    if vertices.iter().any(|v| has_user_attrs(&v.attrs, policy)) {
        VertexData::Attributed
    } else if vertices.iter().any(|v| v.label.is_some()) {
        VertexData::Labelled
    } else {
        VertexData::Unlabelled
    }
}

/// Edge data shape. Weights, signs and probabilities have their own axes.
pub fn edge_data(facts: &GraphFacts<'_>) -> EdgeData {
    let policy = facts.policy();
    let edges = facts.graph().edges();
    if edges.iter().any(|e| has_user_attrs(&e.attrs, policy)) {
        EdgeData::Attributed
    } else if edges.iter().any(|e| e.label.is_some()) {
        EdgeData::Labelled
    } else {
        EdgeData::Unlabelled
    }
}

/// Identical non-metadata key sets across vertices, and across edges.
pub fn schema(facts: &GraphFacts<'_>) -> Schema {
    let policy = facts.policy();
    let graph = facts.graph();
    let vertex_keys = graph.vertices().iter().map(|v| user_keys(&v.attrs, policy));
    let edge_keys = graph.edges().iter().map(|e| user_keys(&e.attrs, policy));

    if all_equal(vertex_keys) && all_equal(edge_keys) {
        Schema::Homogeneous
    } else {
        Schema::Heterogeneous
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Any edge with a probability field or a numeric policy probability key.
pub(crate) fn has_probabilities(facts: &GraphFacts<'_>) -> bool {
    let policy = facts.policy();
    facts
        .graph()
        .edges()
        .iter()
        .any(|edge| metadata::probability(edge, policy).is_some())
}

fn has_user_attrs(attrs: &Attrs, policy: &ComputePolicy) -> bool {
    attrs.keys().any(|key| !policy.is_metadata_key(key))
}

fn user_keys<'a>(attrs: &'a Attrs, policy: &ComputePolicy) -> BTreeSet<&'a str> {
    attrs
        .keys()
        .map(String::as_str)
        .filter(|key| !policy.is_metadata_key(key))
        .collect()
}

fn all_equal<T: PartialEq>(mut items: impl Iterator<Item = T>) -> bool {
    match items.next() {
        Some(first) => items.all(|item| item == first),
        None => true,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Graph, Sign, Vertex};

    fn facts_of(graph: &Graph) -> GraphFacts<'_> {
        GraphFacts::with_defaults(graph)
    }

    #[test]
    fn empty_graph_is_empty() {
        let graph = Graph::default();
        assert_eq!(cardinality(&facts_of(&graph)), Cardinality::Empty);
        assert_eq!(directionality(&facts_of(&graph)), Directionality::Undirected);
        assert_eq!(edge_arity(&facts_of(&graph)), EdgeArity::Binary);
    }

    #[test]
    fn finite_counts() {
        let graph = Graph::builder().vertices(["a", "b"]).undirected("a", "b").build();
        assert_eq!(
            cardinality(&facts_of(&graph)),
            Cardinality::Finite {
                vertices: 2,
                edges: 1
            }
        );
    }

    #[test]
    fn direction_patterns() {
        let mixed = Graph::builder()
            .vertices(["a", "b", "c"])
            .undirected("a", "b")
            .directed("b", "c")
            .build();
        assert_eq!(directionality(&facts_of(&mixed)), Directionality::Mixed);

        let bidirected = Graph::builder()
            .vertices(["a", "b"])
            .directed("a", "b")
            .directed("b", "a")
            .build();
        assert_eq!(directionality(&facts_of(&bidirected)), Directionality::Bidirected);

        // a -> b <- c : every vertex a pure source or sink, b has degree 2
        let anti = Graph::builder()
            .vertices(["a", "b", "c"])
            .directed("a", "b")
            .directed("c", "b")
            .build();
        assert_eq!(directionality(&facts_of(&anti)), Directionality::Antidirected);

        let chain = Graph::builder()
            .vertices(["a", "b", "c"])
            .directed("a", "b")
            .directed("b", "c")
            .build();
        assert_eq!(directionality(&facts_of(&chain)), Directionality::Directed);

        // A single arc has no vertex of degree 2.
        let single = Graph::builder().vertices(["a", "b"]).directed("a", "b").build();
        assert_eq!(directionality(&facts_of(&single)), Directionality::Directed);
    }

    #[test]
    fn directed_loop_is_not_its_own_reverse() {
        let graph = Graph::builder().vertex("a").directed("a", "a").build();
        assert_eq!(directionality(&facts_of(&graph)), Directionality::Directed);
    }

    #[test]
    fn arity_classes() {
        let uniform = Graph::builder()
            .vertices(["a", "b", "c", "d"])
            .hyperedge(&["a", "b", "c"])
            .hyperedge(&["b", "c", "d"])
            .build();
        assert_eq!(edge_arity(&facts_of(&uniform)), EdgeArity::KUniform { k: 3 });

        let mixed = Graph::builder()
            .vertices(["a", "b", "c", "d"])
            .undirected("a", "b")
            .hyperedge(&["a", "b", "c", "d"])
            .build();
        assert_eq!(edge_arity(&facts_of(&mixed)), EdgeArity::NonUniform { max: 4 });
    }

    #[test]
    fn multiplicity_and_loops() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .undirected("a", "b")
            .undirected("b", "a")
            .undirected("a", "a")
            .build();
        let facts = facts_of(&graph);
        assert_eq!(edge_multiplicity(&facts), EdgeMultiplicity::Multi);
        assert_eq!(self_loops(&facts), SelfLoops::Loops);
    }

    #[test]
    fn weights_signs_probabilities() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c"])
            .with_edge(Edge::undirected("e0", "a", "b").with_weight(-2.0))
            .with_edge(Edge::undirected("e1", "b", "c").with_probability(0.5))
            .build();
        let facts = facts_of(&graph);
        assert_eq!(weighting(&facts), Weighting::Weighted);
        assert_eq!(signedness(&facts), Signedness::Signed);
        assert_eq!(uncertainty(&facts), Uncertainty::Probabilistic);
    }

    #[test]
    fn vector_weights_win() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .with_edge(
                Edge::undirected("e0", "a", "b")
                    .with_weight(1.0)
                    .with_attr("weights", vec![1.0, 2.0, 3.0]),
            )
            .build();
        assert_eq!(
            weighting(&facts_of(&graph)),
            Weighting::VectorWeighted { dims: 3 }
        );
    }

    #[test]
    fn explicit_sign_is_signed() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .with_edge(Edge::undirected("e0", "a", "b").with_sign(Sign::Positive))
            .build();
        assert_eq!(signedness(&facts_of(&graph)), Signedness::Signed);
    }

    #[test]
    fn metadata_keys_are_not_data() {
        let graph = Graph::builder()
            .with_vertex(Vertex::new("a").with_attr("position", vec![0.0, 1.0]))
            .with_vertex(Vertex::new("b").with_label("B"))
            .build();
        let facts = facts_of(&graph);
        assert_eq!(vertex_data(&facts), VertexData::Labelled);
        assert_eq!(schema(&facts), Schema::Homogeneous);
    }

    #[test]
    fn differing_keys_are_heterogeneous() {
        let graph = Graph::builder()
            .with_vertex(Vertex::new("a").with_attr("colour", "red"))
            .with_vertex(Vertex::new("b"))
            .build();
        let facts = facts_of(&graph);
        assert_eq!(vertex_data(&facts), VertexData::Attributed);
        assert_eq!(schema(&facts), Schema::Heterogeneous);
    }

    #[test]
    fn edge_data_shapes() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .with_edge(Edge::undirected("e0", "a", "b").with_label("knows"))
            .build();
        assert_eq!(edge_data(&facts_of(&graph)), EdgeData::Labelled);
    }
}
