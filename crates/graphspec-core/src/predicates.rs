//! # Predicates
//!
//! Boolean views over [`InferredGraphSpec`].
//!
//! The generic combinators take an already computed spec. The named
//! predicates take a graph, build one [`GraphFacts`] cache under the default
//! policy and run only the computers they read. The fast paths at the bottom
//! of the file each run a single computer.

use crate::axis::AxisKind;
use crate::compute::advanced::{
    self, ClawFree, CompleteBipartite, Cubic, Interval, LineGraph, Regularity, SelfComplementary,
    StronglyRegular, Threshold, VertexTransitive,
};
use crate::compute::basic::{
    self, Cardinality, Directionality, EdgeArity, EdgeMultiplicity, SelfLoops, Signedness, Uncertainty,
    Weighting,
};
use crate::compute::geometric::{self, Planarity};
use crate::compute::metadata::{self, Embedding, Rooting, Temporal};
use crate::compute::network::{self, ScaleFree, SmallWorld};
use crate::compute::paths::{self, Hamiltonicity, Traceability};
use crate::compute::structural::{
    self, Completeness, Connectivity, Cycles, DegreeConstraint, Density, Partiteness,
};
use crate::kernel::GraphFacts;
use crate::spec::{AxisField, InferredGraphSpec, PartialGraphSpec};
use crate::types::Graph;

// =============================================================================
// GENERIC COMBINATORS
// =============================================================================

/// The axis of `value`'s type equals `value`, payload included.
#[must_use]
pub fn axis_equals<A: AxisField>(spec: &InferredGraphSpec, value: &A) -> bool {
    A::project(spec) == value
}

/// The axis `A` has the given kind string.
#[must_use]
pub fn axis_kind_is<A: AxisField>(spec: &InferredGraphSpec, kind: &str) -> bool {
    A::project(spec).kind() == kind
}

/// Every axis present in `partial` matches the spec.
#[must_use]
pub fn has_graph_spec(spec: &InferredGraphSpec, partial: &PartialGraphSpec) -> bool {
    partial.matches(spec)
}

// =============================================================================
// NAMED PREDICATES
// =============================================================================

fn facts(graph: &Graph) -> GraphFacts<'_> {
    GraphFacts::with_defaults(graph)
}

fn directed(facts: &GraphFacts<'_>) -> bool {
    matches!(
        basic::directionality(facts),
        Directionality::Directed | Directionality::Bidirected | Directionality::Antidirected
    )
}

fn forest(facts: &GraphFacts<'_>) -> bool {
    basic::directionality(facts) == Directionality::Undirected
        && structural::cycles(facts) == Cycles::Acyclic
}

fn tree(facts: &GraphFacts<'_>) -> bool {
    forest(facts)
        && structural::connectivity(facts) == Connectivity::Connected
        && matches!(basic::cardinality(facts), Cardinality::Finite { .. })
}

fn max_degree(constraint: &DegreeConstraint) -> Option<usize> {
    match constraint {
        DegreeConstraint::Regular { degree } => Some(*degree),
        DegreeConstraint::DegreeSequence { sequence } => sequence.iter().copied().max(),
        DegreeConstraint::Unconstrained => None,
    }
}

/// Every edge is directed (including the bidirected and antidirected
/// patterns).
#[must_use]
pub fn is_directed(graph: &Graph) -> bool {
    directed(&facts(graph))
}

#[must_use]
pub fn is_undirected(graph: &Graph) -> bool {
    basic::directionality(&facts(graph)) == Directionality::Undirected
}

/// Connected, or strongly connected when directed.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    matches!(
        structural::connectivity(&facts(graph)),
        Connectivity::Connected | Connectivity::StronglyConnected
    )
}

#[must_use]
pub fn is_acyclic(graph: &Graph) -> bool {
    structural::cycles(&facts(graph)) == Cycles::Acyclic
}

/// Directed and acyclic.
#[must_use]
pub fn is_dag(graph: &Graph) -> bool {
    let facts = facts(graph);
    directed(&facts) && structural::cycles(&facts) == Cycles::Acyclic
}

/// Undirected and acyclic.
#[must_use]
pub fn is_forest(graph: &Graph) -> bool {
    forest(&facts(graph))
}

/// A connected forest with at least one vertex. Edges to undeclared
/// vertices rule it out.
#[must_use]
pub fn is_tree(graph: &Graph) -> bool {
    tree(&facts(graph))
}

/// K_{1,k}.
#[must_use]
pub fn is_star(graph: &Graph) -> bool {
    matches!(
        advanced::complete_bipartite(&facts(graph)),
        CompleteBipartite::CompleteBipartite { m: 1, .. }
    )
}

/// A tree with no vertex of degree above 2.
#[must_use]
pub fn is_path_graph(graph: &Graph) -> bool {
    let facts = facts(graph);
    tree(&facts)
        && max_degree(&structural::degree_constraint(&facts)).is_some_and(|d| d <= 2)
}

/// Connected, simple and 2-regular.
#[must_use]
pub fn is_cycle_graph(graph: &Graph) -> bool {
    let facts = facts(graph);
    advanced::regularity(&facts) == Regularity::KRegular { k: 2 }
        && structural::connectivity(&facts) == Connectivity::Connected
}

#[must_use]
pub fn is_complete(graph: &Graph) -> bool {
    structural::completeness(&facts(graph)) == Completeness::Complete
}

#[must_use]
pub fn is_regular(graph: &Graph) -> bool {
    matches!(
        advanced::regularity(&facts(graph)),
        Regularity::KRegular { .. }
    )
}

#[must_use]
pub fn is_cubic(graph: &Graph) -> bool {
    advanced::cubic(&facts(graph)) == Cubic::Cubic
}

/// No parallel edges and no loops.
#[must_use]
pub fn is_simple(graph: &Graph) -> bool {
    let facts = facts(graph);
    basic::edge_multiplicity(&facts) == EdgeMultiplicity::Simple
        && basic::self_loops(&facts) == SelfLoops::NoLoops
}

#[must_use]
pub fn is_multigraph(graph: &Graph) -> bool {
    basic::edge_multiplicity(&facts(graph)) == EdgeMultiplicity::Multi
}

#[must_use]
pub fn has_self_loops(graph: &Graph) -> bool {
    basic::self_loops(&facts(graph)) == SelfLoops::Loops
}

/// Some edge has more than two endpoints.
#[must_use]
pub fn is_hypergraph(graph: &Graph) -> bool {
    basic::edge_arity(&facts(graph)) != EdgeArity::Binary
}

/// Scalar or vector weights.
#[must_use]
pub fn is_weighted(graph: &Graph) -> bool {
    basic::weighting(&facts(graph)) != Weighting::Unweighted
}

#[must_use]
pub fn is_signed(graph: &Graph) -> bool {
    basic::signedness(&facts(graph)) == Signedness::Signed
}

#[must_use]
pub fn is_probabilistic(graph: &Graph) -> bool {
    basic::uncertainty(&facts(graph)) == Uncertainty::Probabilistic
}

#[must_use]
pub fn is_dense(graph: &Graph) -> bool {
    structural::density(&facts(graph)) == Density::Dense
}

#[must_use]
pub fn is_sparse(graph: &Graph) -> bool {
    structural::density(&facts(graph)) == Density::Sparse
}

/// `false` when the backtracking guard abstains.
#[must_use]
pub fn is_hamiltonian(graph: &Graph) -> bool {
    paths::hamiltonian(&facts(graph)) == Hamiltonicity::Hamiltonian
}

/// `false` when the backtracking guard abstains.
#[must_use]
pub fn is_traceable(graph: &Graph) -> bool {
    paths::traceable(&facts(graph)) == Traceability::Traceable
}

#[must_use]
pub fn is_threshold(graph: &Graph) -> bool {
    advanced::threshold(&facts(graph)) == Threshold::Threshold
}

#[must_use]
pub fn is_claw_free(graph: &Graph) -> bool {
    advanced::claw_free(&facts(graph)) == ClawFree::ClawFree
}

#[must_use]
pub fn is_line_graph(graph: &Graph) -> bool {
    advanced::line_graph(&facts(graph)) == LineGraph::LineGraph
}

#[must_use]
pub fn is_strongly_regular(graph: &Graph) -> bool {
    matches!(
        advanced::strongly_regular(&facts(graph)),
        StronglyRegular::StronglyRegular { .. }
    )
}

#[must_use]
pub fn is_self_complementary(graph: &Graph) -> bool {
    advanced::self_complementary(&facts(graph)) == SelfComplementary::SelfComplementary
}

#[must_use]
pub fn is_vertex_transitive(graph: &Graph) -> bool {
    advanced::vertex_transitive(&facts(graph)) == VertexTransitive::VertexTransitive
}

#[must_use]
pub fn is_complete_bipartite(graph: &Graph) -> bool {
    matches!(
        advanced::complete_bipartite(&facts(graph)),
        CompleteBipartite::CompleteBipartite { .. }
    )
}

#[must_use]
pub fn is_interval(graph: &Graph) -> bool {
    advanced::interval(&facts(graph)) == Interval::Interval
}

#[must_use]
pub fn is_scale_free(graph: &Graph) -> bool {
    matches!(
        network::scale_free(&facts(graph)),
        ScaleFree::ScaleFree { .. }
    )
}

#[must_use]
pub fn is_small_world(graph: &Graph) -> bool {
    network::small_world(&facts(graph)) == SmallWorld::SmallWorld
}

#[must_use]
pub fn is_spatial(graph: &Graph) -> bool {
    matches!(
        metadata::embedding(&facts(graph)),
        Embedding::Spatial { .. }
    )
}

/// One or more root vertices.
#[must_use]
pub fn is_rooted(graph: &Graph) -> bool {
    !matches!(metadata::rooting(&facts(graph)), Rooting::Unrooted)
}

#[must_use]
pub fn is_temporal(graph: &Graph) -> bool {
    matches!(
        metadata::temporal(&facts(graph)),
        Temporal::Temporal { .. }
    )
}

// =============================================================================
// FAST PATHS
// =============================================================================

#[must_use]
pub fn is_bipartite(graph: &Graph) -> bool {
    structural::partiteness(&facts(graph)) == Partiteness::Bipartite
}

#[must_use]
pub fn is_chordal(graph: &Graph) -> bool {
    advanced::chordal(&facts(graph)) == advanced::Chordality::Chordal
}

/// Euler bounds only; see [`geometric::planar`].
#[must_use]
pub fn is_planar(graph: &Graph) -> bool {
    geometric::planar(&facts(graph)) == Planarity::Planar
}

#[must_use]
pub fn is_split(graph: &Graph) -> bool {
    advanced::split(&facts(graph)) == advanced::Split::Split
}

#[must_use]
pub fn is_cograph(graph: &Graph) -> bool {
    advanced::cograph(&facts(graph)) == advanced::Cograph::Cograph
}

#[must_use]
pub fn is_perfect(graph: &Graph) -> bool {
    advanced::perfect(&facts(graph)) == advanced::Perfection::Perfect
}

#[must_use]
pub fn is_comparability(graph: &Graph) -> bool {
    advanced::comparability(&facts(graph))
        == advanced::Comparability::Comparability
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::spec::compute_graph_spec;
    use crate::types::{Edge, Sign, Vertex};

    #[test]
    fn generic_combinators() {
        let spec = compute_graph_spec(&fixtures::cycle(4), None);
        assert!(axis_equals(&spec, &DegreeConstraint::Regular { degree: 2 }));
        assert!(!axis_equals(&spec, &DegreeConstraint::Regular { degree: 3 }));
        assert!(axis_kind_is::<Partiteness>(&spec, "bipartite"));
        assert!(!axis_kind_is::<Cycles>(&spec, "acyclic"));

        let partial = PartialGraphSpec {
            completeness: Some(Completeness::Incomplete),
            regularity: Some(Regularity::KRegular { k: 2 }),
            ..PartialGraphSpec::default()
        };
        assert!(has_graph_spec(&spec, &partial));
    }

    #[test]
    fn trees_and_forests() {
        assert!(is_tree(&fixtures::star(3)));
        assert!(is_tree(&fixtures::empty(1)));
        assert!(!is_tree(&fixtures::empty(0)));
        assert!(!is_tree(&fixtures::empty(2)));
        assert!(is_forest(&fixtures::empty(2)));
        assert!(!is_forest(&fixtures::cycle(3)));
        assert!(is_path_graph(&fixtures::path(5)));
        assert!(!is_path_graph(&fixtures::star(3)));
    }

    #[test]
    fn dangling_edge_is_not_a_tree() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .undirected("a", "b")
            .undirected("a", "ghost")
            .build();
        assert_eq!(graph.edge_count(), 2);
        assert!(!is_tree(&graph));
        assert!(!is_forest(&graph));
        assert!(!is_path_graph(&graph));
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn named_predicates_agree_with_the_full_spec() {
        for graph in [
            fixtures::path(4),
            fixtures::cycle(5),
            fixtures::petersen(),
            fixtures::directed_cycle(3),
            fixtures::complete_bipartite(2, 3),
        ] {
            let spec = compute_graph_spec(&graph, None);
            assert_eq!(is_acyclic(&graph), spec.cycles == Cycles::Acyclic);
            assert_eq!(is_cubic(&graph), spec.cubic == Cubic::Cubic);
            assert_eq!(is_claw_free(&graph), spec.claw_free == ClawFree::ClawFree);
            assert_eq!(is_line_graph(&graph), spec.line_graph == LineGraph::LineGraph);
            assert_eq!(is_interval(&graph), spec.interval == Interval::Interval);
            assert_eq!(
                is_hamiltonian(&graph),
                spec.hamiltonicity == Hamiltonicity::Hamiltonian
            );
            assert_eq!(
                is_complete_bipartite(&graph),
                matches!(spec.complete_bipartite, CompleteBipartite::CompleteBipartite { .. })
            );
        }
    }

    #[test]
    fn stars_cycles_and_paths() {
        assert!(is_star(&fixtures::star(4)));
        assert!(!is_star(&fixtures::path(4)));
        assert!(is_cycle_graph(&fixtures::cycle(6)));
        assert!(!is_cycle_graph(&fixtures::from_pairs(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]
        )));
    }

    #[test]
    fn direction_predicates() {
        let dag = Graph::builder()
            .vertices(["a", "b", "c"])
            .directed("a", "b")
            .directed("b", "c")
            .directed("a", "c")
            .build();
        assert!(is_directed(&dag));
        assert!(is_dag(&dag));
        assert!(!is_undirected(&dag));
        assert!(!is_dag(&fixtures::directed_cycle(3)));
        assert!(!is_dag(&fixtures::path(3)));
        assert!(is_connected(&fixtures::directed_cycle(3)));
    }

    #[test]
    fn edge_shape_predicates() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c"])
            .undirected("a", "b")
            .undirected("a", "b")
            .undirected("c", "c")
            .hyperedge(&["a", "b", "c"])
            .build();
        assert!(is_multigraph(&graph));
        assert!(has_self_loops(&graph));
        assert!(is_hypergraph(&graph));
        assert!(!is_simple(&graph));
        assert!(is_simple(&fixtures::path(3)));
    }

    #[test]
    fn edge_data_predicates() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .with_edge(
                Edge::undirected("e0", "a", "b")
                    .with_weight(1.5)
                    .with_sign(Sign::Negative)
                    .with_probability(0.5),
            )
            .build();
        assert!(is_weighted(&graph));
        assert!(is_signed(&graph));
        assert!(is_probabilistic(&graph));
        assert!(!is_weighted(&fixtures::path(2)));
    }

    #[test]
    fn class_predicates() {
        let petersen = fixtures::petersen();
        assert!(is_cubic(&petersen));
        assert!(is_regular(&petersen));
        assert!(is_strongly_regular(&petersen));
        assert!(!is_hamiltonian(&petersen));
        assert!(is_traceable(&petersen));

        let c5 = fixtures::cycle(5);
        assert!(is_self_complementary(&c5));
        assert!(is_vertex_transitive(&c5));
        assert!(is_claw_free(&c5));
        assert!(is_line_graph(&c5));
        assert!(!is_interval(&c5));

        assert!(is_complete(&fixtures::complete(4)));
        assert!(is_dense(&fixtures::complete(4)));
        assert!(is_threshold(&fixtures::star(3)));
        assert!(is_complete_bipartite(&fixtures::complete_bipartite(2, 3)));
    }

    #[test]
    fn fast_paths_agree_with_the_full_spec() {
        for graph in [
            fixtures::cycle(4),
            fixtures::cycle(5),
            fixtures::petersen(),
            fixtures::star(3),
            fixtures::complete(5),
        ] {
            let spec = compute_graph_spec(&graph, None);
            assert_eq!(is_bipartite(&graph), spec.partiteness == Partiteness::Bipartite);
            assert_eq!(is_chordal(&graph), spec.chordality == advanced::Chordality::Chordal);
            assert_eq!(is_planar(&graph), spec.planarity == Planarity::Planar);
            assert_eq!(is_split(&graph), spec.split == advanced::Split::Split);
            assert_eq!(is_cograph(&graph), spec.cograph == advanced::Cograph::Cograph);
            assert_eq!(is_perfect(&graph), spec.perfection == advanced::Perfection::Perfect);
            assert_eq!(
                is_comparability(&graph),
                spec.comparability == advanced::Comparability::Comparability
            );
        }
    }

    #[test]
    fn metadata_predicates() {
        let graph = Graph::builder()
            .with_vertex(
                Vertex::new("a")
                    .with_attr("position", vec![0.0, 0.0])
                    .with_attr("root", true)
                    .with_attr("time", 3.0),
            )
            .build();
        assert!(is_spatial(&graph));
        assert!(is_rooted(&graph));
        assert!(is_temporal(&graph));
        assert!(!is_rooted(&fixtures::path(2)));
    }

    #[test]
    fn network_predicates_on_small_graphs() {
        assert!(!is_scale_free(&fixtures::cycle(12)));
        assert!(!is_small_world(&fixtures::cycle(20)));
        assert!(is_sparse(&fixtures::cycle(30)));
    }
}
