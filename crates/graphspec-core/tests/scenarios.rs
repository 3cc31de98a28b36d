//! # Scenario Tests
//!
//! End-to-end checks of the full spec on small named graphs.
//!
//! ## Scenarios
//! - S1: Triangle
//! - S2: Path a-b-c-d
//! - S3: K_{2,2}
//! - S4: Star with three leaves
//! - S5: 11-cycle above the backtracking guard
//! - S6: Mixed directed and undirected edges

use graphspec_core::compute::advanced::{Chordality, CompleteBipartite, Perfection};
use graphspec_core::compute::basic::Directionality;
use graphspec_core::compute::paths::{Hamiltonicity, Traceability};
use graphspec_core::compute::structural::{
    Completeness, Connectivity, Cycles, DegreeConstraint, Density, Partiteness,
};
use graphspec_core::predicates;
use graphspec_core::{Graph, GraphFacts, compute_graph_spec, fixtures};

// =============================================================================
// S1: TRIANGLE
// =============================================================================

mod s1_triangle {
    use super::*;

    fn triangle() -> Graph {
        Graph::builder()
            .vertices(["a", "b", "c"])
            .undirected("a", "b")
            .undirected("b", "c")
            .undirected("c", "a")
            .build()
    }

    #[test]
    fn structural_axes() {
        let spec = compute_graph_spec(&triangle(), None);
        assert_eq!(spec.directionality, Directionality::Undirected);
        assert_eq!(spec.cycles, Cycles::CyclesAllowed);
        assert_eq!(spec.connectivity, Connectivity::Connected);
        assert_eq!(spec.degree_constraint, DegreeConstraint::Regular { degree: 2 });
        assert_eq!(spec.completeness, Completeness::Complete);
    }

    #[test]
    fn class_axes() {
        let spec = compute_graph_spec(&triangle(), None);
        assert_eq!(spec.hamiltonicity, Hamiltonicity::Hamiltonian);
        assert_eq!(spec.chordality, Chordality::Chordal);
        assert_eq!(spec.perfection, Perfection::Perfect);

        assert!(predicates::is_hamiltonian(&triangle()));
        assert!(predicates::is_chordal(&triangle()));
        assert!(predicates::is_perfect(&triangle()));
    }
}

// =============================================================================
// S2: PATH
// =============================================================================

mod s2_path {
    use super::*;

    #[test]
    fn traceable_not_hamiltonian() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c", "d"])
            .undirected("a", "b")
            .undirected("b", "c")
            .undirected("c", "d")
            .build();
        let spec = compute_graph_spec(&graph, None);
        assert_eq!(spec.traceability, Traceability::Traceable);
        assert_eq!(spec.hamiltonicity, Hamiltonicity::NotHamiltonian);
        assert_eq!(spec.completeness, Completeness::Incomplete);
        assert!(predicates::is_traceable(&graph));
        assert!(predicates::is_path_graph(&graph));
    }
}

// =============================================================================
// S3: COMPLETE BIPARTITE
// =============================================================================

mod s3_complete_bipartite {
    use super::*;

    #[test]
    fn k22() {
        let graph = fixtures::complete_bipartite(2, 2);
        let spec = compute_graph_spec(&graph, None);
        assert_eq!(spec.partiteness, Partiteness::Bipartite);
        assert_eq!(
            spec.complete_bipartite,
            CompleteBipartite::CompleteBipartite { m: 2, n: 2 }
        );
        assert_eq!(spec.perfection, Perfection::Perfect);
        assert!(predicates::is_perfect(&graph));
    }

    #[test]
    fn sides_are_reported_smaller_first() {
        let spec = compute_graph_spec(&fixtures::complete_bipartite(4, 2), None);
        assert_eq!(
            spec.complete_bipartite,
            CompleteBipartite::CompleteBipartite { m: 2, n: 4 }
        );
    }
}

// =============================================================================
// S4: STAR
// =============================================================================

mod s4_star {
    use super::*;

    #[test]
    fn star_with_three_leaves() {
        let graph = fixtures::star(3);
        let spec = compute_graph_spec(&graph, None);
        assert!(predicates::is_star(&graph));
        assert_eq!(spec.hamiltonicity, Hamiltonicity::NotHamiltonian);
        assert_eq!(
            spec.degree_constraint,
            DegreeConstraint::DegreeSequence {
                sequence: vec![3, 1, 1, 1]
            }
        );
    }

    #[test]
    fn sequence_follows_vertex_order() {
        let graph = Graph::builder()
            .vertices(["x", "hub", "y", "z"])
            .undirected("hub", "x")
            .undirected("hub", "y")
            .undirected("hub", "z")
            .build();
        let spec = compute_graph_spec(&graph, None);
        assert_eq!(
            spec.degree_constraint,
            DegreeConstraint::DegreeSequence {
                sequence: vec![1, 3, 1, 1]
            }
        );
    }
}

// =============================================================================
// S5: GUARDED HAMILTONICITY
// =============================================================================

mod s5_backtracking_guard {
    use super::*;
    use graphspec_core::compute::paths;

    #[test]
    fn eleven_cycle_abstains() {
        let graph = fixtures::cycle(11);
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(paths::hamiltonian(&facts), Hamiltonicity::Unconstrained);

        let json = serde_json::to_value(paths::hamiltonian(&facts)).expect("serialize");
        assert_eq!(json, serde_json::json!({"kind": "unconstrained"}));
    }

    #[test]
    fn abstention_is_reproducible() {
        let first = compute_graph_spec(&fixtures::cycle(11), None);
        let second = compute_graph_spec(&fixtures::cycle(11), None);
        assert_eq!(first, second);
        assert!(!predicates::is_hamiltonian(&fixtures::cycle(11)));
    }
}

// =============================================================================
// S6: MIXED DIRECTION
// =============================================================================

mod s6_mixed_direction {
    use super::*;

    #[test]
    fn structural_axes_fall_back() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c"])
            .directed("a", "b")
            .undirected("b", "c")
            .build();
        let spec = compute_graph_spec(&graph, None);
        assert_eq!(spec.directionality, Directionality::Mixed);
        assert_eq!(spec.connectivity, Connectivity::Unconstrained);
        assert_eq!(spec.cycles, Cycles::Unconstrained);
        assert_eq!(spec.density, Density::Unconstrained);
        assert_eq!(spec.partiteness, Partiteness::Unconstrained);
    }
}
