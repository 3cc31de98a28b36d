//! # Structural Properties
//!
//! Connectivity, cycles, degrees, completeness, partiteness and density.
//! Each axis states which edge shapes it accepts; anything else maps to the
//! `unconstrained` fallback (or the negative kind where no fallback exists).

use crate::axis::define_axis;
use crate::kernel::GraphFacts;
use crate::kernel::algorithms::{self, UnionFind};
use crate::primitives::{DENSE_RATIO, SPARSE_RATIO};
use std::collections::BTreeSet;

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// Reachability between all vertices.
    Connectivity {
        Connected => "connected",
        Disconnected => "disconnected",
        StronglyConnected => "strongly_connected",
        WeaklyConnected => "weakly_connected",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Cycle presence.
    Cycles {
        Acyclic => "acyclic",
        CyclesAllowed => "cycles_allowed",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Uniform degree, or the full sequence in vertex order.
    DegreeConstraint {
        Regular { degree: usize } => "regular",
        DegreeSequence { sequence: Vec<usize> } => "degree_sequence",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Every admissible pair is joined.
    Completeness {
        Complete => "complete",
        Incomplete => "incomplete",
    }
}

define_axis! {
    /// Two-colourability.
    Partiteness {
        Bipartite => "bipartite",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Edge ratio bucket for simple undirected graphs.
    Density {
        Sparse => "sparse",
        Dense => "dense",
        Unconstrained => "unconstrained",
    }
}

// =============================================================================
// COMPUTERS
// =============================================================================

/// DFS for undirected graphs; forward and reverse reachability for directed.
pub fn connectivity(facts: &GraphFacts<'_>) -> Connectivity {
    if facts.is_undirected_binary() {
        return if algorithms::is_connected(facts.adjacency()) {
            Connectivity::Connected
        } else {
            Connectivity::Disconnected
        };
    }
    if !facts.is_directed_binary() {
        return Connectivity::Unconstrained;
    }

    let n = facts.vertex_count();
    if n <= 1 {
        return Connectivity::StronglyConnected;
    }

    let out = facts.out_lists();
    let mut rev = vec![Vec::new(); n];
    for (u, targets) in out.iter().enumerate() {
        for &v in targets {
            rev[v].push(u);
        }
    }

    let forward = algorithms::reachable(&out, 0);
    let backward = algorithms::reachable(&rev, 0);
    if forward.iter().chain(&backward).all(|&seen| seen) {
        Connectivity::StronglyConnected
    } else if algorithms::is_connected(facts.adjacency()) {
        Connectivity::WeaklyConnected
    } else {
        Connectivity::Disconnected
    }
}

/// Union-find for undirected graphs (loops and parallel edges are cycles);
/// Kahn for directed graphs. An edge to an undeclared vertex leaves the cycle
/// structure undetermined.
pub fn cycles(facts: &GraphFacts<'_>) -> Cycles {
    let census = facts.census();
    if census.unresolved > 0 {
        return Cycles::Unconstrained;
    }

    if facts.is_undirected_binary() {
        if census.self_loops > 0 || census.parallel {
            return Cycles::CyclesAllowed;
        }
        let mut forest = UnionFind::new(facts.vertex_count());
        for edge in facts.graph().edges() {
            if let Some((u, v)) = facts.binary_endpoints(edge) {
                if !forest.union(u, v) {
                    return Cycles::CyclesAllowed;
                }
            }
        }
        return Cycles::Acyclic;
    }

    if facts.is_directed_binary() {
        return if algorithms::is_acyclic_directed(facts.vertex_count(), facts.arcs()) {
            Cycles::Acyclic
        } else {
            Cycles::CyclesAllowed
        };
    }

    Cycles::Unconstrained
}

/// Total degree over binary edges, direction ignored, loops counted twice.
pub fn degree_constraint(facts: &GraphFacts<'_>) -> DegreeConstraint {
    let Some(degrees) = facts.incidence_degrees() else {
        return DegreeConstraint::Unconstrained;
    };
    match degrees.split_first() {
        None => DegreeConstraint::Regular { degree: 0 },
        Some((&first, rest)) if rest.iter().all(|&d| d == first) => {
            DegreeConstraint::Regular { degree: first }
        }
        Some(_) => DegreeConstraint::DegreeSequence {
            sequence: degrees.to_vec(),
        },
    }
}

/// Distinct non-loop pairs equal the theoretical maximum.
pub fn completeness(facts: &GraphFacts<'_>) -> Completeness {
    let n = facts.vertex_count();
    if n <= 1 {
        return Completeness::Complete;
    }

    let complete = if facts.is_undirected_binary() {
        facts.adjacency().edge_count() == n * (n - 1) / 2
    } else if facts.is_directed_binary() {
        let distinct: BTreeSet<(usize, usize)> = facts
            .arcs()
            .iter()
            .copied()
            .filter(|&(u, v)| u != v)
            .collect();
        distinct.len() == n * (n - 1)
    } else {
        false
    };

    if complete {
        Completeness::Complete
    } else {
        Completeness::Incomplete
    }
}

/// 2-colouring of undirected binary graphs. A loop rules it out.
pub fn partiteness(facts: &GraphFacts<'_>) -> Partiteness {
    if facts.is_undirected_binary()
        && facts.census().self_loops == 0
        && facts.bipartition().is_some()
    {
        Partiteness::Bipartite
    } else {
        Partiteness::Unconstrained
    }
}

/// Edge ratio `m / (n(n-1)/2)` of a simple undirected graph with n >= 2.
pub fn density(facts: &GraphFacts<'_>) -> Density {
    let n = facts.vertex_count();
    if n < 2 || !facts.is_simple_undirected() {
        return Density::Unconstrained;
    }

    let pairs = (n * (n - 1) / 2) as f64;
    let ratio = facts.adjacency().edge_count() as f64 / pairs;
    if ratio <= SPARSE_RATIO {
        Density::Sparse
    } else if ratio >= DENSE_RATIO {
        Density::Dense
    } else {
        Density::Unconstrained
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Graph;

    fn triangle() -> Graph {
        Graph::builder()
            .vertices(["a", "b", "c"])
            .undirected("a", "b")
            .undirected("b", "c")
            .undirected("c", "a")
            .build()
    }

    fn mixed() -> Graph {
        Graph::builder()
            .vertices(["a", "b", "c"])
            .undirected("a", "b")
            .directed("b", "c")
            .build()
    }

    #[test]
    fn triangle_structure() {
        let graph = triangle();
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(connectivity(&facts), Connectivity::Connected);
        assert_eq!(cycles(&facts), Cycles::CyclesAllowed);
        assert_eq!(degree_constraint(&facts), DegreeConstraint::Regular { degree: 2 });
        assert_eq!(completeness(&facts), Completeness::Complete);
        assert_eq!(partiteness(&facts), Partiteness::Unconstrained);
        assert_eq!(density(&facts), Density::Dense);
    }

    #[test]
    fn dangling_edge_leaves_cycles_undetermined() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .undirected("a", "b")
            .undirected("a", "ghost")
            .build();
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(facts.census().unresolved, 1);
        assert_eq!(cycles(&facts), Cycles::Unconstrained);
    }

    #[test]
    fn mixed_edges_fall_back() {
        let graph = mixed();
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(connectivity(&facts), Connectivity::Unconstrained);
        assert_eq!(cycles(&facts), Cycles::Unconstrained);
        assert_eq!(density(&facts), Density::Unconstrained);
        assert_eq!(partiteness(&facts), Partiteness::Unconstrained);
        assert_eq!(completeness(&facts), Completeness::Incomplete);
    }

    #[test]
    fn directed_connectivity_kinds() {
        let cycle = Graph::builder()
            .vertices(["a", "b", "c"])
            .directed("a", "b")
            .directed("b", "c")
            .directed("c", "a")
            .build();
        let facts = GraphFacts::with_defaults(&cycle);
        assert_eq!(connectivity(&facts), Connectivity::StronglyConnected);
        assert_eq!(cycles(&facts), Cycles::CyclesAllowed);

        let chain = Graph::builder()
            .vertices(["a", "b", "c"])
            .directed("a", "b")
            .directed("b", "c")
            .build();
        let facts = GraphFacts::with_defaults(&chain);
        assert_eq!(connectivity(&facts), Connectivity::WeaklyConnected);
        assert_eq!(cycles(&facts), Cycles::Acyclic);
    }

    #[test]
    fn parallel_edges_form_a_cycle() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .undirected("a", "b")
            .undirected("a", "b")
            .build();
        assert_eq!(cycles(&GraphFacts::with_defaults(&graph)), Cycles::CyclesAllowed);
    }

    #[test]
    fn path_is_acyclic_and_incomplete() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c", "d"])
            .undirected("a", "b")
            .undirected("b", "c")
            .undirected("c", "d")
            .build();
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(cycles(&facts), Cycles::Acyclic);
        assert_eq!(completeness(&facts), Completeness::Incomplete);
        assert_eq!(partiteness(&facts), Partiteness::Bipartite);
        assert_eq!(
            degree_constraint(&facts),
            DegreeConstraint::DegreeSequence {
                sequence: vec![1, 2, 2, 1]
            }
        );
    }

    #[test]
    fn hyperedges_have_no_degree_constraint() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c"])
            .hyperedge(&["a", "b", "c"])
            .build();
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(degree_constraint(&facts), DegreeConstraint::Unconstrained);
        assert_eq!(connectivity(&facts), Connectivity::Unconstrained);
    }

    #[test]
    fn complete_digraph() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .directed("a", "b")
            .directed("b", "a")
            .build();
        assert_eq!(
            completeness(&GraphFacts::with_defaults(&graph)),
            Completeness::Complete
        );
    }

    #[test]
    fn sparse_ring() {
        let mut builder = Graph::builder();
        let ids: Vec<String> = (0..30).map(|i| format!("v{}", i)).collect();
        builder = builder.vertices(ids.iter().map(String::as_str));
        for i in 0..30 {
            builder = builder.undirected(&ids[i], &ids[(i + 1) % 30]);
        }
        let graph = builder.build();
        assert_eq!(density(&GraphFacts::with_defaults(&graph)), Density::Sparse);
    }
}
