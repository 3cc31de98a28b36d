//! # Paths and Cycles
//!
//! Hamiltonian cycle and Hamiltonian path by depth-first backtracking with a
//! `u32` visited mask.
//!
//! Both abstain above `BACKTRACKING_MAX_VERTICES` whatever the true answer:
//! an 11-cycle is Hamiltonian but reports `unconstrained`.

use crate::axis::define_axis;
use crate::compute::{guard_abstains, simple_adjacency};
use crate::kernel::algorithms::{self, Adjacency};
use crate::kernel::{ComputeBudget, GraphFacts};
use crate::primitives::BACKTRACKING_MAX_VERTICES;

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// A cycle through every vertex.
    Hamiltonicity {
        Hamiltonian => "hamiltonian",
        NotHamiltonian => "not_hamiltonian",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// A path through every vertex.
    Traceability {
        Traceable => "traceable",
        NotTraceable => "not_traceable",
        Unconstrained => "unconstrained",
    }
}

// =============================================================================
// COMPUTERS
// =============================================================================

/// Backtracking from vertex 0; needs n >= 3 and minimum degree >= 2.
pub fn hamiltonian(facts: &GraphFacts<'_>) -> Hamiltonicity {
    let Some(adj) = simple_adjacency(facts) else {
        return Hamiltonicity::Unconstrained;
    };
    let n = adj.vertex_count();
    if guard_abstains("hamiltonian", n, BACKTRACKING_MAX_VERTICES) {
        return Hamiltonicity::Unconstrained;
    }
    if n < 3 || adj.degrees().iter().any(|&d| d < 2) {
        return Hamiltonicity::NotHamiltonian;
    }

    let mut search = Backtrack::new(adj, facts.budget(), true);
    match search.run_from(0) {
        Some(true) => Hamiltonicity::Hamiltonian,
        Some(false) => Hamiltonicity::NotHamiltonian,
        None => Hamiltonicity::Unconstrained,
    }
}

/// Backtracking from every start vertex.
pub fn traceable(facts: &GraphFacts<'_>) -> Traceability {
    let Some(adj) = simple_adjacency(facts) else {
        return Traceability::Unconstrained;
    };
    let n = adj.vertex_count();
    if guard_abstains("traceable", n, BACKTRACKING_MAX_VERTICES) {
        return Traceability::Unconstrained;
    }
    if n == 0 || !algorithms::is_connected(adj) {
        return Traceability::NotTraceable;
    }

    let mut search = Backtrack::new(adj, facts.budget(), false);
    for start in 0..n {
        match search.run_from(start) {
            Some(true) => return Traceability::Traceable,
            Some(false) => {}
            None => return Traceability::Unconstrained,
        }
    }
    Traceability::NotTraceable
}

// =============================================================================
// BACKTRACKING
// =============================================================================

struct Backtrack<'a> {
    adj: &'a Adjacency,
    budget: &'a ComputeBudget,
    close_cycle: bool,
    start: usize,
    visited: u32,
    expired: bool,
}

impl<'a> Backtrack<'a> {
    fn new(adj: &'a Adjacency, budget: &'a ComputeBudget, close_cycle: bool) -> Self {
        Self {
            adj,
            budget,
            close_cycle,
            start: 0,
            visited: 0,
            expired: false,
        }
    }

    /// `None` when the budget expires mid-search.
    fn run_from(&mut self, start: usize) -> Option<bool> {
        self.start = start;
        self.visited = 1 << start;
        let found = self.extend(start, 1);
        if self.expired { None } else { Some(found) }
    }

    fn extend(&mut self, at: usize, depth: usize) -> bool {
        if depth == self.adj.vertex_count() {
            return !self.close_cycle || self.adj.has_edge(at, self.start);
        }
        if self.budget.expired() {
            self.expired = true;
            return false;
        }

        let adj = self.adj;
        for next in adj.neighbors(at) {
            let bit = 1u32 << next;
            if self.visited & bit != 0 {
                continue;
            }
            self.visited |= bit;
            let found = self.extend(next, depth + 1);
            self.visited &= !bit;
            if found {
                return true;
            }
            if self.expired {
                return false;
            }
        }
        false
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::Graph;
    use std::time::Duration;

    fn facts(graph: &Graph) -> GraphFacts<'_> {
        GraphFacts::with_defaults(graph)
    }

    #[test]
    fn triangle_is_hamiltonian() {
        let graph = fixtures::complete(3);
        assert_eq!(hamiltonian(&facts(&graph)), Hamiltonicity::Hamiltonian);
        assert_eq!(traceable(&facts(&graph)), Traceability::Traceable);
    }

    #[test]
    fn path_is_traceable_only() {
        let graph = fixtures::path(4);
        assert_eq!(hamiltonian(&facts(&graph)), Hamiltonicity::NotHamiltonian);
        assert_eq!(traceable(&facts(&graph)), Traceability::Traceable);
    }

    #[test]
    fn star_with_three_leaves_is_neither() {
        let graph = fixtures::star(3);
        assert_eq!(hamiltonian(&facts(&graph)), Hamiltonicity::NotHamiltonian);
        assert_eq!(traceable(&facts(&graph)), Traceability::NotTraceable);
    }

    #[test]
    fn petersen_is_traceable_not_hamiltonian() {
        let graph = fixtures::petersen();
        assert_eq!(hamiltonian(&facts(&graph)), Hamiltonicity::NotHamiltonian);
        assert_eq!(traceable(&facts(&graph)), Traceability::Traceable);
    }

    #[test]
    fn guard_abstains_above_ten_vertices() {
        let graph = fixtures::cycle(11);
        assert_eq!(hamiltonian(&facts(&graph)), Hamiltonicity::Unconstrained);
        assert_eq!(traceable(&facts(&graph)), Traceability::Unconstrained);

        let graph = fixtures::cycle(10);
        assert_eq!(hamiltonian(&facts(&graph)), Hamiltonicity::Hamiltonian);
    }

    #[test]
    fn expired_budget_abstains() {
        let graph = fixtures::complete_bipartite(4, 5);
        let facts = GraphFacts::with_budget(
            &graph,
            Default::default(),
            ComputeBudget::within(Duration::ZERO),
        );
        assert_eq!(hamiltonian(&facts), Hamiltonicity::Unconstrained);
    }

    #[test]
    fn directed_input_is_unconstrained() {
        let graph = fixtures::directed_cycle(4);
        assert_eq!(hamiltonian(&facts(&graph)), Hamiltonicity::Unconstrained);
    }
}
