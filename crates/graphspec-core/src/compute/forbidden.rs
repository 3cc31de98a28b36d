//! # Forbidden Subgraphs
//!
//! Classes defined by excluding small induced subgraphs, plus the perfect
//! variants built on them.
//!
//! Pattern checks go through the anchored-extension matcher in
//! [`crate::kernel::pattern`]; hole checks use the P4-extension search in
//! [`crate::kernel::algorithms::has_long_hole`]. Every search sits behind a
//! named size guard and polls the call budget.

use crate::axis::define_axis;
use crate::compute::advanced::neighbourhoods_are_two_cliques;
use crate::compute::{guard_abstains, simple_adjacency};
use crate::kernel::GraphFacts;
use crate::kernel::algorithms::{self, Adjacency};
use crate::kernel::pattern::{self, BULL, C5, DOMINO, GEM, HOUSE, P5, Pattern};
use crate::primitives::{
    AT_FREE_MAX_VERTICES, HOLE_SEARCH_MAX_VERTICES, INDUCED_SEARCH_MAX_VERTICES,
    MODULAR_MAX_VERTICES,
};

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// No induced path on five vertices.
    P5Free {
        P5Free => "p5_free",
        NotP5Free => "not_p5_free",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// No induced five-cycle.
    C5Free {
        C5Free => "c5_free",
        NotC5Free => "not_c5_free",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// No induced bull.
    BullFree {
        BullFree => "bull_free",
        NotBullFree => "not_bull_free",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// No induced gem.
    GemFree {
        GemFree => "gem_free",
        NotGemFree => "not_gem_free",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// No asteroidal triple.
    AtFree {
        AtFree => "at_free",
        NotAtFree => "not_at_free",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// No induced house and no hole of length >= 5.
    HhFree {
        HhFree => "hh_free",
        NotHhFree => "not_hh_free",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// No hole and no antihole of length >= 5.
    WeaklyChordal {
        WeaklyChordal => "weakly_chordal",
        NotWeaklyChordal => "not_weakly_chordal",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// House, hole, domino and gem free.
    DistanceHereditary {
        DistanceHereditary => "distance_hereditary",
        NotDistanceHereditary => "not_distance_hereditary",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Connected, and every vertex triple has a median.
    Modular {
        Modular => "modular",
        NotModular => "not_modular",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Chordal and gem-free.
    Ptolemaic {
        Ptolemaic => "ptolemaic",
        NotPtolemaic => "not_ptolemaic",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Every neighbourhood is covered by two cliques.
    QuasiLine {
        QuasiLine => "quasi_line",
        NotQuasiLine => "not_quasi_line",
        Unconstrained => "unconstrained",
    }
}

// =============================================================================
// SEARCH HELPERS
// =============================================================================

/// Three-valued outcome of a forbidden-structure search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    Absent,
    Present,
    Abstain,
}

impl Search {
    fn from_found(found: Option<bool>) -> Self {
        match found {
            Some(false) => Search::Absent,
            Some(true) => Search::Present,
            None => Search::Abstain,
        }
    }

    /// Conjunction of freeness results: any presence decides, then any
    /// abstention.
    fn all(results: impl IntoIterator<Item = Search>) -> Self {
        let mut outcome = Search::Absent;
        for result in results {
            match result {
                Search::Present => return Search::Present,
                Search::Abstain => outcome = Search::Abstain,
                Search::Absent => {}
            }
        }
        outcome
    }
}

fn induced(facts: &GraphFacts<'_>, adj: &Adjacency, pattern: &Pattern) -> Search {
    if guard_abstains(pattern.name, adj.vertex_count(), INDUCED_SEARCH_MAX_VERTICES) {
        return Search::Abstain;
    }
    Search::from_found(pattern::contains_induced(adj, pattern, facts.budget()))
}

fn hole(facts: &GraphFacts<'_>, adj: &Adjacency) -> Search {
    if guard_abstains("hole", adj.vertex_count(), HOLE_SEARCH_MAX_VERTICES) {
        return Search::Abstain;
    }
    Search::from_found(algorithms::has_long_hole(adj, facts.budget()))
}

/// Pattern freeness on the simple adjacency, mapped through `verdict`.
fn pattern_free<T>(facts: &GraphFacts<'_>, pattern: &Pattern, verdict: fn(Search) -> T) -> T {
    match simple_adjacency(facts) {
        Some(adj) => verdict(induced(facts, adj, pattern)),
        None => verdict(Search::Abstain),
    }
}

// =============================================================================
// COMPUTERS
// =============================================================================

/// Induced P5 search.
pub fn p5_free(facts: &GraphFacts<'_>) -> P5Free {
    pattern_free(facts, &P5, |search| match search {
        Search::Absent => P5Free::P5Free,
        Search::Present => P5Free::NotP5Free,
        Search::Abstain => P5Free::Unconstrained,
    })
}

/// Induced C5 search.
pub fn c5_free(facts: &GraphFacts<'_>) -> C5Free {
    pattern_free(facts, &C5, |search| match search {
        Search::Absent => C5Free::C5Free,
        Search::Present => C5Free::NotC5Free,
        Search::Abstain => C5Free::Unconstrained,
    })
}

/// Induced bull search.
pub fn bull_free(facts: &GraphFacts<'_>) -> BullFree {
    pattern_free(facts, &BULL, |search| match search {
        Search::Absent => BullFree::BullFree,
        Search::Present => BullFree::NotBullFree,
        Search::Abstain => BullFree::Unconstrained,
    })
}

/// Induced gem search.
pub fn gem_free(facts: &GraphFacts<'_>) -> GemFree {
    pattern_free(facts, &GEM, |search| match search {
        Search::Absent => GemFree::GemFree,
        Search::Present => GemFree::NotGemFree,
        Search::Abstain => GemFree::Unconstrained,
    })
}

/// Component labelling of G − N[z] for every z.
pub fn at_free(facts: &GraphFacts<'_>) -> AtFree {
    let Some(adj) = simple_adjacency(facts) else {
        return AtFree::Unconstrained;
    };
    if guard_abstains("at_free", adj.vertex_count(), AT_FREE_MAX_VERTICES) {
        return AtFree::Unconstrained;
    }
    match Search::from_found(algorithms::has_asteroidal_triple(adj, facts.budget())) {
        Search::Absent => AtFree::AtFree,
        Search::Present => AtFree::NotAtFree,
        Search::Abstain => AtFree::Unconstrained,
    }
}

/// House-free and no hole of length >= 5.
pub fn hh_free(facts: &GraphFacts<'_>) -> HhFree {
    let Some(adj) = simple_adjacency(facts) else {
        return HhFree::Unconstrained;
    };
    match Search::all([induced(facts, adj, &HOUSE), hole(facts, adj)]) {
        Search::Absent => HhFree::HhFree,
        Search::Present => HhFree::NotHhFree,
        Search::Abstain => HhFree::Unconstrained,
    }
}

/// No hole of length >= 5 in the graph or its complement.
pub fn weakly_chordal(facts: &GraphFacts<'_>) -> WeaklyChordal {
    let Some(adj) = simple_adjacency(facts) else {
        return WeaklyChordal::Unconstrained;
    };
    let antihole = match facts.complement() {
        Some(comp) => hole(facts, comp),
        None => Search::Abstain,
    };
    match Search::all([hole(facts, adj), antihole]) {
        Search::Absent => WeaklyChordal::WeaklyChordal,
        Search::Present => WeaklyChordal::NotWeaklyChordal,
        Search::Abstain => WeaklyChordal::Unconstrained,
    }
}

/// House, hole, domino and gem free (Bandelt–Mulder).
pub fn distance_hereditary(facts: &GraphFacts<'_>) -> DistanceHereditary {
    let Some(adj) = simple_adjacency(facts) else {
        return DistanceHereditary::Unconstrained;
    };
    let checks = [
        induced(facts, adj, &HOUSE),
        induced(facts, adj, &DOMINO),
        induced(facts, adj, &GEM),
        hole(facts, adj),
    ];
    match Search::all(checks) {
        Search::Absent => DistanceHereditary::DistanceHereditary,
        Search::Present => DistanceHereditary::NotDistanceHereditary,
        Search::Abstain => DistanceHereditary::Unconstrained,
    }
}

/// Metric median check: connected, and every triple (x, y, z) has a vertex
/// m lying on a shortest path between each pair.
pub fn modular(facts: &GraphFacts<'_>) -> Modular {
    let Some(adj) = simple_adjacency(facts) else {
        return Modular::Unconstrained;
    };
    let n = adj.vertex_count();
    if guard_abstains("modular", n, MODULAR_MAX_VERTICES) {
        return Modular::Unconstrained;
    }
    if !algorithms::is_connected(adj) {
        return Modular::NotModular;
    }

    let dist: Vec<Vec<usize>> = (0..n)
        .map(|s| {
            algorithms::bfs_distances(adj, s)
                .into_iter()
                .map(|d| d.unwrap_or(usize::MAX))
                .collect()
        })
        .collect();

    for x in 0..n {
        if facts.budget().expired() {
            return Modular::Unconstrained;
        }
        for y in (x + 1)..n {
            for z in (y + 1)..n {
                let has_median = (0..n).any(|m| {
                    dist[x][m] + dist[m][y] == dist[x][y]
                        && dist[y][m] + dist[m][z] == dist[y][z]
                        && dist[x][m] + dist[m][z] == dist[x][z]
                });
                if !has_median {
                    return Modular::NotModular;
                }
            }
        }
    }
    Modular::Modular
}

/// Chordal ∧ gem-free.
pub fn ptolemaic(facts: &GraphFacts<'_>) -> Ptolemaic {
    let Some(adj) = simple_adjacency(facts) else {
        return Ptolemaic::Unconstrained;
    };
    if !facts.is_chordal() {
        return Ptolemaic::NotPtolemaic;
    }
    match induced(facts, adj, &GEM) {
        Search::Absent => Ptolemaic::Ptolemaic,
        Search::Present => Ptolemaic::NotPtolemaic,
        Search::Abstain => Ptolemaic::Unconstrained,
    }
}

/// The complement of every neighbourhood is bipartite.
pub fn quasi_line(facts: &GraphFacts<'_>) -> QuasiLine {
    let Some(adj) = simple_adjacency(facts) else {
        return QuasiLine::Unconstrained;
    };
    match neighbourhoods_are_two_cliques(adj, facts.budget()) {
        Some(true) => QuasiLine::QuasiLine,
        Some(false) => QuasiLine::NotQuasiLine,
        None => QuasiLine::Unconstrained,
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

    fn facts(graph: &Graph) -> GraphFacts<'_> {
        GraphFacts::with_defaults(graph)
    }

    #[test]
    fn cycle_five_patterns() {
        let graph = fixtures::cycle(5);
        let facts = facts(&graph);
        assert_eq!(c5_free(&facts), C5Free::NotC5Free);
        assert_eq!(p5_free(&facts), P5Free::P5Free);
        assert_eq!(hh_free(&facts), HhFree::NotHhFree);
        assert_eq!(weakly_chordal(&facts), WeaklyChordal::NotWeaklyChordal);
        assert_eq!(distance_hereditary(&facts), DistanceHereditary::NotDistanceHereditary);
        assert_eq!(quasi_line(&facts), QuasiLine::QuasiLine);
    }

    #[test]
    fn long_path_contains_p5() {
        let graph = fixtures::path(6);
        let facts = facts(&graph);
        assert_eq!(p5_free(&facts), P5Free::NotP5Free);
        assert_eq!(c5_free(&facts), C5Free::C5Free);
        assert_eq!(at_free(&facts), AtFree::AtFree);
        assert_eq!(weakly_chordal(&facts), WeaklyChordal::WeaklyChordal);
    }

    #[test]
    fn trees_are_distance_hereditary_and_ptolemaic() {
        let graph = fixtures::star(4);
        let facts = facts(&graph);
        assert_eq!(distance_hereditary(&facts), DistanceHereditary::DistanceHereditary);
        assert_eq!(ptolemaic(&facts), Ptolemaic::Ptolemaic);
        assert_eq!(bull_free(&facts), BullFree::BullFree);
        assert_eq!(quasi_line(&facts), QuasiLine::NotQuasiLine);
    }

    #[test]
    fn gem_is_chordal_but_not_ptolemaic() {
        let graph = fixtures::from_pairs(
            5,
            &[(0, 1), (1, 2), (2, 3), (4, 0), (4, 1), (4, 2), (4, 3)],
        );
        let facts = facts(&graph);
        assert_eq!(gem_free(&facts), GemFree::NotGemFree);
        assert_eq!(ptolemaic(&facts), Ptolemaic::NotPtolemaic);
    }

    #[test]
    fn bull_is_found() {
        let graph = fixtures::from_pairs(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (1, 4)]);
        assert_eq!(bull_free(&facts(&graph)), BullFree::NotBullFree);
    }

    #[test]
    fn house_breaks_hh_freeness() {
        let graph = fixtures::from_pairs(5, &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 0), (4, 1)]);
        let facts = facts(&graph);
        assert_eq!(hh_free(&facts), HhFree::NotHhFree);
        // The house is the complement of P5, which is not an antihole.
        assert_eq!(weakly_chordal(&facts), WeaklyChordal::WeaklyChordal);
    }

    #[test]
    fn spider_is_not_at_free() {
        let graph = fixtures::from_pairs(7, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]);
        assert_eq!(at_free(&facts(&graph)), AtFree::NotAtFree);
    }

    #[test]
    fn searches_abstain_just_above_their_guards() {
        let graph = fixtures::path(INDUCED_SEARCH_MAX_VERTICES + 1);
        let facts_above = facts(&graph);
        assert_eq!(p5_free(&facts_above), P5Free::Unconstrained);
        assert_eq!(quasi_line(&facts_above), QuasiLine::Unconstrained);

        let graph = fixtures::path(HOLE_SEARCH_MAX_VERTICES + 1);
        assert_eq!(hh_free(&facts(&graph)), HhFree::Unconstrained);

        let graph = fixtures::path(AT_FREE_MAX_VERTICES + 1);
        assert_eq!(at_free(&facts(&graph)), AtFree::Unconstrained);

        let graph = fixtures::path(AT_FREE_MAX_VERTICES);
        assert_eq!(at_free(&facts(&graph)), AtFree::AtFree);
    }

    #[test]
    fn modularity_of_small_graphs() {
        // Even cycles and trees are median graphs.
        assert_eq!(modular(&facts(&fixtures::cycle(4))), Modular::Modular);
        assert_eq!(modular(&facts(&fixtures::path(5))), Modular::Modular);
        // A triangle has no median for its three vertices.
        assert_eq!(modular(&facts(&fixtures::complete(3))), Modular::NotModular);
        assert_eq!(modular(&facts(&fixtures::empty(2))), Modular::NotModular);
    }

    #[test]
    fn directed_graph_abstains() {
        let graph = fixtures::directed_cycle(5);
        let facts = facts(&graph);
        assert_eq!(c5_free(&facts), C5Free::Unconstrained);
        assert_eq!(modular(&facts), Modular::Unconstrained);
        assert_eq!(quasi_line(&facts), QuasiLine::Unconstrained);
    }

    #[test]
    fn search_conjunction() {
        assert_eq!(Search::all([Search::Absent, Search::Abstain]), Search::Abstain);
        assert_eq!(Search::all([Search::Abstain, Search::Present]), Search::Present);
        assert_eq!(Search::all([Search::Absent]), Search::Absent);
    }
}
