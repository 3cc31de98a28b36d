//! # Advanced Structure
//!
//! Recognition of classical graph classes on simple undirected graphs:
//! chordal, perfect, split, cograph, threshold, comparability, interval,
//! claw-free, line graph, regularity variants, self-complementary,
//! vertex-transitive and complete bipartite.
//!
//! ## Approximations
//!
//! `perfect` runs sufficient tests only and answers `imperfect` when they all
//! fail. `line_graph` checks necessary conditions only. Self-complementarity
//! and vertex-transitivity are exact but bounded by named size guards.

use crate::axis::define_axis;
use crate::compute::{guard_abstains, simple_adjacency};
use crate::kernel::algorithms::{self, Adjacency};
use crate::kernel::pattern::{self, K5_MINUS_E};
use crate::kernel::{ComputeBudget, GraphFacts};
use crate::primitives::{
    AT_FREE_MAX_VERTICES, CLAW_SEARCH_MAX_VERTICES, COGRAPH_MAX_VERTICES,
    COMPARABILITY_MAX_VERTICES, INDUCED_SEARCH_MAX_VERTICES, NEIGHBOURHOOD_COVER_MAX_VERTICES,
    SELF_COMPLEMENTARY_MAX_VERTICES, STRONGLY_REGULAR_MAX_VERTICES,
    VERTEX_TRANSITIVE_MAX_VERTICES,
};
use std::collections::BTreeSet;

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// Every cycle of length >= 4 has a chord.
    Chordality {
        Chordal => "chordal",
        NotChordal => "not_chordal",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Perfect-graph membership by sufficient tests.
    Perfection {
        Perfect => "perfect",
        Imperfect => "imperfect",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Clique plus independent set.
    Split {
        Split => "split",
        NotSplit => "not_split",
    }
}

define_axis! {
    /// P4-free.
    Cograph {
        Cograph => "cograph",
        NotCograph => "not_cograph",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Split and cograph.
    Threshold {
        Threshold => "threshold",
        NotThreshold => "not_threshold",
    }
}

define_axis! {
    /// Transitively orientable.
    Comparability {
        Comparability => "comparability",
        NotComparability => "not_comparability",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Intersection graph of intervals on a line.
    Interval {
        Interval => "interval",
        NotInterval => "not_interval",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// No induced K1,3.
    ClawFree {
        ClawFree => "claw_free",
        HasClaw => "has_claw",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Line graph of some graph (necessary conditions only).
    LineGraph {
        LineGraph => "line_graph",
        NotLineGraph => "not_line_graph",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// 3-regular.
    Cubic {
        Cubic => "cubic",
        NotCubic => "not_cubic",
    }
}

define_axis! {
    /// Uniform degree on a simple undirected graph.
    Regularity {
        KRegular { k: usize } => "k_regular",
        Irregular => "irregular",
    }
}

define_axis! {
    /// Regular with constant common-neighbour counts.
    StronglyRegular {
        StronglyRegular { n: usize, k: usize, lambda: usize, mu: usize } => "strongly_regular",
        NotStronglyRegular => "not_strongly_regular",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Isomorphic to its complement.
    SelfComplementary {
        SelfComplementary => "self_complementary",
        NotSelfComplementary => "not_self_complementary",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Automorphisms act transitively on vertices.
    VertexTransitive {
        VertexTransitive => "vertex_transitive",
        NotVertexTransitive => "not_vertex_transitive",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// K_{m,n} with `m <= n`.
    CompleteBipartite {
        CompleteBipartite { m: usize, n: usize } => "complete_bipartite",
        NotCompleteBipartite => "not_complete_bipartite",
    }
}

// =============================================================================
// CHORDAL FAMILY
// =============================================================================

/// MCS plus zero fill-in.
pub fn chordal(facts: &GraphFacts<'_>) -> Chordality {
    if simple_adjacency(facts).is_none() {
        return Chordality::Unconstrained;
    }
    if facts.is_chordal() {
        Chordality::Chordal
    } else {
        Chordality::NotChordal
    }
}

/// Chordal, co-chordal, bipartite, co-bipartite or comparability implies
/// perfect. Abstains if the complement is too large to build or the
/// comparability check cannot run.
pub fn perfect(facts: &GraphFacts<'_>) -> Perfection {
    let Some(adj) = simple_adjacency(facts) else {
        return Perfection::Unconstrained;
    };
    if facts.is_chordal() || facts.bipartition().is_some() {
        return Perfection::Perfect;
    }

    let complement = facts.complement();
    if let Some(comp) = complement {
        if algorithms::is_chordal(comp) || algorithms::is_bipartite(comp) {
            return Perfection::Perfect;
        }
    }
    match comparability_of(adj, facts.budget()) {
        Some(true) => Perfection::Perfect,
        Some(false) if complement.is_some() => Perfection::Imperfect,
        _ => Perfection::Unconstrained,
    }
}

/// Hammer–Simeone degree-sequence test, equivalent to chordal ∧ co-chordal.
pub fn split(facts: &GraphFacts<'_>) -> Split {
    match simple_adjacency(facts) {
        Some(adj) if algorithms::is_split_degree_sequence(&adj.degrees()) => Split::Split,
        _ => Split::NotSplit,
    }
}

/// Recursive component / co-component decomposition.
pub fn cograph(facts: &GraphFacts<'_>) -> Cograph {
    let Some(adj) = simple_adjacency(facts) else {
        return Cograph::Unconstrained;
    };
    if guard_abstains("cograph", adj.vertex_count(), COGRAPH_MAX_VERTICES) {
        return Cograph::Unconstrained;
    }
    if algorithms::is_cograph(adj) {
        Cograph::Cograph
    } else {
        Cograph::NotCograph
    }
}

/// Split ∧ cograph.
///
/// A split graph is a cograph exactly when it is a threshold graph, which
/// repeatedly removing an isolated or dominating vertex decides in O(n²)
/// without a size guard.
pub fn threshold(facts: &GraphFacts<'_>) -> Threshold {
    match simple_adjacency(facts) {
        Some(adj)
            if algorithms::is_split_degree_sequence(&adj.degrees()) && peels_to_empty(adj) =>
        {
            Threshold::Threshold
        }
        _ => Threshold::NotThreshold,
    }
}

fn peels_to_empty(adj: &Adjacency) -> bool {
    let mut alive: BTreeSet<usize> = (0..adj.vertex_count()).collect();
    let mut degree = adj.degrees();

    while let Some(v) = alive
        .iter()
        .copied()
        .find(|&v| degree[v] == 0 || degree[v] + 1 == alive.len())
    {
        alive.remove(&v);
        for w in adj.neighbors(v) {
            if alive.contains(&w) {
                degree[w] -= 1;
            }
        }
    }

    alive.is_empty()
}

/// Γ-implication classes.
pub fn comparability(facts: &GraphFacts<'_>) -> Comparability {
    let Some(adj) = simple_adjacency(facts) else {
        return Comparability::Unconstrained;
    };
    match comparability_of(adj, facts.budget()) {
        Some(true) => Comparability::Comparability,
        Some(false) => Comparability::NotComparability,
        None => Comparability::Unconstrained,
    }
}

/// `None` above `COMPARABILITY_MAX_VERTICES` or on deadline.
fn comparability_of(adj: &Adjacency, budget: &ComputeBudget) -> Option<bool> {
    if guard_abstains("comparability", adj.vertex_count(), COMPARABILITY_MAX_VERTICES) {
        return None;
    }
    algorithms::is_comparability(adj, budget)
}

/// Chordal ∧ AT-free (Lekkerkerker–Boland).
pub fn interval(facts: &GraphFacts<'_>) -> Interval {
    let Some(adj) = simple_adjacency(facts) else {
        return Interval::Unconstrained;
    };
    match interval_of(adj, facts.is_chordal(), facts.budget()) {
        Some(true) => Interval::Interval,
        Some(false) => Interval::NotInterval,
        None => Interval::Unconstrained,
    }
}

/// Interval test given the chordality of `adj`. `None` on guard or deadline.
pub(crate) fn interval_of(adj: &Adjacency, chordal: bool, budget: &ComputeBudget) -> Option<bool> {
    if !chordal {
        return Some(false);
    }
    if guard_abstains("interval", adj.vertex_count(), AT_FREE_MAX_VERTICES) {
        return None;
    }
    algorithms::has_asteroidal_triple(adj, budget).map(|at| !at)
}

// =============================================================================
// CLAWS AND LINE GRAPHS
// =============================================================================

/// Neighbour-triple scan.
pub fn claw_free(facts: &GraphFacts<'_>) -> ClawFree {
    let Some(adj) = simple_adjacency(facts) else {
        return ClawFree::HasClaw;
    };
    match has_claw(adj, facts.budget()) {
        Some(false) => ClawFree::ClawFree,
        Some(true) => ClawFree::HasClaw,
        None => ClawFree::Unconstrained,
    }
}

/// Some vertex has three pairwise non-adjacent neighbours. `None` above
/// `CLAW_SEARCH_MAX_VERTICES` or on deadline.
pub(crate) fn has_claw(adj: &Adjacency, budget: &ComputeBudget) -> Option<bool> {
    if guard_abstains("claw", adj.vertex_count(), CLAW_SEARCH_MAX_VERTICES) {
        return None;
    }
    for v in 0..adj.vertex_count() {
        if budget.expired() {
            return None;
        }
        if centres_claw(adj, v) {
            return Some(true);
        }
    }
    Some(false)
}

fn centres_claw(adj: &Adjacency, v: usize) -> bool {
    let nbrs: Vec<usize> = adj.neighbors(v).collect();
    for (i, &a) in nbrs.iter().enumerate() {
        for (j, &b) in nbrs.iter().enumerate().skip(i + 1) {
            if adj.has_edge(a, b) {
                continue;
            }
            let third = nbrs
                .iter()
                .skip(j + 1)
                .any(|&c| !adj.has_edge(a, c) && !adj.has_edge(b, c));
            if third {
                return true;
            }
        }
    }
    false
}

/// The neighbourhood of `v` is covered by two cliques, i.e. the complement
/// of the induced neighbourhood is bipartite.
fn neighbourhood_is_two_cliques(adj: &Adjacency, v: usize) -> bool {
    let nbrs: Vec<usize> = adj.neighbors(v).collect();
    let k = nbrs.len();
    let missing = (0..k)
        .flat_map(|i| ((i + 1)..k).map(move |j| (i, j)))
        .filter(|&(i, j)| !adj.has_edge(nbrs[i], nbrs[j]));
    algorithms::is_bipartite(&Adjacency::from_pairs(k, missing))
}

/// Every neighbourhood is covered by two cliques. `None` above
/// `NEIGHBOURHOOD_COVER_MAX_VERTICES` or on deadline.
pub(crate) fn neighbourhoods_are_two_cliques(
    adj: &Adjacency,
    budget: &ComputeBudget,
) -> Option<bool> {
    if guard_abstains(
        "neighbourhood_cover",
        adj.vertex_count(),
        NEIGHBOURHOOD_COVER_MAX_VERTICES,
    ) {
        return None;
    }
    for v in 0..adj.vertex_count() {
        if budget.expired() {
            return None;
        }
        if !neighbourhood_is_two_cliques(adj, v) {
            return Some(false);
        }
    }
    Some(true)
}

/// Claw-free, every neighbourhood two cliques, no induced K5−e.
///
/// These are necessary conditions; a few non-line graphs pass them.
pub fn line_graph(facts: &GraphFacts<'_>) -> LineGraph {
    let Some(adj) = simple_adjacency(facts) else {
        return LineGraph::NotLineGraph;
    };
    let budget = facts.budget();
    match has_claw(adj, budget) {
        Some(true) => return LineGraph::NotLineGraph,
        Some(false) => {}
        None => return LineGraph::Unconstrained,
    }
    match neighbourhoods_are_two_cliques(adj, budget) {
        Some(false) => return LineGraph::NotLineGraph,
        Some(true) => {}
        None => return LineGraph::Unconstrained,
    }
    if guard_abstains("line_graph", adj.vertex_count(), INDUCED_SEARCH_MAX_VERTICES) {
        return LineGraph::Unconstrained;
    }
    match pattern::contains_induced(adj, &K5_MINUS_E, budget) {
        Some(true) => LineGraph::NotLineGraph,
        Some(false) => LineGraph::LineGraph,
        None => LineGraph::Unconstrained,
    }
}

// =============================================================================
// REGULARITY
// =============================================================================

/// The shared degree, or `None` when irregular or empty.
fn common_degree(adj: &Adjacency) -> Option<usize> {
    let degrees = adj.degrees();
    let (&first, rest) = degrees.split_first()?;
    rest.iter().all(|&d| d == first).then_some(first)
}

/// Every vertex has degree 3.
pub fn cubic(facts: &GraphFacts<'_>) -> Cubic {
    match simple_adjacency(facts).and_then(common_degree) {
        Some(3) => Cubic::Cubic,
        _ => Cubic::NotCubic,
    }
}

/// Uniform degree. The empty graph counts as irregular.
pub fn regularity(facts: &GraphFacts<'_>) -> Regularity {
    match simple_adjacency(facts).and_then(common_degree) {
        Some(k) => Regularity::KRegular { k },
        None => Regularity::Irregular,
    }
}

/// One (k, λ, μ) across all adjacent and non-adjacent pairs. Complete and
/// edgeless graphs are excluded.
pub fn strongly_regular(facts: &GraphFacts<'_>) -> StronglyRegular {
    let Some(adj) = simple_adjacency(facts) else {
        return StronglyRegular::Unconstrained;
    };
    let n = adj.vertex_count();
    if guard_abstains("strongly_regular", n, STRONGLY_REGULAR_MAX_VERTICES) {
        return StronglyRegular::Unconstrained;
    }
    let Some(k) = common_degree(adj) else {
        return StronglyRegular::NotStronglyRegular;
    };
    if k == 0 || k + 1 == n {
        return StronglyRegular::NotStronglyRegular;
    }

    let mut lambda: Option<usize> = None;
    let mut mu: Option<usize> = None;
    for u in 0..n {
        if facts.budget().expired() {
            return StronglyRegular::Unconstrained;
        }
        for v in (u + 1)..n {
            let common = adj.common_neighbors(u, v);
            let slot = if adj.has_edge(u, v) { &mut lambda } else { &mut mu };
            match *slot {
                None => *slot = Some(common),
                Some(expected) if expected != common => {
                    return StronglyRegular::NotStronglyRegular;
                }
                Some(_) => {}
            }
        }
    }

    StronglyRegular::StronglyRegular {
        n,
        k,
        lambda: lambda.unwrap_or(0),
        mu: mu.unwrap_or(0),
    }
}

// =============================================================================
// SYMMETRY
// =============================================================================

/// Necessary conditions, then an exact isomorphism search against the
/// complement for n <= `SELF_COMPLEMENTARY_MAX_VERTICES`.
pub fn self_complementary(facts: &GraphFacts<'_>) -> SelfComplementary {
    let Some(adj) = simple_adjacency(facts) else {
        return SelfComplementary::Unconstrained;
    };
    let n = adj.vertex_count();
    if n % 4 > 1 || 4 * adj.edge_count() != n * n.saturating_sub(1) {
        return SelfComplementary::NotSelfComplementary;
    }

    let mut degrees = adj.degrees();
    degrees.sort_unstable();
    let mut co_degrees: Vec<usize> = degrees.iter().map(|&d| n - 1 - d).collect();
    co_degrees.sort_unstable();
    if degrees != co_degrees {
        return SelfComplementary::NotSelfComplementary;
    }

    if guard_abstains("self_complementary", n, SELF_COMPLEMENTARY_MAX_VERTICES) {
        return SelfComplementary::Unconstrained;
    }
    match find_isomorphism(adj, &adj.complement(), None, facts.budget()) {
        Some(true) => SelfComplementary::SelfComplementary,
        Some(false) => SelfComplementary::NotSelfComplementary,
        None => SelfComplementary::Unconstrained,
    }
}

/// Regularity, then for n <= `VERTEX_TRANSITIVE_MAX_VERTICES` an
/// automorphism mapping vertex 0 onto every other vertex.
pub fn vertex_transitive(facts: &GraphFacts<'_>) -> VertexTransitive {
    let Some(adj) = simple_adjacency(facts) else {
        return VertexTransitive::Unconstrained;
    };
    let n = adj.vertex_count();
    if n <= 1 {
        return VertexTransitive::VertexTransitive;
    }
    if common_degree(adj).is_none() {
        return VertexTransitive::NotVertexTransitive;
    }
    if guard_abstains("vertex_transitive", n, VERTEX_TRANSITIVE_MAX_VERTICES) {
        return VertexTransitive::Unconstrained;
    }

    for target in 1..n {
        match find_isomorphism(adj, adj, Some((0, target)), facts.budget()) {
            Some(true) => {}
            Some(false) => return VertexTransitive::NotVertexTransitive,
            None => return VertexTransitive::Unconstrained,
        }
    }
    VertexTransitive::VertexTransitive
}

/// Search for a bijection preserving adjacency from `from` to `to`,
/// optionally pinning one vertex. `None` if the budget expires.
///
/// Both graphs must be small enough for a `u32` used-mask.
fn find_isomorphism(
    from: &Adjacency,
    to: &Adjacency,
    pin: Option<(usize, usize)>,
    budget: &ComputeBudget,
) -> Option<bool> {
    let n = from.vertex_count();
    if n != to.vertex_count() || from.edge_count() != to.edge_count() || n >= 32 {
        return Some(false);
    }

    let mut search = IsomorphismSearch {
        from,
        to,
        pin,
        map: vec![0; n],
        used: 0,
        budget,
        expired: false,
    };
    let found = search.extend(0);
    if search.expired { None } else { Some(found) }
}

struct IsomorphismSearch<'a> {
    from: &'a Adjacency,
    to: &'a Adjacency,
    pin: Option<(usize, usize)>,
    map: Vec<usize>,
    used: u32,
    budget: &'a ComputeBudget,
    expired: bool,
}

impl IsomorphismSearch<'_> {
    fn extend(&mut self, u: usize) -> bool {
        let n = self.map.len();
        if u == n {
            return true;
        }
        if self.budget.expired() {
            self.expired = true;
            return false;
        }

        for t in 0..n {
            let bit = 1u32 << t;
            if self.used & bit != 0 || !self.admissible(u, t) {
                continue;
            }
            self.map[u] = t;
            self.used |= bit;
            if self.extend(u + 1) {
                return true;
            }
            self.used &= !bit;
            if self.expired {
                return false;
            }
        }
        false
    }

    fn admissible(&self, u: usize, t: usize) -> bool {
        if let Some((source, target)) = self.pin {
            if (u == source) != (t == target) {
                return false;
            }
        }
        self.from.degree(u) == self.to.degree(t)
            && (0..u).all(|w| self.from.has_edge(u, w) == self.to.has_edge(t, self.map[w]))
    }
}

/// 2-colouring with both sides non-empty and `m·n` edges.
pub fn complete_bipartite(facts: &GraphFacts<'_>) -> CompleteBipartite {
    let Some(adj) = simple_adjacency(facts) else {
        return CompleteBipartite::NotCompleteBipartite;
    };
    let Some(sides) = facts.bipartition() else {
        return CompleteBipartite::NotCompleteBipartite;
    };

    let right = sides.iter().filter(|&&side| side).count();
    let left = sides.len() - right;
    if left == 0 || right == 0 || adj.edge_count() != left * right {
        return CompleteBipartite::NotCompleteBipartite;
    }
    CompleteBipartite::CompleteBipartite {
        m: left.min(right),
        n: left.max(right),
    }
}

// =============================================================================
// TESTS
// =============================================================================
