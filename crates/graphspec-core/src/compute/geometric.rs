//! # Intersection, Probe and Geometric Classes
//!
//! Planarity (Euler bounds), circular-arc and proper circular-arc
//! certificates, and probe-chordal / probe-interval completion search.
//!
//! Circular-arc recognition is certificate based: a positive certificate
//! (interval graph, chordless cycle) or a negative one (a hole plus a vertex
//! with no neighbour on it) decides the axis; otherwise it abstains.

use crate::axis::define_axis;
use crate::compute::advanced::{has_claw, interval_of};
use crate::compute::metadata;
use crate::compute::{guard_abstains, simple_adjacency};
use crate::kernel::algorithms::{self, Adjacency};
use crate::kernel::{ComputeBudget, GraphFacts};
use crate::primitives::{
    ISOLATED_HOLE_MAX_VERTICES, PROBE_MAX_PAIRS, PROBE_UNPARTITIONED_MAX_VERTICES,
};

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// Euler-bound planarity.
    Planarity {
        Planar => "planar",
        NonPlanar => "non_planar",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Intersection graph of arcs on a circle.
    CircularArc {
        CircularArc => "circular_arc",
        NotCircularArc => "not_circular_arc",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Circular-arc model with no arc containing another.
    ProperCircularArc {
        ProperCircularArc => "proper_circular_arc",
        NotProperCircularArc => "not_proper_circular_arc",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Chordal after adding edges among non-probe vertices.
    ProbeChordal {
        ProbeChordal => "probe_chordal",
        NotProbeChordal => "not_probe_chordal",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Interval after adding edges among non-probe vertices.
    ProbeInterval {
        ProbeInterval => "probe_interval",
        NotProbeInterval => "not_probe_interval",
        Unconstrained => "unconstrained",
    }
}

// =============================================================================
// PLANARITY
// =============================================================================

/// Euler bounds on the underlying simple graph: `E <= 3V - 6`, and
/// `E <= 2V - 4` when bipartite (V >= 3).
///
/// Necessary conditions only: graphs violating them are rejected, some
/// non-planar graphs that satisfy them are accepted.
pub fn planar(facts: &GraphFacts<'_>) -> Planarity {
    if !facts.all_binary() {
        return Planarity::Unconstrained;
    }
    let adj = facts.adjacency();
    let v = adj.vertex_count();
    let e = adj.edge_count();
    if v < 3 {
        return Planarity::Planar;
    }
    if e > 3 * v - 6 {
        return Planarity::NonPlanar;
    }
    if facts.bipartition().is_some() && e > 2 * v - 4 {
        return Planarity::NonPlanar;
    }
    Planarity::Planar
}

// =============================================================================
// CIRCULAR-ARC
// =============================================================================

/// Interval or chordless cycle → yes; hole plus a vertex missing it → no.
pub fn circular_arc(facts: &GraphFacts<'_>) -> CircularArc {
    let Some(adj) = simple_adjacency(facts) else {
        return CircularArc::Unconstrained;
    };
    if interval_of(adj, facts.is_chordal(), facts.budget()) == Some(true)
        || is_chordless_cycle(adj)
    {
        return CircularArc::CircularArc;
    }
    if has_isolated_hole(adj, facts.budget()) == Some(true) {
        return CircularArc::NotCircularArc;
    }
    CircularArc::Unconstrained
}

/// Claw → no; proper interval or chordless cycle → yes; circular-arc
/// certificate failure → no.
pub fn proper_circular_arc(facts: &GraphFacts<'_>) -> ProperCircularArc {
    let Some(adj) = simple_adjacency(facts) else {
        return ProperCircularArc::Unconstrained;
    };
    match has_claw(adj, facts.budget()) {
        Some(true) => return ProperCircularArc::NotProperCircularArc,
        Some(false) => {}
        None => return ProperCircularArc::Unconstrained,
    }
    if interval_of(adj, facts.is_chordal(), facts.budget()) == Some(true)
        || is_chordless_cycle(adj)
    {
        return ProperCircularArc::ProperCircularArc;
    }
    if has_isolated_hole(adj, facts.budget()) == Some(true) {
        return ProperCircularArc::NotProperCircularArc;
    }
    ProperCircularArc::Unconstrained
}

/// Connected, 2-regular, at least three vertices.
fn is_chordless_cycle(adj: &Adjacency) -> bool {
    adj.vertex_count() >= 3
        && adj.degrees().iter().all(|&d| d == 2)
        && algorithms::is_connected(adj)
}

/// Some vertex z leaves a hole (induced cycle >= 4) in G − N[z]; the hole
/// plus z is C_k ∪ K1, which has no circular-arc model. `None` above
/// `ISOLATED_HOLE_MAX_VERTICES` or on deadline.
fn has_isolated_hole(adj: &Adjacency, budget: &ComputeBudget) -> Option<bool> {
    let n = adj.vertex_count();
    if guard_abstains("isolated_hole", n, ISOLATED_HOLE_MAX_VERTICES) {
        return None;
    }
    for z in 0..n {
        if budget.expired() {
            return None;
        }
        let mut keep = vec![true; n];
        keep[z] = false;
        for w in adj.neighbors(z) {
            keep[w] = false;
        }
        if !algorithms::is_chordal(&induced_subgraph(adj, &keep)) {
            return Some(true);
        }
    }
    Some(false)
}

fn induced_subgraph(adj: &Adjacency, keep: &[bool]) -> Adjacency {
    let mut index = vec![usize::MAX; adj.vertex_count()];
    let mut next = 0usize;
    for (v, &kept) in keep.iter().enumerate() {
        if kept {
            index[v] = next;
            next += 1;
        }
    }
    let pairs = (0..adj.vertex_count())
        .filter(|&u| keep[u])
        .flat_map(|u| adj.neighbors(u).map(move |w| (u, w)))
        .filter(|&(u, w)| u < w && keep[w])
        .map(|(u, w)| (index[u], index[w]));
    Adjacency::from_pairs(next, pairs)
}

// =============================================================================
// PROBE CLASSES
// =============================================================================

/// Target class of a probe search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeTarget {
    Chordal,
    Interval,
}

impl ProbeTarget {
    fn test(self, adj: &Adjacency, budget: &ComputeBudget) -> Option<bool> {
        let chordal = algorithms::is_chordal(adj);
        match self {
            ProbeTarget::Chordal => Some(chordal),
            ProbeTarget::Interval => interval_of(adj, chordal, budget),
        }
    }
}

/// Designated non-probe vertices (policy `probe = false`) are completed
/// directly; without a designation the class itself implies yes and small
/// graphs are searched over every independent set.
pub fn probe_chordal(facts: &GraphFacts<'_>) -> ProbeChordal {
    match probe_search(facts, ProbeTarget::Chordal) {
        Some(true) => ProbeChordal::ProbeChordal,
        Some(false) => ProbeChordal::NotProbeChordal,
        None => ProbeChordal::Unconstrained,
    }
}

/// As [`probe_chordal`], with interval as the target class.
pub fn probe_interval(facts: &GraphFacts<'_>) -> ProbeInterval {
    match probe_search(facts, ProbeTarget::Interval) {
        Some(true) => ProbeInterval::ProbeInterval,
        Some(false) => ProbeInterval::NotProbeInterval,
        None => ProbeInterval::Unconstrained,
    }
}

fn probe_search(facts: &GraphFacts<'_>, target: ProbeTarget) -> Option<bool> {
    let adj = simple_adjacency(facts)?;
    let budget = facts.budget();
    let policy = facts.policy();

    let designated: Vec<usize> = facts
        .graph()
        .vertices()
        .iter()
        .enumerate()
        .filter(|(_, v)| metadata::is_non_probe(v, policy))
        .map(|(i, _)| i)
        .collect();
    if !designated.is_empty() {
        return completes(adj, &designated, target, budget);
    }

    match target.test(adj, budget) {
        Some(false) => {}
        decided => return decided,
    }

    let n = adj.vertex_count();
    if guard_abstains("probe", n, PROBE_UNPARTITIONED_MAX_VERTICES) {
        return None;
    }

    let mut abstained = false;
    for mask in 0u32..(1u32 << n) {
        let set: Vec<usize> = (0..n).filter(|&v| mask & (1 << v) != 0).collect();
        if set.len() < 2 || !is_independent(adj, &set) {
            continue;
        }
        match completes(adj, &set, target, budget) {
            Some(true) => return Some(true),
            Some(false) => {}
            None => abstained = true,
        }
    }
    if abstained { None } else { Some(false) }
}

/// Try every subset of pairs inside the independent set `non_probe` as a
/// fill-in.
fn completes(
    adj: &Adjacency,
    non_probe: &[usize],
    target: ProbeTarget,
    budget: &ComputeBudget,
) -> Option<bool> {
    if !is_independent(adj, non_probe) {
        return Some(false);
    }
    let pairs: Vec<(usize, usize)> = non_probe
        .iter()
        .enumerate()
        .flat_map(|(i, &u)| non_probe[i + 1..].iter().map(move |&v| (u, v)))
        .collect();
    if guard_abstains("probe_pairs", pairs.len(), PROBE_MAX_PAIRS) {
        return None;
    }

    for mask in 0u32..(1u32 << pairs.len()) {
        if budget.expired() {
            return None;
        }
        let mut candidate = adj.clone();
        for (bit, &(u, v)) in pairs.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                candidate.add_edge(u, v);
            }
        }
        match target.test(&candidate, budget) {
            Some(true) => return Some(true),
            Some(false) => {}
            None => return None,
        }
    }
    Some(false)
}

fn is_independent(adj: &Adjacency, set: &[usize]) -> bool {
    set.iter()
        .enumerate()
        .all(|(i, &u)| set[i + 1..].iter().all(|&v| !adj.has_edge(u, v)))
}

// =============================================================================
// TESTS
// =============================================================================
