//! # Network Statistics
//!
//! Scale-free exponent estimate, small-world comparison against a random
//! baseline, and community structure.
//!
//! These are coarse estimators. The exponent is a method-of-moments slope on
//! the log degree distribution, not a maximum-likelihood fit; communities fall
//! back to connected components when no layer tag is present.

use crate::axis::define_axis;
use crate::compute::metadata::layer_key;
use crate::compute::{guard_abstains, simple_adjacency};
use crate::kernel::GraphFacts;
use crate::kernel::algorithms::{self, Adjacency};
use crate::primitives::{
    SCALE_FREE_MAX_EXPONENT, SCALE_FREE_MIN_DISTINCT_DEGREES, SCALE_FREE_MIN_EXPONENT,
    SCALE_FREE_MIN_VERTICES, SMALL_WORLD_MAX_VERTICES, SMALL_WORLD_MIN_VERTICES,
};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// AXES
// =============================================================================

define_axis! {
    /// Power-law degree distribution.
    ScaleFree {
        ScaleFree { exponent: f64 } => "scale_free",
        NotScaleFree => "not_scale_free",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// High clustering with short paths relative to a random graph.
    SmallWorld {
        SmallWorld => "small_world",
        NotSmallWorld => "not_small_world",
        Unconstrained => "unconstrained",
    }
}

define_axis! {
    /// Explicit layers, or more than one component.
    CommunityStructure {
        Communities { count: usize } => "communities",
        NoCommunities => "no_communities",
    }
}

// =============================================================================
// SCALE-FREE
// =============================================================================

/// Slope of `ln p(k)` against `ln k` over distinct positive degrees.
pub fn scale_free(facts: &GraphFacts<'_>) -> ScaleFree {
    let Some(degrees) = facts.incidence_degrees() else {
        return ScaleFree::Unconstrained;
    };
    if degrees.len() < SCALE_FREE_MIN_VERTICES {
        return ScaleFree::Unconstrained;
    }

    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for &d in degrees.iter().filter(|&&d| d > 0) {
        *histogram.entry(d).or_insert(0) += 1;
    }
    if histogram.len() < SCALE_FREE_MIN_DISTINCT_DEGREES {
        return ScaleFree::NotScaleFree;
    }

    let total: usize = histogram.values().sum();
    let points: Vec<(f64, f64)> = histogram
        .iter()
        .map(|(&k, &count)| ((k as f64).ln(), (count as f64 / total as f64).ln()))
        .collect();

    match power_law_exponent(&points) {
        Some(exponent) if (SCALE_FREE_MIN_EXPONENT..=SCALE_FREE_MAX_EXPONENT).contains(&exponent) => {
            ScaleFree::ScaleFree { exponent }
        }
        _ => ScaleFree::NotScaleFree,
    }
}

/// `γ = −cov(x, y) / var(x)`. `None` if `x` has no spread.
fn power_law_exponent(points: &[(f64, f64)]) -> Option<f64> {
    let len = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / len;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / len;

    let (cov, var) = points.iter().fold((0.0, 0.0), |(cov, var), &(x, y)| {
        let dx = x - mean_x;
        (cov + dx * (y - mean_y), var + dx * dx)
    });
    (var > 0.0).then(|| -cov / var)
}

// =============================================================================
// SMALL WORLD
// =============================================================================

/// σ = (C / C_rand) / (L / L_rand) with C_rand = p and
/// L_rand = ln(n) / ln(1 / (1 − p)); small world when σ > 1 and C > C_rand.
pub fn small_world(facts: &GraphFacts<'_>) -> SmallWorld {
    let Some(adj) = simple_adjacency(facts) else {
        return SmallWorld::Unconstrained;
    };
    let n = adj.vertex_count();
    if n < SMALL_WORLD_MIN_VERTICES
        || guard_abstains("small_world", n, SMALL_WORLD_MAX_VERTICES)
        || !algorithms::is_connected(adj)
    {
        return SmallWorld::Unconstrained;
    }

    let p = 2.0 * adj.edge_count() as f64 / (n * (n - 1)) as f64;
    if p >= 1.0 {
        return SmallWorld::NotSmallWorld;
    }

    let Some(path_length) = average_path_length(facts, adj) else {
        return SmallWorld::Unconstrained;
    };
    let clustering = average_clustering(adj);
    let random_path_length = (n as f64).ln() / (1.0 / (1.0 - p)).ln();
    let sigma = (clustering / p) / (path_length / random_path_length);

    tracing::trace!(clustering, path_length, p, sigma, "small-world comparison");
    if sigma > 1.0 && clustering > p {
        SmallWorld::SmallWorld
    } else {
        SmallWorld::NotSmallWorld
    }
}

/// Mean local clustering coefficient; vertices of degree < 2 contribute 0.
fn average_clustering(adj: &Adjacency) -> f64 {
    let n = adj.vertex_count();
    let total: f64 = (0..n)
        .map(|v| {
            let k = adj.degree(v);
            if k < 2 {
                return 0.0;
            }
            let links: usize = adj.neighbors(v).map(|u| adj.common_neighbors(u, v)).sum();
            (links / 2) as f64 / (k * (k - 1) / 2) as f64
        })
        .sum();
    total / n as f64
}

/// Mean BFS distance over ordered pairs of a connected graph. `None` if the
/// budget expires.
fn average_path_length(facts: &GraphFacts<'_>, adj: &Adjacency) -> Option<f64> {
    let n = adj.vertex_count();
    let mut total = 0usize;
    for source in 0..n {
        if facts.budget().expired() {
            return None;
        }
        total += algorithms::bfs_distances(adj, source)
            .into_iter()
            .flatten()
            .sum::<usize>();
    }
    Some(total as f64 / (n * (n - 1)) as f64)
}

// =============================================================================
// COMMUNITIES
// =============================================================================

/// Distinct layer tags win; otherwise connected components.
pub fn community_structure(facts: &GraphFacts<'_>) -> CommunityStructure {
    let policy = facts.policy();
    let layers: BTreeSet<String> = facts
        .graph()
        .vertices()
        .iter()
        .filter_map(|v| layer_key(&v.attrs, policy))
        .collect();
    if layers.len() >= 2 {
        return CommunityStructure::Communities {
            count: layers.len(),
        };
    }

    if facts.vertex_count() == 0 {
        return CommunityStructure::NoCommunities;
    }
    let count = algorithms::components(facts.adjacency()).count;
    if count >= 2 {
        CommunityStructure::Communities { count }
    } else {
        CommunityStructure::NoCommunities
    }
}

// =============================================================================
// TESTS
// =============================================================================
