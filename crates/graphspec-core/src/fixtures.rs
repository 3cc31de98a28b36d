//! # Graph Families
//!
//! Small named graphs for tests, benches and doc examples. Vertex `i` has id
//! `v{i}`; edges get the builder's sequential ids.

use crate::types::{Graph, GraphBuilder};

fn vertex_id(i: usize) -> String {
    format!("v{i}")
}

fn with_vertices(n: usize) -> GraphBuilder {
    (0..n).fold(Graph::builder(), |builder, i| builder.vertex(&vertex_id(i)))
}

/// `n` vertices with an undirected edge per index pair.
#[must_use]
pub fn from_pairs(n: usize, pairs: &[(usize, usize)]) -> Graph {
    pairs
        .iter()
        .fold(with_vertices(n), |builder, &(a, b)| {
            builder.undirected(&vertex_id(a), &vertex_id(b))
        })
        .build()
}

/// `n` isolated vertices.
#[must_use]
pub fn empty(n: usize) -> Graph {
    with_vertices(n).build()
}

/// P_n: `v0 - v1 - ... - v{n-1}`.
#[must_use]
pub fn path(n: usize) -> Graph {
    let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    from_pairs(n, &pairs)
}

/// C_n for `n >= 3`; smaller `n` falls back to a path.
#[must_use]
pub fn cycle(n: usize) -> Graph {
    if n < 3 {
        return path(n);
    }
    let pairs: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    from_pairs(n, &pairs)
}

/// K_n.
#[must_use]
pub fn complete(n: usize) -> Graph {
    let pairs: Vec<_> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    from_pairs(n, &pairs)
}

/// K_{1,leaves}: centre `v0`.
#[must_use]
pub fn star(leaves: usize) -> Graph {
    let pairs: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    from_pairs(leaves + 1, &pairs)
}

/// K_{m,n}: sides `v0..v{m-1}` and `v{m}..v{m+n-1}`.
#[must_use]
pub fn complete_bipartite(m: usize, n: usize) -> Graph {
    let pairs: Vec<_> = (0..m)
        .flat_map(|i| (m..m + n).map(move |j| (i, j)))
        .collect();
    from_pairs(m + n, &pairs)
}

/// The Petersen graph: outer 5-cycle, spokes, inner pentagram.
#[must_use]
pub fn petersen() -> Graph {
    let mut pairs = Vec::with_capacity(15);
    for i in 0..5 {
        pairs.push((i, (i + 1) % 5));
        pairs.push((i, i + 5));
        pairs.push((i + 5, 5 + (i + 2) % 5));
    }
    from_pairs(10, &pairs)
}

/// Directed C_n: arcs `v{i} -> v{i+1 mod n}`.
#[must_use]
pub fn directed_cycle(n: usize) -> Graph {
    (0..n)
        .fold(with_vertices(n), |builder, i| {
            builder.directed(&vertex_id(i), &vertex_id((i + 1) % n))
        })
        .build()
}

// =============================================================================
// TESTS
// =============================================================================
