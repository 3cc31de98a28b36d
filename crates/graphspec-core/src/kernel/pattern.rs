//! # Induced Pattern Search
//!
//! Finds a small connected pattern as an induced subgraph. Pattern vertices
//! are matched in BFS order so every vertex after the first is drawn from the
//! neighbourhood of an already-matched pattern neighbour; cost is roughly
//! `n * Δ^(k-1)` rather than `C(n, k)`.

use crate::kernel::algorithms::Adjacency;
use crate::kernel::facts::ComputeBudget;

/// How many extension steps run between deadline checks.
const BUDGET_POLL_INTERVAL: usize = 4096;

/// A small connected graph used as a forbidden induced subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Human-readable name for logging.
    pub name: &'static str,
    /// Number of vertices.
    pub order: usize,
    /// Edge list over `0..order`.
    pub edges: &'static [(usize, usize)],
}

/// Path on 4 vertices.
pub const P4: Pattern = Pattern {
    name: "P4",
    order: 4,
    edges: &[(0, 1), (1, 2), (2, 3)],
};

/// Path on 5 vertices.
pub const P5: Pattern = Pattern {
    name: "P5",
    order: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 4)],
};

/// Cycle on 5 vertices.
pub const C5: Pattern = Pattern {
    name: "C5",
    order: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
};

/// Triangle with two pendant horns.
pub const BULL: Pattern = Pattern {
    name: "bull",
    order: 5,
    edges: &[(0, 1), (1, 2), (2, 0), (0, 3), (1, 4)],
};

/// P4 plus a dominating hub.
pub const GEM: Pattern = Pattern {
    name: "gem",
    order: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (4, 0), (4, 1), (4, 2), (4, 3)],
};

/// C4 with a roof; the complement of P5.
pub const HOUSE: Pattern = Pattern {
    name: "house",
    order: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 0), (4, 1)],
};

/// Two squares sharing an edge (2x3 grid).
pub const DOMINO: Pattern = Pattern {
    name: "domino",
    order: 6,
    edges: &[(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)],
};

/// K1,3.
pub const CLAW: Pattern = Pattern {
    name: "claw",
    order: 4,
    edges: &[(0, 1), (0, 2), (0, 3)],
};

/// K5 minus one edge.
pub const K5_MINUS_E: Pattern = Pattern {
    name: "K5-e",
    order: 5,
    edges: &[
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 4),
    ],
};

impl Pattern {
    fn matrix(&self) -> Vec<Vec<bool>> {
        let mut m = vec![vec![false; self.order]; self.order];
        for &(u, v) in self.edges {
            m[u][v] = true;
            m[v][u] = true;
        }
        m
    }
}

/// Search for `pattern` as an induced subgraph.
///
/// Returns `None` when the budget expires before the search completes.
#[must_use]
pub fn contains_induced(adj: &Adjacency, pattern: &Pattern, budget: &ComputeBudget) -> Option<bool> {
    if pattern.order == 0 {
        return Some(true);
    }
    if adj.vertex_count() < pattern.order {
        return Some(false);
    }

    let matrix = pattern.matrix();
    let (order, anchor) = search_order(&matrix);
    if order.len() != pattern.order {
        // Disconnected patterns are not supported by anchored extension.
        return Some(false);
    }

    let mut matcher = Matcher {
        adj,
        matrix,
        order,
        anchor,
        image: vec![usize::MAX; pattern.order],
        used: vec![false; adj.vertex_count()],
        budget,
        steps: 0,
        expired: false,
    };

    let found = matcher.extend(0);
    if matcher.expired {
        tracing::debug!(pattern = pattern.name, "induced search abstained on deadline");
        None
    } else {
        Some(found)
    }
}

/// BFS order over the pattern with, for each position > 0, an earlier
/// pattern neighbour to draw candidates from.
fn search_order(matrix: &[Vec<bool>]) -> (Vec<usize>, Vec<usize>) {
    let k = matrix.len();
    let mut order = vec![0usize];
    let mut anchor = vec![0usize];
    let mut placed = vec![false; k];
    placed[0] = true;

    let mut head = 0;
    while head < order.len() {
        let p = order[head];
        for q in 0..k {
            if matrix[p][q] && !placed[q] {
                placed[q] = true;
                order.push(q);
                anchor.push(p);
            }
        }
        head += 1;
    }

    (order, anchor)
}

struct Matcher<'a> {
    adj: &'a Adjacency,
    matrix: Vec<Vec<bool>>,
    order: Vec<usize>,
    anchor: Vec<usize>,
    image: Vec<usize>,
    used: Vec<bool>,
    budget: &'a ComputeBudget,
    steps: usize,
    expired: bool,
}

impl Matcher<'_> {
    fn extend(&mut self, depth: usize) -> bool {
        if depth == self.order.len() {
            return true;
        }

        self.steps += 1;
        if self.steps % BUDGET_POLL_INTERVAL == 0 && self.budget.expired() {
            self.expired = true;
            return false;
        }

        let p = self.order[depth];
        let candidates: Vec<usize> = if depth == 0 {
            (0..self.adj.vertex_count()).collect()
        } else {
            self.adj.neighbors(self.image[self.anchor[depth]]).collect()
        };

        for g in candidates {
            if self.used[g] || !self.consistent(depth, p, g) {
                continue;
            }
            self.image[p] = g;
            self.used[g] = true;
            if self.extend(depth + 1) {
                return true;
            }
            self.used[g] = false;
            if self.expired {
                return false;
            }
        }

        false
    }

    /// Adjacency to every matched pattern vertex must agree exactly.
    fn consistent(&self, depth: usize, p: usize, g: usize) -> bool {
        self.order[..depth].iter().all(|&q| {
            let image = self.image[q];
            self.matrix[p][q] == self.adj.has_edge(g, image)
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
