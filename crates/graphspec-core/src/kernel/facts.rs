//! # Graph Facts
//!
//! Call-scoped memoization of facts shared by many computers: the vertex
//! index, an edge census, undirected adjacency, its complement, the
//! bipartition, chordality and incidence degrees.
//!
//! Each fact is computed on first request and reused for the rest of one
//! orchestrator call. `GraphFacts` is not `Sync` and must not outlive that
//! call, which keeps every axis a pure function of (graph, policy).

use crate::kernel::algorithms::{self, Adjacency};
use crate::policy::ComputePolicy;
use crate::primitives::COMPLEMENT_MAX_VERTICES;
use crate::types::{Edge, Graph, VertexId};
use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

// =============================================================================
// BUDGET
// =============================================================================

/// Optional wall-clock deadline for the exponential searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeBudget {
    deadline: Option<Instant>,
}

impl ComputeBudget {
    /// No deadline.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Deadline `limit` from now.
    #[must_use]
    pub fn within(limit: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(limit),
        }
    }

    /// Check if the deadline has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

// =============================================================================
// EDGE CENSUS
// =============================================================================

/// Counts describing the declared edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeCensus {
    /// Edges with exactly two endpoints.
    pub binary: usize,
    /// Edges with more than two endpoints.
    pub hyper: usize,
    /// Edges with fewer than two endpoints.
    pub degenerate: usize,
    /// Directed edges (any arity).
    pub directed: usize,
    /// Undirected edges (any arity).
    pub undirected: usize,
    /// Binary loops plus hyperedges with a repeated endpoint.
    pub self_loops: usize,
    /// Whether two edges share an endpoint key.
    pub parallel: bool,
    /// Edges with at least one endpoint not in the vertex list.
    pub unresolved: usize,
    /// Distinct arities among non-degenerate edges.
    pub arities: BTreeSet<usize>,
}

impl EdgeCensus {
    fn of(graph: &Graph, index: &BTreeMap<&str, usize>) -> Self {
        let mut census = Self::default();
        let mut keys: BTreeSet<(bool, Vec<&str>)> = BTreeSet::new();

        for edge in graph.edges() {
            let arity = edge.arity();
            match arity {
                0 | 1 => census.degenerate += 1,
                2 => census.binary += 1,
                _ => census.hyper += 1,
            }
            if arity >= 2 {
                census.arities.insert(arity);
            }
            if edge.directed {
                census.directed += 1;
            } else {
                census.undirected += 1;
            }

            let ids: Vec<&str> = edge.endpoints.iter().map(VertexId::as_str).collect();
            if ids.iter().any(|id| !index.contains_key(id)) {
                census.unresolved += 1;
            }

            let distinct: BTreeSet<&str> = ids.iter().copied().collect();
            if arity >= 2 && distinct.len() < arity {
                census.self_loops += 1;
            }

            let key = if edge.directed && arity == 2 {
                ids
            } else {
                let mut sorted = ids;
                sorted.sort_unstable();
                sorted
            };
            if !keys.insert((edge.directed, key)) {
                census.parallel = true;
            }
        }

        census
    }
}

// =============================================================================
// GRAPH FACTS
// =============================================================================

/// Lazily computed, call-scoped facts about one graph under one policy.
#[derive(Debug)]
pub struct GraphFacts<'g> {
    graph: &'g Graph,
    policy: ComputePolicy,
    budget: ComputeBudget,
    index: OnceCell<BTreeMap<&'g str, usize>>,
    census: OnceCell<EdgeCensus>,
    adjacency: OnceCell<Adjacency>,
    complement: OnceCell<Option<Adjacency>>,
    bipartition: OnceCell<Option<Vec<bool>>>,
    chordal: OnceCell<bool>,
    arcs: OnceCell<Vec<(usize, usize)>>,
    incidence_degrees: OnceCell<Option<Vec<usize>>>,
}

impl<'g> GraphFacts<'g> {
    /// Facts for `graph` under `policy`, with no deadline.
    #[must_use]
    pub fn new(graph: &'g Graph, policy: ComputePolicy) -> Self {
        Self::with_budget(graph, policy, ComputeBudget::unlimited())
    }

    /// Facts under the default policy.
    #[must_use]
    pub fn with_defaults(graph: &'g Graph) -> Self {
        Self::new(graph, ComputePolicy::default())
    }

    /// Facts with an explicit budget.
    #[must_use]
    pub fn with_budget(graph: &'g Graph, policy: ComputePolicy, budget: ComputeBudget) -> Self {
        Self {
            graph,
            policy,
            budget,
            index: OnceCell::new(),
            census: OnceCell::new(),
            adjacency: OnceCell::new(),
            complement: OnceCell::new(),
            bipartition: OnceCell::new(),
            chordal: OnceCell::new(),
            arcs: OnceCell::new(),
            incidence_degrees: OnceCell::new(),
        }
    }

    /// The graph under analysis.
    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The policy in effect.
    #[must_use]
    pub fn policy(&self) -> &ComputePolicy {
        &self.policy
    }

    /// The budget in effect.
    #[must_use]
    pub fn budget(&self) -> &ComputeBudget {
        &self.budget
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Vertex id → dense index. The first occurrence of a duplicated id wins.
    pub fn index(&self) -> &BTreeMap<&'g str, usize> {
        self.index.get_or_init(|| {
            let mut index = BTreeMap::new();
            for (i, vertex) in self.graph.vertices().iter().enumerate() {
                index.entry(vertex.id.as_str()).or_insert(i);
            }
            index
        })
    }

    /// Dense index of a vertex id.
    #[must_use]
    pub fn index_of(&self, id: &VertexId) -> Option<usize> {
        self.index().get(id.as_str()).copied()
    }

    /// Endpoint indices of a binary edge, if both resolve.
    #[must_use]
    pub fn binary_endpoints(&self, edge: &Edge) -> Option<(usize, usize)> {
        match edge.endpoints.as_slice() {
            [a, b] => Some((self.index_of(a)?, self.index_of(b)?)),
            _ => None,
        }
    }

    /// The edge census.
    pub fn census(&self) -> &EdgeCensus {
        self.census
            .get_or_init(|| EdgeCensus::of(self.graph, self.index()))
    }

    /// Every edge is binary (vacuously true without edges).
    #[must_use]
    pub fn all_binary(&self) -> bool {
        let census = self.census();
        census.hyper == 0 && census.degenerate == 0
    }

    /// Binary edges only, none directed.
    #[must_use]
    pub fn is_undirected_binary(&self) -> bool {
        self.all_binary() && self.census().directed == 0
    }

    /// Binary edges only, all directed, at least one edge.
    #[must_use]
    pub fn is_directed_binary(&self) -> bool {
        let census = self.census();
        self.all_binary() && census.undirected == 0 && census.directed > 0
    }

    /// The simple undirected precondition: binary undirected edges, no loops,
    /// no parallel edges. Edges with unresolved endpoints are ignored.
    #[must_use]
    pub fn is_simple_undirected(&self) -> bool {
        let census = self.census();
        self.is_undirected_binary() && census.self_loops == 0 && !census.parallel
    }

    /// Undirected simple adjacency over resolvable binary edges.
    pub fn adjacency(&self) -> &Adjacency {
        self.adjacency.get_or_init(|| {
            let pairs = self
                .graph
                .edges()
                .iter()
                .filter_map(|edge| self.binary_endpoints(edge));
            Adjacency::from_pairs(self.vertex_count(), pairs)
        })
    }

    /// The complement adjacency, or `None` above `COMPLEMENT_MAX_VERTICES`.
    pub fn complement(&self) -> Option<&Adjacency> {
        self.complement
            .get_or_init(|| {
                if self.vertex_count() > COMPLEMENT_MAX_VERTICES {
                    tracing::debug!(
                        vertices = self.vertex_count(),
                        limit = COMPLEMENT_MAX_VERTICES,
                        "complement not materialised"
                    );
                    None
                } else {
                    Some(self.adjacency().complement())
                }
            })
            .as_ref()
    }

    /// BFS 2-colouring of the adjacency, if one exists.
    pub fn bipartition(&self) -> Option<&[bool]> {
        self.bipartition
            .get_or_init(|| algorithms::bipartition(self.adjacency()))
            .as_deref()
    }

    /// Chordality of the adjacency.
    pub fn is_chordal(&self) -> bool {
        *self
            .chordal
            .get_or_init(|| algorithms::is_chordal(self.adjacency()))
    }

    /// Resolved directed binary arcs `(source, target)`, loops included.
    pub fn arcs(&self) -> &[(usize, usize)] {
        self.arcs.get_or_init(|| {
            self.graph
                .edges()
                .iter()
                .filter(|edge| edge.directed)
                .filter_map(|edge| self.binary_endpoints(edge))
                .collect()
        })
    }

    /// Out-neighbour lists built from [`GraphFacts::arcs`].
    #[must_use]
    pub fn out_lists(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.vertex_count()];
        for &(u, v) in self.arcs() {
            out[u].push(v);
        }
        out
    }

    /// Total incidence degree per vertex over binary edges (a loop counts
    /// twice, direction ignored). `None` when any edge is not binary.
    pub fn incidence_degrees(&self) -> Option<&[usize]> {
        self.incidence_degrees
            .get_or_init(|| {
                if !self.all_binary() {
                    return None;
                }
                let mut degrees = vec![0usize; self.vertex_count()];
                for edge in self.graph.edges() {
                    if let Some((u, v)) = self.binary_endpoints(edge) {
                        degrees[u] += 1;
                        degrees[v] += 1;
                    }
                }
                Some(degrees)
            })
            .as_deref()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn census_counts_shapes() {
        let graph = Graph::builder()
            .vertices(["a", "b", "c"])
            .undirected("a", "b")
            .undirected("b", "a")
            .directed("c", "c")
            .hyperedge(&["a", "b", "c"])
            .undirected("a", "zz")
            .build();
        let facts = GraphFacts::with_defaults(&graph);
        let census = facts.census();

        assert_eq!(census.binary, 4);
        assert_eq!(census.hyper, 1);
        assert_eq!(census.directed, 1);
        assert_eq!(census.self_loops, 1);
        assert!(census.parallel);
        assert_eq!(census.unresolved, 1);
        assert_eq!(census.arities, BTreeSet::from([2, 3]));
        assert!(!facts.all_binary());
    }

    #[test]
    fn opposite_directed_edges_are_not_parallel() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .directed("a", "b")
            .directed("b", "a")
            .build();
        let facts = GraphFacts::with_defaults(&graph);
        assert!(!facts.census().parallel);
        assert!(facts.is_directed_binary());
    }

    #[test]
    fn adjacency_skips_unknown_endpoints() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .undirected("a", "b")
            .undirected("b", "ghost")
            .build();
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(facts.adjacency().edge_count(), 1);
        assert!(facts.is_simple_undirected());
    }

    #[test]
    fn incidence_degrees_count_loops_twice() {
        let graph = Graph::builder()
            .vertices(["a", "b"])
            .undirected("a", "b")
            .undirected("a", "a")
            .build();
        let facts = GraphFacts::with_defaults(&graph);
        assert_eq!(facts.incidence_degrees(), Some(&[3usize, 1][..]));
    }

    #[test]
    fn expired_budget() {
        let budget = ComputeBudget::within(Duration::ZERO);
        assert!(budget.expired());
        assert!(!ComputeBudget::unlimited().expired());
    }
}
