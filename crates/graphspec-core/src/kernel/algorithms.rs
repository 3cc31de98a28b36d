//! # Kernel Algorithms
//!
//! Reusable primitives over a dense-index undirected adjacency:
//! connectivity, Kahn acyclicity, 2-colouring, Maximum Cardinality Search
//! chordality, hole detection, comparability, AT-freeness and cograph
//! decomposition.
//!
//! Vertices are `0..n` in graph order. Neighbour sets are `BTreeSet` so every
//! traversal is deterministic.

use crate::kernel::facts::ComputeBudget;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

// =============================================================================
// ADJACENCY
// =============================================================================

/// Undirected simple adjacency over dense vertex indices.
///
/// Self-loops are dropped and parallel edges collapse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adjacency {
    neighbors: Vec<BTreeSet<usize>>,
}

impl Adjacency {
    /// An edgeless adjacency on `n` vertices.
    #[must_use]
    pub fn with_vertices(n: usize) -> Self {
        Self {
            neighbors: vec![BTreeSet::new(); n],
        }
    }

    /// Build from index pairs. Loops and out-of-range pairs are skipped.
    #[must_use]
    pub fn from_pairs(n: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut adj = Self::with_vertices(n);
        for (u, v) in pairs {
            adj.add_edge(u, v);
        }
        adj
    }

    /// Insert an undirected edge. Loops and out-of-range indices are ignored.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if u == v || u >= self.neighbors.len() || v >= self.neighbors.len() {
            return;
        }
        self.neighbors[u].insert(v);
        self.neighbors[v].insert(u);
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Check if `u` and `v` are adjacent.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors.get(u).is_some_and(|set| set.contains(&v))
    }

    /// Neighbours of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.get(v).into_iter().flatten().copied()
    }

    /// Neighbour set of `v`.
    #[must_use]
    pub fn neighbor_set(&self, v: usize) -> Option<&BTreeSet<usize>> {
        self.neighbors.get(v)
    }

    /// Degree of `v`.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors.get(v).map_or(0, BTreeSet::len)
    }

    /// All degrees in vertex order.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.neighbors.iter().map(BTreeSet::len).collect()
    }

    /// The complement graph on the same vertex set.
    #[must_use]
    pub fn complement(&self) -> Self {
        let n = self.vertex_count();
        let mut comp = Self::with_vertices(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if !self.has_edge(u, v) {
                    comp.add_edge(u, v);
                }
            }
        }
        comp
    }

    /// Check if every pair in `vertices` is adjacent.
    #[must_use]
    pub fn is_clique(&self, vertices: &[usize]) -> bool {
        vertices.iter().enumerate().all(|(i, &u)| {
            vertices
                .iter()
                .skip(i + 1)
                .all(|&v| self.has_edge(u, v))
        })
    }

    /// Number of common neighbours of `u` and `v`.
    #[must_use]
    pub fn common_neighbors(&self, u: usize, v: usize) -> usize {
        match (self.neighbors.get(u), self.neighbors.get(v)) {
            (Some(a), Some(b)) => a.intersection(b).count(),
            _ => 0,
        }
    }
}

// =============================================================================
// CONNECTIVITY
// =============================================================================

/// Connected-component labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// Component id per vertex.
    pub labels: Vec<usize>,
    /// Number of components.
    pub count: usize,
}

/// Connected iff an iterative stack walk from vertex 0 reaches every vertex.
/// Vacuously true for 0 or 1 vertices.
#[must_use]
pub fn is_connected(adj: &Adjacency) -> bool {
    let n = adj.vertex_count();
    if n <= 1 {
        return true;
    }

    let mut visited = vec![false; n];
    let mut stack = vec![0usize];
    visited[0] = true;
    let mut count = 1usize;

    while let Some(v) = stack.pop() {
        for w in adj.neighbors(v) {
            if !visited[w] {
                visited[w] = true;
                count += 1;
                stack.push(w);
            }
        }
    }

    count == n
}

/// Label connected components, skipping vertices marked in `removed`.
///
/// Removed vertices receive `usize::MAX`.
#[must_use]
pub fn components_avoiding(adj: &Adjacency, removed: &[bool]) -> Components {
    let n = adj.vertex_count();
    let mut labels = vec![usize::MAX; n];
    let mut count = 0usize;

    for start in 0..n {
        if labels[start] != usize::MAX || removed.get(start).copied().unwrap_or(false) {
            continue;
        }
        labels[start] = count;
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            for w in adj.neighbors(v) {
                if labels[w] == usize::MAX && !removed.get(w).copied().unwrap_or(false) {
                    labels[w] = count;
                    stack.push(w);
                }
            }
        }
        count += 1;
    }

    Components { labels, count }
}

/// Label connected components of the whole graph.
#[must_use]
pub fn components(adj: &Adjacency) -> Components {
    components_avoiding(adj, &[])
}

/// BFS hop distances from `source`. `None` marks unreachable vertices.
#[must_use]
pub fn bfs_distances(adj: &Adjacency, source: usize) -> Vec<Option<usize>> {
    let n = adj.vertex_count();
    let mut dist = vec![None; n];
    if source >= n {
        return dist;
    }

    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = dist[v].map_or(0, |d| d + 1);
        for w in adj.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(next);
                queue.push_back(w);
            }
        }
    }

    dist
}

/// Reachability over directed arcs from `source`.
#[must_use]
pub fn reachable(out: &[Vec<usize>], source: usize) -> Vec<bool> {
    let mut seen = vec![false; out.len()];
    if source >= out.len() {
        return seen;
    }
    seen[source] = true;
    let mut stack = vec![source];
    while let Some(v) = stack.pop() {
        for &w in &out[v] {
            if !seen[w] {
                seen[w] = true;
                stack.push(w);
            }
        }
    }
    seen
}

// =============================================================================
// ACYCLICITY
// =============================================================================

/// Kahn's algorithm: acyclic iff every vertex is removed at in-degree zero.
#[must_use]
pub fn is_acyclic_directed(n: usize, arcs: &[(usize, usize)]) -> bool {
    let mut indegree = vec![0usize; n];
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &(u, v) in arcs {
        if u < n && v < n {
            out[u].push(v);
            indegree[v] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut processed = 0usize;

    while let Some(v) = queue.pop_front() {
        processed += 1;
        for &w in &out[v] {
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    processed == n
}

/// Disjoint-set forest with path halving and union by size.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Representative of `x`'s set.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`. Returns `false` if already merged.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}

// =============================================================================
// BIPARTITENESS
// =============================================================================

/// BFS 2-colouring per component. `None` if an edge joins equal colours.
#[must_use]
pub fn bipartition(adj: &Adjacency) -> Option<Vec<bool>> {
    let n = adj.vertex_count();
    let mut colour: Vec<Option<bool>> = vec![None; n];

    for start in 0..n {
        if colour[start].is_some() {
            continue;
        }
        colour[start] = Some(false);
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            let side = colour[v].unwrap_or(false);
            for w in adj.neighbors(v) {
                match colour[w] {
                    None => {
                        colour[w] = Some(!side);
                        queue.push_back(w);
                    }
                    Some(c) if c == side => return None,
                    Some(_) => {}
                }
            }
        }
    }

    Some(colour.into_iter().map(|c| c.unwrap_or(false)).collect())
}

/// Check if the graph admits a proper 2-colouring.
#[must_use]
pub fn is_bipartite(adj: &Adjacency) -> bool {
    bipartition(adj).is_some()
}

// =============================================================================
// CHORDALITY
// =============================================================================

/// Maximum Cardinality Search visit order.
///
/// The reverse of this order is a perfect elimination ordering iff the graph
/// is chordal.
#[must_use]
pub fn mcs_order(adj: &Adjacency) -> Vec<usize> {
    let n = adj.vertex_count();
    let mut weight = vec![0usize; n];
    let mut numbered = vec![false; n];
    let mut buckets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n + 1];
    buckets[0] = (0..n).collect();
    let mut top = 0usize;
    let mut order = Vec::with_capacity(n);

    for _ in 0..n {
        while top > 0 && buckets[top].is_empty() {
            top -= 1;
        }
        let Some(v) = buckets[top].pop_first() else {
            break;
        };
        numbered[v] = true;
        order.push(v);

        for w in adj.neighbors(v) {
            if numbered[w] {
                continue;
            }
            buckets[weight[w]].remove(&w);
            weight[w] += 1;
            buckets[weight[w]].insert(w);
            top = top.max(weight[w]);
        }
    }

    order
}

/// Chordality via MCS plus the zero fill-in check.
///
/// For every vertex, its neighbours visited earlier must form a clique. It
/// suffices that they are all adjacent to the most recently visited of them.
#[must_use]
pub fn is_chordal(adj: &Adjacency) -> bool {
    let order = mcs_order(adj);
    let mut position = vec![0usize; adj.vertex_count()];
    for (i, &v) in order.iter().enumerate() {
        position[v] = i;
    }

    order.iter().all(|&v| {
        let earlier: Vec<usize> = adj
            .neighbors(v)
            .filter(|&w| position[w] < position[v])
            .collect();
        let Some(&parent) = earlier.iter().max_by_key(|&&w| position[w]) else {
            return true;
        };
        earlier
            .iter()
            .all(|&w| w == parent || adj.has_edge(parent, w))
    })
}

// =============================================================================
// HOLES
// =============================================================================

/// Search for a hole: an induced cycle of length >= 5.
///
/// For every edge b-c and every induced P4 a-b-c-d around it, a hole through
/// a-b-c-d exists iff a and d both touch one component of
/// G - (N[b] ∪ N[c]). Returns `None` if the budget expires.
#[must_use]
pub fn has_long_hole(adj: &Adjacency, budget: &ComputeBudget) -> Option<bool> {
    let n = adj.vertex_count();

    for b in 0..n {
        if budget.expired() {
            return None;
        }
        for c in adj.neighbors(b).filter(|&c| c > b) {
            let mut removed = vec![false; n];
            removed[b] = true;
            removed[c] = true;
            for w in adj.neighbors(b).chain(adj.neighbors(c)) {
                removed[w] = true;
            }
            let comps = components_avoiding(adj, &removed);

            let side_a: Vec<usize> = adj
                .neighbors(b)
                .filter(|&a| a != c && !adj.has_edge(a, c))
                .collect();
            let side_d: Vec<usize> = adj
                .neighbors(c)
                .filter(|&d| d != b && !adj.has_edge(d, b))
                .collect();
            if side_a.is_empty() || side_d.is_empty() {
                continue;
            }

            let touching = |x: usize| -> BTreeSet<usize> {
                adj.neighbors(x)
                    .filter(|&w| !removed[w])
                    .map(|w| comps.labels[w])
                    .collect()
            };
            let d_touch: Vec<(usize, BTreeSet<usize>)> =
                side_d.iter().map(|&d| (d, touching(d))).collect();

            for &a in &side_a {
                let a_touch = touching(a);
                if a_touch.is_empty() {
                    continue;
                }
                let found = d_touch.iter().any(|(d, touch)| {
                    *d != a && !adj.has_edge(a, *d) && !a_touch.is_disjoint(touch)
                });
                if found {
                    return Some(true);
                }
            }
        }
    }

    Some(false)
}

// =============================================================================
// COMPARABILITY
// =============================================================================

/// Transitive-orientability via Γ-implication classes.
///
/// Arcs `a→b` and `a→b'` are forced together when `b` and `b'` are not
/// adjacent; likewise `a→b` and `a'→b` when `a` and `a'` are not adjacent. The
/// graph is a comparability graph iff no class contains an arc together with
/// its reverse. Returns `None` if the budget expires.
#[must_use]
pub fn is_comparability(adj: &Adjacency, budget: &ComputeBudget) -> Option<bool> {
    let n = adj.vertex_count();
    let mut arc_id: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for u in 0..n {
        for v in adj.neighbors(u) {
            let next = arc_id.len();
            arc_id.insert((u, v), next);
        }
    }

    let mut classes = UnionFind::new(arc_id.len());
    for (&(a, b), &id) in &arc_id {
        if budget.expired() {
            return None;
        }
        for b2 in adj.neighbors(a) {
            if b2 != b && !adj.has_edge(b, b2) {
                if let Some(&other) = arc_id.get(&(a, b2)) {
                    classes.union(id, other);
                }
            }
        }
        for a2 in adj.neighbors(b) {
            if a2 != a && !adj.has_edge(a, a2) {
                if let Some(&other) = arc_id.get(&(a2, b)) {
                    classes.union(id, other);
                }
            }
        }
    }

    Some(arc_id.iter().all(|(&(a, b), &id)| {
        a > b
            || arc_id
                .get(&(b, a))
                .is_none_or(|&rev| classes.find(id) != classes.find(rev))
    }))
}

// =============================================================================
// ASTEROIDAL TRIPLES
// =============================================================================

/// Check for an asteroidal triple.
///
/// Three pairwise non-adjacent vertices form one iff each pair lies in a
/// single component of the graph minus the closed neighbourhood of the third.
/// Returns `None` if the budget expires.
#[must_use]
pub fn has_asteroidal_triple(adj: &Adjacency, budget: &ComputeBudget) -> Option<bool> {
    let n = adj.vertex_count();
    let mut avoid: Vec<Vec<usize>> = Vec::with_capacity(n);
    for z in 0..n {
        let mut removed = vec![false; n];
        removed[z] = true;
        for w in adj.neighbors(z) {
            removed[w] = true;
        }
        avoid.push(components_avoiding(adj, &removed).labels);
    }

    let same = |z: usize, x: usize, y: usize| -> bool {
        let labels = &avoid[z];
        labels[x] != usize::MAX && labels[x] == labels[y]
    };

    for x in 0..n {
        if budget.expired() {
            return None;
        }
        for y in (x + 1)..n {
            if adj.has_edge(x, y) {
                continue;
            }
            for z in (y + 1)..n {
                if adj.has_edge(x, z) || adj.has_edge(y, z) {
                    continue;
                }
                if same(z, x, y) && same(y, x, z) && same(x, y, z) {
                    return Some(true);
                }
            }
        }
    }

    Some(false)
}

// =============================================================================
// COGRAPHS
// =============================================================================

/// P4-freeness through recursive decomposition.
///
/// A graph on two or more vertices is a cograph iff it or its complement is
/// disconnected and every resulting part is again a cograph.
#[must_use]
pub fn is_cograph(adj: &Adjacency) -> bool {
    let all: Vec<usize> = (0..adj.vertex_count()).collect();
    let mut pending = vec![all];

    while let Some(part) = pending.pop() {
        if part.len() <= 1 {
            continue;
        }
        let parts = split_within(adj, &part, false);
        if parts.len() > 1 {
            pending.extend(parts);
            continue;
        }
        let coparts = split_within(adj, &part, true);
        if coparts.len() > 1 {
            pending.extend(coparts);
            continue;
        }
        return false;
    }

    true
}

/// Components of the subgraph induced by `part`, or of its complement.
fn split_within(adj: &Adjacency, part: &[usize], complement: bool) -> Vec<Vec<usize>> {
    let mut unvisited: BTreeSet<usize> = part.iter().copied().collect();
    let mut result = Vec::new();

    while let Some(start) = unvisited.pop_first() {
        let mut comp = vec![start];
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            let next: Vec<usize> = unvisited
                .iter()
                .copied()
                .filter(|&w| adj.has_edge(v, w) != complement)
                .collect();
            for w in next {
                unvisited.remove(&w);
                comp.push(w);
                stack.push(w);
            }
        }
        result.push(comp);
    }

    result
}

// =============================================================================
// SPLIT GRAPHS
// =============================================================================

/// Hammer–Simeone split test on a degree sequence.
///
/// With degrees sorted descending and `k = max{i : d_i >= i - 1}` (1-based),
/// the graph is split iff `Σ_{i<=k} d_i = k(k-1) + Σ_{i>k} d_i`.
#[must_use]
pub fn is_split_degree_sequence(degrees: &[usize]) -> bool {
    let mut sorted = degrees.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let k = sorted
        .iter()
        .enumerate()
        .filter(|&(i, &d)| d >= i)
        .map(|(i, _)| i + 1)
        .max()
        .unwrap_or(0);

    let head: usize = sorted.iter().take(k).sum();
    let tail: usize = sorted.iter().skip(k).sum();
    head == k * k.saturating_sub(1) + tail
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Adjacency {
        Adjacency::from_pairs(n, (0..n).map(|i| (i, (i + 1) % n)))
    }

    fn path(n: usize) -> Adjacency {
        Adjacency::from_pairs(n, (1..n).map(|i| (i - 1, i)))
    }

    fn complete(n: usize) -> Adjacency {
        Adjacency::from_pairs(n, (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v))))
    }

    #[test]
    fn adjacency_drops_loops_and_parallels() {
        let adj = Adjacency::from_pairs(3, [(0, 1), (1, 0), (2, 2), (1, 2)]);
        assert_eq!(adj.edge_count(), 2);
        assert!(!adj.has_edge(2, 2));
        assert_eq!(adj.degrees(), vec![1, 2, 1]);
    }

    #[test]
    fn connectivity_is_vacuous_for_tiny_graphs() {
        assert!(is_connected(&Adjacency::with_vertices(0)));
        assert!(is_connected(&Adjacency::with_vertices(1)));
        assert!(!is_connected(&Adjacency::with_vertices(2)));
        assert!(is_connected(&path(5)));
    }

    #[test]
    fn components_count() {
        let adj = Adjacency::from_pairs(5, [(0, 1), (2, 3)]);
        assert_eq!(components(&adj).count, 3);
    }

    #[test]
    fn kahn_detects_directed_cycle() {
        assert!(is_acyclic_directed(3, &[(0, 1), (1, 2)]));
        assert!(!is_acyclic_directed(3, &[(0, 1), (1, 2), (2, 0)]));
        assert!(!is_acyclic_directed(1, &[(0, 0)]));
    }

    #[test]
    fn bipartite_even_and_odd_cycles() {
        assert!(is_bipartite(&cycle(6)));
        assert!(!is_bipartite(&cycle(5)));
    }

    #[test]
    fn chordality() {
        assert!(is_chordal(&complete(5)));
        assert!(is_chordal(&path(6)));
        assert!(!is_chordal(&cycle(4)));
        assert!(!is_chordal(&cycle(7)));

        // C4 plus one chord
        let mut adj = cycle(4);
        adj.add_edge(0, 2);
        assert!(is_chordal(&adj));
    }

    #[test]
    fn holes_of_length_five_or_more() {
        let budget = ComputeBudget::unlimited();
        assert_eq!(has_long_hole(&cycle(4), &budget), Some(false));
        assert_eq!(has_long_hole(&cycle(5), &budget), Some(true));
        assert_eq!(has_long_hole(&cycle(8), &budget), Some(true));
        assert_eq!(has_long_hole(&complete(6), &budget), Some(false));
    }

    #[test]
    fn comparability() {
        let budget = ComputeBudget::unlimited();
        assert_eq!(is_comparability(&cycle(4), &budget), Some(true));
        assert_eq!(is_comparability(&cycle(6), &budget), Some(true));
        assert_eq!(is_comparability(&cycle(5), &budget), Some(false));
        assert_eq!(is_comparability(&complete(4), &budget), Some(true));
    }

    #[test]
    fn comparability_stops_at_deadline() {
        let expired = ComputeBudget::within(std::time::Duration::ZERO);
        assert_eq!(is_comparability(&complete(6), &expired), None);
    }

    #[test]
    fn asteroidal_triples() {
        let budget = ComputeBudget::unlimited();
        assert_eq!(has_asteroidal_triple(&path(5), &budget), Some(false));
        assert_eq!(has_asteroidal_triple(&cycle(6), &budget), Some(true));

        // Subdivided claw: centre 0, legs 0-1-2, 0-3-4, 0-5-6
        let spider = Adjacency::from_pairs(7, [(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]);
        assert_eq!(has_asteroidal_triple(&spider, &budget), Some(true));
    }

    #[test]
    fn cographs() {
        assert!(is_cograph(&complete(4)));
        assert!(is_cograph(&cycle(4)));
        assert!(!is_cograph(&path(4)));
        assert!(!is_cograph(&cycle(5)));
    }

    #[test]
    fn split_degree_sequences() {
        // Star K1,3
        assert!(is_split_degree_sequence(&[3, 1, 1, 1]));
        // C4 is not split
        assert!(!is_split_degree_sequence(&[2, 2, 2, 2]));
        // Empty graph is split
        assert!(is_split_degree_sequence(&[0, 0, 0]));
    }

    #[test]
    fn complement_of_c5_is_c5() {
        let comp = cycle(5).complement();
        assert_eq!(comp.edge_count(), 5);
        assert!(comp.degrees().iter().all(|&d| d == 2));
    }
}
