//! The mutable undirected graph store: a bit-matrix adjacency representation
//! paired with per-vertex degree/liveness bookkeeping.
//!
//! `Graph` never looks at a [`crate::priority::PriorityIndex`] — callers
//! (the heuristic drivers) are responsible for keeping the index consistent
//! as they mutate the graph. This keeps the one-way data flow of §2 of
//! `SPEC_FULL.md` literal rather than aspirational.

use fixedbitset::FixedBitSet;

use crate::bitrow;

/// Per-vertex bookkeeping. Carries no priority-index metadata — see the
/// module docs and §9 of `SPEC_FULL.md`.
#[derive(Debug, Clone, Copy)]
struct VertexRecord {
    id: usize,
    degree: usize,
    is_deleted: bool,
    in_set: bool,
}

/// A mutable undirected simple graph backed by a bitset adjacency matrix.
///
/// Vertices are born live and may only transition to deleted; edges may be
/// added or removed freely until their endpoint is deleted. `nodes_len` never
/// shrinks across the lifetime of a `Graph` value.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<VertexRecord>,
    rows: Vec<FixedBitSet>,
    n: usize,
    m: usize,
}

impl Graph {
    /// Allocate a graph with `n` vertices, labeled `0..n`, and no edges.
    pub fn new(n: usize) -> Self {
        let nodes = (0..n)
            .map(|id| VertexRecord {
                id,
                degree: 0,
                is_deleted: false,
                in_set: false,
            })
            .collect();
        let rows = (0..n).map(|_| FixedBitSet::with_capacity(n)).collect();
        Graph { nodes, rows, n, m: 0 }
    }

    /// Number of vertex slots, including deleted ones. Never shrinks.
    pub fn nodes_len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.m
    }

    /// Whether `v` is a valid, still-live vertex id.
    pub fn is_live(&self, v: usize) -> bool {
        v < self.nodes.len() && !self.nodes[v].is_deleted
    }

    /// Whether `v` has been placed into an MCS ordering already.
    pub fn in_set(&self, v: usize) -> bool {
        self.nodes.get(v).is_some_and(|r| r.in_set)
    }

    /// Mark `v` as placed into the MCS ordering.
    pub fn mark_in_set(&mut self, v: usize) {
        if let Some(r) = self.nodes.get_mut(v) {
            r.in_set = true;
        }
    }

    /// Current degree of `v`, or `None` if `v` is not a valid live vertex.
    /// Idiomatic replacement for the C sentinel `INT_MAX` (see §9).
    pub fn degree(&self, v: usize) -> Option<usize> {
        if self.is_live(v) {
            Some(self.nodes[v].degree)
        } else {
            None
        }
    }

    /// `true` iff the undirected edge `{u,v}` exists. Out-of-range ids
    /// report `false` rather than panicking.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if u >= self.rows.len() || v >= self.rows.len() {
            return false;
        }
        self.rows[u].contains(v)
    }

    /// Row of live neighbor ids of `v`, ascending. Out-of-range ids yield an
    /// empty iterator rather than panicking, matching `has_edge`/`degree`.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows.get(v).into_iter().flat_map(|row| row.ones())
    }

    fn row(&self, v: usize) -> &FixedBitSet {
        &self.rows[v]
    }

    /// The raw adjacency row for `v`, for heuristics that need direct
    /// bit-row algebra (see `bitrow`).
    pub(crate) fn adjacency_row(&self, v: usize) -> &FixedBitSet {
        &self.rows[v]
    }

    /// Idempotent: adds the symmetric edge `{u,v}` if absent, bumping both
    /// degrees and the edge count. Self-loops (`u == v`) are a no-op.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if u == v || !self.is_live(u) || !self.is_live(v) {
            return;
        }
        if self.has_edge(u, v) {
            return;
        }
        self.rows[u].insert(v);
        self.rows[v].insert(u);
        self.nodes[u].degree += 1;
        self.nodes[v].degree += 1;
        self.m += 1;
    }

    /// Removes the symmetric edge `{u,v}`. Undefined (no-op) if the edge
    /// does not exist or either endpoint is invalid.
    pub fn delete_edge(&mut self, u: usize, v: usize) {
        if !self.has_edge(u, v) {
            return;
        }
        self.rows[u].remove(v);
        self.rows[v].remove(u);
        self.nodes[u].degree = self.nodes[u].degree.saturating_sub(1);
        self.nodes[v].degree = self.nodes[v].degree.saturating_sub(1);
        self.m = self.m.saturating_sub(1);
    }

    /// Removes every edge incident to `v`, marks it deleted, and decrements
    /// the live vertex count. Leaves `v`'s row readable but stale. Does
    /// *not* touch any priority index — callers must unlink `v` themselves
    /// first.
    pub fn delete_vertex(&mut self, v: usize) {
        if !self.is_live(v) {
            return;
        }
        let neighbors: Vec<usize> = self.rows[v].ones().collect();
        for w in neighbors {
            self.delete_edge(v, w);
        }
        self.nodes[v].is_deleted = true;
        self.n -= 1;
    }

    /// Eliminate `v`: record its pre-elimination degree (the width
    /// contribution), turn its open neighborhood into a clique, fill
    /// `out_neighbors` with the pre-elimination neighbor ids (if provided),
    /// and delete `v`. Returns `None` if `v` is not a valid live vertex.
    pub fn eliminate(&mut self, v: usize, out_neighbors: Option<&mut Vec<usize>>) -> Option<usize> {
        if !self.is_live(v) {
            return None;
        }

        let degree_v = self.nodes[v].degree;
        let neighbors: Vec<usize> = self.rows[v].ones().collect();
        let mut row_v = self.row(v).clone();

        let mut added_degree: i64 = 0;
        for &w in &neighbors {
            let before = bitrow::popcount(&self.rows[w]);

            row_v.set(w, false);
            self.rows[w].union_with(&row_v);
            row_v.set(w, true);

            let after = bitrow::popcount(&self.rows[w]);
            self.nodes[w].degree = after;
            added_degree += after as i64 - before as i64;
        }
        if added_degree > 0 {
            self.m += (added_degree / 2) as usize;
        }

        if let Some(buf) = out_neighbors {
            buf.clear();
            buf.extend_from_slice(&neighbors);
        }

        self.delete_vertex(v);
        Some(degree_v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> Graph {
        let mut g = Graph::new(4);
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(u, v);
            }
        }
        g
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(0), Some(1));
        assert_eq!(g.degree(1), Some(1));
    }

    #[test]
    fn self_loop_is_noop() {
        let mut g = Graph::new(2);
        g.add_edge(0, 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(0, 0));
    }

    #[test]
    fn symmetry_holds() {
        let g = k4();
        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(g.has_edge(u, v), g.has_edge(v, u));
            }
        }
    }

    #[test]
    fn eliminate_reports_degree_and_forms_clique() {
        // path 0-1-2: eliminating 1 should connect 0 and 2.
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        let width = g.eliminate(1, None);
        assert_eq!(width, Some(2));
        assert!(g.has_edge(0, 2));
        assert!(!g.is_live(1));
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn eliminate_invalid_vertex_is_none() {
        let mut g = Graph::new(2);
        assert_eq!(g.eliminate(5, None), None);
        g.delete_vertex(0);
        assert_eq!(g.eliminate(0, None), None);
    }

    #[test]
    fn clone_is_independent() {
        let g = k4();
        let mut copy = g.clone();
        copy.delete_vertex(0);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(copy.vertex_count(), 3);
    }

    #[test]
    fn degree_and_edge_count_invariants_after_elimination() {
        let mut g = k4();
        g.eliminate(0, None);
        for v in 1..4 {
            assert_eq!(g.degree(v), Some(bitrow::popcount(g.row(v))));
        }
        let sum: usize = (1..4).map(|v| g.degree(v).unwrap()).sum();
        assert_eq!(g.edge_count(), sum / 2);
    }
}
