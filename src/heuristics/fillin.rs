//! Minimum fill-in elimination ordering (§4.6).
//!
//! Unlike min-degree, fill-in counts cannot be recomputed cheaply from
//! scratch after every step, so this driver maintains them incrementally:
//! when `v` is eliminated, every pair of its still-unprocessed neighbors
//! `(b, c)` that are not already adjacent becomes a new edge, and each such
//! edge changes the fill-in count of every vertex that sees its neighborhood
//! change. Five scratch bit-rows are reused across the whole run so the
//! per-step cost stays proportional to `deg(v)^2`, not `deg(v)^2 * nodes_len`.

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::bitrow;
use crate::graph::Graph;
use crate::ordering::Ordering;
use crate::priority::PriorityIndex;

/// Fill-in count of `v`: half the number of non-edges among its neighbors.
/// `work` is a scratch row sized to `graph.nodes_len()`.
fn node_calc_fillin(graph: &Graph, v: usize, work: &mut FixedBitSet) -> usize {
    let row_v = graph.adjacency_row(v);
    let mut total = 0usize;
    for w in row_v.ones() {
        // work = row_v & ~row_w; `w` itself always survives the diff since
        // there are no self-loops, which is exactly the -1 correction.
        bitrow::diff(work, row_v, graph.adjacency_row(w));
        total += bitrow::popcount(work) - 1;
    }
    total / 2
}

#[cfg(debug_assertions)]
fn debug_validate_fillin(graph: &Graph, idx: &PriorityIndex, work: &mut FixedBitSet) -> bool {
    for v in 0..graph.nodes_len() {
        if !graph.is_live(v) {
            continue;
        }
        let recomputed = node_calc_fillin(graph, v, work);
        if idx.bucket_of(v) != Some(recomputed) {
            return false;
        }
    }
    true
}

/// Eliminate vertices of minimum fill-in until none remain, returning the
/// resulting ordering and the treewidth upper bound it induces.
pub fn order_fillin(mut graph: Graph) -> (Ordering, usize) {
    let nodes_len = graph.nodes_len();
    let mut ordering = Ordering::new(nodes_len);
    let mut idx = PriorityIndex::new(nodes_len, nodes_len.max(1));

    let mut work = FixedBitSet::with_capacity(nodes_len);
    let mut d_b = FixedBitSet::with_capacity(nodes_len);
    let mut a_only = FixedBitSet::with_capacity(nodes_len);
    let mut common = FixedBitSet::with_capacity(nodes_len);
    let mut b_excl = FixedBitSet::with_capacity(nodes_len);
    let mut c_excl = FixedBitSet::with_capacity(nodes_len);

    for v in 0..nodes_len {
        if graph.is_live(v) {
            let f = node_calc_fillin(&graph, v, &mut work);
            idx.add(v, f);
        }
    }

    let mut width = 0;
    let steps = graph.vertex_count();
    for i in 0..steps {
        let Some(v) = idx.min_vertex() else { break };
        idx.remove(v);

        let Some(degree_v) = graph.degree(v) else {
            continue;
        };
        width = width.max(degree_v);
        ordering.set(i, v);

        let row_v = graph.adjacency_row(v).clone();
        let neighbors: Vec<usize> = row_v.ones().collect();

        for &b in &neighbors {
            // D_b = neighbors of v not yet adjacent to b; only pair b with
            // c > b so each (b, c) pair is visited once. Collected up front
            // since `d_b` itself is never mutated inside the loop below.
            bitrow::diff(&mut d_b, &row_v, graph.adjacency_row(b));
            let candidates: Vec<usize> = d_b.ones().filter(|&c| c > b).collect();

            for cv in candidates {
                bitrow::common_and_both_diffs(&mut common, &mut b_excl, &mut c_excl, graph.adjacency_row(b), graph.adjacency_row(cv));
                common.set(v, false);
                b_excl.set(cv, false);
                c_excl.set(b, false);

                for x in common.ones().collect::<Vec<_>>() {
                    if let Some(bucket) = idx.bucket_of(x) {
                        idx.move_to(x, bucket.saturating_sub(1));
                    }
                }
                let inc_b = bitrow::popcount(&b_excl);
                let inc_c = bitrow::popcount(&c_excl);
                if inc_b > 0 {
                    if let Some(bucket) = idx.bucket_of(b) {
                        idx.move_to(b, bucket + inc_b);
                    }
                }
                if inc_c > 0 {
                    if let Some(bucket) = idx.bucket_of(cv) {
                        idx.move_to(cv, bucket + inc_c);
                    }
                }

                graph.add_edge(b, cv);
            }

            // b gained v's whole neighborhood as new common neighbors except
            // for the ones it already had; the ones it already had needed no
            // new edge, so their contribution to fill-in(b) must be backed
            // out (the "ghost edge" correction).
            bitrow::diff(&mut a_only, graph.adjacency_row(b), &row_v);
            a_only.set(v, false);
            let decrease = bitrow::popcount(&a_only);
            if decrease > 0 {
                if let Some(bucket) = idx.bucket_of(b) {
                    idx.move_to(b, bucket.saturating_sub(decrease));
                }
            }
        }

        graph.delete_vertex(v);
        debug!(vertex = v, width = degree_v, "min-fill-in: eliminated vertex");
        debug_assert!(debug_validate_fillin(&graph, &idx, &mut work));
    }

    (ordering, width)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn path_yields_width_one() {
        let mut g = Graph::new(5);
        for i in 0..4 {
            g.add_edge(i, i + 1);
        }
        let (ordering, width) = order_fillin(g);
        assert_eq!(width, 1);
        assert!(ordering.is_permutation());
    }

    #[test]
    fn k4_yields_width_three() {
        let mut g = Graph::new(4);
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(u, v);
            }
        }
        let (ordering, width) = order_fillin(g);
        assert_eq!(width, 3);
        assert!(ordering.is_permutation());
    }

    #[test]
    fn cycle_of_five_yields_width_two() {
        // Every vertex in C5 has fill-in 1 (its two neighbors are never
        // adjacent), so the first pick is arbitrary but the algorithm must
        // still end up needing exactly one fill-in edge per elimination
        // until a clique remains.
        let mut g = Graph::new(5);
        for i in 0..5 {
            g.add_edge(i, (i + 1) % 5);
        }
        let (ordering, width) = order_fillin(g);
        assert_eq!(width, 2);
        assert!(ordering.is_permutation());
    }

    #[test]
    fn star_has_zero_fillin_and_width_one() {
        // Every leaf has fill-in 0 (a single neighbor has no pairs); the hub
        // has C(5,2) = 10 missing edges among its neighbors, so it is
        // eliminated last and no fill-in edges are ever created.
        let mut g = Graph::new(6);
        for leaf in 1..6 {
            g.add_edge(0, leaf);
        }
        let (ordering, width) = order_fillin(g);
        assert_eq!(width, 1);
        assert!(ordering.is_permutation());
        assert_eq!(ordering.get(5), Some(0));
    }

    #[test]
    fn two_triangles_sharing_an_edge_yields_width_two() {
        // vertices 0-1-2-3; edges {0,1},{1,2},{2,0},{1,3},{2,3}. 0 and 3
        // each have fill-in 0 (their two neighbors are already adjacent).
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        g.add_edge(1, 3);
        g.add_edge(2, 3);
        let (ordering, width) = order_fillin(g);
        assert_eq!(width, 2);
        let first = ordering.get(0).unwrap();
        assert!(first == 0 || first == 3);
    }

    #[test]
    fn empty_graph_produces_empty_ordering() {
        let g = Graph::new(0);
        let (ordering, width) = order_fillin(g);
        assert_eq!(width, 0);
        assert!(ordering.is_empty());
    }

    proptest! {
        // Random graphs routinely eliminate a vertex with two non-adjacent
        // neighbors whose exclusive-neighbor counts differ, unlike every
        // hand-written fixture above (all symmetric or fill-free). That
        // path is exactly where `fillin(b)`/`fillin(c)` must receive the
        // correctly-paired popcount; a swap between the two is caught here
        // both by the driver's own `debug_validate_fillin` self-check and
        // by the independent width replay below (P6).
        #[test]
        fn fillin_produces_a_valid_ordering_consistent_with_replay(
            edges in proptest::collection::vec((0..8usize, 0..8usize), 0..24)
        ) {
            let mut g = Graph::new(8);
            for (u, w) in edges {
                g.add_edge(u, w);
            }

            let (ordering, width) = order_fillin(g.clone());
            prop_assert!(ordering.is_permutation());

            let mut replay = g;
            let mut replayed_width = 0;
            for v in ordering.iter() {
                if let Some(d) = replay.eliminate(v, None) {
                    replayed_width = replayed_width.max(d);
                }
            }
            prop_assert_eq!(width, replayed_width);
        }
    }
}
