//! Minimum-degree elimination ordering (§4.4).

use tracing::debug;

use crate::graph::Graph;
use crate::ordering::Ordering;
use crate::priority::PriorityIndex;

/// Eliminate vertices of minimum degree until none remain, returning the
/// resulting ordering and the treewidth upper bound it induces.
pub fn order_degree(mut graph: Graph) -> (Ordering, usize) {
    let nodes_len = graph.nodes_len();
    let mut ordering = Ordering::new(nodes_len);
    let mut idx = PriorityIndex::new(nodes_len, nodes_len.max(1));

    for v in 0..nodes_len {
        if let Some(d) = graph.degree(v) {
            idx.add(v, d);
        }
    }

    let mut width = 0;
    let mut neighbors = Vec::new();
    let steps = graph.vertex_count();
    for i in 0..steps {
        let Some(v) = idx.min_vertex() else { break };
        idx.remove(v);

        let Some(d) = graph.eliminate(v, Some(&mut neighbors)) else {
            continue;
        };
        width = width.max(d);
        ordering.set(i, v);
        debug!(vertex = v, width = d, "min-degree: eliminated vertex");

        for &w in &neighbors {
            if let Some(new_degree) = graph.degree(w) {
                idx.move_to(w, new_degree);
            }
        }
    }

    (ordering, width)
}
