//! Tree-decomposition conversion — placeholder.
//!
//! The elimination cliques of a chordal completion form a tree decomposition
//! of the original graph, but that construction is not implemented here; see
//! Open Question (a) in `SPEC_FULL.md`. Both the library entry point and the
//! `-t` CLI mode report `ErrorKind::NotImplemented` rather than silently
//! returning an empty result.

use error_stack::report;

use crate::error::{ErrorKind, Result};
use crate::graph::Graph;
use crate::ordering::Ordering;

/// A tree decomposition: a tree of bags, each bag a set of original vertex
/// ids. Never constructed today — see the module docs.
#[derive(Debug, Clone)]
pub struct TreeDecomposition {
    pub bags: Vec<Vec<usize>>,
}

/// Convert a graph and one of its elimination orderings into a tree
/// decomposition. Always returns `Err(ErrorKind::NotImplemented)`.
pub fn eo_to_tree_decomposition(_graph: &Graph, _ordering: &Ordering) -> Result<TreeDecomposition> {
    Err(report!(ErrorKind::NotImplemented(
        "elimination-ordering-to-tree-decomposition conversion".into()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_not_implemented() {
        let graph = Graph::new(3);
        let ordering = Ordering::new(3);
        assert!(eo_to_tree_decomposition(&graph, &ordering).is_err());
    }
}
