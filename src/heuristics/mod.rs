//! The three elimination-ordering heuristics: minimum-degree, minimum
//! fill-in, and maximum cardinality search.
//!
//! Each driver consumes the graph it is given (min-degree and min-fill-in
//! eliminate online; MCS replays on a clone to compute the width). Clone the
//! graph first if you need to run more than one heuristic on the same input.

mod degree;
mod fillin;
mod mcs;

pub use degree::order_degree;
pub use fillin::order_fillin;
pub use mcs::order_mcs;

use crate::graph::Graph;
use crate::ordering::Ordering;

/// Which heuristic to run, as a tagged dispatch target instead of a function
/// pointer (see the "function-pointer polymorphism" design note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Heuristic {
    /// Eliminate the vertex of minimum degree at each step.
    Degree,
    /// Eliminate the vertex that creates the fewest fill-in edges.
    #[value(name = "fillin")]
    FillIn,
    /// Maximum cardinality search (builds the ordering in reverse).
    Mcs,
}

impl Heuristic {
    /// Run this heuristic to completion, returning the resulting ordering
    /// and its treewidth upper bound.
    pub fn run(self, graph: Graph) -> (Ordering, usize) {
        match self {
            Heuristic::Degree => order_degree(graph),
            Heuristic::FillIn => order_fillin(graph),
            Heuristic::Mcs => order_mcs(graph),
        }
    }
}

impl core::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Heuristic::Degree => "min-degree",
            Heuristic::FillIn => "min-fill-in",
            Heuristic::Mcs => "mcs",
        };
        f.write_str(name)
    }
}
