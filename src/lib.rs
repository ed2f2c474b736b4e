//! `tworder` computes upper bounds on treewidth by running classical
//! elimination-ordering heuristics — minimum degree, minimum fill-in, and
//! maximum cardinality search — over an undirected simple graph.
//!
//! The graph store ([`graph::Graph`]) and the priority structure that picks
//! the next vertex to eliminate ([`priority::PriorityIndex`]) are kept
//! strictly decoupled: the graph never inspects priorities and the index
//! never inspects the graph. The three heuristic drivers in [`heuristics`]
//! are what wire the two together.

pub mod bitrow;
pub mod error;
pub mod graph;
pub mod heuristics;
pub mod io;
pub mod ordering;
pub mod priority;
pub mod treedecomp;

pub use error::{Error, ErrorKind, Result};
pub use graph::Graph;
pub use heuristics::Heuristic;
pub use ordering::Ordering;
pub use priority::PriorityIndex;
