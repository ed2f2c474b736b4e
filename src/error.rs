//! Error hierarchy for import/export and CLI-facing failures.
//!
//! Core graph and priority-index operations never return an error: invalid
//! vertex ids are guarded and ignored (or surfaced as `Option::None`) so the
//! hot elimination loops stay branch-light. `Error` is reserved for the
//! boundary operations that talk to the outside world — file import, ordering
//! parsing, and the still-unimplemented tree-decomposition conversion.

use core::fmt;

use error_stack::Context;

/// The kind of failure that occurred at an I/O or parsing boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The underlying file could not be opened or read.
    Io(String),
    /// The adjacency-list header, a vertex id, or a neighbor id failed to parse.
    Parse(String),
    /// The requested operation (tree-decomposition conversion) has no
    /// implementation yet; see Open Question (a) in `SPEC_FULL.md`.
    NotImplemented(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io(msg) => write!(f, "I/O error: {msg}"),
            ErrorKind::Parse(msg) => write!(f, "parse error: {msg}"),
            ErrorKind::NotImplemented(msg) => write!(f, "not implemented: {msg}"),
        }
    }
}

impl Context for ErrorKind {}

/// Boxed error-stack report, carried by every fallible boundary operation.
pub type Error = error_stack::Report<ErrorKind>;

/// Convenience alias matching the rest of the crate's `Result` usage.
pub type Result<T> = core::result::Result<T, Error>;
