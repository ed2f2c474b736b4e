//! Text import/export for graphs and orderings (§6).
//!
//! These are the only fallible boundary operations in the crate; everything
//! else guards-and-ignores invalid input (see `error`).

use error_stack::{report, ResultExt};

use crate::error::{ErrorKind, Result};
use crate::graph::Graph;
use crate::ordering::Ordering;

/// Parse the adjacency-list format: `# nodes N` followed by `N` lines of
/// `vertex_id neighbor_id...`.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| report!(ErrorKind::Parse("empty input, expected '# nodes N' header".into())))?;
    let n = parse_header(header)?;

    let mut graph = Graph::new(n);
    for (seen, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let id_tok = tokens
            .next()
            .ok_or_else(|| report!(ErrorKind::Parse(format!("line {}: missing vertex id", seen + 2))))?;
        let id: usize = id_tok
            .parse()
            .map_err(|_| report!(ErrorKind::Parse(format!("line {}: invalid vertex id {id_tok:?}", seen + 2))))?;
        if id >= n {
            return Err(report!(ErrorKind::Parse(format!(
                "line {}: vertex id {id} out of range for {n} nodes",
                seen + 2
            ))));
        }
        for tok in tokens {
            let neighbor: usize = tok
                .parse()
                .map_err(|_| report!(ErrorKind::Parse(format!("line {}: invalid neighbor id {tok:?}", seen + 2))))?;
            if neighbor >= n {
                return Err(report!(ErrorKind::Parse(format!(
                    "line {}: neighbor id {neighbor} out of range for {n} nodes",
                    seen + 2
                ))));
            }
            graph.add_edge(id, neighbor);
        }
    }

    Ok(graph)
}

fn parse_header(header: &str) -> Result<usize> {
    let mut tokens = header.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("#"), Some("nodes"), Some(n)) => n
            .parse()
            .map_err(|_| report!(ErrorKind::Parse(format!("invalid node count {n:?} in header")))),
        _ => Err(report!(ErrorKind::Parse(format!(
            "expected '# nodes N' header, found {header:?}"
        )))),
    }
}

/// Render a graph as the adjacency-list format: only live vertices and edges
/// are written (this is the counterpart used by the round-trip property, not
/// the debug dump below).
pub fn print_graph(graph: &Graph) -> String {
    let mut out = format!("# nodes {}\n", graph.nodes_len());
    for v in 0..graph.nodes_len() {
        if !graph.is_live(v) {
            continue;
        }
        out.push_str(&v.to_string());
        for w in graph.neighbors(v) {
            out.push(' ');
            out.push_str(&w.to_string());
        }
        out.push('\n');
    }
    out
}

/// Render the debug dump: every vertex (including deleted ones, tagged `d`).
pub fn print_graph_debug(graph: &Graph) -> String {
    let mut out = format!("# nodes {}\n", graph.nodes_len());
    for v in 0..graph.nodes_len() {
        out.push_str(&v.to_string());
        if !graph.is_live(v) {
            out.push_str(" d");
        }
        for w in graph.neighbors(v) {
            out.push(' ');
            out.push_str(&w.to_string());
        }
        out.push('\n');
    }
    out
}

/// Parse one line of `n` space-separated ids forming a permutation of
/// `[0, n)`.
pub fn parse_ordering(text: &str, n: usize) -> Result<Ordering> {
    let line = text
        .lines()
        .next()
        .ok_or_else(|| report!(ErrorKind::Parse("empty input, expected an ordering line".into())))?;

    let mut ordering = Ordering::new(n);
    let mut count = 0usize;
    for (i, tok) in line.split_whitespace().enumerate() {
        let id: usize = tok
            .parse()
            .map_err(|_| report!(ErrorKind::Parse(format!("token {i}: invalid vertex id {tok:?}"))))?;
        if id >= n {
            return Err(report!(ErrorKind::Parse(format!(
                "token {i}: vertex id {id} out of range for {n} nodes"
            ))));
        }
        ordering.set(i, id);
        count += 1;
    }

    if count != n {
        return Err(report!(ErrorKind::Parse(format!(
            "expected {n} ordering entries, found {count}"
        ))));
    }
    if !ordering.is_permutation() {
        return Err(report!(ErrorKind::Parse(
            "ordering is not a permutation of [0, n)".into()
        )));
    }

    Ok(ordering)
}

/// Render an ordering as one line of space-separated ids, newline-terminated.
pub fn print_ordering(ordering: &Ordering) -> String {
    let body = ordering
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{body}\n")
}

/// Read and parse a graph from a file path, wrapping I/O failures as
/// [`ErrorKind::Io`].
pub fn read_graph_file(path: &std::path::Path) -> Result<Graph> {
    let text =
        std::fs::read_to_string(path).change_context(ErrorKind::Io(format!("reading {}", path.display())))?;
    parse_graph(&text)
}

/// Read and parse an ordering from a file path, against a graph of `n` nodes.
pub fn read_ordering_file(path: &std::path::Path, n: usize) -> Result<Ordering> {
    let text =
        std::fs::read_to_string(path).change_context(ErrorKind::Io(format!("reading {}", path.display())))?;
    parse_ordering(&text, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_edges() {
        let text = "# nodes 3\n0 1 2\n1 0\n2 0\n";
        let g = parse_graph(text).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(0, 2));
        assert!(!g.has_edge(1, 2));
    }

    #[test]
    fn rejects_bad_header() {
        assert!(parse_graph("nope\n").is_err());
    }

    #[test]
    fn rejects_out_of_range_neighbor() {
        assert!(parse_graph("# nodes 2\n0 7\n").is_err());
    }

    #[test]
    fn round_trip_preserves_edges() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);

        let text = print_graph(&g);
        let reimported = parse_graph(&text).unwrap();

        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(g.has_edge(u, v), reimported.has_edge(u, v));
            }
        }
    }

    #[test]
    fn ordering_round_trip() {
        let mut ordering = Ordering::new(3);
        ordering.set(0, 2);
        ordering.set(1, 0);
        ordering.set(2, 1);

        let text = print_ordering(&ordering);
        let reparsed = parse_ordering(&text, 3).unwrap();
        assert_eq!(reparsed.iter().collect::<Vec<_>>(), vec![2, 0, 1]);
    }

    #[test]
    fn ordering_rejects_non_permutation() {
        assert!(parse_ordering("0 0 1\n", 3).is_err());
    }

    #[test]
    fn debug_dump_marks_deleted_vertices() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1);
        g.delete_vertex(0);
        let dump = print_graph_debug(&g);
        assert!(dump.contains("0 d"));
    }
}
