//! DIMACS `.col` graph loader.
//!
//! - `c ...` comment lines are ignored
//! - `p edge N M` declares N nodes and M edges
//! - `e U V` declares an undirected edge between 1-indexed nodes U and V
//!
//! ```text
//! c triangle
//! p edge 3 3
//! e 1 2
//! e 2 3
//! e 1 3
//! ```

use crate::error::ConfigError;
use crate::graph::Graph;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("failed to read DIMACS file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("no problem line found (expected 'p edge N M')")]
    MissingProblemLine,
    #[error(transparent)]
    Graph(#[from] ConfigError),
}

fn parse_error(line: usize, message: impl Into<String>) -> DimacsError {
    DimacsError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_count(token: &str, line: usize, what: &str) -> Result<usize, DimacsError> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {what} '{token}'")))
}

/// Reads and parses a DIMACS file.
///
/// # Errors
///
/// Returns [`DimacsError::Io`] if the file cannot be read, otherwise the same
/// errors as [`parse_str`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Graph, DimacsError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "loading DIMACS graph");
    parse_str(&text)
}

/// Parses DIMACS text into a [`Graph`]. Duplicate edges are merged.
///
/// # Errors
///
/// - [`DimacsError::Parse`] for malformed lines, a node count above
///   [`Graph::MAX_NODES`], edges before the problem line, or node ids
///   outside `1..=N`
/// - [`DimacsError::MissingProblemLine`] if there is no `p edge` line
/// - [`DimacsError::Graph`] for zero nodes or a self-loop edge
pub fn parse_str(text: &str) -> Result<Graph, DimacsError> {
    let mut declared: Option<(usize, usize)> = None;
    let mut edges = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let parts: Vec<&str> = raw.split_whitespace().collect();
        match parts.as_slice() {
            [] | ["c", ..] => {}
            ["p", "edge", nodes, count, ..] => {
                if declared.is_some() {
                    return Err(parse_error(line, "duplicate problem line"));
                }
                let num_nodes = parse_count(nodes, line, "node count")?;
                if num_nodes > Graph::MAX_NODES {
                    return Err(parse_error(
                        line,
                        format!("node count {num_nodes} exceeds limit {}", Graph::MAX_NODES),
                    ));
                }
                declared = Some((num_nodes, parse_count(count, line, "edge count")?));
            }
            ["p", ..] => {
                return Err(parse_error(
                    line,
                    format!("expected 'p edge N M', got '{}'", raw.trim()),
                ));
            }
            ["e", u, v, ..] => {
                let Some((num_nodes, _)) = declared else {
                    return Err(parse_error(line, "edge before problem line"));
                };
                let u = parse_count(u, line, "node id")?;
                let v = parse_count(v, line, "node id")?;
                for id in [u, v] {
                    if id == 0 || id > num_nodes {
                        return Err(parse_error(
                            line,
                            format!("node id {id} out of range 1..={num_nodes}"),
                        ));
                    }
                }
                edges.push((u - 1, v - 1));
            }
            ["e", ..] => {
                return Err(parse_error(
                    line,
                    format!("expected 'e U V', got '{}'", raw.trim()),
                ));
            }
            [other, ..] => debug!(line, kind = *other, "ignoring unknown DIMACS line"),
        }
    }

    let (num_nodes, declared_edges) = declared.ok_or(DimacsError::MissingProblemLine)?;
    let graph = Graph::from_edges(num_nodes, &edges)?;
    if graph.num_edges() != declared_edges {
        warn!(
            declared = declared_edges,
            actual = graph.num_edges(),
            "DIMACS edge count does not match problem line"
        );
    }
    Ok(graph)
}
