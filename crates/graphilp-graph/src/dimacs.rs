//! DIMACS edge-list format.
//!
//! ```text
//! c optional comment
//! p edge 4 2
//! e 1 2
//! e 3 4
//! ```
//!
//! The first `p <format> <vertices> <edges>` line is the header; `e <i> <j>`
//! lines carry 1-based endpoints. Blank lines and any other leading token are
//! skipped. Edges are normalized to unordered pairs and deduplicated before the
//! header's edge count is checked against them.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::{debug, warn};

use crate::error::GraphError;
use crate::graph::{Graph, check_vertex_count};

const HEADER_TOKEN: &str = "p";
const EDGE_TOKEN: &str = "e";
const DEFAULT_FORMAT_TAG: &str = "edge";

#[derive(Debug, Clone, Copy)]
struct Header {
    line: usize,
    vertex_count: usize,
    edge_count: usize,
}

#[derive(Debug, Clone, Copy)]
struct RawEdge {
    line: usize,
    u: usize,
    v: usize,
}

/// Read a graph from DIMACS text.
///
/// # Errors
///
/// - [`GraphError::Format`] if there is no header, or a header/edge line is malformed
/// - [`GraphError::InvalidArgument`] if an endpoint is outside `1..=vertices` or an edge is a self-loop
/// - [`GraphError::Consistency`] if the header's edge count differs from the distinct edges read
/// - [`GraphError::Io`] if the reader fails
pub fn read<R: BufRead>(reader: R) -> Result<Graph, GraphError> {
    let mut header: Option<Header> = None;
    let mut raw_edges = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(HEADER_TOKEN) => match header {
                Some(first) => warn!(
                    component = "graph",
                    operation = "read_dimacs",
                    status = "warn",
                    line = line_no,
                    first_header_line = first.line,
                    "Ignoring additional header line"
                ),
                None => header = Some(parse_header(line_no, tokens)?),
            },
            Some(EDGE_TOKEN) => raw_edges.push(parse_edge(line_no, tokens)?),
            _ => {}
        }
    }

    let header = header.ok_or_else(|| GraphError::Format {
        line: None,
        reason: "no `p` header line found".to_string(),
    })?;

    let mut edges = BTreeSet::new();
    for edge in &raw_edges {
        edges.insert(normalize_edge(edge, header.vertex_count)?);
    }

    if edges.len() != header.edge_count {
        return Err(GraphError::Consistency {
            declared: header.edge_count,
            parsed: edges.len(),
        });
    }

    debug!(
        component = "graph",
        operation = "read_dimacs",
        status = "success",
        vertices = header.vertex_count,
        edges = edges.len(),
        edge_lines = raw_edges.len(),
        "Read DIMACS graph"
    );

    Ok(Graph::from_normalized(header.vertex_count, edges))
}

/// Read a graph from an in-memory DIMACS string.
pub fn parse_str(input: &str) -> Result<Graph, GraphError> {
    read(input.as_bytes())
}

/// Read a graph from a DIMACS file.
pub fn read_path(path: impl AsRef<Path>) -> Result<Graph, GraphError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| GraphError::Io {
        reason: format!("{}: {err}", path.display()),
    })?;
    read(BufReader::new(file))
}

/// Write `graph` as DIMACS text with the `edge` format tag.
///
/// Edges are written in ascending order with 1-based endpoints, so
/// [`read`] returns an equal graph.
pub fn write<W: Write>(graph: &Graph, mut writer: W) -> Result<(), GraphError> {
    for line in lines(graph) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// The text [`write`] produces, as a string.
pub fn to_dimacs_string(graph: &Graph) -> String {
    lines(graph).map(|line| line + "\n").collect()
}

fn lines(graph: &Graph) -> impl Iterator<Item = String> + '_ {
    let header = format!(
        "{HEADER_TOKEN} {DEFAULT_FORMAT_TAG} {} {}",
        graph.vertex_count(),
        graph.edge_count()
    );
    std::iter::once(header).chain(
        graph
            .edges()
            .map(|(u, v)| format!("{EDGE_TOKEN} {} {}", u + 1, v + 1)),
    )
}

fn parse_header(line: usize, mut tokens: SplitWhitespace<'_>) -> Result<Header, GraphError> {
    let (Some(_format), Some(vertices), Some(edges)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(GraphError::format(
            line,
            "header must read `p <format> <vertices> <edges>`",
        ));
    };
    let vertex_count = parse_count(line, "vertex count", vertices)?;
    check_vertex_count(vertex_count, Some(line))?;
    Ok(Header {
        line,
        vertex_count,
        edge_count: parse_count(line, "edge count", edges)?,
    })
}

fn parse_edge(line: usize, mut tokens: SplitWhitespace<'_>) -> Result<RawEdge, GraphError> {
    let (Some(u), Some(v)) = (tokens.next(), tokens.next()) else {
        return Err(GraphError::format(line, "edge line must read `e <i> <j>`"));
    };
    Ok(RawEdge {
        line,
        u: parse_count(line, "vertex", u)?,
        v: parse_count(line, "vertex", v)?,
    })
}

fn parse_count(line: usize, what: &str, token: &str) -> Result<usize, GraphError> {
    token
        .parse::<usize>()
        .map_err(|_| GraphError::format(line, format!("{what} `{token}` is not a non-negative integer")))
}

fn normalize_edge(edge: &RawEdge, vertex_count: usize) -> Result<(usize, usize), GraphError> {
    for endpoint in [edge.u, edge.v] {
        if endpoint == 0 || endpoint > vertex_count {
            return Err(GraphError::InvalidArgument {
                line: Some(edge.line),
                reason: format!("vertex {endpoint} is outside 1..={vertex_count}"),
            });
        }
    }
    if edge.u == edge.v {
        return Err(GraphError::InvalidArgument {
            line: Some(edge.line),
            reason: format!("self-loop on vertex {}", edge.u),
        });
    }
    let (u, v) = (edge.u - 1, edge.v - 1);
    Ok((u.min(v), u.max(v)))
}
