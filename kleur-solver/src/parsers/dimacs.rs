//! A parser for graph colouring instances in the DIMACS graph format.
//!
//! An instance looks as follows:
//! ```text
//! c A triangle.
//! p edge 3 3
//! e 1 2
//! e 2 3
//! e 1 3
//! ```
//! Lines starting with `c` are comments. The single header line `p edge N M` announces `N`
//! vertices and `M` edges (`p col N M` is accepted as well), after which every edge is given as
//! `e u v`. Vertices are numbered from 1 in the file, but from 0 in the resulting
//! [`ConstraintGraph`].
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::str::FromStr;

use kleur_core::graph::ConstraintGraph;
use kleur_core::graph::GraphError;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DimacsParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("missing dimacs header")]
    MissingHeader,

    #[error("'{0}' is an invalid header")]
    InvalidHeader(String),

    #[error("multiple dimacs headers found")]
    DuplicateHeader,

    #[error("line {line} describes an edge before the header")]
    EdgeBeforeHeader { line: usize },

    #[error("'{0}' is an invalid edge")]
    InvalidEdge(String),

    #[error("unexpected line '{0}'")]
    UnexpectedLine(String),

    #[error("expected to parse {expected} edges, but parsed {parsed}")]
    IncorrectEdgeCount { expected: usize, parsed: usize },

    #[error("the edges do not form a valid graph: {0}")]
    Graph(#[from] GraphError),
}

/// The contents of the `p` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GraphHeader {
    num_vertices: usize,
    num_edges: usize,
}

impl FromStr for GraphHeader {
    type Err = DimacsParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || DimacsParseError::InvalidHeader(line.to_owned());
        let mut components = line.split_whitespace();

        if components.next() != Some("p") {
            return Err(invalid());
        }

        if !matches!(components.next(), Some("edge" | "col")) {
            return Err(invalid());
        }

        let num_vertices = parse_number(components.next())
            .filter(|&num_vertices| u32::try_from(num_vertices).is_ok())
            .ok_or_else(invalid)?;
        let num_edges = parse_number(components.next()).ok_or_else(invalid)?;

        if components.next().is_some() {
            return Err(invalid());
        }

        Ok(GraphHeader {
            num_vertices,
            num_edges,
        })
    }
}

/// Reads a graph in the DIMACS graph format from `source`.
pub fn parse_graph(source: impl Read) -> Result<ConstraintGraph, DimacsParseError> {
    let reader = BufReader::new(source);
    let mut header: Option<GraphHeader> = None;
    let mut edges = vec![];

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed.chars().next() {
            None | Some('c') => {}

            Some('p') => {
                if header.is_some() {
                    return Err(DimacsParseError::DuplicateHeader);
                }

                header = Some(trimmed.parse::<GraphHeader>()?);
            }

            Some('e') => {
                if header.is_none() {
                    return Err(DimacsParseError::EdgeBeforeHeader { line: index + 1 });
                }

                edges.push(parse_edge(trimmed)?);
            }

            Some(_) => return Err(DimacsParseError::UnexpectedLine(trimmed.to_owned())),
        }
    }

    let header = header.ok_or(DimacsParseError::MissingHeader)?;

    if header.num_edges != edges.len() {
        return Err(DimacsParseError::IncorrectEdgeCount {
            expected: header.num_edges,
            parsed: edges.len(),
        });
    }

    debug!(
        "Parsed DIMACS graph with {} vertices and {} edges",
        header.num_vertices, header.num_edges
    );

    Ok(ConstraintGraph::new(header.num_vertices, edges)?)
}

/// Parses an `e u v` line into the (0-based) endpoints of the edge.
fn parse_edge(line: &str) -> Result<(usize, usize), DimacsParseError> {
    let invalid = || DimacsParseError::InvalidEdge(line.to_owned());
    let mut components = line.split_whitespace();

    if components.next() != Some("e") {
        return Err(invalid());
    }

    let u = parse_vertex(components.next()).ok_or_else(invalid)?;
    let v = parse_vertex(components.next()).ok_or_else(invalid)?;

    if components.next().is_some() {
        return Err(invalid());
    }

    Ok((u, v))
}

fn parse_number(component: Option<&str>) -> Option<usize> {
    component?.parse().ok()
}

/// Vertices are 1-based in the file.
fn parse_vertex(component: Option<&str>) -> Option<usize> {
    parse_number(component)?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use kleur_core::VariableId;

    use super::*;

    fn parse_to_edges(source: &str) -> Vec<(u32, u32)> {
        parse_graph(source.as_bytes())
            .expect("valid instance")
            .edges()
            .map(|(u, v)| (u.id(), v.id()))
            .collect()
    }

    fn parse_error(source: &str) -> DimacsParseError {
        parse_graph(source.as_bytes()).expect_err("invalid instance")
    }

    #[test]
    fn basic_instance_is_read() {
        let source = "p edge 3 3\ne 1 2\ne 2 3\ne 1 3";

        assert_eq!(vec![(0, 1), (0, 2), (1, 2)], parse_to_edges(source));
    }

    #[test]
    fn comments_and_empty_lines_are_ignored() {
        let source = r#"
            c a path
            c of three vertices

            p edge 3 2
            e 1 2
            c in between

            e 2 3
        "#;

        assert_eq!(vec![(0, 1), (1, 2)], parse_to_edges(source));
    }

    #[test]
    fn col_is_accepted_as_format_name() {
        let source = "p col 2 1\ne 2 1\n";

        assert_eq!(vec![(0, 1)], parse_to_edges(source));
    }

    #[test]
    fn vertices_without_edges_are_kept() {
        let graph = parse_graph("p edge 4 1\ne 1 2\n".as_bytes()).expect("valid instance");

        assert_eq!(4, graph.num_variables());
        assert_eq!(0, graph.degree(VariableId::new(3)));
    }

    #[test]
    fn duplicate_edges_count_towards_the_header() {
        let graph = parse_graph("p edge 2 2\ne 1 2\ne 2 1\n".as_bytes()).expect("valid instance");

        assert_eq!(1, graph.num_edges());
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(matches!(
            parse_error("c only a comment\n"),
            DimacsParseError::MissingHeader
        ));
    }

    #[test]
    fn malformed_headers_are_rejected() {
        for source in ["p cnf 3 2\n", "p edge 3\n", "p edge three 2\n", "p edge 3 2 1\n"] {
            assert!(
                matches!(parse_error(source), DimacsParseError::InvalidHeader(_)),
                "{source}"
            );
        }
    }

    #[test]
    fn vertex_counts_beyond_the_identifier_range_are_rejected() {
        assert!(matches!(
            parse_error("p edge 4294967296 0\n"),
            DimacsParseError::InvalidHeader(_)
        ));
    }

    #[test]
    fn huge_edge_counts_are_reported_as_a_mismatch() {
        assert!(matches!(
            parse_error("p edge 3 18446744073709551615\ne 1 2\n"),
            DimacsParseError::IncorrectEdgeCount {
                expected: usize::MAX,
                parsed: 1
            }
        ));
    }

    #[test]
    fn second_header_is_rejected() {
        assert!(matches!(
            parse_error("p edge 2 0\np edge 2 0\n"),
            DimacsParseError::DuplicateHeader
        ));
    }

    #[test]
    fn edges_before_header_are_rejected() {
        assert!(matches!(
            parse_error("c\ne 1 2\np edge 2 1\n"),
            DimacsParseError::EdgeBeforeHeader { line: 2 }
        ));
    }

    #[test]
    fn malformed_edges_are_rejected() {
        for source in ["p edge 2 1\ne 1\n", "p edge 2 1\ne 0 1\n", "p edge 2 1\ne 1 x\n"] {
            assert!(
                matches!(parse_error(source), DimacsParseError::InvalidEdge(_)),
                "{source}"
            );
        }
    }

    #[test]
    fn unknown_lines_are_rejected() {
        assert!(matches!(
            parse_error("p edge 2 1\nn 1 5\ne 1 2\n"),
            DimacsParseError::UnexpectedLine(_)
        ));
    }

    #[test]
    fn edge_count_must_match_header() {
        assert!(matches!(
            parse_error("p edge 3 3\ne 1 2\ne 2 3\n"),
            DimacsParseError::IncorrectEdgeCount {
                expected: 3,
                parsed: 2
            }
        ));
    }

    #[test]
    fn self_loops_are_rejected() {
        assert!(matches!(
            parse_error("p edge 2 1\ne 2 2\n"),
            DimacsParseError::Graph(GraphError::SelfLoop { .. })
        ));
    }

    #[test]
    fn vertices_beyond_the_header_are_rejected() {
        assert!(matches!(
            parse_error("p edge 2 1\ne 1 3\n"),
            DimacsParseError::Graph(GraphError::VariableOutOfRange { .. })
        ));
    }
}
