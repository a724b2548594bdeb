//! Graph construction and loading errors.

/// Errors raised while building or reading a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The input could not be read.
    Io { reason: String },
    /// Missing or malformed header, or a malformed edge line.
    Format { line: Option<usize>, reason: String },
    /// Declared edge count disagrees with the number of distinct edges read.
    Consistency { declared: usize, parsed: usize },
    /// Vertex out of range or self-loop.
    InvalidArgument { line: Option<usize>, reason: String },
}

impl GraphError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::Io { .. } => "GRAPH_IO",
            GraphError::Format { .. } => "GRAPH_FORMAT",
            GraphError::Consistency { .. } => "GRAPH_EDGE_COUNT_MISMATCH",
            GraphError::InvalidArgument { .. } => "GRAPH_INVALID_ARGUMENT",
        }
    }

    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Format {
            line: Some(line),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::Io { reason } => write!(f, "[{}] Failed to read graph: {}", self.code(), reason),
            GraphError::Format {
                line: Some(line),
                reason,
            }
            | GraphError::InvalidArgument {
                line: Some(line),
                reason,
            } => write!(f, "[{}] line {}: {}", self.code(), line, reason),
            GraphError::Format { line: None, reason }
            | GraphError::InvalidArgument { line: None, reason } => {
                write!(f, "[{}] {}", self.code(), reason)
            }
            GraphError::Consistency { declared, parsed } => write!(
                f,
                "[{}] Header declares {} edges but {} distinct edges were read",
                self.code(),
                declared,
                parsed
            ),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::Io {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphError;

    #[test]
    fn display_prefixes_code_and_line() {
        let err = GraphError::format(3, "edge line needs two vertices");
        assert_eq!(
            err.to_string(),
            "[GRAPH_FORMAT] line 3: edge line needs two vertices"
        );
    }

    #[test]
    fn consistency_reports_both_counts() {
        let err = GraphError::Consistency {
            declared: 3,
            parsed: 2,
        };
        assert_eq!(err.code(), "GRAPH_EDGE_COUNT_MISMATCH");
        let rendered = err.to_string();
        assert!(rendered.contains("declares 3"));
        assert!(rendered.contains("2 distinct"));
    }

    #[test]
    fn io_errors_convert() {
        let err: GraphError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), "GRAPH_IO");
    }
}
