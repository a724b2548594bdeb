//! CLI error type and exit-code mapping.

use std::path::PathBuf;

use graphilp_core::SolverError;
use graphilp_formulations::FormulationError;
use graphilp_graph::GraphError;

/// Exit status for bad input: unreadable files, malformed graphs, bad flags.
pub const EXIT_INPUT: i32 = 1;
/// Exit status for solver failures: infeasible, unbounded, backend errors.
pub const EXIT_SOLVER: i32 = 2;

#[derive(Debug)]
pub enum CliError {
    Graph { path: PathBuf, source: GraphError },
    Formulation(FormulationError),
    Solver(SolverError),
    Logging { reason: String },
    Output { reason: String },
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Graph { source, .. } => source.code(),
            CliError::Formulation(err) => err.code(),
            CliError::Solver(err) => err.code(),
            CliError::Logging { .. } => "CLI_LOGGING",
            CliError::Output { .. } => "CLI_OUTPUT",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Graph { .. } | CliError::Logging { .. } | CliError::Output { .. } => {
                EXIT_INPUT
            }
            CliError::Formulation(
                FormulationError::InvalidArgument { .. } | FormulationError::Model(_),
            ) => EXIT_INPUT,
            CliError::Formulation(_) | CliError::Solver(_) => EXIT_SOLVER,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Graph { path, source } => write!(f, "{}: {}", path.display(), source),
            CliError::Formulation(err) => write!(f, "{err}"),
            CliError::Solver(err) => write!(f, "{err}"),
            CliError::Logging { reason } | CliError::Output { reason } => {
                write!(f, "[{}] {}", self.code(), reason)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Graph { source, .. } => Some(source),
            CliError::Formulation(err) => Some(err),
            CliError::Solver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormulationError> for CliError {
    fn from(err: FormulationError) -> Self {
        CliError::Formulation(err)
    }
}

impl From<SolverError> for CliError {
    fn from(err: SolverError) -> Self {
        CliError::Solver(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphilp_core::SolverStatus;

    #[test]
    fn input_errors_exit_with_one() {
        let err = CliError::Graph {
            path: PathBuf::from("g.col"),
            source: GraphError::Consistency {
                declared: 3,
                parsed: 2,
            },
        };
        assert_eq!(err.exit_code(), EXIT_INPUT);
        assert_eq!(err.code(), "GRAPH_EDGE_COUNT_MISMATCH");
        assert!(err.to_string().starts_with("g.col: [GRAPH_EDGE_COUNT_MISMATCH]"));

        let err = CliError::from(FormulationError::InvalidArgument {
            reason: "max_colors must be at least 1".to_string(),
        });
        assert_eq!(err.exit_code(), EXIT_INPUT);
    }

    #[test]
    fn solver_errors_exit_with_two() {
        let err = CliError::from(SolverError::SolveFailure {
            status: SolverStatus::Infeasible,
        });
        assert_eq!(err.exit_code(), EXIT_SOLVER);
        assert_eq!(err.code(), "SOLVER_INFEASIBLE");

        let err = CliError::from(FormulationError::UnassignedVertex { vertex: 0 });
        assert_eq!(err.exit_code(), EXIT_SOLVER);
    }
}
