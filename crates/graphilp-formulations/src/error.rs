//! Formulation errors.

use graphilp_core::ModelError;

#[derive(Debug, Clone, PartialEq)]
pub enum FormulationError {
    /// A builder parameter is out of range (e.g. zero colors).
    InvalidArgument { reason: String },
    /// The underlying model rejected a variable, row or objective.
    Model(ModelError),
    /// A solution does not have one value per model variable.
    SolutionShape { expected: usize, got: usize },
    /// No color variable of this vertex is set in the solution.
    UnassignedVertex { vertex: usize },
}

impl FormulationError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            FormulationError::InvalidArgument { .. } => "FORMULATION_INVALID_ARGUMENT",
            FormulationError::Model(err) => err.code(),
            FormulationError::SolutionShape { .. } => "SOLUTION_INVALID_SHAPE",
            FormulationError::UnassignedVertex { .. } => "SOLUTION_UNASSIGNED_VERTEX",
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        FormulationError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FormulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulationError::InvalidArgument { reason } => {
                write!(f, "[{}] {}", self.code(), reason)
            }
            FormulationError::Model(err) => write!(f, "{err}"),
            FormulationError::SolutionShape { expected, got } => write!(
                f,
                "[{}] Solution has {} primal values, model has {} variables",
                self.code(),
                got,
                expected
            ),
            FormulationError::UnassignedVertex { vertex } => write!(
                f,
                "[{}] Vertex {} has no color in the solution",
                self.code(),
                vertex + 1
            ),
        }
    }
}

impl std::error::Error for FormulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormulationError::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for FormulationError {
    fn from(err: ModelError) -> Self {
        FormulationError::Model(err)
    }
}
