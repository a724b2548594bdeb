//! Errors raised while building or checking a model.

use graphilp_expr::ids::{ConstraintId, VariableId};

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A term refers to a column the model does not have.
    UnknownVariable(VariableId),
    /// The next column would not get a 32-bit id.
    TooManyVariables,
    /// The next row would not get a 32-bit id.
    TooManyRows,
    InvalidRowBounds { lower: f64, upper: f64 },
    NonFiniteCoefficient { variable: VariableId, coefficient: f64 },
    ObjectiveAlreadySet,
    AssignmentLength { expected: usize, got: usize },
    /// Assigned value is neither 0 nor 1.
    NotBinary { variable: VariableId, value: f64 },
    RowViolated {
        constraint: ConstraintId,
        name: String,
        activity: f64,
        lower: f64,
        upper: f64,
    },
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::UnknownVariable(_) => "MODEL_UNKNOWN_VARIABLE",
            ModelError::TooManyVariables => "MODEL_TOO_MANY_VARIABLES",
            ModelError::TooManyRows => "MODEL_TOO_MANY_ROWS",
            ModelError::InvalidRowBounds { .. } => "ROW_INVALID_BOUNDS",
            ModelError::NonFiniteCoefficient { .. } => "COEFFICIENT_NOT_FINITE",
            ModelError::ObjectiveAlreadySet => "OBJECTIVE_ALREADY_SET",
            ModelError::AssignmentLength { .. } => "ASSIGNMENT_INVALID_LENGTH",
            ModelError::NotBinary { .. } => "ASSIGNMENT_NOT_BINARY",
            ModelError::RowViolated { .. } => "ASSIGNMENT_ROW_VIOLATED",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code();
        match self {
            ModelError::UnknownVariable(var) => write!(f, "[{code}] Unknown column {var}"),
            ModelError::TooManyVariables => {
                write!(f, "[{code}] Column count would exceed {}", u32::MAX)
            }
            ModelError::TooManyRows => write!(f, "[{code}] Row count would exceed {}", u32::MAX),
            ModelError::InvalidRowBounds { lower, upper } => {
                write!(f, "[{code}] Row bounds [{lower}, {upper}] are empty")
            }
            ModelError::NonFiniteCoefficient {
                variable,
                coefficient,
            } => write!(f, "[{code}] Coefficient {coefficient} on {variable} is not finite"),
            ModelError::ObjectiveAlreadySet => write!(f, "[{code}] Objective is already set"),
            ModelError::AssignmentLength { expected, got } => {
                write!(f, "[{code}] Expected {expected} values, got {got}")
            }
            ModelError::NotBinary { variable, value } => {
                write!(f, "[{code}] {variable} = {value} is not 0 or 1")
            }
            ModelError::RowViolated {
                name,
                activity,
                lower,
                upper,
                ..
            } => write!(
                f,
                "[{code}] Row {name} evaluates to {activity}, outside [{lower}, {upper}]"
            ),
        }
    }
}

impl std::error::Error for ModelError {}
