//! What a solver backend receives and returns.
//!
//! A backend takes a finished [`Model`] by reference and answers within the
//! call. Nothing is shared between calls.

use std::time::Duration;

use graphilp_expr::ids::VariableId;

use crate::Model;

/// Options forwarded to the backend. `None` keeps the backend default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverConfig {
    /// Wall-clock limit in seconds.
    pub time_limit: Option<f64>,
    /// Relative MIP gap at which the search stops.
    pub mip_gap: Option<f64>,
    pub threads: Option<u32>,
    /// Let the backend print its own log.
    pub log_to_console: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// Stopped on the time limit; the solution is the incumbent.
    TimeLimit,
    /// Stopped on an iteration or node limit; the solution is the incumbent.
    IterationLimit,
    /// "Unbounded or infeasible" and anything else the backend cannot classify.
    Unknown,
}

impl SolverStatus {
    pub fn is_optimal(self) -> bool {
        self == SolverStatus::Optimal
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Optimal => "optimal",
            SolverStatus::Infeasible => "infeasible",
            SolverStatus::Unbounded => "unbounded",
            SolverStatus::TimeLimit => "time_limit",
            SolverStatus::IterationLimit => "iteration_limit",
            SolverStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    NoObjective,
    /// The solve ended without a point to report.
    SolveFailure { status: SolverStatus },
    /// The backend itself failed.
    Backend(String),
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::NoObjective => "SOLVER_NO_OBJECTIVE",
            SolverError::SolveFailure { status } => match status {
                SolverStatus::Infeasible => "SOLVER_INFEASIBLE",
                SolverStatus::Unbounded => "SOLVER_UNBOUNDED",
                SolverStatus::TimeLimit => "SOLVER_TIME_LIMIT",
                SolverStatus::IterationLimit => "SOLVER_ITERATION_LIMIT",
                SolverStatus::Optimal | SolverStatus::Unknown => "SOLVER_SOLVE_FAILURE",
            },
            SolverError::Backend(_) => "SOLVER_BACKEND",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code();
        match self {
            SolverError::NoObjective => write!(f, "[{code}] Model has no objective"),
            SolverError::SolveFailure { status } => {
                write!(f, "[{code}] No solution, solver status {status}")
            }
            SolverError::Backend(reason) => write!(f, "[{code}] {reason}"),
        }
    }
}

impl std::error::Error for SolverError {}

/// A point returned by a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// One value per model column, in id order.
    pub values: Vec<f64>,
    pub objective: f64,
    pub status: SolverStatus,
    pub elapsed: Duration,
    /// Relative gap between the point and the best bound, when reported.
    pub mip_gap: Option<f64>,
}

impl Solution {
    pub fn value(&self, var: VariableId) -> Option<f64> {
        self.values.get(var.index()).copied()
    }

    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }
}

pub trait Solver {
    /// Solve `model`. An infeasible or unbounded model is an
    /// `Err(SolverError::SolveFailure { .. })`; returned values are not
    /// repaired or rounded.
    fn solve(&mut self, model: &Model) -> Result<Solution, SolverError>;
}
