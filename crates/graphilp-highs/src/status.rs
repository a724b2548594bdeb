//! Reading HiGHS model statuses as core statuses.

use graphilp_core::SolverStatus;
use highs::HighsModelStatus;

pub(crate) fn core_status(status: HighsModelStatus) -> SolverStatus {
    match status {
        HighsModelStatus::Optimal => SolverStatus::Optimal,
        HighsModelStatus::Infeasible => SolverStatus::Infeasible,
        HighsModelStatus::Unbounded => SolverStatus::Unbounded,
        HighsModelStatus::ReachedTimeLimit => SolverStatus::TimeLimit,
        HighsModelStatus::ReachedIterationLimit => SolverStatus::IterationLimit,
        _ => SolverStatus::Unknown,
    }
}

/// Statuses under which HiGHS may still hold an incumbent.
pub(crate) fn may_have_incumbent(status: SolverStatus) -> bool {
    matches!(
        status,
        SolverStatus::Optimal | SolverStatus::TimeLimit | SolverStatus::IterationLimit
    )
}
