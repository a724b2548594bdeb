//! HiGHS backend for graphilp models.
//!
//! [`HighsSolver`] implements [`graphilp_core::Solver`]: every call lowers the
//! model into a fresh HiGHS row problem, solves it and drops the backend state
//! before returning.

mod lower;
mod solver;
mod status;

pub use solver::{HighsSolver, solve_model};
