//! graphilp core: the 0/1 model a formulation produces and the contract a
//! solver backend fulfils.

pub mod model;
pub mod solver;
pub mod types;

pub use model::{Model, ModelError, TextOptions};
pub use solver::{Solution, Solver, SolverConfig, SolverError, SolverStatus};
pub use types::{Bounds, Objective, Row, Sense};
