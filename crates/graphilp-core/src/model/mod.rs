//! The 0/1 program a graph formulation is written into.
//!
//! - [`builder`]: adding binary columns, rows and the objective
//! - [`storage`]: read access to names, rows and columns
//! - [`inspect`]: checking a candidate 0/1 point
//! - [`pretty`]: text rendering for `--print-model`

mod builder;
mod error;
mod inspect;
mod pretty;
mod storage;

use graphilp_expr::ids::ConstraintId;

use crate::types::{Objective, Row};

pub use error::ModelError;
pub use pretty::TextOptions;

/// A pure 0/1 program: every column is binary and carries a name.
///
/// Ids are handed out in insertion order, so `VariableId::index()` is also the
/// column's position in a solver's primal vector. Coefficients are stored
/// column-first, each column listing its rows in ascending order.
#[derive(Debug, Clone, Default)]
pub struct Model {
    variable_names: Vec<String>,
    columns: Vec<Vec<(ConstraintId, f64)>>,
    rows: Vec<Row>,
    objective: Option<Objective>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }
}
