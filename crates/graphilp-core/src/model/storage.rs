//! Read access to a built model.

use graphilp_expr::{ConstraintId, VariableId};

use crate::model::Model;
use crate::types::{Objective, Row};

impl Model {
    pub fn num_variables(&self) -> usize {
        self.variable_names.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.rows.len()
    }

    /// Stored non-zero coefficients.
    pub fn num_coefficients(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    pub fn variable_name(&self, var: VariableId) -> Option<&str> {
        self.variable_names.get(var.index()).map(String::as_str)
    }

    /// Rows in id order.
    pub fn rows(&self) -> impl Iterator<Item = (ConstraintId, &Row)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(position, row)| ConstraintId::from_index(position).map(|id| (id, row)))
    }

    /// Columns in id order, each with its `(row, coefficient)` entries.
    pub fn columns(&self) -> impl Iterator<Item = (VariableId, &[(ConstraintId, f64)])> + '_ {
        self.columns.iter().enumerate().filter_map(|(position, column)| {
            VariableId::from_index(position).map(|id| (id, column.as_slice()))
        })
    }

    /// The coefficient matrix transposed to one term list per row.
    pub fn row_terms(&self) -> Vec<Vec<(VariableId, f64)>> {
        let mut terms = vec![Vec::new(); self.rows.len()];
        for (var, column) in self.columns() {
            for &(row, coeff) in column {
                terms[row.index()].push((var, coeff));
            }
        }
        terms
    }

    pub(crate) fn variable_names(&self) -> &[String] {
        &self.variable_names
    }
}
