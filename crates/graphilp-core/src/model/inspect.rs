//! Checking a candidate 0/1 point against the model.

use graphilp_expr::ids::VariableId;

use crate::model::Model;
use crate::model::error::ModelError;

/// Absolute slack allowed on integrality and on row bounds.
const FEASIBILITY_TOLERANCE: f64 = 1e-6;

impl Model {
    /// Check that `values` (one per column, in id order) is a 0/1 point
    /// satisfying every row.
    ///
    /// Returns the objective value, or 0 for a model without an objective. The
    /// first violation is reported: columns first, then rows in id order.
    pub fn check_assignment(&self, values: &[f64]) -> Result<f64, ModelError> {
        if values.len() != self.num_variables() {
            return Err(ModelError::AssignmentLength {
                expected: self.num_variables(),
                got: values.len(),
            });
        }

        let mut activities = vec![0.0; self.num_constraints()];
        for ((var, column), &value) in self.columns().zip(values) {
            if !is_binary(value) {
                return Err(ModelError::NotBinary {
                    variable: var,
                    value,
                });
            }
            for &(row, coeff) in column {
                activities[row.index()] += coeff * value;
            }
        }

        for ((id, row), activity) in self.rows().zip(activities) {
            let bounds = row.bounds();
            if !bounds.contains(activity, FEASIBILITY_TOLERANCE) {
                tracing::trace!(
                    component = "model",
                    operation = "check_assignment",
                    status = "violation",
                    row = row.name(),
                    activity,
                    "Row violated"
                );
                return Err(ModelError::RowViolated {
                    constraint: id,
                    name: row.name().to_string(),
                    activity,
                    lower: bounds.lower,
                    upper: bounds.upper,
                });
            }
        }

        Ok(self.objective().map_or(0.0, |objective| {
            objective
                .terms
                .iter()
                .map(|(var, coeff)| coeff * values[var.index()])
                .sum()
        }))
    }

    /// Point with `ones` at 1 and every other column at 0. Ids outside the
    /// model are skipped.
    pub fn indicator_assignment(&self, ones: &[VariableId]) -> Vec<f64> {
        let mut values = vec![0.0; self.num_variables()];
        for var in ones {
            if let Some(slot) = values.get_mut(var.index()) {
                *slot = 1.0;
            }
        }
        values
    }
}

fn is_binary(value: f64) -> bool {
    value.abs() <= FEASIBILITY_TOLERANCE || (value - 1.0).abs() <= FEASIBILITY_TOLERANCE
}
