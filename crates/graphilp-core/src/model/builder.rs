//! Growing a model one column or row at a time.

use graphilp_expr::{ConstraintId, LinearExpr, RowExpr, VariableId};

use crate::model::Model;
use crate::model::error::ModelError;
use crate::types::{Bounds, Objective, Row, Sense};

impl Model {
    /// Add a binary column.
    pub fn add_binary(&mut self, name: impl Into<String>) -> Result<VariableId, ModelError> {
        let id = VariableId::from_index(self.variable_names.len())
            .ok_or(ModelError::TooManyVariables)?;
        self.variable_names.push(name.into());
        self.columns.push(Vec::new());
        Ok(id)
    }

    /// Add a row over existing columns. Repeated terms are merged and zero
    /// coefficients dropped.
    pub fn add_row(
        &mut self,
        name: impl Into<String>,
        row: RowExpr,
    ) -> Result<ConstraintId, ModelError> {
        let bounds = Bounds::new(row.lower, row.upper);
        if !bounds.is_valid() {
            return Err(ModelError::InvalidRowBounds {
                lower: row.lower,
                upper: row.upper,
            });
        }
        let terms = self.checked_terms(&row.expr)?;
        let id = ConstraintId::from_index(self.rows.len()).ok_or(ModelError::TooManyRows)?;

        for &(var, coeff) in &terms {
            self.columns[var.index()].push((id, coeff));
        }
        let name = name.into();
        tracing::trace!(
            component = "model",
            operation = "add_row",
            status = "success",
            row = %name,
            nnz = terms.len(),
            lower = bounds.lower,
            upper = bounds.upper,
            "Added row"
        );
        self.rows.push(Row { name, bounds });
        Ok(id)
    }

    pub fn maximize(&mut self, expr: LinearExpr) -> Result<(), ModelError> {
        self.set_objective(Sense::Maximize, expr)
    }

    pub fn minimize(&mut self, expr: LinearExpr) -> Result<(), ModelError> {
        self.set_objective(Sense::Minimize, expr)
    }

    fn set_objective(&mut self, sense: Sense, expr: LinearExpr) -> Result<(), ModelError> {
        if self.objective.is_some() {
            return Err(ModelError::ObjectiveAlreadySet);
        }
        let terms = self.checked_terms(&expr)?;
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            sense = sense.as_str(),
            terms = terms.len(),
            "Objective set"
        );
        self.objective = Some(Objective { sense, terms });
        Ok(())
    }

    fn checked_terms(&self, expr: &LinearExpr) -> Result<Vec<(VariableId, f64)>, ModelError> {
        for &(var, coeff) in expr.terms() {
            if var.index() >= self.variable_names.len() {
                return Err(ModelError::UnknownVariable(var));
            }
            if !coeff.is_finite() {
                return Err(ModelError::NonFiniteCoefficient {
                    variable: var,
                    coefficient: coeff,
                });
            }
        }
        Ok(expr.merged())
    }
}
