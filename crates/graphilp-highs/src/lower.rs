//! Copying a 0/1 model into a HiGHS row problem.

use graphilp_core::Model;
use highs::{Col, RowProblem};

/// Every model column becomes an integer column on `[0, 1]`, in id order, so
/// HiGHS column `j` is `VariableId` `j`.
pub(crate) fn lower(model: &Model) -> RowProblem {
    let mut costs = vec![0.0; model.num_variables()];
    if let Some(objective) = model.objective() {
        for &(var, coeff) in &objective.terms {
            costs[var.index()] = coeff;
        }
    }

    let mut problem = RowProblem::default();
    let cols: Vec<Col> = costs
        .iter()
        .map(|&cost| problem.add_integer_column(cost, 0.0..=1.0))
        .collect();

    for ((_, row), terms) in model.rows().zip(model.row_terms()) {
        let bounds = row.bounds();
        problem.add_row(
            bounds.lower..=bounds.upper,
            terms.iter().map(|&(var, coeff)| (cols[var.index()], coeff)),
        );
    }

    tracing::debug!(
        component = "solver",
        operation = "lower",
        status = "success",
        solver = "highs",
        columns = problem.num_cols(),
        rows = problem.num_rows(),
        nnz = model.num_coefficients(),
        "Lowered model into HiGHS"
    );
    problem
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphilp_expr::LinearExpr;

    #[test]
    fn one_column_per_variable_and_one_row_per_row() {
        let mut model = Model::new();
        let x = model.add_binary("x").unwrap();
        let y = model.add_binary("y").unwrap();
        let z = model.add_binary("z").unwrap();
        model
            .add_row("xy", LinearExpr::sum_of([x, y]).at_most(1.0))
            .unwrap();
        model
            .add_row("xyz", LinearExpr::sum_of([x, y, z]).exactly(1.0))
            .unwrap();
        model.maximize(LinearExpr::sum_of([z])).unwrap();

        let problem = lower(&model);
        assert_eq!(problem.num_cols(), 3);
        assert_eq!(problem.num_rows(), 2);
    }

    #[test]
    fn model_without_rows_lowers_to_bare_columns() {
        let mut model = Model::new();
        model.add_binary("x").unwrap();
        let problem = lower(&model);
        assert_eq!(problem.num_cols(), 1);
        assert_eq!(problem.num_rows(), 0);
    }
}
