//! Minimum vertex coloring with an explicit color palette.
//!
//! `x[i][k]` puts vertex `i` on color `k` and `y[k]` opens color `k`. A vertex
//! may only use an open color, adjacent vertices never share one, and the
//! objective counts open colors.

use std::collections::BTreeSet;

use graphilp_core::{Model, Solution, SolverStatus};
use graphilp_expr::{LinearExpr, VariableId};
use graphilp_graph::Graph;

use crate::SELECTION_THRESHOLD;
use crate::error::FormulationError;

/// Coloring model plus the variable layout.
#[derive(Debug, Clone)]
pub struct ColoringModel {
    model: Model,
    /// `assign[i][k]` is the variable of vertex `i` on color `k`.
    assign: Vec<Vec<VariableId>>,
    used: Vec<VariableId>,
}

/// A coloring read back from a solver solution.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoringSolution {
    /// Color index of every vertex, 0-based.
    pub colors: Vec<usize>,
    /// Colors whose `y[k]` is set in the solution, ascending.
    pub open_colors: Vec<usize>,
    /// Objective value reported by the solver.
    pub objective_value: f64,
    pub status: SolverStatus,
}

impl ColoringSolution {
    /// Number of distinct colors carried by at least one vertex.
    pub fn colors_used(&self) -> usize {
        self.colors.iter().collect::<BTreeSet<_>>().len()
    }
}

/// Build the coloring model of `graph` with at most `max_colors` colors.
///
/// A bound below the chromatic number yields an infeasible model; that is
/// left for the solver to report.
pub fn build_coloring_model(
    graph: &Graph,
    max_colors: usize,
) -> Result<ColoringModel, FormulationError> {
    if max_colors == 0 {
        return Err(FormulationError::invalid_argument(
            "max_colors must be at least 1",
        ));
    }

    let n = graph.vertex_count();
    let mut model = Model::new();
    let mut assign = Vec::with_capacity(n);
    for i in 0..n {
        let row = (0..max_colors)
            .map(|k| model.add_binary(format!("x[{}][{}]", i + 1, k + 1)))
            .collect::<Result<Vec<_>, _>>()?;
        assign.push(row);
    }
    let used = (0..max_colors)
        .map(|k| model.add_binary(format!("y[{}]", k + 1)))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, colors) in assign.iter().enumerate() {
        let row = LinearExpr::sum_of(colors.iter().copied()).exactly(1.0);
        model.add_row(format!("assign[{}]", i + 1), row)?;
    }

    for (k, &open) in used.iter().enumerate() {
        for (i, colors) in assign.iter().enumerate() {
            let row = LinearExpr::sum_of([colors[k]]).with(open, -1.0).at_most(0.0);
            model.add_row(format!("activate[{},{}]", i + 1, k + 1), row)?;
        }
        for (i, j) in graph.edges() {
            let row = LinearExpr::sum_of([assign[i][k], assign[j][k]]).at_most(1.0);
            model.add_row(format!("conflict[{},{},{}]", i + 1, j + 1, k + 1), row)?;
        }
    }

    model.minimize(LinearExpr::sum_of(used.iter().copied()))?;

    tracing::debug!(
        component = "formulation",
        operation = "build_coloring_model",
        status = "success",
        vertices = n,
        max_colors,
        variables = model.num_variables(),
        constraints = model.num_constraints(),
        "Built coloring model"
    );
    Ok(ColoringModel {
        model,
        assign,
        used,
    })
}

impl ColoringModel {
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn max_colors(&self) -> usize {
        self.used.len()
    }

    /// Variable placing `vertex` on `color`, if both are in range.
    pub fn assign_var(&self, vertex: usize, color: usize) -> Option<VariableId> {
        self.assign.get(vertex)?.get(color).copied()
    }

    /// Variable opening `color`, if it is in range.
    pub fn used_var(&self, color: usize) -> Option<VariableId> {
        self.used.get(color).copied()
    }

    /// Dense 0/1 assignment for the coloring `colors`, opening exactly the
    /// colors that appear in it.
    pub fn assignment_for(&self, colors: &[usize]) -> Result<Vec<f64>, FormulationError> {
        if colors.len() != self.assign.len() {
            return Err(FormulationError::invalid_argument(format!(
                "Expected one color per vertex ({}), got {}",
                self.assign.len(),
                colors.len()
            )));
        }
        let mut ones = Vec::with_capacity(colors.len() * 2);
        for (vertex, &color) in colors.iter().enumerate() {
            let (Some(var), Some(open)) = (self.assign_var(vertex, color), self.used_var(color))
            else {
                return Err(FormulationError::invalid_argument(format!(
                    "Color {} is outside the palette ({} colors)",
                    color,
                    self.max_colors()
                )));
            };
            ones.push(var);
            ones.push(open);
        }
        Ok(self.model.indicator_assignment(&ones))
    }

    /// Read the per-vertex colors out of `solution`.
    ///
    /// Each vertex takes its lowest color above the selection threshold.
    /// Values are taken as returned; no check that the coloring is proper.
    pub fn decode(&self, solution: &Solution) -> Result<ColoringSolution, FormulationError> {
        let expected = self.model.num_variables();
        if solution.values.len() != expected {
            return Err(FormulationError::SolutionShape {
                expected,
                got: solution.values.len(),
            });
        }

        let is_set = |var: VariableId| solution.value(var).unwrap_or(0.0) > SELECTION_THRESHOLD;
        let colors = self
            .assign
            .iter()
            .enumerate()
            .map(|(vertex, row)| {
                row.iter()
                    .position(|&var| is_set(var))
                    .ok_or(FormulationError::UnassignedVertex { vertex })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let open_colors = self
            .used
            .iter()
            .enumerate()
            .filter(|(_, var)| is_set(**var))
            .map(|(color, _)| color)
            .collect();

        Ok(ColoringSolution {
            colors,
            open_colors,
            objective_value: solution.objective,
            status: solution.status,
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::support::enumerate_optimum;
    use graphilp_core::{ModelError, Sense};
    use std::time::Duration;

    fn two_edges() -> Graph {
        Graph::new(4, [(0, 1), (2, 3)]).unwrap()
    }

    fn solution(values: Vec<f64>, objective: f64) -> Solution {
        Solution {
            values,
            objective,
            status: SolverStatus::Optimal,
            elapsed: Duration::ZERO,
            mip_gap: None,
        }
    }

    #[test]
    fn zero_colors_is_rejected() {
        let err = build_coloring_model(&two_edges(), 0).unwrap_err();
        assert!(matches!(err, FormulationError::InvalidArgument { .. }));
        assert_eq!(err.code(), "FORMULATION_INVALID_ARGUMENT");
    }

    #[test]
    fn model_dimensions() {
        let coloring = build_coloring_model(&two_edges(), 4).unwrap();
        let model = coloring.model();

        // 4 vertices x 4 colors, plus 4 color switches.
        assert_eq!(model.num_variables(), 20);
        // assign: 4, activate: 16, conflict: 2 edges x 4 colors.
        assert_eq!(model.num_constraints(), 28);
        let objective = model.objective().unwrap();
        assert_eq!(objective.sense, Sense::Minimize);
        assert_eq!(objective.terms.len(), 4);
        assert_eq!(coloring.max_colors(), 4);
    }

    #[test]
    fn variable_and_row_names() {
        let coloring = build_coloring_model(&two_edges(), 2).unwrap();
        let model = coloring.model();

        let x = coloring.assign_var(2, 1).unwrap();
        assert_eq!(model.variable_name(x), Some("x[3][2]"));
        assert_eq!(model.variable_name(coloring.used_var(0).unwrap()), Some("y[1]"));
        let rows: Vec<&str> = model.rows().map(|(_, row)| row.name()).collect();
        assert!(rows.contains(&"assign[4]"));
        assert!(rows.contains(&"activate[1,2]"));
        assert!(rows.contains(&"conflict[3,4,2]"));
        assert!(!rows.contains(&"conflict[1,3,1]"));
        assert!(coloring.assign_var(4, 0).is_none());
        assert!(coloring.used_var(2).is_none());
    }

    #[test]
    fn distinct_colors_are_feasible() {
        let graph = Graph::complete(4);
        let coloring = build_coloring_model(&graph, 4).unwrap();
        let values = coloring.assignment_for(&[0, 1, 2, 3]).unwrap();
        assert_eq!(coloring.model().check_assignment(&values).unwrap(), 4.0);
    }

    #[test]
    fn shared_color_across_an_edge_is_infeasible() {
        let coloring = build_coloring_model(&two_edges(), 4).unwrap();

        let proper = coloring.assignment_for(&[0, 1, 0, 1]).unwrap();
        assert_eq!(coloring.model().check_assignment(&proper).unwrap(), 2.0);

        let clash = coloring.assignment_for(&[0, 0, 1, 2]).unwrap();
        assert!(matches!(
            coloring.model().check_assignment(&clash),
            Err(ModelError::RowViolated { .. })
        ));
    }

    #[test]
    fn closed_color_cannot_be_used() {
        let coloring = build_coloring_model(&two_edges(), 2).unwrap();
        let mut values = coloring.assignment_for(&[0, 1, 0, 1]).unwrap();
        values[coloring.used_var(1).unwrap().index()] = 0.0;
        assert!(coloring.model().check_assignment(&values).is_err());
    }

    #[test]
    fn edgeless_graph_uses_one_color() {
        let coloring = build_coloring_model(&Graph::empty(3), 2).unwrap();
        let values = coloring.assignment_for(&[1, 1, 1]).unwrap();
        assert_eq!(coloring.model().check_assignment(&values).unwrap(), 1.0);
        assert_eq!(enumerate_optimum(coloring.model()), Some(1.0));
    }

    #[test]
    fn optimum_matches_chromatic_number() {
        let coloring = build_coloring_model(&two_edges(), 2).unwrap();
        assert_eq!(enumerate_optimum(coloring.model()), Some(2.0));

        let coloring = build_coloring_model(&Graph::complete(3), 3).unwrap();
        assert_eq!(enumerate_optimum(coloring.model()), Some(3.0));
    }

    #[test]
    fn too_few_colors_has_no_feasible_point() {
        let coloring = build_coloring_model(&Graph::complete(3), 2).unwrap();
        assert_eq!(enumerate_optimum(coloring.model()), None);
    }

    #[test]
    fn assignment_for_validates_input() {
        let coloring = build_coloring_model(&two_edges(), 2).unwrap();
        assert!(coloring.assignment_for(&[0, 1]).is_err());
        assert!(coloring.assignment_for(&[0, 1, 0, 2]).is_err());
    }

    #[test]
    fn decode_reads_colors_and_classes() {
        let coloring = build_coloring_model(&two_edges(), 3).unwrap();
        let mut values = coloring.assignment_for(&[2, 0, 0, 2]).unwrap();
        // Solver noise below the threshold is ignored.
        values[coloring.assign_var(0, 1).unwrap().index()] = 1e-7;
        let decoded = coloring.decode(&solution(values, 2.0)).unwrap();

        assert_eq!(decoded.colors, vec![2, 0, 0, 2]);
        assert_eq!(decoded.open_colors, vec![0, 2]);
        assert_eq!(decoded.colors_used(), 2);
        assert_eq!(decoded.objective_value, 2.0);
    }

    #[test]
    fn decode_reports_unassigned_vertex() {
        let coloring = build_coloring_model(&two_edges(), 2).unwrap();
        let mut values = coloring.assignment_for(&[0, 1, 0, 1]).unwrap();
        values[coloring.assign_var(3, 1).unwrap().index()] = 0.0;

        let err = coloring.decode(&solution(values, 2.0)).unwrap_err();
        assert_eq!(err, FormulationError::UnassignedVertex { vertex: 3 });
        assert!(err.to_string().contains("Vertex 4"));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let coloring = build_coloring_model(&two_edges(), 2).unwrap();
        let err = coloring.decode(&solution(vec![0.0; 3], 0.0)).unwrap_err();
        assert_eq!(
            err,
            FormulationError::SolutionShape {
                expected: 10,
                got: 3
            }
        );
    }
}
