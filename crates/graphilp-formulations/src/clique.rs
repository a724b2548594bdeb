//! Maximum clique as a 0/1 program over the complement graph.
//!
//! Two vertices may both be selected only if they are adjacent, so every
//! non-adjacent pair contributes one packing row `x[i] + x[j] <= 1`.

use graphilp_core::{Model, Solution, SolverStatus};
use graphilp_expr::{LinearExpr, VariableId};
use graphilp_graph::Graph;

use crate::SELECTION_THRESHOLD;
use crate::error::FormulationError;

/// Clique model plus the vertex-to-variable layout.
#[derive(Debug, Clone)]
pub struct CliqueModel {
    model: Model,
    vertex_vars: Vec<VariableId>,
}

/// A clique read back from a solver solution.
#[derive(Debug, Clone, PartialEq)]
pub struct CliqueSolution {
    /// Selected vertices, ascending, 0-based.
    pub vertices: Vec<usize>,
    /// Objective value reported by the solver.
    pub objective_value: f64,
    pub status: SolverStatus,
}

/// Build the maximum clique model of `graph`.
pub fn build_clique_model(graph: &Graph) -> Result<CliqueModel, FormulationError> {
    let mut model = Model::new();
    let vertex_vars = (0..graph.vertex_count())
        .map(|i| model.add_binary(format!("x[{}]", i + 1)))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, j) in graph.non_edges() {
        let row = LinearExpr::sum_of([vertex_vars[i], vertex_vars[j]]).at_most(1.0);
        model.add_row(format!("nonedge[{},{}]", i + 1, j + 1), row)?;
    }

    model.maximize(LinearExpr::sum_of(vertex_vars.iter().copied()))?;

    tracing::debug!(
        component = "formulation",
        operation = "build_clique_model",
        status = "success",
        vertices = graph.vertex_count(),
        variables = model.num_variables(),
        constraints = model.num_constraints(),
        "Built clique model"
    );
    Ok(CliqueModel { model, vertex_vars })
}

impl CliqueModel {
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Selection variable of `vertex`, if it exists.
    pub fn vertex_var(&self, vertex: usize) -> Option<VariableId> {
        self.vertex_vars.get(vertex).copied()
    }

    pub fn vertex_vars(&self) -> &[VariableId] {
        &self.vertex_vars
    }

    /// Dense 0/1 assignment selecting exactly `vertices`.
    pub fn assignment_for(&self, vertices: &[usize]) -> Result<Vec<f64>, FormulationError> {
        let ones = vertices
            .iter()
            .map(|&v| {
                self.vertex_var(v).ok_or_else(|| {
                    FormulationError::invalid_argument(format!(
                        "Vertex {} is outside the graph ({} vertices)",
                        v,
                        self.vertex_vars.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.model.indicator_assignment(&ones))
    }

    /// Read the selected vertices out of `solution`.
    ///
    /// Values are taken as returned; no check that they form a clique.
    pub fn decode(&self, solution: &Solution) -> Result<CliqueSolution, FormulationError> {
        let expected = self.model.num_variables();
        if solution.values.len() != expected {
            return Err(FormulationError::SolutionShape {
                expected,
                got: solution.values.len(),
            });
        }

        let vertices = self
            .vertex_vars
            .iter()
            .enumerate()
            .filter(|(_, var)| solution.value(**var).unwrap_or(0.0) > SELECTION_THRESHOLD)
            .map(|(vertex, _)| vertex)
            .collect();
        Ok(CliqueSolution {
            vertices,
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
    fn one_row_per_non_edge() {
        let clique = build_clique_model(&two_edges()).unwrap();
        let model = clique.model();

        assert_eq!(model.num_variables(), 4);
        assert_eq!(model.num_constraints(), 4);
        let objective = model.objective().unwrap();
        assert_eq!(objective.sense, Sense::Maximize);
        assert_eq!(objective.terms.len(), 4);
        let rows: Vec<&str> = model.rows().map(|(_, row)| row.name()).collect();
        assert_eq!(
            rows,
            vec!["nonedge[1,3]", "nonedge[1,4]", "nonedge[2,3]", "nonedge[2,4]"]
        );
        assert_eq!(model.variable_name(clique.vertex_vars()[2]), Some("x[3]"));
    }

    #[test]
    fn complete_graph_has_no_rows() {
        let clique = build_clique_model(&Graph::complete(5)).unwrap();
        assert_eq!(clique.model().num_constraints(), 0);

        let all = clique.assignment_for(&[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(clique.model().check_assignment(&all).unwrap(), 5.0);
    }

    #[test]
    fn edgeless_graph_has_a_row_per_pair() {
        let clique = build_clique_model(&Graph::empty(6)).unwrap();
        assert_eq!(clique.model().num_constraints(), 15);

        let pair = clique.assignment_for(&[1, 4]).unwrap();
        assert!(matches!(
            clique.model().check_assignment(&pair),
            Err(ModelError::RowViolated { .. })
        ));
    }

    #[test]
    fn empty_and_singleton_selections_are_feasible() {
        let graph = Graph::new(5, [(0, 1), (1, 2), (2, 0), (3, 4)]).unwrap();
        let clique = build_clique_model(&graph).unwrap();
        let model = clique.model();

        let none = clique.assignment_for(&[]).unwrap();
        assert_eq!(model.check_assignment(&none).unwrap(), 0.0);
        for v in 0..graph.vertex_count() {
            let single = clique.assignment_for(&[v]).unwrap();
            assert_eq!(model.check_assignment(&single).unwrap(), 1.0);
        }
    }

    #[test]
    fn feasible_points_are_exactly_cliques() {
        let graph = Graph::new(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]).unwrap();
        let clique = build_clique_model(&graph).unwrap();

        for mask in 0u32..32 {
            let subset: Vec<usize> = (0..5).filter(|v| mask & (1 << v) != 0).collect();
            let values = clique.assignment_for(&subset).unwrap();
            let feasible = clique.model().check_assignment(&values).is_ok();
            assert_eq!(feasible, graph.is_clique(&subset), "subset {subset:?}");
        }
    }

    #[test]
    fn optimum_matches_clique_number() {
        let clique = build_clique_model(&two_edges()).unwrap();
        assert_eq!(enumerate_optimum(clique.model()), Some(2.0));

        let triangle_plus = Graph::new(5, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let clique = build_clique_model(&triangle_plus).unwrap();
        assert_eq!(enumerate_optimum(clique.model()), Some(3.0));

        let clique = build_clique_model(&Graph::empty(4)).unwrap();
        assert_eq!(enumerate_optimum(clique.model()), Some(1.0));
    }

    #[test]
    fn empty_graph_gives_empty_model() {
        let clique = build_clique_model(&Graph::empty(0)).unwrap();
        assert_eq!(clique.model().num_variables(), 0);
        assert_eq!(clique.model().num_constraints(), 0);
    }

    #[test]
    fn decode_reads_selected_vertices() {
        let clique = build_clique_model(&two_edges()).unwrap();
        let decoded = clique
            .decode(&solution(vec![0.0, 0.0, 0.9999, 1.0], 2.0))
            .unwrap();

        assert_eq!(decoded.vertices, vec![2, 3]);
        assert_eq!(decoded.objective_value, 2.0);
        assert_eq!(decoded.status, SolverStatus::Optimal);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let clique = build_clique_model(&two_edges()).unwrap();
        let err = clique.decode(&solution(vec![1.0, 1.0], 2.0)).unwrap_err();
        assert_eq!(
            err,
            FormulationError::SolutionShape {
                expected: 4,
                got: 2
            }
        );
        assert_eq!(err.code(), "SOLUTION_INVALID_SHAPE");
    }

    #[test]
    fn assignment_for_rejects_unknown_vertex() {
        let clique = build_clique_model(&two_edges()).unwrap();
        let err = clique.assignment_for(&[7]).unwrap_err();
        assert_eq!(err.code(), "FORMULATION_INVALID_ARGUMENT");
    }
}
