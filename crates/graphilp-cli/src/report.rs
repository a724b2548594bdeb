//! Result reports printed by the CLI.

use std::path::Path;

use graphilp_core::Solution;
use graphilp_formulations::{CliqueSolution, ColoringSolution};
use graphilp_graph::Graph;
use serde::Serialize;

/// Summary of one solve. Vertex and color ids are 1-based.
///
/// `optimal` is false when the solver stopped on a limit; the objective is
/// then the best point found, not a proven optimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub problem: &'static str,
    pub input: String,
    pub vertices: usize,
    pub edges: usize,
    pub status: &'static str,
    pub optimal: bool,
    pub objective_value: f64,
    pub solve_time_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mip_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clique: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors_used: Option<usize>,
    /// Color of each vertex, in vertex order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<usize>>,
}

impl Report {
    fn base(problem: &'static str, input: &Path, graph: &Graph, solution: &Solution) -> Self {
        Report {
            problem,
            input: input.display().to_string(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            status: solution.status.as_str(),
            optimal: solution.is_optimal(),
            objective_value: solution.objective,
            solve_time_seconds: solution.elapsed.as_secs_f64(),
            mip_gap: solution.mip_gap,
            clique: None,
            colors_used: None,
            colors: None,
        }
    }

    pub fn clique(
        input: &Path,
        graph: &Graph,
        solution: &Solution,
        clique: &CliqueSolution,
    ) -> Self {
        Report {
            clique: Some(one_based(&clique.vertices)),
            ..Self::base("clique", input, graph, solution)
        }
    }

    pub fn coloring(
        input: &Path,
        graph: &Graph,
        solution: &Solution,
        coloring: &ColoringSolution,
    ) -> Self {
        Report {
            colors_used: Some(coloring.colors_used()),
            colors: Some(one_based(&coloring.colors)),
            ..Self::base("coloring", input, graph, solution)
        }
    }

    /// `key: value` lines.
    pub fn to_table(&self) -> String {
        let objective = if self.optimal {
            self.objective_value.to_string()
        } else {
            format!("{} (best found, not proven optimal)", self.objective_value)
        };
        let mut rows = vec![
            ("problem", self.problem.to_string()),
            ("input", self.input.clone()),
            ("vertices", self.vertices.to_string()),
            ("edges", self.edges.to_string()),
            ("status", self.status.to_string()),
            ("objective", objective),
        ];
        if let Some(gap) = self.mip_gap {
            rows.push(("mip_gap", gap.to_string()));
        }
        if let Some(clique) = &self.clique {
            rows.push(("clique_size", clique.len().to_string()));
            rows.push(("clique", join(clique)));
        }
        if let Some(used) = self.colors_used {
            rows.push(("colors_used", used.to_string()));
        }
        if let Some(colors) = &self.colors {
            rows.push(("colors", join(colors)));
        }
        rows.push(("solve_time_s", format!("{:.3}", self.solve_time_seconds)));

        rows.into_iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn one_based(values: &[usize]) -> Vec<usize> {
    values.iter().map(|v| v + 1).collect()
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
