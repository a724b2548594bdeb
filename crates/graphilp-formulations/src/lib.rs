//! Integer-programming formulations of graph problems.
//!
//! - [`build_clique_model`]: maximum clique via the edge-complement formulation
//! - [`build_coloring_model`]: minimum coloring via the assignment formulation
//!
//! Each builder returns a wrapper that owns the finished [`Model`] together
//! with the variable layout needed to read a [`Solution`] back in graph terms.
//!
//! [`Model`]: graphilp_core::Model
//! [`Solution`]: graphilp_core::Solution

mod clique;
mod coloring;
mod error;

pub use clique::{CliqueModel, CliqueSolution, build_clique_model};
pub use coloring::{ColoringModel, ColoringSolution, build_coloring_model};
pub use error::FormulationError;

/// Primal values above this are read as 1 when decoding binary variables.
pub const SELECTION_THRESHOLD: f64 = 0.5;

#[cfg(test)]
mod support {
    use graphilp_core::Model;

    /// Best objective over every 0/1 assignment that passes `check_assignment`.
    ///
    /// Only usable for models with a handful of binary variables.
    pub(crate) fn enumerate_optimum(model: &Model) -> Option<f64> {
        let n = model.num_variables();
        assert!(n <= 20, "enumeration limited to 20 variables, got {n}");
        let maximize = matches!(
            model.objective().map(|objective| objective.sense),
            Some(graphilp_core::Sense::Maximize)
        );
        let mut best: Option<f64> = None;
        for mask in 0u32..(1u32 << n) {
            let values: Vec<f64> = (0..n).map(|bit| f64::from((mask >> bit) & 1)).collect();
            if let Ok(objective) = model.check_assignment(&values) {
                best = Some(match best {
                    None => objective,
                    Some(current) if maximize => current.max(objective),
                    Some(current) => current.min(objective),
                });
            }
        }
        best
    }
}
