//! HiGHS implementation of the core [`Solver`] trait.

use std::time::{Duration, Instant};

use graphilp_core::{Model, Sense, Solution, Solver, SolverConfig, SolverError, SolverStatus};
use tracing::{debug, warn};

use crate::lower::lower;
use crate::status::{core_status, may_have_incumbent};

/// HiGHS-backed solver.
///
/// Holds only configuration; each solve builds and drops its own HiGHS problem.
#[derive(Debug, Clone, Default)]
pub struct HighsSolver {
    config: SolverConfig,
}

impl HighsSolver {
    pub fn with_config(config: SolverConfig) -> Self {
        HighsSolver { config }
    }
}

impl Solver for HighsSolver {
    fn solve(&mut self, model: &Model) -> Result<Solution, SolverError> {
        solve_model(model, &self.config)
    }
}

/// Solve `model` with HiGHS under `config`.
///
/// Optimal and limit statuses with an incumbent return `Ok`; everything else
/// becomes [`SolverError::SolveFailure`] carrying the status. A model without
/// columns never reaches HiGHS.
pub fn solve_model(model: &Model, config: &SolverConfig) -> Result<Solution, SolverError> {
    let objective = model.objective().ok_or(SolverError::NoObjective)?;
    if model.num_variables() == 0 {
        return solve_without_columns(model);
    }

    let started = Instant::now();
    debug!(
        component = "solver",
        operation = "solve",
        status = "started",
        solver = "highs",
        variables = model.num_variables(),
        constraints = model.num_constraints(),
        sense = objective.sense.as_str(),
        "Starting solve"
    );

    let mut run = lower(model).optimise(match objective.sense {
        Sense::Minimize => highs::Sense::Minimise,
        Sense::Maximize => highs::Sense::Maximise,
    });
    apply_config(&mut run, config);
    let solved = run
        .try_solve()
        .map_err(|err| SolverError::Backend(format!("HiGHS run failed: {err:?}")))?;

    let status = core_status(solved.status());
    let objective_value = solved.objective_value();
    let mip_gap = solved.mip_gap();
    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    debug!(
        component = "solver",
        operation = "solve",
        status = "success",
        solver = "highs",
        solver_status = status.as_str(),
        objective_value,
        mip_gap,
        duration_ms,
        "HiGHS solve completed"
    );

    // A limit hit before the first incumbent leaves an infinite objective.
    if !may_have_incumbent(status) || !objective_value.is_finite() {
        warn!(
            component = "solver",
            operation = "solve",
            status = "warn",
            solver = "highs",
            solver_status = status.as_str(),
            duration_ms,
            "Solver did not return a usable solution"
        );
        return Err(SolverError::SolveFailure { status });
    }
    if !status.is_optimal() {
        warn!(
            component = "solver",
            operation = "solve",
            status = "warn",
            solver = "highs",
            solver_status = status.as_str(),
            objective_value,
            mip_gap,
            "Solver hit a limit; returning best solution found"
        );
    }

    Ok(Solution {
        values: solved.get_solution().columns().to_vec(),
        objective: objective_value,
        status,
        elapsed: started.elapsed(),
        mip_gap: mip_gap.is_finite().then_some(mip_gap),
    })
}

fn apply_config(run: &mut highs::Model, config: &SolverConfig) {
    if config.log_to_console {
        run.set_option("output_flag", true);
        run.set_option("log_to_console", true);
    } else {
        run.make_quiet();
    }
    if let Some(limit) = config.time_limit {
        run.set_option("time_limit", limit);
    }
    if let Some(gap) = config.mip_gap {
        run.set_option("mip_rel_gap", gap);
    }
    if let Some(threads) = config.threads {
        run.set_option("threads", i32::try_from(threads).unwrap_or(i32::MAX));
    }
}

/// With no columns every row evaluates to 0, and so does the objective.
fn solve_without_columns(model: &Model) -> Result<Solution, SolverError> {
    let outcome = model.check_assignment(&[]);
    debug!(
        component = "solver",
        operation = "solve",
        status = if outcome.is_ok() { "success" } else { "infeasible" },
        solver = "highs",
        constraints = model.num_constraints(),
        "Model has no columns; answered without HiGHS"
    );
    match outcome {
        Ok(objective) => Ok(Solution {
            values: Vec::new(),
            objective,
            status: SolverStatus::Optimal,
            elapsed: Duration::ZERO,
            mip_gap: None,
        }),
        Err(_) => Err(SolverError::SolveFailure {
            status: SolverStatus::Infeasible,
        }),
    }
}
