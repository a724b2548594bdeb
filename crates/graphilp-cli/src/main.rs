//! `graphilp`: solve maximum clique or minimum coloring on a DIMACS graph.

mod error;
mod logging;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use graphilp_core::{Model, Solver, SolverConfig, TextOptions};
use graphilp_formulations::{build_clique_model, build_coloring_model};
use graphilp_graph::{Graph, dimacs};
use graphilp_highs::HighsSolver;

use crate::error::{CliError, EXIT_INPUT};
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Maximum clique and minimum coloring of DIMACS graphs via integer programming"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a maximum clique
    Clique(CliqueArgs),
    /// Find a minimum vertex coloring
    Color(ColorArgs),
}

#[derive(Args, Debug)]
struct CliqueArgs {
    /// DIMACS edge-format graph file
    input: PathBuf,

    #[command(flatten)]
    solve: SolveArgs,
}

#[derive(Args, Debug)]
struct ColorArgs {
    /// DIMACS edge-format graph file
    input: PathBuf,

    /// Size of the color palette (defaults to the number of vertices)
    #[arg(long)]
    max_colors: Option<usize>,

    #[command(flatten)]
    solve: SolveArgs,
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Solver time limit in seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Relative MIP gap at which the solver stops
    #[arg(long)]
    mip_gap: Option<f64>,

    /// Solver thread count
    #[arg(long)]
    threads: Option<u32>,

    /// Show the solver's own log on the console
    #[arg(long)]
    solver_log: bool,

    /// Print the model to stderr before solving
    #[arg(long)]
    print_model: bool,

    /// Output format for stdout
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl SolveArgs {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            time_limit: self.time_limit,
            mip_gap: self.mip_gap,
            threads: self.threads,
            log_to_console: self.solver_log,
        }
    }

    fn maybe_print_model(&self, model: &Model) {
        if self.print_model {
            eprintln!("{}", model.format_text(TextOptions::preview()));
        }
    }
}

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
        std::process::exit(EXIT_INPUT);
    }
    if let Err(err) = run(Cli::parse()) {
        tracing::debug!(
            component = "cli",
            operation = "run",
            status = "error",
            code = err.code(),
            "Command failed"
        );
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (report, format) = match cli.command {
        Command::Clique(args) => (run_clique(&args)?, args.solve.format),
        Command::Color(args) => (run_color(&args)?, args.solve.format),
    };
    match format {
        OutputFormat::Table => print!("{}", report.to_table()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let graph = dimacs::read_path(path).map_err(|source| CliError::Graph {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        component = "cli",
        operation = "load_graph",
        status = "success",
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Loaded graph"
    );
    Ok(graph)
}

fn run_clique(args: &CliqueArgs) -> Result<Report, CliError> {
    let graph = load_graph(&args.input)?;
    let clique = build_clique_model(&graph)?;
    args.solve.maybe_print_model(clique.model());

    let solution = HighsSolver::with_config(args.solve.config()).solve(clique.model())?;
    let decoded = clique.decode(&solution)?;
    Ok(Report::clique(&args.input, &graph, &solution, &decoded))
}

fn run_color(args: &ColorArgs) -> Result<Report, CliError> {
    let graph = load_graph(&args.input)?;
    let max_colors = args.max_colors.unwrap_or(graph.vertex_count().max(1));
    let coloring = build_coloring_model(&graph, max_colors)?;
    args.solve.maybe_print_model(coloring.model());

    let solution = HighsSolver::with_config(args.solve.config()).solve(coloring.model())?;
    let decoded = coloring.decode(&solution)?;
    Ok(Report::coloring(&args.input, &graph, &solution, &decoded))
}
