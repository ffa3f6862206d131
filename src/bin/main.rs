use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use simplex_steps::io::{export_report, export_steps, import};
use simplex_steps::{PivotRuleKind, Problem, Settings, Solve};

/// Solve a linear program with the tableau simplex method and show every step.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Write the steps as JSON to this file
    #[arg(long)]
    steps: Option<PathBuf>,
    /// Write the full report as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Absolute tolerance for comparisons with zero
    #[arg(long)]
    tolerance: Option<f64>,
    /// Maximum number of pivots
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Rule for choosing the entering column: steepest-descent or first-profitable
    #[arg(long, default_value_t = PivotRuleKind::SteepestDescent)]
    pivot_rule: PivotRuleKind,
    /// Only print the solution, not the intermediate tableaus
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let problem: Problem<f64> = import(&opts.problem_file)
        .with_context(|| format!("Couldn't read {:?}", opts.problem_file))?;

    let mut settings = Settings::default().with_pivot_rule(opts.pivot_rule);
    if let Some(tolerance) = opts.tolerance {
        settings = settings.with_tolerance(tolerance);
    }
    if let Some(max_iterations) = opts.max_iterations {
        settings = settings.with_max_iterations(max_iterations);
    }

    println!("Solving...");
    let report = problem.solve_with(&settings).context("No solution computed")?;

    if !opts.quiet {
        for (i, step) in report.steps.steps().iter().enumerate() {
            println!("Step {}:\n{}\n", i + 1, step);
        }
    }

    println!("Solution computed after {} iterations:\n{}", report.iterations, report.solution);
    println!("\nConstraint | Slack/Surplus | Dual price | Binding");
    let tolerance = settings.tolerance();
    for (i, sensitivity) in report.sensitivity.iter().enumerate() {
        println!(
            "{:>10} | {:>13.2} | {:>10.2} | {}",
            i + 1,
            sensitivity.slack_surplus,
            sensitivity.dual_price,
            if sensitivity.is_binding(tolerance) { "yes" } else { "no" },
        );
    }

    if let Some(path) = &opts.steps {
        export_steps(path, &report.steps)
            .with_context(|| format!("Couldn't write steps to {path:?}"))?;
    }
    if let Some(path) = &opts.report {
        export_report(path, &report)
            .with_context(|| format!("Couldn't write report to {path:?}"))?;
    }

    Ok(())
}
