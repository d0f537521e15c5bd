use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use relp_sensitivity::algorithm::OptimizationResult;
use relp_sensitivity::algorithm::simplex::Options;
use relp_sensitivity::algorithm::simplex::strategy::pivot_rule::PivotRule;
use relp_sensitivity::algorithm::simplex::tableau::Tableau;
use relp_sensitivity::data::number_types::Tolerance;
use relp_sensitivity::io::import;

/// A linear program solver using the Simplex tableau.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Print more about what happens, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Values closer to zero than this are treated as zero, use 0 for exact comparisons
    #[arg(long)]
    tolerance: Option<f64>,
    /// Stop after this many iterations
    #[arg(long)]
    iteration_limit: Option<u64>,
    /// Pivot on the first improving column instead of the best one
    #[arg(long)]
    first_profitable: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new().filter_level(level).init();

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let form = import(&opts.problem_file)
        .with_context(|| format!("Couldn't read {:?}", opts.problem_file))?;

    let mut options = Options::default();
    match opts.tolerance {
        Some(tolerance) if tolerance == 0_f64 => options.tolerance = Tolerance::Exact,
        Some(tolerance) => options.tolerance = Tolerance::Epsilon(tolerance.abs()),
        None => {},
    }
    options.iteration_limit = opts.iteration_limit;
    if opts.first_profitable {
        options.pivot_rule = PivotRule::FirstProfitable;
    }
    let mut tableau = Tableau::from_standard_form(&form, options)
        .context("Problem is inconsistent")?;

    println!("Solving...");
    let result = tableau.solve();
    log::debug!("final tableau:\n{}", tableau);

    match &result {
        OptimizationResult::FiniteOptimum(solution) | OptimizationResult::MultipleOptima(solution) => {
            match form.reconstruct(solution, options.tolerance) {
                Some(named) => {
                    println!("Solution computed.\n{}", named);
                    if matches!(result, OptimizationResult::MultipleOptima(_)) {
                        println!("Other optimal solutions probably exist.");
                    }
                },
                None => println!("Problem is not feasible."),
            }
        },
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::RebuildRequired => println!("Rebuild required."),
        OptimizationResult::IterationLimit => println!("Stopped after {:?} iterations.", opts.iteration_limit),
    }

    Ok(())
}
