use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use knapsack_aco::experiment::Experiment;
use knapsack_aco::experiment_config::load_file;
use knapsack_aco::knapsack::{import_csv, KnapsackInstance};
use knapsack_aco::metaheuristic::aco::{Params, ProgressSupervisor};
use knapsack_aco::metaheuristic::{Aco, Metaheuristic, ProblemInstance, Solution};

#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solves a single instance read from a csv file with the columns name, weight and value.
    Solve {
        #[arg(short, long)]
        items: PathBuf,
        /// Yaml or ron file holding the colony parameters.
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        max_weight: Option<f64>,
        #[arg(long)]
        ants: Option<usize>,
        #[arg(long)]
        iterations: Option<usize>,
        /// Don't show a progress bar.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Runs every experiment config matching the glob pattern.
    Experiment {
        pattern: String,
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn print_solution(instance: &KnapsackInstance, best_value: f64, solution: Option<&Solution>) {
    println!("Best value: {}", best_value);
    if let Some(solution) = solution {
        for id in solution.iter_selected_ids() {
            let item = &instance.items()[id];
            println!(
                "Item {} - {} - Weight: {}, Value: {}",
                id + 1,
                item.name,
                item.weight,
                item.value
            );
        }
        println!("Total weight: {}", solution.total_weight);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    match Args::parse().command {
        Command::Solve {
            items,
            config,
            seed,
            max_weight,
            ants,
            iterations,
            quiet,
        } => {
            let instance = import_csv(items)?;
            let mut params: Params = match config {
                Some(path) => load_file(path)?,
                None => Params::default(),
            };
            if let Some(seed) = seed {
                params = params.with_seed(seed);
            }
            if let Some(max_weight) = max_weight {
                params = params.with_max_weight(max_weight);
            }
            if let Some(ants) = ants {
                params = params.with_ant_count(ants);
            }
            if let Some(iterations) = iterations {
                params = params.with_iterations(iterations);
            }

            let supervisor = if quiet {
                ProgressSupervisor::hidden()
            } else {
                ProgressSupervisor::new(params.iterations)
            };
            let mut colony = Aco::new(ProblemInstance::new(&instance), params, supervisor)?;
            let result = colony.run();
            colony.supervisor.finish();

            println!("\nBest solution found:");
            print_solution(&instance, result.best_value, result.best_solution.as_ref());
        }
        Command::Experiment { pattern, out_dir } => {
            std::fs::create_dir_all(&out_dir)?;
            for summary in Experiment::run_glob(&pattern, &out_dir)? {
                match summary.best_value {
                    Some(value) => println!(
                        "{} -> {} (best value {})",
                        summary.config.display(),
                        summary.output.display(),
                        value
                    ),
                    None => println!("{} skipped, already finished", summary.config.display()),
                }
            }
        }
    }

    Ok(())
}
