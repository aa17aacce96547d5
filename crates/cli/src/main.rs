mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{InitArgs, InspectArgs, RunArgs};
use commands::{init, inspect, run};

/// Pyxelator: pointillist image approximation
///
/// Evolves a grid of colored dots with a genetic algorithm until it
/// resembles a target image, writing snapshots of the best replica as it
/// goes.
#[derive(Parser, Debug)]
#[command(name = "pyxelator")]
#[command(author, version, about = "Evolves dot paintings of an image", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a run configuration file.
    ///
    /// The file can be edited and passed to `run --config`.
    Init(Box<InitArgs>),

    /// Evolve a dot painting of an image.
    ///
    /// Runs generation by generation and saves the best replica every
    /// `--persist-every` generations. Ctrl-C stops after the current
    /// generation and saves the best replica so far.
    Run(Box<RunArgs>),

    /// Show the palette and background chosen for an image.
    Inspect(InspectArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = try_main(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn try_main(cli: Cli) -> Result<()> {
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => init::init_configuration(&args)?,
        Commands::Run(args) => run::run_simulation(&args)?,
        Commands::Inspect(args) => inspect::inspect_image(&args)?,
    }

    Ok(())
}
