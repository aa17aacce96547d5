use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pyxelator_raster::load_target;
use pyxelator_sim::simulation::{CancelToken, Configuration, RunOutcome, Simulation};
use pyxelator_sim::storage::SnapshotRecorder;

use crate::args::RunArgs;
use crate::printing::print_simulation_parameters;

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    println!("🎨 Pyxelator - Running Simulation");
    println!("============================================");

    let mut config = match &args.config {
        Some(path) => Configuration::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Configuration::default(),
    };
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let target = load_target(&args.image, config.canvas.canvas())
        .with_context(|| format!("Failed to load target image {}", args.image.display()))?;

    let mut sim = Simulation::new(config, target).context("Failed to initialize simulation")?;
    print_simulation_parameters(&sim);

    // Ctrl-C only raises the flag; the engine stops between generations.
    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    let cancel = CancelToken::new();
    let signal_token = cancel.clone();
    rt.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, stopping after the current generation");
            signal_token.cancel();
        }
    });

    let mut recorder = SnapshotRecorder::for_simulation(&sim, &args.output, args.prefix.as_str());
    let total = sim.total_generations();
    let pb = if args.progress {
        Some(progress_bar(total + 1)?)
    } else {
        None
    };

    println!("\nRunning generations 0 to {total}...");
    let outcome = sim
        .run_with(&cancel, |s| {
            recorder.observe(s)?;
            if let Some(pb) = &pb {
                pb.inc(1);
                pb.set_message(format!("best {}", s.best_score()));
            }
            Ok(())
        })
        .context("Simulation failed")?;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let last = recorder
        .finish(&sim)
        .context("Failed to save the final snapshot")?;
    rt.shutdown_background();

    match (outcome, sim.latest_generation()) {
        (RunOutcome::Completed { .. }, Some(latest)) => {
            println!("\n✓ Simulation complete!");
            println!("  Final generation: {latest}");
        }
        (_, Some(latest)) => {
            println!("\n⏹ Simulation stopped after generation {latest} of {total}");
        }
        (_, None) => println!("\n⏹ Simulation stopped before the first generation"),
    }
    println!("  Generations run: {}", outcome.generation());
    println!("  Best score: {:.4}% difference", sim.best_score().get());
    println!("  Snapshots written: {}", recorder.written());
    println!("  Latest snapshot: {}", last.display());

    Ok(())
}

fn progress_bar(total: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
            )?
            .progress_chars("#>-"),
    );
    Ok(pb)
}
