use clap::Args;
use pyxelator_raster::RenderStrategy;
use pyxelator_sim::evolution::MutationSampling;
use pyxelator_sim::simulation::Configuration;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Population size
    #[arg(short = 'n', long, default_value_t = defaults::POPULATION_SIZE)]
    pub population_size: usize,

    /// Number of the last generation (generations 0 to N run)
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Inverse per-dot mutation probability
    ///
    /// Each dot of an offspring is redrawn with probability 1 / factor.
    #[arg(long, default_value_t = defaults::MUTATION_FACTOR)]
    pub mutation_factor: u32,

    /// Dot diameter and grid spacing in pixels
    #[arg(long, default_value_t = defaults::DOT_SIZE)]
    pub dot_size: u32,

    /// Canvas width (must match the target image)
    #[arg(long, default_value_t = defaults::CANVAS_SIZE)]
    pub width: u32,

    /// Canvas height (must match the target image)
    #[arg(long, default_value_t = defaults::CANVAS_SIZE)]
    pub height: u32,

    /// Grid offset from the canvas edge
    #[arg(long, default_value_t = defaults::INSET)]
    pub inset: u32,

    /// Write a snapshot every N generations
    #[arg(long, default_value_t = defaults::PERSIST_EVERY)]
    pub persist_every: usize,

    /// Random seed (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disc renderer (skia, scanline)
    #[arg(long, default_value_t = RenderStrategy::default())]
    pub renderer: RenderStrategy,

    /// Mutation sampler (perdot, sparse)
    #[arg(long, default_value_t = MutationSampling::default())]
    pub sampling: MutationSampling,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::default();
        config.execution.population_size = self.population_size;
        config.execution.total_generations = self.generations;
        config.execution.seed = self.seed;
        config.execution.persist_every = self.persist_every;
        config.execution.renderer = self.renderer;
        config.evolution.mutation_factor = self.mutation_factor;
        config.evolution.sampling = self.sampling;
        config.canvas.width = self.width;
        config.canvas.height = self.height;
        config.canvas.dot_size = self.dot_size;
        config.canvas.inset = self.inset;
        config
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Target image (PNG, JPEG or BMP)
    pub image: PathBuf,

    /// Configuration file written by `pyxelator init`
    ///
    /// Flags given on the command line override values from the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Population size
    #[arg(short = 'n', long)]
    pub population_size: Option<usize>,

    /// Number of the last generation (generations 0 to N run)
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Inverse per-dot mutation probability
    #[arg(long)]
    pub mutation_factor: Option<u32>,

    /// Dot diameter and grid spacing in pixels
    #[arg(long)]
    pub dot_size: Option<u32>,

    /// Canvas width (must match the target image)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height (must match the target image)
    #[arg(long)]
    pub height: Option<u32>,

    /// Grid offset from the canvas edge
    #[arg(long)]
    pub inset: Option<u32>,

    /// Write a snapshot every N generations
    #[arg(long)]
    pub persist_every: Option<usize>,

    /// Override random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disc renderer (skia, scanline)
    #[arg(long)]
    pub renderer: Option<RenderStrategy>,

    /// Mutation sampler (perdot, sparse)
    #[arg(long)]
    pub sampling: Option<MutationSampling>,

    /// Directory snapshots are written to
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output: PathBuf,

    /// File name prefix of snapshots
    #[arg(long, default_value = defaults::SNAPSHOT_PREFIX)]
    pub prefix: String,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

impl RunArgs {
    /// Apply command line overrides on top of `config`.
    pub fn apply(&self, config: &mut Configuration) {
        let execution = &mut config.execution;
        if let Some(n) = self.population_size {
            execution.population_size = n;
        }
        if let Some(g) = self.generations {
            execution.total_generations = g;
        }
        if let Some(p) = self.persist_every {
            execution.persist_every = p;
        }
        if let Some(seed) = self.seed {
            execution.seed = Some(seed);
        }
        if let Some(renderer) = self.renderer {
            execution.renderer = renderer;
        }

        if let Some(factor) = self.mutation_factor {
            config.evolution.mutation_factor = factor;
        }
        if let Some(sampling) = self.sampling {
            config.evolution.sampling = sampling;
        }

        let canvas = &mut config.canvas;
        if let Some(w) = self.width {
            canvas.width = w;
        }
        if let Some(h) = self.height {
            canvas.height = h;
        }
        if let Some(d) = self.dot_size {
            canvas.dot_size = d;
        }
        if let Some(i) = self.inset {
            canvas.inset = i;
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Image to analyse
    pub image: PathBuf,

    /// Number of most frequent colors to list
    #[arg(long, default_value_t = defaults::TOP_COLORS)]
    pub top: usize,
}
