//! Behavioural properties of the genetic algorithm.

use pyxelator_raster::{Canvas, Color, RasterBuffer, RenderStrategy};
use pyxelator_sim::evolution::{difference, MutationModel, MutationSampling};
use pyxelator_sim::genome::{Grid, Replica};
use pyxelator_sim::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn stripes(canvas: Canvas) -> RasterBuffer {
    let mut raster = RasterBuffer::new(canvas, Color::BLACK).unwrap();
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let color = match (x / 8) % 3 {
                0 => Color::new(250, 200, 10),
                1 => Color::new(10, 90, 200),
                _ => Color::new(20, 20, 20),
            };
            raster.set_pixel(x, y, color);
        }
    }
    raster
}

fn builder(population: usize, generations: usize) -> SimulationBuilder {
    SimulationBuilder::new()
        .population_size(population)
        .generations(generations)
        .canvas(48, 48)
        .dot_size(6)
        .mutation_factor(15)
        .seed(2024)
        .target(stripes(Canvas::new(48, 48)))
}

#[test]
fn test_population_invariants_hold_every_generation() {
    let mut sim = builder(9, 12).build().unwrap();
    assert_eq!(sim.population().size(), 9);
    assert!(sim.population().is_sorted());

    let grid_len = sim.grid().len();
    let mut generations = Vec::new();
    sim.run_with(&CancelToken::new(), |s| {
        let population = s.population();
        assert_eq!(population.size(), 10);
        assert!(population.is_sorted());
        for individual in population.individuals() {
            assert_eq!(individual.replica().len(), grid_len);
            for (dot, &pos) in individual.replica().dots().iter().zip(s.grid().positions()) {
                assert_eq!(dot.position(), pos);
                assert!(s.palette().contains(dot.color()));
            }
        }
        generations.push(s.generation());
        Ok(())
    })
    .unwrap();

    // generations 0..=12 are all run
    assert_eq!(generations, (1..=13).collect::<Vec<_>>());
}

#[test]
fn test_best_score_never_gets_worse() {
    let mut sim = builder(12, 40).build().unwrap();
    let initial = sim.best_score();
    let mut previous = initial;

    sim.run_with(&CancelToken::new(), |s| {
        assert!(s.best_score().get() <= previous.get());
        previous = s.best_score();
        Ok(())
    })
    .unwrap();

    assert!(sim.best_score().get() <= initial.get());
}

#[test]
fn test_best_score_matches_rendered_best() {
    let mut sim = builder(6, 5).build().unwrap();
    sim.run().unwrap();

    let rendered = sim.render_best().unwrap();
    let target = stripes(Canvas::new(48, 48));
    assert_eq!(difference(&rendered, &target).unwrap(), sim.best_score().get());
}

#[test]
fn test_fitness_bounds() {
    let canvas = Canvas::new(48, 48);
    let target = stripes(canvas);
    let grid = Grid::new(canvas, 6, 3).unwrap();
    let palette = Palette::from_raster(&target).unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);

    for renderer in [RenderStrategy::Skia, RenderStrategy::Scanline] {
        let evaluator = FitnessEvaluator::new(target.clone().into(), renderer, 6, palette.background());
        for _ in 0..20 {
            let replica = Replica::generate_random(&grid, &palette, &mut rng);
            let score = evaluator.score(&replica).unwrap().get();
            assert!((0.0..=100.0).contains(&score), "{score}");
        }
    }

    assert_eq!(difference(&target, &target).unwrap(), 0.0);
}

#[test]
fn test_crossover_preserves_positions() {
    let canvas = Canvas::new(48, 48);
    let grid = Grid::new(canvas, 6, 3).unwrap();
    let palette = Palette::from_raster(&stripes(canvas)).unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);

    for _ in 0..50 {
        let a = Replica::generate_random(&grid, &palette, &mut rng);
        let b = Replica::generate_random(&grid, &palette, &mut rng);
        let child = Replica::crossover(&a, &b, &mut rng);

        assert_eq!(child.len(), a.len());
        for i in 0..child.len() {
            let dot = child.dots()[i];
            assert_eq!(dot.position(), grid.positions()[i]);
            assert!(dot == a.dots()[i] || dot == b.dots()[i]);
        }
    }
}

#[test]
fn test_mutation_rate_converges() {
    let grid = Grid::new(Canvas::new(512, 512), 11, 3).unwrap();
    let palette = Palette::from_counts([(Color::BLACK, 1), (Color::WHITE, 1)]).unwrap();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(31337);
    let replica = Replica::generate_random(&grid, &palette, &mut rng);

    for sampling in [MutationSampling::PerDot, MutationSampling::Sparse] {
        let model = MutationModel::with_sampling(100, sampling).unwrap();
        let rounds = 500;
        let mut mutated = 0usize;
        for _ in 0..rounds {
            let mut child = replica.clone();
            mutated += child.mutate(&model, &palette, &mut rng);
        }
        let rate = mutated as f64 / (rounds * replica.len()) as f64;
        assert!((rate - 0.01).abs() < 0.0005, "{sampling}: rate {rate}");
    }
}

#[test]
fn test_background_decision_from_target() {
    let canvas = Canvas::new(10, 10);
    let mut mostly_light = RasterBuffer::new(canvas, Color::new(230, 230, 200)).unwrap();
    for x in 0..10 {
        for y in 0..4 {
            mostly_light.set_pixel(x, y, Color::new(5, 5, 60));
        }
    }
    assert_eq!(Palette::from_raster(&mostly_light).unwrap().background(), Background::Light);

    let mut mostly_dark = mostly_light.clone();
    for x in 0..10 {
        for y in 4..6 {
            mostly_dark.set_pixel(x, y, Color::new(5, 5, 60));
        }
    }
    assert_eq!(Palette::from_raster(&mostly_dark).unwrap().background(), Background::Dark);
}

#[test]
fn test_sparse_sampling_runs_end_to_end() {
    let mut sim = builder(6, 10).sampling(MutationSampling::Sparse).build().unwrap();
    assert_eq!(sim.run().unwrap(), RunOutcome::Completed { generation: 11 });
    assert_eq!(sim.state(), SimulationState::Terminal);
}
