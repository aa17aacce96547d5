use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pyxelator_raster::{Canvas, Color, RasterBuffer};
use pyxelator_sim::evolution::{MutationModel, MutationSampling, UniformCrossover};
use pyxelator_sim::genome::{Grid, Replica};
use pyxelator_sim::{Palette, SimulationBuilder};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn noise_target(canvas: Canvas, colors: u8) -> RasterBuffer {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let mut raster = RasterBuffer::new(canvas, Color::BLACK).unwrap();
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let v = rng.random_range(0..colors) * (255 / colors);
            raster.set_pixel(x, y, Color::new(v, 255 - v, v / 2));
        }
    }
    raster
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    let grid = Grid::new(Canvas::new(512, 512), 11, 3).unwrap();
    let palette = Palette::from_raster(&noise_target(Canvas::new(64, 64), 16)).unwrap();
    let replica = Replica::generate_random(&grid, &palette, &mut rng);
    group.throughput(Throughput::Elements(replica.len() as u64));

    for &factor in &[10u32, 600, 10_000] {
        for sampling in [MutationSampling::PerDot, MutationSampling::Sparse] {
            let model = MutationModel::with_sampling(factor, sampling).unwrap();
            group.bench_with_input(
                BenchmarkId::new(sampling.to_string(), factor),
                &factor,
                |b, _| {
                    b.iter_batched(
                        || replica.clone(),
                        |mut r| model.mutate_replica(&mut r, &palette, &mut rng),
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }

    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let grid = Grid::new(Canvas::new(512, 512), 11, 3).unwrap();
    let palette = Palette::from_raster(&noise_target(Canvas::new(64, 64), 16)).unwrap();
    let a = Replica::generate_random(&grid, &palette, &mut rng);
    let b = Replica::generate_random(&grid, &palette, &mut rng);

    c.bench_function("crossover/2116_dots", |bench| {
        bench.iter(|| UniformCrossover.crossover(&a, &b, &mut rng))
    });
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sample_size(10);

    for &size in &[128u32, 256] {
        let canvas = Canvas::new(size, size);
        let target = noise_target(canvas, 8);
        group.bench_with_input(BenchmarkId::new("step", size), &size, |b, _| {
            b.iter_batched(
                || {
                    SimulationBuilder::new()
                        .population_size(20)
                        .generations(1)
                        .canvas(size, size)
                        .seed(3)
                        .target(target.clone())
                        .build()
                        .unwrap()
                },
                |mut sim| sim.step().unwrap(),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mutation, bench_crossover, bench_generation);
criterion_main!(benches);
