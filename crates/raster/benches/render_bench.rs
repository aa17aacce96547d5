use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pyxelator_raster::{Canvas, Color, Disc, RenderStrategy};
use rand::Rng;
use std::hint::black_box;

fn grid(canvas: Canvas, diameter: u32) -> Vec<Disc> {
    let mut rng = rand::rng();
    let mut discs = Vec::new();
    let mut y = 3;
    while y + diameter <= canvas.height - 3 {
        let mut x = 3;
        while x + diameter <= canvas.width - 3 {
            discs.push(Disc {
                x,
                y,
                color: Color::new(rng.random(), rng.random(), rng.random()),
            });
            x += diameter;
        }
        y += diameter;
    }
    discs
}

fn bench_render(c: &mut Criterion) {
    let canvas = Canvas::new(512, 512);
    let mut group = c.benchmark_group("render");

    for diameter in [5u32, 11, 25] {
        let discs = grid(canvas, diameter);
        group.throughput(Throughput::Elements(discs.len() as u64));

        for strategy in [RenderStrategy::Skia, RenderStrategy::Scanline] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), diameter),
                &discs,
                |b, d| {
                    b.iter(|| {
                        strategy
                            .render(black_box(d), diameter, Color::WHITE, canvas)
                            .unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
