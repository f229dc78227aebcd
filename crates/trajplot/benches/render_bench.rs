//! Criterion benchmarks for the plot pipeline.
//! Focus sizes: n in {10, 100, 1000, 10000} points of a seeded random walk.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use trajplot::sample::{random_walk, WalkCfg};
use trajplot::{normalize, plot, Canvas, CanvasCfg, Rgb, Style};

fn walk(n: usize, seed: u64) -> Vec<trajplot::Point> {
    random_walk(
        WalkCfg {
            len: n,
            ..WalkCfg::default()
        },
        seed,
    )
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let cfg = CanvasCfg {
        supersample: 1,
        ..CanvasCfg::default()
    };
    let style = Style::default();
    for &n in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("normalize", n), &n, |b, &n| {
            let data = walk(n, 43);
            b.iter(|| {
                let _res = normalize(&data).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("render", n), &n, |b, &n| {
            let points = normalize(&walk(n, 44)).unwrap().points;
            b.iter_batched(
                || {
                    let mut canvas = Canvas::create(cfg).unwrap();
                    canvas.fill_background(Rgb::WHITE).unwrap();
                    canvas
                },
                |mut canvas| {
                    trajplot::render(&mut canvas, &points, &style).unwrap();
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("plot_png", n), &n, |b, &n| {
            let data = walk(n, 45);
            b.iter(|| {
                let canvas = plot(&data, cfg, &style).unwrap();
                let _png = canvas.export_png().unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
