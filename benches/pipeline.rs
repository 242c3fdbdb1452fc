//! Benchmarks for the pushpin pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pushpin::dither::dither;
use pushpin::page::{paginate, partition, PageOptions};
use pushpin::types::{Colour, Palette, Raster};

/// A synthetic gradient board with varied colours.
fn gradient(width: u32, height: u32) -> Raster {
    let mut raster = Raster::filled(width, height, Colour::BLACK);
    for y in 0..height {
        for x in 0..width {
            raster.set(
                x,
                y,
                Colour::rgb(
                    ((x * 2) % 256) as u8,
                    ((y * 2) % 256) as u8,
                    (((x + y) * 3) % 256) as u8,
                ),
            );
        }
    }
    raster
}

fn mono_palette() -> Palette {
    Palette::new(vec![Colour::BLACK, Colour::WHITE]).unwrap()
}

fn wide_palette() -> Palette {
    Palette::from_hex(&[
        "#000000", "#FFFFFF", "#FF004D", "#29ADFF", "#00E436", "#FFEC27", "#AB5236", "#7E2553",
    ])
    .unwrap()
}

// -- Dithering benchmarks --

fn bench_dithering(c: &mut Criterion) {
    let mut group = c.benchmark_group("dithering");

    let small = gradient(32, 32);
    let large = gradient(128, 128);
    let mono = mono_palette();
    let wide = wide_palette();

    group.bench_function("dither_small_2_colours", |b| {
        b.iter(|| dither(black_box(&small), &mono))
    });

    group.bench_function("dither_large_2_colours", |b| {
        b.iter(|| dither(black_box(&large), &mono))
    });

    group.bench_function("dither_large_8_colours", |b| {
        b.iter(|| dither(black_box(&large), &wide))
    });

    group.finish();
}

// -- Pagination benchmarks --

fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagination");

    group.bench_function("partition", |b| {
        b.iter(|| {
            for width in 1..200u32 {
                black_box(partition(width, 170));
            }
        })
    });

    let board = dither(&gradient(128, 128), &wide_palette());
    let options = PageOptions::default();

    group.bench_function("paginate_128x128", |b| {
        b.iter(|| paginate(black_box(&board), &options))
    });

    group.finish();
}

criterion_group!(benches, bench_dithering, bench_pagination);
criterion_main!(benches);
