//! Benchmarks for the mosaic pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};

use mosaic::{average_blocks, recolor, Colour, Grid, Palette, Pipeline, PipelineConfig, Raster};

/// A 300x300 canvas with varied colours.
fn canvas() -> Raster {
    let rows: Vec<Vec<Colour>> = (0..300)
        .map(|y| {
            (0..300)
                .map(|x| {
                    Colour::rgb(
                        (x % 256) as u8,
                        (y % 256) as u8,
                        ((x + y) * 3 % 256) as u8,
                    )
                })
                .collect()
        })
        .collect();
    Raster::from_rows(&rows).unwrap()
}

fn photo() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(1200, 900, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
    }))
}

// -- Stage benchmarks --

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let raster = canvas();
    let palette = Palette::default_palette();

    group.bench_function("average_128", |b| {
        b.iter(|| average_blocks(black_box(raster.clone()), Grid::square(128)).unwrap())
    });

    group.bench_function("average_16", |b| {
        b.iter(|| average_blocks(black_box(raster.clone()), Grid::square(16)).unwrap())
    });

    let averaged = average_blocks(raster.clone(), Grid::square(128)).unwrap();

    group.bench_function("recolor_averaged", |b| {
        b.iter(|| recolor(black_box(averaged.clone()), &palette))
    });

    group.bench_function("recolor_raw", |b| {
        b.iter(|| recolor(black_box(raster.clone()), &palette))
    });

    group.finish();
}

// -- Full pipeline benchmarks --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let image = photo();
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();

    group.bench_function("run_default", |b| {
        b.iter(|| pipeline.run(black_box(&image), None).unwrap())
    });

    group.bench_function("run_and_encode", |b| {
        b.iter(|| {
            pipeline
                .run(black_box(&image), None)
                .unwrap()
                .to_data_url()
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stages, bench_pipeline);
criterion_main!(benches);
