//! Benchmarks for the export pipeline.

use std::path::{Path, PathBuf};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use artboard_export::render::{ExportOptions, Rasterizer, SvgRasterizer};
use artboard_export::{build_path, plan_export, sanitize, Document, SelectionSet, ANDROID_PRESETS};
use resvg::usvg::fontdb;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

// -- Naming benchmarks --

fn bench_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("naming");

    group.bench_function("sanitize_short", |b| {
        b.iter(|| sanitize(black_box("App Icon!")))
    });

    let long_name = "Onboarding Screen / Step 3 – Permissions (Dark Mode) ".repeat(8);
    group.bench_function("sanitize_long", |b| {
        b.iter(|| sanitize(black_box(&long_name)))
    });

    group.bench_function("build_path_android", |b| {
        b.iter(|| build_path(Path::new("out"), &ANDROID_PRESETS[2], black_box("App Icon!")))
    });

    group.finish();
}

// -- Planning benchmarks --

fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");

    let names: Vec<String> = (0..200).map(|i| format!("Artboard {}", i)).collect();
    let document = Document::from_artboards(names);
    let selection = SelectionSet::all();

    group.bench_function("plan_200_artboards", |b| {
        b.iter(|| plan_export(black_box(&selection), &document, Path::new("out")))
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let document = Document::open(fixtures_dir().join("icons")).unwrap();
    let artboard = &document.artboards()[0];
    let rasterizer = SvgRasterizer::with_fonts(fontdb::Database::new());

    for scale in [50, 100, 200] {
        let options = ExportOptions::png24(scale);
        group.bench_function(format!("render_icon_{}pct", scale), |b| {
            b.iter(|| rasterizer.render(black_box(artboard), &options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_naming, bench_planning, bench_rendering);
criterion_main!(benches);
