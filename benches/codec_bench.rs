//! Benchmarks for GridKV codec operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridkv::codec::{decode_frame, decode_grid, encode_frame, encode_grid, Grid};
use gridkv::{CodecConfig, DataFrame, ElementKind, Series};

fn ordinal_grid(rows: usize, cols: usize) -> Grid {
    let cells = (0..rows * cols).map(|i| Some(i.to_string())).collect();
    Grid::from_cells(rows, cols, cells).unwrap()
}

fn sample_frame(rows: usize) -> DataFrame {
    DataFrame::from_columns([
        Series::from_values("id", ElementKind::Int64, (0..rows as i64)).unwrap(),
        Series::from_values("name", ElementKind::Str, (0..rows).map(|i| format!("row-{i}")))
            .unwrap(),
        Series::from_nullable_values(
            "score",
            ElementKind::Float64,
            (0..rows).map(|i| (i % 7 != 0).then(|| i as f64 * 0.5)),
        )
        .unwrap(),
    ])
}

fn codec_benchmarks(c: &mut Criterion) {
    let grid = ordinal_grid(100, 100);
    let encoded = encode_grid(&grid);
    c.bench_function("encode_grid_100x100", |b| {
        b.iter(|| encode_grid(black_box(&grid)))
    });
    c.bench_function("decode_grid_100x100", |b| {
        b.iter(|| decode_grid(black_box(&encoded)).unwrap())
    });

    let config = CodecConfig::default();
    let frame = sample_frame(1000);
    let labeled = encode_frame(&frame, &config).unwrap();
    c.bench_function("encode_frame_3x1000", |b| {
        b.iter(|| encode_frame(black_box(&frame), &config).unwrap())
    });
    c.bench_function("decode_frame_3x1000", |b| {
        b.iter(|| decode_frame(black_box(&labeled), &config).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
