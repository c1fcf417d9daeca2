use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_format::{from_str, to_string, Matrix, MatrixFormat, MatrixFormatOptions, ParsePosition};

fn square(size: usize) -> Matrix {
    let data = (0..size * size)
        .map(|i| (i as f64) * 0.37 - (size as f64))
        .collect();
    Matrix::from_row_major(size, size, data).unwrap()
}

fn benchmark_format_small(c: &mut Criterion) {
    let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    c.bench_function("format_3x3", |b| b.iter(|| to_string(black_box(&m))));
}

fn benchmark_parse_small(c: &mut Criterion) {
    let text = "{{1,0,0},{0,1,0},{0,0,1}}";

    c.bench_function("parse_3x3", |b| b.iter(|| from_str(black_box(text))));
}

fn benchmark_format_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_square");

    for size in [4, 16, 64, 128].iter() {
        let m = square(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &m, |b, m| {
            b.iter(|| to_string(black_box(m)))
        });
    }
    group.finish();
}

fn benchmark_parse_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_square");

    for size in [4, 16, 64, 128].iter() {
        let text = to_string(&square(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_whitespace(c: &mut Criterion) {
    let compact = to_string(&square(16));
    let spaced = compact.replace(',', " , ").replace('{', " { ").replace('}', " } ");

    let mut group = c.benchmark_group("parse_whitespace");
    group.bench_function("compact", |b| b.iter(|| from_str(black_box(&compact))));
    group.bench_function("spaced", |b| b.iter(|| from_str(black_box(&spaced))));
    group.finish();
}

fn benchmark_custom_layout(c: &mut Criterion) {
    let format = MatrixFormat::new(
        MatrixFormatOptions::new()
            .with_prefix("matrix(")
            .with_suffix(")")
            .with_row_prefix("[")
            .with_row_suffix("]")
            .with_row_separator("; ")
            .with_column_separator(", "),
    )
    .unwrap();
    let m = square(32);
    let text = format.format(&m);

    let mut group = c.benchmark_group("custom_layout");
    group.bench_function("format", |b| b.iter(|| format.format(black_box(&m))));
    group.bench_function("parse", |b| b.iter(|| format.parse(black_box(&text))));
    group.finish();
}

fn benchmark_embedded_scan(c: &mut Criterion) {
    let format = MatrixFormat::default();
    let block = to_string(&square(8));
    let text: String = (0..32).map(|i| format!("m{i} = {block};\n")).collect();

    c.bench_function("parse_at_sequence", |b| {
        b.iter(|| {
            let mut pos = ParsePosition::new(0);
            let mut count = 0;
            while let Some(start) = text[pos.index()..].find('=') {
                pos.set_index(pos.index() + start + 1);
                if format.parse_at(black_box(&text), &mut pos).is_some() {
                    count += 1;
                }
            }
            count
        })
    });
}

criterion_group!(
    benches,
    benchmark_format_small,
    benchmark_parse_small,
    benchmark_format_square,
    benchmark_parse_square,
    benchmark_parse_whitespace,
    benchmark_custom_layout,
    benchmark_embedded_scan
);
criterion_main!(benches);
