use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tinct::{Color, ColorSpace, Fraction};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("hashed", |b| {
        b.iter(|| black_box("#ff7f50").parse::<Color>())
    });

    group.bench_function("rgb-legacy", |b| {
        b.iter(|| black_box("rgba(255, 127, 80, 50%)").parse::<Color>())
    });

    group.bench_function("hsl-modern", |b| {
        b.iter(|| black_box("hsl(16.1deg 100% 65.7% / 0.5)").parse::<Color>())
    });

    group.bench_function("named", |b| {
        b.iter(|| black_box("rebeccapurple").parse::<Color>())
    });

    group.finish();

    let coral = Color::from_24bit(255, 127, 80);
    let mut group = c.benchmark_group("format");

    group.bench_function("hashed", |b| b.iter(|| black_box(&coral).to_string()));

    for space in [ColorSpace::Rgb, ColorSpace::Hsl, ColorSpace::Cmyk] {
        group.bench_function(space.css_name(), |b| {
            b.iter(|| black_box(&coral).to_string_in(space))
        });
    }

    group.finish();

    let steel = Color::from_24bit(70, 130, 180);
    let mut group = c.benchmark_group("transform");

    group.bench_function("mix", |b| {
        b.iter(|| black_box(&coral).mix(black_box(&steel), Fraction::HALF))
    });

    group.bench_function("blur", |b| {
        b.iter(|| black_box(&coral).blur(black_box(&steel), Fraction::HALF))
    });

    group.bench_function("complement", |b| b.iter(|| black_box(&coral).complement()));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
