use criterion::{Criterion, black_box, criterion_group, criterion_main};
use munsell_engine::{Munsell, MunsellConverter, MunsellTable};
use palette::Xyz;

fn benchmark_munsell_to_xyz(c: &mut Criterion) {
    let converter = MunsellConverter::new();
    let inside = Munsell::new(47.5, 5.5, 6.0);
    let beyond = Munsell::new(12.0, 8.3, 40.0);

    c.bench_function("munsell_to_xyz_inside_gamut", |b| {
        b.iter(|| converter.munsell_to_xyz(black_box(inside)))
    });
    c.bench_function("munsell_to_xyz_saturated", |b| {
        b.iter(|| converter.munsell_to_xyz(black_box(beyond)))
    });
}

fn benchmark_xyz_to_munsell(c: &mut Criterion) {
    let converter = MunsellConverter::new();
    let inside = converter.munsell_to_xyz(Munsell::new(47.5, 5.5, 6.0)).color;
    let beyond = Xyz::new(0.6, 0.3, 0.02);

    c.bench_function("xyz_to_munsell_inside_gamut", |b| {
        b.iter(|| converter.xyz_to_munsell(black_box(inside)))
    });
    c.bench_function("xyz_to_munsell_saturated", |b| {
        b.iter(|| converter.xyz_to_munsell(black_box(beyond)))
    });
}

fn benchmark_table_build(c: &mut Criterion) {
    c.bench_function("table_build", |b| b.iter(MunsellTable::embedded));
}

criterion_group!(
    benches,
    benchmark_munsell_to_xyz,
    benchmark_xyz_to_munsell,
    benchmark_table_build
);
criterion_main!(benches);
