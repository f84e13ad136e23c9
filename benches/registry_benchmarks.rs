use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use ecc_curve_registry::{
    descriptor_set, discover, inject_curves, CurveSupport, CurveTypeRegistry, DeclarationShape,
    TableEngine,
};

fn engine_with(curves: usize) -> TableEngine {
    let mut names: Vec<String> = (0..curves).map(|i| format!("curve{}", i)).collect();
    names.extend(["brainpoolP256r1", "brainpoolP384r1", "brainpoolP512r1"].map(String::from));
    TableEngine::from_names(names)
}

fn benchmark_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");

    for curves in [16, 82, 256] {
        let engine = engine_with(curves);
        group.bench_with_input(BenchmarkId::new("discover", curves), &engine, |b, engine| {
            b.iter(|| black_box(discover(engine).unwrap()));
        });
    }

    let support = CurveSupport::new(engine_with(82));
    support.supported_curve_names().unwrap();
    group.bench_function("memoized", |b| {
        b.iter(|| black_box(support.supported_curve_names().unwrap()));
    });

    group.finish();
}

fn benchmark_injection(c: &mut Criterion) {
    let mut group = c.benchmark_group("injection");
    let supported = discover(&engine_with(82)).unwrap();

    for shape in [DeclarationShape::Legacy, DeclarationShape::Modern] {
        group.bench_with_input(BenchmarkId::new("fresh_registry", shape), &shape, |b, &shape| {
            b.iter_with_setup(CurveTypeRegistry::new, |mut registry| {
                black_box(inject_curves(&mut registry, &supported, descriptor_set(shape)))
            });
        });
    }

    let mut populated = CurveTypeRegistry::new();
    inject_curves(&mut populated, &supported, descriptor_set(DeclarationShape::Modern));
    group.bench_function("already_registered", |b| {
        b.iter(|| {
            black_box(inject_curves(&mut populated, &supported, descriptor_set(DeclarationShape::Modern)))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_discovery, benchmark_injection);
criterion_main!(benches);
