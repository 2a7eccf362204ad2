use chemistry::{Readings, RuleEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_evaluate(c: &mut Criterion) {
    let engine = RuleEngine::default();
    let balanced = Readings {
        magnesium: 5.0,
        calcium: 12.5,
        potassium: 12.5,
        total_phosphate: 0.03,
        ortho_phosphate: 0.02,
        nitrate: 0.48,
    };
    let imbalanced = Readings {
        magnesium: 1.0,
        total_phosphate: 0.1,
        ortho_phosphate: 0.05,
        ..balanced
    };

    c.bench_function("evaluate_balanced", |b| {
        b.iter(|| engine.evaluate(black_box(&balanced)))
    });
    c.bench_function("evaluate_imbalanced", |b| {
        b.iter(|| engine.evaluate(black_box(&imbalanced)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
