use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fraudlens_analysis::{
    derive_features, fit_forest, Pipeline, PipelineConfig, Standardizer,
};
use fraudlens_bench::fixtures::{generate_transactions, FixtureSize};
use fraudlens_core::types::FeatureVector;

fn standardized(size: FixtureSize) -> Vec<FeatureVector> {
    let fixture = generate_transactions(size, 42).unwrap();
    let raw = derive_features(&fixture.dataset, "entity", "amount").unwrap();
    Standardizer::fit_transform(&raw).unwrap().1
}

fn bench_derive_features(c: &mut Criterion) {
    let fixture = generate_transactions(FixtureSize::Medium, 42).unwrap();

    c.bench_function("derive_features_10k", |b| {
        b.iter(|| derive_features(black_box(&fixture.dataset), "entity", "amount").unwrap());
    });
}

fn bench_forest_fit(c: &mut Criterion) {
    let vectors = standardized(FixtureSize::Medium);

    c.bench_function("forest_fit_100_trees_10k", |b| {
        b.iter(|| fit_forest(black_box(&vectors), 100, 256, 42).unwrap());
    });
}

fn bench_forest_score(c: &mut Criterion) {
    let vectors = standardized(FixtureSize::Medium);
    let model = fit_forest(&vectors, 100, 256, 42).unwrap();

    c.bench_function("forest_score_parallel_10k", |b| {
        b.iter(|| model.score(black_box(&vectors)).unwrap());
    });
    c.bench_function("forest_score_sequential_10k", |b| {
        b.iter(|| model.score_sequential(black_box(&vectors)).unwrap());
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let fixture = generate_transactions(FixtureSize::Medium, 42).unwrap();
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);
    group.bench_function("full_run_10k", |b| {
        b.iter(|| pipeline.run(black_box(&fixture.dataset)).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_derive_features,
    bench_forest_fit,
    bench_forest_score,
    bench_full_pipeline,
);
criterion_main!(benches);
