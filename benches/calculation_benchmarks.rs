//! Performance benchmarks for the Pay Package Engine.
//!
//! This benchmark suite tracks:
//! - Pure calculation of a single package, with and without the breakdown
//! - A preview request through the HTTP router
//! - Batches of preview requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pay_package_engine::api::{AppState, create_router};
use pay_package_engine::calculation::{calculate, calculate_with_breakdown};
use pay_package_engine::config::ConfigLoader;
use pay_package_engine::models::PayPackageInput;
use pay_package_engine::storage::sample_packages;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a state with loaded configuration and an empty store.
fn create_test_state() -> AppState {
    let mut config = ConfigLoader::load("./config/adelphi")
        .expect("Failed to load config")
        .into_config();
    config.service.seed_sample_data = false;
    AppState::new(ConfigLoader::from_config(config))
}

/// Inputs of the bundled sample packages.
fn sample_inputs() -> Vec<PayPackageInput> {
    sample_packages().into_iter().map(|p| p.input).collect()
}

/// Creates a preview request body with a varied bill rate.
fn create_request_body(i: usize) -> String {
    serde_json::json!({
        "providerName": format!("Provider {:03}", i),
        "specialty": "ICU RN",
        "facility": "Mercy General",
        "location": "Sacramento, CA",
        "startDate": "2024-01-01",
        "endDate": "2024-03-28",
        "hoursPerWeek": 36,
        "billRate": 80 + (i % 20),
        "regularPayRate": 40,
        "overtimePayRate": 60,
        "taxableStipend": 250,
        "nonTaxableStipend": 800,
        "mealsStipend": 350,
        "employerTaxes": "7.65",
        "workersComp": 2,
        "healthInsurance": 350,
        "professionalLiability": 100,
        "otherCosts": 150
    })
    .to_string()
}

/// Benchmark: calculation without the HTTP layer.
fn bench_calculate(c: &mut Criterion) {
    let inputs = sample_inputs();

    c.bench_function("calculate", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(calculate(black_box(input)));
            }
        })
    });

    c.bench_function("calculate_with_breakdown", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(calculate_with_breakdown(black_box(input)));
            }
        })
    });
}

/// Benchmark: single preview request through the router.
fn bench_preview_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_request_body(0);

    c.bench_function("preview_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batches of preview requests.
fn bench_batches(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let mut group = c.benchmark_group("batch_processing");

    for batch_size in [10usize, 100, 1000].iter() {
        let requests: Vec<String> = (0..*batch_size).map(create_request_body).collect();

        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(
            BenchmarkId::new("previews", batch_size),
            batch_size,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let mut results = Vec::with_capacity(requests.len());
                    for body in &requests {
                        let response = router
                            .clone()
                            .oneshot(
                                Request::builder()
                                    .method("POST")
                                    .uri("/api/calculate")
                                    .header("Content-Type", "application/json")
                                    .body(Body::from(body.clone()))
                                    .unwrap(),
                            )
                            .await
                            .unwrap();
                        results.push(response);
                    }
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_calculate, bench_preview_request, bench_batches);
criterion_main!(benches);
