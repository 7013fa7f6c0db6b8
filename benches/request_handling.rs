use axum::{body::Body, http::Request, Router};
use contactgen::adapters::health_handler::HealthHandler;
use contactgen::adapters::metrics_handler::MetricsCollector;
use contactgen::config::{GeneratorMode, Settings};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

fn create_test_app(rt: &tokio::runtime::Runtime, mode: GeneratorMode) -> Router {
    let mut settings = Settings::default();
    settings.generator.mode = mode;
    let settings = Arc::new(RwLock::new(settings));
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let metrics = Arc::new(MetricsCollector::new().unwrap());
    rt.block_on(contactgen::create_app(settings, health_handler, metrics))
}

fn send(rt: &tokio::runtime::Runtime, app: &Router, uri: &str) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = rt.block_on(app.clone().oneshot(request)).unwrap();
    black_box(response);
}

fn benchmark_contact_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = create_test_app(&rt, GeneratorMode::Pools);

    c.bench_function("get_contact_pools", |b| {
        b.iter(|| send(&rt, &app, "/api/contact?includeAddress=true"))
    });

    c.bench_function("get_contact_invalid", |b| {
        b.iter(|| send(&rt, &app, "/api/contact?includeEmail=maybe"))
    });
}

fn benchmark_batch_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = create_test_app(&rt, GeneratorMode::Faker);

    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(200));
    group.bench_function("get_contact_faker_200", |b| {
        b.iter(|| send(&rt, &app, "/api/contact?count=200"))
    });
    group.finish();
}

fn benchmark_health(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = create_test_app(&rt, GeneratorMode::Pools);

    c.bench_function("health", |b| b.iter(|| send(&rt, &app, "/health")));
}

criterion_group!(
    benches,
    benchmark_contact_request,
    benchmark_batch_request,
    benchmark_health
);
criterion_main!(benches);
