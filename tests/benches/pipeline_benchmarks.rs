//! # Hash Encoder Benchmarks
//!
//! | Component | Operation | Target |
//! |-----------|-----------|--------|
//! | Digest Generator | HMAC-SHA-512/256 + base64 of a short input | < 5µs |
//! | Item Store | reserve + persist | < 1µs |
//! | Item Store | get under 10k items | < 1µs |
//! | Processing Service | submit → drained, zero delay | throughput |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use std::time::Duration;

use he_01_item_store::{new_item_store, ItemId, ItemStore, Reservation, StorageConfig};
use he_02_processing::{HashProcessingApi, ProcessingConfig, ProcessingService};
use shared_crypto::DigestGenerator;

const SECRET: &str = "imarealtivelylongandsomewhatsecuresecret";

// ============================================================================
// Digest Generator
// ============================================================================

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    let generator = DigestGenerator::new(SECRET).unwrap();

    for size in [8usize, 64, 1024, 16 * 1024] {
        let input = "x".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("generate", size), &input, |b, input| {
            b.iter(|| black_box(generator.generate(input).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Item Store
// ============================================================================

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("item-store");

    group.bench_function("reserve_and_persist", |b| {
        let store = new_item_store(&StorageConfig::default());
        b.iter(|| {
            let reservation = Reservation::acquire(&store);
            reservation.persist(black_box("digest".to_string())).unwrap();
        })
    });

    let store = new_item_store(&StorageConfig::default());
    for _ in 0..10_000 {
        Reservation::acquire(&store)
            .persist("digest".to_string())
            .unwrap();
    }
    group.bench_function("get_completed", |b| {
        let mut next = 0u64;
        b.iter(|| {
            next = next % 10_000 + 1;
            black_box(store.get(ItemId::new(next)).unwrap())
        })
    });

    group.finish();
}

// ============================================================================
// Processing Service
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("processing");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();

    const BATCH: usize = 1_000;
    for workers in [1usize, 4] {
        group.throughput(Throughput::Elements(BATCH as u64));
        group.bench_with_input(BenchmarkId::new("submit_and_drain", workers), &workers, |b, &workers| {
            b.iter(|| {
                runtime.block_on(async {
                    let digest = Arc::new(DigestGenerator::new(SECRET).unwrap());
                    let store = new_item_store(&StorageConfig::default());
                    let config = ProcessingConfig::new(workers, Duration::ZERO)
                        .with_queue_capacity(workers * 4);
                    let service = ProcessingService::start(config, digest, store).unwrap();

                    for i in 0..BATCH {
                        service.submit(format!("password-{i}")).await.unwrap();
                    }
                    service.terminate().await;
                    black_box(service.stats().count)
                })
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_digest, bench_store, bench_pipeline);
criterion_main!(benches);
