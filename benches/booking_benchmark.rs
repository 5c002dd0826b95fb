//! Performance benchmarks for hotel-booking
//!
//! This benchmark suite measures:
//! - Validation and pricing of a form submission
//! - Live price preview
//! - Store document save/load across collection sizes
//!
//! Run with: cargo bench
//! View results: open target/criterion/report/index.html

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hotel_booking::store::{BookingStore, InMemoryStore};
use hotel_booking::{validate_request, Booking, BookingRequest, PriceTable};
use std::hint::black_box;

// ============================================================================
// Fixtures
// ============================================================================

fn request(image_size: usize) -> BookingRequest {
    let mut request = BookingRequest::new("Иванов И.И.", "Suite")
        .check_in(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        .check_out(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
    if image_size > 0 {
        request = request.image(vec![0xAB; image_size]);
    }
    request
}

fn collection(len: usize) -> Vec<Booking> {
    let prices = PriceTable::standard();
    (0..len)
        .map(|_| validate_request(&prices, &request(0)).unwrap())
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_validation(c: &mut Criterion) {
    let prices = PriceTable::standard();
    let mut group = c.benchmark_group("validate_request");

    for image_size in [0usize, 16 * 1024, 256 * 1024] {
        let req = request(image_size);
        group.throughput(Throughput::Bytes(image_size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(image_size), &req, |b, req| {
            b.iter(|| validate_request(black_box(&prices), black_box(req)).unwrap())
        });
    }

    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let prices = PriceTable::standard();
    let check_in = NaiveDate::from_ymd_opt(2024, 6, 1);
    let check_out = NaiveDate::from_ymd_opt(2024, 6, 4);

    c.bench_function("preview_price", |b| {
        b.iter(|| prices.preview_price(black_box("Suite"), check_in, check_out))
    });
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    for len in [1usize, 100, 1000] {
        let bookings = collection(len);
        let store = InMemoryStore::new();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("save", len), &bookings, |b, bookings| {
            b.iter(|| store.save(black_box(bookings)).unwrap())
        });

        store.save(&bookings).unwrap();
        group.bench_with_input(BenchmarkId::new("load", len), &store, |b, store| {
            b.iter(|| black_box(store.load().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validation, bench_preview, bench_store);
criterion_main!(benches);
