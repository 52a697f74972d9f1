//! Benchmarks for chart computations and callback dispatch
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launchboard::callbacks::{CallbackRegistry, ControlState, PAYLOAD_SLIDER, SITE_DROPDOWN};
use launchboard::charts::{compute_scatter_selection, compute_success_distribution};
use launchboard::dataset::{Dataset, LaunchRecord, PayloadRange, SiteFilter};
use std::io::Write;
use tempfile::NamedTempFile;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                BOOSTERS[i % BOOSTERS.len()],
                (i % 3 == 0) as i64,
            )
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

fn bench_success_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_distribution");

    for size in [56, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let site = SiteFilter::Site("KSC LC-39A".to_string());

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| compute_success_distribution(black_box(&dataset), &SiteFilter::All))
        });

        group.bench_function(format!("one_site_{}", size), |b| {
            b.iter(|| compute_success_distribution(black_box(&dataset), &site))
        });
    }

    group.finish();
}

fn bench_scatter_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_selection");

    for size in [56, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let range = PayloadRange::new(2000.0, 8000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| compute_scatter_selection(black_box(&dataset), &SiteFilter::All, &range))
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let dataset = create_test_dataset(1000);
    let registry = CallbackRegistry::dashboard();
    let state = ControlState::new(SiteFilter::All, PayloadRange::new(0.0, 10_000.0));

    group.bench_function("site_change", |b| {
        b.iter(|| registry.dispatch(black_box(SITE_DROPDOWN), &dataset, &state).unwrap())
    });

    group.bench_function("slider_change", |b| {
        b.iter(|| registry.dispatch(black_box(PAYLOAD_SLIDER), &dataset, &state).unwrap())
    });

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category"
    )
    .unwrap();
    for i in 0..1000 {
        writeln!(
            file,
            "{},{},{},{},F9 {},{}",
            i,
            SITES[i % SITES.len()],
            i % 2,
            i * 9,
            BOOSTERS[i % BOOSTERS.len()],
            BOOSTERS[i % BOOSTERS.len()]
        )
        .unwrap();
    }
    file.flush().unwrap();

    group.throughput(Throughput::Elements(1000));
    group.bench_function("csv_1000", |b| {
        b.iter(|| Dataset::load(black_box(file.path())).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_success_distribution,
    bench_scatter_selection,
    bench_dispatch,
    bench_load
);
criterion_main!(benches);
