use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scanview_core::filter::filter_by_port_or_service;
use scanview_core::output::{export_csv, export_json};
use scanview_core::store::ResultStore;
use scanview_core::types::{FormatKey, Host, Port};
use std::hint::black_box;

fn sample_hosts(count: usize) -> Vec<Host> {
    (0..count)
        .map(|i| {
            let mut host = Host::new(format!("10.0.{}.{}", i / 256, i % 256));
            host.add_port(Port::open("22/tcp", "ssh"));
            host.add_port(Port::open("80/tcp", "http"));
            host.add_port(Port::open("443/tcp", "https"));
            host.add_port(Port::open("3306/tcp", "mysql"));
            host
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let hosts = sample_hosts(1000);
    let mut group = c.benchmark_group("filter");

    for filter in ["", "http", "443", "nomatch"] {
        group.bench_with_input(BenchmarkId::from_parameter(filter), &filter, |b, &filter| {
            b.iter(|| black_box(filter_by_port_or_service(&hosts, filter).len()))
        });
    }

    group.finish();
}

fn bench_exports(c: &mut Criterion) {
    let mut store = ResultStore::new();
    store.record_result(FormatKey::LineOriented, sample_hosts(1000));

    c.bench_function("export_json", |b| {
        b.iter(|| black_box(export_json(&store).map(|v| v.len())))
    });
    c.bench_function("export_csv", |b| b.iter(|| black_box(export_csv(&store).len())));
}

criterion_group!(benches, bench_filter, bench_exports);

criterion_main!(benches);
