use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sysmonitor::format::format_bytes;
use sysmonitor::render::{self, Page, plan};
use sysmonitor::system::snapshot::{NetworkData, ProcessEntry, Snapshot};

fn make_snapshot(n: usize) -> Snapshot {
    Snapshot {
        total_memory: Some(34_359_738_368),
        used_memory: Some(12_884_901_888),
        networks: Some(
            (0..8)
                .map(|i| NetworkData {
                    interface_name: format!("eth{i}"),
                    total_received: (i as u64 + 1) * 987_654_321,
                    total_transmitted: (i as u64 + 1) * 123_456_789,
                })
                .collect(),
        ),
        components: Some((0..16).map(|i| format!("sensor{i}: 4{i}.0°C")).collect()),
        processes: Some(
            (0..n)
                .map(|i| ProcessEntry {
                    pid: i as u32 + 1,
                    name: format!("proc_{i}"),
                })
                .collect(),
        ),
    }
}

fn bench_format_bytes(c: &mut Criterion) {
    c.bench_function("format_bytes_mixed", |b| {
        b.iter(|| {
            for bytes in [0u64, 1023, 1536, 1_073_741_824, u64::MAX] {
                black_box(format_bytes(black_box(bytes)));
            }
        })
    });
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_500_1000_2000");
    for n in [500usize, 1000, 2000] {
        let snapshot = make_snapshot(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &snapshot, |b, snapshot| {
            b.iter(|| black_box(plan(black_box(snapshot))))
        });
    }
    group.finish();
}

fn bench_render_into_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_page_500_1000_2000");
    for n in [500usize, 1000, 2000] {
        let snapshot = make_snapshot(n);
        let mut page = Page::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &snapshot, |b, snapshot| {
            b.iter(|| render::render(black_box(snapshot), &mut page))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_format_bytes, bench_plan, bench_render_into_page);
criterion_main!(benches);
