use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sysglance::system::memory::BYTES_PER_MB;
use sysglance::system::process::{ProcessRecord, list_processes, top_by_memory};
use sysglance::system::source::{MockSource, ProcessDetails, RawProcess};

fn make_raw(n: usize) -> Vec<RawProcess> {
    (0..n)
        .map(|i| RawProcess {
            pid: i as u32 + 1,
            name: format!("proc_{i}"),
            details: (i % 7 != 0).then(|| ProcessDetails {
                memory_bytes: ((i * 7919) % 4096) as u64 * BYTES_PER_MB,
                start_time_unix: i as u64,
            }),
        })
        .collect()
}

fn make_records(n: usize) -> Vec<ProcessRecord> {
    let mut source = MockSource::new();
    source.push_processes(Some(make_raw(n)));
    list_processes(&mut source, 100_000).records
}

fn bench_top_by_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_by_memory_500_1000_2000");
    for n in [500usize, 1000, 2000] {
        let records = make_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| top_by_memory(black_box(records), 10).len());
        });
    }
    group.finish();
}

fn bench_list_processes(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_processes_500_1000_2000");
    for n in [500usize, 1000, 2000] {
        let raw = make_raw(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &raw, |b, raw| {
            b.iter(|| {
                let mut source = MockSource::new();
                source.push_processes(Some(raw.clone()));
                list_processes(&mut source, black_box(100_000)).records.len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_top_by_memory, bench_list_processes);
criterion_main!(benches);
