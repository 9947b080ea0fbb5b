use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use sequence_list::SequenceList;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn insert_last_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_last");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SequenceList::new();
                for i in 0..size {
                    list.insert_last(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn insert_sorted_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_sorted");
    // sorted insertion is quadratic overall, keep the inputs small
    for size in [100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_with_setup(
                || {
                    let mut rng = rand::rng();
                    (0..size).map(|_| rng.random_range(0..u32::MAX)).collect::<Vec<_>>()
                },
                |keys| {
                    let mut list = SequenceList::new();
                    for key in keys {
                        list.insert_sorted(key);
                    }
                    list
                },
            );
        });
    }
    group.finish();
}

fn at_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("at");
    for size in SIZES {
        let list: SequenceList<usize> = (0..size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = rand::rng();
            b.iter(|| {
                let index = rng.random_range(0..size);
                black_box(list.at(index).ok());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    insert_last_benchmark,
    insert_sorted_benchmark,
    at_benchmark
);
criterion_main!(benches);
