use std::{collections::HashMap, hint::black_box, time::Duration};

use chainmap::HashTable;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn filled_table(n: usize) -> HashTable {
    let mut t = HashTable::new(16, 0.75).unwrap();
    for i in 0..n as i64 {
        t.insert(i, i.to_string());
    }
    t
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/insert");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("chainmap", n), &n, |b, &n| {
            b.iter(|| {
                let mut t = HashTable::new(16, 0.75).unwrap();
                for i in 0..n as i64 {
                    t.insert(black_box(i), i.to_string());
                }
                black_box(t)
            });
        });

        // std::HashMap как точка отсчёта.
        group.bench_with_input(BenchmarkId::new("std_hashmap", n), &n, |b, &n| {
            b.iter(|| {
                let mut m = HashMap::new();
                for i in 0..n as i64 {
                    m.insert(black_box(i), i.to_string());
                }
                black_box(m)
            });
        });
    }

    group.finish();
}

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/get_hit");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        let base = filled_table(n);
        let mut keys: Vec<i64> = (0..n as i64).collect();
        keys.shuffle(&mut SmallRng::seed_from_u64(42));

        group.bench_with_input(BenchmarkId::new("shuffled_keys", n), &n, |b, &_n| {
            b.iter(|| {
                for &k in &keys {
                    black_box(base.get(black_box(k)));
                }
            });
        });
    }

    group.finish();
}

fn bench_get_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/get_miss");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        let base = filled_table(n);
        let mut rng = SmallRng::seed_from_u64(7);
        let keys: Vec<i64> = (0..n).map(|_| rng.gen_range(n as i64..2 * n as i64)).collect();

        group.bench_with_input(BenchmarkId::new("absent_keys", n), &n, |b, &_n| {
            b.iter(|| {
                for &k in &keys {
                    black_box(base.get(black_box(k)));
                }
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/remove");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(50);

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        let base = filled_table(n);

        group.bench_with_input(BenchmarkId::new("all_keys", n), &n, |b, &n| {
            b.iter_batched(
                || base.clone(),
                |mut t| {
                    for i in 0..n as i64 {
                        black_box(t.remove(black_box(i)));
                    }
                    black_box(t)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get_hit,
    bench_get_miss,
    bench_remove
);
criterion_main!(benches);
