use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqops::{Record, Sequence};

fn splice(c: &mut Criterion) {
    let numbers: Sequence<u32> = (0..1024).collect();

    c.bench_function("splice middle of 1024", |b| {
        b.iter(|| {
            let mut numbers = numbers.clone();
            black_box(numbers.splice(black_box(-512), Some(16), [1, 2, 3]))
        })
    });
}

fn slice(c: &mut Criterion) {
    let numbers: Sequence<u32> = (0..1024).collect();

    c.bench_function("slice last 100 of 1024", |b| {
        b.iter(|| black_box(&numbers).slice(Some(-100), None))
    });
}

fn record_lookup(c: &mut Criterion) {
    let record: Record<usize> = (0..256_usize).map(|n| (n, n)).collect();

    c.bench_function("record lookup by integer key", |b| {
        b.iter(|| black_box(&record).get(black_box(128)).copied())
    });
}

criterion_group!(benches, splice, slice, record_lookup);
criterion_main!(benches);
