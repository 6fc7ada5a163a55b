use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use keyseq::{Array, aperture, drop_last, scan_right, take_last, Value};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn windows(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let ints: Vec<i64> = std::iter::repeat_with(|| rng.random_range(-10_000..=10_000))
        .take(100_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &ints[..10]);

    let nums = Array::from_values(ints);

    let mut group = criterion.benchmark_group("windows");

    for size in [2, 16] {
        group.bench_function(format!("aperture_{size}"), |bencher| {
            bencher.iter(|| aperture(black_box(&nums), size).map(Iterator::count));
        });
    }

    group.bench_function("drop_last_100", |bencher| {
        bencher.iter(|| drop_last(black_box(&nums), 100).count());
    });

    group.bench_function("take_last_100", |bencher| {
        bencher.iter(|| take_last(black_box(&nums), 100).count());
    });

    // Buffers everything, for comparison with the bounded windows above.
    group.bench_function("scan_right", |bencher| {
        bencher.iter(|| scan_right(black_box(&nums), add, 0).count());
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = windows
}
criterion_main!(benches);

fn add(acc: Value, value: &Value) -> Value {
    Value::from(acc.as_int().unwrap_or(0).wrapping_add(value.as_int().unwrap_or(0)))
}
