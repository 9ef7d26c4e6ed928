use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use millibel::fixed::{db_to_linear, linear_to_db, MAX_POWER_MB};

fn conversions(c: &mut Criterion) {
    c.bench_function("linear_to_db", |b| {
        let mut v: u64 = 3;
        b.iter(|| {
            v = v.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            black_box(linear_to_db(black_box(v)))
        })
    });

    c.bench_function("db_to_linear", |b| {
        let mut mb: u32 = 1;
        b.iter(|| {
            mb = mb.wrapping_mul(747_796_405).wrapping_add(2_891_336_453) % MAX_POWER_MB;
            black_box(db_to_linear(black_box(mb)))
        })
    });
}

criterion_group!(benches, conversions);
criterion_main!(benches);
