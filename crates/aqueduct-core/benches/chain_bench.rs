//! Criterion benchmarks for the aqueduct simulation core.
//!
//! Two benchmark groups:
//! - `chain_macro_step`: one full staging+commit pass over chains of 10k and
//!   100k nodes -- cost should scale linearly with the edge count.
//! - `chain_build`: arena construction for the same chain sizes.

use aqueduct_core::material::MaterialRegistry;
use aqueduct_core::network::MACRO_STEP_INTERVAL;
use aqueduct_core::test_utils::build_chain;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_macro_step(c: &mut Criterion) {
    let materials = MaterialRegistry::with_defaults();

    for n in [10_000usize, 100_000] {
        let mut network = build_chain(&materials, n);
        c.bench_function(&format!("chain_{n}_macro_step"), |b| {
            b.iter(|| {
                for _ in 0..MACRO_STEP_INTERVAL {
                    network.tick(&materials);
                }
            });
        });
    }
}

fn bench_build(c: &mut Criterion) {
    let materials = MaterialRegistry::with_defaults();

    for n in [10_000usize, 100_000] {
        c.bench_function(&format!("chain_{n}_build"), |b| {
            b.iter(|| build_chain(&materials, n));
        });
    }
}

criterion_group!(benches, bench_macro_step, bench_build);
criterion_main!(benches);
