//! Criterion benchmarks for lane generation.
//!
//! Benchmarks:
//!   - describing one lane
//!   - describing and populating one lane (grass or road)
//!   - a forward hop's worth of lanes, encoded for transport
//!
//! Run with: cargo bench -p simulation --bench lane_gen_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::config::{LANES_PER_HOP, LANE_WIDTH};
use simulation::lanes::{LaneContentPlacer, LaneGenerator};
use simulation::sim_rng::SimRng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lane_generate");
    group.sample_size(1000);

    let Ok(generator) = LaneGenerator::new(LANE_WIDTH) else {
        return;
    };
    let mut rng = SimRng::from_seed_u64(42);
    let mut index = 0u64;

    group.bench_function("describe", |b| {
        b.iter(|| {
            index += 1;
            black_box(generator.generate(black_box(index), false, &mut rng))
        });
    });

    group.bench_function("describe_and_place", |b| {
        b.iter(|| {
            index += 1;
            let descriptor = generator.generate(index, false, &mut rng);
            black_box(LaneContentPlacer.place(&descriptor, &mut rng))
        });
    });

    group.finish();
}

fn bench_hop_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("lane_hop_batch");

    let Ok(generator) = LaneGenerator::new(LANE_WIDTH) else {
        return;
    };
    let mut rng = SimRng::from_seed_u64(7);
    let mut index = 0u64;

    group.bench_function("place_and_encode", |b| {
        b.iter(|| {
            let mut bytes = 0usize;
            for _ in 0..LANES_PER_HOP {
                index += 1;
                let descriptor = generator.generate(index, false, &mut rng);
                if let Ok(plan) = LaneContentPlacer.place(&descriptor, &mut rng) {
                    bytes += plan.encode().len();
                }
            }
            black_box(bytes)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_hop_batch);
criterion_main!(benches);
