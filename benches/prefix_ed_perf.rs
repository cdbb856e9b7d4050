// benches/prefix_ed_perf.rs
// Criterion benchmarks for the prefix edit distance kernel across overlap
// lengths and divergence levels.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use overlap_ped::tuning::PedTuning;
use overlap_ped::work_area::{PedConfig, PedWorkArea};

const BASES: [u8; 4] = *b"ACGT";

fn make_pair(rng: &mut StdRng, len: usize, substitutions: usize) -> (Vec<u8>, Vec<u8>) {
    let a: Vec<u8> = (0..len).map(|_| BASES[rng.gen_range(0..4)]).collect();
    let mut t = a.clone();
    for _ in 0..substitutions {
        let pos = rng.gen_range(0..t.len());
        let old = t[pos];
        let mut new = BASES[rng.gen_range(0..4)];
        while new == old {
            new = BASES[rng.gen_range(0..4)];
        }
        t[pos] = new;
    }
    t.extend((0..100).map(|_| BASES[rng.gen_range(0..4)]));
    (a, t)
}

fn bench_prefix_ed(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_edit_dist");

    let e_max = 512;
    let tuning = Arc::new(PedTuning::permissive(e_max));
    let config = PedConfig {
        edit_space_size: 1 << 20,
        e_max,
    };

    for &(len, subs) in &[(1_000usize, 10usize), (10_000, 40), (10_000, 160)] {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ len as u64);
        let (a, t) = make_pair(&mut rng, len, subs);
        let budget = (subs * 2) as i32;

        let mut wa = PedWorkArea::new(Arc::clone(&tuning), &config);
        // Warm the arena so the measurement sees steady-state reuse.
        wa.prefix_edit_dist(&a, &t, budget);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("len{}_subs{}", len, subs), |b| {
            b.iter(|| black_box(wa.prefix_edit_dist(black_box(&a), black_box(&t), budget)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prefix_ed);
criterion_main!(benches);
