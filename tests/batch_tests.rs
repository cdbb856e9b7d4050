// tests/batch_tests.rs
// The rayon batch driver must produce exactly what serial invocation does,
// in input order, with each worker reusing its own arena.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use overlap_ped::batch::{prefix_edit_dist_batch, PedJob};
use overlap_ped::tuning::PedTuning;
use overlap_ped::work_area::{PedConfig, PedWorkArea};

const BASES: [u8; 4] = *b"ACGT";

fn random_seq(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

#[test]
fn batch_results_match_serial_invocation() {
    let mut rng = StdRng::seed_from_u64(0xBA7C);
    let e_max = 32;
    let tuning = Arc::new(PedTuning::permissive(e_max));
    let config = PedConfig {
        edit_space_size: 1 << 16,
        e_max,
    };

    let mut pairs = Vec::new();
    for _ in 0..128 {
        let a_len = rng.gen_range(10..200);
        let a = random_seq(&mut rng, a_len);
        let mut t = a.clone();
        // Sprinkle a few substitutions so some jobs need real work.
        for _ in 0..rng.gen_range(0..4) {
            let pos = rng.gen_range(0..t.len());
            t[pos] = BASES[rng.gen_range(0..4)];
        }
        t.extend(random_seq(&mut rng, 20));
        pairs.push((a, t));
    }

    let jobs: Vec<PedJob<'_>> = pairs
        .iter()
        .map(|(a, t)| PedJob {
            a,
            t,
            error_limit: 8,
        })
        .collect();

    let parallel = prefix_edit_dist_batch(&jobs, &tuning, &config);
    assert_eq!(parallel.len(), jobs.len());

    let mut wa = PedWorkArea::new(Arc::clone(&tuning), &config);
    for (job, result) in jobs.iter().zip(&parallel) {
        let serial = wa.prefix_edit_dist(job.a, job.t, job.error_limit);
        assert_eq!(result.alignment, serial);
        assert_eq!(result.delta, wa.delta());
    }
}
