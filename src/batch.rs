//! Parallel fan-out over many alignment jobs.
//!
//! The kernel is single-threaded per work area; throughput comes from one
//! work area per worker thread, nothing shared but the read-only tuning
//! block. `map_init` hands each rayon worker its own `PedWorkArea`, which is
//! then reused across every job that worker picks up, so arena warmup is paid
//! once per thread rather than once per job.

use rayon::prelude::*;
use std::sync::Arc;

use crate::prefix_ed::PedAlignment;
use crate::tuning::PedTuning;
use crate::work_area::{PedConfig, PedWorkArea};

/// One alignment request: match `a` against a prefix of `t` within
/// `error_limit` edits.
#[derive(Debug, Clone, Copy)]
pub struct PedJob<'a> {
    pub a: &'a [u8],
    pub t: &'a [u8],
    pub error_limit: i32,
}

/// Alignment outcome plus its edit script, detached from the work area.
#[derive(Debug, Clone)]
pub struct PedResult {
    pub alignment: PedAlignment,
    pub delta: Vec<i32>,
}

/// Align every job, in input order.
pub fn prefix_edit_dist_batch(
    jobs: &[PedJob<'_>],
    tuning: &Arc<PedTuning>,
    config: &PedConfig,
) -> Vec<PedResult> {
    jobs.par_iter()
        .map_init(
            || PedWorkArea::new(Arc::clone(tuning), config),
            |wa, job| {
                let alignment = wa.prefix_edit_dist(job.a, job.t, job.error_limit);
                PedResult {
                    alignment,
                    delta: wa.delta().to_vec(),
                }
            },
        )
        .collect()
}
