//! Per-thread scratch for the prefix edit distance kernel.
//!
//! A `PedWorkArea` owns everything one alignment invocation touches: the
//! diagonal arena, the delta stack and delta script buffers, and a shared
//! reference to the tuning block. It is built once per worker thread and
//! reused across reads; nothing in it is shared between threads.

use std::sync::Arc;

use crate::edit_space::EditSpace;
use crate::tuning::PedTuning;

/// Construction-time options for a work area.
#[derive(Debug, Clone)]
pub struct PedConfig {
    /// Initial arena block size, in cells.
    pub edit_space_size: usize,
    /// Highest error level any invocation may request. Sizes the row pointer
    /// vector and the delta buffers.
    pub e_max: usize,
}

impl Default for PedConfig {
    fn default() -> Self {
        PedConfig {
            edit_space_size: 16 * 1024 * 1024,
            e_max: 1000,
        }
    }
}

/// Reusable per-thread state. Previously written diagonal cells survive
/// between invocations; the aligner re-seeds `D[0][0]` and the boundary
/// sentinels it reads, so stale cells are never observed.
pub struct PedWorkArea {
    pub(crate) space: EditSpace,
    pub(crate) tuning: Arc<PedTuning>,
    pub(crate) delta_stack: Vec<i32>,
    pub(crate) delta: Vec<i32>,
    pub(crate) e_max: usize,
}

impl PedWorkArea {
    pub fn new(tuning: Arc<PedTuning>, config: &PedConfig) -> Self {
        assert!(
            tuning.edit_match_limit.len() > config.e_max,
            "edit_match_limit covers {} levels but e_max is {}",
            tuning.edit_match_limit.len(),
            config.e_max
        );
        PedWorkArea {
            space: EditSpace::new(config.e_max, config.edit_space_size),
            delta_stack: Vec::with_capacity(config.e_max + 2),
            delta: Vec::with_capacity(config.e_max + 2),
            tuning,
            e_max: config.e_max,
        }
    }

    /// Edit script of the most recent alignment, in forward order.
    #[inline]
    pub fn delta(&self) -> &[i32] {
        &self.delta
    }

    pub fn tuning(&self) -> &PedTuning {
        &self.tuning
    }

    /// Arena blocks allocated so far; never decreases across invocations.
    pub fn blocks_allocated(&self) -> usize {
        self.space.blocks_allocated()
    }
}
