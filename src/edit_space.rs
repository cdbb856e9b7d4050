//! Lazy arena for the jagged diagonal table.
//!
//! The aligner fills one diagonal row per error level. Row `e` is indexed by
//! diagonal `d` in `[-(e+1), e+1]` and additionally takes sentinel writes one
//! cell beyond each end, so it spans `2e + 5` cells centered on `d = 0`.
//! Rows are packed back-to-back inside large blocks; a row, once handed out,
//! stays valid until the arena is dropped. Blocks only grow, so across
//! millions of alignments the allocator drops out of the profile after
//! warmup.
//!
//! Unsafe internals with a crate-private API: rows are raw center pointers so
//! the inner loop indexes diagonals directly, negative `d` included. Bounds
//! are debug-asserted; the aligner keeps `|d| <= e + 2` by construction.

use std::ptr;

pub struct EditSpace {
    /// Owned backing blocks. Boxed slices never move once pushed, so the row
    /// pointers below stay valid while new blocks are appended.
    blocks: Vec<Box<[i32]>>,
    /// Center pointer of each assigned row, null until assigned.
    rows: Vec<*mut i32>,
    /// First row index not yet assigned to a block.
    next_row: usize,
    /// Initial block size in cells; later blocks double until the first row
    /// they must hold fits.
    block_cells: usize,
}

impl EditSpace {
    pub fn new(e_max: usize, block_cells: usize) -> Self {
        assert!(block_cells > 0, "edit_space_size must be nonzero");
        EditSpace {
            blocks: Vec::new(),
            rows: vec![ptr::null_mut(); e_max + 1],
            next_row: 0,
            block_cells,
        }
    }

    /// Number of blocks allocated so far. Monotonically non-decreasing.
    pub fn blocks_allocated(&self) -> usize {
        self.blocks.len()
    }

    /// Number of rows with storage assigned.
    pub fn rows_assigned(&self) -> usize {
        self.next_row
    }

    /// Guarantee rows `0..=e` have storage. Rows are assigned in ascending
    /// order and never revoked.
    pub fn ensure(&mut self, e: usize) {
        assert!(
            e < self.rows.len(),
            "error level {} exceeds e_max {}",
            e,
            self.rows.len() - 1
        );
        while self.next_row <= e {
            self.allocate_block();
        }
    }

    /// Allocate one more block and greedily pack rows into it.
    ///
    /// Row `r` occupies `[center - (r+2), center + (r+2)]`; the first row in a
    /// block is centered at offset `2 + r`, putting its left edge at cell 0,
    /// and each following row advances the center by the previous span plus
    /// one pad cell.
    fn allocate_block(&mut self) {
        let first = self.next_row;

        let mut offset = 2 + first;
        let mut span = 6 + 2 * first;
        let mut size = self.block_cells;
        while size < offset + span {
            size *= 2;
        }

        let mut block = vec![0i32; size].into_boxed_slice();
        let base = block.as_mut_ptr();

        let mut row = first;
        while offset + span < size && row < self.rows.len() {
            self.rows[row] = unsafe { base.add(offset) };
            offset += span;
            span += 2;
            row += 1;
        }

        if row == first {
            log::error!(
                "edit space block of {} cells cannot hold even row {}",
                size,
                first
            );
            panic!("edit space block too small for row {}", first);
        }

        log::debug!(
            "allocate {} cells for edit space block {} (rows {}-{})",
            size,
            self.blocks.len(),
            first,
            row - 1
        );

        self.blocks.push(block);
        self.next_row = row;
    }

    /// Read the cell on row `e` at diagonal `d`.
    ///
    /// # Safety
    /// Row `e` must be assigned and `|d| <= e + 2`.
    #[inline(always)]
    pub(crate) unsafe fn get(&self, e: i32, d: i32) -> i32 {
        debug_assert!((e as usize) < self.next_row);
        debug_assert!((d.unsigned_abs() as usize) <= e as usize + 2);
        unsafe { *self.rows[e as usize].offset(d as isize) }
    }

    /// Write the cell on row `e` at diagonal `d`.
    ///
    /// # Safety
    /// Row `e` must be assigned and `|d| <= e + 2`.
    #[inline(always)]
    pub(crate) unsafe fn set(&mut self, e: i32, d: i32, value: i32) {
        debug_assert!((e as usize) < self.next_row);
        debug_assert!((d.unsigned_abs() as usize) <= e as usize + 2);
        unsafe { *self.rows[e as usize].offset(d as isize) = value }
    }
}
