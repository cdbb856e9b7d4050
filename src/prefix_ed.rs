//! Banded prefix edit distance with branch-point fallback.
//!
//! The recurrence is the Landau-Vishkin diagonal formulation: cell `D[e][d]`
//! holds the greatest row `r` in `A` such that `A[0..r)` aligns against
//! `T[0..r+d)` with exactly `e` errors. Each level extends the three
//! predecessor diagonals, runs down exact matches, and checks whether either
//! string is exhausted. Diagonals whose row value falls below the per-level
//! match limit are pruned off the band; if the band empties, the best-scoring
//! partial alignment seen so far is reported as a branch point instead.

use crate::work_area::PedWorkArea;

/// Outcome of one banded prefix alignment.
///
/// `a_end` and `t_end` are exclusive ends of the aligned region. When
/// `match_to_end` is false, `errors` is the level at which the search stopped
/// (band collapse or budget exhausted), not the edit count of the reported
/// branch-point alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedAlignment {
    pub errors: i32,
    pub a_end: i32,
    pub t_end: i32,
    pub match_to_end: bool,
}

impl PedWorkArea {
    /// Minimum number of changes (inserts, deletes, replacements) needed to
    /// match `a` against a prefix of `t`, if it is not more than
    /// `error_limit`. Leaves the delta description of the alignment in the
    /// work area's delta buffer.
    ///
    /// When no alignment reaches the end of either string within budget, the
    /// highest-scoring partial alignment is returned with `match_to_end`
    /// false and its delta emitted; callers treat that as a branch point.
    pub fn prefix_edit_dist(&mut self, a: &[u8], t: &[u8], error_limit: i32) -> PedAlignment {
        let m = a.len() as i32;
        let n = t.len() as i32;

        assert!(error_limit >= 0, "negative error limit");
        assert!(
            (error_limit as usize) <= self.e_max,
            "error limit {} exceeds e_max {}",
            error_limit,
            self.e_max
        );

        self.delta.clear();

        let mut best_d = 0;
        let mut best_e = 0;
        let mut longest = 0;

        let shorter = m.min(n);

        let mut row = 0;
        while row < shorter && a[row as usize] == t[row as usize] {
            row += 1;
        }

        self.space.ensure(0);
        unsafe { self.space.set(0, 0, row) };

        if row == shorter {
            return PedAlignment {
                errors: 0,
                a_end: row,
                t_end: row,
                match_to_end: true,
            };
        }

        let mut left = 0;
        let mut right = 0;
        let mut max_score = 0.0f64;
        let mut max_score_len = 0;
        let mut max_score_best_d = 0;
        let mut max_score_best_e = 0;

        let mut e = 1;
        while e <= error_limit {
            self.space.ensure(e as usize);

            left = (left - 1).max(-e);
            right = (right + 1).min(e);

            // Boundary sentinels on the previous level. The inner loop reads
            // one diagonal beyond each end of the band, and these writes also
            // mask stale cells left by earlier invocations.
            unsafe {
                self.space.set(e - 1, left, -2);
                self.space.set(e - 1, left - 1, -2);
                self.space.set(e - 1, right, -2);
                self.space.set(e - 1, right + 1, -2);
            }

            let mut d = left;
            while d <= right {
                // Substitution, insertion into A, deletion from A.
                let mut row = unsafe {
                    (1 + self.space.get(e - 1, d))
                        .max(self.space.get(e - 1, d - 1))
                        .max(1 + self.space.get(e - 1, d + 1))
                };

                while row < m && row + d < n && a[row as usize] == t[(row + d) as usize] {
                    row += 1;
                }

                unsafe { self.space.set(e, d, row) };

                if row == m || row + d == n {
                    // Force the last error to be a mismatch rather than an
                    // insertion, keeping the delta canonical.
                    if row == m
                        && 1 + unsafe { self.space.get(e - 1, d + 1) }
                            == unsafe { self.space.get(e, d) }
                        && d < right
                    {
                        d += 1;
                        unsafe {
                            let copied = self.space.get(e, d - 1);
                            self.space.set(e, d, copied);
                        }
                    }

                    self.compute_delta(e, d, row);

                    return PedAlignment {
                        errors: e,
                        a_end: row,
                        t_end: row + d,
                        match_to_end: true,
                    };
                }

                d += 1;
            }

            // Prune diagonals that have fallen below the match limit. Left of
            // center the row value is the match count; at and right of center
            // the count is shifted by the column drift.
            let limit = self.tuning.edit_match_limit[e as usize];

            unsafe {
                while left <= right && left < 0 && self.space.get(e, left) < limit {
                    left += 1;
                }
                if left >= 0 {
                    while left <= right && self.space.get(e, left) + left < limit {
                        left += 1;
                    }
                }

                if left > right {
                    break;
                }

                while right > 0 && self.space.get(e, right) + right < limit {
                    right -= 1;
                }
                if right <= 0 {
                    while self.space.get(e, right) < limit {
                        right -= 1;
                    }
                }

                assert!(left <= right);
            }

            for d in left..=right {
                let cell = unsafe { self.space.get(e, d) };
                if cell > longest {
                    best_d = d;
                    best_e = e;
                    longest = cell;
                }
            }

            // Assumes branch_pt_match_value - branch_pt_error_value == 1.0,
            // validated at tuning construction.
            let score = longest as f64 * self.tuning.branch_pt_match_value - e as f64;

            if score > max_score {
                max_score = score;
                max_score_len = longest;
                max_score_best_d = best_d;
                max_score_best_e = best_e;
            }

            e += 1;
        }

        self.compute_delta(max_score_best_e, max_score_best_d, max_score_len);

        PedAlignment {
            errors: e,
            a_end: max_score_len,
            t_end: max_score_len + max_score_best_d,
            match_to_end: false,
        }
    }

    /// Reconstruct the delta script for the alignment ending at `(e, d, row)`.
    ///
    /// Walks the diagonal table backwards, pushing one signed run length per
    /// indel onto the stack (substitutions leave no entry; their columns stay
    /// inside the neighbouring runs). The stack is then read top-down, pairing
    /// each magnitude with the sign of the entry below it, which flips the
    /// script into forward order without any reallocation.
    fn compute_delta(&mut self, e: i32, d: i32, row: i32) {
        let mut d = d;
        let mut last = row;

        self.delta_stack.clear();

        let mut k = e;
        while k > 0 {
            let (from, max) = unsafe {
                let mut from = d;
                let mut max = 1 + self.space.get(k - 1, d);

                let j = self.space.get(k - 1, d - 1);
                if j > max {
                    from = d - 1;
                    max = j;
                }

                let j = 1 + self.space.get(k - 1, d + 1);
                if j > max {
                    from = d + 1;
                    max = j;
                }

                (from, max)
            };

            if from == d - 1 {
                self.delta_stack.push(max - last - 1);
                d -= 1;
                last = unsafe { self.space.get(k - 1, d) };
            } else if from == d + 1 {
                self.delta_stack.push(last - (max - 1));
                d += 1;
                last = unsafe { self.space.get(k - 1, d) };
            }

            k -= 1;
        }

        self.delta_stack.push(last + 1);

        self.delta.clear();
        for i in (1..self.delta_stack.len()).rev() {
            let run = self.delta_stack[i].unsigned_abs() as i32;
            self.delta.push(run * self.delta_stack[i - 1].signum());
        }
    }
}
