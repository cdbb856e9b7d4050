//! Branch-point scoring tuning.
//!
//! The aligner consults a small read-only block of tuning values: the
//! per-error-level match limits that prune the diagonal band, and the two
//! weights behind the branch-point score. One `PedTuning` is built up front
//! and shared (read-only) by every work area.

/// Log-odds weight of an aligned match column at the branch cutoff.
pub const DEFAULT_BRANCH_PT_MATCH_VALUE: f64 = 0.272229;

/// Log-odds weight of an error column. Must sit exactly 1.0 below the match
/// weight so the branch score reduces to `longest * match_value - e`.
pub const DEFAULT_BRANCH_PT_ERROR_VALUE: f64 = -0.727771;

/// Read-only tuning shared across work areas.
#[derive(Debug, Clone)]
pub struct PedTuning {
    /// Minimum row value a surviving diagonal must reach at error level `e`.
    /// Indexed by `e`; must cover `0..=e_max` of every work area using it.
    pub edit_match_limit: Vec<i32>,
    pub branch_pt_match_value: f64,
    pub branch_pt_error_value: f64,
}

impl PedTuning {
    /// Build a tuning block, validating the weight invariant the scoring
    /// shortcut depends on: `match_value - error_value == 1.0`.
    pub fn new(edit_match_limit: Vec<i32>, match_value: f64, error_value: f64) -> Self {
        assert!(
            (match_value - error_value - 1.0).abs() < 1e-9,
            "branch point weights must differ by exactly 1.0 (match {} error {})",
            match_value,
            error_value
        );
        assert!(match_value > 0.0, "branch point match value must be positive");
        PedTuning {
            edit_match_limit,
            branch_pt_match_value: match_value,
            branch_pt_error_value: error_value,
        }
    }

    /// No band pruning: every diagonal survives until the error budget is
    /// spent, turning the search into plain Landau-Vishkin.
    pub fn permissive(e_max: usize) -> Self {
        Self::new(
            vec![0; e_max + 1],
            DEFAULT_BRANCH_PT_MATCH_VALUE,
            DEFAULT_BRANCH_PT_ERROR_VALUE,
        )
    }

    /// Linear ramp: a diagonal at error level `e` must have matched at least
    /// `matches_per_error * e` rows to stay in the band. A slope around
    /// `1 / expected_error_rate` keeps plausible overlaps and prunes noise.
    pub fn linear(e_max: usize, matches_per_error: i32) -> Self {
        let limits = (0..=e_max as i32).map(|e| e * matches_per_error).collect();
        Self::new(
            limits,
            DEFAULT_BRANCH_PT_MATCH_VALUE,
            DEFAULT_BRANCH_PT_ERROR_VALUE,
        )
    }
}
