//! Prediction-consistent path counting — the triangular DP table.
//!
//! `PathMatrix` entry `[stage][lower]` counts the ways to deal `stage + 1`
//! cards from the initial state such that the majority-rule predictor was
//! correct at every one of those deals, ending with `lower` remaining cards
//! ranked below the last dealt card. Row `stage` is fully determined by row
//! `stage - 1`, so the whole table is built in one sequential forward pass.
//!
//! ## The recurrence
//!
//! A state in row `stage` is reached from a previous-stage state either by a
//! deal that confirmed a "higher" prediction or one that confirmed a "lower"
//! prediction. With `before = size - stage` cards in the deck just before the
//! deal and `limit = ceil(before / 2)`, the previous row splits at two cut
//! points `k` and `l`: indices `< k` reach the target via a
//! higher-predicted, higher-confirming deal, indices `>= l` via a
//! lower-predicted, lower-confirming deal, and each contributing state has
//! exactly one card that lands on the target. The cut points depend on the
//! parity of `before` and a three-way comparison of the target against
//! `limit` — see [`cut_points`]. This case split is the one piece of logic
//! where an off-by-one slips in unnoticed, which is why it lives in a pure
//! function and is checked against brute-force permutation enumeration in
//! `tests/test_brute_force.rs`.

use crate::types::GameState;

/// Triangular table of prediction-consistent path counts.
///
/// Row `stage` (0..size-1) has `size - stage` entries, indexed by the
/// lower-count after the deal at that stage. Built once, never mutated,
/// exclusively owned by a single computation run.
pub struct PathMatrix {
    rows: Vec<Vec<u64>>,
}

impl PathMatrix {
    /// Build the full table for an initial state: seed row 0 from the
    /// prediction rule, then apply the recurrence row by row.
    pub fn build(state: &GameState) -> Self {
        let size = state.size();
        let mut rows = Vec::with_capacity(size - 1);
        rows.push(first_stage_row(state));

        for stage in 1..size - 1 {
            // Cards in the deck just before the deal at this stage.
            let before = size - stage;
            let mut row = vec![0u64; size - stage];
            for (target, entry) in row.iter_mut().enumerate() {
                *entry = paths_leading_to(&rows[stage - 1], before, target);
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// Path counts for one stage, indexed by lower-count.
    #[inline(always)]
    pub fn row(&self, stage: usize) -> &[u64] {
        &self.rows[stage]
    }

    /// Number of stages in the table (`size - 1`).
    #[inline(always)]
    pub fn num_stages(&self) -> usize {
        self.rows.len()
    }
}

/// Seed row 0 directly from the prediction rule.
///
/// With `number_higher = size - number_lower` cards above the last dealt
/// card, the predictor calls "higher" iff `number_higher >= number_lower`.
/// Exactly one card choice produces each post-deal lower-count `i`, so
/// entries are 1 where the deal confirms the call and 0 elsewhere:
/// `number_lower <= i <= size - 1` for a "higher" call,
/// `0 <= i <= number_lower - 1` for a "lower" call.
fn first_stage_row(state: &GameState) -> Vec<u64> {
    let size = state.size();
    let mut row = vec![0u64; size];

    let (from, to) = if state.number_higher() >= state.number_lower() {
        (state.number_lower(), size)
    } else {
        (0, state.number_lower())
    };
    for entry in &mut row[from..to] {
        *entry = 1;
    }
    row
}

/// Cut points `(k, l)` splitting the previous row into the states that reach
/// lower-count `target` via a confirmed "higher" call (indices `< k`) and
/// via a confirmed "lower" call (indices `>= l`).
///
/// `before` is the deck size just before the deal, `limit = ceil(before / 2)`
/// the majority threshold of the prediction rule. The split depends on the
/// parity of `before`: with an odd deck the state at exactly `limit` lower
/// cards sits on the prediction boundary and moves between the two ranges.
#[inline]
pub fn cut_points(before: usize, limit: usize, target: usize) -> (usize, usize) {
    if before % 2 == 0 {
        if target <= limit {
            (target + 1, limit + 1)
        } else {
            (limit + 1, target + 1)
        }
    } else if target < limit {
        (target + 1, limit)
    } else if target == limit {
        (limit, limit + 1)
    } else {
        (limit, target + 1)
    }
}

/// Sum the previous row over `[0, k)` and `[l, before]` — the number of
/// prediction-consistent paths arriving at lower-count `target`.
fn paths_leading_to(previous: &[u64], before: usize, target: usize) -> u64 {
    debug_assert_eq!(previous.len(), before + 1, "previous row length mismatch");
    let limit = before.div_ceil(2);
    let (k, l) = cut_points(before, limit, target);

    let via_higher: u64 = previous[..k].iter().sum();
    let via_lower: u64 = previous[l..].iter().sum();
    via_higher + via_lower
}
