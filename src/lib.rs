//! # Hi-Lo — exact survival odds for the Exchange Hi-Lo predictor
//!
//! Computes the exact probability that the dealer's fixed majority-rule
//! predictor stays correct through each remaining stage of an Exchange Hi-Lo
//! game, for a shuffled deck of up to 13 ranked cards dealt without
//! replacement. All probabilities are reduced fractions — the results feed
//! betting-price calculations where floating-point rounding would distort
//! profitability thresholds.
//!
//! ## Algorithm overview
//!
//! The naive state space is 13! shuffles. The key reduction: at any point,
//! `(stage, number_lower)` — how many deals have happened and how many
//! remaining cards rank below the last dealt card — is a sufficient statistic
//! for all future predictor behaviour. That collapses the problem to an O(n²)
//! triangular table.
//!
//! | Phase | Rust module | Description |
//! |-------|-------------|-------------|
//! | 1 | [`path_counts`] | Triangular DP table: prediction-consistent deal counts per `(stage, lower)` state |
//! | 2 | [`permutations`] | Ordered-deal counts — the exact denominators |
//! | 3 | [`probabilities`] | Per-stage fail fractions, final-stage fraction, backward accumulation into cumulative survival probabilities |
//!
//! The entry point is
//! [`probabilities::compute_probabilities`]`(size, number_lower)`, which
//! returns `size - 1` reduced [`types::Outcome`] fractions ordered from the
//! nearest future stage to the farthest.
//!
//! ## State representation
//!
//! An initial state is `(size, number_lower)` where:
//! - `size` ∈ [2, 13]: cards remaining in the deck
//! - `number_lower` ∈ [0, size]: remaining cards ranked below the last dealt
//!   card (0 when no card has been dealt yet)
//!
//! Each query owns its own table, permutation vector, and probability vector;
//! nothing is shared or mutated across queries, so independent queries can be
//! run in parallel freely (the `sweep` binary does exactly that).

pub mod constants;
pub mod path_counts;
pub mod permutations;
pub mod pricing;
pub mod probabilities;
pub mod queries;
pub mod types;
