//! Core data structures: validated game state, exported outcome fractions,
//! and the error taxonomy.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{MAX_DECK_SIZE, MIN_DECK_SIZE};

/// Everything that can go wrong in a computation run.
///
/// There is no partial-failure or retry concept: computation is pure and
/// deterministic, so every error is a precondition violation surfaced before
/// any table is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OddsError {
    /// `size` outside `[2, 13]`. A one-card deck has no uncertain deal, and
    /// above 13 cards the u64 exporter guarantee no longer holds.
    #[error("deck size {size} outside supported range 2..=13")]
    SizeOutOfRange { size: usize },

    /// `number_lower` outside `[0, size]` — more cards below the last dealt
    /// card than there are cards in the deck.
    #[error("number_lower {number_lower} outside 0..={size} for deck of {size}")]
    NumberLowerOutOfRange { number_lower: usize, size: usize },
}

/// Initial game state for one computation run.
///
/// - `size`: cards remaining in the deck
/// - `number_lower`: remaining cards ranked below the most recently dealt
///   card (0 when no card has been dealt yet)
///
/// The fields are private so that [`GameState::new`], which enforces the
/// preconditions, is the only way in; the tables assume them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    size: usize,
    number_lower: usize,
}

impl GameState {
    /// Validate and build a game state. Rejects `size` outside `[2, 13]` and
    /// `number_lower` outside `[0, size]` before any table is built.
    pub fn new(size: usize, number_lower: usize) -> Result<Self, OddsError> {
        if !(MIN_DECK_SIZE..=MAX_DECK_SIZE).contains(&size) {
            return Err(OddsError::SizeOutOfRange { size });
        }
        if number_lower > size {
            return Err(OddsError::NumberLowerOutOfRange { number_lower, size });
        }
        Ok(Self { size, number_lower })
    }

    /// Cards remaining in the deck.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Remaining cards ranked below the last dealt card.
    #[inline(always)]
    pub fn number_lower(&self) -> usize {
        self.number_lower
    }

    /// Remaining cards ranked above the last dealt card.
    #[inline(always)]
    pub fn number_higher(&self) -> usize {
        self.size - self.number_lower
    }
}

/// One exported outcome probability as a reduced fraction.
///
/// `numerator / denominator` is the probability the predictor is correct
/// through at least the corresponding stage. Both values divide `size!`, so
/// for `size <= 13` they fit a u64 with room to spare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub numerator: u64,
    pub denominator: u64,
}

impl Outcome {
    /// Decimal probability, for display and price conversion only — the
    /// exact form is the fraction.
    #[inline(always)]
    pub fn probability(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}
