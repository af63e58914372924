//! Deck bounds, betting constants, and result-length helpers.

/// Smallest deck with an uncertain deal. Below this the permutation table is
/// empty and there is no stage to bet on.
pub const MIN_DECK_SIZE: usize = 2;

/// A single suit: Two through Ace. The u64 exporter guarantee (every
/// numerator and denominator divides 13!) depends on this cap.
pub const MAX_DECK_SIZE: usize = 13;

/// Exchange commission charged on net winnings.
pub const COMMISSION: f64 = 0.03;

/// Price ticks per unit: prices are quoted in hundredths.
pub const TICKS_IN_UNIT: f64 = 100.0;

/// Number of bettable outcomes for a deck of `size` cards.
///
/// The final card is uniquely determined by the previous deals, so only
/// `size - 1` deals carry an uncertain prediction.
#[inline(always)]
pub fn num_outcomes(size: usize) -> usize {
    size - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_outcomes() {
        assert_eq!(num_outcomes(2), 1);
        assert_eq!(num_outcomes(13), 12);
    }
}
