//! Ordered-deal counts — the exact denominators.
//!
//! Index `i` holds the number of ordered ways to deal `i + 2` distinct cards
//! from the deck, built by one forward multiplicative recurrence. For
//! `size <= 13` every entry fits a u64 (the largest is `13!` ≈ 6.2e9).

/// Permutation counts for deals of length 2 through `size - 1`.
/// Strictly increasing, immutable once built.
pub struct PermutationTable {
    counts: Vec<u64>,
    size: usize,
}

impl PermutationTable {
    /// Build the table: `counts[0] = size * (size - 1)`,
    /// `counts[i] = counts[i - 1] * (size - i - 1)`.
    pub fn build(size: usize) -> Self {
        let len = size.saturating_sub(2);
        let mut counts = Vec::with_capacity(len);
        if len > 0 {
            counts.push((size * (size - 1)) as u64);
            for i in 1..len {
                let next = counts[i - 1] * (size - i - 1) as u64;
                counts.push(next);
            }
        }
        Self { counts, size }
    }

    /// Ordered ways to deal `index + 2` cards.
    #[inline(always)]
    pub fn deals(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// Ordered ways to deal `size - 1` cards — the full shuffle count.
    ///
    /// For a two-card deck the table is empty (no deal of length 2 to price
    /// separately) and the count is the deck size itself: 2 ways to deal 1
    /// card from 2.
    #[inline(always)]
    pub fn total_shuffles(&self) -> u64 {
        match self.counts.last() {
            Some(&count) => count,
            None => self.size as u64,
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_card_deck() {
        let table = PermutationTable::build(3);
        assert_eq!(table.len(), 1);
        assert_eq!(table.deals(0), 6);
        assert_eq!(table.total_shuffles(), 6);
    }

    #[test]
    fn test_full_deck() {
        let table = PermutationTable::build(13);
        assert_eq!(table.len(), 11);
        assert_eq!(table.deals(0), 13 * 12);
        assert_eq!(table.deals(1), 13 * 12 * 11);
        // Dealing 12 of 13 cards: 13!/1! = 13!.
        assert_eq!(table.total_shuffles(), 6_227_020_800);
    }

    #[test]
    fn test_degenerate_two_card_deck() {
        let table = PermutationTable::build(2);
        assert!(table.is_empty());
        assert_eq!(table.total_shuffles(), 2);
    }

    #[test]
    fn test_strictly_increasing() {
        let table = PermutationTable::build(13);
        for i in 1..table.len() {
            assert!(table.deals(i) > table.deals(i - 1));
        }
    }
}
