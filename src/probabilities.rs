//! Exact outcome probabilities from path counts and permutation counts.
//!
//! The outcomes priced by the exchange are "correct through stage n or
//! further". Those are derived from a set of *independent* events: "correct
//! through stage n, wrong at stage n + 1" for each intermediate stage, plus
//! "correct through the last uncertain stage". [`stage_probabilities`]
//! computes the independent fractions; [`accumulate`] folds them backward
//! into the cumulative survival probabilities, so entry `n` ends up as the
//! probability the predictor's first `n + 1` predictions are all correct.
//!
//! All arithmetic is exact: `Ratio<u64>` with automatic reduction. For
//! `size <= 13` every denominator divides `13!`, so no intermediate of a
//! rational addition can overflow u64.

use num_rational::Ratio;
use num_traits::Zero;

use crate::constants::num_outcomes;
use crate::path_counts::PathMatrix;
use crate::permutations::PermutationTable;
use crate::types::{GameState, OddsError, Outcome};

/// Exact probability: a reduced u64 fraction.
pub type Probability = Ratio<u64>;

/// Compute the full outcome vector for an initial `(size, number_lower)`
/// state: `size - 1` reduced fractions ordered from the nearest future stage
/// to the farthest, each the probability the predictor is correct through at
/// least that stage.
///
/// Rejects `size` outside `[2, 13]` and `number_lower` outside `[0, size]`
/// before building any table.
pub fn compute_probabilities(
    size: usize,
    number_lower: usize,
) -> Result<Vec<Outcome>, OddsError> {
    let state = GameState::new(size, number_lower)?;
    let matrix = PathMatrix::build(&state);
    let permutations = PermutationTable::build(state.size());

    let mut probabilities = stage_probabilities(&matrix, &permutations, state.size());
    accumulate(&mut probabilities);
    Ok(export(&probabilities))
}

/// Remaining cards that would make the *next* prediction wrong, given the
/// deck size and lower-count after the current deal. The predictor always
/// calls the majority side, so the failing cards are the minority side.
#[inline(always)]
pub fn failing_cards(cards_left: usize, number_lower: usize) -> u64 {
    let number_higher = cards_left - number_lower - 1;
    if number_higher >= number_lower {
        number_lower as u64
    } else {
        number_higher as u64
    }
}

/// The independent per-stage fractions.
///
/// Entry `n < size - 2`: probability of being correct through stage `n` and
/// wrong at stage `n + 1` — path counts weighted by [`failing_cards`], over
/// the ordered deals of `n + 2` cards. The last entry is the probability of
/// being correct through the final uncertain stage: after that deal only two
/// lower-counts are possible (0 or 1), summed over the full shuffle count.
pub fn stage_probabilities(
    matrix: &PathMatrix,
    permutations: &PermutationTable,
    size: usize,
) -> Vec<Probability> {
    let mut probabilities = Vec::with_capacity(num_outcomes(size));

    for n in 0..size - 2 {
        let cards_left = size - n;
        let failing_deals: u64 = matrix
            .row(n)
            .iter()
            .enumerate()
            .map(|(lower, &paths)| paths * failing_cards(cards_left, lower))
            .sum();
        probabilities.push(Ratio::new(failing_deals, permutations.deals(n)));
    }

    let last_row = matrix.row(size - 2);
    let survivors = last_row[0] + last_row[1];
    probabilities.push(Ratio::new(survivors, permutations.total_shuffles()));

    probabilities
}

/// Backward accumulation: rewrite each entry in place to its original value
/// plus the sum of all later entries' original values. "Fails exactly at
/// stage n + 1" mass becomes "correct through stage n or further" survival
/// probability; the last entry is left as computed.
pub fn accumulate(probabilities: &mut [Probability]) {
    let mut tail = Probability::zero();
    for probability in probabilities.iter_mut().rev() {
        let original = *probability;
        *probability += tail;
        tail += original;
    }
}

/// Unzip the reduced fractions into `(numerator, denominator)` pairs.
/// `Ratio<u64>` keeps itself in lowest terms, so this is a plain extraction;
/// the deck-size cap guarantees the values fit.
fn export(probabilities: &[Probability]) -> Vec<Outcome> {
    probabilities
        .iter()
        .map(|p| Outcome {
            numerator: *p.numer(),
            denominator: *p.denom(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(size: usize, number_lower: usize) -> (PathMatrix, PermutationTable) {
        let state = GameState::new(size, number_lower).unwrap();
        (PathMatrix::build(&state), PermutationTable::build(size))
    }

    #[test]
    fn test_failing_cards() {
        // 3 cards left, 1 lower: two higher, minority is the lower side.
        assert_eq!(failing_cards(3, 1), 1);
        assert_eq!(failing_cards(3, 0), 0);
        assert_eq!(failing_cards(3, 2), 0);
        assert_eq!(failing_cards(13, 6), 6);
        assert_eq!(failing_cards(13, 7), 5);
    }

    #[test]
    fn test_worked_scenario_stage_fractions() {
        // size = 3, number_lower = 1: fail-at-stage-1 is 1/6, final is 1/2.
        let (matrix, permutations) = setup(3, 1);
        let probabilities = stage_probabilities(&matrix, &permutations, 3);
        assert_eq!(probabilities, vec![Ratio::new(1, 6), Ratio::new(1, 2)]);
    }

    #[test]
    fn test_worked_scenario_outcomes() {
        let outcomes = compute_probabilities(3, 1).unwrap();
        assert_eq!(
            outcomes,
            vec![
                Outcome {
                    numerator: 2,
                    denominator: 3
                },
                Outcome {
                    numerator: 1,
                    denominator: 2
                },
            ]
        );
    }

    #[test]
    fn test_accumulate() {
        let mut probabilities = vec![
            Ratio::new(1u64, 6),
            Ratio::new(1u64, 12),
            Ratio::new(1u64, 4),
        ];
        accumulate(&mut probabilities);
        assert_eq!(
            probabilities,
            vec![Ratio::new(1, 2), Ratio::new(1, 3), Ratio::new(1, 4)]
        );
    }

    #[test]
    fn test_three_card_deck_no_card_played() {
        // First prediction is always correct when nothing has been dealt.
        let outcomes = compute_probabilities(3, 0).unwrap();
        assert_eq!(
            outcomes,
            vec![
                Outcome {
                    numerator: 1,
                    denominator: 1
                },
                Outcome {
                    numerator: 5,
                    denominator: 6
                },
            ]
        );
    }

    #[test]
    fn test_symmetric_initial_states_match() {
        // A state with `lower` cards below mirrors one with `lower` above.
        for size in 2..=13 {
            for lower in 0..=size {
                assert_eq!(
                    compute_probabilities(size, lower).unwrap(),
                    compute_probabilities(size, size - lower).unwrap(),
                    "size={size} lower={lower}"
                );
            }
        }
    }

    #[test]
    fn test_two_card_deck() {
        // Both cards higher: "higher" call always confirmed.
        assert_eq!(
            compute_probabilities(2, 0).unwrap(),
            vec![Outcome {
                numerator: 1,
                denominator: 1
            }]
        );
        // One either side: coin flip.
        assert_eq!(
            compute_probabilities(2, 1).unwrap(),
            vec![Outcome {
                numerator: 1,
                denominator: 2
            }]
        );
        assert_eq!(
            compute_probabilities(2, 2).unwrap(),
            vec![Outcome {
                numerator: 1,
                denominator: 1
            }]
        );
    }

    #[test]
    fn test_full_deck_first_outcome_certain() {
        let outcomes = compute_probabilities(13, 0).unwrap();
        assert_eq!(outcomes.len(), 12);
        assert_eq!(
            outcomes[0],
            Outcome {
                numerator: 1,
                denominator: 1
            }
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert_eq!(
            compute_probabilities(1, 0),
            Err(OddsError::SizeOutOfRange { size: 1 })
        );
        assert_eq!(
            compute_probabilities(13, 14),
            Err(OddsError::NumberLowerOutOfRange {
                number_lower: 14,
                size: 13
            })
        );
    }
}
