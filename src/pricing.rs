//! Betting-price conversion: decimal probability, odds, and the tightest
//! profitable back/lay prices under commission.
//!
//! A back bet at price `o` on an outcome with probability `p` breaks even
//! when `p * (o - 1) * (1 - c) = 1 - p` with commission `c`; a lay bet when
//! `(1 - p) * (1 - c) = p * (o - 1)`. The tightest profitable price is the
//! break-even price rounded one tick toward profit. Prices are quoted in
//! ticks of 1/100.
//!
//! Everything here is presentation-side f64: the exact fractions come from
//! [`crate::probabilities`] and are not touched.

use std::fmt;

use serde::Serialize;

use crate::constants::{COMMISSION, TICKS_IN_UNIT};
use crate::types::Outcome;

/// Display row for one outcome: probability, odds, tightest back price,
/// tightest lay price.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PriceLine {
    pub probability: f64,
    pub odds: f64,
    pub back: f64,
    pub lay: f64,
}

impl fmt::Display for PriceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P: {:.3} -- O: {:.3} -- B: {:.2} -- L: {:.2}",
            self.probability, self.odds, self.back, self.lay
        )
    }
}

/// Lowest back price that still profits after commission: one tick above the
/// zero-payoff price, rounded down to the tick grid.
pub fn tightest_back_price(probability: f64) -> f64 {
    let kept = 1.0 - COMMISSION;
    let zero_payoff = (probability * kept + 1.0 - probability) / (probability * kept);
    let ticks = (zero_payoff * TICKS_IN_UNIT).floor();
    (ticks + 1.0) / TICKS_IN_UNIT
}

/// Highest lay price that still profits after commission: one tick below the
/// zero-payoff price, rounded up to the tick grid.
pub fn tightest_lay_price(probability: f64) -> f64 {
    let kept = 1.0 - COMMISSION;
    let zero_payoff = (kept - probability * kept + probability) / probability;
    let ticks = (zero_payoff * TICKS_IN_UNIT).ceil();
    (ticks - 1.0) / TICKS_IN_UNIT
}

/// Price an exact outcome fraction for display.
pub fn price_line(outcome: &Outcome) -> PriceLine {
    let probability = outcome.probability();
    PriceLine {
        probability,
        odds: outcome.denominator as f64 / outcome.numerator as f64,
        back: tightest_back_price(probability),
        lay: tightest_lay_price(probability),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_money() {
        // p = 1/2: break-even back at 2.0309.., lay at 1.97.
        assert_eq!(tightest_back_price(0.5), 2.04);
        assert_eq!(tightest_lay_price(0.5), 1.96);
    }

    #[test]
    fn test_certainty() {
        // p = 1: break-even at exactly 1.00 either way; one tick wider.
        assert_eq!(tightest_back_price(1.0), 1.01);
        assert_eq!(tightest_lay_price(1.0), 0.99);
    }

    #[test]
    fn test_back_always_above_lay() {
        for numerator in 1..=100u64 {
            let p = numerator as f64 / 100.0;
            assert!(
                tightest_back_price(p) > tightest_lay_price(p),
                "p={p}: back {} <= lay {}",
                tightest_back_price(p),
                tightest_lay_price(p)
            );
        }
    }

    #[test]
    fn test_display_format() {
        let line = price_line(&Outcome {
            numerator: 1,
            denominator: 2,
        });
        assert_eq!(line.to_string(), "P: 0.500 -- O: 2.000 -- B: 2.04 -- L: 1.96");
    }
}
