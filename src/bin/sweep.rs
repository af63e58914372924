//! Full-grid sweep: every initial `(size, number_lower)` state, in parallel.
//!
//! Emits one JSON line per state with the exact fractions and the priced
//! outcomes, sizes 2 through 13. Queries share nothing, so the grid maps
//! cleanly over a rayon pool.

use rayon::prelude::*;
use serde::Serialize;

use hilo::constants::{MAX_DECK_SIZE, MIN_DECK_SIZE};
use hilo::pricing::{price_line, PriceLine};
use hilo::probabilities::compute_probabilities;
use hilo::types::Outcome;

#[derive(Serialize)]
struct SweepRow {
    size: usize,
    number_lower: usize,
    outcomes: Vec<Outcome>,
    prices: Vec<PriceLine>,
}

fn main() {
    let states: Vec<(usize, usize)> = (MIN_DECK_SIZE..=MAX_DECK_SIZE)
        .flat_map(|size| (0..=size).map(move |lower| (size, lower)))
        .collect();
    eprintln!("Sweeping {} initial states", states.len());

    let rows: Vec<SweepRow> = states
        .par_iter()
        .map(|&(size, number_lower)| {
            // Inputs come from the grid above, so this cannot fail.
            let outcomes = compute_probabilities(size, number_lower)
                .unwrap_or_else(|e| panic!("state ({size}, {number_lower}): {e}"));
            let prices = outcomes.iter().map(price_line).collect();
            SweepRow {
                size,
                number_lower,
                outcomes,
                prices,
            }
        })
        .collect();

    for row in &rows {
        match serde_json::to_string(row) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Serialization failed: {e}");
                std::process::exit(1);
            }
        }
    }
}
