//! Interactive betting guide.
//!
//! Reads `size number_lower` pairs (whitespace-separated integers) from
//! stdin and answers each pair as soon as it is complete — no waiting for
//! end of input. For each pair, prints one price line per remaining
//! outcome, nearest stage first:
//!
//! ```text
//! P: 0.667 -- O: 1.500 -- B: 1.52 -- L: 1.48
//! ```

use std::io;

use hilo::pricing::price_line;
use hilo::probabilities::compute_probabilities;
use hilo::queries::QueryReader;

fn print_usage() {
    println!("Usage: guide");
    println!();
    println!("Reads \"size number_lower\" pairs from stdin and prints, for each");
    println!("remaining outcome, its probability, odds, and tightest profitable");
    println!("back/lay prices. Each pair is answered as soon as it is read.");
    println!();
    println!("  size          cards remaining in the deck (2-13)");
    println!("  number_lower  remaining cards below the last dealt card");
}

fn main() {
    if std::env::args().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let stdin = io::stdin();
    for query in QueryReader::new(stdin.lock()) {
        match query {
            Ok((size, number_lower)) => match compute_probabilities(size, number_lower) {
                Ok(outcomes) => {
                    for outcome in &outcomes {
                        println!("{}", price_line(outcome));
                    }
                }
                Err(e) => eprintln!("{e}"),
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
