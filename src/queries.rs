//! Line-oriented query stream: `size number_lower` pairs parsed
//! incrementally from a reader.
//!
//! [`QueryReader`] yields a pair as soon as both of its tokens have arrived,
//! reading at most one more line from the underlying reader per call — it
//! never waits for end of input. That keeps the betting guide live: a user
//! typing queries at a terminal gets each answer immediately. Pairs may span
//! lines and lines may carry several pairs; tokens are whitespace-separated.

use std::collections::VecDeque;
use std::io::BufRead;

use thiserror::Error;

/// A malformed or truncated query stream.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A token that does not parse as a non-negative integer.
    #[error("invalid token {token:?}: expected an integer")]
    InvalidToken { token: String },

    /// The stream ended with a `size` still waiting for its `number_lower`.
    #[error("trailing input: size {size} without a number_lower")]
    MissingNumberLower { size: usize },

    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Incremental iterator over `(size, number_lower)` query pairs.
///
/// Yields `Err` once for a malformed stream and stops afterwards; complete
/// pairs read before the error are still yielded first.
pub struct QueryReader<R> {
    reader: R,
    pending: VecDeque<usize>,
    failure: Option<QueryError>,
    done: bool,
}

impl<R: BufRead> QueryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            failure: None,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for QueryReader<R> {
    type Item = Result<(usize, usize), QueryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pending.len() >= 2 {
                let size = self.pending.pop_front().unwrap();
                let number_lower = self.pending.pop_front().unwrap();
                return Some(Ok((size, number_lower)));
            }
            if let Some(failure) = self.failure.take() {
                self.done = true;
                return Some(Err(failure));
            }
            if self.done {
                return None;
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.done = true;
                    if let Some(size) = self.pending.pop_front() {
                        return Some(Err(QueryError::MissingNumberLower { size }));
                    }
                    return None;
                }
                Ok(_) => {
                    for token in line.split_whitespace() {
                        match token.parse() {
                            Ok(value) => self.pending.push_back(value),
                            Err(_) => {
                                // Complete pairs before the bad token still
                                // get answered on the next iterations.
                                self.failure = Some(QueryError::InvalidToken {
                                    token: token.to_string(),
                                });
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(QueryError::Io(e)));
                }
            }
        }
    }
}
