//! Mining: random-trial search for keys whose fingerprints spell a phrase.
//!
//! Each trial draws 16 bytes from the process CSPRNG, hex-encodes them, and
//! fingerprints the hex *text*. A trial succeeds when the first
//! `difficulty` characters of the fingerprint are a corpus entry of exactly
//! that length. Expected cost grows roughly exponentially with difficulty;
//! the loop has no upper bound on attempts.

use std::ops::RangeInclusive;

use crate::corpus::Corpus;
use crate::types::MinedKey;
use crate::{fingerprint, phrase};

/// Difficulties `mine_until` accepts. Search still recognizes 16-character
/// prefixes, but those are reachable only through direct corpus entries,
/// never by mining.
pub const DIFFICULTY_RANGE: RangeInclusive<usize> = 6..=15;

/// Difficulty used when the caller has no opinion.
pub const DEFAULT_DIFFICULTY: usize = 8;

/// From this difficulty up, expected mining time is days to weeks.
pub const WARN_DIFFICULTY: usize = 13;

/// Errors that can occur when mining.
#[derive(Debug, PartialEq, Eq)]
pub enum MineError {
    InvalidDifficulty(usize),
}

impl std::fmt::Display for MineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MineError::InvalidDifficulty(n) => {
                write!(
                    f,
                    "difficulty should be >= {} and <= {}, got {n}",
                    DIFFICULTY_RANGE.start(),
                    DIFFICULTY_RANGE.end()
                )
            }
        }
    }
}

/// Mine keys until `quota` of them match the corpus at exactly
/// `difficulty` leading characters. A miss is not a failure — the loop
/// retries forever; only an out-of-range difficulty is an error.
pub fn mine_until(
    corpus: &Corpus,
    difficulty: usize,
    quota: usize,
) -> Result<Vec<MinedKey>, MineError> {
    if !DIFFICULTY_RANGE.contains(&difficulty) {
        return Err(MineError::InvalidDifficulty(difficulty));
    }

    let mut results = Vec::with_capacity(quota);
    while results.len() < quota {
        let buf: [u8; 16] = rand::random();
        let key = hex::encode(buf);
        let hashed = fingerprint::of_hex(&key);

        if let Some((k1, k2)) = corpus.lookup(&hashed[..difficulty]) {
            results.push(report_finding(key, hashed, k1, k2));
        }
    }
    Ok(results)
}

/// Package one successful trial. The probe fingerprint doubles as the
/// stored hash — recomputing it from the key yields the same value.
fn report_finding(key: String, hashed: String, k1: usize, k2: usize) -> MinedKey {
    MinedKey {
        length: k1 + k2,
        pretty: phrase::pretty(&hashed, k1, k2),
        key,
        hash: hashed,
    }
}

/// Mine a single key at `difficulty`. From [`WARN_DIFFICULTY`] up this
/// prints an advisory to stderr and keeps going — the warning never
/// changes the result or aborts the search.
pub fn create(corpus: &Corpus, difficulty: usize) -> Result<MinedKey, MineError> {
    if difficulty >= WARN_DIFFICULTY {
        eprintln!(
            "\x1b[1;33mwarning:\x1b[0m mining at difficulty {difficulty} may take days or weeks"
        );
    }
    let mut results = mine_until(corpus, difficulty, 1)?;
    Ok(results.remove(0))
}
