//! Memorable identifiers mined from hash collisions.
//!
//! A key is "memorable" when the leading characters of its SHA-256
//! fingerprint happen to be a corpus entry — a hex prefix that reads as an
//! adjective + animal phrase once each digit substitutes to a letter
//! (`fe3a1eb0bca7…` → "Female Bobcat"). This library mines random keys
//! until one matches, and recognizes and scores keys mined earlier. The
//! CLI binary wraps this library.

#![warn(clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod corpus;
pub mod fingerprint;
pub mod miner;
pub mod phrase;
pub mod types;

pub use corpus::{Corpus, CorpusError};
pub use miner::{DEFAULT_DIFFICULTY, MineError, create, mine_until};
pub use types::MinedKey;

use corpus::{MAX_PREFIX, MIN_PREFIX};

/// Find the longest corpus entry among the leading prefixes of
/// `fingerprint` and render its phrase. Longest first is deliberate: a
/// 16-character collision is a more specific match than a shorter one and
/// wins even when a shorter prefix also matches.
pub fn search(corpus: &Corpus, fingerprint: &str) -> Option<String> {
    for k in (MIN_PREFIX..=MAX_PREFIX).rev() {
        let Some(prefix) = fingerprint.get(..k) else {
            continue;
        };
        if let Some((k1, k2)) = corpus.lookup(prefix) {
            return Some(phrase::pretty(prefix, k1, k2));
        }
    }
    None
}

/// The phrase for a key, if its fingerprint matches the corpus.
/// "No match" is a normal outcome, not an error.
pub fn animal(corpus: &Corpus, key: &str) -> Option<String> {
    search(corpus, &fingerprint::of_hex(key))
}

/// Whether `key` hashes to a recognized phrase.
pub fn validate(corpus: &Corpus, key: &str) -> bool {
    animal(corpus, key).is_some()
}

/// The difficulty a key satisfies: the matched prefix length, counted as
/// the phrase's characters excluding the space. 0 when nothing matches.
pub fn difficulty(corpus: &Corpus, key: &str) -> usize {
    match animal(corpus, key) {
        Some(p) => p.chars().filter(|&c| c != ' ').count(),
        None => 0,
    }
}
