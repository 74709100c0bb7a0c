use serde::{Deserialize, Serialize};

// -- MinedKey (one successful mining result) --
// Transient value: produced per successful trial, never retained.

/// A random key whose fingerprint prefix collided with a corpus entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinedKey {
    /// Matched prefix length in hex characters (`k1 + k2`) — the
    /// difficulty this key satisfies.
    pub length: usize,
    /// The rendered phrase, e.g. `"Female Bobcat"`.
    pub pretty: String,
    /// The mined key itself: 32 lowercase hex characters (16 random bytes).
    pub key: String,
    /// The key's fingerprint, re-derivable from `key` at any time.
    pub hash: String,
}
