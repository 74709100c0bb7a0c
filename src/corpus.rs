use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

// -- Corpus (recognized fingerprint prefixes) --
// A flat dictionary keyed by literal hex strings of length 6–16. Entries of
// every length share one namespace; a lookup is always an exact-length
// probe, and callers wanting the longest match slice and probe per length.

/// Shortest recognized prefix, in hex characters.
pub const MIN_PREFIX: usize = 6;
/// Longest recognized prefix, in hex characters.
pub const MAX_PREFIX: usize = 16;

/// Errors that can occur while loading a corpus file.
#[derive(Debug)]
pub enum CorpusError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                write!(f, "corpus file not found")
            }
            CorpusError::Io(e) => write!(f, "corpus I/O error: {e}"),
            CorpusError::Parse(msg) => write!(f, "corpus parse error: {msg}"),
        }
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::Io(e)
    }
}

/// Immutable dictionary from hex prefixes to `(k1, k2)` word lengths.
/// Loaded once, read many; nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: HashMap<String, (usize, usize)>,
}

const BUNDLED_JSON: &str = include_str!("../data/animals.json");

static BUNDLED: OnceLock<Corpus> = OnceLock::new();

impl Corpus {
    /// The corpus compiled into the binary (`data/animals.json`).
    /// Parsed on first use and shared for the life of the process.
    pub fn bundled() -> &'static Corpus {
        BUNDLED.get_or_init(|| {
            Corpus::parse(BUNDLED_JSON).expect("bundled corpus data is valid")
        })
    }

    /// Parse a corpus from JSON text: one object mapping each hex prefix to
    /// a `[k1, k2]` pair. Every entry is validated; a single bad entry
    /// rejects the whole corpus rather than silently thinning it.
    pub fn parse(json: &str) -> Result<Corpus, CorpusError> {
        let entries: HashMap<String, (usize, usize)> = serde_json::from_str(json)
            .map_err(|e| CorpusError::Parse(format!("invalid corpus JSON: {e}")))?;

        for (key, &(k1, k2)) in &entries {
            if key.len() < MIN_PREFIX || key.len() > MAX_PREFIX {
                return Err(CorpusError::Parse(format!(
                    "key {key:?} has length {}, expected {MIN_PREFIX}..={MAX_PREFIX}",
                    key.len()
                )));
            }
            if !key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
                return Err(CorpusError::Parse(format!(
                    "key {key:?} is not lowercase hex"
                )));
            }
            if k1 == 0 || k2 == 0 || k1 + k2 != key.len() {
                return Err(CorpusError::Parse(format!(
                    "key {key:?}: word lengths ({k1}, {k2}) do not split it"
                )));
            }
        }

        Ok(Corpus { entries })
    }

    /// Read a corpus from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Corpus, CorpusError> {
        let contents = fs::read_to_string(path)?;
        Corpus::parse(&contents)
    }

    /// Build a corpus directly from entries, skipping validation. For
    /// embedders and tests assembling synthetic dictionaries.
    pub fn from_entries<I>(entries: I) -> Corpus
    where
        I: IntoIterator<Item = (String, (usize, usize))>,
    {
        Corpus {
            entries: entries.into_iter().collect(),
        }
    }

    /// Exact-match lookup of a literal prefix string. No fuzzy matching:
    /// the caller decides which lengths to probe.
    pub fn lookup(&self, prefix: &str) -> Option<(usize, usize)> {
        self.entries.get(prefix).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let corpus = Corpus::parse(r#"{"fe3a1e": [2, 4], "910031e55f14": [9, 3]}"#).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.lookup("fe3a1e"), Some((2, 4)));
        assert_eq!(corpus.lookup("910031e55f14"), Some((9, 3)));
    }

    #[test]
    fn lookup_is_exact() {
        let corpus = Corpus::parse(r#"{"fe3a1e": [3, 3]}"#).unwrap();
        assert_eq!(corpus.lookup("fe3a1"), None);
        assert_eq!(corpus.lookup("fe3a1eb"), None);
        assert_eq!(corpus.lookup(""), None);
    }

    #[test]
    fn parse_invalid_json() {
        let err = Corpus::parse("not json at all").unwrap_err();
        assert!(err.to_string().contains("corpus parse error"));
    }

    #[test]
    fn parse_rejects_short_key() {
        let err = Corpus::parse(r#"{"ab123": [2, 3]}"#).unwrap_err();
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn parse_rejects_long_key() {
        let err = Corpus::parse(r#"{"0123456789abcdef0": [8, 9]}"#).unwrap_err();
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn parse_rejects_non_hex_key() {
        let err = Corpus::parse(r#"{"gloomy": [3, 3]}"#).unwrap_err();
        assert!(err.to_string().contains("not lowercase hex"));
    }

    #[test]
    fn parse_rejects_uppercase_key() {
        let err = Corpus::parse(r#"{"FE3A1E": [3, 3]}"#).unwrap_err();
        assert!(err.to_string().contains("not lowercase hex"));
    }

    #[test]
    fn parse_rejects_bad_split() {
        assert!(Corpus::parse(r#"{"fe3a1e": [2, 3]}"#).is_err());
        assert!(Corpus::parse(r#"{"fe3a1e": [0, 6]}"#).is_err());
        assert!(Corpus::parse(r#"{"fe3a1e": [6, 0]}"#).is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = Corpus::load(Path::new("/tmp/no-such-corpus.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
        assert!(err.to_string().contains("corpus file not found"));
    }

    #[test]
    fn from_entries_skips_validation() {
        let corpus = Corpus::from_entries([("zz".to_string(), (1, 1))]);
        assert_eq!(corpus.lookup("zz"), Some((1, 1)));
    }

    #[test]
    fn bundled_contains_reference_entries() {
        let corpus = Corpus::bundled();
        assert!(corpus.len() > 10_000);
        assert_eq!(corpus.lookup("910031e55f14"), Some((9, 3)));
        assert_eq!(corpus.lookup("fe3a1eb0bca7"), Some((6, 6)));
    }

    #[test]
    fn bundled_covers_every_prefix_length() {
        let corpus = Corpus::bundled();
        for len in MIN_PREFIX..=MAX_PREFIX {
            // At least one entry per recognized length keeps the full
            // search range meaningful.
            assert!(
                corpus.entries.keys().any(|k| k.len() == len),
                "no bundled entries of length {len}"
            );
        }
    }
}
