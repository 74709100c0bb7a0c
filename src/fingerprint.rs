use sha2::{Digest, Sha256};

/// Length of a fingerprint in hex characters — the first 16 bytes of the
/// SHA-256 digest.
pub const LEN: usize = 32;

/// Fingerprint a textual key. The key is hashed as UTF-8 text — for hex
/// keys that means the hex *string*, not the bytes it encodes. All stored
/// identifier hashes were produced this way; it cannot change without
/// orphaning every previously mined key.
pub fn of_hex(key: &str) -> String {
    of_bytes(key.as_bytes())
}

/// Fingerprint a raw byte buffer.
pub fn of_bytes(data: &[u8]) -> String {
    let mut encoded = hex::encode(Sha256::digest(data));
    encoded.truncate(LEN);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_length() {
        assert_eq!(of_hex("anything").len(), LEN);
        assert_eq!(of_bytes(b"anything").len(), LEN);
    }

    #[test]
    fn deterministic() {
        assert_eq!(of_hex("same input"), of_hex("same input"));
        assert_eq!(of_bytes(b"same input"), of_bytes(b"same input"));
    }

    #[test]
    fn known_value_empty() {
        // SHA-256("") = e3b0c44298fc1c149afbf4c8996fb924 27ae41e4...
        assert_eq!(of_bytes(b""), "e3b0c44298fc1c149afbf4c8996fb924");
    }

    #[test]
    fn known_value_hex_key() {
        assert_eq!(
            of_hex("1200000000000000000000010c6228c1"),
            "910031e55f1494371232401998eab8fb"
        );
    }

    #[test]
    fn text_and_bytes_are_distinct() {
        // Hashing the hex text of a buffer is not hashing the buffer.
        let raw = [0x12u8, 0x34, 0xab, 0xcd];
        assert_ne!(of_bytes(&raw), of_hex(&hex::encode(raw)));
    }

    #[test]
    fn lowercase_hex_only() {
        let fp = of_hex("some key");
        assert!(fp.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }
}
