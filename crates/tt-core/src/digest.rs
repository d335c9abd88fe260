use sha2::{Digest, Sha256, Sha512};

/// Generic SHA-256 helper — returns a lowercase hex-encoded digest.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// SHA-512 variant for callers that want the longer digest.
pub fn sha512_hex(input: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_known_vector() {
        // FIPS 180-2 test vector for "abc".
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_hex_hello_world() {
        assert_eq!(
            sha256_hex("Hello, World!"),
            "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
        );
    }

    #[test]
    fn sha512_hex_is_128_chars() {
        assert_eq!(sha512_hex("abc").len(), 128);
    }

    #[test]
    fn digests_are_deterministic() {
        let text = "the quick brown fox";
        assert_eq!(sha256_hex(text), sha256_hex(text));
        assert_ne!(sha256_hex("foo"), sha256_hex("bar"));
    }
}
