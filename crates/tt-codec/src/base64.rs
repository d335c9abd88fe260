//! Base64 text codec over the standard and URL-safe alphabets.
//!
//! Encoding never fails; decoding rejects input outside the selected
//! alphabet (or invalid padding) and input that does not decode to valid
//! UTF-8, both as [`TtError::InvalidInput`].

use ::base64::engine::general_purpose::{STANDARD, URL_SAFE};
use ::base64::Engine as _;
use serde::{Deserialize, Serialize};

use tt_core::{Result, TtError};

/// Which Base64 alphabet to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base64Alphabet {
    /// `+` and `/`, with `=` padding.
    Standard,
    /// `-` and `_`, with `=` padding.
    UrlSafe,
}

/// Encode `text` as Base64.
pub fn encode_base64(text: &str, alphabet: Base64Alphabet) -> String {
    match alphabet {
        Base64Alphabet::Standard => STANDARD.encode(text.as_bytes()),
        Base64Alphabet::UrlSafe => URL_SAFE.encode(text.as_bytes()),
    }
}

/// Decode Base64 `input` back to a UTF-8 string.
pub fn decode_base64(input: &str, alphabet: Base64Alphabet) -> Result<String> {
    let bytes = match alphabet {
        Base64Alphabet::Standard => STANDARD.decode(input),
        Base64Alphabet::UrlSafe => URL_SAFE.decode(input),
    }
    .map_err(|e| TtError::InvalidInput(format!("not valid base64: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| TtError::InvalidInput(format!("decoded bytes are not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_known_vector() {
        let encoded = encode_base64("Hello, World!", Base64Alphabet::Standard);
        assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(
            decode_base64(&encoded, Base64Alphabet::Standard).unwrap(),
            "Hello, World!"
        );
    }

    #[test]
    fn round_trip_ascii() {
        for s in ["", "a", "ab", "abc", "the quick brown fox"] {
            let encoded = encode_base64(s, Base64Alphabet::Standard);
            assert_eq!(decode_base64(&encoded, Base64Alphabet::Standard).unwrap(), s);
        }
    }

    #[test]
    fn round_trip_multibyte_utf8() {
        for s in ["café", "日本語テキスト", "emoji 🦀 here", "mixed café 日本 🎉"] {
            for alphabet in [Base64Alphabet::Standard, Base64Alphabet::UrlSafe] {
                let encoded = encode_base64(s, alphabet);
                assert_eq!(decode_base64(&encoded, alphabet).unwrap(), s);
            }
        }
    }

    #[test]
    fn url_safe_alphabet_avoids_plus_and_slash() {
        // 0xfb 0xff style input forces '+' and '/' in the standard alphabet.
        let tricky = "???>>>~~~";
        let standard = encode_base64(tricky, Base64Alphabet::Standard);
        let url_safe = encode_base64(tricky, Base64Alphabet::UrlSafe);
        assert!(!url_safe.contains('+') && !url_safe.contains('/'));
        assert_ne!(standard, url_safe);
    }

    #[test]
    fn invalid_alphabet_is_rejected() {
        assert!(decode_base64("not base64!!!", Base64Alphabet::Standard).is_err());
    }

    #[test]
    fn non_utf8_payload_is_rejected() {
        // 0xff is never valid UTF-8.
        let encoded = STANDARD.encode([0xff, 0xfe]);
        assert!(decode_base64(&encoded, Base64Alphabet::Standard).is_err());
    }

    #[test]
    fn alphabet_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&Base64Alphabet::UrlSafe).unwrap(),
            "\"url_safe\""
        );
    }
}
