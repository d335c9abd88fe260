//! URL percent-encoding with `encodeURIComponent` semantics.
//!
//! Alphanumerics and `-_.~!*'()` pass through; everything else (including
//! multi-byte UTF-8 sequences) is percent-escaped byte by byte. Decoding
//! validates percent sequences up front so malformed input is an error
//! rather than silently passed through.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use tt_core::{Result, TtError};

/// Characters left unescaped, matching `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` as a URI component.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Decode a percent-encoded URI component back to a UTF-8 string.
///
/// Rejects `%` not followed by two hex digits, and byte sequences that are
/// not valid UTF-8 after unescaping.
pub fn decode_uri_component(input: &str) -> Result<String> {
    validate_percent_sequences(input)?;
    percent_decode_str(input)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|e| TtError::InvalidInput(format!("decoded bytes are not UTF-8: {e}")))
}

fn validate_percent_sequences(input: &str) -> Result<()> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(TtError::InvalidInput(format!(
                    "malformed percent sequence at byte {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("100%"), "100%25");
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(encode_uri_component("a-b_c.d~e!f*g'h(i)j"), "a-b_c.d~e!f*g'h(i)j");
    }

    #[test]
    fn round_trip_ascii() {
        for s in ["", "plain", "a b c", "key=value&other=1", "/path?q=x#frag"] {
            assert_eq!(decode_uri_component(&encode_uri_component(s)).unwrap(), s);
        }
    }

    #[test]
    fn round_trip_multibyte_utf8() {
        for s in ["café", "日本語", "🦀 crab", "naïve façade"] {
            assert_eq!(decode_uri_component(&encode_uri_component(s)).unwrap(), s);
        }
    }

    #[test]
    fn multibyte_escapes_every_byte() {
        // é is 0xC3 0xA9 in UTF-8.
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn truncated_percent_sequence_is_rejected() {
        assert!(decode_uri_component("abc%").is_err());
        assert!(decode_uri_component("abc%4").is_err());
    }

    #[test]
    fn non_hex_percent_sequence_is_rejected() {
        assert!(decode_uri_component("abc%zz").is_err());
    }

    #[test]
    fn invalid_utf8_after_unescape_is_rejected() {
        assert!(decode_uri_component("%FF%FE").is_err());
    }

    #[test]
    fn decode_leaves_plain_text_alone() {
        assert_eq!(decode_uri_component("hello").unwrap(), "hello");
    }
}
