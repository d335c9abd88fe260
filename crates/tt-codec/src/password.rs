//! Password generation from configurable character classes.
//!
//! The charset is the union of the enabled classes. When length permits,
//! one character from every enabled class is guaranteed, then the rest is
//! drawn uniformly from the union and the whole buffer is shuffled so the
//! guaranteed characters do not cluster at the front.
//!
//! Randomness quality is whatever the injected [`RandomSource`] provides;
//! callers needing cryptographic strength must supply a source backed by a
//! CSPRNG.

use serde::{Deserialize, Serialize};

use tt_core::{RandomSource, Result, TtError};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

// ---------------------------------------------------------------------------
// PasswordSpec
// ---------------------------------------------------------------------------

/// What to generate: length plus enabled character classes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PasswordSpec {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordSpec {
    /// The enabled classes, in declaration order.
    fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.lowercase {
            classes.push(LOWERCASE);
        }
        if self.uppercase {
            classes.push(UPPERCASE);
        }
        if self.digits {
            classes.push(DIGITS);
        }
        if self.symbols {
            classes.push(SYMBOLS);
        }
        classes
    }

    /// Union of all enabled classes.
    pub fn charset(&self) -> String {
        self.classes().concat()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a password per `spec` using `rng`.
///
/// Errors when the length is zero or no character class is enabled.
pub fn generate_password(spec: &PasswordSpec, rng: &mut dyn RandomSource) -> Result<String> {
    if spec.length == 0 {
        return Err(TtError::InvalidInput("password length must be > 0".into()));
    }
    let classes = spec.classes();
    if classes.is_empty() {
        return Err(TtError::InvalidInput(
            "at least one character class must be enabled".into(),
        ));
    }

    let charset: Vec<char> = spec.charset().chars().collect();
    let mut out: Vec<char> = Vec::with_capacity(spec.length);

    // One guaranteed character per enabled class, as far as length allows.
    for class in classes.iter().take(spec.length) {
        let chars: Vec<char> = class.chars().collect();
        out.push(chars[rng.next_below(chars.len())]);
    }
    while out.len() < spec.length {
        out.push(charset[rng.next_below(charset.len())]);
    }

    // Fisher-Yates so the per-class prefix is not predictable.
    for i in (1..out.len()).rev() {
        out.swap(i, rng.next_below(i + 1));
    }

    Ok(out.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
