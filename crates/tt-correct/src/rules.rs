//! Data-driven grammar/style rule table for the correction pipeline.
//!
//! Each rule is a (pattern, replacement, kind, severity, message) tuple.
//! Rules are applied strictly in table order as a fold over the working
//! text: a rule records issues for the matches it finds in its input, then
//! rewrites the string that the next rule receives. Adding or removing a
//! rule never touches pipeline logic.
//!
//! These are approximate, English-only heuristics. The confused-word rules
//! are gated by a following-word lookahead list precisely because the bare
//! substitution would be wrong more often than right.

use once_cell::sync::Lazy;
use regex::Regex;

use tt_core::{IssueKind, Severity};

// ---------------------------------------------------------------------------
// GrammarRule
// ---------------------------------------------------------------------------

/// One entry of the ordered rule table.
pub struct GrammarRule {
    pub pattern: Regex,
    /// Replacement template in `regex` expansion syntax (`${1}` etc.).
    pub replacement: &'static str,
    pub kind: IssueKind,
    pub severity: Severity,
    /// Human-readable explanation attached to every issue this rule records.
    pub message: &'static str,
}

impl GrammarRule {
    fn new(
        pattern: &str,
        replacement: &'static str,
        kind: IssueKind,
        severity: Severity,
        message: &'static str,
    ) -> Self {
        Self {
            // Patterns are compile-time constants; a malformed one is a
            // programming error caught by the rule-table tests.
            pattern: Regex::new(pattern).expect("grammar rule pattern must compile"),
            replacement,
            kind,
            severity,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// The ordered rule table. Order matters: later rules see earlier rules'
/// output (e.g. the spacing rules run before the article rules so the
/// article patterns can assume single spaces).
pub static RULES: Lazy<Vec<GrammarRule>> = Lazy::new(|| {
    vec![
        GrammarRule::new(
            r"\bi\b",
            "I",
            IssueKind::Grammar,
            Severity::Error,
            "The pronoun \"I\" should be capitalized",
        ),
        GrammarRule::new(
            r"[ \t]{2,}",
            " ",
            IssueKind::Style,
            Severity::Suggestion,
            "Repeated whitespace",
        ),
        GrammarRule::new(
            r"[ \t]+([.,!?;:])",
            "${1}",
            IssueKind::Punctuation,
            Severity::Warning,
            "Space before punctuation",
        ),
        GrammarRule::new(
            r"([.,!?;:])([A-Za-z])",
            "${1} ${2}",
            IssueKind::Punctuation,
            Severity::Warning,
            "Missing space after punctuation",
        ),
        GrammarRule::new(
            r"([!?])[!?]+",
            "${1}",
            IssueKind::Punctuation,
            Severity::Warning,
            "Repeated terminal punctuation",
        ),
        GrammarRule::new(
            r"\b([Aa]) ([aeiouAEIOU][A-Za-z]*)\b",
            "${1}n ${2}",
            IssueKind::Grammar,
            Severity::Warning,
            "\"a\" before a vowel sound should be \"an\"",
        ),
        GrammarRule::new(
            // 'h' is excluded: "an hour", "an honest" are correct.
            r"\b([Aa])n ([bcdfgjklmnpqrstvwxyz][a-z]*)\b",
            "${1} ${2}",
            IssueKind::Grammar,
            Severity::Warning,
            "\"an\" before a consonant sound should be \"a\"",
        ),
        GrammarRule::new(
            r"\b([Yy])our (going|welcome|not|doing|being|sure)\b",
            "${1}ou're ${2}",
            IssueKind::Grammar,
            Severity::Warning,
            "Possible confusion: \"your\" vs \"you're\"",
        ),
        GrammarRule::new(
            r"\b([Ii])ts (a|been|not|going|time|important)\b",
            "${1}t's ${2}",
            IssueKind::Grammar,
            Severity::Warning,
            "Possible confusion: \"its\" vs \"it's\"",
        ),
        GrammarRule::new(
            r"\b([Tt])heir (going|coming|not|here)\b",
            "${1}hey're ${2}",
            IssueKind::Grammar,
            Severity::Warning,
            "Possible confusion: \"their\" vs \"they're\"",
        ),
        GrammarRule::new(
            r"\b([Tt])o (much|many|late|soon|early|far|big|small)\b",
            "${1}oo ${2}",
            IssueKind::Grammar,
            Severity::Warning,
            "Possible confusion: \"to\" vs \"too\"",
        ),
        GrammarRule::new(
            r"(?i)\b(more|less|better|worse|rather|other) then\b",
            "${1} than",
            IssueKind::Grammar,
            Severity::Warning,
            "Possible confusion: \"then\" vs \"than\"",
        ),
    ]
});

/// Borrow the ordered rule table.
pub fn rules() -> &'static [GrammarRule] {
    &RULES
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(text: &str) -> String {
        let mut out = text.to_string();
        for rule in rules() {
            out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
        }
        out
    }

    #[test]
    fn all_patterns_compile() {
        // Touching the Lazy forces every Regex::new.
        assert!(!rules().is_empty());
    }

    #[test]
    fn lowercase_i_is_capitalized() {
        assert_eq!(apply_all("i think i can"), "I think I can");
    }

    #[test]
    fn lowercase_i_in_contraction() {
        assert_eq!(apply_all("i'm here"), "I'm here");
    }

    #[test]
    fn i_inside_words_is_untouched() {
        assert_eq!(apply_all("it is in italy"), "it is in italy");
    }

    #[test]
    fn repeated_whitespace_collapses() {
        assert_eq!(apply_all("too   many    spaces"), "too many spaces");
    }

    #[test]
    fn newlines_survive_whitespace_collapse() {
        assert_eq!(apply_all("first\n\nsecond"), "first\n\nsecond");
    }

    #[test]
    fn space_before_punctuation_removed() {
        assert_eq!(apply_all("hello , world ."), "hello, world.");
    }

    #[test]
    fn space_inserted_after_punctuation() {
        assert_eq!(apply_all("one.two,three"), "one. two, three");
    }

    #[test]
    fn decimal_numbers_keep_their_dot() {
        assert_eq!(apply_all("pi is 3.14"), "pi is 3.14");
    }

    #[test]
    fn punctuation_spacing_is_idempotent() {
        let once = apply_all("hello ,world!!how are you ?");
        let twice = apply_all(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn repeated_terminal_punctuation_collapses_to_first() {
        assert_eq!(apply_all("stop!!!"), "stop!");
        assert_eq!(apply_all("what??"), "what?");
        assert_eq!(apply_all("really?!?!"), "really?");
    }

    #[test]
    fn ellipsis_is_left_alone() {
        assert_eq!(apply_all("wait... ok"), "wait... ok");
    }

    #[test]
    fn article_a_before_vowel_becomes_an() {
        assert_eq!(apply_all("a apple a day"), "an apple a day");
        assert_eq!(apply_all("A evening walk"), "An evening walk");
    }

    #[test]
    fn article_an_before_consonant_becomes_a() {
        assert_eq!(apply_all("an banana"), "a banana");
    }

    #[test]
    fn article_an_before_h_is_untouched() {
        assert_eq!(apply_all("an hour ago"), "an hour ago");
    }

    #[test]
    fn your_youre_with_lookahead() {
        assert_eq!(apply_all("your welcome"), "you're welcome");
        assert_eq!(apply_all("Your going home"), "You're going home");
        // No lookahead match: untouched.
        assert_eq!(apply_all("your house"), "your house");
    }

    #[test]
    fn its_and_their_and_to_and_then() {
        assert_eq!(apply_all("its been a while"), "it's been a while");
        assert_eq!(apply_all("their going now"), "they're going now");
        assert_eq!(apply_all("to late to help"), "too late to help");
        assert_eq!(apply_all("more then enough"), "more than enough");
    }

    #[test]
    fn than_confusion_untouched_without_comparative() {
        assert_eq!(apply_all("back then life was slow"), "back then life was slow");
    }
}
