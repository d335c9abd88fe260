//! Tone rewrite transforms.
//!
//! Three independent, stateless transforms, each a fixed ordered list of
//! case-insensitive substitutions:
//!
//! - Professional: greetings → "Dear", thanks → "Thank you", contractions
//!   expanded, stacked `?`/`!` toned down.
//! - Friendly: "Dear" → "Hi", formal stock phrases shortened.
//! - Concise: per-sentence stripping of wordy filler phrases.
//!
//! The transforms share no state and may run in any order or in parallel
//! over the same input.

use once_cell::sync::Lazy;
use regex::Regex;

use tt_core::{RewriteVariant, Tone};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

struct ToneRule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> ToneRule {
    ToneRule {
        pattern: Regex::new(pattern).expect("tone rule pattern must compile"),
        replacement,
    }
}

static PROFESSIONAL_RULES: Lazy<Vec<ToneRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)\b(hey there|hi there|hey|hi|hello)\b", "Dear"),
        rule(r"(?i)\b(thanks|thx)\b", "Thank you"),
        rule(r"(?i)\bcan't\b", "cannot"),
        rule(r"(?i)\bwon't\b", "will not"),
        rule(r"(?i)\bdon't\b", "do not"),
        rule(r"(?i)\bdoesn't\b", "does not"),
        rule(r"(?i)\bdidn't\b", "did not"),
        rule(r"(?i)\bisn't\b", "is not"),
        rule(r"(?i)\baren't\b", "are not"),
        rule(r"(?i)\bwasn't\b", "was not"),
        rule(r"(?i)\bweren't\b", "were not"),
        rule(r"(?i)\bcouldn't\b", "could not"),
        rule(r"(?i)\bshouldn't\b", "should not"),
        rule(r"(?i)\bwouldn't\b", "would not"),
        rule(r"(?i)\bit's\b", "it is"),
        rule(r"(?i)\bthat's\b", "that is"),
        rule(r"(?i)\bthere's\b", "there is"),
        rule(r"(?i)\bi'm\b", "I am"),
        rule(r"(?i)\bi've\b", "I have"),
        rule(r"(?i)\bi'll\b", "I will"),
        rule(r"(?i)\byou're\b", "you are"),
        rule(r"(?i)\byou've\b", "you have"),
        rule(r"(?i)\bwe're\b", "we are"),
        rule(r"(?i)\bwe've\b", "we have"),
        rule(r"(?i)\bthey're\b", "they are"),
        rule(r"(?i)\bgonna\b", "going to"),
        rule(r"(?i)\bwanna\b", "want to"),
        rule(r"(?i)\bgotta\b", "have to"),
        rule(r"\?{2,}", "?"),
        rule(r"!{2,}", "."),
    ]
});

static FRIENDLY_RULES: Lazy<Vec<ToneRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)\bto whom it may concern\b", "Hi there"),
        rule(r"(?i)\bdear\b", "Hi"),
        rule(r"(?i)\bi am writing to inform you\b", "Just a heads up"),
        rule(r"(?i)\bplease do not hesitate to\b", "feel free to"),
        rule(r"(?i)\bat your earliest convenience\b", "when you get a chance"),
        rule(
            r"(?i)\b(best regards|kind regards|yours sincerely|yours faithfully|sincerely)\b",
            "Cheers",
        ),
        rule(r"(?i)\bthank you very much\b", "Thanks so much"),
        rule(r"(?i)\bi would like to\b", "I'd like to"),
    ]
});

/// Filler phrase → tighter form, applied within each sentence.
static CONCISE_PHRASES: Lazy<Vec<ToneRule>> = Lazy::new(|| {
    vec![
        rule(r"(?i)\bin order to\b", "to"),
        rule(r"(?i)\bdue to the fact that\b", "because"),
        rule(r"(?i)\bat this point in time\b", "now"),
        rule(r"(?i)\bat the present time\b", "now"),
        rule(r"(?i)\bin the event that\b", "if"),
        rule(r"(?i)\bfor the purpose of\b", "for"),
        rule(r"(?i)\bwith regard to\b", "about"),
        rule(r"(?i)\bin spite of the fact that\b", "although"),
        rule(r"(?i)\bit is important to note that\b", ""),
        rule(r"(?i)\bas a matter of fact\b", "in fact"),
        rule(r"(?i)\ba large number of\b", "many"),
        rule(r"(?i)\bthe vast majority of\b", "most"),
        rule(r"(?i)\bin the near future\b", "soon"),
        rule(r"(?i)\bon a daily basis\b", "daily"),
        rule(r"(?i)\bbasically\b", ""),
        rule(r"(?i)\bactually\b", ""),
    ]
});

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Produce the [`RewriteVariant`] of `text` for `tone`.
///
/// Empty input produces an empty variant text.
#[tracing::instrument(skip(text), fields(text_len = text.len(), ?tone))]
pub fn rewrite(text: &str, tone: Tone) -> RewriteVariant {
    let rewritten = match tone {
        Tone::Professional => apply_rules(text, &PROFESSIONAL_RULES),
        Tone::Friendly => apply_rules(text, &FRIENDLY_RULES),
        Tone::Concise => concise(text),
    };
    RewriteVariant {
        label: tone_label(tone).to_string(),
        description: tone_description(tone).to_string(),
        text: rewritten,
        tone,
    }
}

/// Display label for a tone.
pub fn tone_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Professional",
        Tone::Friendly => "Friendly",
        Tone::Concise => "Concise",
    }
}

/// One-line description of what a tone transform does.
pub fn tone_description(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Formal register with contractions expanded",
        Tone::Friendly => "Casual, approachable phrasing",
        Tone::Concise => "Filler phrases stripped, sentence by sentence",
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn apply_rules(text: &str, table: &[ToneRule]) -> String {
    let mut out = text.to_string();
    for rule in table {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }
    out
}

/// Concise transform: split into sentences (keeping each terminator run),
/// strip filler phrases within every sentence, tidy spacing, re-capitalize,
/// and rejoin.
fn concise(text: &str) -> String {
    let mut out = String::new();
    for (sentence, terminator) in split_with_terminators(text) {
        let stripped = apply_rules(&sentence, &CONCISE_PHRASES);
        let tidy = tidy_sentence(&stripped);
        if tidy.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&capitalize_first(&tidy));
        out.push_str(&terminator);
    }
    out
}

/// Split `text` into (sentence, terminator) pairs, where a terminator is a
/// run of `.`, `!`, `?`. The final sentence may have an empty terminator.
fn split_with_terminators(text: &str) -> Vec<(String, String)> {
    let mut parts = Vec::new();
    let mut sentence = String::new();
    let mut terminator = String::new();

    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            terminator.push(ch);
        } else {
            if !terminator.is_empty() {
                parts.push((std::mem::take(&mut sentence), std::mem::take(&mut terminator)));
            }
            sentence.push(ch);
        }
    }
    if !sentence.trim().is_empty() || !terminator.is_empty() {
        parts.push((sentence, terminator));
    }

    parts
        .into_iter()
        .filter(|(s, _)| !s.trim().is_empty())
        .collect()
}

fn tidy_sentence(sentence: &str) -> String {
    let mut tidy = String::with_capacity(sentence.len());
    let mut last_space = true;
    for ch in sentence.trim().chars() {
        if ch.is_whitespace() {
            if !last_space {
                tidy.push(' ');
            }
            last_space = true;
        } else {
            tidy.push(ch);
            last_space = false;
        }
    }
    // Filler removal can leave a dangling comma: ", the rest".
    tidy.trim_start_matches([',', ' ']).trim_end().to_string()
}

fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professional_greeting_and_thanks() {
        let v = rewrite("hey, thanks for the update", Tone::Professional);
        assert_eq!(v.tone, Tone::Professional);
        assert!(v.text.contains("Dear"));
        assert!(v.text.contains("Thank you"));
        assert!(!v.text.to_lowercase().contains("hey"));
    }

    #[test]
    fn professional_expands_contractions() {
        let v = rewrite("I can't make it, it's too late", Tone::Professional);
        assert!(v.text.contains("cannot"));
        assert!(v.text.contains("it is"));
        assert!(!v.text.contains("can't"));
    }

    #[test]
    fn professional_tones_down_punctuation() {
        let v = rewrite("This is great!! Really??", Tone::Professional);
        assert!(v.text.contains('.'));
        assert!(!v.text.contains("!!"));
        assert!(!v.text.contains("??"));
    }

    #[test]
    fn professional_keeps_single_exclamation() {
        let v = rewrite("Great! See you at noon?", Tone::Professional);
        assert_eq!(v.text, "Great! See you at noon?");
    }

    #[test]
    fn friendly_replaces_dear_and_stock_phrases() {
        let v = rewrite(
            "Dear team, please do not hesitate to reach out. Best regards",
            Tone::Friendly,
        );
        assert!(v.text.starts_with("Hi team"));
        assert!(v.text.contains("feel free to"));
        assert!(v.text.contains("Cheers"));
    }

    #[test]
    fn concise_strips_fillers() {
        let v = rewrite(
            "In order to succeed, we must plan. This is due to the fact that time is short.",
            Tone::Concise,
        );
        assert_eq!(
            v.text,
            "To succeed, we must plan. This is because time is short."
        );
    }

    #[test]
    fn concise_drops_empty_preamble() {
        let v = rewrite("It is important to note that the server is down.", Tone::Concise);
        assert_eq!(v.text, "The server is down.");
    }

    #[test]
    fn concise_preserves_terminators() {
        let v = rewrite("Are we there? Basically yes!", Tone::Concise);
        assert_eq!(v.text, "Are we there? Yes!");
    }

    #[test]
    fn empty_input_produces_empty_output() {
        for tone in [Tone::Professional, Tone::Friendly, Tone::Concise] {
            assert_eq!(rewrite("", tone).text, "");
        }
    }

    #[test]
    fn transforms_are_independent_of_each_other() {
        let text = "hey, in order to win we can't stop";
        let professional = rewrite(text, Tone::Professional).text;
        let concise = rewrite(text, Tone::Concise).text;
        // Each transform starts from the raw input, not another's output.
        assert!(professional.contains("in order to"));
        assert!(concise.contains("can't"));
    }

    #[test]
    fn labels_and_descriptions() {
        assert_eq!(tone_label(Tone::Concise), "Concise");
        assert!(!tone_description(Tone::Friendly).is_empty());
        let v = rewrite("x", Tone::Professional);
        assert_eq!(v.label, "Professional");
    }
}
