//! Lorem Ipsum placeholder text generation.
//!
//! Words are drawn from the fixed latin vocabulary via the injected
//! [`RandomSource`]; sentence and paragraph shapes (word counts) are also
//! randomized within small fixed ranges. The first sentence of the first
//! paragraph can open with the canonical "Lorem ipsum dolor sit amet".

use tt_core::RandomSource;

const VOCABULARY: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

const CANONICAL_OPENER: &str = "Lorem ipsum dolor sit amet";

/// `n` random vocabulary words joined with spaces. Zero yields an empty
/// string.
pub fn lorem_words(n: usize, rng: &mut dyn RandomSource) -> String {
    let mut words = Vec::with_capacity(n);
    for _ in 0..n {
        words.push(VOCABULARY[rng.next_below(VOCABULARY.len())]);
    }
    words.join(" ")
}

/// `n` sentences of 6-12 words each, capitalized and period-terminated.
///
/// When `canonical_start` is set the first sentence begins with the classic
/// opener.
pub fn lorem_sentences(n: usize, canonical_start: bool, rng: &mut dyn RandomSource) -> String {
    let mut sentences = Vec::with_capacity(n);
    for i in 0..n {
        if i == 0 && canonical_start {
            let tail = lorem_words(4 + rng.next_below(5), rng);
            sentences.push(format!("{CANONICAL_OPENER}, {tail}."));
            continue;
        }
        let body = lorem_words(6 + rng.next_below(7), rng);
        sentences.push(format!("{}.", capitalize(&body)));
    }
    sentences.join(" ")
}

/// `n` paragraphs of 3-5 sentences, separated by blank lines.
pub fn lorem_paragraphs(n: usize, rng: &mut dyn RandomSource) -> String {
    let mut paragraphs = Vec::with_capacity(n);
    for i in 0..n {
        let sentence_count = 3 + rng.next_below(3);
        paragraphs.push(lorem_sentences(sentence_count, i == 0, rng));
    }
    paragraphs.join("\n\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
