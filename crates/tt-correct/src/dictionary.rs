//! Static misspelling dictionary for the spelling pass.
//!
//! Keys are lowercase misspellings; values are the corrected form. The list
//! covers common typos plus contractions typed without their apostrophe
//! ("dont" → "don't"). Real words that double as contractions ("ill",
//! "well", "were") are deliberately absent — a whole-word replace on those
//! would corrupt ordinary prose.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Misspelling → correction map, ~90 entries.
pub static MISSPELLINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Classic typos.
        ("teh", "the"),
        ("taht", "that"),
        ("adn", "and"),
        ("nad", "and"),
        ("waht", "what"),
        ("whta", "what"),
        ("thier", "their"),
        ("recieve", "receive"),
        ("recieved", "received"),
        ("seperate", "separate"),
        ("definately", "definitely"),
        ("definate", "definite"),
        ("occured", "occurred"),
        ("occurence", "occurrence"),
        ("untill", "until"),
        ("wich", "which"),
        ("becuase", "because"),
        ("beleive", "believe"),
        ("freind", "friend"),
        ("wierd", "weird"),
        ("acheive", "achieve"),
        ("adress", "address"),
        ("alot", "a lot"),
        ("arguement", "argument"),
        ("begining", "beginning"),
        ("calender", "calendar"),
        ("cemetary", "cemetery"),
        ("collegue", "colleague"),
        ("comming", "coming"),
        ("commited", "committed"),
        ("concious", "conscious"),
        ("dissapear", "disappear"),
        ("dissapoint", "disappoint"),
        ("embarass", "embarrass"),
        ("enviroment", "environment"),
        ("existance", "existence"),
        ("experiance", "experience"),
        ("familar", "familiar"),
        ("finaly", "finally"),
        ("foriegn", "foreign"),
        ("goverment", "government"),
        ("gaurd", "guard"),
        ("happend", "happened"),
        ("harrass", "harass"),
        ("immediatly", "immediately"),
        ("independant", "independent"),
        ("intrest", "interest"),
        ("knowlege", "knowledge"),
        ("libary", "library"),
        ("lisence", "license"),
        ("maintenence", "maintenance"),
        ("managment", "management"),
        ("millenium", "millennium"),
        ("miniscule", "minuscule"),
        ("mispell", "misspell"),
        ("neccessary", "necessary"),
        ("noticable", "noticeable"),
        ("occassion", "occasion"),
        ("persistant", "persistent"),
        ("posession", "possession"),
        ("potatos", "potatoes"),
        ("prefered", "preferred"),
        ("probaly", "probably"),
        ("proffesional", "professional"),
        ("pronounciation", "pronunciation"),
        ("publically", "publicly"),
        ("quater", "quarter"),
        ("questionaire", "questionnaire"),
        ("reccomend", "recommend"),
        ("refered", "referred"),
        ("relevent", "relevant"),
        ("religous", "religious"),
        ("remeber", "remember"),
        ("restaraunt", "restaurant"),
        ("rythm", "rhythm"),
        ("secratary", "secretary"),
        ("sieze", "seize"),
        ("similiar", "similar"),
        ("sincerly", "sincerely"),
        ("speach", "speech"),
        ("succesful", "successful"),
        ("supercede", "supersede"),
        ("suprise", "surprise"),
        ("tommorow", "tomorrow"),
        ("tounge", "tongue"),
        ("truely", "truly"),
        ("unforseen", "unforeseen"),
        ("unfortunatly", "unfortunately"),
        ("vaccum", "vacuum"),
        ("wether", "whether"),
        ("whereever", "wherever"),
        // Contractions typed without the apostrophe.
        ("dont", "don't"),
        ("cant", "can't"),
        ("wont", "won't"),
        ("isnt", "isn't"),
        ("arent", "aren't"),
        ("wasnt", "wasn't"),
        ("werent", "weren't"),
        ("havent", "haven't"),
        ("hasnt", "hasn't"),
        ("hadnt", "hadn't"),
        ("doesnt", "doesn't"),
        ("didnt", "didn't"),
        ("couldnt", "couldn't"),
        ("shouldnt", "shouldn't"),
        ("wouldnt", "wouldn't"),
        ("youre", "you're"),
        ("theyre", "they're"),
        ("thats", "that's"),
        ("whats", "what's"),
        ("heres", "here's"),
        ("theres", "there's"),
    ])
});

/// Look up the correction for a lowercased word, if any.
pub fn lookup(word_lower: &str) -> Option<&'static str> {
    MISSPELLINGS.get(word_lower).copied()
}

/// Re-apply the capitalization pattern of `original` to `correction`.
///
/// ALL-CAPS originals (length > 1) produce an ALL-CAPS correction,
/// Initial-cap originals capitalize the correction's first letter, and
/// everything else takes the correction as-is (dictionary values are
/// lowercase apart from proper fragments).
pub fn apply_casing(original: &str, correction: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    let all_caps = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    if all_caps {
        return correction.to_uppercase();
    }

    let initial_cap = letters.first().is_some_and(|c| c.is_uppercase());
    if initial_cap {
        let mut chars = correction.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
    }

    correction.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_has_expected_scale() {
        assert!(MISSPELLINGS.len() >= 90, "got {}", MISSPELLINGS.len());
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(lookup("teh"), Some("the"));
        assert_eq!(lookup("dont"), Some("don't"));
        assert_eq!(lookup("hello"), None);
    }

    #[test]
    fn keys_are_lowercase() {
        for key in MISSPELLINGS.keys() {
            assert_eq!(*key, key.to_lowercase().as_str());
        }
    }

    #[test]
    fn casing_all_caps() {
        assert_eq!(apply_casing("TEH", "the"), "THE");
        assert_eq!(apply_casing("DONT", "don't"), "DON'T");
    }

    #[test]
    fn casing_initial_cap() {
        assert_eq!(apply_casing("Teh", "the"), "The");
        assert_eq!(apply_casing("Becuase", "because"), "Because");
    }

    #[test]
    fn casing_lowercase_passthrough() {
        assert_eq!(apply_casing("teh", "the"), "the");
    }

    #[test]
    fn single_capital_letter_is_initial_cap_not_all_caps() {
        // A one-letter uppercase original should not upcase the whole word.
        assert_eq!(apply_casing("I", "i"), "I");
    }

    #[test]
    fn multi_word_correction_keeps_casing_on_first_word() {
        assert_eq!(apply_casing("Alot", "a lot"), "A lot");
    }
}
