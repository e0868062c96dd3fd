//! Doom-scale scorer.
//!
//! ```text
//! score = round(rhyming_words / total_words * 100), clamped to [0, 100]
//! ```
//!
//! Words rhyme when they share their final two characters (the whole word
//! when shorter). Every word in a suffix group of size > 1 counts as
//! rhyming. The score is a pure function of the input text.

use std::collections::HashMap;

/// Score a text on the doom scale, 0 to 100.
pub fn score(text: &str) -> u8 {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphabetic() || c == '\''))
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return 0;
    }

    let mut groups: HashMap<String, usize> = HashMap::new();
    for word in &words {
        *groups.entry(rhyme_suffix(word)).or_insert(0) += 1;
    }
    let rhyming: usize = groups.values().filter(|&&n| n > 1).sum();

    let ratio = rhyming as f64 / words.len() as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Final two characters of the word, or the whole word if shorter.
fn rhyme_suffix(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let start = chars.len().saturating_sub(2);
    chars[start..].iter().collect()
}
