/// Estimate the syllable count of a line of verse.
///
/// Per whitespace-separated word: non-letters are stripped, then each
/// maximal run of vowel letters (`aeiouy`) counts as one syllable, minus
/// one for a trailing silent `e` (except `-le`) when the word has more
/// than one run. A word with no vowel letters contributes 0, so a line
/// with no vowel sounds estimates to 0.
pub fn estimate(line: &str) -> usize {
    line.split_whitespace().map(word_syllables).sum()
}

fn word_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0usize;
    let mut in_group = false;
    for c in letters.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    if groups > 1 && letters.ends_with('e') && !letters.ends_with("le") {
        groups -= 1;
    }
    groups
}
