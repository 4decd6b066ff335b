//! Character frequency analysis over a restricted alphabet.

use std::collections::HashMap;

/// True for the characters the codec understands: ASCII letters, comma
/// and space. Everything else is stripped before counting.
pub fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == ',' || ch == ' '
}

/// Count occurrences of each allowed character in `text`.
///
/// Characters outside the alphabet are discarded first, so every entry in
/// the returned map has a positive count. Text that filters down to
/// nothing yields an empty map. Iteration order of the result is
/// unspecified.
pub fn frequency_table(text: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for ch in text.chars().filter(|&c| is_allowed(c)) {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}
