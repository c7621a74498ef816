//! Character-level predicates for the Ukrainian (Cyrillic) alphabet.
//!
//! Everything the extractor decides about "is this text worth reporting"
//! bottoms out in these functions. They are pure and total: empty input
//! always returns `false`.

/// Returns true if `c` belongs to the Ukrainian letter set.
///
/// The set is the basic Cyrillic block `А-Я`/`а-я` plus the Ukrainian
/// specific letters `І і Ї ї Є є Ґ ґ`.
pub fn is_target_char(c: char) -> bool {
    matches!(c, 'А'..='Я' | 'а'..='я' | 'І' | 'і' | 'Ї' | 'ї' | 'Є' | 'є' | 'Ґ' | 'ґ')
}

/// Checks if the word contains at least one Ukrainian letter.
///
/// # Examples
///
/// ```
/// use ukrscan::core::alphabet::has_target_alphabet;
///
/// assert!(has_target_alphabet("Привіт"));
/// assert!(has_target_alphabet("ґ"));
/// assert!(!has_target_alphabet("Hello"));
/// assert!(!has_target_alphabet(""));
/// ```
pub fn has_target_alphabet(word: &str) -> bool {
    word.chars().any(is_target_char)
}

/// Checks if the word contains at least one ASCII letter.
pub fn has_latin(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphabetic())
}

/// Checks if the text contains two or more consecutive Ukrainian letters.
///
/// This is the "worth extracting" test applied to whole lines and to
/// cleaned phrases.
///
/// # Examples
///
/// ```
/// use ukrscan::core::alphabet::has_target_run;
///
/// assert!(has_target_run("Натисніть тут"));
/// assert!(has_target_run("x = 'Ок'"));
/// assert!(!has_target_run("я"));
/// assert!(!has_target_run("я і ти"));
/// assert!(!has_target_run(""));
/// ```
pub fn has_target_run(text: &str) -> bool {
    let mut run = 0;
    for c in text.chars() {
        if is_target_char(c) {
            run += 1;
            if run >= 2 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// A word that mixes Ukrainian and Latin letters, usually a transliteration typo.
pub fn is_mixed_word(word: &str) -> bool {
    has_target_alphabet(word) && has_latin(word)
}

/// Checks if any alphabetic word of the phrase mixes both alphabets.
///
/// Words are maximal runs of alphabetic characters, so markup such as `<i>`
/// is never glued onto a neighbouring Cyrillic word.
pub fn has_mixed_word(phrase: &str) -> bool {
    words(phrase).any(is_mixed_word)
}

/// Iterates over maximal runs of alphabetic characters.
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
}
