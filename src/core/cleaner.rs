//! Markup-aware cleaning of raw matches.
//!
//! A raw match is whatever a cascade rule captured: a string literal body,
//! element text, or text next to an interpolation. Cleaning removes the code
//! artifacts from it while leaving inline formatting tags intact, and then
//! splits the result into prose phrases.
//!
//! Cleaning never fails. Unbalanced quotes or tags simply survive as text
//! or split the phrase where they stand.

use std::{collections::HashSet, sync::LazyLock};

use regex::{Captures, Regex};

use super::alphabet::{has_target_alphabet, has_target_run};

/// Inline formatting tags kept verbatim in extracted text.
pub const INLINE_TAGS: &[&str] = &["br", "b", "strong", "i", "em", "span"];

/// Regex fragment matching one allow-listed inline tag (opening or closing).
pub(crate) const INLINE_TAG_PATTERN: &str = r"</?(?:br|b|strong|i|em|span)\b[^<>]*>";

/// Regex fragment matching one interpolation placeholder:
/// `{{ expr }}` in templates, `${expr}` in template strings.
pub(crate) const PLACEHOLDER_PATTERN: &str =
    r"\{\{[^{}]*\}\}|\$\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).unwrap());

static HTML_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

// Capture group 1: tag name
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?([A-Za-z][A-Za-z0-9:._-]*)(?:\s[^<>]*)?/?>").unwrap()
});

// Capture group 1: entity name or numeric reference
static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap()
});

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Prose: letters, digits, spaces, sentence punctuation, and inline tags.
static PHRASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?:[\p{{L}}\p{{M}}\p{{N}}\s,.:;!?()'‘’ʼ«»“”„"%№/+&…–—\-]|{})+"#,
        INLINE_TAG_PATTERN
    ))
    .unwrap()
});

#[derive(Debug, Clone)]
pub struct Cleaner {
    /// Global switch for Latin-to-Cyrillic homoglyph repair.
    fix_homoglyphs: bool,
    /// Phrases that are never reported.
    ignore_texts: HashSet<String>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(true, HashSet::new())
    }
}

impl Cleaner {
    pub fn new(fix_homoglyphs: bool, ignore_texts: HashSet<String>) -> Self {
        Self {
            fix_homoglyphs,
            ignore_texts,
        }
    }

    /// Cleans one raw match.
    ///
    /// `normalize` is the calling rule's homoglyph setting; repair happens
    /// only when both it and the global switch are on.
    pub fn clean(&self, raw: &str, normalize: bool) -> String {
        let text = unescape_quotes(raw);
        let text = remove_placeholders(&text);
        let text = strip_tags(&text);
        let text = decode_entities(&text);
        let text = if normalize && self.fix_homoglyphs {
            fix_homoglyphs(&text)
        } else {
            text
        };
        collapse_whitespace(&text)
    }

    /// Splits cleaned text into phrases that still carry Ukrainian text.
    pub fn phrases(&self, cleaned: &str) -> Vec<String> {
        PHRASE_REGEX
            .find_iter(cleaned)
            .map(|m| m.as_str().trim())
            .filter(|p| has_target_run(p))
            .filter(|p| !self.ignore_texts.contains(*p))
            .map(String::from)
            .collect()
    }
}

fn unescape_quotes(text: &str) -> String {
    text.replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("\\`", "`")
}

pub fn remove_placeholders(text: &str) -> String {
    PLACEHOLDER_REGEX.replace_all(text, "").into_owned()
}

/// Unwraps every tag outside [`INLINE_TAGS`], leaving its content in place.
pub fn strip_tags(text: &str) -> String {
    let text = HTML_COMMENT_REGEX.replace_all(text, "");
    TAG_REGEX
        .replace_all(&text, |caps: &Captures| {
            let name = caps[1].to_ascii_lowercase();
            if INLINE_TAGS.contains(&name.as_str()) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Decodes character references. Unknown named entities become a space.
pub fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity.strip_prefix('#') {
                Some(number) => numeric_reference(number),
                None => named_entity(entity),
            };
            decoded.unwrap_or(' ').to_string()
        })
        .into_owned()
}

fn numeric_reference(number: &str) -> Option<char> {
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse().ok()?,
    };
    char::from_u32(code).filter(|c| !c.is_control())
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "nbsp" | "ensp" | "emsp" | "thinsp" => ' ',
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        "laquo" => '«',
        "raquo" => '»',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "rsquo" => '’',
        "lsquo" => '‘',
        "ldquo" => '“',
        "rdquo" => '”',
        "bdquo" => '„',
        "numero" => '№',
        "copy" => '©',
        _ => return None,
    };
    Some(c)
}

/// Replaces Latin `i`/`I` with Ukrainian `і`/`І` inside words that already
/// contain a Ukrainian letter. Pure Latin words are left alone.
pub fn fix_homoglyphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphabetic() {
            word.push(c);
            continue;
        }
        push_word(&mut out, &word);
        word.clear();
        out.push(c);
    }
    push_word(&mut out, &word);

    out
}

fn push_word(out: &mut String, word: &str) {
    if has_target_alphabet(word) {
        out.extend(word.chars().map(|c| match c {
            'i' => 'і',
            'I' => 'І',
            c => c,
        }));
    } else {
        out.push_str(word);
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}
