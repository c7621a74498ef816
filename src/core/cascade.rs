//! Pattern cascade: ordered span rules that locate Ukrainian text in a line.
//!
//! Rules are tried in priority order. Every rule's regex exposes the
//! candidate text as capture group 1.
//!
//! - **Additive** rules (interpolation-adjacent text) always run. Their
//!   matches claim the span they cover.
//! - **Exclusive** rules (string literals, element text) follow. The first
//!   exclusive rule with a match outside the claimed spans wins and the
//!   cascade stops there; lower rules never see the line.
//!
//! The regexes are lexical heuristics, not a grammar. They accept a bounded
//! rate of false positives and misses.

use std::ops::Range;

use anyhow::{Context, Result};
use regex::Regex;

use super::{
    alphabet::{has_mixed_word, is_target_char},
    cleaner::{Cleaner, INLINE_TAG_PATTERN, PLACEHOLDER_PATTERN},
};

/// Ukrainian letters as a regex class body.
const TARGET_CLASS: &str = "А-Яа-яІіЇїЄєҐґ";

/// Text that cannot cross a quote, tag or brace boundary.
const TEXT_CLASS: &str = r#"[^<>{}"'`]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    Additive,
    Exclusive,
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: &'static str,
    pub regex: Regex,
    pub precedence: Precedence,
    /// Whether matches of this rule get homoglyph repair.
    pub normalize: bool,
}

impl PatternRule {
    pub fn new(
        name: &'static str,
        pattern: &str,
        precedence: Precedence,
        normalize: bool,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid pattern for rule '{}': {}", name, pattern))?;
        Ok(Self {
            name,
            regex,
            precedence,
            normalize,
        })
    }
}

/// One cleaned phrase found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub pattern: &'static str,
    pub mixed: bool,
    /// Byte offset in the line of the first Ukrainian letter of the match.
    pub start: usize,
}

#[derive(Debug, Clone)]
pub struct PatternCascade {
    rules: Vec<PatternRule>,
}

impl PatternCascade {
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn extract(&self, line: &str, cleaner: &Cleaner) -> Vec<Extraction> {
        let mut claimed: Vec<Range<usize>> = Vec::new();
        let mut extractions = Vec::new();

        for rule in &self.rules {
            let matches: Vec<(Range<usize>, Range<usize>)> = rule
                .regex
                .captures_iter(line)
                .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.range())))
                .filter(|(_, text)| !claimed.iter().any(|c| overlaps(c, text)))
                .collect();

            if matches.is_empty() {
                continue;
            }

            for (whole, text) in matches {
                let start = first_target_offset(line, &text);
                let cleaned = cleaner.clean(&line[text], rule.normalize);
                for phrase in cleaner.phrases(&cleaned) {
                    extractions.push(Extraction {
                        mixed: has_mixed_word(&phrase),
                        text: phrase,
                        pattern: rule.name,
                        start,
                    });
                }
                claimed.push(whole);
            }

            if rule.precedence == Precedence::Exclusive {
                break;
            }
        }

        extractions
    }
}

impl Default for PatternCascade {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

/// The built-in rules, highest priority first.
pub fn default_rules() -> Vec<PatternRule> {
    let t = TARGET_CLASS;
    let txt = TEXT_CLASS;
    let ph = PLACEHOLDER_PATTERN;
    let inline = INLINE_TAG_PATTERN;

    vec![
        // Привіт, {{ name }} / {{ n }} файлів / Всього ${n} записів
        builtin(
            "interpolation_adjacent",
            &format!(
                r"({txt}*[{t}]{{2}}{txt}*(?:(?:{ph}){txt}*)+|(?:(?:{ph}){txt}*?)+[{t}]{{2}}{txt}*)"
            ),
            Precedence::Additive,
            false,
        ),
        // Нові повідомлення <span class="badge">{{ count }}</span>
        builtin(
            "text_before_badge",
            &format!(
                r"({txt}*?[{t}]{{2}}{txt}*?)\s*<[A-Za-z][\w-]*(?:\s[^<>]*)?>\s*(?:{ph})\s*</[A-Za-z][\w-]*\s*>"
            ),
            Precedence::Additive,
            false,
        ),
        // An opening quote glued to a letter is an apostrophe: пам'ять
        builtin(
            "single_quotes",
            &format!(r"(?:^|[^\p{{L}}\\])'((?:[^'\\]|\\.)*?[{t}]{{2}}(?:[^'\\]|\\.)*)'"),
            Precedence::Exclusive,
            true,
        ),
        builtin(
            "double_quotes",
            &format!(r#""((?:[^"\\]|\\.)*?[{t}]{{2}}(?:[^"\\]|\\.)*)""#),
            Precedence::Exclusive,
            true,
        ),
        builtin(
            "backticks",
            &format!(r"`((?:[^`\\]|\\.)*?[{t}]{{2}}(?:[^`\\]|\\.)*)`"),
            Precedence::Exclusive,
            true,
        ),
        // <p>Текст</p>: needs both a `>` and a `<`
        builtin(
            "html_text",
            &format!(r">((?:[^<>{{}}]|{inline})*?[{t}]{{2}}(?:[^<>{{}}]|{inline})*)<"),
            Precedence::Exclusive,
            true,
        ),
    ]
}

// Built-in patterns are literals.
fn builtin(
    name: &'static str,
    pattern: &str,
    precedence: Precedence,
    normalize: bool,
) -> PatternRule {
    PatternRule::new(name, pattern, precedence, normalize).unwrap()
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn first_target_offset(line: &str, text: &Range<usize>) -> usize {
    line[text.clone()]
        .char_indices()
        .find(|(_, c)| is_target_char(*c))
        .map(|(i, _)| text.start + i)
        .unwrap_or(text.start)
}
