//! Text cleanup and sentence segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("pattern must compile"));
static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[A-Za-z0-9$_@.&+!*(),%/-]+").expect("pattern must compile"));
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("pattern must compile"));
static ELLIPSIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").expect("pattern must compile"));
static REPEATED_BANG: Lazy<Regex> = Lazy::new(|| Regex::new(r"!{2,}").expect("pattern must compile"));
static REPEATED_QUESTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?{2,}").expect("pattern must compile"));
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?;:'"()-]"#).expect("pattern must compile"));
static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,!?;:])").expect("pattern must compile"));
static PUNCT_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.,!?;:])\s*").expect("pattern must compile"));

/// Normalizes raw text before analysis: collapses whitespace, strips URLs
/// and email addresses, de-duplicates repeated punctuation, and fixes
/// spacing around punctuation.
pub fn clean_text(text: &str) -> String {
    let text = WHITESPACE.replace_all(text, " ");
    let text = URL.replace_all(&text, "");
    let text = EMAIL.replace_all(&text, "");
    let text = ELLIPSIS.replace_all(&text, "...");
    let text = REPEATED_BANG.replace_all(&text, "!");
    let text = REPEATED_QUESTION.replace_all(&text, "?");
    let text = SPECIAL_CHARS.replace_all(&text, "");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = PUNCT_SPACING.replace_all(&text, "${1} ");
    text.trim().to_string()
}

static SENTENCE_CHUNK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("pattern must compile"));

/// Splits text into sentences and keeps the meaningful ones: at least
/// three words, not a bare number.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_CHUNK
        .find_iter(text)
        .filter_map(|chunk| {
            let sentence = chunk.as_str().trim();
            if sentence.split_whitespace().count() < 3 {
                return None;
            }
            let stripped: String = sentence
                .chars()
                .filter(|c| !matches!(c, ' ' | '.' | '!' | '?'))
                .collect();
            if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            Some(sentence.to_string())
        })
        .collect()
}
