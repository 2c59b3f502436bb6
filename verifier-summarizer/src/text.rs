//! Text preparation for summarization

use std::sync::LazyLock;

use regex::Regex;

/// Inputs with this many words or fewer are not worth summarizing
pub const MIN_SUMMARY_WORDS: usize = 20;

/// Characters of cleaned text sent to the model
pub const MAX_SUMMARY_INPUT_CHARS: usize = 1024;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("Invalid URL regex"));

static NON_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("Invalid non-word regex"));

/// Remove URLs, replace non-word characters with spaces, lowercase, and
/// collapse whitespace
pub fn clean_text(text: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(text, "");
    let words_only = NON_WORD_PATTERN.replace_all(&without_urls, " ");
    words_only
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean `text` and cut it to the model input size.
///
/// Returns `None` when the cleaned text is too short to summarize.
pub fn prepare_summary_input(text: &str) -> Option<String> {
    let cleaned = clean_text(text);
    if cleaned.split_whitespace().count() <= MIN_SUMMARY_WORDS {
        return None;
    }

    let truncated = match cleaned.char_indices().nth(MAX_SUMMARY_INPUT_CHARS) {
        Some((idx, _)) => &cleaned[..idx],
        None => cleaned.as_str(),
    };
    Some(truncated.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("Breaking: PM visits https://t.co/xyz Delhi!! (Update)"),
            "breaking pm visits delhi update"
        );
    }

    #[test]
    fn test_short_text_is_not_summarized() {
        let twenty_words = vec!["word"; 20].join(" ");
        assert_eq!(prepare_summary_input(&twenty_words), None);
        assert_eq!(prepare_summary_input("https://only.a/link"), None);
    }

    #[test]
    fn test_long_text_is_truncated() {
        let text = vec!["headline"; 500].join(", ");
        let input = prepare_summary_input(&text).unwrap();

        assert!(input.chars().count() <= MAX_SUMMARY_INPUT_CHARS);
        assert!(input.starts_with("headline headline"));
        assert!(!input.ends_with(' '));
    }
}
