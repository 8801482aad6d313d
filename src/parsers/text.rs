use regex::Regex;
use std::sync::OnceLock;

fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[\p{L}\p{N}_']+").unwrap())
}

/// Splits text into lowercase word tokens
///
/// A token is a maximal run of Unicode letters, numbers, underscores and
/// apostrophes. Everything else, combining marks and connector punctuation
/// included, separates tokens and is discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Joins text segments with single spaces and tokenizes the result
pub fn tokenize_segments<I, S>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = segments
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    tokenize(&joined)
}
