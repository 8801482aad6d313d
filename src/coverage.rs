use crate::config::KeywordMatching;
use std::collections::HashSet;

/// Keywords that never occur among the word tokens.
///
/// Input order and duplicates of `keywords` are kept; entries are returned
/// as declared, even when matched case-insensitively.
pub fn missing_keywords<K, W>(
    keywords: &[K],
    words: &[W],
    matching: KeywordMatching,
) -> Vec<String>
where
    K: AsRef<str>,
    W: AsRef<str>,
{
    let present: HashSet<&str> = words.iter().map(|w| w.as_ref()).collect();

    keywords
        .iter()
        .map(|kw| kw.as_ref())
        .filter(|kw| match matching {
            KeywordMatching::Exact => !present.contains(kw),
            KeywordMatching::CaseInsensitive => !present.contains(kw.to_lowercase().as_str()),
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keyword_reported() {
        let missing = missing_keywords(
            &["alpha", "beta"],
            &["some", "alpha", "text"],
            KeywordMatching::Exact,
        );
        assert_eq!(missing, vec!["beta"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let missing = missing_keywords(
            &["z", "present", "a", "z"],
            &["present"],
            KeywordMatching::CaseInsensitive,
        );
        assert_eq!(missing, vec!["z", "a", "z"]);
    }

    #[test]
    fn test_case_handling() {
        let words = ["rust", "parsing"];
        let keywords = ["Rust", "parsing", "HTML"];

        assert_eq!(
            missing_keywords(&keywords, &words, KeywordMatching::CaseInsensitive),
            vec!["HTML"]
        );
        assert_eq!(
            missing_keywords(&keywords, &words, KeywordMatching::Exact),
            vec!["Rust", "HTML"]
        );
    }

    #[test]
    fn test_multi_word_keyword_never_matches_single_tokens() {
        let missing = missing_keywords(
            &["web scraping"],
            &["web", "scraping"],
            KeywordMatching::CaseInsensitive,
        );
        assert_eq!(missing, vec!["web scraping"]);
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(missing_keywords(&none, &["a"], KeywordMatching::Exact).is_empty());
        assert_eq!(
            missing_keywords(&["a"], &none, KeywordMatching::Exact),
            vec!["a"]
        );
    }
}
