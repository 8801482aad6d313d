use crate::parsers::text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(text::tokenize("").is_empty());
        assert!(text::tokenize("   \n\t  ").is_empty());
        assert!(text::tokenize("... !!! --").is_empty());
    }

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            text::tokenize("Hello, World! This is a TEST."),
            vec!["hello", "world", "this", "is", "a", "test"]
        );
    }

    #[test]
    fn test_apostrophes_and_underscores_kept() {
        assert_eq!(
            text::tokenize("Don't split snake_case or 'quoted' words"),
            vec!["don't", "split", "snake_case", "or", "'quoted'", "words"]
        );
    }

    #[test]
    fn test_hyphens_and_urls_split() {
        assert_eq!(
            text::tokenize("state-of-the-art https://example.com/a"),
            vec!["state", "of", "the", "art", "https", "example", "com", "a"]
        );
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(
            text::tokenize("Caf\u{e9} \u{dc}ber na\u{ef}ve 2024"),
            vec!["caf\u{e9}", "\u{fc}ber", "na\u{ef}ve", "2024"]
        );
    }

    #[test]
    fn test_marks_and_connectors_split_words() {
        // decomposed diaeresis is a combining mark, not a letter
        assert_eq!(text::tokenize("nai\u{308}ve"), vec!["nai", "ve"]);
        // undertie is connector punctuation
        assert_eq!(text::tokenize("a\u{203f}b"), vec!["a", "b"]);
    }

    #[test]
    fn test_numeric_symbols_join_words() {
        assert_eq!(text::tokenize("x\u{bd}y"), vec!["x\u{bd}y"]);
        assert_eq!(text::tokenize("\u{2163} \u{b2}"), vec!["\u{2173}", "\u{b2}"]);
    }

    #[test]
    fn test_tokenize_segments_separates_segments() {
        assert_eq!(
            text::tokenize_segments(["end", "start"]),
            vec!["end", "start"]
        );
        assert!(text::tokenize_segments(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_token_count_for_long_text() {
        let input = "word ".repeat(1000);
        let tokens = text::tokenize(&input);
        assert_eq!(tokens.len(), 1000);
        assert!(tokens.iter().all(|t| t == "word"));
    }
}
