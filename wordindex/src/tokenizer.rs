use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Shortest token, in characters, that gets indexed or queried.
pub const MIN_TERM_LEN: usize = 3;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
}

/// Split a raw line into lowercase alphanumeric tokens using NFKC normalization.
/// Punctuation and whitespace separate tokens and are dropped.
pub fn sanitize_line(line: &str) -> Vec<String> {
    let normalized = line.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

/// Tokens of `line` long enough to be indexed.
pub fn index_terms(line: &str) -> Vec<String> {
    sanitize_line(line)
        .into_iter()
        .filter(|t| is_indexable(t))
        .collect()
}

pub fn is_indexable(token: &str) -> bool {
    token.chars().count() >= MIN_TERM_LEN
}

/// The single indexable term of a user-supplied word, split the way indexed text
/// is split ("Don't" -> "don"). `None` unless exactly one indexable term remains.
pub fn normalize_word(word: &str) -> Option<String> {
    let mut terms = index_terms(word);
    if terms.len() == 1 { terms.pop() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sanitize() {
        let t = sanitize_line("Hello, World! It's 2024.");
        assert_eq!(t, vec!["hello", "world", "it", "s", "2024"]);
    }

    #[test]
    fn short_tokens_are_not_indexable() {
        let t = index_terms("a bb ccc dddd");
        assert_eq!(t, vec!["ccc", "dddd"]);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(is_indexable("çéü"));
        assert!(!is_indexable("çé"));
    }

    #[test]
    fn normalize_single_word() {
        assert_eq!(normalize_word("Rust!").as_deref(), Some("rust"));
        assert_eq!(normalize_word("Don't").as_deref(), Some("don"));
        assert_eq!(normalize_word("well-known"), None);
        assert_eq!(normalize_word("it"), None);
        assert_eq!(normalize_word("?!"), None);
    }
}
