//! String length validation functions
//!
//! Lengths are counted in characters, not bytes, so `"héllo"` has length 5.

/// Number of characters in `s`
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

/// Validates that `s` has at least `min` characters
pub fn is_min_length(s: &str, min: usize) -> bool {
    char_length(s) >= min
}

/// Validates that `s` has at most `max` characters
pub fn is_max_length(s: &str, max: usize) -> bool {
    char_length(s) <= max
}

/// Validates that `s` has exactly `len` characters
pub fn is_exact_length(s: &str, len: usize) -> bool {
    char_length(s) == len
}

/// Whether `s` is empty or whitespace only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(is_min_length("hello", 3));
        assert!(is_min_length("hel", 3));
        assert!(!is_min_length("hi", 3));

        assert!(is_max_length("hello", 5));
        assert!(!is_max_length("hello!", 5));

        assert!(is_exact_length("abc", 3));
        assert!(!is_exact_length("ab", 3));
        assert!(!is_exact_length("abcd", 3));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(char_length("héllo"), 5);
        assert!(is_max_length("日本語", 3));
        assert!(!is_min_length("日本語", 4));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}
