//! Regex pattern matching
//!
//! Patterns may be written bare (`^[a-z]+$`) or wrapped in slash delimiters
//! with trailing flags (`/^[a-z]+$/i`). Delimited flags become inline flags,
//! so both spellings compile to the same `Regex`.

use std::borrow::Cow;

use regex::Regex;

/// Flags accepted after a closing delimiter. `u` is a no-op since matching
/// is always Unicode-aware.
const DELIMITER_FLAGS: &str = "imsxuU";

/// Rewrites a slash-delimited pattern into bare regex syntax.
///
/// Anything that is not of the form `/body/flags` is returned unchanged.
pub fn normalize_pattern(pattern: &str) -> Cow<'_, str> {
    let Some(rest) = pattern.strip_prefix('/') else {
        return Cow::Borrowed(pattern);
    };

    let Some(close) = rest.rfind('/') else {
        return Cow::Borrowed(pattern);
    };

    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    if !flags.chars().all(|c| DELIMITER_FLAGS.contains(c)) {
        return Cow::Borrowed(pattern);
    }

    let inline: String = flags.chars().filter(|&c| c != 'u').collect();
    if inline.is_empty() {
        Cow::Borrowed(body)
    } else {
        Cow::Owned(format!("(?{inline}){body}"))
    }
}

/// Compiles a bare or delimited pattern.
///
/// The resulting `Regex` matches anywhere; use `^` and `$` in the pattern
/// to require a full match.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&normalize_pattern(pattern))
}
