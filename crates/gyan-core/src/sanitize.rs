//! Excerpt sanitization.
//!
//! The content API returns excerpts with inline markup (`<p>`, `<b>`, WordPress
//! "read more" spans). Display surfaces want plain text, so tags are removed
//! with a narrow tag-matching pattern. This is deliberately not an HTML parser;
//! nothing else in the crate needs one.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches a tag, including an unterminated one at the end of the input.
#[allow(clippy::expect_used)]
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern compiles"));

/// Removes markup tags from `input`.
///
/// Pure and idempotent: the output never contains `<`, so a second pass is a
/// no-op. Entities and bare `>` characters are left untouched.
#[must_use]
pub fn strip_tags(input: &str) -> String {
    TAG_PATTERN.replace_all(input, "").into_owned()
}

/// Strips tags from an optional excerpt; absent input yields an empty string.
#[must_use]
pub fn clean_excerpt(input: Option<&str>) -> String {
    input.map(strip_tags).unwrap_or_default()
}
