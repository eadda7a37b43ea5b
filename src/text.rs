//! Text formatting functions for user-facing output
//!
//! Provides pure functions for common string transformations:
//! - `to_title_case`: Uppercase the first letter of each space-delimited word
//! - `split_lines`: Split text into lines on `\n` or `\r\n` boundaries
//! - `plural`: Append a plural suffix to a word based on a count
//!
//! # Design Principles
//!
//! Functions in this module follow functional programming principles:
//! - Pure functions with no side effects
//! - No I/O operations
//! - Stateless transformations
//! - Testable without dependencies
//!
//! # Examples
//!
//! ```
//! use textnum::text::{to_title_case, split_lines, plural};
//!
//! assert_eq!(to_title_case("hello world"), "Hello World");
//! assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b"]);
//! assert_eq!(plural("cat", 2), "cats");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for matching a line boundary: a line feed with an optional
/// preceding carriage return. A lone `\r` is not a boundary.
static LINE_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("Valid regex pattern"));

/// Pure: Return the string with only the first letter of each word uppercased
///
/// The input is lowercased in full, split on single space characters, and
/// each word's first character is uppercased before rejoining with single
/// spaces. Words are defined purely by the space delimiter: there is no
/// Unicode word segmentation and no trimming, so leading, trailing, or
/// repeated spaces produce empty words that pass through unchanged.
///
/// # Arguments
///
/// * `input` - The string to title-case; the empty string maps to itself
///
/// # Returns
///
/// The title-cased string
///
/// # Examples
///
/// ```
/// use textnum::text::to_title_case;
///
/// assert_eq!(to_title_case("hello world"), "Hello World");
/// assert_eq!(to_title_case("HELLO"), "Hello");
/// assert_eq!(to_title_case("a  b"), "A  B");
/// assert_eq!(to_title_case(""), "");
/// ```
pub fn to_title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, leaving the rest as-is
///
/// An empty word stays empty.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pure: Split a string into a vector of lines
///
/// Lines are delimited by `\n` or `\r\n`. If the input ends with a line
/// boundary, the resulting trailing empty line is removed; only one such
/// trailing empty line is removed, so `"a\n\n"` keeps its interior blank
/// line.
///
/// # Arguments
///
/// * `input` - The text to split; the empty string yields no lines
///
/// # Returns
///
/// The lines of the input, without their terminating boundaries
///
/// # Examples
///
/// ```
/// use textnum::text::split_lines;
///
/// assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = LINE_BOUNDARY_REGEX
        .split(input)
        .map(str::to_string)
        .collect();

    // Remove last line (if empty)
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

/// Pure: Pluralize a word based on whether the count is 1 or something else
///
/// Words ending in `"ss"` take an `"es"` suffix ("Miss" becomes "Misses");
/// everything else takes `"s"`. This is a narrow heuristic, not English
/// pluralization - it is only correct for the vocabulary its callers use
/// and is not guaranteed to work for other words.
///
/// # Arguments
///
/// * `word` - The singular form of the word
/// * `count` - The count the word describes
///
/// # Returns
///
/// The word, pluralized unless `count` is 1
///
/// # Examples
///
/// ```
/// use textnum::text::plural;
///
/// assert_eq!(plural("cat", 1), "cat");
/// assert_eq!(plural("cat", 2), "cats");
/// assert_eq!(plural("Miss", 2), "Misses");
/// ```
pub fn plural(word: &str, count: u64) -> String {
    if count == 1 {
        return word.to_string();
    }
    if word.ends_with("ss") {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}
