//! Parsing of human-formatted counts such as star totals.

/// Grouping separators stripped before parsing.
const GROUP_SEPARATORS: &[char] = &[',', '_'];

/// Parses a count like `"1,234"` into an integer.
///
/// Absent input, empty text, and anything that is not a plain unsigned
/// integer once separators are removed all yield `0`. This never fails.
///
/// # Arguments
///
/// * `text` - The element text, or `None` when no element was found
pub fn parse_count(text: Option<&str>) -> u64 {
    let Some(text) = text else {
        return 0;
    };

    let digits: String = text
        .trim()
        .chars()
        .filter(|c| !GROUP_SEPARATORS.contains(c))
        .collect();

    digits.parse::<u64>().unwrap_or(0)
}
