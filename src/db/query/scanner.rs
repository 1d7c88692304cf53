/// Placeholder marker used by every supported engine's positional binding.
pub const PLACEHOLDER: char = '?';

/// Byte offsets of every placeholder marker in `text`, in ascending order.
///
/// Pure function of the text; a `?` inside a string literal or comment is
/// counted like any other (known limitation, matched by the splitter).
pub fn scan(text: &str) -> Vec<usize> {
    text.char_indices()
        .filter(|(_, c)| *c == PLACEHOLDER)
        .map(|(i, _)| i)
        .collect()
}

/// Number of placeholder markers in `text`.
pub fn count(text: &str) -> usize {
    text.chars().filter(|c| *c == PLACEHOLDER).count()
}
