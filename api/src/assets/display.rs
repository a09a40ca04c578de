//! Shortening helpers for long names and identifiers.

/// Names longer than this are shortened by [`truncate_name`].
pub const NAME_DISPLAY_LIMIT: usize = 32;

/// Keeps the first `head` and last `tail` characters, joined by `...`.
///
/// Strings that already fit in `head + tail` characters are returned as is.
pub fn truncate(s: &str, head: usize, tail: usize) -> String {
    let count = s.chars().count();
    if count <= head + tail {
        return s.to_string();
    }
    let start: String = s.chars().take(head).collect();
    let end: String = s.chars().skip(count - tail).collect();
    format!("{}...{}", start, end)
}

/// Asset names: `6...12`, applied only past [`NAME_DISPLAY_LIMIT`] characters.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_LIMIT {
        truncate(name, 6, 12)
    } else {
        name.to_string()
    }
}

/// Policy ids and fingerprints: `9...4`.
pub fn truncate_id(id: &str) -> String {
    truncate(id, 9, 4)
}
