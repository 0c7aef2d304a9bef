//! string utilities

mod search;
#[doc(inline)]
pub use search::{find, find_any, submatch, submatch_any};

/// Returns the longest prefix of `s` of at most `max` bytes
/// which still ends on a `char` boundary.
///
/// A `max` of `0` disables the limit.
#[must_use]
pub fn truncate_at_char_boundary(s: &str, max: usize) -> &str {
    if max == 0 || s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
