use serde::{Deserialize, Serialize};
use std::fmt;
use uaprobe_utils::str::find;

/// A `major.minor.patch` version number as found in a [`UserAgent`](super::UserAgent).
///
/// Versions which could not be determined are all zero,
/// use [`Version::is_unknown`] to check for it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version {
    pub major: usize,
    pub minor: usize,
    pub patch: usize,
}

impl Version {
    /// The zero version, used for versions which could not be determined.
    pub const UNKNOWN: Self = Self::new(0, 0, 0);

    /// Create a new [`Version`].
    #[must_use]
    pub const fn new(major: usize, minor: usize, patch: usize) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns `true` if this is the zero version,
    /// which is what is reported for versions that could not be determined.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }

    /// Parse the version found directly after the first occurrence of `token` in `ua`.
    ///
    /// Returns `None` if the token is not present,
    /// or when it is not immediately followed by a digit.
    /// Only the first occurrence of `token` is considered.
    #[must_use]
    pub fn find_after(ua: &str, token: &str) -> Option<Self> {
        let offset = find(ua, token)? + token.len();
        Self::parse_prefix(ua.as_bytes().get(offset..)?)
    }

    /// Parse a version from the start of `s`.
    ///
    /// Up to three decimal segments are read, separated by a single
    /// `.`, `_` or `/` byte. Parsing stops at any other byte,
    /// missing segments are zero. Digit runs too large for a `usize` saturate.
    ///
    /// Returns `None` if `s` does not start with a digit.
    #[must_use]
    pub fn parse_prefix(s: &[u8]) -> Option<Self> {
        let mut segments = [0usize; 3];
        let mut rest = s;

        for (index, segment) in segments.iter_mut().enumerate() {
            let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
            if len == 0 {
                if index == 0 {
                    return None;
                }
                break;
            }

            let (digits, tail) = rest.split_at(len);
            *segment = digits.iter().fold(0usize, |acc, b| {
                acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
            });

            match tail.split_first() {
                Some((b'.' | b'_' | b'/', tail)) => rest = tail,
                _ => break,
            }
        }

        let [major, minor, patch] = segments;
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
