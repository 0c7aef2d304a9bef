use memchr::memmem;

/// Finds the first occurrence of `sub` within `s`.
///
/// The comparison is byte exact (case sensitive).
/// The returned index is a byte offset into `s`.
/// If `sub` is empty, this returns `Some(0)`.
///
/// The search runs in time linear to `s.len() + sub.len()`,
/// no matter how adversarial the haystack is.
pub fn find<T1, T2>(s: T1, sub: T2) -> Option<usize>
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    memmem::find(s.as_ref(), sub.as_ref())
}

/// Returns `true` if `sub` occurs within `s`.
///
/// This is a convenience wrapper around [`find`].
pub fn submatch<T1, T2>(s: T1, sub: T2) -> bool
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    find(s, sub).is_some()
}

/// Finds the first match of any substring from `sub_iter` within `s`.
///
/// The returned index is a byte offset into `s`.
/// Iteration order decides which candidate is considered first.
pub fn find_any<T, I>(s: T, sub_iter: I) -> Option<usize>
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    let haystack = s.as_ref();
    sub_iter.into_iter().find_map(|sub| find(haystack, sub))
}

/// Returns `true` if any item produced by `sub_iter` occurs within `s`.
///
/// Iteration order does not matter for the result, only for the amount of work performed.
pub fn submatch_any<T, I>(s: T, sub_iter: I) -> bool
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    find_any(s, sub_iter).is_some()
}
