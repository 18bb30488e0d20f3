//! Longest-common-prefix selection among sibling edge labels.

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// Always lands on a char boundary of both strings.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Find the candidate sharing the longest prefix with `word`.
///
/// Returns the shared prefix (a slice of `word`) and the matching candidate,
/// or `("", None)` when `word` is empty or no candidate starts with the same
/// character. Sibling labels never share a leading character, so at most one
/// candidate can match; debug builds assert this, release builds take the
/// first match.
///
/// # Example
///
/// ```
/// use radixtree_r::longest_prefix;
///
/// assert_eq!(longest_prefix("hello", ["help", "world"]), ("hel", Some("help")));
/// assert_eq!(longest_prefix("x", ["y"]), ("", None));
/// ```
pub fn longest_prefix<'w, 'c, I>(word: &'w str, candidates: I) -> (&'w str, Option<&'c str>)
where
    I: IntoIterator<Item = &'c str>,
{
    let Some(first) = word.chars().next() else {
        return ("", None);
    };

    let mut matches = candidates.into_iter().filter(|c| c.starts_with(first));
    let Some(candidate) = matches.next() else {
        return ("", None);
    };
    debug_assert!(
        matches.next().is_none(),
        "sibling labels share the leading character {:?}",
        first
    );

    let len = common_prefix_len(word, candidate);
    (&word[..len], Some(candidate))
}
