//! Token trimming and case-insensitive deduplication.
//!
//! The same rule applies when a token is added to a list and when the
//! engine compiles or lints, so the UI list and the compiled prompt never
//! disagree.

fn same_token(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Whether `list` already holds `token` (case-insensitive, after trimming).
pub fn contains_token<S: AsRef<str>>(list: &[S], token: &str) -> bool {
    let token = token.trim();
    list.iter().any(|existing| same_token(existing.as_ref(), token))
}

/// Trim `raw` and append it to `list` unless it is blank or already present.
///
/// Returns `true` if the token was appended.
pub fn push_token(list: &mut Vec<String>, raw: &str) -> bool {
    let token = raw.trim();
    if token.is_empty() || contains_token(list.as_slice(), token) {
        return false;
    }
    list.push(token.to_string());
    true
}

/// Trim every token, drop blanks, and keep only the first occurrence of each
/// case-insensitive duplicate with its original casing and input order.
pub fn normalize<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for token in tokens {
        push_token(&mut out, token.as_ref());
    }
    out
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whether `needle` occurs in `haystack` as a whole-word phrase, ignoring case
/// and punctuation.
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    let needle = words(needle);
    if needle.is_empty() {
        return false;
    }
    words(haystack)
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}
