//! C string-literal escaping.
//!
//! The generated source wraps each asset line in a double-quoted C string
//! fragment, so backslashes and double quotes in the content must be
//! escaped before emission.

use std::borrow::Cow;

use memchr::memchr2;

/// Escape text for embedding inside a double-quoted C string literal.
///
/// Replaces each backslash with `\\` and each double quote with `\"` in a
/// single pass. Returns the input unchanged (borrowed) when it contains
/// neither character, which is the common case for HTML and PEM assets.
///
/// Escaping is not idempotent: applying it twice double-escapes the
/// backslashes it introduced. Callers apply it exactly once per document.
///
/// # Examples
///
/// ```
/// use asset2c::escape;
///
/// assert_eq!(escape(r#"<a href="/on">"#), r#"<a href=\"/on\">"#);
/// assert_eq!(escape("plain text"), "plain text");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if memchr2(b'\\', b'"', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
