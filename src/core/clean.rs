//! Value sanitization for the tagging tool's `key=value,key=value` payload.

/// Clean one free-text value.
///
/// Commas and equals signs are escaped with `^` so the tool does not split
/// on them (one that already follows `^` is left alone, so cleaning twice
/// changes nothing), newlines become spaces, the typographic apostrophe (U+2019) is
/// folded to `'`, whitespace is trimmed and collapsed, and `...` becomes `…`.
///
/// ```
/// use cbztag::clean;
///
/// assert_eq!(clean("  Hero,  Vol. 5 "), "Hero^, Vol. 5");
/// assert_eq!(clean("a=b\nc..."), "a^=b c…");
/// ```
pub fn clean(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            ',' | '=' if !escaped.ends_with('^') => {
                escaped.push('^');
                escaped.push(c);
            }
            '\n' => escaped.push(' '),
            '\u{2019}' => escaped.push('\''),
            _ => escaped.push(c),
        }
    }
    escaped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("...", "\u{2026}")
}
