//! Volume-number extraction from freeform titles and file names.
//!
//! A title is scanned left to right; at each position the markers are tried
//! in order `v<digits>`, `volume <digits>`, `vol[.] <digits>`, `#<digits>`.
//! The first hit wins. Matching is ASCII case-insensitive and the digit run
//! is returned verbatim, so `v09` yields `"09"`.
use std::cmp::Ordering;

/// Extract the volume token from `title`, if any.
///
/// ```
/// use cbztag::extract_volume;
///
/// assert_eq!(extract_volume("Volume 3"), Some("3"));
/// assert_eq!(extract_volume("Vol. 5"), Some("5"));
/// assert_eq!(extract_volume("Berserk v09"), Some("09"));
/// assert_eq!(extract_volume("Chapter 7"), None);
/// ```
pub fn extract_volume(title: &str) -> Option<&str> {
    title
        .char_indices()
        .find_map(|(start, _)| match_marker(&title[start..]))
}

fn match_marker(s: &str) -> Option<&str> {
    if let Some(digits) = strip_prefix_ignore_case(s, "v").and_then(leading_digits) {
        return Some(digits);
    }
    if let Some(digits) = strip_prefix_ignore_case(s, "volume")
        .and_then(after_whitespace)
        .and_then(leading_digits)
    {
        return Some(digits);
    }
    if let Some(rest) = strip_prefix_ignore_case(s, "vol") {
        let rest = rest.strip_prefix('.').unwrap_or(rest);
        if let Some(digits) = after_whitespace(rest).and_then(leading_digits) {
            return Some(digits);
        }
    }
    s.strip_prefix('#').and_then(leading_digits)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

fn after_whitespace(s: &str) -> Option<&str> {
    let rest = s.trim_start();
    (rest.len() < s.len()).then_some(rest)
}

fn leading_digits(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    (end > 0).then(|| &s[..end])
}

/// Batch ordering key derived from a file name.
///
/// Numbered names sort by numeric value (`"9"` and `"09"` rank equal),
/// names without a volume sort after every numbered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeRank<'a> {
    Numbered(&'a str),
    Unnumbered,
}

impl<'a> VolumeRank<'a> {
    pub fn of(name: &'a str) -> Self {
        match extract_volume(name) {
            Some(digits) => {
                let trimmed = digits.trim_start_matches('0');
                VolumeRank::Numbered(trimmed)
            }
            None => VolumeRank::Unnumbered,
        }
    }
}

impl Ord for VolumeRank<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Leading zeros are already stripped, so length orders magnitude
            (VolumeRank::Numbered(a), VolumeRank::Numbered(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (VolumeRank::Numbered(_), VolumeRank::Unnumbered) => Ordering::Less,
            (VolumeRank::Unnumbered, VolumeRank::Numbered(_)) => Ordering::Greater,
            (VolumeRank::Unnumbered, VolumeRank::Unnumbered) => Ordering::Equal,
        }
    }
}

impl PartialOrd for VolumeRank<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable sort of `items` by the volume found in each item's name.
pub fn sort_by_volume<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| VolumeRank::of(name_of(a)).cmp(&VolumeRank::of(name_of(b))));
}
