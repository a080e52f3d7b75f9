// src/core/sanitize.rs
//
// Field normalizer: total functions from raw cell text to canonical scalars.
// None of these fail; unreadable input maps to a sentinel or empty value.

use crate::config::consts::{UNKNOWN_MARKER, UNKNOWN_SENTINEL};

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "Trinity " → "TRINITY". Idempotent.
pub fn to_enum_case(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Leading integer of `s` ("150cm" → 150). Input containing `sentinel_pattern`,
/// or without a leading digit, yields `sentinel`.
pub fn to_int_or_sentinel(s: &str, sentinel_pattern: &str, sentinel: i32) -> i32 {
    if !sentinel_pattern.is_empty() && s.contains(sentinel_pattern) {
        return sentinel;
    }
    let t = s.trim();
    let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    t[..end].parse().unwrap_or(sentinel)
}

/// `to_int_or_sentinel` with the wiki's "??" marker and -1.
pub fn to_int(s: &str) -> i32 {
    to_int_or_sentinel(s, UNKNOWN_MARKER, UNKNOWN_SENTINEL)
}

pub fn to_bool_from_yes_no(s: &str) -> bool {
    s == "Yes"
}

/// Join child-node texts with newlines, dropping empty parts.
pub fn join_multiline<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Last number printed in `s`, thousands separators dropped:
/// "1,200" → 1200, "Tier 2 x5" → 5. `None` without digits.
pub fn parse_count(s: &str) -> Option<u32> {
    let end = s.rfind(|c: char| c.is_ascii_digit())? + 1;
    let start = s[..end]
        .char_indices()
        .rev()
        .find(|&(_, c)| !(c.is_ascii_digit() || c == ','))
        .map_or(0, |(i, c)| i + c.len_utf8());
    s[start..end]
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .ok()
}

/// Make a locator usable as a file stem: keep the last path segment,
/// replace anything outside `[A-Za-z0-9_-]` with '_'.
pub fn page_file_stem(locator: &str) -> String {
    let last = locator
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(locator);
    let stem: String = last
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let stem = stem.trim_matches('_').to_string();
    if stem.is_empty() { s!("index") } else { stem }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_sentinel_and_unit_suffix() {
        assert_eq!(to_int("??"), -1);
        assert_eq!(to_int("150cm"), 150);
        assert_eq!(to_int(" 17 "), 17);
        assert_eq!(to_int("Unknown"), -1);
        assert_eq!(to_int_or_sentinel("N/A", "N/A", -99), -99);
    }

    #[test]
    fn yes_no_is_exact() {
        assert!(to_bool_from_yes_no("Yes"));
        assert!(!to_bool_from_yes_no("No"));
        assert!(!to_bool_from_yes_no("yes"));
        assert!(!to_bool_from_yes_no(""));
    }

    #[test]
    fn enum_case_is_idempotent() {
        let once = to_enum_case(" Trinity ");
        assert_eq!(once, "TRINITY");
        assert_eq!(to_enum_case(&once), once);
    }

    #[test]
    fn multiline_joins_non_empty_parts() {
        assert_eq!(join_multiline(&["First.", "  ", "Second. "]), "First.\nSecond.");
        assert_eq!(join_multiline::<&str>(&[]), "");
    }

    #[test]
    fn counts_drop_separators() {
        assert_eq!(parse_count("1,200"), Some(1200));
        assert_eq!(parse_count("x5"), Some(5));
        assert_eq!(parse_count("×12"), Some(12));
        assert_eq!(parse_count("Tier 2 Note x5"), Some(5));
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }

    #[test]
    fn locator_to_stem() {
        assert_eq!(page_file_stem("https://bluearchive.wiki/wiki/Characters"), "Characters");
        assert_eq!(page_file_stem("/wiki/Hoshino_(Swimsuit)"), "Hoshino__Swimsuit");
        assert_eq!(page_file_stem("///"), "index");
    }
}
