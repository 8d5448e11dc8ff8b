//! Conversion between the notations a user may type for an emoji and the
//! canonical codepoint key used by the dataset.
//!
//! Three notations are accepted:
//! - a raw glyph sequence, e.g. `😀` or the flag `🇦🇺`
//! - a hyphen-joined hex codepoint sequence, e.g. `1f600` or `1F1E6-1F1FA`
//! - an escape token, e.g. `u1fae9`
//!
//! All of them map to the lowercase, hyphen-joined form (`1f600`, `1f1e6-1f1fa`).

use crate::error::{KitchenError, Result};
use regex::Regex;

/// Separator between codepoints in a multi-codepoint key
pub const KEY_SEPARATOR: char = '-';

lazy_static::lazy_static! {
    static ref ESCAPE_TOKEN: Regex = Regex::new(r"^[uU]([0-9a-fA-F]+)$")
        .expect("escape token pattern is valid");
}

fn codepoints_of(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a glyph sequence (e.g. 😀) to its codepoint key (e.g. `1f600`).
///
/// Each Unicode scalar value becomes lowercase hex without leading zeros,
/// so flags and ZWJ sequences come out as `1f1e6-1f1fa`.
pub fn glyph_to_codepoint(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(KitchenError::InvalidInput(
            "cannot derive a codepoint key from empty text".to_string(),
        ));
    }
    Ok(codepoints_of(text))
}

/// Strip the leading `u` from an escape token such as `u1fae9`.
///
/// Tokens that are not exactly `u` followed by hex digits are returned unchanged.
/// Digit case is preserved.
pub fn unescape_token(token: &str) -> String {
    match ESCAPE_TOKEN.captures(token) {
        Some(caps) => caps[1].to_string(),
        None => token.to_string(),
    }
}

/// Map any accepted notation to the canonical codepoint key.
///
/// Precedence: anything containing `u` is an escape token, anything made only
/// of hex digits and hyphens is already a key, everything else is a glyph sequence.
/// Never fails; the worst case is an unchanged or empty string.
pub fn normalize(arg: &str) -> String {
    if arg.contains('u') {
        match ESCAPE_TOKEN.captures(arg) {
            Some(caps) => caps[1].to_ascii_lowercase(),
            None => arg.to_string(),
        }
    } else if arg
        .chars()
        .all(|c| c.is_ascii_hexdigit() || c == KEY_SEPARATOR)
    {
        arg.to_ascii_lowercase()
    } else {
        codepoints_of(arg)
    }
}

/// Render a codepoint key back into its glyph sequence.
///
/// Returns `None` if the key is empty or any part is not a valid scalar value.
pub fn codepoint_to_glyph(key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    key.split(KEY_SEPARATOR)
        .map(|part| {
            u32::from_str_radix(part, 16)
                .ok()
                .and_then(char::from_u32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scalar_glyph() {
        assert_eq!(glyph_to_codepoint("😀").unwrap(), "1f600");
        assert_eq!(glyph_to_codepoint("©").unwrap(), "a9");
        assert_eq!(glyph_to_codepoint("☕").unwrap(), "2615");
    }

    #[test]
    fn test_no_leading_zeros() {
        for c in ['\u{1}', '\u{7f}', '\u{a9}', '\u{2615}', '\u{1f600}', '\u{10ffff}'] {
            let expected = format!("{:x}", c as u32);
            assert!(!expected.starts_with('0'));
            assert_eq!(glyph_to_codepoint(&c.to_string()).unwrap(), expected);
        }
    }

    #[test]
    fn test_flag_sequence_joined_once() {
        assert_eq!(glyph_to_codepoint("🇦🇺").unwrap(), "1f1e6-1f1fa");
    }

    #[test]
    fn test_zwj_sequence() {
        assert_eq!(
            glyph_to_codepoint("👨\u{200d}👩\u{200d}👧").unwrap(),
            "1f468-200d-1f469-200d-1f467"
        );
    }

    #[test]
    fn test_empty_glyph_is_invalid() {
        assert!(matches!(
            glyph_to_codepoint(""),
            Err(KitchenError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unescape_token() {
        assert_eq!(unescape_token("u1fae9"), "1fae9");
        assert_eq!(unescape_token("U1FAE9"), "1FAE9");
        assert_eq!(unescape_token("abc"), "abc");
        assert_eq!(unescape_token("u"), "u");
        assert_eq!(unescape_token("u1fxyz"), "u1fxyz");
        assert_eq!(unescape_token("xu1f600"), "xu1f600");
    }

    #[test]
    fn test_normalize_escape() {
        assert_eq!(normalize("u1fae9"), "1fae9");
        assert_eq!(normalize("u1FAE9"), "1fae9");
    }

    #[test]
    fn test_normalize_unmatched_escape_is_unchanged() {
        assert_eq!(normalize("ÄBCu"), "ÄBCu");
        assert_eq!(normalize("u1fxyz"), "u1fxyz");
        assert_eq!(normalize("Xu1F600"), "Xu1F600");
    }

    #[test]
    fn test_normalize_hex_key() {
        assert_eq!(normalize("1f600"), "1f600");
        assert_eq!(normalize("1F1E6-1F1FA"), "1f1e6-1f1fa");
        assert_eq!(normalize("2615"), "2615");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("--"), "--");
    }

    #[test]
    fn test_normalize_glyph() {
        assert_eq!(normalize("😀"), "1f600");
        assert_eq!(normalize("🇦🇺"), "1f1e6-1f1fa");
    }

    #[test]
    fn test_normalize_is_idempotent_on_keys() {
        for key in ["1f600", "1f1e6-1f1fa", "2615", "1FAE9", "u1fae9", "😀", "🇦🇺"] {
            let once = normalize(key);
            assert_eq!(normalize(&once), once, "not idempotent for {}", key);
        }
    }

    #[test]
    fn test_codepoint_to_glyph() {
        assert_eq!(codepoint_to_glyph("1f600").as_deref(), Some("😀"));
        assert_eq!(codepoint_to_glyph("1f1e6-1f1fa").as_deref(), Some("🇦🇺"));
        assert_eq!(codepoint_to_glyph(""), None);
        assert_eq!(codepoint_to_glyph("zz"), None);
        assert_eq!(codepoint_to_glyph("d800"), None);
        assert_eq!(codepoint_to_glyph("1f600-"), None);
    }

    #[test]
    fn test_glyph_roundtrip() {
        let glyph = "🇦🇺";
        let key = glyph_to_codepoint(glyph).unwrap();
        assert_eq!(codepoint_to_glyph(&key).as_deref(), Some(glyph));
    }
}
