//! Cookie string parsing.
//!
//! Covers both the browser's live cookie string and the `Cookie` request
//! header, which share the same `name1=value1; name2=value2` shape.

use crate::encoding::decode;
use std::collections::HashMap;

/// Decoded cookie name → decoded cookie value.
///
/// Rebuilt from the raw sources on every read; never cached.
pub type CookieMap = HashMap<String, String>;

/// Parse a raw cookie string into a [`CookieMap`].
///
/// Empty input yields an empty map. Each `;`-separated segment is split once
/// on its first `=`; leading spaces on the name are an artifact of `"; "`
/// joining and are stripped. Both sides are percent-decoded with a silent
/// fallback to the raw substring. When the same name occurs more than once,
/// the last occurrence wins.
///
/// ```
/// use isocookie::parse::parse_cookie_string;
///
/// let map = parse_cookie_string("id=abc; theme=dark");
/// assert_eq!(map.get("theme").map(String::as_str), Some("dark"));
/// ```
pub fn parse_cookie_string(raw: &str) -> CookieMap {
    let mut map = CookieMap::new();
    if raw.is_empty() {
        return map;
    }

    for segment in raw.split(';') {
        let (name, value) = split_pair(segment);
        let name = name.trim_start_matches(' ');
        map.insert(decode(name), decode(value));
    }

    map
}

/// Split a segment on its first `=`. A segment without `=` is a bare name
/// with an empty value.
pub(crate) fn split_pair(segment: &str) -> (&str, &str) {
    match segment.split_once('=') {
        Some((name, value)) => (name, value),
        None => (segment, ""),
    }
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(parse_cookie_string("").is_empty());
    }

    #[test]
    fn two_cookies() {
        let map = parse_cookie_string("id=abc; theme=dark");
        assert_eq!(map.len(), 2);
        assert_eq!(map["id"], "abc");
        assert_eq!(map["theme"], "dark");
    }

    #[test]
    fn value_keeps_later_equal_signs() {
        let map = parse_cookie_string("token=a=b=c");
        assert_eq!(map["token"], "a=b=c");
    }

    #[test]
    fn segment_without_equal_becomes_empty_value() {
        let map = parse_cookie_string("flag");
        assert_eq!(map["flag"], "");
    }

    #[test]
    fn last_duplicate_wins() {
        let map = parse_cookie_string("a=1; a=2");
        assert_eq!(map["a"], "2");
    }

    #[test]
    fn percent_encoded_pairs_are_decoded() {
        let map = parse_cookie_string("user%20name=first%20value");
        assert_eq!(map["user name"], "first value");
    }

    #[test]
    fn malformed_encoding_falls_back_to_raw() {
        let map = parse_cookie_string("bad=%C3%28");
        assert_eq!(map["bad"], "%C3%28");
    }

    #[test]
    fn leading_spaces_stripped_from_names_only() {
        let map = parse_cookie_string("a=1;   b= 2");
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], " 2");
    }
}
