use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Characters escaped on the cookie wire form.
///
/// Everything except alphanumerics and `-_.!~*'()`, which is the set left
/// untouched by `encodeURIComponent` in browsers. Cookie values written by
/// other stacks commonly follow the same convention, so decoding with this
/// set round-trips them.
const COOKIE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, COOKIE_ENCODE_SET).into()
}

/// Percent-decode, falling back to the raw input when the decoded bytes are
/// not valid UTF-8. Cookie data is not guaranteed to be percent-encoded at
/// all, so a malformed segment must never poison the whole parse.
pub(crate) fn decode(input: &str) -> String {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => input.to_owned(),
    }
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn encode_escapes_separators() {
        assert_eq!(encode("a value; tricky=yes"), "a%20value%3B%20tricky%3Dyes");
    }

    #[test]
    fn encode_keeps_unreserved_marks() {
        assert_eq!(encode("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn decode_reverses_encode() {
        assert_eq!(decode("first%20value"), "first value");
    }

    #[test]
    fn decode_falls_back_on_invalid_utf8() {
        // %C3%28 decodes to an invalid UTF-8 sequence
        assert_eq!(decode("%C3%28"), "%C3%28");
    }

    #[test]
    fn decode_passes_plain_text_through() {
        assert_eq!(decode("not encoded at all"), "not encoded at all");
    }
}
