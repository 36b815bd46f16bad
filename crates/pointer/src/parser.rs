use std::borrow::Cow;

use crate::ParsePointerError;

/// The final segment that addresses the slot past the end of a sequence.
pub const APPEND_TOKEN: &str = "-";

struct RawSegments<'a> {
    input: Option<&'a str>,
}

impl<'a> Iterator for RawSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input?;

        match memchr::memchr(b'/', input.as_bytes()) {
            Some(idx) => {
                self.input = Some(&input[idx + 1..]);
                Some(&input[..idx])
            }
            None => {
                self.input = None;
                Some(input)
            }
        }
    }
}

/// Decodes `~1` to `/` and `~0` to `~`. A `~` followed by anything else is
/// kept as is.
fn parse_segment(raw: &str) -> Cow<'_, str> {
    if memchr::memchr(b'~', raw.as_bytes()).is_none() {
        return Cow::Borrowed(raw);
    }

    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(idx) = memchr::memchr(b'~', rest.as_bytes()) {
        decoded.push_str(&rest[..idx]);
        match rest.as_bytes().get(idx + 1) {
            Some(b'0') => {
                decoded.push('~');
                rest = &rest[idx + 2..];
            }
            Some(b'1') => {
                decoded.push('/');
                rest = &rest[idx + 2..];
            }
            _ => {
                decoded.push('~');
                rest = &rest[idx + 1..];
            }
        }
    }

    decoded.push_str(rest);
    Cow::Owned(decoded)
}

pub(crate) fn escape_segment(segment: &str) -> Cow<'_, str> {
    if memchr::memchr2(b'~', b'/', segment.as_bytes()).is_none() {
        return Cow::Borrowed(segment);
    }
    Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
}

pub(crate) fn parse_pointer(input: &str) -> Result<Vec<String>, ParsePointerError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let rest = input.strip_prefix('/').ok_or_else(|| ParsePointerError {
        input: input.to_string(),
    })?;

    Ok(RawSegments { input: Some(rest) }
        .map(|raw| parse_segment(raw).into_owned())
        .collect())
}

/// Parses a sequence index: decimal digits only, without a sign or leading
/// zeros.
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}
