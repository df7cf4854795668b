//! Micro-parsers for field values.
//!
//! Every parser starts at the first byte after a field's colon, reads to the
//! end of that line and leaves the cursor on the line break so the block
//! parser can carry on with the next line. A value that does not match its
//! grammar is a [`FatalError::MalformedField`].

pub mod boolean;
pub mod date;
pub mod list;
pub mod name;

use std::path::Path;

use crate::error::FatalError;
use crate::models::{FieldName, FieldValue};

use super::cursor::{Cursor, trim_spaces, trim_spaces_end};

pub use boolean::parse_bool;
pub use date::parse_date;
pub use list::parse_name_list;
pub use name::parse_name;

/// Parses the value of `field` with the parser for that field.
pub fn parse_field(
    cur: &mut Cursor<'_>,
    field: FieldName,
    path: &Path,
) -> Result<FieldValue, FatalError> {
    match field {
        FieldName::Tag | FieldName::Category => parse_name(cur, field, path).map(FieldValue::Name),
        FieldName::Tags | FieldName::Categories => {
            parse_name_list(cur, field, path).map(FieldValue::Names)
        }
        FieldName::Date => parse_date(cur, path).map(FieldValue::Date),
        FieldName::Pin | FieldName::LangUniq | FieldName::Math => {
            parse_bool(cur, field, path).map(FieldValue::Flag)
        }
    }
}

/// Skips the spaces after the colon and returns the rest of the line without
/// trailing spaces, plus the offset of the line break.
fn take_line<'a>(cur: &mut Cursor<'a>) -> (&'a [u8], usize) {
    cur.skip_spaces();
    let eol = cur.line_end();
    (trim_spaces_end(cur.rest_of_line()), eol)
}

fn to_string(bytes: &[u8], field: FieldName, path: &Path) -> Result<String, FatalError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| FatalError::malformed(path, field, bytes, "value is not valid UTF-8"))
}

/// Reads a `"quoted"` name. `bytes` must start with the opening quote.
///
/// The closing quote is found by scanning back from the end, so anything
/// but spaces after it, an embedded quote or an empty name is rejected.
fn quoted<'a>(bytes: &'a [u8]) -> Result<&'a [u8], &'static str> {
    debug_assert_eq!(bytes.first(), Some(&b'"'));
    let close = match bytes.iter().rposition(|&b| b == b'"') {
        Some(0) | None => return Err("unterminated quote"),
        Some(i) => i,
    };
    if !trim_spaces(&bytes[close + 1..]).is_empty() {
        return Err("text after closing quote");
    }
    let inner = &bytes[1..close];
    if inner.is_empty() {
        return Err("empty quoted name");
    }
    if inner.contains(&b'"') {
        return Err("quote inside quoted name");
    }
    Ok(inner)
}

/// A bare list element: any non-empty text without list syntax.
fn is_bare_element(bytes: &[u8]) -> bool {
    !bytes.is_empty()
        && !bytes
            .iter()
            .any(|b| matches!(b, b'"' | b'[' | b']' | b','))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"\"rust\"", Ok(&b"rust"[..]))]
    #[case(b"\"two words\"  ", Ok(&b"two words"[..]))]
    #[case(b"\"", Err("unterminated quote"))]
    #[case(b"\"open", Err("unterminated quote"))]
    #[case(b"\"\"", Err("empty quoted name"))]
    #[case(b"\"a\"b\"", Err("quote inside quoted name"))]
    #[case(b"\"a\" tail", Err("text after closing quote"))]
    fn quoted_names(#[case] input: &[u8], #[case] expected: Result<&[u8], &'static str>) {
        assert_eq!(quoted(input), expected);
    }

    #[rstest]
    #[case(b"rust", true)]
    #[case(b"Rust Lang", true)]
    #[case(b"c_plus_plus2", true)]
    #[case(b"2024", true)]
    #[case("\u{e9}t\u{e9}".as_bytes(), true)]
    #[case(b"", false)]
    #[case(b"a,b", false)]
    #[case(b"a]", false)]
    #[case(b"say\"", false)]
    fn bare_elements(#[case] input: &[u8], #[case] expected: bool) {
        assert_eq!(is_bare_element(input), expected);
    }

    #[test]
    fn parse_field_dispatches_by_name() {
        let data = b"tags: [a, b]\n";
        let mut cur = Cursor::new(data, 0, data.len());
        cur.jump_to(5);
        let value = parse_field(&mut cur, FieldName::Tags, Path::new("p.md")).unwrap();
        assert_eq!(
            value,
            FieldValue::Names(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(cur.at, 12);
    }
}
