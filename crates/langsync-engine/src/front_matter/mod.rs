//! # Front Matter Parsing
//!
//! Byte-level parsing of the `---` delimited block at the head of a post.
//!
//! ## Architecture
//!
//! - **`cursor`**: `Cursor`, a forward-only position inside the block
//! - **`token`**: `next_token()`, a table-driven scanner for punctuation and
//!   identifier runs
//! - **`fields`**: one micro-parser per value grammar (name, name list, date,
//!   boolean)
//! - this module: `find_span()` and `parse_front_matter()`, which walks the
//!   block line by line and hands each known key to its field parser
//!
//! The grammar is deliberately narrow. Unknown keys are skipped, but any
//! malformed value or a key that is not followed by `:` is a
//! [`FatalError`] and aborts the run.

pub mod cursor;
pub mod fields;
pub mod token;

use std::path::Path;

use crate::error::FatalError;
use crate::models::{FieldMap, FieldName};

pub use cursor::Cursor;
pub use token::{Token, next_token};

const DELIMITER: &[u8] = b"---";

/// Locates the front matter block.
///
/// Returns `(start, end)` where `start` is the first byte after the opening
/// `---` line and `end` is the byte before the closing `---` line. `None`
/// when either delimiter line is missing.
pub fn find_span(data: &[u8]) -> Option<(usize, usize)> {
    let mut open = None;
    let mut line_start = 0;

    while line_start < data.len() {
        let rest = &data[line_start..];
        let (line, next) = match rest.iter().position(|&b| b == b'\n') {
            Some(i) => (&rest[..i], line_start + i + 1),
            None => (rest, data.len()),
        };
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if line == DELIMITER {
            match open {
                None => open = Some(next),
                Some(start) => return Some((start, line_start - 1)),
            }
        }
        line_start = next;
    }

    None
}

/// Parses the front matter of one post into a [`FieldMap`].
///
/// `data` is the leading part of the file; a block that does not close
/// inside it yields an empty map. `path` is only used in errors.
pub fn parse_front_matter(data: &[u8], path: &Path) -> Result<FieldMap, FatalError> {
    let mut fields = FieldMap::new();
    let mut cur = match find_span(data) {
        Some((start, end)) => Cursor::new(data, start, end),
        None => {
            log::debug!("{}: no front matter block found", path.display());
            return Ok(fields);
        }
    };

    while !cur.finished() {
        cur.skip_whitespace();

        match next_token(&mut cur) {
            Token::Scalar(key) => {
                cur.skip_spaces();
                let after = next_token(&mut cur);
                if after != Token::Colon {
                    return Err(FatalError::UnexpectedToken {
                        path: path.to_path_buf(),
                        key: String::from_utf8_lossy(key).into_owned(),
                        found: after.to_string(),
                    });
                }

                match FieldName::from_key(key) {
                    Some(field) => {
                        let value = fields::parse_field(&mut cur, field, path)?;
                        fields.insert_new(field, value, path)?;
                    }
                    None => cur.skip_to_next_line(),
                }
            }
            Token::Comment | Token::Dash => cur.skip_to_next_line(),
            Token::EndOfStream => break,
            other => {
                log::debug!(
                    "{}: stopped reading front matter at {other}",
                    path.display()
                );
                break;
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateValue, FieldValue};
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> Result<FieldMap, FatalError> {
        parse_front_matter(src.as_bytes(), Path::new("_posts/en/post.md"))
    }

    fn names(items: &[&str]) -> FieldValue {
        FieldValue::Names(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn finds_span_between_delimiters() {
        let src = b"---\ntag: a\n---\nbody";
        let (start, end) = find_span(src).unwrap();
        assert_eq!(start, 4);
        assert_eq!(end, 10);
        assert_eq!(&src[start..end], b"tag: a");
    }

    #[test]
    fn missing_delimiters_yield_no_span() {
        assert_eq!(find_span(b"no front matter"), None);
        assert_eq!(find_span(b"---\ntag: a\n"), None);
        assert_eq!(find_span(b""), None);
    }

    #[test]
    fn delimiter_must_be_a_whole_line() {
        assert_eq!(find_span(b"----\ntag: a\n----\n"), None);
        assert_eq!(find_span(b"--- x\ntag: a\n---\n"), None);
    }

    #[test]
    fn crlf_delimiters_are_recognised() {
        let src = b"---\r\ntag: a\r\n---\r\n";
        let (start, end) = find_span(src).unwrap();
        assert_eq!(&src[start..end], b"tag: a\r");
    }

    #[test]
    fn parses_a_full_block() {
        let fields = parse(
            "---\n\
             layout: post\n\
             title: \"Hello: world\"\n\
             tags: [rust, \"web dev\"]\n\
             category: news\n\
             date: 2024-03-01 12:30:00 +0200\n\
             pin: true\n\
             math: false\n\
             ---\n\
             # Body\n",
        )
        .unwrap();

        assert_eq!(fields.get(FieldName::Tags), Some(&names(&["rust", "web dev"])));
        assert_eq!(
            fields.get(FieldName::Category),
            Some(&FieldValue::Name("news".to_string()))
        );
        assert_eq!(
            fields.date(),
            Some(DateValue {
                year: 2024,
                month: 3,
                day: 1,
                hour: 12,
                minute: 30,
                second: 0,
                zone_hours: 2,
            })
        );
        assert_eq!(fields.flag(FieldName::Pin), Some(true));
        assert_eq!(fields.flag(FieldName::Math), Some(false));
        assert_eq!(fields.flag(FieldName::LangUniq), None);
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn comments_dash_lines_and_blank_lines_are_skipped() {
        let fields = parse(
            "---\n\
             # a comment: with colon\n\
             \n\
             tag: a\n\
             - stray item\n\
             \t\n\
             ---\n",
        )
        .unwrap();
        assert_eq!(
            fields.get(FieldName::Tag),
            Some(&FieldValue::Name("a".to_string()))
        );
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn no_block_means_no_fields() {
        assert!(parse("tag: a\n").unwrap().is_empty());
        assert!(parse("---\ntag: a\n").unwrap().is_empty());
        assert!(parse("---\n---\n").unwrap().is_empty());
    }

    #[test]
    fn key_without_colon_is_fatal() {
        let err = parse("---\ntitle hello\n---\n").unwrap_err();
        match err {
            FatalError::UnexpectedToken { key, found, .. } => {
                assert_eq!(key, "title");
                assert_eq!(found, "\"hello\"");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn key_with_digit_is_fatal() {
        assert!(matches!(
            parse("---\nh1: x\n---\n"),
            Err(FatalError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn repeated_field_is_fatal() {
        assert!(matches!(
            parse("---\npin: true\npin: true\n---\n"),
            Err(FatalError::DuplicateField {
                field: FieldName::Pin,
                ..
            })
        ));
    }

    #[test]
    fn malformed_value_aborts() {
        assert!(matches!(
            parse("---\ntag: a\nmath: True\n---\n"),
            Err(FatalError::MalformedField {
                field: FieldName::Math,
                ..
            })
        ));
    }

    #[test]
    fn other_punctuation_stops_parsing() {
        let fields = parse("---\ntag: a\n{ ignored: true }\npin: true\n---\n").unwrap();
        assert_eq!(fields.len(), 1);
        assert!(!fields.contains(FieldName::Pin));
    }

    #[test]
    fn bare_shorthand_list_in_block() {
        let fields = parse("---\ncategories: a b c\n---\n").unwrap();
        assert_eq!(fields.get(FieldName::Categories), Some(&names(&["a", "b", "c"])));
    }

    #[test]
    fn list_elements_need_not_be_ascii_letters() {
        let src = "---\ntags: [été, rust, 2024]\ncategories: blog été\n---\n";
        let fields = parse(src).unwrap();
        assert_eq!(
            fields.get(FieldName::Tags),
            Some(&names(&["été", "rust", "2024"]))
        );
        assert_eq!(
            fields.get(FieldName::Categories),
            Some(&names(&["blog", "été"]))
        );
    }

    #[test]
    fn crlf_block() {
        let fields = parse("---\r\ntag: a\r\npin: false\r\n---\r\n").unwrap();
        assert_eq!(fields.flag(FieldName::Pin), Some(false));
        assert_eq!(
            fields.get(FieldName::Tag),
            Some(&FieldValue::Name("a".to_string()))
        );
    }
}
