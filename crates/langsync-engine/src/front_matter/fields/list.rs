use std::path::Path;

use crate::error::FatalError;
use crate::front_matter::cursor::{Cursor, trim_spaces};
use crate::models::FieldName;

use super::{is_bare_element, quoted, take_line, to_string};

/// Parses a list of names, either bracketed (`[a, "b c", d]`) or the
/// shorthand of bare names separated by spaces (`a b d`).
///
/// Order is kept and duplicates are not removed.
pub fn parse_name_list(
    cur: &mut Cursor<'_>,
    field: FieldName,
    path: &Path,
) -> Result<Vec<String>, FatalError> {
    let (line, eol) = take_line(cur);
    let malformed = |reason: &'static str| FatalError::malformed(path, field, line, reason);

    let elements = if line.first() == Some(&b'[') {
        bracketed(line).map_err(malformed)?
    } else {
        shorthand(line).map_err(malformed)?
    };

    let names = elements
        .into_iter()
        .map(|e| to_string(e, field, path))
        .collect::<Result<Vec<_>, _>>()?;

    cur.jump_to(eol);
    Ok(names)
}

fn bracketed(line: &[u8]) -> Result<Vec<&[u8]>, &'static str> {
    let close = match line.iter().rposition(|&b| b == b']') {
        Some(i) if i > 0 => i,
        _ => return Err("unterminated `[`"),
    };
    if !trim_spaces(&line[close + 1..]).is_empty() {
        return Err("text after `]`");
    }
    let inner = &line[1..close];
    if trim_spaces(inner).is_empty() {
        return Err("empty list");
    }

    inner
        .split(|&b| b == b',')
        .map(|element| {
            let element = trim_spaces(element);
            match element.first() {
                None => Err("empty list element"),
                Some(b'"') => quoted(element),
                Some(_) if is_bare_element(element) => Ok(element),
                Some(_) => Err("expected a quoted or bare name"),
            }
        })
        .collect()
}

fn shorthand(line: &[u8]) -> Result<Vec<&[u8]>, &'static str> {
    let elements: Vec<&[u8]> = line
        .split(|&b| b == b' ')
        .filter(|e| !e.is_empty())
        .collect();
    if elements.is_empty() {
        return Err("empty list");
    }
    if elements.iter().any(|e| !is_bare_element(e)) {
        return Err("expected space separated bare names");
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(line: &str) -> Result<Vec<String>, FatalError> {
        let data = format!("tags:{line}\n");
        let mut cur = Cursor::new(data.as_bytes(), 0, data.len());
        cur.jump_to(5);
        let names = parse_name_list(&mut cur, FieldName::Tags, Path::new("p.md"))?;
        assert_eq!(cur.at, data.len() - 1);
        Ok(names)
    }

    #[rstest]
    #[case(" [a, b, c]", &["a", "b", "c"])]
    #[case(" a b c", &["a", "b", "c"])]
    #[case(" [a,b,c]  ", &["a", "b", "c"])]
    #[case(" a   b  c ", &["a", "b", "c"])]
    #[case(" [rust, \"web dev\", Go]", &["rust", "web dev", "Go"])]
    #[case(" [\"2024\"]", &["2024"])]
    #[case(" [ Rust Lang ]", &["Rust Lang"])]
    #[case(" [b, a, b]", &["b", "a", "b"])]
    #[case(" single", &["single"])]
    #[case(" [a, 42]", &["a", "42"])]
    #[case(" a 42", &["a", "42"])]
    #[case(" [\u{e9}t\u{e9}, rust]", &["\u{e9}t\u{e9}", "rust"])]
    #[case(" \u{e9}t\u{e9} rust", &["\u{e9}t\u{e9}", "rust"])]
    fn valid_lists(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(parse(line).unwrap(), expected);
    }

    #[rstest]
    #[case(" ")]
    #[case(" []")]
    #[case(" [  ]")]
    #[case(" [a, b")]
    #[case(" [a, , b]")]
    #[case(" [a, b,]")]
    #[case(" [a, \"\"]")]
    #[case(" [a, \"b]")]
    #[case(" [a] trailing")]
    #[case(" a, b")]
    #[case(" a \"b\"")]
    fn malformed_lists(#[case] line: &str) {
        assert!(matches!(
            parse(line),
            Err(FatalError::MalformedField {
                field: FieldName::Tags,
                ..
            })
        ));
    }

    #[test]
    fn bracketed_and_shorthand_agree() {
        assert_eq!(parse(" [a, b, c]").unwrap(), parse(" a b c").unwrap());
    }
}
