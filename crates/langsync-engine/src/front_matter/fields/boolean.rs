use std::path::Path;

use crate::error::FatalError;
use crate::front_matter::cursor::Cursor;
use crate::models::FieldName;

use super::take_line;

/// Parses exactly `true` or `false`. Case matters.
pub fn parse_bool(
    cur: &mut Cursor<'_>,
    field: FieldName,
    path: &Path,
) -> Result<bool, FatalError> {
    let (line, eol) = take_line(cur);
    let value = match line {
        b"true" => true,
        b"false" => false,
        _ => {
            return Err(FatalError::malformed(
                path,
                field,
                line,
                "expected `true` or `false`",
            ));
        }
    };
    cur.jump_to(eol);
    Ok(value)
}
