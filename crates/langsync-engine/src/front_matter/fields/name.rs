use std::path::Path;

use crate::error::FatalError;
use crate::front_matter::cursor::Cursor;
use crate::models::FieldName;

use super::{quoted, take_line, to_string};

/// Parses a single name: `"quoted name"` or a bare value that starts with a
/// letter and runs to the end of the line.
pub fn parse_name(
    cur: &mut Cursor<'_>,
    field: FieldName,
    path: &Path,
) -> Result<String, FatalError> {
    let (line, eol) = take_line(cur);

    let name = match line.first() {
        Some(b'"') => {
            quoted(line).map_err(|reason| FatalError::malformed(path, field, line, reason))?
        }
        Some(b) if b.is_ascii_alphabetic() => line,
        Some(_) => {
            return Err(FatalError::malformed(
                path,
                field,
                line,
                "expected a quoted or alphabetic name",
            ));
        }
        None => return Err(FatalError::malformed(path, field, line, "empty value")),
    };

    let name = to_string(name, field, path)?;
    cur.jump_to(eol);
    Ok(name)
}
