use std::path::PathBuf;

use crate::models::FieldName;

/// Errors that abort the whole run.
///
/// These are content bugs: a post with any of them cannot be trusted, so no
/// partial result is produced once one is raised.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    #[error("{path}: invalid `{field}` value {value:?}: {reason}")]
    MalformedField {
        path: PathBuf,
        field: FieldName,
        value: String,
        reason: &'static str,
    },

    #[error(
        "{path}: unexpected token {found} after \"{key}\" in the front matter, expected `:`"
    )]
    UnexpectedToken {
        path: PathBuf,
        key: String,
        found: String,
    },

    #[error("{path}: `{field}` specified more than once")]
    DuplicateField { path: PathBuf, field: FieldName },

    #[error("{path}: both `{single}` and `{list}` specified")]
    DuplicateFieldSpec {
        path: PathBuf,
        single: FieldName,
        list: FieldName,
    },

    #[error("{path}: no {field} specified")]
    MissingRequiredField { path: PathBuf, field: &'static str },

    #[error("duplicate post {name} in {folder}")]
    DuplicatePost { folder: PathBuf, name: String },
}

impl FatalError {
    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        field: FieldName,
        value: &[u8],
        reason: &'static str,
    ) -> Self {
        FatalError::MalformedField {
            path: path.into(),
            field,
            value: String::from_utf8_lossy(value).into_owned(),
            reason,
        }
    }
}
