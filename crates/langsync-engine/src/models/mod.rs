pub mod date;
pub mod field;
pub mod folder;
pub mod post;

pub use date::DateValue;
pub use field::{FieldMap, FieldName, FieldValue};
pub use folder::FolderRecordSet;
pub use post::PostRecord;
