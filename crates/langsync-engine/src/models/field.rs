use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::FatalError;

use super::DateValue;

/// The front matter keys langsync understands. Any other key is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Tag,
    Tags,
    Category,
    Categories,
    Date,
    Pin,
    LangUniq,
    Math,
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::Tag,
        FieldName::Tags,
        FieldName::Category,
        FieldName::Categories,
        FieldName::Date,
        FieldName::Pin,
        FieldName::LangUniq,
        FieldName::Math,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Tag => "tag",
            FieldName::Tags => "tags",
            FieldName::Category => "category",
            FieldName::Categories => "categories",
            FieldName::Date => "date",
            FieldName::Pin => "pin",
            FieldName::LangUniq => "languniq",
            FieldName::Math => "math",
        }
    }

    /// Looks up a key as it appears in the front matter. Case-sensitive.
    pub fn from_key(key: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().as_bytes() == key)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// `tag` / `category`
    Name(String),
    /// `tags` / `categories`, in source order, duplicates kept.
    Names(Vec<String>),
    Date(DateValue),
    /// `pin` / `languniq` / `math`
    Flag(bool),
}

impl FieldValue {
    /// The names held by a `Name` or `Names` value.
    pub fn into_names(self) -> Option<Vec<String>> {
        match self {
            FieldValue::Name(name) => Some(vec![name]),
            FieldValue::Names(names) => Some(names),
            FieldValue::Date(_) | FieldValue::Flag(_) => None,
        }
    }
}

/// Fields parsed from one post's front matter, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: BTreeMap<FieldName, FieldValue>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field that must not already be present.
    pub fn insert_new(
        &mut self,
        name: FieldName,
        value: FieldValue,
        path: &Path,
    ) -> Result<(), FatalError> {
        if self.fields.contains_key(&name) {
            return Err(FatalError::DuplicateField {
                path: path.to_path_buf(),
                field: name,
            });
        }
        self.fields.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields.get(&name)
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.fields.contains_key(&name)
    }

    pub fn remove(&mut self, name: FieldName) -> Option<FieldValue> {
        self.fields.remove(&name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn flag(&self, name: FieldName) -> Option<bool> {
        match self.get(name) {
            Some(FieldValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<DateValue> {
        match self.get(FieldName::Date) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }
}
