use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::FatalError;

use super::{FieldMap, FieldName, PostRecord};

/// All posts of one language folder, plus every tag and category they use.
#[derive(Debug, Clone, Default)]
pub struct FolderRecordSet {
    /// Folder name, e.g. `en`.
    pub name: String,
    /// Folder location, used in error messages.
    pub path: PathBuf,
    pub posts: BTreeMap<String, PostRecord>,
    pub tags: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl FolderRecordSet {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Normalises a post's fields and adds it to the folder.
    ///
    /// A singular `tag`/`category` becomes a one-element list. Giving both
    /// the singular and the list form, missing tags, categories or date, or
    /// reusing a file name are all fatal.
    pub fn insert_post(&mut self, name: &str, mut fields: FieldMap) -> Result<(), FatalError> {
        if self.posts.contains_key(name) {
            return Err(FatalError::DuplicatePost {
                folder: self.path.clone(),
                name: name.to_string(),
            });
        }

        let post_path = self.path.join(name);
        let tags = take_names(&mut fields, FieldName::Tag, FieldName::Tags, &post_path)?;
        let categories = take_names(
            &mut fields,
            FieldName::Category,
            FieldName::Categories,
            &post_path,
        )?;
        let date = fields.date().ok_or_else(|| FatalError::MissingRequiredField {
            path: post_path.clone(),
            field: "date",
        })?;

        self.tags.extend(tags.iter().cloned());
        self.categories.extend(categories.iter().cloned());

        let post = PostRecord {
            name: name.to_string(),
            tags,
            categories,
            date,
            pin: fields.flag(FieldName::Pin),
            languniq: fields.flag(FieldName::LangUniq),
            math: fields.flag(FieldName::Math),
        };
        self.posts.insert(name.to_string(), post);
        Ok(())
    }

    pub fn get(&self, post: &str) -> Option<&PostRecord> {
        self.posts.get(post)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn take_names(
    fields: &mut FieldMap,
    single: FieldName,
    list: FieldName,
    path: &Path,
) -> Result<Vec<String>, FatalError> {
    let value = match (fields.remove(single), fields.remove(list)) {
        (Some(_), Some(_)) => {
            return Err(FatalError::DuplicateFieldSpec {
                path: path.to_path_buf(),
                single,
                list,
            });
        }
        (Some(value), None) | (None, Some(value)) => value.into_names(),
        (None, None) => None,
    };

    value
        .filter(|names| !names.is_empty())
        .ok_or_else(|| FatalError::MissingRequiredField {
            path: path.to_path_buf(),
            field: list.as_str(),
        })
}
