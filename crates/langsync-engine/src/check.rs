//! Cross-language consistency checks.
//!
//! Every post is expected to exist in every language folder with the same
//! date, tags, categories and `pin`/`math` flags, unless it is marked
//! `languniq: true`, in which case it must exist in its own folder only.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::models::{DateValue, FolderRecordSet, PostRecord};

/// Which name list a set mismatch is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameList {
    Tags,
    Categories,
}

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameList::Tags => "tags",
            NameList::Categories => "categories",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The copy in `owner` is language-unique, yet a copy exists in the
    /// other folder of the pair.
    LanguageUnique { owner: String, copy: String },
    /// The post is missing from the other folder.
    Missing,
    DateMismatch { ours: DateValue, theirs: DateValue },
    PinMismatch,
    MathMismatch,
    /// Different number of distinct names.
    CountMismatch(NameList),
    /// Same number of distinct names, different names.
    ContentMismatch(NameList),
}

/// One cross-language discrepancy for `post` between `folder` and `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub folder: String,
    pub other: String,
    pub post: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Violation {
            folder,
            other,
            post,
            kind,
        } = self;
        match kind {
            ViolationKind::LanguageUnique { owner, copy } => write!(
                f,
                "post {owner}/{post} is languniq, a copy of it should not exist in _{copy}_"
            ),
            ViolationKind::Missing => write!(f, "post {folder}/{post} should exist in _{other}_"),
            ViolationKind::DateMismatch { ours, theirs } => write!(
                f,
                "post {post} in _{folder}_ and _{other}_ should have the same date {ours} - {theirs}"
            ),
            ViolationKind::PinMismatch => write!(
                f,
                "post {post} in _{folder}_ and _{other}_ should have the same \"pin\" value"
            ),
            ViolationKind::MathMismatch => write!(
                f,
                "post {post} in _{folder}_ and _{other}_ should have the same \"math\" value"
            ),
            ViolationKind::CountMismatch(list) => write!(
                f,
                "post {post} in _{folder}_ and _{other}_ have a different amount of {list}"
            ),
            ViolationKind::ContentMismatch(list) => write!(
                f,
                "post {post} in _{folder}_ and _{other}_ have a different list of {list}"
            ),
        }
    }
}

/// Compares every folder against every other and returns all
/// discrepancies, in folder order then post order.
///
/// Once a post has been compared from one folder, the partner copies are
/// marked reconciled so the same pair is not reported again when the
/// partner folder takes its turn as the primary.
pub fn check_consistency(folders: &[FolderRecordSet]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut reconciled: HashSet<(usize, &str)> = HashSet::new();

    for (primary, folder) in folders.iter().enumerate() {
        for (name, post) in &folder.posts {
            if reconciled.contains(&(primary, name.as_str())) {
                continue;
            }

            for (other_idx, other) in folders.iter().enumerate() {
                if other_idx == primary {
                    continue;
                }
                let theirs = other
                    .posts
                    .get_key_value(name)
                    .filter(|(key, _)| !reconciled.contains(&(other_idx, key.as_str())));

                let mut push = |kind: ViolationKind| {
                    violations.push(Violation {
                        folder: folder.name.clone(),
                        other: other.name.clone(),
                        post: name.clone(),
                        kind,
                    })
                };

                match theirs {
                    Some((key, _)) if post.is_language_unique() => {
                        push(ViolationKind::LanguageUnique {
                            owner: folder.name.clone(),
                            copy: other.name.clone(),
                        });
                        reconciled.insert((other_idx, key.as_str()));
                    }
                    None if !post.is_language_unique() => push(ViolationKind::Missing),
                    Some((key, theirs)) => {
                        for kind in compare_copies(folder, post, other, theirs) {
                            push(kind);
                        }
                        reconciled.insert((other_idx, key.as_str()));
                    }
                    None => {}
                }
            }
        }

        for name in folder.posts.keys() {
            reconciled.insert((primary, name.as_str()));
        }
    }

    log::info!("consistency check found {} violation(s)", violations.len());
    violations
}

fn compare_copies(
    folder: &FolderRecordSet,
    ours: &PostRecord,
    other: &FolderRecordSet,
    theirs: &PostRecord,
) -> Vec<ViolationKind> {
    let mut kinds = Vec::new();

    if theirs.is_language_unique() {
        kinds.push(ViolationKind::LanguageUnique {
            owner: other.name.clone(),
            copy: folder.name.clone(),
        });
    }
    if ours.date != theirs.date {
        kinds.push(ViolationKind::DateMismatch {
            ours: ours.date,
            theirs: theirs.date,
        });
    }
    if ours.pin != theirs.pin {
        kinds.push(ViolationKind::PinMismatch);
    }
    if ours.math != theirs.math {
        kinds.push(ViolationKind::MathMismatch);
    }
    kinds.extend(compare_sets(
        NameList::Categories,
        &ours.category_set(),
        &theirs.category_set(),
    ));
    kinds.extend(compare_sets(
        NameList::Tags,
        &ours.tag_set(),
        &theirs.tag_set(),
    ));

    kinds
}

fn compare_sets(
    list: NameList,
    ours: &BTreeSet<&str>,
    theirs: &BTreeSet<&str>,
) -> Option<ViolationKind> {
    if ours.len() != theirs.len() {
        Some(ViolationKind::CountMismatch(list))
    } else if ours.symmetric_difference(theirs).next().is_some() {
        Some(ViolationKind::ContentMismatch(list))
    } else {
        None
    }
}
