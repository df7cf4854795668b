//! Collection pages for a checked site.
//!
//! Every language folder gets one page per tag, one per category and the
//! pagination pages `page2.md ..= pageN.md`. Files left over from earlier
//! runs that no longer match a tag, category or page are removed.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::{IoError, ensure_dir, list_files, write_file};
use crate::models::FolderRecordSet;

/// Where the collection pages of a site go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPaths {
    pub tags: PathBuf,
    pub categories: PathBuf,
    pub pages: PathBuf,
    pub posts_per_page: usize,
}

pub fn tag_page(name: &str) -> String {
    format!("---\ntitle: {name}\ntag: {name}\n---\n")
}

pub fn category_page(name: &str) -> String {
    format!("---\ntitle: {name}\ncategory: {name}\n---\n")
}

/// File names and contents of the pagination pages of one folder.
///
/// The first page is the folder index itself, so numbering starts at 2.
pub fn pagination_pages(lang: &str, post_count: usize, per_page: usize) -> Vec<(String, String)> {
    let count = post_count.div_ceil(per_page.max(1));

    (2..=count)
        .map(|i| {
            let prev = if i == 2 {
                format!("/{lang}/")
            } else {
                format!("/{lang}/page{}", i - 1)
            };
            let (has_next, next) = if i < count {
                (true, format!("/{lang}/page{}", i + 1))
            } else {
                (false, "/".to_string())
            };
            let content = format!(
                "---\npagenum: {i}\nprevious_page: true\nprevious_page_path: {prev}\nnext_page: {has_next}\nnext_page_path: {next}\n---\n"
            );
            (format!("page{i}.md"), content)
        })
        .collect()
}

/// Writes the collection pages of every folder.
///
/// Only call this once the folders passed the consistency check.
pub fn generate_collections(
    folders: &[FolderRecordSet],
    paths: &CollectionPaths,
) -> Result<(), IoError> {
    for folder in folders {
        let lang = folder.name.as_str();

        let tags_dir = paths.tags.join(lang);
        write_name_pages(&tags_dir, &folder.tags, tag_page)?;

        let categories_dir = paths.categories.join(lang);
        write_name_pages(&categories_dir, &folder.categories, category_page)?;

        let pages_dir = paths.pages.join(lang);
        write_pagination(&pages_dir, lang, folder.len(), paths.posts_per_page)?;

        log::info!(
            "_{lang}_: {} tags, {} categories, {} posts",
            folder.tags.len(),
            folder.categories.len(),
            folder.len()
        );
    }

    Ok(())
}

fn write_name_pages(
    dir: &Path,
    names: &BTreeSet<String>,
    render: fn(&str) -> String,
) -> Result<(), IoError> {
    ensure_dir(dir)?;

    for file_name in list_files(dir)? {
        let stem = file_name.split('.').next().unwrap_or_default();
        if !names.contains(stem) {
            remove_file(dir, &file_name)?;
        }
    }

    for name in names {
        write_file(dir, &format!("{name}.md"), &render(name))?;
    }
    log::debug!("Wrote {} pages to {}", names.len(), dir.display());

    Ok(())
}

fn write_pagination(
    dir: &Path,
    lang: &str,
    post_count: usize,
    per_page: usize,
) -> Result<(), IoError> {
    ensure_dir(dir)?;

    let pages = pagination_pages(lang, post_count, per_page);
    let current: BTreeSet<&str> = pages.iter().map(|(name, _)| name.as_str()).collect();

    for file_name in list_files(dir)? {
        if is_page_file(&file_name) && !current.contains(file_name.as_str()) {
            remove_file(dir, &file_name)?;
        }
    }

    for (file_name, content) in &pages {
        write_file(dir, file_name, content)?;
    }

    Ok(())
}

fn is_page_file(file_name: &str) -> bool {
    file_name
        .strip_prefix("page")
        .and_then(|rest| rest.strip_suffix(".md"))
        .is_some_and(|num| !num.is_empty() && num.bytes().all(|b| b.is_ascii_digit()))
}

fn remove_file(dir: &Path, file_name: &str) -> Result<(), IoError> {
    let path = dir.join(file_name);
    log::info!("Removing stale {}", path.display());
    fs::remove_file(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{DEFAULT_READ_LIMIT, collect_folders};
    use crate::tests::{create_post, create_test_site, post_source};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn paths(site: &TempDir, posts_per_page: usize) -> CollectionPaths {
        CollectionPaths {
            tags: site.path().join("_tags_clet"),
            categories: site.path().join("_categs_clet"),
            pages: site.path().join("_pages_clet"),
            posts_per_page,
        }
    }

    #[test]
    fn tag_and_category_templates() {
        assert_eq!(tag_page("rust"), "---\ntitle: rust\ntag: rust\n---\n");
        assert_eq!(
            category_page("dev ops"),
            "---\ntitle: dev ops\ncategory: dev ops\n---\n"
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(10, 0)]
    #[case(11, 1)]
    #[case(20, 1)]
    #[case(21, 2)]
    fn pagination_page_count(#[case] posts: usize, #[case] pages: usize) {
        assert_eq!(pagination_pages("en", posts, 10).len(), pages);
    }

    #[test]
    fn pagination_links() {
        let pages = pagination_pages("en", 25, 10);
        let names: Vec<_> = pages.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["page2.md", "page3.md"]);

        assert_eq!(
            pages[0].1,
            "---\npagenum: 2\nprevious_page: true\nprevious_page_path: /en/\nnext_page: true\nnext_page_path: /en/page3\n---\n"
        );
        assert_eq!(
            pages[1].1,
            "---\npagenum: 3\nprevious_page: true\nprevious_page_path: /en/page2\nnext_page: false\nnext_page_path: /\n---\n"
        );
    }

    #[test]
    fn zero_posts_per_page_does_not_divide_by_zero() {
        assert_eq!(pagination_pages("en", 3, 0).len(), 2);
    }

    #[rstest]
    #[case("page2.md", true)]
    #[case("page10.md", true)]
    #[case("page.md", false)]
    #[case("pagex.md", false)]
    #[case("index.md", false)]
    #[case("page2.html", false)]
    fn page_file_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_page_file(name), expected);
    }

    #[test]
    fn generates_collections_and_prunes_stale_files() {
        let site = create_test_site();
        for i in 0..12 {
            let source = post_source("[rust, cli]", "dev", "2024-01-01 10:00:00 +0000");
            create_post(&site, "en", &format!("post{i:02}.md"), &source);
        }
        let paths = paths(&site, 10);

        write_file(&paths.tags.join("en"), "old.md", "stale").unwrap();
        write_file(&paths.tags.join("en"), "rust.md", "outdated").unwrap();
        write_file(&paths.pages.join("en"), "page5.md", "stale").unwrap();
        write_file(&paths.pages.join("en"), "about.md", "kept").unwrap();

        let folders = collect_folders(&site.path().join("_posts"), DEFAULT_READ_LIMIT).unwrap();
        generate_collections(&folders, &paths).unwrap();

        assert_eq!(
            list_files(&paths.tags.join("en")).unwrap(),
            vec!["cli.md", "rust.md"]
        );
        assert_eq!(
            fs::read_to_string(paths.tags.join("en/rust.md")).unwrap(),
            tag_page("rust")
        );
        assert_eq!(
            list_files(&paths.categories.join("en")).unwrap(),
            vec!["dev.md"]
        );
        assert_eq!(
            list_files(&paths.pages.join("en")).unwrap(),
            vec!["about.md", "page2.md"]
        );
    }
}
