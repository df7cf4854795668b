use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary site root
pub fn create_test_site() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a post file at `_posts/<lang>/<name>` inside the site
pub fn create_post(site: &TempDir, lang: &str, name: &str, content: &str) -> PathBuf {
    let dir = site.path().join("_posts").join(lang);
    fs::create_dir_all(&dir).unwrap();
    let file_path = dir.join(name);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Front matter plus a short body, with the given raw field values
pub fn post_source(tags: &str, category: &str, date: &str) -> String {
    format!(
        "---\nlayout: post\ntags: {tags}\ncategory: {category}\ndate: {date}\n---\n\nBody text.\n"
    )
}
