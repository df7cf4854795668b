use crate::error::FatalError;
use crate::front_matter::parse_front_matter;
use crate::models::FolderRecordSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// How much of each post is read when looking for its front matter.
pub const DEFAULT_READ_LIMIT: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(String),
    #[error("Out of scope entry: {0}")]
    UnexpectedEntry(PathBuf),
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

/// Read at most `limit` bytes from the start of a file
pub fn read_prefix(path: &Path, limit: usize) -> Result<Vec<u8>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = fs::File::open(path)?;
    let mut data = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut data)?;
    Ok(data)
}

/// Write content to a file inside `dir`
pub fn write_file(dir: &Path, file_name: &str, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    fs::create_dir_all(dir)?;
    fs::write(dir.join(file_name), content).map_err(IoError::Io)
}

/// Create a directory (and its parents) if it does not exist yet
pub fn ensure_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        log::info!("Creating {}", path.display());
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPostsDir(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}

/// Read every language folder under the posts root.
///
/// The posts root may only contain folders and each folder may only
/// contain post files. Hidden entries (starting with `.`) are skipped.
/// Folders are returned sorted by name.
pub fn collect_folders(
    posts_root: &Path,
    read_limit: usize,
) -> Result<Vec<FolderRecordSet>, IoError> {
    validate_posts_dir(posts_root)?;

    let mut folders = Vec::new();
    for (name, path) in sorted_entries(posts_root)? {
        if !path.is_dir() {
            return Err(IoError::UnexpectedEntry(path));
        }
        folders.push(collect_folder(&name, &path, read_limit)?);
    }

    Ok(folders)
}

/// Parse and aggregate every post of one language folder
pub fn collect_folder(
    name: &str,
    dir: &Path,
    read_limit: usize,
) -> Result<FolderRecordSet, IoError> {
    log::info!("Reading posts of _{name}_ from {}", dir.display());
    let mut folder = FolderRecordSet::new(name, dir);

    for (file_name, path) in sorted_entries(dir)? {
        if !path.is_file() {
            return Err(IoError::UnexpectedEntry(path));
        }
        log::debug!("Parsing {}", path.display());
        let data = read_prefix(&path, read_limit)?;
        let fields = parse_front_matter(&data, &path)?;
        folder.insert_post(&file_name, fields)?;
    }

    Ok(folder)
}

/// Names of the regular files directly inside `dir`
pub fn list_files(dir: &Path) -> Result<Vec<String>, IoError> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|(_, path)| path.is_file())
        .map(|(name, _)| name)
        .collect())
}

fn sorted_entries(dir: &Path) -> Result<Vec<(String, PathBuf)>, IoError> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Ok(name) = entry.file_name().into_string() else {
            return Err(IoError::UnexpectedEntry(path));
        };
        if name.starts_with('.') {
            log::debug!("Skipping hidden entry {}", path.display());
            continue;
        }
        entries.push((name, path));
    }

    entries.sort();
    Ok(entries)
}
