//! File-system discovery of firmware version folders and package files.

use std::ffi::OsStr;
use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::stats::VersionPattern;

/// A firmware folder whose name carries a version number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFolder {
    pub version: u64,
    pub name: String,
    pub path: PathBuf,
}

/// File type of `entry`, following symbolic links.
///
/// Returns `None` for a dangling link.
async fn resolved_type(entry: &tokio::fs::DirEntry) -> io::Result<Option<FileType>> {
    let file_type = entry.file_type().await?;
    if !file_type.is_symlink() {
        return Ok(Some(file_type));
    }
    match tokio::fs::metadata(entry.path()).await {
        Ok(metadata) => Ok(Some(metadata.file_type())),
        Err(e) => {
            debug!(path = %entry.path().display(), error = %e, "Skipping dangling link");
            Ok(None)
        }
    }
}

/// Lists the version folders directly under `base`.
///
/// Entries that are not directories or whose names do not match `pattern`
/// are skipped. The result is sorted by version number, then folder name.
///
/// # Errors
///
/// Returns `Err` if `base` cannot be read.
pub async fn version_folders(base: &Path, pattern: &VersionPattern) -> io::Result<Vec<VersionFolder>> {
    let mut folders = Vec::new();
    let mut entries = tokio::fs::read_dir(base).await?;

    while let Some(entry) = entries.next_entry().await? {
        if !resolved_type(&entry).await?.is_some_and(|t| t.is_dir()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match pattern.parse(&name) {
            Some(version) => folders.push(VersionFolder {
                version,
                name,
                path: entry.path(),
            }),
            None => debug!(folder = %name, "Skipping folder without version number"),
        }
    }

    folders.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.name.cmp(&b.name)));
    Ok(folders)
}

/// Lists the files in `dir` (non-recursive) with the given extension,
/// sorted by path.
///
/// # Errors
///
/// Returns `Err` if `dir` cannot be read.
pub async fn package_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }
        if resolved_type(&entry).await?.is_some_and(|t| t.is_file()) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
