//! Filesystem helpers: directory listing for the chooser, archive discovery,
//! and resolution of user-supplied directory paths.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Immediate subdirectories and archive files of one directory, each sorted
/// by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }
}

/// Final path component as text, or an empty string for paths like `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// True when `path` ends in `.<extension>` (ASCII case-insensitive).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

pub fn list_dirs_and_files(dir: &Path, extension: &str) -> Result<Listing> {
    let mut listing = Listing::default();
    for entry in fs::read_dir(dir).map_err(|e| map_io(dir, e))? {
        let path = entry?.path();
        if path.is_dir() {
            listing.directories.push(path);
        } else if path.is_file() && has_extension(&path, extension) {
            listing.files.push(path);
        }
    }
    listing.directories.sort();
    listing.files.sort();
    debug!(
        "Listed {:?}: {} directories, {} archives",
        dir,
        listing.directories.len(),
        listing.files.len()
    );
    Ok(listing)
}

pub fn list_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| map_io(dir, e))? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Archive files directly inside `dir`, sorted by name.
pub fn list_archives(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    Ok(list_dirs_and_files(dir, extension)?.files)
}

/// Resolve `path` to an absolute, existing, readable directory.
pub fn resolve_directory(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument {
            arg: "directory",
            value: String::new(),
        });
    }
    let resolved = fs::canonicalize(path).map_err(|e| map_io(path, e))?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory(resolved));
    }
    fs::read_dir(&resolved).map_err(|e| map_io(&resolved, e))?;
    Ok(resolved)
}

fn map_io(path: &Path, e: std::io::Error) -> Error {
    match e.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
        _ => Error::Io(e),
    }
}
