//! Filesystem seam for deliveries
//!
//! Every read and write performed by the reconciliation engine and the merge
//! algorithm goes through [`Filesystem`], so tests can observe or count I/O.
//! [`OsFilesystem`] is the real implementation.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::fs::{read_error, read_failed, write_error};
use crate::error::{AcError, Result};

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// File operations needed to deliver artifacts
///
/// All writes create missing parent directories.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Truncate-and-write `contents` to `path`
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Byte copy of a single file, replacing any existing destination file
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;

    /// Recursive copy; files at the same relative path are replaced, other
    /// destination files are left untouched
    fn copy_dir(&self, from: &Path, to: &Path) -> Result<()>;

    /// Entries of `dir` sorted by name; a missing directory lists as empty
    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>>;
}

/// Filesystem backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(parent, &e))?;
    }
    Ok(())
}

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| read_error(path, &e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        ensure_parent_dir(path)?;
        fs::write(path, contents).map_err(|e| write_error(path, &e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.is_file() {
            return Err(read_failed(
                from.display().to_string(),
                "source file does not exist",
            ));
        }
        ensure_parent_dir(to)?;
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| write_error(to, &e))
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.is_dir() {
            return Err(read_failed(
                from.display().to_string(),
                "source directory does not exist",
            ));
        }

        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry.map_err(|e| read_failed(from.display().to_string(), e.to_string()))?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| AcError::IoError {
                    message: format!("{}: {e}", entry.path().display()),
                })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| write_error(&target, &e))?;
            } else {
                ensure_parent_dir(&target)?;
                fs::copy(entry.path(), &target).map_err(|e| write_error(&target, &e))?;
            }
        }

        Ok(())
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_error(dir, &e)),
        };

        let mut listed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| read_error(dir, &e))?;
            let is_dir = entry.path().is_dir();
            listed.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        listed.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(listed)
    }
}
