//! Capability-based file helpers for the carpool CLI.
//!
//! Paths are UTF-8 ([`camino`]) and every operation goes through a
//! [`cap_std`] directory handle obtained with ambient authority, so callers
//! never touch `std::fs` directly.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
///
/// # Errors
/// Returns any I/O error raised while opening `path`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate `path` for writing, creating missing parent
/// directories first.
///
/// # Errors
/// Returns an error if `path` has no file name, a parent directory cannot be
/// created, or the file cannot be opened.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name)
}

/// Whether `path` exists and is a regular file.
///
/// # Errors
/// Returns an error if the parent directory cannot be opened or the entry
/// cannot be inspected. A missing entry surfaces as
/// [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Open the directory holding `path` and return it with the file name.
///
/// # Errors
/// Returns an error if `path` has no file name or its parent cannot be
/// opened.
pub fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Returns any I/O error raised while opening the base directory or creating
/// the missing components.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (base, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Split `path` into an opened anchor directory (the root, a Windows prefix
/// or the working directory) and the remainder relative to it.
fn split_anchor(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir if relative.as_str().is_empty() => {
                anchor.push(component);
            }
            other => relative.push(other),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((dir, relative))
}
