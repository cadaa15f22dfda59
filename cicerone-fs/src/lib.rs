//! Filesystem helpers for catalog files, built on `cap-std` and `camino`.
//!
//! Every helper resolves an ambient base directory (the filesystem root, a
//! Windows drive prefix or the current directory) and then works relative
//! to it through a capability handle.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read a UTF-8 text file, such as a JSON catalog document.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Return whether `path` is a regular file rather than a directory or other
/// entry.
///
/// A missing file or parent directory is reported as an
/// [`io::ErrorKind::NotFound`] error.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|metadata| metadata.is_file())
}

/// Create every missing directory above `path`.
pub fn create_parent_dirs(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (base, relative) = split_ambient_base(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    create_dirs_under(&base, &relative)
}

fn create_dirs_under(base: &Utf8Path, relative: &Utf8Path) -> io::Result<()> {
    fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?.create_dir_all(relative)
}

/// Split `path` into the ambient directory it starts from and the remainder.
///
/// Leading `..` components belong to the base: the capability handle only
/// reaches below the directory it was opened on.
fn split_ambient_base(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut base = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(prefix) => base.push(prefix.as_str()),
            Utf8Component::RootDir => base.push(std::path::MAIN_SEPARATOR_STR),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir if relative.as_str().is_empty() => base.push(".."),
            other => relative.push(other),
        }
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    (base, relative)
}
