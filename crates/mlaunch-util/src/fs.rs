use std::io::{ErrorKind, Write};
use std::path::Path;

/// Remove a directory tree if it exists.
/// Returns `true` when something was removed.
pub fn remove_dir_if_exists(path: &Path) -> std::io::Result<bool> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Write `contents` to `path` only if no file exists there yet.
/// Returns `false` (and leaves the file alone) when it already exists.
pub fn write_if_absent(path: &Path, contents: &str) -> std::io::Result<bool> {
    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };
    file.write_all(contents.as_bytes())?;
    Ok(true)
}
