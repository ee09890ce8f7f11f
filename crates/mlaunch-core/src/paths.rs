//! Lexical path helpers used by the settings resolver.
//!
//! None of these touch the filesystem: paths are composed and normalized
//! purely from their components, so they work for directories that do not
//! exist yet (e.g. a build output directory before the first build).

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components out of `path`.
///
/// A `..` directly below the root is dropped, matching how shells and
/// Node's `path.resolve` treat `/..`. Leading `..` components of a relative
/// path are preserved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Resolve `value` against `base` into a normalized absolute path.
///
/// `base` is expected to be absolute; an absolute `value` ignores it.
pub fn absolutize(base: &Path, value: impl AsRef<Path>) -> PathBuf {
    let value = value.as_ref();
    if value.is_absolute() {
        normalize(value)
    } else {
        normalize(&base.join(value))
    }
}

/// Expand a leading `~` or `~/` against `home`.
///
/// Returns `None` when `value` is not home-relative (`~user/...` included).
pub fn expand_home(value: &str, home: &Path) -> Option<PathBuf> {
    if value == "~" {
        return Some(normalize(home));
    }
    #[cfg(windows)]
    let rest = value
        .strip_prefix("~/")
        .or_else(|| value.strip_prefix("~\\"))?;
    #[cfg(not(windows))]
    let rest = value.strip_prefix("~/")?;
    Some(normalize(&home.join(rest)))
}

/// Render a path the way it is stored in the settings map.
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
