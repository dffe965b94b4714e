//! Input validation and separator predicates
//!
//! Helpers shared by the engine: turning generic path arguments into `&str`
//! and answering lexical questions about leading and trailing separators.

use crate::error::{PathError, Result};
use crate::platform::Platform;
use std::path::Path;

/// Borrow a path argument as a string
///
/// Fails with [`PathError::NotUnicode`] when the path is not valid Unicode.
///
/// # Examples
/// ```
/// use pathfx::check_path;
///
/// assert_eq!(check_path("a/b").unwrap(), "a/b");
/// ```
pub fn check_path<P: AsRef<Path> + ?Sized>(path: &P) -> Result<&str> {
    let path = path.as_ref();
    path.to_str().ok_or_else(|| PathError::NotUnicode {
        path: path.to_string_lossy().into_owned(),
    })
}

/// Validate every argument of a variadic call before any of them is used
pub(crate) fn check_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<&str>> {
    paths.iter().map(|path| check_path(path)).collect()
}

pub(crate) fn has_leading_separator(platform: Platform, path: &str) -> bool {
    path.chars().next().is_some_and(|c| platform.is_separator(c))
}

pub(crate) fn has_trailing_separator(platform: Platform, path: &str) -> bool {
    path.chars().next_back().is_some_and(|c| platform.is_separator(c))
}

/// Whether `path` is absolute under `platform`
///
/// Unix paths are absolute when they start with `/`. Windows paths are
/// absolute when they start with either separator, or with a drive letter
/// followed by a separator (`C:\`, `d:/`).
pub(crate) fn is_absolute(platform: Platform, path: &str) -> bool {
    if has_leading_separator(platform, path) {
        return true;
    }
    match platform {
        Platform::Unix => false,
        Platform::Windows => {
            let mut chars = path.chars();
            matches!(
                (chars.next(), chars.next(), chars.next()),
                (Some(drive), Some(':'), Some(sep))
                    if drive.is_ascii_alphabetic() && platform.is_separator(sep)
            )
        }
    }
}
