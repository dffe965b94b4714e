//! Splitting, joining and normalization
//!
//! This module holds the fragment algebra: paths are split into non-empty
//! fragments, folded left to right with `.` dropped and `..` popping the last
//! retained fragment, and rendered back with the engine's canonical separator.

use crate::engine::{JoinPolicy, PathFx};
use crate::error::{PathError, Result};
use crate::platform::{is_any_separator, UNIX_SEPARATOR, WINDOWS_SEPARATOR};
use crate::validate::{check_path, check_paths, has_leading_separator, has_trailing_separator};
use std::path::Path;

impl PathFx {
    /// Split a path into its non-empty fragments
    ///
    /// Repeated, leading and trailing separators never produce empty
    /// fragments. `.` and `..` are returned as they appear.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.split_path("/a//b/").unwrap(), ["a", "b"]);
    /// assert_eq!(PathFx::WINDOWS.split_path("C:\\a/b").unwrap(), ["C:", "a", "b"]);
    /// assert!(PathFx::UNIX.split_path("").unwrap().is_empty());
    /// ```
    pub fn split_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = check_path(&path)?;
        Ok(self.fragments(path).map(str::to_owned).collect())
    }

    /// Join any number of paths into one
    ///
    /// Fragments from all inputs are folded left to right: `.` is dropped and
    /// `..` removes the last retained fragment (or does nothing when there is
    /// none). The result keeps a leading separator if the first path had one
    /// and a trailing separator if the last path had one, and uses the
    /// canonical separator exclusively.
    ///
    /// Every argument is validated before any output is built. Under
    /// [`JoinPolicy::Strict`] an argument after the first that begins with a
    /// separator fails with [`PathError::UnexpectedAbsolute`].
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.join(["/a", "b", "../c"]).unwrap(), "/a/c");
    /// assert_eq!(PathFx::UNIX.join(["a/", "./b/"]).unwrap(), "a/b/");
    /// assert_eq!(PathFx::WINDOWS.join(["a/b", "c"]).unwrap(), "a\\b\\c");
    /// assert_eq!(PathFx::UNIX.join(Vec::<&str>::new()).unwrap(), "");
    /// ```
    pub fn join<I, P>(&self, paths: I) -> Result<String>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<P> = paths.into_iter().collect();
        let paths = check_paths(&paths)?;

        if self.join_policy() == JoinPolicy::Strict {
            if let Some((index, path)) = paths
                .iter()
                .enumerate()
                .skip(1)
                .find(|(_, path)| has_leading_separator(self.platform(), path))
            {
                return Err(PathError::UnexpectedAbsolute {
                    index,
                    path: path.to_string(),
                });
            }
        }

        let leading = paths
            .first()
            .is_some_and(|path| has_leading_separator(self.platform(), path));
        let trailing = paths
            .last()
            .is_some_and(|path| has_trailing_separator(self.platform(), path));

        let mut composed: Vec<&str> = Vec::new();
        for path in &paths {
            for fragment in self.fragments(path) {
                match fragment {
                    "." => {}
                    ".." => {
                        composed.pop();
                    }
                    _ => composed.push(fragment),
                }
            }
        }

        Ok(self.render(leading, &composed, trailing))
    }

    /// Collapse repeated separators and resolve `.` and `..`
    ///
    /// Equivalent to joining the single path.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.normalize("/a//./b/../c/").unwrap(), "/a/c/");
    /// assert_eq!(PathFx::WINDOWS.normalize("a/b\\\\c").unwrap(), "a\\b\\c");
    /// ```
    pub fn normalize<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.join([path])
    }

    /// Strip every trailing separator
    ///
    /// Empty input gives an empty string; a path made only of separators
    /// also gives an empty string. Only this engine's separators are stripped:
    /// on Unix a trailing `\` is an ordinary character and is kept.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.remove_trailing_slashes("/a/b//").unwrap(), "/a/b");
    /// assert_eq!(PathFx::UNIX.remove_trailing_slashes("a\\").unwrap(), "a\\");
    /// assert_eq!(PathFx::WINDOWS.remove_trailing_slashes("a\\/").unwrap(), "a");
    /// ```
    pub fn remove_trailing_slashes<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = check_path(&path)?;
        let platform = self.platform();
        Ok(path
            .trim_end_matches(|c| platform.is_separator(c))
            .to_string())
    }

    /// Rewrite separators Windows style, see [`to_win_path`]
    pub fn to_win_path<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        to_win_path(path)
    }

    /// Rewrite separators Unix style, see [`to_unix_path`]
    pub fn to_unix_path<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        to_unix_path(path)
    }
}

/// Replace every run of `/` or `\` with a single `\`
///
/// This is plain text rewriting and does not depend on any engine's
/// convention.
///
/// # Examples
/// ```
/// use pathfx::to_win_path;
///
/// assert_eq!(to_win_path("/a/b").unwrap(), "\\a\\b");
/// assert_eq!(to_win_path("a//b\\/c").unwrap(), "a\\b\\c");
/// ```
pub fn to_win_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = check_path(&path)?;
    Ok(collapse_separators(path, WINDOWS_SEPARATOR))
}

/// Replace every run of `/` or `\` with a single `/`
///
/// # Examples
/// ```
/// use pathfx::to_unix_path;
///
/// assert_eq!(to_unix_path("C:\\a\\b").unwrap(), "C:/a/b");
/// assert_eq!(to_unix_path("a\\\\b//c").unwrap(), "a/b/c");
/// ```
pub fn to_unix_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = check_path(&path)?;
    Ok(collapse_separators(path, UNIX_SEPARATOR))
}

fn collapse_separators(path: &str, separator: char) -> String {
    let mut rewritten = String::with_capacity(path.len());
    let mut in_run = false;
    for c in path.chars() {
        if is_any_separator(c) {
            if !in_run {
                rewritten.push(separator);
            }
            in_run = true;
        } else {
            rewritten.push(c);
            in_run = false;
        }
    }
    rewritten
}
