//! Relative paths, containment and depth

use crate::engine::PathFx;
use crate::error::{PathError, Result};
use crate::validate::{check_path, has_trailing_separator, is_absolute};
use std::path::Path;

impl PathFx {
    /// Path that leads from `from` to `to`
    ///
    /// Both paths must be absolute. The fragments are compared in lock-step;
    /// each remaining fragment of `from` past the first difference becomes a
    /// `..`, followed by the remaining fragments of `to`. A trailing separator
    /// on `to` is kept when the result is not empty. Purely lexical.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// let fx = PathFx::UNIX;
    /// assert_eq!(fx.relative("/a/b", "/a/b/c/d").unwrap(), "c/d");
    /// assert_eq!(fx.relative("/a/b/c", "/a/d").unwrap(), "../../d");
    /// assert_eq!(fx.relative("/a", "/a").unwrap(), "");
    /// assert!(fx.relative("a", "/a").is_err());
    /// ```
    pub fn relative<F, T>(&self, from: F, to: T) -> Result<String>
    where
        F: AsRef<Path>,
        T: AsRef<Path>,
    {
        let from_path = check_path(&from)?;
        let to_path = check_path(&to)?;
        for path in [from_path, to_path] {
            if !is_absolute(self.platform(), path) {
                return Err(PathError::NotAbsolute {
                    path: path.to_string(),
                });
            }
        }

        let from_frags: Vec<&str> = self.fragments(from_path).collect();
        let to_frags: Vec<&str> = self.fragments(to_path).collect();
        let common = from_frags
            .iter()
            .zip(&to_frags)
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = vec![".."; from_frags.len() - common];
        parts.extend_from_slice(&to_frags[common..]);

        let trailing = has_trailing_separator(self.platform(), to_path);
        Ok(self.render(false, &parts, trailing))
    }

    /// Whether `path` lies inside `containing_path`
    ///
    /// True when the fragments of `containing_path` are a prefix of the
    /// fragments of `path`. Comparison is per fragment, so `/foo/ba` does not
    /// contain `/foo/bar`. A path contains itself.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// let fx = PathFx::UNIX;
    /// assert!(fx.is_path_inside("/foo", "/foo/bar").unwrap());
    /// assert!(!fx.is_path_inside("/foo/ba", "/foo/bar").unwrap());
    /// assert!(!fx.is_path_inside("/foo/bar", "/foo").unwrap());
    /// ```
    pub fn is_path_inside<C, P>(&self, containing_path: C, path: P) -> Result<bool>
    where
        C: AsRef<Path>,
        P: AsRef<Path>,
    {
        let containing_path = check_path(&containing_path)?;
        let path = check_path(&path)?;
        let mut inner = self.fragments(path);
        Ok(self
            .fragments(containing_path)
            .all(|fragment| inner.next() == Some(fragment)))
    }

    /// Whether `path` is relative under this engine's convention
    ///
    /// On Unix a path is absolute iff it starts with `/`. On Windows it is
    /// absolute iff it starts with `/` or `\`, or with a drive letter followed
    /// by a separator.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert!(PathFx::UNIX.is_relative("a/b").unwrap());
    /// assert!(!PathFx::UNIX.is_relative("/a/b").unwrap());
    /// assert!(PathFx::UNIX.is_relative("C:\\a").unwrap());
    /// assert!(!PathFx::WINDOWS.is_relative("C:\\a").unwrap());
    /// ```
    pub fn is_relative<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let path = check_path(&path)?;
        Ok(!is_absolute(self.platform(), path))
    }

    /// Negation of [`PathFx::is_relative`]
    pub fn is_absolute<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        self.is_relative(path).map(|relative| !relative)
    }

    /// Number of fragments in `path`
    ///
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.path_depth("/a/b/c").unwrap(), 3);
    /// assert_eq!(PathFx::UNIX.path_depth("/").unwrap(), 0);
    /// ```
    pub fn path_depth<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = check_path(&path)?;
        Ok(self.fragments(path).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PathGenerators;
    use proptest::prelude::*;

    #[test]
    fn test_relative() {
        let fx = PathFx::UNIX;
        assert_eq!(fx.relative("/a/b", "/a/b/c/d").unwrap(), "c/d");
        assert_eq!(fx.relative("/a/b/c", "/a/d").unwrap(), "../../d");
        assert_eq!(fx.relative("/a/b/c", "/a").unwrap(), "../..");
        assert_eq!(fx.relative("/a", "/b").unwrap(), "../b");
        assert_eq!(fx.relative("/", "/a/b").unwrap(), "a/b");
        assert_eq!(fx.relative("/a/b", "/").unwrap(), "../../");
        assert_eq!(fx.relative("/a//b/", "/a/b").unwrap(), "");
    }

    #[test]
    fn test_relative_keeps_trailing_separator() {
        let fx = PathFx::UNIX;
        assert_eq!(fx.relative("/a", "/a/b/").unwrap(), "b/");
        assert_eq!(fx.relative("/a/c", "/a/b/").unwrap(), "../b/");
        assert_eq!(fx.relative("/a", "/a/").unwrap(), "");
    }

    #[test]
    fn test_relative_to_root_keeps_trailing_separator() {
        let fx = PathFx::UNIX;
        assert_eq!(fx.relative("/a/b", "/").unwrap(), "../../");
        assert_eq!(fx.relative("/a/b", "/a/").unwrap(), "../");
        assert_eq!(fx.relative("/", "/").unwrap(), "");

        let win = PathFx::WINDOWS;
        assert_eq!(win.relative("\\a", "\\").unwrap(), "..\\");
    }

    #[test]
    fn test_relative_windows() {
        let fx = PathFx::WINDOWS;
        assert_eq!(fx.relative("C:\\a\\b", "C:/a/c").unwrap(), "..\\c");
        assert_eq!(fx.relative("C:\\a", "D:\\a").unwrap(), "..\\..\\D:\\a");
        assert_eq!(fx.relative("\\a", "\\a\\b\\").unwrap(), "b\\");
    }

    #[test]
    fn test_relative_requires_absolute_paths() {
        let fx = PathFx::UNIX;
        assert_eq!(
            fx.relative("a/b", "/a"),
            Err(PathError::NotAbsolute {
                path: "a/b".to_string()
            })
        );
        assert_eq!(
            fx.relative("/a", "b"),
            Err(PathError::NotAbsolute {
                path: "b".to_string()
            })
        );
        assert!(fx.relative("", "").is_err());
        assert!(PathFx::UNIX.relative("C:\\a", "C:\\b").is_err());
    }

    #[test]
    fn test_is_path_inside() {
        let fx = PathFx::UNIX;
        assert!(fx.is_path_inside("/foo", "/foo/bar").unwrap());
        assert!(fx.is_path_inside("/foo/bar", "/foo/bar").unwrap());
        assert!(fx.is_path_inside("/foo/", "/foo//bar/baz").unwrap());
        assert!(!fx.is_path_inside("/foo/ba", "/foo/bar").unwrap());
        assert!(!fx.is_path_inside("/foo/bar", "/foo/ba").unwrap());
        assert!(!fx.is_path_inside("/foo/bar", "/foo").unwrap());
        assert!(!fx.is_path_inside("/a/b", "/b/a").unwrap());
        assert!(fx.is_path_inside("", "/anything").unwrap());

        let win = PathFx::WINDOWS;
        assert!(win.is_path_inside("C:\\a", "C:/a/b").unwrap());
        assert!(!win.is_path_inside("C:\\a", "D:\\a\\b").unwrap());
    }

    #[test]
    fn test_is_relative() {
        let fx = PathFx::UNIX;
        assert!(fx.is_relative("a").unwrap());
        assert!(fx.is_relative("./a").unwrap());
        assert!(fx.is_relative("").unwrap());
        assert!(!fx.is_relative("/").unwrap());
        assert!(fx.is_absolute("/a").unwrap());

        let win = PathFx::WINDOWS;
        assert!(!win.is_relative("\\a").unwrap());
        assert!(!win.is_relative("/a").unwrap());
        assert!(!win.is_relative("c:/a").unwrap());
        assert!(win.is_relative("c:a").unwrap());
        assert!(win.is_relative("a\\b").unwrap());
    }

    #[test]
    fn test_path_depth() {
        let fx = PathFx::UNIX;
        assert_eq!(fx.path_depth("").unwrap(), 0);
        assert_eq!(fx.path_depth("a").unwrap(), 1);
        assert_eq!(fx.path_depth("/a//b/").unwrap(), 2);
        assert_eq!(fx.path_depth("a/../b").unwrap(), 3);
        assert_eq!(PathFx::WINDOWS.path_depth("C:\\a/b").unwrap(), 3);
    }

    proptest! {
        #[test]
        fn relative_to_self_is_empty(path in PathGenerators::absolute_path()) {
            prop_assert_eq!(PathFx::UNIX.relative(&path, &path).unwrap(), "");
        }

        #[test]
        fn path_is_inside_itself(path in PathGenerators::any_path()) {
            prop_assert!(PathFx::UNIX.is_path_inside(&path, &path).unwrap());
            prop_assert!(PathFx::WINDOWS.is_path_inside(&path, &path).unwrap());
        }

        #[test]
        fn joining_relative_onto_from_reaches_to(
            from in PathGenerators::absolute_path(),
            to in PathGenerators::absolute_path()
        ) {
            let fx = PathFx::UNIX;
            let rel = fx.relative(&from, &to).unwrap();
            prop_assert_eq!(fx.join([from.as_str(), rel.as_str()]).unwrap(), fx.normalize(&to).unwrap());
        }

        #[test]
        fn depth_matches_split(path in PathGenerators::any_path()) {
            let fx = PathFx::WINDOWS;
            prop_assert_eq!(fx.path_depth(&path).unwrap(), fx.split_path(&path).unwrap().len());
        }
    }
}
