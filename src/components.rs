//! Derived path components: base name, extension and parent directory

use crate::engine::PathFx;
use crate::error::Result;
use crate::validate::{check_path, has_leading_separator};
use std::path::Path;

impl PathFx {
    /// Last fragment of `path`, or an empty string when there is none
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.basename("/a/b/c.txt").unwrap(), "c.txt");
    /// assert_eq!(PathFx::UNIX.basename("/a/b/").unwrap(), "b");
    /// assert_eq!(PathFx::UNIX.basename("/").unwrap(), "");
    /// ```
    pub fn basename<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = check_path(&path)?;
        Ok(self.fragments(path).last().unwrap_or_default().to_string())
    }

    /// Extension of the base name, starting at its last `.`
    ///
    /// A name without a `.` has no extension. A name whose only `.` is its
    /// first character (`.bashrc`) is all extension.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.extname("/a/b/c.txt").unwrap(), ".txt");
    /// assert_eq!(PathFx::UNIX.extname("/a/b/c").unwrap(), "");
    /// assert_eq!(PathFx::UNIX.extname("archive.tar.gz").unwrap(), ".gz");
    /// ```
    pub fn extname<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let name = self.basename(path)?;
        Ok(match name.rfind('.') {
            Some(idx) => name[idx..].to_string(),
            None => String::new(),
        })
    }

    /// `path` without its last fragment
    ///
    /// Returns `.` when a relative path has no parent fragments and the bare
    /// separator when an absolute one has none.
    ///
    /// # Examples
    /// ```
    /// use pathfx::PathFx;
    ///
    /// assert_eq!(PathFx::UNIX.dirname("/a/b/c.txt").unwrap(), "/a/b");
    /// assert_eq!(PathFx::UNIX.dirname("a").unwrap(), ".");
    /// assert_eq!(PathFx::UNIX.dirname("/a").unwrap(), "/");
    /// assert_eq!(PathFx::WINDOWS.dirname("C:/a/b").unwrap(), "C:\\a");
    /// ```
    pub fn dirname<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = check_path(&path)?;
        let leading = has_leading_separator(self.platform(), path);
        let mut parts: Vec<&str> = self.fragments(path).collect();
        parts.pop();

        if parts.is_empty() {
            return Ok(if leading {
                self.separator().to_string()
            } else {
                ".".to_string()
            });
        }
        Ok(self.render(leading, &parts, false))
    }
}
