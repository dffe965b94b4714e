//! The path engine
//!
//! A [`PathFx`] binds one [`Platform`] convention and one [`JoinPolicy`]. It
//! holds no other state, so it is `Copy` and can be shared freely. The
//! operations themselves live in the `normalize`, `relative` and `components`
//! modules as further `impl PathFx` blocks.

use crate::platform::Platform;

/// How `join` treats non-first arguments that begin with a separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinPolicy {
    /// Treat every argument as a plain run of fragments. Only the first
    /// argument's leading separator and the last argument's trailing
    /// separator survive.
    #[default]
    Permissive,
    /// Reject any argument after the first that begins with a separator,
    /// since it most likely was meant as an absolute path.
    Strict,
}

/// Pure path string engine for one platform convention
///
/// # Examples
/// ```
/// use pathfx::{Platform, PathFx};
///
/// let unix = PathFx::UNIX;
/// assert_eq!(unix.join(["/a", "b", "../c"]).unwrap(), "/a/c");
///
/// let win = PathFx::new(Platform::Windows);
/// assert_eq!(win.join(["C:/a", "b"]).unwrap(), "C:\\a\\b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathFx {
    platform: Platform,
    join_policy: JoinPolicy,
}

impl PathFx {
    /// Engine for the Unix convention
    pub const UNIX: PathFx = PathFx::new(Platform::Unix);

    /// Engine for the Windows convention
    pub const WINDOWS: PathFx = PathFx::new(Platform::Windows);

    /// Create a permissive engine for `platform`
    pub const fn new(platform: Platform) -> Self {
        PathFx {
            platform,
            join_policy: JoinPolicy::Permissive,
        }
    }

    /// Create an engine for the convention of the host platform
    pub fn detect() -> Self {
        Self::new(Platform::detect())
    }

    /// Same engine with a different `join` policy
    ///
    /// ```
    /// use pathfx::{JoinPolicy, PathFx};
    ///
    /// let strict = PathFx::UNIX.with_join_policy(JoinPolicy::Strict);
    /// assert!(strict.join(["/a", "/b"]).is_err());
    /// assert_eq!(PathFx::UNIX.join(["/a", "/b"]).unwrap(), "/a/b");
    /// ```
    pub const fn with_join_policy(self, join_policy: JoinPolicy) -> Self {
        PathFx {
            platform: self.platform,
            join_policy,
        }
    }

    /// Convention this engine is bound to
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Canonical separator used when rendering paths
    pub const fn separator(&self) -> char {
        self.platform.separator()
    }

    /// Policy applied by [`PathFx::join`]
    pub const fn join_policy(&self) -> JoinPolicy {
        self.join_policy
    }

    /// Non-empty fragments of `path`, in order
    pub(crate) fn fragments<'a>(&self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let platform = self.platform;
        path.split(move |c| platform.is_separator(c))
            .filter(|fragment| !fragment.is_empty())
    }

    /// Render fragments with the canonical separator
    ///
    /// A leading separator is always kept, so an absolute path with no
    /// fragments renders as the bare separator. A trailing separator is only
    /// added after at least one fragment.
    pub(crate) fn render(&self, leading: bool, fragments: &[&str], trailing: bool) -> String {
        let separator = self.separator();
        let mut rendered = String::new();
        if leading {
            rendered.push(separator);
        }
        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                rendered.push(separator);
            }
            rendered.push_str(fragment);
        }
        if trailing && !fragments.is_empty() {
            rendered.push(separator);
        }
        rendered
    }
}

impl Default for PathFx {
    fn default() -> Self {
        Self::detect()
    }
}

impl From<Platform> for PathFx {
    fn from(platform: Platform) -> Self {
        Self::new(platform)
    }
}
