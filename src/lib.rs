//! # pathfx
//!
//! Pure, platform-configurable manipulation of path strings.
//!
//! This crate joins, splits and normalizes paths, and derives base names,
//! extensions and parent directories, without ever touching a filesystem.
//! Each [`PathFx`] engine is bound to one [`Platform`] convention, so Windows
//! paths can be handled on a Unix host and the other way around.
//!
//! ## Features
//!
//! - **Fragment algebra**: split, join and normalize with `.`/`..` resolution
//! - **Relative paths**: lexical `relative` and fragment-wise containment
//! - **Derived components**: `basename`, `extname`, `dirname`
//! - **Separator rewriting**: `to_win_path` / `to_unix_path`
//! - **Convenience surface**: free functions bound to a host-detected default
//!
//! ## Examples
//!
//! ### Explicit engines
//!
//! ```rust
//! use pathfx::PathFx;
//!
//! let unix = PathFx::UNIX;
//! assert_eq!(unix.join(["/a", "b", "../c"]).unwrap(), "/a/c");
//! assert_eq!(unix.relative("/a/b/c", "/a/d").unwrap(), "../../d");
//! assert_eq!(unix.dirname("/a/b/c.txt").unwrap(), "/a/b");
//!
//! let win = PathFx::WINDOWS;
//! assert_eq!(win.normalize("C:/a//b/./c").unwrap(), "C:\\a\\b\\c");
//! ```
//!
//! ### Strict joins
//!
//! ```rust
//! use pathfx::{JoinPolicy, PathError, PathFx};
//!
//! let strict = PathFx::UNIX.with_join_policy(JoinPolicy::Strict);
//! assert!(matches!(
//!     strict.join(["/srv", "/etc/passwd"]),
//!     Err(PathError::UnexpectedAbsolute { index: 1, .. })
//! ));
//! ```
//!
//! ### Separator rewriting
//!
//! ```rust
//! use pathfx::{to_unix_path, to_win_path};
//!
//! assert_eq!(to_win_path("/a/b").unwrap(), "\\a\\b");
//! assert_eq!(to_unix_path("C:\\a\\b").unwrap(), "C:/a/b");
//! ```

mod components;
mod engine;
mod error;
mod normalize;
mod platform;
mod relative;
mod validate;

pub mod global;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use engine::{JoinPolicy, PathFx};
pub use error::{ErrorKind, PathError, Result};
pub use normalize::{to_unix_path, to_win_path};
pub use platform::{Platform, UNIX_SEPARATOR, WINDOWS_SEPARATOR};
pub use validate::check_path;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
