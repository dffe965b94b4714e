//! Process-wide convenience surface
//!
//! Free functions mirroring every [`PathFx`] operation, bound to a default
//! convention that is detected from the host on first use. The default can be
//! overridden with [`set_platform`] or [`set_path_separator`]; the change is
//! seen by every later call to the free functions in this module and by
//! nothing else. Engines built explicitly with [`PathFx::new`] never change.
//!
//! Updates are atomic, but the free functions read the convention at call
//! time, so set it once during start-up before other threads rely on it.
//! Code that needs a fixed convention should hold a [`PathFx`] instead.
//!
//! ```
//! use pathfx::global;
//!
//! global::set_path_separator('/').unwrap();
//! assert_eq!(global::join(["a", "b"]).unwrap(), "a/b");
//! ```

use crate::engine::PathFx;
use crate::error::Result;
use crate::platform::Platform;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::LazyLock;

pub use crate::normalize::{to_unix_path, to_win_path};

static CURRENT: LazyLock<AtomicU8> = LazyLock::new(|| AtomicU8::new(Platform::detect().as_u8()));

/// Convention currently used by the free functions
pub fn platform() -> Platform {
    Platform::from_u8(CURRENT.load(Ordering::Relaxed))
}

/// Override the convention used by the free functions
pub fn set_platform(platform: Platform) {
    CURRENT.store(platform.as_u8(), Ordering::Relaxed);
}

/// Override the convention by its canonical separator, `/` or `\`
///
/// Fails with [`PathError::InvalidSeparator`](crate::PathError::InvalidSeparator)
/// for any other character, leaving the current convention untouched.
pub fn set_path_separator(separator: char) -> Result<()> {
    set_platform(Platform::from_separator(separator)?);
    Ok(())
}

/// Engine for the current convention
pub fn fx() -> PathFx {
    PathFx::new(platform())
}

/// Split `path` into fragments, see [`PathFx::split_path`]
pub fn split_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    fx().split_path(path)
}

/// Join `paths` with the current convention, see [`PathFx::join`]
pub fn join<I, P>(paths: I) -> Result<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    fx().join(paths)
}

/// Normalize `path`, see [`PathFx::normalize`]
pub fn normalize<P: AsRef<Path>>(path: P) -> Result<String> {
    fx().normalize(path)
}

/// Relative path from `from` to `to`, see [`PathFx::relative`]
pub fn relative<F: AsRef<Path>, T: AsRef<Path>>(from: F, to: T) -> Result<String> {
    fx().relative(from, to)
}

/// Fragment-wise containment, see [`PathFx::is_path_inside`]
pub fn is_path_inside<C: AsRef<Path>, P: AsRef<Path>>(containing_path: C, path: P) -> Result<bool> {
    fx().is_path_inside(containing_path, path)
}

/// Whether `path` is relative, see [`PathFx::is_relative`]
pub fn is_relative<P: AsRef<Path>>(path: P) -> Result<bool> {
    fx().is_relative(path)
}

/// Whether `path` is absolute, see [`PathFx::is_absolute`]
pub fn is_absolute<P: AsRef<Path>>(path: P) -> Result<bool> {
    fx().is_absolute(path)
}

/// Number of fragments, see [`PathFx::path_depth`]
pub fn path_depth<P: AsRef<Path>>(path: P) -> Result<usize> {
    fx().path_depth(path)
}

/// Last fragment, see [`PathFx::basename`]
pub fn basename<P: AsRef<Path>>(path: P) -> Result<String> {
    fx().basename(path)
}

/// Extension of the base name, see [`PathFx::extname`]
pub fn extname<P: AsRef<Path>>(path: P) -> Result<String> {
    fx().extname(path)
}

/// Parent directory, see [`PathFx::dirname`]
pub fn dirname<P: AsRef<Path>>(path: P) -> Result<String> {
    fx().dirname(path)
}

/// Strip trailing separators, see [`PathFx::remove_trailing_slashes`]
pub fn remove_trailing_slashes<P: AsRef<Path>>(path: P) -> Result<String> {
    fx().remove_trailing_slashes(path)
}
