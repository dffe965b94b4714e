//! Path conventions and host detection

use crate::error::PathError;
use std::fmt;
use std::str::FromStr;

/// Unix join separator
pub const UNIX_SEPARATOR: char = '/';

/// Windows join separator
pub const WINDOWS_SEPARATOR: char = '\\';

/// A platform path convention
///
/// The convention fixes which characters delimit fragments and which single
/// character is used when rendering joined paths.
///
/// # Examples
/// ```
/// use pathfx::Platform;
///
/// assert_eq!(Platform::Unix.separator(), '/');
/// assert!(Platform::Windows.is_separator('/'));
/// assert!(!Platform::Unix.is_separator('\\'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `\` joins, both `/` and `\` split
    Windows,
    /// `/` joins and splits
    Unix,
}

impl Platform {
    /// Classify a platform identifier such as `"win32"`, `"Windows"` or `"linux"`.
    ///
    /// Any identifier containing `win` (in any case) is Windows; everything else
    /// is Unix.
    ///
    /// ```
    /// use pathfx::Platform;
    ///
    /// assert_eq!(Platform::from_identifier("Win32"), Platform::Windows);
    /// assert_eq!(Platform::from_identifier("linux"), Platform::Unix);
    /// assert_eq!(Platform::from_identifier(""), Platform::Unix);
    /// ```
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.to_ascii_lowercase().contains("win") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Convention of the host this binary was built for.
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Platform whose canonical separator is `separator`.
    pub fn from_separator(separator: char) -> Result<Self, PathError> {
        match separator {
            UNIX_SEPARATOR => Ok(Platform::Unix),
            WINDOWS_SEPARATOR => Ok(Platform::Windows),
            separator => Err(PathError::InvalidSeparator { separator }),
        }
    }

    /// Canonical join separator
    pub const fn separator(self) -> char {
        match self {
            Platform::Windows => WINDOWS_SEPARATOR,
            Platform::Unix => UNIX_SEPARATOR,
        }
    }

    /// Whether `c` delimits fragments under this convention
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Platform::Windows => is_any_separator(c),
            Platform::Unix => c == UNIX_SEPARATOR,
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Platform::Unix => 0,
            Platform::Windows => 1,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        if value == 1 {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Either separator character, regardless of convention
pub(crate) const fn is_any_separator(c: char) -> bool {
    c == UNIX_SEPARATOR || c == WINDOWS_SEPARATOR
}

impl Default for Platform {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::Unix => f.write_str("unix"),
        }
    }
}

impl FromStr for Platform {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win32" | "win" => Ok(Platform::Windows),
            "unix" | "posix" => Ok(Platform::Unix),
            _ => Err(PathError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
