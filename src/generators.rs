//! Property test generators for path strings
//!
//! Strategies producing fragments and whole paths for property-based tests.
//! "Clean" paths are built only from plain fragments (no `.`, `..`, repeated
//! or trailing separators) so that normalization leaves them unchanged.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// A plain fragment: no separators, never `.` or `..`
    ///
    /// The first character is never a dot.
    pub fn fragment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,12}"
    }

    /// A file name, with or without an extension
    pub fn filename() -> impl Strategy<Value = String> {
        (
            "[a-zA-Z0-9_][a-zA-Z0-9_-]{0,12}",
            prop_oneof![
                Just(String::new()),
                Just(".rs".to_string()),
                Just(".txt".to_string()),
                Just(".tar.gz".to_string()),
                Just(".json".to_string()),
            ],
        )
            .prop_map(|(stem, ext)| format!("{}{}", stem, ext))
    }

    /// Sequence of plain fragments
    pub fn fragments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(Self::fragment(), 1..=6)
    }

    /// Clean relative Unix path
    pub fn relative_path() -> impl Strategy<Value = String> {
        Self::fragments().prop_map(|frags| frags.join("/"))
    }

    /// Clean absolute Unix path
    pub fn absolute_path() -> impl Strategy<Value = String> {
        Self::relative_path().prop_map(|path| format!("/{}", path))
    }

    /// Clean relative Windows path
    pub fn windows_path() -> impl Strategy<Value = String> {
        Self::relative_path().prop_map(|path| path.replace('/', "\\"))
    }

    /// Path with runs of mixed separators between fragments
    pub fn path_with_mixed_separators() -> impl Strategy<Value = String> {
        prop::collection::vec(
            (
                Self::fragment(),
                prop_oneof![Just("/"), Just("\\"), Just("//"), Just("\\/"), Just("/\\\\")],
            ),
            1..=5,
        )
        .prop_map(|parts| {
            parts
                .into_iter()
                .map(|(fragment, separator)| format!("{}{}", separator, fragment))
                .collect::<String>()
        })
    }

    /// Path containing `.` and `..` fragments
    pub fn path_with_dots() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(
                prop_oneof![
                    3 => Self::fragment(),
                    1 => Just(".".to_string()),
                    1 => Just("..".to_string()),
                ],
                0..=8,
            ),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(frags, leading, trailing)| {
                let mut path = frags.join("/");
                if leading {
                    path.insert(0, '/');
                }
                if trailing {
                    path.push('/');
                }
                path
            })
    }

    /// Generate all kinds of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::relative_path(),
            2 => Self::absolute_path(),
            2 => Self::windows_path(),
            2 => Self::path_with_mixed_separators(),
            2 => Self::path_with_dots(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn fragments_have_no_separators(fragment in PathGenerators::fragment()) {
            prop_assert!(!fragment.is_empty());
            prop_assert!(!fragment.contains('/'));
            prop_assert!(!fragment.contains('\\'));
            prop_assert!(fragment != "." && fragment != "..");
        }

        #[test]
        fn absolute_paths_are_clean(path in PathGenerators::absolute_path()) {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.ends_with('/'));
            prop_assert!(!path.contains("//"));
        }

        #[test]
        fn generators_dont_panic(_path in PathGenerators::any_path()) {}
    }
}
