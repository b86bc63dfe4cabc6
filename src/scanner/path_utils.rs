//! Path normalization utilities.
//!
//! Ignore-set matching compares paths that reach the scanner by two routes:
//! typed by the operator at a prompt, and produced by directory traversal.
//! The same directory can be spelled many ways (`./a/../b/`, a relative path
//! versus an absolute one, NFC versus NFD Unicode), so both sides are reduced
//! to a single comparison form before matching.
//!
//! # Background
//!
//! macOS uses NFD (Decomposed) normalization for file paths, while Windows
//! and Linux typically use NFC (Composed) normalization. This means the same
//! visual filename can have different byte representations:
//!
//! - NFC: `café` - 'é' is U+00E9 (single code point)
//! - NFD: `café` - 'e' U+0065 + combining acute accent U+0301
//!
//! # Example
//!
//! ```
//! use dupescan::scanner::path_utils::lexical_normalize;
//! use std::path::{Path, PathBuf};
//!
//! assert_eq!(lexical_normalize(Path::new("a/./b//c/../d/")), PathBuf::from("a/b/d"));
//! ```

use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Normalize a path string to NFC (Composed) form.
///
/// ```
/// use dupescan::scanner::path_utils::normalize_path_str;
///
/// assert_eq!(normalize_path_str("cafe\u{0301}"), "café");
/// ```
#[must_use]
pub fn normalize_path_str(s: &str) -> String {
    s.nfc().collect()
}

/// Normalize a [`Path`] to NFC form.
///
/// If the path contains invalid UTF-8, it is returned unchanged.
#[must_use]
pub fn normalize_pathbuf(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(normalize_path_str(s)),
        None => path.to_path_buf(),
    }
}

/// Collapse `.`, `..` and redundant separators without touching the
/// filesystem.
///
/// `..` removes the preceding normal component; at the root it is dropped
/// (`/..` is `/`), and in a relative path with nothing left to remove it is
/// kept. An empty result becomes `.`. Symbolic links are not resolved, so
/// `link/..` may name a different directory than the filesystem would.
#[must_use]
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// The comparison form used for ignore matching: absolute against the
/// current directory, lexically normalized, NFC.
///
/// Falls back to the path as given when the current directory cannot be
/// determined.
#[must_use]
pub fn comparison_key(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_pathbuf(&lexical_normalize(&absolute))
}
