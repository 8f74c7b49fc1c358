//! Slash-delimited archive paths.
//!
//! # Path Convention
//!
//! - Root: empty string `""`
//! - Entry in root: `"photos"`
//! - Nested entry: `"photos/2024/beach.png"`
//! - No leading or trailing slashes once normalized

/// Split a path into its non-empty segments.
///
/// Leading, trailing and doubled separators are tolerated.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Normalize a path by dropping empty segments.
pub fn normalize(path: &str) -> String {
    segments(path).collect::<Vec<_>>().join("/")
}

/// Join a child name onto a parent path.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Every prefix of `path`, from the first segment to the full path.
///
/// `"a/b/c"` yields `["a", "a/b", "a/b/c"]`; the root yields nothing.
pub fn prefixes(path: &str) -> Vec<String> {
    let mut built = String::new();
    segments(path)
        .map(|part| {
            if !built.is_empty() {
                built.push('/');
            }
            built.push_str(part);
            built.clone()
        })
        .collect()
}

/// Proper ancestors of `path` (excluding the root and the path itself).
pub fn ancestors(path: &str) -> Vec<String> {
    let mut all = prefixes(path);
    all.pop();
    all
}
