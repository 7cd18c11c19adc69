//! Lexical path normalization.
//!
//! Tidying never inspects the filesystem and never fails: it unifies
//! separators to `/`, collapses duplicate separators, and resolves `.` and
//! `..` segments purely by string manipulation. The transform is idempotent.

/// Normalize separators and redundant segments in each path.
///
/// Null elements pass through as null. For each string:
/// - backslashes become forward slashes;
/// - empty and `.` segments are dropped;
/// - `..` removes the preceding segment where one exists; leading `..` is
///   kept for relative paths and dropped at the root of absolute paths;
/// - trailing separators are removed;
/// - the empty string stays empty, and a relative path that cancels away
///   entirely becomes `.`.
///
/// # Examples
///
/// ```
/// let tidied = pathkit::tidy(&[
///     Some("a//b/./c".to_string()),
///     Some("a/b/../c".to_string()),
///     None,
/// ]);
/// assert_eq!(
///     tidied,
///     vec![Some("a/b/c".to_string()), Some("a/c".to_string()), None]
/// );
/// ```
#[must_use]
pub fn tidy(paths: &[Option<String>]) -> Vec<Option<String>> {
    paths
        .iter()
        .map(|path| path.as_deref().map(tidy_one))
        .collect()
}

fn tidy_one(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let translated = path.replace('\\', "/");
    let absolute = translated.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in translated.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
