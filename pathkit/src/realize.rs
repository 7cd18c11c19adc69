//! Canonical path resolution.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Resolve each path to its canonical absolute form.
///
/// Every element goes through the operating system's canonicalization
/// primitive, which follows symlinks and requires the path to exist. The
/// first failure aborts the whole call; there is no partial output.
///
/// # Errors
///
/// Returns [`Error::Realize`] naming the failing input and carrying the OS
/// error, or [`Error::NonUtf8Path`] if the canonical form is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// let realized = pathkit::realize(&["/tmp".to_string()]).unwrap();
/// assert!(realized[0].starts_with('/'));
/// ```
pub fn realize(paths: &[String]) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let canonical = fs::canonicalize(Path::new(path)).map_err(|source| Error::Realize {
            path: path.clone(),
            source,
        })?;
        let canonical = canonical
            .into_os_string()
            .into_string()
            .map_err(|bytes| Error::NonUtf8Path { path: bytes.into() })?;
        out.push(canonical);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_realize_empty_input() {
        assert_eq!(realize(&[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_realize_existing_directory() {
        let dir = tempdir().unwrap();
        let input = dir.path().to_str().unwrap().to_string();

        let realized = realize(&[input]).unwrap();
        let expected = fs::canonicalize(dir.path()).unwrap();
        assert_eq!(realized, vec![expected.to_str().unwrap().to_string()]);
    }

    #[test]
    fn test_realize_nonexistent_fails_and_names_path() {
        let result = realize(&["/nonexistent/path/xyz".to_string()]);
        let err = result.unwrap_err();
        assert!(err.is_realize());
        let display = format!("{err}");
        assert!(display.contains("/nonexistent/path/xyz"));
        assert!(display.contains("os error"));
    }

    #[test]
    fn test_realize_aborts_whole_batch() {
        let dir = tempdir().unwrap();
        let good = dir.path().to_str().unwrap().to_string();
        let result = realize(&[good, "/nonexistent/path/xyz".to_string()]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_realize_resolves_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");

        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        let realized = realize(&[link.to_str().unwrap().to_string()]).unwrap();
        let expected = fs::canonicalize(&target).unwrap();
        assert_eq!(realized, vec![expected.to_str().unwrap().to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_realize_dangling_symlink_fails() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling");
        symlink(dir.path().join("missing"), &link).unwrap();

        let result = realize(&[link.to_str().unwrap().to_string()]);
        assert!(result.is_err());
    }
}
