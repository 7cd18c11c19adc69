//! Home-directory expansion.
//!
//! Expansion comes in two flavors. Native expansion resolves a leading `~`
//! against the host's own home directory. Windows-emulation expansion
//! reconstructs the Windows convention purely from environment variables
//! (`R_FS_HOME`, `USERPROFILE`, `HOMEDRIVE`+`HOMEPATH`), so Windows-style
//! home paths can be expanded on any host, which is what makes the behavior
//! portable and testable off-Windows.
//!
//! Unexpandable input is returned unchanged; the only failure mode is a
//! result exceeding [`PATH_LENGTH_MAX`](crate::PATH_LENGTH_MAX).

use crate::env::{EnvLookup, ProcessEnv};
use crate::error::{Error, Result};
use crate::PATH_LENGTH_MAX;

/// Expand a leading home-directory marker in each path.
///
/// Null elements pass through as null and empty strings stay empty. With
/// `windows_mode` set, expansion consults the process environment following
/// the Windows convention (see [`expand_with_env`]); otherwise `~` and
/// `~/rest` resolve against the host home directory and everything else is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`Error::PathTooLong`] if an expanded path would exceed
/// [`PATH_LENGTH_MAX`](crate::PATH_LENGTH_MAX). Missing expansion data is
/// never an error: the input comes back unchanged.
///
/// # Examples
///
/// ```
/// let paths = vec![Some("/already/absolute".to_string()), None];
/// let expanded = pathkit::expand(&paths, false).unwrap();
/// assert_eq!(expanded, paths);
/// ```
pub fn expand(paths: &[Option<String>], windows_mode: bool) -> Result<Vec<Option<String>>> {
    expand_with_env(paths, windows_mode, &ProcessEnv)
}

/// Expand home-directory markers, reading variables from an explicit source.
///
/// The Windows-emulation algorithm determines the home directory from the
/// first variable found in `env`, in order: `R_FS_HOME`, `USERPROFILE`, then
/// the `HOMEDRIVE`+`HOMEPATH` pair (a drive without a path leaves the input
/// unexpanded). A variable set to the empty string still counts as found.
/// Candidate values have backslashes translated to forward slashes on copy.
///
/// `~user` switches to the named sibling of the home directory: the home's
/// last segment is replaced by `user`. This is a best-effort heuristic, not a
/// user-database lookup.
///
/// Native mode ignores `env` and asks the host for its home directory.
///
/// # Errors
///
/// Returns [`Error::PathTooLong`] if an expanded path would exceed
/// [`PATH_LENGTH_MAX`](crate::PATH_LENGTH_MAX).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("R_FS_HOME".to_string(), "/home/u".to_string());
///
/// let expanded = pathkit::expand_with_env(&[Some("~".to_string())], true, &vars).unwrap();
/// assert_eq!(expanded, vec![Some("/home/u".to_string())]);
/// ```
pub fn expand_with_env(
    paths: &[Option<String>],
    windows_mode: bool,
    env: &dyn EnvLookup,
) -> Result<Vec<Option<String>>> {
    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        out.push(match path {
            None => None,
            Some(path) => Some(expand_one(path, windows_mode, env)?),
        });
    }
    Ok(out)
}

fn expand_one(path: &str, windows_mode: bool, env: &dyn EnvLookup) -> Result<String> {
    let expanded = if windows_mode {
        expand_windows(path, env)
    } else {
        expand_native(path)
    };
    if expanded.len() > PATH_LENGTH_MAX {
        return Err(Error::PathTooLong {
            limit: PATH_LENGTH_MAX,
        });
    }
    Ok(expanded)
}

/// Expand `~`-prefixed paths the way Windows would, from environment
/// variables alone.
fn expand_windows(path: &str, env: &dyn EnvLookup) -> String {
    if path.is_empty() {
        return String::new();
    }
    if !path.starts_with('~') {
        return path.to_string();
    }

    // End of the ~name token: the first separator, or the whole string.
    let token_end = path.find(['/', '\\']).unwrap_or(path.len());

    let mut home = if let Some(value) = env.var("R_FS_HOME") {
        slashes(&value)
    } else if let Some(value) = env.var("USERPROFILE") {
        slashes(&value)
    } else {
        let drive = env
            .var("HOMEDRIVE")
            .map(|value| slashes(&value))
            .unwrap_or_default();
        match env.var("HOMEPATH") {
            Some(rest) => drive + &slashes(&rest),
            None => {
                log::debug!("no home environment variables set, leaving '{path}' unexpanded");
                return path.to_string();
            }
        }
    };

    // ~user: swap the home directory's last segment for the named user.
    if token_end != 1 {
        home = parent_dir(&home);
        home.push('/');
        home.push_str(&path[1..token_end]);
    }
    if path.len() > token_end {
        home.push('/');
        home.push_str(&path[token_end + 1..]);
    }
    home
}

/// Expand `~` and `~/rest` against the host home directory.
fn expand_native(path: &str) -> String {
    if path != "~" && !path.starts_with("~/") && !path.starts_with("~\\") {
        return path.to_string();
    }
    match home::home_dir() {
        Some(dir) => match dir.to_str() {
            Some(home) if !home.is_empty() => {
                let mut expanded = String::with_capacity(home.len() + path.len() - 1);
                expanded.push_str(home);
                expanded.push_str(&path[1..]);
                expanded
            }
            _ => path.to_string(),
        },
        None => path.to_string(),
    }
}

/// Translate backslashes to forward slashes while copying.
fn slashes(value: &str) -> String {
    value.replace('\\', "/")
}

/// The path with its last segment removed, POSIX `dirname` style.
fn parent_dir(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { "/" } else { "." }.to_string();
    }
    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(split) => {
            let parent = trimmed[..split].trim_end_matches('/');
            if parent.is_empty() {
                "/".to_string()
            } else {
                parent.to_string()
            }
        }
    }
}
