//! Environment lookup capability.
//!
//! Windows-emulation home expansion consults environment variables through
//! the [`EnvLookup`] trait rather than reading the process environment
//! directly, so expansion can be exercised in tests without mutating global
//! state.

use std::collections::HashMap;
use std::env;

#[cfg(test)]
use mockall::automock;

/// Read-only access to named environment variables.
///
/// A variable set to the empty string still counts as set: implementations
/// return `Some(String::new())`, not `None`, for it.
#[cfg_attr(test, automock)]
pub trait EnvLookup {
    /// Look up a variable by name, returning its value if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
///
/// # Examples
///
/// ```
/// use pathkit::{EnvLookup, ProcessEnv};
///
/// std::env::set_var("PATHKIT_DOCTEST_VAR", "1");
/// assert_eq!(ProcessEnv.var("PATHKIT_DOCTEST_VAR"), Some("1".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Fixed variable set, mainly for tests and embedding callers.
impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
