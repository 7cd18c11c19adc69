//! Error types for the pathkit library.
//!
//! All fallible operations return the [`Result`] alias over a single
//! [`Error`] enum, built with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/a/b".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// Canonicalization of a path failed.
    ///
    /// The message carries the failing input path and the underlying
    /// operating system error, including its error code.
    #[error("failed to realize '{path}': {source}")]
    Realize {
        /// The input path that could not be realized.
        path: String,
        /// The underlying operating system error.
        #[source]
        source: std::io::Error,
    },

    /// A constructed path would exceed the platform path-length limit.
    #[error("total path length must be less than {limit}")]
    PathTooLong {
        /// The maximum permitted length in bytes.
        limit: usize,
    },

    /// The operating system returned a canonical path that is not valid UTF-8.
    #[error("canonical form of '{}' is not valid UTF-8", path.display())]
    NonUtf8Path {
        /// The canonical path as returned by the operating system.
        path: PathBuf,
    },
}

impl Error {
    /// Check if error came from the canonicalization primitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::Realize {
    ///     path: "/nonexistent".to_string(),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_realize());
    /// ```
    #[must_use]
    pub fn is_realize(&self) -> bool {
        matches!(self, Self::Realize { .. })
    }

    /// The raw OS error code, for realization failures that carry one.
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            Self::Realize { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}
