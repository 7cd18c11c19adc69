#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! Vectorized path-string manipulation primitives.
//!
//! Four independent operations share the same input/output shape: a sequence
//! of nullable path strings in, a sequence of the same length out, with null
//! propagating to null. The operations never call each other; callers compose
//! them (a typical pipeline is expand, then tidy, then realize).
//!
//! - [`join()`]: combine parallel columns of path components, with recycling,
//!   into full paths
//! - [`expand()`]: expand a leading `~` or `~user` into an absolute home
//!   path, natively or by emulating the Windows environment-variable
//!   convention
//! - [`tidy()`]: lexically normalize separators and redundant segments
//! - [`realize()`]: resolve paths to their canonical absolute form on disk
//!
//! ## Examples
//!
//! ```
//! let columns = vec![
//!     vec![Some("src".to_string()), Some("tests".to_string())],
//!     vec![Some("main".to_string())],
//! ];
//! let joined = pathkit::join(&columns, "rs").unwrap();
//! assert_eq!(
//!     joined,
//!     vec![Some("src/main.rs".to_string()), Some("tests/main.rs".to_string())]
//! );
//!
//! let tidied = pathkit::tidy(&[Some("a//b/./c".to_string()), None]);
//! assert_eq!(tidied, vec![Some("a/b/c".to_string()), None]);
//! ```

pub mod env;
pub mod error;
pub mod expand;
pub mod join;
pub mod logging;
pub mod realize;
pub mod tidy;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items at crate root for convenience
pub use env::{EnvLookup, ProcessEnv};
pub use error::{Error, Result};
pub use expand::{expand, expand_with_env};
pub use join::join;
pub use logging::{init_logger, LogLevel, Logger};
pub use realize::realize;
pub use tidy::tidy;

/// Maximum length in bytes of a constructed path.
///
/// [`join()`] and [`expand()`] check every result against this limit and fail
/// with [`Error::PathTooLong`] rather than truncating. The limit is shared so
/// the two operations agree on what fits.
pub const PATH_LENGTH_MAX: usize = 4096;
