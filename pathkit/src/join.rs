//! Joining path components with recycling semantics.
//!
//! [`join`] treats its input as a matrix: each argument is one column of
//! components, columns may have different lengths, and shorter columns are
//! recycled by modulo indexing to fill the output. A null component makes the
//! whole row null; every constructed row is checked against
//! [`PATH_LENGTH_MAX`](crate::PATH_LENGTH_MAX).

use crate::error::{Error, Result};
use crate::PATH_LENGTH_MAX;

/// Join parallel columns of path components into one vector of paths.
///
/// The output has one row per `max(column length)`; element `r` of column `c`
/// is `c[r % len(c)]`. Components are separated by a single `/`; a component
/// that already ends in `/` or `\` does not get another separator. A
/// non-empty `extension` is appended as `.extension` to every non-null row.
///
/// If any column is empty the result is an empty vector: no rows can be
/// formed.
///
/// # Errors
///
/// Returns [`Error::PathTooLong`] if any row would exceed
/// [`PATH_LENGTH_MAX`](crate::PATH_LENGTH_MAX). The whole call fails; there
/// is no partial output.
///
/// # Examples
///
/// ```
/// let columns = vec![
///     vec![Some("a".to_string()), Some("x".to_string())],
///     vec![Some("b".to_string())],
/// ];
/// let joined = pathkit::join(&columns, "").unwrap();
/// assert_eq!(joined, vec![Some("a/b".to_string()), Some("x/b".to_string())]);
/// ```
pub fn join(components: &[Vec<Option<String>>], extension: &str) -> Result<Vec<Option<String>>> {
    let mut rows = 0;
    for column in components {
        if column.is_empty() {
            return Ok(Vec::new());
        }
        rows = rows.max(column.len());
    }

    let last = components.len().saturating_sub(1);
    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        out.push(join_row(components, row, last, extension)?);
    }
    Ok(out)
}

/// Build one output row, or `None` as soon as a recycled component is null.
fn join_row(
    components: &[Vec<Option<String>>],
    row: usize,
    last: usize,
    extension: &str,
) -> Result<Option<String>> {
    let mut buf = String::new();
    for (col, column) in components.iter().enumerate() {
        let element = match &column[row % column.len()] {
            Some(element) => element,
            None => return Ok(None),
        };
        push_checked(&mut buf, element)?;

        let trailing_separator = buf.ends_with('/') || buf.ends_with('\\');
        if !trailing_separator && col != last {
            push_checked(&mut buf, "/")?;
        }
    }
    if !extension.is_empty() {
        push_checked(&mut buf, ".")?;
        push_checked(&mut buf, extension)?;
    }
    Ok(Some(buf))
}

fn push_checked(buf: &mut String, part: &str) -> Result<()> {
    if buf.len() + part.len() > PATH_LENGTH_MAX {
        return Err(Error::PathTooLong {
            limit: PATH_LENGTH_MAX,
        });
    }
    buf.push_str(part);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(parts: &[&str]) -> Vec<Option<String>> {
        parts.iter().map(|p| Some((*p).to_string())).collect()
    }

    #[test]
    fn test_join_three_columns() {
        let joined = join(&[col(&["a"]), col(&["b"]), col(&["c"])], "").unwrap();
        assert_eq!(joined, vec![Some("a/b/c".to_string())]);
    }

    #[test]
    fn test_join_with_extension() {
        let joined = join(&[col(&["a"]), col(&["b"])], "txt").unwrap();
        assert_eq!(joined, vec![Some("a/b.txt".to_string())]);
    }

    #[test]
    fn test_join_empty_extension_no_trailing_dot() {
        let joined = join(&[col(&["a"])], "").unwrap();
        assert_eq!(joined, vec![Some("a".to_string())]);
    }

    #[test]
    fn test_join_null_propagates() {
        let joined = join(&[vec![None], col(&["b"])], "").unwrap();
        assert_eq!(joined, vec![None]);
    }

    #[test]
    fn test_join_null_only_affects_its_row() {
        let first = vec![Some("a".to_string()), None];
        let joined = join(&[first, col(&["b"])], "").unwrap();
        assert_eq!(joined, vec![Some("a/b".to_string()), None]);
    }

    #[test]
    fn test_join_null_row_gets_no_extension() {
        let joined = join(&[vec![None]], "txt").unwrap();
        assert_eq!(joined, vec![None]);
    }

    #[test]
    fn test_join_empty_column_short_circuits() {
        let joined = join(&[Vec::new(), col(&["b"])], "").unwrap();
        assert_eq!(joined, Vec::new());
    }

    #[test]
    fn test_join_no_columns() {
        let joined = join(&[], "").unwrap();
        assert_eq!(joined, Vec::new());
    }

    #[test]
    fn test_join_recycles_shorter_columns() {
        let joined = join(&[col(&["a", "x"]), col(&["b"])], "").unwrap();
        assert_eq!(
            joined,
            vec![Some("a/b".to_string()), Some("x/b".to_string())]
        );
    }

    #[test]
    fn test_join_recycles_by_modulo() {
        let joined = join(&[col(&["a", "b", "c", "d"]), col(&["1", "2"])], "").unwrap();
        assert_eq!(
            joined,
            vec![
                Some("a/1".to_string()),
                Some("b/2".to_string()),
                Some("c/1".to_string()),
                Some("d/2".to_string()),
            ]
        );
    }

    #[test]
    fn test_join_no_doubled_separator() {
        let joined = join(&[col(&["a/"]), col(&["b"])], "").unwrap();
        assert_eq!(joined, vec![Some("a/b".to_string())]);
    }

    #[test]
    fn test_join_backslash_counts_as_separator() {
        let joined = join(&[col(&["a\\"]), col(&["b"])], "").unwrap();
        assert_eq!(joined, vec![Some("a\\b".to_string())]);
    }

    #[test]
    fn test_join_empty_component_keeps_separator() {
        // An empty component still separates: the row reads "/b".
        let joined = join(&[col(&[""]), col(&["b"])], "").unwrap();
        assert_eq!(joined, vec![Some("/b".to_string())]);
    }

    #[test]
    fn test_join_row_too_long_fails() {
        let long = "a".repeat(crate::PATH_LENGTH_MAX);
        let result = join(&[col(&[&long]), col(&["b"])], "");
        assert!(matches!(result, Err(Error::PathTooLong { .. })));
    }

    #[test]
    fn test_join_extension_counts_toward_limit() {
        let long = "a".repeat(crate::PATH_LENGTH_MAX - 1);
        let result = join(&[col(&[&long])], "txt");
        assert!(matches!(result, Err(Error::PathTooLong { .. })));
    }

    #[test]
    fn test_join_exactly_at_limit_succeeds() {
        let long = "a".repeat(crate::PATH_LENGTH_MAX);
        let joined = join(&[col(&[&long])], "").unwrap();
        assert_eq!(joined, vec![Some(long)]);
    }
}
