//! Property-based tests across the path operations.
//!
//! Note: the tidy module already has property tests for its own cleaning
//! invariants. This module focuses on the laws connecting joining, expansion,
//! and null propagation.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::{expand_with_env, join, tidy};

// Strategy for generating path-component strings
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn column_strategy() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(
        prop_oneof![
            3 => component_strategy().prop_map(Some),
            1 => Just(None),
        ],
        1..6,
    )
}

fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
    prop::collection::vec(column_strategy(), 1..5)
}

fn home_env() -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("R_FS_HOME".to_string(), "/home/u".to_string());
    vars
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Output length is the longest column's length
    #[test]
    fn join_output_length_is_max_column_length(columns in matrix_strategy()) {
        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        let joined = join(&columns, "").unwrap();
        prop_assert_eq!(joined.len(), rows);
    }

    // A row is null exactly when one of its recycled components is null
    #[test]
    fn join_null_iff_component_null(columns in matrix_strategy()) {
        let joined = join(&columns, "").unwrap();
        for (row, result) in joined.iter().enumerate() {
            let any_null = columns.iter().any(|c| c[row % c.len()].is_none());
            prop_assert_eq!(result.is_none(), any_null);
        }
    }

    // With single-element columns of plain names, join is a '/'-separated concat
    #[test]
    fn join_singletons_is_separator_concat(parts in prop::collection::vec(component_strategy(), 1..6)) {
        let columns: Vec<Vec<Option<String>>> =
            parts.iter().map(|p| vec![Some(p.clone())]).collect();
        let joined = join(&columns, "").unwrap();
        prop_assert_eq!(joined, vec![Some(parts.join("/"))]);
    }

    // A non-empty extension lands on every non-null row, exactly once
    #[test]
    fn join_extension_applied_per_row(columns in matrix_strategy(), ext in "[a-z]{1,4}") {
        let plain = join(&columns, "").unwrap();
        let with_ext = join(&columns, &ext).unwrap();
        for (bare, extended) in plain.iter().zip(&with_ext) {
            match (bare, extended) {
                (Some(bare), Some(extended)) => {
                    prop_assert_eq!(extended.clone(), format!("{bare}.{ext}"));
                }
                (None, None) => {}
                _ => prop_assert!(false, "null rows must agree"),
            }
        }
    }

    // Joining then tidying plain components equals tidy of the concat
    #[test]
    fn join_then_tidy_stable(parts in prop::collection::vec(component_strategy(), 1..6)) {
        let columns: Vec<Vec<Option<String>>> =
            parts.iter().map(|p| vec![Some(p.clone())]).collect();
        let joined = join(&columns, "").unwrap();
        let tidied = tidy(&joined);
        prop_assert_eq!(tidied, joined);
    }

    // Windows expansion leaves non-tilde strings untouched
    #[test]
    fn expand_windows_preserves_non_tilde(path in "[a-z/][a-z0-9/._-]{0,30}") {
        prop_assume!(!path.starts_with('~'));
        let env = home_env();
        let expanded = expand_with_env(&[Some(path.clone())], true, &env).unwrap();
        prop_assert_eq!(expanded, vec![Some(path)]);
    }

    // Windows expansion of ~/rest is rooted at the configured home
    #[test]
    fn expand_windows_roots_at_home(rest in "[a-z0-9_-]{1,12}(/[a-z0-9_-]{1,12}){0,3}") {
        let env = home_env();
        let input = format!("~/{rest}");
        let expanded = expand_with_env(&[Some(input)], true, &env).unwrap();
        let result = expanded.into_iter().next().unwrap().unwrap();
        prop_assert_eq!(result, format!("/home/u/{rest}"));
    }

    // Null layout survives expansion untouched
    #[test]
    fn expand_preserves_null_layout(column in column_strategy()) {
        let env = home_env();
        let expanded = expand_with_env(&column, true, &env).unwrap();
        prop_assert_eq!(expanded.len(), column.len());
        for (input, output) in column.iter().zip(&expanded) {
            prop_assert_eq!(input.is_none(), output.is_none());
        }
    }
}
