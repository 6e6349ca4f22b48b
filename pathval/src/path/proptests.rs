//! Property-based tests for path handling.
//!
//! Note: The normalize module already carries a small property
//! suites. This module runs the heavier cross-cutting properties: component
//! round trips, abbreviation round trips and absoluteness.

use super::PathValue;
use crate::fs::MemoryFileSystem;
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathValue> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| PathValue::new(format!("/{}", parts.join("/"))))
}

fn any_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            path_component_strategy(),
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            Just("~".to_string()),
        ],
        0..10,
    )
    .prop_map(|parts| parts.join("/"))
}

fn fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
        .with_home_directory("/home/tester")
        .with_current_directory("/srv/app")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalized(normalized(p)) == normalized(p)
    #[test]
    fn path_normalization_idempotent(raw in any_path_strategy()) {
        let fs = fs();
        let once = PathValue::new(raw).normalized(&fs);
        prop_assert_eq!(once.normalized(&fs), once);
    }

    // Components of a normalized absolute path rebuild the same string
    #[test]
    fn components_round_trip(path in absolute_path_strategy()) {
        let fs = fs();
        let normalized = path.normalized(&fs);
        let rebuilt = PathValue::from_components(normalized.components(&fs), &fs);
        prop_assert_eq!(rebuilt, normalized);
    }

    // Absolute components always start with exactly one separator element
    #[test]
    fn absolute_components_start_with_root(path in absolute_path_strategy()) {
        let fs = fs();
        let components = path.components(&fs);
        prop_assert_eq!(components[0].as_str(), "/");
        prop_assert!(components[1..].iter().all(|c| c != "/"));
    }

    // Absoluteness and relativeness are exclusive
    #[test]
    fn absolute_xor_relative(raw in any_path_strategy()) {
        let fs = fs();
        let path = PathValue::new(raw);
        prop_assert_ne!(path.is_absolute(&fs), path.is_relative(&fs));
    }

    // Abbreviating a path under home and expanding it again is lossless
    #[test]
    fn abbreviation_round_trip(parts in prop::collection::vec(path_component_strategy(), 0..6)) {
        let fs = fs();
        let path = PathValue::new("/home/tester").join(parts.join("/"), &fs);
        let abbreviated = path.abbreviated(&fs);
        prop_assert!(abbreviated.as_str().starts_with('~'));
        prop_assert_eq!(abbreviated.normalized(&fs), path);
    }

    // Absolute resolution never leaves a relative path behind
    #[test]
    fn absolute_is_absolute(raw in any_path_strategy()) {
        let fs = fs();
        prop_assert!(PathValue::new(raw).absolute(&fs).is_absolute(&fs));
    }

    // The parent of a joined child is the base it was joined onto
    #[test]
    fn parent_of_join_is_base(base in absolute_path_strategy(), child in path_component_strategy()) {
        let fs = fs();
        prop_assert_eq!(base.join(&child, &fs).parent(&fs), base);
    }

    // Joining relative segments onto an absolute base stays under that base
    #[test]
    fn join_stays_under_base(base in absolute_path_strategy(), parts in prop::collection::vec(path_component_strategy(), 1..5)) {
        let fs = fs();
        let joined = base.join(parts.join("/"), &fs).absolute(&fs);
        prop_assert!(joined.as_str().starts_with(&format!("{base}/")));
        prop_assert_eq!(joined.components(&fs).len(), base.components(&fs).len() + parts.len());
    }
}
