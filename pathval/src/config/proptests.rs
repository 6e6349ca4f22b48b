//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::FileSystemConfig;
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn directory_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 0..5).prop_map(|parts| format!("/{}", parts.join("/")))
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = FileSystemConfig> {
    (
        prop::option::of(prop_oneof![Just('/'), Just(':'), Just('\\')]),
        prop::option::of(any::<bool>()),
        prop::option::of(directory_strategy()),
        prop::option::of(directory_strategy()),
    )
        .prop_map(
            |(path_separator, case_sensitive, home_directory, current_directory)| {
                FileSystemConfig {
                    path_separator,
                    case_sensitive,
                    home_directory,
                    current_directory,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher-precedence config wins; unset fields fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let merged = ConfigMerger::merge(&[low.clone(), high.clone()]);

        prop_assert_eq!(merged.path_separator, high.path_separator.or(low.path_separator));
        prop_assert_eq!(merged.case_sensitive, high.case_sensitive.or(low.case_sensitive));
        prop_assert_eq!(merged.home_directory, high.home_directory.or(low.home_directory));
        prop_assert_eq!(merged.current_directory, high.current_directory.or(low.current_directory));
    }

    // Merging with a default config is the identity in both directions
    #[test]
    fn config_merge_default_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &FileSystemConfig::default());
        prop_assert_eq!(&merged, &config);

        let mut merged = FileSystemConfig::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(&merged, &config);
    }

    // Merging is idempotent
    #[test]
    fn config_merge_idempotent(base in config_strategy(), other in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &other);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &other);
        prop_assert_eq!(once, twice);
    }

    // YAML round trip preserves every field
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: FileSystemConfig = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}

// Directories generated with '/' are only valid when the separator is '/'
proptest! {
    #[test]
    fn slash_configs_validate(
        case_sensitive in prop::option::of(any::<bool>()),
        home in prop::option::of(directory_strategy()),
        cwd in prop::option::of(directory_strategy()),
    ) {
        let config = FileSystemConfig {
            path_separator: Some('/'),
            case_sensitive,
            home_directory: home,
            current_directory: cwd,
        };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }
}
