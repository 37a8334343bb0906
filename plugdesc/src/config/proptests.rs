//! Property-based tests for settings.

use super::merger::SettingsMerger;
use super::schema::Settings;
use super::validator::SettingsValidator;
use crate::output::OutputFormat;
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Yaml),
        Just(OutputFormat::Human),
    ]
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (
        prop::option::of("[a-z-]{1,12}\\.(yml|yaml)"),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(descriptor_file, output_format, strict, ignore_unknown_keys)| Settings {
                descriptor_file,
                output_format,
                strict,
                ignore_unknown_keys,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every field set in the higher source wins; unset fields keep the lower value.
    #[test]
    fn merge_higher_precedence_wins(low in settings_strategy(), high in settings_strategy()) {
        let mut merged = low.clone();
        SettingsMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.descriptor_file, high.descriptor_file.or(low.descriptor_file));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.strict, high.strict.or(low.strict));
        prop_assert_eq!(
            merged.ignore_unknown_keys,
            high.ignore_unknown_keys.or(low.ignore_unknown_keys)
        );
    }

    // Merging an empty source changes nothing.
    #[test]
    fn merge_empty_is_identity(settings in settings_strategy()) {
        let mut merged = settings.clone();
        SettingsMerger::merge_into(&mut merged, &Settings::default());
        prop_assert_eq!(merged, settings);
    }

    // Generated YAML file names are always accepted.
    #[test]
    fn yaml_names_validate(settings in settings_strategy()) {
        prop_assert!(SettingsValidator::validate(&settings).is_ok());
    }
}
