//! Settings merging and precedence handling.

use crate::config::loader::SettingsSource;
use crate::config::schema::Settings;

/// Merges settings sources according to precedence.
///
/// # Examples
///
/// ```
/// use plugdesc::config::{Settings, SettingsMerger};
///
/// let low = Settings { strict: Some(false), ..Default::default() };
/// let high = Settings { strict: Some(true), ..Default::default() };
///
/// let mut result = low;
/// SettingsMerger::merge_into(&mut result, &high);
/// assert_eq!(result.strict, Some(true));
/// ```
pub struct SettingsMerger;

impl SettingsMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<SettingsSource>) -> Settings {
        let mut result = Settings::default();
        for source in sources {
            Self::merge_into(&mut result, &source.settings);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Settings, source: &Settings) {
        if source.descriptor_file.is_some() {
            target.descriptor_file.clone_from(&source.descriptor_file);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.strict.is_some() {
            target.strict = source.strict;
        }

        if source.ignore_unknown_keys.is_some() {
            target.ignore_unknown_keys = source.ignore_unknown_keys;
        }
    }
}
