//! Policy document loading.
//!
//! This module provides the [`PolicyLoader`] type for loading a policy
//! settings document from a YAML file. Two loading modes match the two ways
//! settings records enter the system: a strict mode that rejects incomplete
//! documents, and a tolerant mode that merges gaps with the defaults.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PartialPolicySettings, PolicySettings};

/// Loads and provides access to policy settings.
///
/// # Document format
///
/// A flat YAML mapping of the [`PolicySettings`] fields:
///
/// ```yaml
/// regular_hours_per_day: 8
/// early_overtime_standard_hour: 7
/// early_leave_standard_hour: 17
/// overtime_standard_hour: 17
/// late_night_start_hour: 22
/// late_night_end_hour: 5
/// overtime_rate: 25
/// default_hourly_rate: 1200
/// overtime_rule: rolling_duration
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./policy.yaml").unwrap();
/// let policy = loader.settings();
/// println!("standard day: {} hours", policy.regular_hours_per_day);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    settings: PolicySettings,
}

impl PolicyLoader {
    /// Loads a policy document, requiring every numeric field.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file does not exist.
    /// - [`EngineError::ConfigParseError`] if it is not valid YAML.
    /// - [`EngineError::PolicyGap`] if a required field is absent.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let partial = read_partial(path.as_ref())?;
        let settings = partial.require()?;
        info!(path = %path.as_ref().display(), "Loaded policy settings");
        Ok(Self { settings })
    }

    /// Loads a policy document, filling missing fields from the defaults.
    ///
    /// File-not-found and parse failures are still errors; only field gaps
    /// are tolerated.
    pub fn load_with_defaults(path: impl AsRef<Path>) -> EngineResult<Self> {
        let partial = read_partial(path.as_ref())?;
        let settings = partial.merge_with_defaults();
        info!(
            path = %path.as_ref().display(),
            "Loaded policy settings (defaults merged)"
        );
        Ok(Self { settings })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    /// Consumes the loader, yielding the settings.
    pub fn into_settings(self) -> PolicySettings {
        self.settings
    }
}

fn read_partial(path: &Path) -> EngineResult<PartialPolicySettings> {
    let contents = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            EngineError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        }
    })?;

    serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    use crate::config::OvertimeRule;

    struct TempDoc {
        path: PathBuf,
    }

    impl TempDoc {
        fn new(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "timecard-engine-{}-{}",
                std::process::id(),
                name
            ));
            fs::write(&path, contents).unwrap();
            Self { path }
        }
    }

    impl Drop for TempDoc {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    const FULL_DOC: &str = "\
regular_hours_per_day: 8
early_overtime_standard_hour: 7
early_leave_standard_hour: 17
overtime_standard_hour: 17
late_night_start_hour: 22
late_night_end_hour: 5
overtime_rate: 25
default_hourly_rate: 1200
";

    #[test]
    fn test_load_complete_document() {
        let doc = TempDoc::new("full.yaml", FULL_DOC);
        let loader = PolicyLoader::load(&doc.path).unwrap();
        let policy = loader.settings();
        assert_eq!(policy.regular_hours_per_day, Decimal::from(8));
        assert_eq!(policy.default_hourly_rate, Decimal::from(1200));
        assert_eq!(policy.overtime_rule, OvertimeRule::RollingDuration);
    }

    #[test]
    fn test_load_with_explicit_rule() {
        let doc = TempDoc::new(
            "rule.yaml",
            &format!("{FULL_DOC}overtime_rule: fixed_boundary\n"),
        );
        let loader = PolicyLoader::load(&doc.path).unwrap();
        assert_eq!(loader.settings().overtime_rule, OvertimeRule::FixedBoundary);
    }

    #[test]
    fn test_strict_load_rejects_missing_field() {
        let doc = TempDoc::new("sparse-strict.yaml", "regular_hours_per_day: 8\n");
        let err = PolicyLoader::load(&doc.path).unwrap_err();
        assert!(matches!(err, EngineError::PolicyGap { .. }));
    }

    #[test]
    fn test_tolerant_load_merges_defaults() {
        let doc = TempDoc::new("sparse-tolerant.yaml", "overtime_rate: 30\n");
        let loader = PolicyLoader::load_with_defaults(&doc.path).unwrap();
        let policy = loader.settings();
        assert_eq!(policy.overtime_rate, Decimal::from(30));
        assert_eq!(policy.regular_hours_per_day, Decimal::from(8));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let err = PolicyLoader::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let doc = TempDoc::new("broken.yaml", "regular_hours_per_day: [unclosed\n");
        let err = PolicyLoader::load(&doc.path).unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));
    }

    #[test]
    fn test_into_settings() {
        let doc = TempDoc::new("into.yaml", FULL_DOC);
        let settings = PolicyLoader::load(&doc.path).unwrap().into_settings();
        assert_eq!(settings.overtime_rate, Decimal::from(25));
    }
}
