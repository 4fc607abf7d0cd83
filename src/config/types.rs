use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languageTagLabel")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    /// Label key whose value carries a resource's language tag. Doubles as
    /// the selector: only resources carrying this label are listed and
    /// watched.
    pub language_tag_label: String,

    /// Label key marking the default-language resource (value `"true"`).
    pub default_marker_label: String,

    /// Locale assumed for resources without a language tag label.
    pub default_language_tag: Locale,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            language_tag_label: "i18n.dev/language".to_string(),
            default_marker_label: "i18n.dev/default-language".to_string(),
            default_language_tag: Locale::from_tag("en"),
        }
    }
}

impl ProviderSettings {
    /// # Errors
    /// - Empty or syntactically invalid label key
    /// - Identical label keys
    /// - Empty default language tag
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(message) = validate_label_key(&self.language_tag_label) {
            errors.push(ValidationError::new("languageTagLabel", message));
        }
        if let Err(message) = validate_label_key(&self.default_marker_label) {
            errors.push(ValidationError::new("defaultMarkerLabel", message));
        }
        if !self.language_tag_label.is_empty()
            && self.language_tag_label == self.default_marker_label
        {
            errors.push(ValidationError::new(
                "defaultMarkerLabel",
                "Must differ from 'languageTagLabel'; one label cannot carry both the tag and the default marker",
            ));
        }

        if self.default_language_tag.as_str().is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguageTag",
                "The tag cannot be empty. Please specify a language tag, for example: \"en\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Check `[prefix/]name` label key syntax: each part non-empty, made of
/// `[A-Za-z0-9._-]`, starting and ending alphanumeric.
fn validate_label_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("The label key cannot be empty. Example: \"i18n.dev/language\"".to_string());
    }

    let mut parts = key.split('/');
    let (first, second, extra) = (parts.next(), parts.next(), parts.next());
    if extra.is_some() {
        return Err(format!("Invalid label key '{key}': at most one '/' is allowed"));
    }

    for part in [first, second].into_iter().flatten() {
        let valid_chars =
            part.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        let valid_edges = part.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && part.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
        if !valid_chars || !valid_edges {
            return Err(format!(
                "Invalid label key '{key}': each part must be alphanumeric with '-', '_' or '.' in between"
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = ProviderSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultLanguageTag": "de"}"#;

        let settings: ProviderSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.language_tag_label, eq("i18n.dev/language"));
        assert_that!(settings.default_language_tag, eq(&Locale::from_tag("de")));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: ProviderSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.language_tag_label, eq("i18n.dev/language"));
        assert_that!(settings.default_marker_label, eq("i18n.dev/default-language"));
        assert_that!(settings.default_language_tag, eq(&Locale::from_tag("en")));
    }

    #[rstest]
    fn validate_invalid_language_tag_label_empty() {
        let settings =
            ProviderSettings { language_tag_label: String::new(), ..ProviderSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("languageTagLabel")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    #[case::two_slashes("a/b/c")]
    #[case::leading_dash("-bad/language")]
    #[case::trailing_dot("i18n.dev/language.")]
    #[case::inner_space("i18n dev/language")]
    #[case::empty_name_part("i18n.dev/")]
    fn validate_invalid_label_key_syntax(#[case] key: &str) {
        let settings =
            ProviderSettings { language_tag_label: key.to_string(), ..ProviderSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("languageTagLabel")),
                field!(ValidationError.message, contains_substring("Invalid label key"))
            ]])
        );
    }

    #[rstest]
    fn validate_label_key_without_prefix_is_accepted() {
        let settings = ProviderSettings {
            language_tag_label: "language".to_string(),
            ..ProviderSettings::default()
        };

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn validate_identical_labels_rejected() {
        let settings = ProviderSettings {
            language_tag_label: "i18n.dev/language".to_string(),
            default_marker_label: "i18n.dev/language".to_string(),
            ..ProviderSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultMarkerLabel")),
                field!(ValidationError.message, contains_substring("Must differ"))
            ]])
        );
    }

    #[rstest]
    fn validate_empty_default_tag_rejected() {
        let settings = ProviderSettings {
            default_language_tag: Locale::from_tag(""),
            ..ProviderSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultLanguageTag")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = ProviderSettings {
            language_tag_label: String::new(),
            default_language_tag: Locale::from_tag(""),
            ..ProviderSettings::default()
        };

        let validation_result = settings.validate();
        let errors = validation_result.unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. languageTagLabel"));
        assert_that!(error_message, contains_substring("cannot be empty"));
        assert_that!(error_message, contains_substring("2. defaultLanguageTag"));
    }
}
