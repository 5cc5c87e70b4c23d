//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Label template of the synthetic create entry; `{}` is replaced by the search text.
pub const DEFAULT_CREATE_LABEL: &str = "Create \"{}\"";

/// Behavior flags of a select widget.
///
/// Every field has a default, so hosts may load a partial JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    /// Allow zero or more selected values
    pub multi: bool,
    /// Show an editable search field while open
    pub searchable: bool,
    /// Offer a "create" entry for search text matching no option value
    pub creatable: bool,
    /// Show a clear button while something is selected
    pub clearable: bool,
    /// Ignore all interaction
    pub disabled: bool,
    /// Let the hidden native `<select>` take pointer input (touch devices)
    pub native: bool,
    /// Keep the search field visible while closed and empty
    pub keep_search_on_blur: bool,
    /// Text shown when nothing is selected
    pub placeholder: Option<String>,
    /// Label template of the create entry
    pub create_label: String,
}

impl SelectConfig {
    pub fn new() -> Self {
        Self {
            multi: false,
            searchable: false,
            creatable: false,
            clearable: false,
            disabled: false,
            native: false,
            keep_search_on_blur: false,
            placeholder: None,
            create_label: DEFAULT_CREATE_LABEL.to_string(),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.creatable && self.create_label.matches("{}").count() != 1 {
            return Err(ConfigError::ValidationError {
                field: "createLabel".to_string(),
                message: format!(
                    "expected exactly one '{{}}' placeholder in {:?}",
                    self.create_label
                ),
            });
        }
        Ok(())
    }

    /// Creatable widgets are always searchable.
    pub fn is_searchable(&self) -> bool {
        self.searchable || self.creatable
    }

    /// Label of the create entry for `search`.
    pub fn create_label_for(&self, search: &str) -> String {
        self.create_label.replacen("{}", search, 1)
    }

    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn with_creatable(mut self, creatable: bool) -> Self {
        self.creatable = creatable;
        self
    }

    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_native(mut self, native: bool) -> Self {
        self.native = native;
        self
    }

    pub fn with_keep_search_on_blur(mut self, keep: bool) -> Self {
        self.keep_search_on_blur = keep;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_create_label(mut self, template: impl Into<String>) -> Self {
        self.create_label = template.into();
        self
    }
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SelectError;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SelectConfig::from_json(r#"{"multi": true, "placeholder": "Pick"}"#).unwrap();
        assert!(config.multi);
        assert!(!config.searchable);
        assert_eq!(config.placeholder.as_deref(), Some("Pick"));
        assert_eq!(config.create_label, DEFAULT_CREATE_LABEL);
    }

    #[test]
    fn test_camel_case_fields() {
        let config = SelectConfig::from_json(r#"{"keepSearchOnBlur": true}"#).unwrap();
        assert!(config.keep_search_on_blur);
    }

    #[test]
    fn test_parse_error() {
        let err = SelectConfig::from_json("{multi").unwrap_err();
        assert!(matches!(err, SelectError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_create_label_needs_placeholder() {
        let err = SelectConfig::from_json(r#"{"creatable": true, "createLabel": "New"}"#).unwrap_err();
        assert!(matches!(
            err,
            SelectError::Config(ConfigError::ValidationError { ref field, .. }) if field == "createLabel"
        ));

        // Without creatable the template is never rendered.
        assert!(SelectConfig::from_json(r#"{"createLabel": "New"}"#).is_ok());
    }

    #[test]
    fn test_creatable_implies_searchable() {
        assert!(SelectConfig::new().with_creatable(true).is_searchable());
        assert!(!SelectConfig::new().is_searchable());
    }

    #[test]
    fn test_create_label_for() {
        assert_eq!(SelectConfig::new().create_label_for("teal"), "Create \"teal\"");
        let config = SelectConfig::new().with_create_label("Add {}…");
        assert_eq!(config.create_label_for("x"), "Add x…");
    }
}
