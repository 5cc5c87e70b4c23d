//! Selectable option model.

use serde::{Deserialize, Serialize};

/// A label/value pair the user can pick.
///
/// Options are supplied by the host and never mutated by the widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption<V> {
    /// Display text, also the haystack for search filtering
    pub label: String,
    /// Opaque value reported back through change notifications
    pub value: V,
    /// Disabled options are listed but cannot be confirmed
    #[serde(default)]
    pub disabled: bool,
}

impl<V> SelectOption<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self { label: label.into(), value, disabled: false }
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl<V, L: Into<String>> From<(L, V)> for SelectOption<V> {
    fn from((label, value): (L, V)) -> Self {
        Self::new(label, value)
    }
}
