//! Hidden native `<select>` mirror.
//!
//! The mirror lists a disabled placeholder `<option>` followed by every
//! supplied option, so screen readers and form submission see the same
//! choices the custom menu offers. `<option>` index `i` maps to option
//! `i - 1`.

use slct_types::{NativeError, OptionValue, SelectConfig, SelectError, SelectOption, Selection};

/// Number of `<option>` elements rendered before the first real option.
pub const PLACEHOLDER_OFFSET: usize = 1;

/// One mirrored `<option>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Everything needed to render the hidden native `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeMirror {
    pub multiple: bool,
    pub disabled: bool,
    /// Raised above the value area so it receives pointer input
    pub raised: bool,
    pub placeholder: String,
    pub options: Vec<NativeOption>,
    /// Keys of the selected values
    pub selected: Vec<String>,
}

impl NativeMirror {
    pub fn build<V: OptionValue>(
        config: &SelectConfig,
        options: &[SelectOption<V>],
        value: &Selection<V>,
    ) -> Self {
        Self {
            multiple: config.multi,
            disabled: config.disabled,
            raised: config.native,
            placeholder: config.placeholder.clone().unwrap_or_default(),
            options: options
                .iter()
                .map(|option| NativeOption {
                    value: option.value.key(),
                    label: option.label.clone(),
                    disabled: option.disabled,
                })
                .collect(),
            selected: value.keys(),
        }
    }

    /// Value of a single-select element; empty selects the placeholder.
    pub fn single_value(&self) -> &str {
        self.selected.first().map_or("", String::as_str)
    }

    /// Map an `<option>` index back to the option it mirrors.
    pub fn decode<V>(index: usize, options: &[SelectOption<V>]) -> slct_types::Result<&SelectOption<V>> {
        if index < PLACEHOLDER_OFFSET {
            return Err(NativeError::PlaceholderSelected.into());
        }
        options
            .get(index - PLACEHOLDER_OFFSET)
            .ok_or(SelectError::Native(NativeError::UnknownOption { index }))
    }
}
