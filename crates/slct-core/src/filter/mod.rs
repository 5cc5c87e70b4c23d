//! Derived option list.
//!
//! The menu never shows the host's options directly. It shows the entries
//! derived from them for the current search text:
//!
//! - options whose label starts with the search text, compared
//!   case-insensitively, in their original order
//! - a synthetic "create" entry in front when the widget is creatable and no
//!   option value equals the search text

use slct_types::{OptionValue, SelectConfig, SelectOption};

/// DOM key of the synthetic create entry.
pub const CREATE_ENTRY_KEY: &str = "__slct_create__";

/// One row of the options menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Index into the host's option list
    Option(usize),
    /// Synthetic entry offering to create `search`
    Create {
        /// Search text the new option would be created from
        search: String,
        /// Rendered label, e.g. `Create "teal"`
        label: String,
    },
}

impl MenuEntry {
    pub fn option_index(&self) -> Option<usize> {
        match self {
            Self::Option(index) => Some(*index),
            Self::Create { .. } => None,
        }
    }
}

/// Case-insensitive prefix match of `label` against `search`.
pub fn matches_prefix(label: &str, search: &str) -> bool {
    label.to_lowercase().starts_with(&search.to_lowercase())
}

/// Build the menu entries for `search`.
///
/// An absent or empty search lists every option and never offers creation.
pub fn menu_entries<V: OptionValue>(
    options: &[SelectOption<V>],
    search: Option<&str>,
    config: &SelectConfig,
) -> Vec<MenuEntry> {
    let search = search.filter(|s| !s.is_empty());

    let mut entries: Vec<MenuEntry> = match search {
        Some(search) => options
            .iter()
            .enumerate()
            .filter(|(_, option)| matches_prefix(&option.label, search))
            .map(|(index, _)| MenuEntry::Option(index))
            .collect(),
        None => (0..options.len()).map(MenuEntry::Option).collect(),
    };

    if let Some(search) = search {
        let exact = options.iter().any(|option| option.value.key() == search);
        if config.creatable && !exact {
            entries.insert(
                0,
                MenuEntry::Create {
                    search: search.to_string(),
                    label: config.create_label_for(search),
                },
            );
        }
    }

    entries
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests;
