//! Options menu decisions: which rows to show, how each is marked, and where
//! the menu sits.

use slct_types::{OptionValue, Rect};

use crate::controller::{SelectContext, SelectController};
use crate::filter::{MenuEntry, CREATE_ENTRY_KEY};

/// One rendered row of the options menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable DOM key
    pub key: String,
    pub label: String,
    /// Index into the host's options; `None` for the create entry
    pub option_index: Option<usize>,
    /// Keyboard highlight
    pub highlighted: bool,
    /// Part of the current selection
    pub selected: bool,
    pub disabled: bool,
}

impl MenuItem {
    pub fn is_create(&self) -> bool {
        self.option_index.is_none()
    }
}

/// Fixed-position placement of the menu, directly below the trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

impl MenuPosition {
    pub fn below(anchor: Rect) -> Self {
        Self { left: anchor.left, top: anchor.bottom(), width: anchor.width }
    }
}

/// Rows to render, or nothing while closed.
pub fn menu_items<V: OptionValue>(
    controller: &SelectController,
    ctx: &SelectContext<'_, V>,
) -> Vec<MenuItem> {
    if !controller.is_open() {
        return Vec::new();
    }

    let entries = controller.entries(ctx);
    let highlighted = controller.selected_index().filter(|&index| index < entries.len());
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let is_highlighted = highlighted == Some(position);
            match entry {
                MenuEntry::Create { label, .. } => Some(MenuItem {
                    key: CREATE_ENTRY_KEY.to_string(),
                    label,
                    option_index: None,
                    highlighted: is_highlighted,
                    selected: false,
                    disabled: false,
                }),
                MenuEntry::Option(index) => ctx.options.get(index).map(|option| MenuItem {
                    key: option.value.key(),
                    label: option.label.clone(),
                    option_index: Some(index),
                    highlighted: is_highlighted,
                    selected: ctx.value.contains(&option.value, ctx.eq),
                    disabled: option.disabled,
                }),
            }
        })
        .collect()
}
