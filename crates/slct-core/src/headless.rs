//! Headless rendering: everything a host-supplied renderer needs to draw the
//! widget itself, while the controller keeps owning the interaction.

use slct_types::{OptionValue, SelectOption};

use crate::controller::{SelectContext, SelectController};
use crate::menu::{menu_items, MenuItem, MenuPosition};

/// Snapshot handed to a headless renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessView<V> {
    /// Options matching the current selection, in selection order
    pub selected: Vec<SelectOption<V>>,
    /// Placeholder text, only while nothing is selected
    pub placeholder: Option<String>,
    pub open: bool,
    /// Menu rows; empty while closed
    pub items: Vec<MenuItem>,
    /// Supplied options still matching the search, in menu order
    pub options: Vec<SelectOption<V>>,
    /// Where a menu container should sit
    pub position: MenuPosition,
}

impl<V: OptionValue> HeadlessView<V> {
    pub fn compute(controller: &SelectController, ctx: &SelectContext<'_, V>) -> Self {
        let selected: Vec<SelectOption<V>> = ctx
            .value
            .values()
            .into_iter()
            .filter_map(|v| ctx.options.iter().find(|option| ctx.eq.same(&option.value, v)))
            .cloned()
            .collect();

        let placeholder = if selected.is_empty() {
            controller.config().placeholder.clone()
        } else {
            None
        };

        let options = controller
            .entries(ctx)
            .iter()
            .filter_map(|entry| entry.option_index())
            .filter_map(|index| ctx.options.get(index))
            .cloned()
            .collect();

        Self {
            selected,
            placeholder,
            open: controller.is_open(),
            items: menu_items(controller, ctx),
            options,
            position: MenuPosition::below(controller.anchor()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Input;
    use slct_types::{Rect, SelectConfig, Selection, ValueEq};

    fn colors() -> Vec<SelectOption<u32>> {
        vec![SelectOption::new("Red", 1), SelectOption::new("Blue", 2), SelectOption::new("Black", 3)]
    }

    #[test]
    fn test_closed_shows_placeholder() {
        let options = colors();
        let value = Selection::Empty;
        let eq = ValueEq::Key;
        let ctx = SelectContext::new(&options, &value, &eq);
        let controller = SelectController::new(SelectConfig::new().with_placeholder("Color"));

        let view = HeadlessView::compute(&controller, &ctx);
        assert_eq!(view.placeholder.as_deref(), Some("Color"));
        assert!(!view.open);
        assert!(view.items.is_empty());
        assert_eq!(view.options.len(), 3);
    }

    #[test]
    fn test_open_with_search_and_selection() {
        let options = colors();
        let value = Selection::One(3);
        let eq = ValueEq::Key;
        let ctx = SelectContext::new(&options, &value, &eq)
            .with_anchor(Some(Rect::new(0.0, 10.0, 120.0, 20.0)));
        let mut controller =
            SelectController::new(SelectConfig::new().with_searchable(true).with_placeholder("Color"));
        controller.handle(Input::Toggle, &ctx);
        controller.handle(Input::Search("bl".to_string()), &ctx);

        let view = HeadlessView::compute(&controller, &ctx);
        assert_eq!(view.placeholder, None);
        assert_eq!(view.selected.iter().map(|o| o.value).collect::<Vec<_>>(), vec![3]);
        assert!(view.open);
        let labels: Vec<&str> = view.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Blue", "Black"]);
        assert_eq!(view.items.len(), 2);
        assert!(view.items[1].selected);
        assert_eq!(view.position, MenuPosition { left: 0.0, top: 30.0, width: 120.0 });
    }

    #[test]
    fn test_create_entry_only_in_items() {
        let options = colors();
        let value = Selection::Empty;
        let eq = ValueEq::Key;
        let ctx = SelectContext::new(&options, &value, &eq);
        let mut controller = SelectController::new(SelectConfig::new().with_creatable(true));
        controller.handle(Input::Toggle, &ctx);
        controller.handle(Input::Search("Teal".to_string()), &ctx);

        let view = HeadlessView::compute(&controller, &ctx);
        assert!(view.options.is_empty());
        assert_eq!(view.items.len(), 1);
        assert!(view.items[0].is_create());
    }
}
