//! Value area decisions: placeholder, labels or chips, search field, clear
//! and arrow affordances.

use slct_types::{OptionValue, SelectConfig, SelectOption, Selection, ValueEq};

use crate::controller::{InteractionState, Key};

/// What the value area renders for one state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLayout<V> {
    /// Options matching the current selection, in selection order
    pub selected: Vec<SelectOption<V>>,
    pub show_placeholder: bool,
    /// False while a single select is open with search text typed
    pub show_values: bool,
    pub show_clear: bool,
    pub search_at_start: bool,
    pub search_at_end: bool,
    /// Whether the search field renders at all
    pub search_rendered: bool,
    /// Whether the (always present) search field is visible
    pub search_visible: bool,
    pub open: bool,
}

impl<V: OptionValue> ValueLayout<V> {
    pub fn compute(
        config: &SelectConfig,
        state: &InteractionState,
        options: &[SelectOption<V>],
        value: &Selection<V>,
        eq: &ValueEq<V>,
    ) -> Self {
        // Values without a matching option are dropped rather than shown raw.
        let selected: Vec<SelectOption<V>> = value
            .values()
            .into_iter()
            .filter_map(|v| options.iter().find(|option| eq.same(&option.value, v)))
            .cloned()
            .collect();

        let has_search = state.search.as_deref().is_some_and(|s| !s.is_empty());
        let searchable = config.is_searchable();
        let show_values = !(has_search && state.open && !config.multi);

        Self {
            show_placeholder: show_values && selected.is_empty() && !has_search,
            show_values,
            show_clear: config.clearable && !selected.is_empty() && !config.native,
            search_at_start: !config.multi || selected.is_empty(),
            search_at_end: config.multi && !selected.is_empty(),
            search_rendered: !(config.disabled && !config.keep_search_on_blur),
            search_visible: (state.open && searchable)
                || (config.keep_search_on_blur && value.is_empty() && searchable)
                || has_search,
            open: state.open,
            selected,
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.open {
            "▲"
        } else {
            "▼"
        }
    }
}

/// Whether a keydown on the search field must have its default action
/// prevented so the browser caret does not also act on it.
pub fn should_suppress_search_key(key: Key, searchable: bool, meta: bool) -> bool {
    if meta {
        return false;
    }
    (!searchable && key != Key::Tab) || matches!(key, Key::Enter | Key::ArrowUp | Key::ArrowDown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption<u32>> {
        vec![SelectOption::new("Red", 1), SelectOption::new("Blue", 2)]
    }

    fn open_with(search: Option<&str>) -> InteractionState {
        InteractionState { open: true, search: search.map(str::to_string), selected_index: None }
    }

    #[test]
    fn test_placeholder_when_empty() {
        let options = options();
        let layout = ValueLayout::compute(
            &SelectConfig::new(),
            &InteractionState::default(),
            &options,
            &Selection::Empty,
            &ValueEq::Key,
        );
        assert!(layout.show_placeholder);
        assert!(layout.selected.is_empty());
        assert!(!layout.show_clear);
        assert!(!layout.search_visible);
        assert_eq!(layout.arrow(), "▼");
    }

    #[test]
    fn test_unknown_value_degrades_to_placeholder() {
        let options = options();
        let layout = ValueLayout::compute(
            &SelectConfig::new(),
            &InteractionState::default(),
            &options,
            &Selection::One(9),
            &ValueEq::Key,
        );
        assert!(layout.selected.is_empty());
        assert!(layout.show_placeholder);
    }

    #[test]
    fn test_search_hides_single_label() {
        let options = options();
        let config = SelectConfig::new().with_searchable(true);
        let layout = ValueLayout::compute(
            &config,
            &open_with(Some("b")),
            &options,
            &Selection::One(1),
            &ValueEq::Key,
        );
        assert!(!layout.show_values);
        assert!(!layout.show_placeholder);
        assert!(layout.search_visible);
        assert_eq!(layout.arrow(), "▲");
    }

    #[test]
    fn test_multi_chips_keep_selection_order() {
        let options = options();
        let config = SelectConfig::new().with_multi(true).with_clearable(true);
        let layout = ValueLayout::compute(
            &config,
            &open_with(Some("r")),
            &options,
            &Selection::Many(vec![2, 1]),
            &ValueEq::Key,
        );
        let labels: Vec<&str> = layout.selected.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Blue", "Red"]);
        assert!(layout.show_values);
        assert!(layout.show_clear);
        assert!(!layout.search_at_start);
        assert!(layout.search_at_end);
    }

    #[test]
    fn test_clear_hidden_in_native_mode() {
        let options = options();
        let config = SelectConfig::new().with_clearable(true).with_native(true);
        let layout = ValueLayout::compute(
            &config,
            &InteractionState::default(),
            &options,
            &Selection::One(1),
            &ValueEq::Key,
        );
        assert!(!layout.show_clear);
    }

    #[test]
    fn test_keep_search_on_blur() {
        let options = options();
        let config = SelectConfig::new().with_searchable(true).with_keep_search_on_blur(true);
        let closed = InteractionState::default();

        let empty =
            ValueLayout::compute(&config, &closed, &options, &Selection::Empty, &ValueEq::Key);
        assert!(empty.search_visible);

        let chosen =
            ValueLayout::compute(&config, &closed, &options, &Selection::One(1), &ValueEq::Key);
        assert!(!chosen.search_visible);
    }

    #[test]
    fn test_search_not_rendered_when_disabled() {
        let options = options();
        let config = SelectConfig::new().with_disabled(true);
        let layout = ValueLayout::compute(
            &config,
            &InteractionState::default(),
            &options,
            &Selection::Empty,
            &ValueEq::Key,
        );
        assert!(!layout.search_rendered);

        let config = config.with_keep_search_on_blur(true);
        let layout = ValueLayout::compute(
            &config,
            &InteractionState::default(),
            &options,
            &Selection::Empty,
            &ValueEq::Key,
        );
        assert!(layout.search_rendered);
    }

    #[test]
    fn test_suppress_search_key() {
        assert!(should_suppress_search_key(Key::Enter, true, false));
        assert!(should_suppress_search_key(Key::ArrowDown, true, false));
        assert!(!should_suppress_search_key(Key::Other, true, false));
        assert!(should_suppress_search_key(Key::Other, false, false));
        assert!(!should_suppress_search_key(Key::Tab, false, false));
        assert!(!should_suppress_search_key(Key::Enter, true, true));
    }
}
