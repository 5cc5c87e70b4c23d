//! web-sys helpers used by the components.

use slct_types::Rect;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlOptionElement, HtmlSelectElement, Node};

/// Viewport-relative bounding box of `el`.
pub(crate) fn bounding_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Whether the event target is `container` or one of its descendants.
pub(crate) fn contains_target(container: &Element, ev: &Event) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Focus a contenteditable element and put the caret after its text.
pub(crate) fn focus_at_end(el: &HtmlElement) {
    if let Err(err) = el.focus() {
        log::warn!("search focus failed: {err:?}");
        return;
    }
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Ok(range) = document.create_range() else { return };
    if range.select_node_contents(el).is_err() {
        return;
    }
    range.collapse_with_to_start(false);
    if let Ok(Some(selection)) = window.get_selection() {
        drop(selection.remove_all_ranges());
        drop(selection.add_range(&range));
    }
}

/// DOM indices of the selected `<option>`s, placeholder included.
pub(crate) fn selected_option_indices(select: &HtmlSelectElement) -> Vec<usize> {
    let selected = select.selected_options();
    (0..selected.length())
        .filter_map(|i| selected.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .filter_map(|option| usize::try_from(option.index()).ok())
        .collect()
}

/// `value` for a single-mode `<select>`; nothing selected picks the placeholder.
pub(crate) fn single_native_value(keys: &[String]) -> &str {
    keys.first().map_or("", String::as_str)
}

/// Whether a multi-mode `<option>` carrying `value` is selected. The
/// placeholder (empty value) never is.
pub(crate) fn is_native_selected(value: &str, keys: &[String]) -> bool {
    !value.is_empty() && keys.iter().any(|key| key == value)
}

/// Make the element's selected options match `keys`.
pub(crate) fn sync_native(select: &HtmlSelectElement, keys: &[String]) {
    if !select.multiple() {
        select.set_value(single_native_value(keys));
        return;
    }
    for i in 0..select.length() {
        if let Some(option) = select.item(i).and_then(|el| el.dyn_into::<HtmlOptionElement>().ok()) {
            option.set_selected(is_native_selected(&option.value(), keys));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_single_native_value() {
        assert_eq!(single_native_value(&[]), "");
        assert_eq!(single_native_value(&keys(&["2"])), "2");
        assert_eq!(single_native_value(&keys(&["2", "3"])), "2");
    }

    #[test]
    fn test_multi_native_selection() {
        let selected = keys(&["1", "3"]);
        let flags: Vec<bool> =
            ["", "1", "2", "3"].iter().map(|value| is_native_selected(value, &selected)).collect();
        assert_eq!(flags, vec![false, true, false, true]);

        assert!(!is_native_selected("1", &[]));
        assert!(!is_native_selected("", &keys(&[""])));
    }
}
