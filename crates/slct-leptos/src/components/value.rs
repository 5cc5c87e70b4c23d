//! Value area: placeholder, labels or chips, the contenteditable search span,
//! clear button and arrow.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use slct_core::{should_suppress_search_key, Input, Key, SelectController, ValueLayout};
use slct_types::{OptionValue, SelectOption, Selection, ValueEq};

use super::RenderOverrides;
use crate::dom;

/// Flex `order` of the search span relative to the chips.
fn search_order(at_end: bool) -> &'static str {
    if at_end {
        "1"
    } else {
        "-1"
    }
}

fn search_class(visible: bool) -> &'static str {
    if visible {
        "slct-search slct-search--visible"
    } else {
        "slct-search"
    }
}

/// Value-area click. An open menu closes. A closed one gets focus in the
/// search span, which opens it through `SearchFocus` unless in native mode;
/// only a menu still closed after that is toggled.
fn click_value_area(is_open: impl Fn() -> bool, focus: impl FnOnce(), toggle: impl FnOnce()) {
    if is_open() {
        toggle();
        return;
    }
    focus();
    if !is_open() {
        toggle();
    }
}

#[component]
pub fn ValueRenderer<V>(
    controller: RwSignal<SelectController>,
    options: Signal<Vec<SelectOption<V>>>,
    value: Signal<Selection<V>>,
    eq: StoredValue<ValueEq<V>>,
    dispatch: Callback<Input<V>>,
    on_search_blur: Callback<()>,
    render: RenderOverrides<V>,
) -> impl IntoView
where
    V: OptionValue + PartialEq + Send + Sync + 'static,
{
    let search_ref = NodeRef::<html::Span>::new();

    let layout = Memo::new(move |_| {
        options.with(|options| {
            value.with(|value| {
                eq.with_value(|eq| {
                    controller.with(|c| ValueLayout::compute(c.config(), c.state(), options, value, eq))
                })
            })
        })
    });
    let config = move || controller.with_untracked(|c| c.config().clone());

    // The span is uncontrolled; wipe it once the search has been reset.
    Effect::new(move |had_search: Option<bool>| {
        let has_search = controller.with(|c| c.search().is_some());
        if had_search == Some(true) && !has_search {
            if let Some(span) = search_ref.get_untracked() {
                span.set_inner_text("");
            }
        }
        has_search
    });

    let blur_listener = window_event_listener(ev::blur, move |_| {
        if let Some(span) = search_ref.get_untracked() {
            drop(span.blur());
        }
    });
    on_cleanup(move || blur_listener.remove());

    let on_area_click = move |_: ev::MouseEvent| {
        if config().disabled {
            return;
        }
        click_value_area(
            || controller.with_untracked(SelectController::is_open),
            || {
                if let Some(span) = search_ref.get_untracked() {
                    dom::focus_at_end(&span);
                }
            },
            || dispatch.run(Input::Toggle),
        );
    };

    let on_search_input = move |ev: web_sys::Event| {
        let Some(span) = search_ref.get_untracked() else { return };
        if config().is_searchable() {
            dispatch.run(Input::Search(span.inner_text().trim().to_string()));
        } else {
            ev.prevent_default();
            span.set_inner_text("");
        }
    };

    let on_search_keydown = move |ev: ev::KeyboardEvent| {
        let key = Key::from_name(&ev.key());
        if should_suppress_search_key(key, config().is_searchable(), ev.meta_key()) {
            ev.prevent_default();
        }
    };

    let values = move || {
        let layout = layout.get();
        if !layout.show_values {
            return ().into_any();
        }
        if layout.show_placeholder {
            let placeholder = config().placeholder.unwrap_or_default();
            return view! { <span class="slct-placeholder">{placeholder}</span> }.into_any();
        }
        if !config().multi {
            return layout
                .selected
                .into_iter()
                .map(|option| render.single_value(option))
                .collect_view()
                .into_any();
        }
        layout
            .selected
            .into_iter()
            .map(|option| {
                let removed = option.value.clone();
                let on_remove = Callback::new(move |()| dispatch.run(Input::Remove(removed.clone())));
                render.chip(option, on_remove)
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="slct-value" on:click=on_area_click>
            <div class="slct-value-left">
                {move || render.icon_view()}
                {values}
                <Show when=move || layout.with(|l| l.search_rendered)>
                    <span
                        class=move || search_class(layout.with(|l| l.search_visible))
                        style:order=move || search_order(layout.with(|l| l.search_at_end))
                        contenteditable="true"
                        spellcheck="false"
                        node_ref=search_ref
                        on:input=on_search_input
                        on:keydown=on_search_keydown
                        on:focus=move |_| dispatch.run(Input::SearchFocus)
                        on:blur=move |_| on_search_blur.run(())
                    ></span>
                </Show>
            </div>
            <div class="slct-value-right">
                <Show when=move || layout.with(|l| l.show_clear)>
                    <button
                        type="button"
                        class="slct-clear"
                        tabindex="-1"
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            dispatch.run(Input::Clear);
                        }
                    >
                        {render.clear_view()}
                    </button>
                </Show>
                {move || layout.with(|l| render.arrow_view(l))}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slct_core::{Command, SelectContext};
    use slct_types::SelectConfig;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_search_order() {
        assert_eq!(search_order(true), "1");
        assert_eq!(search_order(false), "-1");
    }

    #[test]
    fn test_search_class() {
        assert_eq!(search_class(false), "slct-search");
        assert!(search_class(true).ends_with("slct-search--visible"));
    }

    /// Clicks the value area of a controller-backed widget and returns how
    /// many `Toggle`s went out and the dismiss commands produced.
    fn click(controller: &RefCell<SelectController>, span_focused: bool) -> (usize, Vec<Command<u32>>) {
        let options = vec![SelectOption::new("Red", 1), SelectOption::new("Blue", 2)];
        let value = Selection::Empty;
        let eq = ValueEq::Key;
        let ctx = SelectContext::new(&options, &value, &eq);
        let toggles = Cell::new(0);
        let commands = RefCell::new(Vec::new());

        click_value_area(
            || controller.borrow().is_open(),
            || {
                // An already focused span fires no focus event.
                if !span_focused {
                    let out = controller.borrow_mut().handle(Input::SearchFocus, &ctx);
                    commands.borrow_mut().extend(out);
                }
            },
            || {
                toggles.set(toggles.get() + 1);
                let out = controller.borrow_mut().handle(Input::Toggle, &ctx);
                commands.borrow_mut().extend(out);
            },
        );
        (toggles.get(), commands.into_inner())
    }

    #[test]
    fn test_click_opens_through_focus_only() {
        let controller = RefCell::new(SelectController::new(SelectConfig::new()));
        let (toggles, commands) = click(&controller, false);

        assert_eq!(toggles, 0);
        assert!(controller.borrow().is_open());
        assert_eq!(commands, vec![Command::AttachDismissListener]);
    }

    #[test]
    fn test_click_native_mode_toggles() {
        let controller =
            RefCell::new(SelectController::new(SelectConfig::new().with_native(true)));
        let (toggles, commands) = click(&controller, false);

        assert_eq!(toggles, 1);
        assert!(controller.borrow().is_open());
        assert_eq!(commands, vec![Command::AttachDismissListener]);
    }

    #[test]
    fn test_click_focused_span_toggles() {
        let controller = RefCell::new(SelectController::new(SelectConfig::new()));
        let (toggles, _) = click(&controller, true);

        assert_eq!(toggles, 1);
        assert!(controller.borrow().is_open());
    }

    #[test]
    fn test_click_open_menu_closes() {
        let controller = RefCell::new(SelectController::new(SelectConfig::new()));
        click(&controller, false);
        let (toggles, commands) = click(&controller, false);

        assert_eq!(toggles, 1);
        assert!(!controller.borrow().is_open());
        assert_eq!(commands, vec![Command::DetachDismissListener]);
    }
}
