//! Options menu

use leptos::ev;
use leptos::prelude::*;
use slct_core::{menu_items, Input, MenuItem, MenuPosition, SelectContext, SelectController};
use slct_types::{OptionValue, SelectOption, Selection, ValueEq};

use super::RenderOverrides;

/// Inline style placing the menu under the trigger.
pub(crate) fn menu_style(position: MenuPosition) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; width: {}px;",
        position.left, position.top, position.width
    )
}

fn item_class(item: &MenuItem) -> String {
    let mut class = String::from("slct-option");
    if item.highlighted {
        class.push_str(" slct-option--highlighted");
    }
    if item.selected {
        class.push_str(" slct-option--selected");
    }
    if item.disabled {
        class.push_str(" slct-option--disabled");
    }
    if item.is_create() {
        class.push_str(" slct-option--create");
    }
    class
}

#[component]
pub fn OptionsMenu<V>(
    controller: RwSignal<SelectController>,
    options: Signal<Vec<SelectOption<V>>>,
    value: Signal<Selection<V>>,
    eq: StoredValue<ValueEq<V>>,
    dispatch: Callback<Input<V>>,
    render: RenderOverrides<V>,
) -> impl IntoView
where
    V: OptionValue + PartialEq + Send + Sync + 'static,
{
    let items = Memo::new(move |_| {
        options.with(|options| {
            value.with(|value| {
                eq.with_value(|eq| {
                    controller.with(|c| menu_items(c, &SelectContext::new(options, value, eq)))
                })
            })
        })
    });

    let rows = move || {
        items
            .get()
            .into_iter()
            .enumerate()
            .map(|(position, item)| {
                let option = item
                    .option_index
                    .and_then(|index| options.with_untracked(|options| options.get(index).cloned()));
                let label = match option {
                    Some(option) => render.option_label(option),
                    None => view! { <span class="slct-label">{item.label.clone()}</span> }.into_any(),
                };
                view! {
                    <div
                        class=item_class(&item)
                        role="option"
                        aria-selected=item.selected.to_string()
                        aria-disabled=item.disabled.to_string()
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            dispatch.run(Input::SelectEntry(position));
                        }
                    >
                        {label}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || controller.with(SelectController::is_open)>
            <div
                class="slct-menu"
                role="listbox"
                style=move || menu_style(controller.with(|c| MenuPosition::below(c.anchor())))
            >
                {rows}
            </div>
        </Show>
    }
}
