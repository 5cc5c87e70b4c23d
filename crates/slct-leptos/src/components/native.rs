//! Hidden native `<select>` mirror

use leptos::html;
use leptos::prelude::*;
use slct_core::NativeMirror;

use crate::dom;

#[component]
pub fn NativeSelect(
    #[prop(into)] mirror: Signal<NativeMirror>,
    select_ref: NodeRef<html::Select>,
    /// Receives the DOM indices of the selected `<option>`s
    #[prop(into)]
    on_change: Callback<Vec<usize>>,
) -> impl IntoView {
    // Keep the element's selection in step with re-renders of its options.
    Effect::new(move |_| {
        let selected = mirror.with(|m| m.selected.clone());
        if let Some(select) = select_ref.get() {
            dom::sync_native(&select, &selected);
        }
    });

    view! {
        <select
            class=move || if mirror.with(|m| m.raised) { "slct-native slct-native--raised" } else { "slct-native" }
            node_ref=select_ref
            multiple=move || mirror.with(|m| m.multiple)
            disabled=move || mirror.with(|m| m.disabled)
            tabindex="-1"
            on:change=move |_| {
                if let Some(select) = select_ref.get_untracked() {
                    on_change.run(dom::selected_option_indices(&select));
                }
            }
        >
            <option value="" disabled=true>
                {move || mirror.with(|m| m.placeholder.clone())}
            </option>
            {move || {
                mirror
                    .with(|m| m.options.clone())
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.value disabled=option.disabled>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
