//! Render overrides and the built-in fallbacks

use leptos::ev;
use leptos::prelude::*;
use slct_core::ValueLayout;
use slct_types::{OptionValue, SelectOption};

/// Optional replacements for the built-in text renderers.
pub struct RenderOverrides<V: 'static> {
    /// Option labels, in the menu and in the value area
    pub label: Option<Callback<SelectOption<V>, AnyView>>,
    /// Receives whether the menu is open
    pub arrow: Option<Callback<bool, AnyView>>,
    pub clear: Option<Callback<(), AnyView>>,
    /// Leading icon in the value area
    pub value_icon: Option<Callback<(), AnyView>>,
    /// Selected option in single mode
    pub value_single: Option<Callback<SelectOption<V>, AnyView>>,
    /// One chip in multi mode
    pub value_multi: Option<Callback<ChipProps<V>, AnyView>>,
}

/// What a custom chip receives.
pub struct ChipProps<V: 'static> {
    pub option: SelectOption<V>,
    /// Drops this option from the selection. Stop propagation in the click
    /// handler, or the value area sees the click too.
    pub on_remove: Callback<()>,
}

impl<V: 'static> Clone for RenderOverrides<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for RenderOverrides<V> {}

impl<V: 'static> Default for RenderOverrides<V> {
    fn default() -> Self {
        Self {
            label: None,
            arrow: None,
            clear: None,
            value_icon: None,
            value_single: None,
            value_multi: None,
        }
    }
}

impl<V: OptionValue + 'static> RenderOverrides<V> {
    pub(crate) fn option_label(self, option: SelectOption<V>) -> AnyView {
        match self.label {
            Some(render) => render.run(option),
            None => view! { <span class="slct-label">{option.label}</span> }.into_any(),
        }
    }

    pub(crate) fn single_value(self, option: SelectOption<V>) -> AnyView {
        match self.value_single {
            Some(render) => render.run(option),
            None => self.option_label(option),
        }
    }

    pub(crate) fn chip(self, option: SelectOption<V>, on_remove: Callback<()>) -> AnyView {
        if let Some(render) = self.value_multi {
            return render.run(ChipProps { option, on_remove });
        }
        view! {
            <span class="slct-chip">
                {self.option_label(option)}
                <button
                    type="button"
                    class="slct-chip-remove"
                    tabindex="-1"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        on_remove.run(());
                    }
                >
                    "×"
                </button>
            </span>
        }
        .into_any()
    }

    pub(crate) fn arrow_view(self, layout: &ValueLayout<V>) -> AnyView {
        match self.arrow {
            Some(render) => render.run(layout.open),
            None => view! { <span class="slct-arrow">{layout.arrow()}</span> }.into_any(),
        }
    }

    pub(crate) fn clear_view(self) -> AnyView {
        match self.clear {
            Some(render) => render.run(()),
            None => view! { <span class="slct-clear-icon">"×"</span> }.into_any(),
        }
    }

    pub(crate) fn icon_view(self) -> Option<AnyView> {
        self.value_icon.map(|render| render.run(()))
    }
}
