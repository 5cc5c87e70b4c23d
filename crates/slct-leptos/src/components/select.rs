//! Searchable select component
//!
//! Hosts a [`SelectController`], turns DOM events into [`Input`]s and runs
//! the [`Command`](slct_core::Command)s that come back.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use slct_core::{
    HeadlessView, Input, Key, MenuPosition, NativeMirror, SelectContext, SelectController,
};
use slct_types::{OptionValue, SelectConfig, SelectOption, Selection, ValueEq};

use super::options::menu_style;
use super::{ChipProps, HeadlessProps, NativeSelect, OptionsMenu, RenderOverrides, ValueRenderer};
use crate::dom;
use crate::host::{self, CommandHost, ListenerSlot};

/// Host callbacks; each is optional.
struct Callbacks<V: 'static> {
    on_change: Option<Callback<Selection<V>>>,
    on_create: Option<Callback<String>>,
    on_clear: Option<Callback<()>>,
    on_search: Option<Callback<String>>,
}

impl<V: 'static> Clone for Callbacks<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for Callbacks<V> {}

/// Arena handles shared by every event handler of one widget.
struct SelectHandle<V: Send + Sync + 'static> {
    controller: RwSignal<SelectController>,
    options: Signal<Vec<SelectOption<V>>>,
    value: Signal<Selection<V>>,
    eq: StoredValue<ValueEq<V>>,
    container: NodeRef<html::Div>,
    native: NodeRef<html::Select>,
    dismiss: StoredValue<ListenerSlot<WindowListenerHandle>>,
    callbacks: Callbacks<V>,
}

impl<V: Send + Sync + 'static> Clone for SelectHandle<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Send + Sync + 'static> Copy for SelectHandle<V> {}

impl<V> SelectHandle<V>
where
    V: OptionValue + Send + Sync + 'static,
{
    fn dispatch(self, input: Input<V>) {
        let anchor = self.container.try_get_untracked().flatten().map(|el| dom::bounding_rect(&el));
        let transition = self
            .options
            .try_with_untracked(|options| {
                self.value.try_with_untracked(|value| {
                    self.eq.try_with_value(|eq| {
                        let ctx = SelectContext::new(options, value, eq).with_anchor(anchor);
                        self.controller.try_update_untracked(|c| c.step(input, &ctx))
                    })
                })
            })
            .flatten()
            .flatten()
            .flatten();
        let Some(transition) = transition else { return };

        // Keyups that move nothing must not rerun every view.
        if transition.changed {
            self.controller.notify();
        }
        let mut target = self;
        host::execute(&mut target, transition.commands);
    }
}

impl<V> CommandHost<V> for SelectHandle<V>
where
    V: OptionValue + Send + Sync + 'static,
{
    fn attach_dismiss(&mut self) {
        let handle = *self;
        let listener = window_event_listener(ev::mousedown, move |ev| {
            let inside = handle
                .container
                .try_get_untracked()
                .flatten()
                .is_some_and(|el| dom::contains_target(&el, &ev));
            if !inside {
                handle.dispatch(Input::DismissPointer);
            }
        });
        if let Some(previous) = self.dismiss.try_update_value(|slot| slot.attach(listener)).flatten() {
            previous.remove();
        }
    }

    fn detach_dismiss(&mut self) {
        if let Some(listener) = self.dismiss.try_update_value(ListenerSlot::detach).flatten() {
            listener.remove();
        }
    }

    fn sync_native(&mut self, keys: &[String]) {
        if let Some(select) = self.native.try_get_untracked().flatten() {
            dom::sync_native(&select, keys);
        }
    }

    fn change(&mut self, selection: Selection<V>) {
        if let Some(on_change) = self.callbacks.on_change {
            on_change.run(selection);
        }
    }

    fn create(&mut self, text: String) {
        if let Some(on_create) = self.callbacks.on_create {
            on_create.run(text);
        }
    }

    fn clear(&mut self) {
        if let Some(on_clear) = self.callbacks.on_clear {
            on_clear.run(());
        }
    }

    fn search(&mut self, text: String) {
        if let Some(on_search) = self.callbacks.on_search {
            on_search.run(text);
        }
    }
}

fn container_class(extra: &str, disabled: bool, error: bool, open: bool) -> String {
    let mut class = String::from("slct");
    if disabled {
        class.push_str(" slct--disabled");
    }
    if error {
        class.push_str(" slct--error");
    }
    if open {
        class.push_str(" slct--open");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Select<V>(
    #[prop(into)] options: Signal<Vec<SelectOption<V>>>,
    #[prop(into)] value: Signal<Selection<V>>,
    #[prop(into)] config: Signal<SelectConfig>,
    /// Value comparator; defaults to comparing `OptionValue::key`
    #[prop(optional)]
    value_eq: ValueEq<V>,
    #[prop(optional, into)] class: String,
    /// Adds the `slct--error` class
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    #[prop(optional, into)] on_change: Option<Callback<Selection<V>>>,
    #[prop(optional, into)] on_create: Option<Callback<String>>,
    #[prop(optional, into)] on_clear: Option<Callback<()>>,
    #[prop(optional, into)] on_search: Option<Callback<String>>,
    #[prop(optional, into)] on_search_blur: Option<Callback<()>>,
    #[prop(optional, into)] label_view: Option<Callback<SelectOption<V>, AnyView>>,
    #[prop(optional, into)] arrow_view: Option<Callback<bool, AnyView>>,
    #[prop(optional, into)] clear_view: Option<Callback<(), AnyView>>,
    #[prop(optional, into)] value_icon: Option<Callback<(), AnyView>>,
    /// Replaces the selected label in single mode
    #[prop(optional, into)]
    value_single: Option<Callback<SelectOption<V>, AnyView>>,
    /// Replaces each chip in multi mode
    #[prop(optional, into)]
    value_multi: Option<Callback<ChipProps<V>, AnyView>>,
    /// Draws the whole widget instead of the built-in value area and menu.
    /// The hidden native `<select>` is still rendered.
    #[prop(optional, into)]
    headless: Option<Callback<HeadlessProps<V>, AnyView>>,
) -> impl IntoView
where
    V: OptionValue + PartialEq + Send + Sync + 'static,
{
    let controller = RwSignal::new(SelectController::new(config.get_untracked()));
    let handle = SelectHandle {
        controller,
        options,
        value,
        eq: StoredValue::new(value_eq),
        container: NodeRef::new(),
        native: NodeRef::new(),
        dismiss: StoredValue::new(ListenerSlot::default()),
        callbacks: Callbacks { on_change, on_create, on_clear, on_search },
    };
    let render = RenderOverrides {
        label: label_view,
        arrow: arrow_view,
        clear: clear_view,
        value_icon,
        value_single,
        value_multi,
    };

    Effect::new(move |_| {
        let config = config.get();
        if let Err(err) = config.validate() {
            log::warn!("invalid select config: {err}");
        }
        controller.update(|c| c.set_config(config));
    });

    on_cleanup(move || handle.dispatch(Input::Unmount));

    let dispatch = Callback::new(move |input: Input<V>| handle.dispatch(input));
    let search_blur = Callback::new(move |()| {
        if let Some(on_search_blur) = on_search_blur {
            on_search_blur.run(());
        }
    });
    let native_change = Callback::new(move |indices: Vec<usize>| handle.dispatch(Input::NativeChange(indices)));

    let mirror = Signal::derive(move || {
        options.with(|options| {
            value.with(|value| controller.with(|c| NativeMirror::build(c.config(), options, value)))
        })
    });

    let (container, native, eq) = (handle.container, handle.native, handle.eq);
    let container_classes = move || {
        let error = error.get().unwrap_or(false);
        controller.with(|c| container_class(&class, c.config().disabled, error, c.is_open()))
    };

    let body = match headless {
        Some(renderer) => {
            let snapshot = Memo::new(move |_| {
                options.with(|options| {
                    value.with(|value| {
                        eq.with_value(|eq| {
                            controller.with(|c| HeadlessView::compute(c, &SelectContext::new(options, value, eq)))
                        })
                    })
                })
            });
            let toggle = Callback::new(move |()| handle.dispatch(Input::Toggle));
            let select_entry = Callback::new(move |position: usize| handle.dispatch(Input::SelectEntry(position)));
            let remove = Callback::new(move |removed: V| handle.dispatch(Input::Remove(removed)));
            let clear = Callback::new(move |()| handle.dispatch(Input::Clear));
            let draw = move || {
                renderer.run(HeadlessProps {
                    view: snapshot.get(),
                    on_toggle: toggle,
                    on_select: select_entry,
                    on_remove: remove,
                    on_clear: clear,
                    menu_style: menu_style(MenuPosition::below(controller.with(SelectController::anchor))),
                })
            };
            view! { {draw} }.into_any()
        }
        None => view! {
            <ValueRenderer
                controller=controller
                options=options
                value=value
                eq=eq
                dispatch=dispatch
                on_search_blur=search_blur
                render=render
            />
            <OptionsMenu
                controller=controller
                options=options
                value=value
                eq=eq
                dispatch=dispatch
                render=render
            />
        }
        .into_any(),
    };

    view! {
        <div
            class=container_classes
            node_ref=container
            on:keydown=move |ev: ev::KeyboardEvent| handle.dispatch(Input::KeyDown(Key::from_name(&ev.key())))
            on:keyup=move |ev: ev::KeyboardEvent| handle.dispatch(Input::KeyUp(Key::from_name(&ev.key())))
        >
            <NativeSelect mirror=mirror select_ref=native on_change=native_change />
            {body}
        </div>
    }
}
