//! Select controller: the Closed/Open interaction state machine.
//!
//! # Transitions
//!
//! ```text
//!            Toggle, SearchFocus, ArrowUp/ArrowDown, Search
//!   Closed ──────────────────────────────────────────────▶ Open
//!     ▲                                                     │
//!     └─────────────────────────────────────────────────────┘
//!      Toggle, Tab, Escape, confirmed entry, DismissPointer
//! ```
//!
//! The controller owns only the interaction state. Options and the current
//! selection belong to the host and are passed in through [`SelectContext`]
//! on every call. Side effects are returned as [`Command`]s, in the order
//! the host must execute them.

mod keys;

pub use keys::Key;

use slct_types::{OptionValue, Rect, SelectConfig, SelectOption, Selection, ValueEq};
use tracing::{debug, warn};

use crate::filter::{menu_entries, MenuEntry};
use crate::native::NativeMirror;

/// Interaction state owned by the controller.
///
/// Reset to the default (closed, no search, nothing highlighted) whenever
/// the menu closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub open: bool,
    pub search: Option<String>,
    /// Highlighted position in the derived entry list
    pub selected_index: Option<usize>,
}

/// Host-owned data the controller reads while handling an input.
#[derive(Debug)]
pub struct SelectContext<'a, V> {
    pub options: &'a [SelectOption<V>],
    pub value: &'a Selection<V>,
    pub eq: &'a ValueEq<V>,
    /// Trigger bounding box, measured by the host right before dispatch
    pub anchor: Option<Rect>,
}

impl<'a, V> SelectContext<'a, V> {
    pub fn new(options: &'a [SelectOption<V>], value: &'a Selection<V>, eq: &'a ValueEq<V>) -> Self {
        Self { options, value, eq, anchor: None }
    }

    pub fn with_anchor(mut self, anchor: Option<Rect>) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Something that happened to the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<V> {
    /// Click on the value area
    Toggle,
    /// The search field received focus
    SearchFocus,
    KeyDown(Key),
    KeyUp(Key),
    /// The search field text changed (already trimmed)
    Search(String),
    /// Click on the menu entry at this position
    SelectEntry(usize),
    /// Removal of one chip in multi mode
    Remove(V),
    /// Click on the clear button
    Clear,
    /// Pointer went down outside the widget
    DismissPointer,
    /// The hidden native select changed; indices of its selected `<option>`s
    NativeChange(Vec<usize>),
    /// The widget is being torn down
    Unmount,
}

/// Side effect requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<V> {
    /// Start listening for pointer-down outside the widget
    AttachDismissListener,
    /// Stop listening for pointer-down outside the widget
    DetachDismissListener,
    /// Write these value keys into the hidden native select
    SyncNative(Vec<String>),
    /// Notify the host of a new selection
    Change(Selection<V>),
    /// Notify the host that the user asked to create an option from this text
    Create(String),
    /// Notify the host that the clear button was used
    Clear,
    /// Notify the host of new search text
    Search(String),
}

/// Result of [`SelectController::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<V> {
    /// Whether interaction state or the captured anchor changed
    pub changed: bool,
    pub commands: Vec<Command<V>>,
}

/// The interaction state machine.
#[derive(Debug, Clone, Default)]
pub struct SelectController {
    config: SelectConfig,
    state: InteractionState,
    anchor: Rect,
}

impl SelectController {
    pub fn new(config: SelectConfig) -> Self {
        Self { config, state: InteractionState::default(), anchor: Rect::default() }
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Replace the configuration, e.g. after the host changed a prop.
    pub fn set_config(&mut self, config: SelectConfig) {
        self.config = config;
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn search(&self) -> Option<&str> {
        self.state.search.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    /// Trigger bounding box captured on the last open.
    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    /// Menu entries for the current search text.
    pub fn entries<V: OptionValue>(&self, ctx: &SelectContext<'_, V>) -> Vec<MenuEntry> {
        menu_entries(ctx.options, self.search(), &self.config)
    }

    /// Like [`handle`](Self::handle), also reporting whether anything a
    /// renderer reads has changed.
    pub fn step<V: OptionValue>(
        &mut self,
        input: Input<V>,
        ctx: &SelectContext<'_, V>,
    ) -> Transition<V> {
        let before = (self.state.clone(), self.anchor);
        let commands = self.handle(input, ctx);
        let changed = before != (self.state.clone(), self.anchor);
        Transition { changed, commands }
    }

    /// Feed one input through the state machine.
    pub fn handle<V: OptionValue>(
        &mut self,
        input: Input<V>,
        ctx: &SelectContext<'_, V>,
    ) -> Vec<Command<V>> {
        let mut commands = Vec::new();
        self.drop_stale_highlight(ctx);

        if self.config.disabled && !matches!(input, Input::DismissPointer | Input::Unmount) {
            debug!(?input, "select disabled, input ignored");
            return commands;
        }

        match input {
            Input::Toggle => {
                if self.state.open {
                    self.close(&mut commands);
                } else {
                    self.open(ctx, &mut commands);
                }
            }
            Input::SearchFocus => {
                if !self.state.open && !self.config.native {
                    self.open(ctx, &mut commands);
                }
            }
            Input::KeyDown(key) => {
                if key == Key::Tab && self.state.open {
                    self.close(&mut commands);
                }
            }
            Input::KeyUp(key) => self.on_key_up(key, ctx, &mut commands),
            Input::Search(text) => self.on_search(text, ctx, &mut commands),
            Input::SelectEntry(index) => {
                if self.state.open {
                    self.confirm(index, ctx, &mut commands);
                }
            }
            Input::Remove(value) => {
                let values = ctx.value.without(&value, ctx.eq);
                self.commit(Selection::from_values(values), &mut commands);
            }
            Input::Clear => {
                commands.push(Command::Clear);
                self.commit(Selection::Empty, &mut commands);
            }
            Input::DismissPointer => {
                if self.state.open {
                    self.close(&mut commands);
                }
            }
            Input::NativeChange(indices) => {
                let values = indices
                    .into_iter()
                    .filter_map(|index| match NativeMirror::decode(index, ctx.options) {
                        Ok(option) => Some(option.value.clone()),
                        Err(err) => {
                            warn!(%err, "skipping native option");
                            None
                        }
                    })
                    .collect();
                commands.push(Command::Change(Selection::from_values(values)));
            }
            Input::Unmount => {
                if self.state.open {
                    self.state = InteractionState::default();
                    commands.push(Command::DetachDismissListener);
                }
            }
        }

        if !commands.is_empty() {
            debug!(state = ?self.state, commands = commands.len(), "select transition");
        }
        commands
    }

    /// The host may have shrunk `options` since the last input.
    fn drop_stale_highlight<V: OptionValue>(&mut self, ctx: &SelectContext<'_, V>) {
        if let Some(index) = self.state.selected_index {
            if index >= self.entries(ctx).len() {
                debug!(index, "highlight past the entry list, cleared");
                self.state.selected_index = None;
            }
        }
    }

    fn open<V: OptionValue>(&mut self, ctx: &SelectContext<'_, V>, commands: &mut Vec<Command<V>>) {
        if let Some(anchor) = ctx.anchor {
            self.anchor = anchor;
        }
        self.state.open = true;
        self.state.search = None;
        self.state.selected_index = Self::position_of_value(ctx);
        commands.push(Command::AttachDismissListener);
    }

    fn close<V>(&mut self, commands: &mut Vec<Command<V>>) {
        let was_open = self.state.open;
        self.state = InteractionState::default();
        if was_open {
            commands.push(Command::DetachDismissListener);
        }
    }

    /// Position of the current value in the unfiltered list. Only a selection
    /// of exactly one value can be highlighted.
    fn position_of_value<V: OptionValue>(ctx: &SelectContext<'_, V>) -> Option<usize> {
        if ctx.value.len() != 1 {
            return None;
        }
        let current = ctx.value.first()?;
        ctx.options.iter().position(|option| ctx.eq.same(&option.value, current))
    }

    fn on_key_up<V: OptionValue>(
        &mut self,
        key: Key,
        ctx: &SelectContext<'_, V>,
        commands: &mut Vec<Command<V>>,
    ) {
        match key {
            Key::ArrowUp | Key::ArrowDown => {
                if self.state.open {
                    let len = self.entries(ctx).len();
                    self.state.selected_index = navigate(self.state.selected_index, key, len);
                } else {
                    self.open(ctx, commands);
                }
            }
            Key::Enter => {
                if let (true, Some(index)) = (self.state.open, self.state.selected_index) {
                    self.confirm(index, ctx, commands);
                }
            }
            Key::Escape => {
                if self.state.open {
                    self.close(commands);
                }
            }
            Key::Tab | Key::Other => {}
        }
    }

    fn on_search<V: OptionValue>(
        &mut self,
        text: String,
        ctx: &SelectContext<'_, V>,
        commands: &mut Vec<Command<V>>,
    ) {
        if !self.config.is_searchable() {
            return;
        }
        if !self.state.open {
            if self.config.native {
                return;
            }
            self.open(ctx, commands);
        }

        self.state.search = if text.is_empty() { None } else { Some(text.clone()) };

        let entries = self.entries(ctx);
        let auto_highlight =
            entries.len() == 1 || (self.config.creatable && self.state.search.is_some());
        self.state.selected_index = if auto_highlight && !entries.is_empty() { Some(0) } else { None };

        commands.push(Command::Search(text));
    }

    fn confirm<V: OptionValue>(
        &mut self,
        index: usize,
        ctx: &SelectContext<'_, V>,
        commands: &mut Vec<Command<V>>,
    ) {
        let entries = self.entries(ctx);
        match entries.into_iter().nth(index) {
            None => debug!(index, "stale menu index"),
            Some(MenuEntry::Create { search, .. }) => {
                self.close(commands);
                commands.push(Command::Create(search));
            }
            Some(MenuEntry::Option(option_index)) => {
                let Some(option) = ctx.options.get(option_index) else {
                    return;
                };
                if option.disabled {
                    debug!(label = %option.label, "disabled option not selectable");
                    return;
                }
                let next = if self.config.multi {
                    Selection::from_values(ctx.value.appended(option.value.clone(), ctx.eq))
                } else {
                    Selection::One(option.value.clone())
                };
                self.commit(next, commands);
            }
        }
    }

    /// Sync the native mirror, close, then notify the host.
    fn commit<V: OptionValue>(&mut self, next: Selection<V>, commands: &mut Vec<Command<V>>) {
        commands.push(Command::SyncNative(next.keys()));
        self.close(commands);
        commands.push(Command::Change(next));
    }
}

/// Move the highlight one step. Stepping past either end clears it; the next
/// ArrowDown starts over at the top.
pub fn navigate(current: Option<usize>, key: Key, len: usize) -> Option<usize> {
    match key {
        Key::ArrowDown => {
            let next = current.map_or(0, |i| i + 1);
            (next < len).then_some(next)
        }
        Key::ArrowUp => match current {
            Some(i) if i > 0 && i <= len => Some(i - 1),
            _ => None,
        },
        _ => current,
    }
}
