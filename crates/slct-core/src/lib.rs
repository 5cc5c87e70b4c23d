//! # slct Core
//!
//! Headless interaction logic for the slct select widget.
//!
//! ## Architecture
//!
//! ```text
//! slct-core/src/
//! ├── controller/   # Closed/Open state machine, inputs and commands
//! ├── filter/       # prefix search and the synthetic create entry
//! ├── headless.rs   # snapshot for host-drawn widgets
//! ├── value.rs      # what the value area shows (placeholder, chips, search field)
//! ├── menu.rs       # what the options menu shows and where
//! └── native.rs     # hidden native <select> mirror
//! ```
//!
//! Nothing here touches the DOM. The Leptos layer turns browser events into
//! [`Input`]s, feeds them to a [`SelectController`], and executes the
//! [`Command`]s it gets back.
//!
//! Transitions are reported as `tracing` events. In the browser they reach
//! the console through the `log` facade; natively, install a subscriber.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

pub mod controller;
pub mod filter;
pub mod headless;
pub mod menu;
pub mod native;
pub mod value;

// Re-export commonly used types
pub use controller::{
    navigate, Command, Input, InteractionState, Key, SelectContext, SelectController, Transition,
};
pub use filter::MenuEntry;
pub use headless::HeadlessView;
pub use menu::{menu_items, MenuItem, MenuPosition};
pub use native::{NativeMirror, NativeOption};
pub use value::{should_suppress_search_key, ValueLayout};

pub use slct_types::{
    ConfigError, NativeError, OptionValue, Rect, SelectConfig, SelectError, SelectOption, Selection,
    ValueEq,
};
