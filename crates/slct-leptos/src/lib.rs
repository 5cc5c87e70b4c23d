//! # slct Leptos
//!
//! Leptos components for the slct select widget. The components are thin:
//! browser events become [`slct_core::Input`]s, a [`slct_core::SelectController`]
//! decides, and the returned commands are executed here.
//!
//! ```text
//! slct-leptos/src/
//! ├── components/
//! │   ├── select.rs    # Select: hosts the controller, runs commands
//! │   ├── value.rs     # ValueRenderer: chips/labels, search span, clear, arrow
//! │   ├── options.rs   # OptionsMenu: fixed-position option list
//! │   ├── native.rs    # NativeSelect: hidden <select> mirror
//! │   ├── headless.rs  # props for host-drawn widgets
//! │   └── label.rs     # render overrides
//! ├── dom.rs           # web-sys helpers
//! ├── host.rs          # command execution and the listener slot
//! └── logging.rs       # console logging setup
//! ```

pub mod components;
mod dom;
mod host;
pub mod logging;

pub use components::{
    ChipProps, HeadlessProps, NativeSelect, OptionsMenu, RenderOverrides, Select, ValueRenderer,
};
pub use slct_core::HeadlessView;
pub use slct_types::{OptionValue, SelectConfig, SelectOption, Selection, ValueEq};
