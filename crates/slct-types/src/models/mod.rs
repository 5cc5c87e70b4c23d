//! Core domain models for slct.
//!
//! This module contains the data structures shared by the state machine and
//! the Leptos components.

mod config;
mod option;
mod rect;
mod selection;
mod value;

// Re-export all models
pub use config::{SelectConfig, DEFAULT_CREATE_LABEL};
pub use option::SelectOption;
pub use rect::Rect;
pub use selection::Selection;
pub use value::{OptionValue, ValueEq};
