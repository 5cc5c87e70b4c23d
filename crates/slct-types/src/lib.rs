//! # slct Types
//!
//! Option model, selection, configuration, and error definitions for the
//! slct select widget.
//!
//! This crate provides the foundational type system for the widget:
//!
//! - **`error`** - Typed errors for configuration loading and native select decoding
//! - **`models`** - Domain models (SelectOption, Selection, SelectConfig, Rect)
//!
//! ## Architecture Role
//!
//! `slct-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        slct-types (this crate)
//!               │
//!               ▼
//!          slct-core      (headless state machine)
//!               │
//!               ▼
//!          slct-leptos    (Leptos components)
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde so hosts can load defaults from JSON
//! - **Clone** for cheap sharing across reactive closures
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, NativeError, Result, SelectError};

// Re-export core model types
pub use models::{OptionValue, Rect, SelectConfig, SelectOption, Selection, ValueEq};
