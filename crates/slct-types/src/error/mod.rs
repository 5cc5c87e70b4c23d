//! Typed error definitions for slct.
//!
//! The interaction path itself never fails: missing callbacks are no-ops and
//! index arithmetic is bounds-checked. Errors only exist at the two edges
//! where outside data enters the widget:
//!
//! - **Configuration** loaded from JSON
//! - **Native select** change events decoded back into option values

mod config;
mod native;

pub use config::ConfigError;
pub use native::NativeError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum SelectError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a native select decoding error
    #[error("Native select error: {0}")]
    Native(#[from] NativeError),
}

/// Standard Result type using SelectError.
pub type Result<T> = std::result::Result<T, SelectError>;
