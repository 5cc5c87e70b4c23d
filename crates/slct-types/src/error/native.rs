//! Errors raised while decoding the hidden native `<select>`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when mapping native `<option>` indices back to options.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum NativeError {
    /// The `<option>` index has no counterpart in the option list
    #[error("Native option index {index} is out of range")]
    UnknownOption {
        /// Index of the `<option>` element inside the native select
        index: usize,
    },

    /// The disabled placeholder `<option>` was reported as selected
    #[error("Native placeholder option cannot be selected")]
    PlaceholderSelected,
}
