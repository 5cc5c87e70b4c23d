//! Headless mode: the host draws everything, the controller still decides.

use leptos::prelude::*;
use slct_core::HeadlessView;

/// Passed to a headless renderer on every change.
///
/// The renderer's view is mounted inside the widget container, so clicks in
/// it never count as outside clicks and the menu anchors to the container.
pub struct HeadlessProps<V: 'static> {
    pub view: HeadlessView<V>,
    /// Open or close the menu
    pub on_toggle: Callback<()>,
    /// Confirm the menu row at this position in `view.items`
    pub on_select: Callback<usize>,
    /// Drop one value from a multi selection
    pub on_remove: Callback<V>,
    pub on_clear: Callback<()>,
    /// Inline style placing a menu under the container
    pub menu_style: String,
}
