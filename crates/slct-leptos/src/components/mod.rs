//! Leptos components

mod headless;
mod label;
mod native;
mod options;
mod select;
mod value;

pub use headless::HeadlessProps;
pub use label::{ChipProps, RenderOverrides};
pub use native::NativeSelect;
pub use options::OptionsMenu;
pub use select::Select;
pub use value::ValueRenderer;
