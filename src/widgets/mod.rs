//! Built-in widgets: Static, Container, Panel, SplitContainer.

pub mod container;
pub mod panel;
pub mod split;
pub mod static_widget;

pub use container::Container;
pub use panel::Panel;
pub use split::{ResizeCallback, SplitContainer};
pub use static_widget::Static;
