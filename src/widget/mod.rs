//! Widget system: trait, callback contexts, lifecycle journal, scrolling.

pub mod context;
pub mod lifecycle;
pub mod scroll;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing_widgets;

pub use context::{RenderContext, WidgetContext};
pub use lifecycle::{LifecycleEvent, LifecycleLog};
pub use scroll::{ScrollState, ScrollbarState};
pub use traits::{Widget, WidgetBuilder, WidgetExt};
