//! The widget tree: arena storage, lifecycle, focus, queries and dispatch.

mod dispatch;
pub mod focus;
pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use query::{Selector, SelectorError};
pub use tree::{Handler, TreeError, UiContext, WidgetTree};
