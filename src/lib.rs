//! # trellis-tui
//!
//! A retained-mode terminal UI runtime: a widget tree with lifecycle and
//! dirty tracking, flex and split-pane layout, and DOM-style event
//! dispatch with capture, target and bubble phases.
//!
//! ## Core Systems
//!
//! - **[`geometry`]**: Offset, Size, Rect, Spacing primitives
//! - **[`render`]**: Cells, border glyphs, and the clipped frame buffer
//! - **[`layout`]**: Dimensions with `fr` units, flex resolution, draggable splits
//! - **[`dom`]**: Slotmap-backed widget tree: lifecycle, focus, hover, capture, queries, dispatch
//! - **[`widget`]**: Widget trait, callback contexts, lifecycle journal, scroll state
//! - **[`widgets`]**: Built-in widgets: Static, Container, Panel, SplitContainer
//! - **[`event`]**: Input events, the dispatched event, key bindings
//! - **[`css`]**: Declaration values and property interpretation
//! - **[`app`]**: Application struct tying everything together
//! - **[`testing`]**: Headless Pilot and snapshot helpers

// Foundation
pub mod geometry;

// Core systems
pub mod css;
pub mod dom;
pub mod layout;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Application
pub mod app;
pub mod testing;

pub use app::{App, AppConfig};
pub use dom::{NodeId, TreeError, WidgetTree};
pub use event::{Event, InputEvent, Phase};
pub use geometry::Rect;
pub use render::Buffer;
pub use widget::{Widget, WidgetExt};
