//! Event model: decoded input, the dispatched event, and key bindings.

pub mod binding;
#[allow(clippy::module_inception)]
pub mod event;
pub mod input;

pub use binding::{BindingAction, KeyBinding, KeyBindingRegistry};
pub use event::{Event, Phase};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseButton, MouseEvent};
