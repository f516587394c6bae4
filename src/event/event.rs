//! The dispatched event: an [`InputEvent`] payload plus propagation state.
//!
//! An [`Event`] is created fresh per input and consumed by one dispatch. The
//! dispatcher fills in `phase`, `target` and `current_target` while it runs
//! and clears them when it finishes.

use crate::dom::NodeId;

use super::input::{InputEvent, KeyEvent, MouseEvent};

/// Propagation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not being dispatched, or delivered by a widget's own direct routing.
    #[default]
    None,
    /// Travelling from the root toward the target.
    Capture,
    /// At the target.
    Target,
    /// Travelling from the target back toward the root.
    Bubble,
}

/// An input event under dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub input: InputEvent,
    pub phase: Phase,
    propagation_stopped: bool,
    immediate_stopped: bool,
    default_prevented: bool,
    pub target: Option<NodeId>,
    pub current_target: Option<NodeId>,
}

impl Event {
    pub fn new(input: impl Into<InputEvent>) -> Self {
        Self {
            input: input.into(),
            phase: Phase::None,
            propagation_stopped: false,
            immediate_stopped: false,
            default_prevented: false,
            target: None,
            current_target: None,
        }
    }

    pub fn key(&self) -> Option<&KeyEvent> {
        match &self.input {
            InputEvent::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn mouse(&self) -> Option<&MouseEvent> {
        match &self.input {
            InputEvent::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }

    /// Stop the event moving on to the next widget. Handlers still pending
    /// on the current widget run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stop all further processing, including the current widget's
    /// remaining handlers.
    pub fn stop_immediate(&mut self) {
        self.propagation_stopped = true;
        self.immediate_stopped = true;
    }

    /// Suppress the host's default reaction. Does not stop propagation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_immediate_stopped(&self) -> bool {
        self.immediate_stopped
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Clear all dispatch state so the event can be dispatched again.
    pub fn reset(&mut self) {
        self.phase = Phase::None;
        self.propagation_stopped = false;
        self.immediate_stopped = false;
        self.default_prevented = false;
        self.target = None;
        self.current_target = None;
    }
}

impl From<InputEvent> for Event {
    fn from(input: InputEvent) -> Self {
        Event::new(input)
    }
}
