//! Key binding registry.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to
//! [`BindingAction`]s. Bindings are the host's *default reaction* to a key:
//! the app consults the registry only after dispatch, and only when no
//! handler called `prevent_default`.

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// BindingAction
// ---------------------------------------------------------------------------

/// Action to take when a key binding is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingAction {
    /// Quit the application.
    Quit,
    /// Move focus to the next focusable widget.
    FocusNext,
    /// Move focus to the previous focusable widget.
    FocusPrevious,
    /// A named action handed back to the host.
    Custom(String),
}

// ---------------------------------------------------------------------------
// KeyBinding
// ---------------------------------------------------------------------------

/// A single key binding: key + modifiers -> action, with a short label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub modifiers: Modifiers,
    pub action: BindingAction,
    pub description: String,
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings.
#[derive(Debug, Clone, Default)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), KeyBinding>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard bindings:
    /// - `Ctrl+C` -> Quit
    /// - `Tab` -> FocusNext
    /// - `BackTab` (Shift+Tab) -> FocusPrevious
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind_described(Key::Char('c'), Modifiers::CTRL, BindingAction::Quit, "Quit");
        registry.bind_described(Key::Tab, Modifiers::NONE, BindingAction::FocusNext, "Next");
        registry.bind_described(
            Key::BackTab,
            Modifiers::NONE,
            BindingAction::FocusPrevious,
            "Previous",
        );
        // Terminals report Shift+Tab either as BackTab or BackTab+Shift.
        registry.bind_described(
            Key::BackTab,
            Modifiers::SHIFT,
            BindingAction::FocusPrevious,
            "Previous",
        );
        registry
    }

    /// Register a binding, replacing any existing one for the same keys.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: BindingAction) {
        self.bind_described(key, modifiers, action, "");
    }

    /// Register a binding with a description.
    pub fn bind_described(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        action: BindingAction,
        description: &str,
    ) {
        self.bindings.insert(
            (key, modifiers),
            KeyBinding { key, modifiers, action, description: description.to_owned() },
        );
    }

    /// Remove a binding, returning its action.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<BindingAction> {
        self.bindings.remove(&(key, modifiers)).map(|b| b.action)
    }

    /// The action bound to an exact key + modifier match.
    pub fn resolve(&self, event: &KeyEvent) -> Option<&BindingAction> {
        self.bindings.get(&(event.code, event.modifiers)).map(|b| &b.action)
    }

    /// All bindings that carry a description, ordered by description.
    pub fn described(&self) -> Vec<&KeyBinding> {
        let mut out: Vec<_> = self.bindings.values().filter(|b| !b.description.is_empty()).collect();
        out.sort_by(|a, b| a.description.cmp(&b.description));
        out
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
