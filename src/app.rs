//! App root: owns the widget tree, the frame buffer and the key bindings.
//!
//! [`App`] is the host-facing entry point. A driver feeds it decoded input
//! through [`App::handle_input`], calls [`App::render`] once per frame and
//! writes out the buffer (or the [`App::frame_diff`] against the previous
//! frame). Terminal I/O itself is left to the host.

use tracing::{debug, trace};

use crate::dom::{NodeId, WidgetTree};
use crate::event::{BindingAction, Event, InputEvent, KeyBindingRegistry};
use crate::geometry::Rect;
use crate::render::{Buffer, CellUpdate};
use crate::widget::{LifecycleEvent, Widget};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Optional window/app title.
    pub title: Option<String>,
    /// Initial size in columns and rows.
    pub width: u16,
    pub height: u16,
    /// Focus the first focusable widget once the tree is mounted.
    pub focus_on_mount: bool,
    /// Track the hovered widget on mouse-move.
    pub mouse_hover: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { title: None, width: 80, height: 24, focus_on_mount: true, mouse_hover: true }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the initial size (builder).
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_focus_on_mount(mut self, enabled: bool) -> Self {
        self.focus_on_mount = enabled;
        self
    }

    pub fn with_mouse_hover(mut self, enabled: bool) -> Self {
        self.mouse_hover = enabled;
        self
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application struct.
pub struct App {
    tree: WidgetTree,
    buffer: Buffer,
    previous: Buffer,
    /// Key binding registry, consulted after dispatch.
    pub bindings: KeyBindingRegistry,
    config: AppConfig,
    running: bool,
    actions: Vec<String>,
    /// Lifecycle events drained by the most recent [`App::render`].
    lifecycle: Vec<LifecycleEvent>,
}

impl App {
    /// Mount `root` and lay it out at the configured size.
    pub fn new(root: impl Widget + 'static, config: AppConfig) -> Self {
        let mut tree = WidgetTree::new(Box::new(root));
        tree.set_hover_tracking(config.mouse_hover);
        tree.mount();
        tree.layout(Rect::new(0, 0, i32::from(config.width), i32::from(config.height)));
        if config.focus_on_mount {
            tree.focus_next();
        }
        Self {
            tree,
            buffer: Buffer::new(config.width, config.height),
            previous: Buffer::new(config.width, config.height),
            bindings: KeyBindingRegistry::with_defaults(),
            config,
            running: true,
            actions: Vec::new(),
            lifecycle: Vec::new(),
        }
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn size(&self) -> (u16, u16) {
        (self.buffer.width(), self.buffer.height())
    }

    /// Dispatch one decoded input event.
    ///
    /// Resize events resize the frame and relayout before dispatch. After
    /// dispatch a requested relayout is performed, then key bindings run as
    /// the default reaction unless a handler prevented it. Returns the
    /// dispatched event so callers can inspect its flags.
    pub fn handle_input(&mut self, input: InputEvent) -> Event {
        if let InputEvent::Resize { width, height } = input {
            self.resize(width, height);
        }

        let mut event = Event::new(input);
        self.tree.dispatch(&mut event);
        if self.tree.layout_requested() {
            self.tree.relayout();
        }

        if let InputEvent::Key(key) = &event.input {
            if !event.is_default_prevented() {
                if let Some(action) = self.bindings.resolve(key).cloned() {
                    self.run_action(action);
                }
            }
        }
        event
    }

    fn run_action(&mut self, action: BindingAction) {
        debug!(?action, "binding action");
        match action {
            BindingAction::Quit => self.running = false,
            BindingAction::FocusNext => {
                self.tree.focus_next();
            }
            BindingAction::FocusPrevious => {
                self.tree.focus_prev();
            }
            BindingAction::Custom(name) => self.actions.push(name),
        }
    }

    /// Resize the frame and relayout the tree.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == self.size() {
            return;
        }
        self.buffer.resize(width, height);
        self.previous = Buffer::new(width, height);
        self.tree.layout(Rect::new(0, 0, i32::from(width), i32::from(height)));
    }

    /// Repaint the frame if anything is dirty. Returns whether it painted.
    ///
    /// Every call drains the tree's lifecycle journal; the drained events
    /// stay readable through [`App::lifecycle_events`] until the next call.
    pub fn render(&mut self) -> bool {
        self.lifecycle = self.tree.drain_lifecycle();
        for event in &self.lifecycle {
            trace!(?event, "lifecycle");
        }
        if self.tree.layout_requested() {
            self.tree.relayout();
        }
        if !self.tree.needs_render() {
            return false;
        }
        self.previous.clone_from(&self.buffer);
        self.buffer.clear();
        let area = self.buffer.area();
        self.tree.render(&mut self.buffer, area);
        true
    }

    /// Lifecycle events drained by the last [`App::render`] call.
    pub fn lifecycle_events(&self) -> &[LifecycleEvent] {
        &self.lifecycle
    }

    /// Cells that changed in the last rendered frame.
    pub fn frame_diff(&self) -> Vec<CellUpdate> {
        self.buffer.diff(&self.previous)
    }

    /// Take the names of custom binding actions triggered since the last call.
    pub fn take_actions(&mut self) -> Vec<String> {
        std::mem::take(&mut self.actions)
    }

    pub fn should_quit(&self) -> bool {
        !self.running
    }

    pub fn request_quit(&mut self) {
        self.running = false;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
