//! Instrumented widget for unit tests.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{Event, Phase};

use super::context::WidgetContext;
use super::traits::Widget;

/// Shared journal written by [`Recorder`] widgets.
#[derive(Debug, Clone, Default)]
pub struct RecorderLog(Rc<RefCell<Vec<String>>>);

impl RecorderLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Records lifecycle and event callbacks as `"<what> <name>"`.
pub struct Recorder {
    name: String,
    log: RecorderLog,
    children: Vec<Recorder>,
    focusable: bool,
    direct: bool,
    stop_in: Option<Phase>,
    stop_immediate: bool,
    remove_on_target: bool,
}

impl Recorder {
    pub fn new(name: &str, log: &RecorderLog) -> Self {
        Self {
            name: name.to_owned(),
            log: log.clone(),
            children: Vec::new(),
            focusable: false,
            direct: false,
            stop_in: None,
            stop_immediate: false,
            remove_on_target: false,
        }
    }

    pub fn with_children(mut self, children: Vec<Recorder>) -> Self {
        self.children = children;
        self
    }

    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }

    pub fn direct(mut self) -> Self {
        self.direct = true;
        self
    }

    /// Stop propagation when an event reaches this recorder in `phase`.
    pub fn stop_in(mut self, phase: Phase) -> Self {
        self.stop_in = Some(phase);
        self
    }

    /// Use `stop_immediate` instead of `stop_propagation`.
    pub fn immediately(mut self) -> Self {
        self.stop_immediate = true;
        self
    }

    /// Remove its own node from the tree when it is the event target.
    pub fn removes_self(mut self) -> Self {
        self.remove_on_target = true;
        self
    }

    fn record(&self, event: &mut Event) {
        let phase = match event.phase {
            Phase::None => "none",
            Phase::Capture => "capture",
            Phase::Target => "target",
            Phase::Bubble => "bubble",
        };
        self.log.push(format!("{phase} {}", self.name));
        if self.stop_in == Some(event.phase) {
            if self.stop_immediate {
                event.stop_immediate();
            } else {
                event.stop_propagation();
            }
        }
    }
}

impl Widget for Recorder {
    fn widget_type(&self) -> &str {
        "Recorder"
    }

    fn can_focus(&self) -> bool {
        self.focusable
    }

    fn compose(&mut self) -> Vec<Box<dyn Widget>> {
        std::mem::take(&mut self.children)
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn Widget>)
            .collect()
    }

    fn on_mount(&mut self, _ctx: &mut WidgetContext<'_>) {
        self.log.push(format!("mount {}", self.name));
    }

    fn on_unmount(&mut self, _ctx: &mut WidgetContext<'_>) {
        self.log.push(format!("unmount {}", self.name));
    }

    fn on_capture(&mut self, _ctx: &mut WidgetContext<'_>, event: &mut Event) {
        self.record(event);
    }

    fn on_event(&mut self, ctx: &mut WidgetContext<'_>, event: &mut Event) {
        self.record(event);
        if self.remove_on_target && event.phase == Phase::Target {
            let node = ctx.node();
            let _ = ctx.tree_mut().remove(node);
        }
    }

    fn direct_dispatch(&self) -> bool {
        self.direct
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
