//! Capture / target / bubble event dispatch.
//!
//! Target resolution:
//!
//! - mouse events go to the mouse-capture holder if there is one, otherwise
//!   to the deepest top-most node under the pointer, otherwise the root;
//! - key events go to the focused node, or the root;
//! - everything else goes to the root.
//!
//! The event then travels root → target (capture), is delivered at the
//! target, and travels back target → root (bubble). On each node the
//! widget's own handler runs before attached listeners. A node that opts
//! into direct dispatch ends the path: it becomes the target and hands the
//! event to its own subtree children-first.

use tracing::{trace, warn};

use crate::event::{Event, InputEvent, MouseAction, Phase};
use crate::widget::context::WidgetContext;

use super::node::NodeId;
use super::tree::WidgetTree;

impl WidgetTree {
    /// Dispatch `event` through the tree. Returns the node that acted as
    /// target, or `None` if the call was rejected as re-entrant.
    ///
    /// Propagation flags set by handlers stay readable on `event` after the
    /// call; phase and target fields are cleared.
    pub fn dispatch(&mut self, event: &mut Event) -> Option<NodeId> {
        if self.dispatching {
            warn!(input = event.input.name(), "re-entrant dispatch ignored");
            return None;
        }
        self.dispatching = true;

        let resolved = self.resolve_target(&event.input);
        if let InputEvent::Mouse(m) = &event.input {
            if m.action == MouseAction::Move && self.hover_tracking {
                let hovered = self.find_widget_at(m.x, m.y);
                self.set_hover(hovered);
            }
        }

        let mut path = self.ancestors(resolved);
        path.reverse();
        path.push(resolved);
        let direct = path
            .iter()
            .position(|&n| self.widget(n).is_some_and(|w| w.direct_dispatch()));
        if let Some(i) = direct {
            path.truncate(i + 1);
        }
        let Some(target) = path.pop() else {
            self.dispatching = false;
            return None;
        };
        trace!(input = event.input.name(), ?target, depth = path.len(), "dispatch");

        event.target = Some(target);
        self.propagate(&path, target, direct.is_some(), event);

        event.phase = Phase::None;
        event.target = None;
        event.current_target = None;
        self.dispatching = false;
        Some(target)
    }

    fn resolve_target(&mut self, input: &InputEvent) -> NodeId {
        match input {
            InputEvent::Mouse(m) => {
                if let Some(holder) = self.ui.mouse_capture {
                    if self.contains(holder) {
                        return holder;
                    }
                    self.ui.mouse_capture = None;
                }
                self.find_widget_at(m.x, m.y).unwrap_or(self.root())
            }
            InputEvent::Key(_) => match self.ui.focused {
                Some(f) if self.contains(f) => f,
                Some(_) => {
                    self.ui.focused = None;
                    self.root()
                }
                None => self.root(),
            },
            _ => self.root(),
        }
    }

    fn propagate(&mut self, ancestors: &[NodeId], target: NodeId, direct: bool, event: &mut Event) {
        for &node in ancestors {
            self.deliver(node, Phase::Capture, event);
            if event.is_propagation_stopped() {
                return;
            }
        }

        if direct {
            self.deliver_direct(target, event);
        } else {
            self.deliver(target, Phase::Target, event);
        }
        if event.is_propagation_stopped() {
            return;
        }

        for &node in ancestors.iter().rev() {
            self.deliver(node, Phase::Bubble, event);
            if event.is_propagation_stopped() {
                return;
            }
        }
    }

    /// Run the widget handler, then the listeners for `phase`, on one node.
    fn deliver(&mut self, node: NodeId, phase: Phase, event: &mut Event) {
        if !self.contains(node) {
            return;
        }
        event.phase = phase;
        event.current_target = Some(node);
        self.with_widget(node, |widget, ctx| match phase {
            Phase::Capture => widget.on_capture(ctx, event),
            _ => widget.on_event(ctx, event),
        });
        if !event.is_immediate_stopped() {
            self.run_listeners(node, phase == Phase::Capture, event);
        }
    }

    /// Children in reverse paint order first (for mouse events, only those
    /// under the pointer), then the node itself, all with `Phase::None`.
    fn deliver_direct(&mut self, node: NodeId, event: &mut Event) {
        let point = event.mouse().map(|m| (m.x, m.y));
        let children: Vec<NodeId> = self
            .paint_order(node)
            .into_iter()
            .rev()
            .filter(|&child| {
                self.get(child).is_some_and(|d| {
                    d.visible && point.is_none_or(|(x, y)| d.rect.contains(x, y))
                })
            })
            .collect();
        for child in children {
            self.deliver_direct(child, event);
            if event.is_propagation_stopped() {
                return;
            }
        }
        self.deliver(node, Phase::None, event);
    }

    fn run_listeners(&mut self, node: NodeId, capture: bool, event: &mut Event) {
        let Some(mut listeners) = self.listeners.get_mut(node).map(std::mem::take) else {
            return;
        };
        for listener in listeners.iter_mut().filter(|l| l.capture == capture) {
            if event.is_immediate_stopped() {
                break;
            }
            let mut ctx = WidgetContext::new(self, node);
            (listener.handler)(&mut ctx, event);
        }
        if let Some(slot) = self.listeners.get_mut(node) {
            let added = std::mem::replace(slot, listeners);
            slot.extend(added);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
