//! Widget lifecycle journal.
//!
//! The tree records every mount and unmount into a [`LifecycleLog`] in the
//! order the callbacks ran. Hosts and tests drain it to observe lifecycle
//! ordering without instrumenting widgets.

use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// A lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// `on_mount` ran for this node.
    Mount { node: NodeId, widget_type: String },
    /// `on_unmount` ran for this node.
    Unmount { node: NodeId, widget_type: String },
}

impl LifecycleEvent {
    pub fn node(&self) -> NodeId {
        match self {
            LifecycleEvent::Mount { node, .. } | LifecycleEvent::Unmount { node, .. } => *node,
        }
    }
}

// ---------------------------------------------------------------------------
// LifecycleLog
// ---------------------------------------------------------------------------

/// Ordered journal of lifecycle events awaiting a drain.
///
/// The log does not track mount state itself; the tree only records a
/// transition after flipping the node's `mounted` flag, so duplicates never
/// reach it.
#[derive(Debug, Default)]
pub struct LifecycleLog {
    pending: Vec<LifecycleEvent>,
}

impl LifecycleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_mount(&mut self, node: NodeId, widget_type: &str) {
        self.pending.push(LifecycleEvent::Mount { node, widget_type: widget_type.to_owned() });
    }

    pub fn record_unmount(&mut self, node: NodeId, widget_type: &str) {
        self.pending.push(LifecycleEvent::Unmount { node, widget_type: widget_type.to_owned() });
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| sm.insert(())).collect()
    }

    #[test]
    fn records_in_order_and_drains() {
        let id = ids(1)[0];
        let mut log = LifecycleLog::new();
        log.record_mount(id, "Static");
        log.record_unmount(id, "Static");
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.drain(),
            vec![
                LifecycleEvent::Mount { node: id, widget_type: "Static".into() },
                LifecycleEvent::Unmount { node: id, widget_type: "Static".into() },
            ]
        );
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }

    #[test]
    fn event_node_accessor() {
        let id = ids(1)[0];
        let ev = LifecycleEvent::Unmount { node: id, widget_type: "X".into() };
        assert_eq!(ev.node(), id);
    }
}
