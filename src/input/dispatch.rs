//! Event targets and an in-process key event dispatcher
//!
//! `EventTarget` is the seam the capture filter installs against. `Document`
//! is a small model of DOM dispatch over a node tree: capture listeners run
//! root-first down to the target's parent, then the target's own listeners
//! (capture before bubble), then bubble listeners from the parent back up to
//! the root. Listeners on a node run in registration order.

use super::event::{KeyEvent, KeyEventKind};

/// Dispatch phase a listener is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Capture,
    Bubble,
}

const CAPTURE_ONLY: &[Phase] = &[Phase::Capture];
const AT_TARGET: &[Phase] = &[Phase::Capture, Phase::Bubble];
const BUBBLE_ONLY: &[Phase] = &[Phase::Bubble];

/// Opaque handle returned by listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Propagation state a listener can act on while the event is in flight
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchControl {
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
    default_prevented: bool,
}

impl DispatchControl {
    /// Finish the current node, then stop
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stop now: no further listener on any node runs
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }

    /// Suppress the host's default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A registered key listener
pub type KeyListener = Box<dyn FnMut(&KeyEvent, &mut DispatchControl)>;

/// Anything key listeners can be attached to
pub trait EventTarget {
    /// Register a listener and return a handle for later removal
    fn add_key_listener(
        &mut self,
        kind: KeyEventKind,
        phase: Phase,
        listener: KeyListener,
    ) -> ListenerId;

    /// Remove a listener; returns false if it was not registered here
    fn remove_key_listener(&mut self, id: ListenerId) -> bool;
}

/// Index of a node inside a `Document`
pub type NodeId = usize;

struct Registered {
    id: ListenerId,
    kind: KeyEventKind,
    phase: Phase,
    callback: KeyListener,
}

struct Node {
    parent: Option<NodeId>,
    listeners: Vec<Registered>,
}

/// What happened to a dispatched event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of listeners that ran
    pub invoked: usize,
    pub propagation_stopped: bool,
    pub default_prevented: bool,
}

/// In-process document: a node tree rooted at `Document::ROOT`
pub struct Document {
    nodes: Vec<Node>,
    next_id: u64,
}

impl Document {
    /// The document node itself
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                listeners: Vec::new(),
            }],
            next_id: 0,
        }
    }

    /// Append a child node under `parent`.
    ///
    /// Unknown parents attach to the root.
    pub fn create_element(&mut self, parent: NodeId) -> NodeId {
        let parent = if parent < self.nodes.len() {
            parent
        } else {
            Self::ROOT
        };
        self.nodes.push(Node {
            parent: Some(parent),
            listeners: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Register a listener on a specific node
    pub fn add_listener_at(
        &mut self,
        node: NodeId,
        kind: KeyEventKind,
        phase: Phase,
        listener: KeyListener,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let node = if node < self.nodes.len() {
            node
        } else {
            Self::ROOT
        };
        self.nodes[node].listeners.push(Registered {
            id,
            kind,
            phase,
            callback: listener,
        });
        id
    }

    /// Total listeners registered across all nodes
    pub fn listener_count(&self) -> usize {
        self.nodes.iter().map(|n| n.listeners.len()).sum()
    }

    /// Dispatch an event at `target` through capture, target and bubble phases
    pub fn dispatch(&mut self, target: NodeId, event: &KeyEvent) -> DispatchOutcome {
        let target = if target < self.nodes.len() {
            target
        } else {
            Self::ROOT
        };

        let mut path = vec![target];
        let mut cursor = self.nodes[target].parent;
        while let Some(node) = cursor {
            path.push(node);
            cursor = self.nodes[node].parent;
        }
        path.reverse();

        let mut control = DispatchControl::default();
        let mut invoked = 0;

        let ancestors = &path[..path.len() - 1];
        let mut steps: Vec<(NodeId, &'static [Phase])> = Vec::with_capacity(path.len() * 2);
        for &node in ancestors {
            steps.push((node, CAPTURE_ONLY));
        }
        steps.push((target, AT_TARGET));
        for &node in ancestors.iter().rev() {
            steps.push((node, BUBBLE_ONLY));
        }

        for (node, phases) in steps {
            for &phase in phases {
                invoked += self.invoke(node, phase, event, &mut control);
                if control.is_propagation_stopped() {
                    break;
                }
            }
            if control.is_propagation_stopped() {
                break;
            }
        }

        DispatchOutcome {
            invoked,
            propagation_stopped: control.is_propagation_stopped(),
            default_prevented: control.is_default_prevented(),
        }
    }

    fn invoke(
        &mut self,
        node: NodeId,
        phase: Phase,
        event: &KeyEvent,
        control: &mut DispatchControl,
    ) -> usize {
        let mut invoked = 0;
        for registered in self.nodes[node].listeners.iter_mut() {
            if registered.kind != event.kind || registered.phase != phase {
                continue;
            }
            (registered.callback)(event, control);
            invoked += 1;
            if control.is_immediate_propagation_stopped() {
                break;
            }
        }
        invoked
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTarget for Document {
    fn add_key_listener(
        &mut self,
        kind: KeyEventKind,
        phase: Phase,
        listener: KeyListener,
    ) -> ListenerId {
        self.add_listener_at(Self::ROOT, kind, phase, listener)
    }

    fn remove_key_listener(&mut self, id: ListenerId) -> bool {
        for node in &mut self.nodes {
            if let Some(pos) = node.listeners.iter().position(|r| r.id == id) {
                node.listeners.remove(pos);
                return true;
            }
        }
        false
    }
}
