//! Host-wide pointer-down listeners with scoped registration
//!
//! Widgets that dismiss on outside clicks need to see every pointer-down,
//! not just the ones routed to them. The host owns one [`PointerListeners`]
//! registry and calls [`PointerListeners::dispatch`] for each pointer-down
//! before routing the event to widgets. Registration hands back a
//! [`ListenerGuard`]; dropping the guard removes the listener, so a widget
//! that closes or goes away can never be called again.
//!
//! The registry is single-threaded (`Rc`), matching the UI loop it serves.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::layout::Position;
use tracing::trace;

type Listener = Rc<dyn Fn(Position)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Registry of listeners notified on every pointer-down
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct PointerListeners {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for PointerListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerListeners")
            .field("len", &self.len())
            .finish()
    }
}

impl PointerListeners {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every pointer-down
    ///
    /// The listener stays installed until the returned guard is dropped.
    pub fn register<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(Position) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Rc::new(listener)));
        trace!(listener = id, "Pointer listener registered");

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notify all listeners of a pointer-down at `position`
    ///
    /// Listeners are called in registration order. A listener may register
    /// or release listeners while being called; those changes apply to the
    /// next dispatch. Returns the number of listeners notified.
    pub fn dispatch(&self, position: Position) -> usize {
        let snapshot: Vec<Listener> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(position);
        }
        snapshot.len()
    }

    /// Number of installed listeners
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    /// Whether no listener is installed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a pointer listener installed; removes it on drop
#[must_use = "dropping the guard removes the listener"]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    /// Remove the listener now. Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // Registry may already be gone at host shutdown
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
            trace!(listener = self.id, "Pointer listener released");
        }
    }
}
