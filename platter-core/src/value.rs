//! Controlled and uncontrolled widget values
//!
//! A widget value is either owned by the host (controlled) or by the widget
//! itself (uncontrolled). The choice is made once, at construction, through
//! [`ValueSource`]. Either way the widget keeps a local mirror that it
//! renders and updates synchronously on user input; a controlled widget
//! additionally overwrites the mirror with whatever the host supplies, so
//! the host is always the last writer.

use tracing::trace;

use crate::event::EventKind;

/// Who owns a widget's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The host owns the value and passes it back on every render
    Controlled,
    /// The widget owns the value
    Uncontrolled,
}

/// How a widget value is sourced, chosen at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource<T> {
    /// Host-owned, starting from this value
    Controlled(T),
    /// Widget-owned, starting from this value
    Uncontrolled(T),
}

/// A widget's local mirror of its value plus its ownership tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlledValue<T> {
    ownership: Ownership,
    mirror: T,
}

impl<T: Default> Default for ControlledValue<T> {
    fn default() -> Self {
        Self::new(ValueSource::Uncontrolled(T::default()))
    }
}

impl<T> ControlledValue<T> {
    /// Resolve ownership from a source
    pub fn new(source: ValueSource<T>) -> Self {
        match source {
            ValueSource::Controlled(value) => Self {
                ownership: Ownership::Controlled,
                mirror: value,
            },
            ValueSource::Uncontrolled(value) => Self {
                ownership: Ownership::Uncontrolled,
                mirror: value,
            },
        }
    }

    /// Host-owned value starting at `value`
    pub fn controlled(value: T) -> Self {
        Self::new(ValueSource::Controlled(value))
    }

    /// Widget-owned value starting at `initial`
    pub fn uncontrolled(initial: T) -> Self {
        Self::new(ValueSource::Uncontrolled(initial))
    }

    /// Value to render
    pub fn get(&self) -> &T {
        &self.mirror
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn is_controlled(&self) -> bool {
        self.ownership == Ownership::Controlled
    }

    /// Record a user-driven change and return the previous value
    pub fn accept(&mut self, next: T) -> T {
        std::mem::replace(&mut self.mirror, next)
    }
}

impl<T: Clone + PartialEq> ControlledValue<T> {
    /// Apply the value the host supplies for this render or event
    ///
    /// Controlled values adopt `external` when present; uncontrolled values
    /// ignore it. Returns `true` if the mirror changed.
    pub fn sync(&mut self, external: Option<&T>) -> bool {
        let Some(external) = external else {
            return false;
        };
        match self.ownership {
            Ownership::Controlled if *external != self.mirror => {
                self.mirror = external.clone();
                true
            }
            Ownership::Controlled => false,
            Ownership::Uncontrolled => {
                trace!("Ignoring host value for uncontrolled widget");
                false
            }
        }
    }
}

/// Low-level change notification passed to `on_change` observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent<T> {
    /// Value before the change
    pub previous: T,
    /// Value after the change
    pub value: T,
    /// Raw event that caused the change
    pub trigger: EventKind,
}
