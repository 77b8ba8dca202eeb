//! Ordered fan-out of one widget change to optional observers
//!
//! Widgets expose observers as optional action constructors
//! (`Option<fn(T) -> A>`). A single user change may notify several of them;
//! [`FanOut`] calls them in the order they are listed, skips the absent
//! ones, and collects one action per present observer. Because each
//! observer only builds its own action, one observer can never suppress
//! another.
//!
//! # Example
//!
//! ```ignore
//! let actions = FanOut::new()
//!     .notify(props.on_change, change)     // low-level, first
//!     .notify(props.on_search, query)      // semantic, second
//!     .into_actions();
//! ```

/// Actions collected from a change, in observer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanOut<A> {
    actions: Vec<A>,
}

impl<A> Default for FanOut<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> FanOut<A> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Notify `observer` with `value`, if the observer is present
    pub fn notify<T>(mut self, observer: Option<fn(T) -> A>, value: T) -> Self {
        if let Some(observer) = observer {
            self.actions.push(observer(value));
        }
        self
    }

    /// Notify an observer that takes no value, if present
    pub fn signal(mut self, observer: Option<fn() -> A>) -> Self {
        if let Some(observer) = observer {
            self.actions.push(observer());
        }
        self
    }

    /// Number of observers notified so far
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Collected actions, in notification order
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

impl<A> IntoIterator for FanOut<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Raw(u8),
        Semantic(String),
        Closed,
    }

    fn raw(v: u8) -> TestAction {
        TestAction::Raw(v)
    }

    #[test]
    fn test_order_follows_notify_calls() {
        let actions = FanOut::new()
            .notify(Some(raw as fn(u8) -> TestAction), 1)
            .notify(Some(TestAction::Semantic as fn(String) -> TestAction), "x".into())
            .into_actions();

        assert_eq!(
            actions,
            vec![TestAction::Raw(1), TestAction::Semantic("x".into())]
        );
    }

    #[test]
    fn test_absent_observer_does_not_affect_other() {
        let actions = FanOut::new()
            .notify(None::<fn(u8) -> TestAction>, 1)
            .notify(Some(TestAction::Semantic as fn(String) -> TestAction), "x".into())
            .into_actions();
        assert_eq!(actions, vec![TestAction::Semantic("x".into())]);

        let actions = FanOut::new()
            .notify(Some(raw as fn(u8) -> TestAction), 2)
            .notify(None::<fn(String) -> TestAction>, "x".into())
            .into_actions();
        assert_eq!(actions, vec![TestAction::Raw(2)]);
    }

    #[test]
    fn test_signal() {
        let fan = FanOut::new().signal(Some(|| TestAction::Closed));
        assert_eq!(fan.len(), 1);
        let fan: FanOut<TestAction> = FanOut::new().signal(None);
        assert!(fan.is_empty());
    }
}
