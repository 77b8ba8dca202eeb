//! Host-side state container with a reducer
//!
//! Controlled widgets hand their changes to the host as actions; the host
//! applies them here and passes the resulting values back as props.

use std::marker::PhantomData;

use crate::Action;

/// A reducer function that applies an action to state
///
/// Returns `true` if the state changed and a re-render is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Observes actions around the reducer
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer ran
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that records every action through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMiddleware;

impl<A: Action> Middleware<A> for TracingMiddleware {
    fn before(&mut self, action: &A) {
        tracing::trace!(action = %action.name(), ?action, "Dispatching action");
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = %action.name(), state_changed, "Action processed");
    }
}

/// State plus reducer, with middleware around each dispatch
///
/// # Example
/// ```ignore
/// fn reducer(state: &mut AppState, action: AppAction) -> bool {
///     match action {
///         AppAction::VegOnlyChange(on) => {
///             state.veg_only = on;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(AppState::default(), reducer);
/// store.dispatch(AppAction::VegOnlyChange(true));
/// ```
pub struct Store<S, A: Action, M: Middleware<A> = TracingMiddleware> {
    state: S,
    reducer: Reducer<S, A>,
    middleware: M,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a store that logs dispatches through `tracing`
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self::with_middleware(state, reducer, TracingMiddleware)
    }
}

impl<S, A: Action, M: Middleware<A>> Store<S, A, M> {
    /// Create a store with custom middleware
    pub fn with_middleware(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
            _marker: PhantomData,
        }
    }

    /// Apply an action; returns `true` if the state changed
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestAction {
        Toggle,
        Noop,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Toggle => "Toggle",
                TestAction::Noop => "Noop",
            }
        }
    }

    fn reducer(state: &mut bool, action: TestAction) -> bool {
        match action {
            TestAction::Toggle => {
                *state = !*state;
                true
            }
            TestAction::Noop => false,
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(&'static str, bool)>,
    }

    impl Middleware<TestAction> for Recorder {
        fn before(&mut self, _action: &TestAction) {}

        fn after(&mut self, action: &TestAction, state_changed: bool) {
            self.seen.push((action.name(), state_changed));
        }
    }

    #[test]
    fn test_dispatch_reports_change() {
        let mut store = Store::new(false, reducer);
        assert!(store.dispatch(TestAction::Toggle));
        assert!(*store.state());
        assert!(!store.dispatch(TestAction::Noop));
    }

    #[test]
    fn test_middleware_sees_every_action() {
        let mut store = Store::with_middleware(false, reducer, Recorder::default());
        store.dispatch(TestAction::Toggle);
        store.dispatch(TestAction::Noop);

        assert_eq!(
            store.middleware().seen,
            vec![("Toggle", true), ("Noop", false)]
        );
    }
}
