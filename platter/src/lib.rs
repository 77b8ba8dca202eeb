//! platter: interaction primitives and widgets for terminal storefronts
//!
//! A storefront screen is mostly a handful of stateful behaviours: a
//! tagline that rotates on a timer, a menu that closes when you click
//! elsewhere, inputs whose value may belong to the host or to the widget,
//! and dialogs or toasts that are shown and dismissed. `platter` provides
//! those behaviours as primitives (`platter-core`) and as ready widgets
//! (`platter-components`).
//!
//! # Example
//! ```ignore
//! use platter::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     TaglineTick,
//!     Search(String),
//! }
//!
//! impl Action for AppAction {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             AppAction::TaglineTick => "TaglineTick",
//!             AppAction::Search(_) => "Search",
//!         }
//!     }
//! }
//!
//! let mut tagline = TaglineRotator::storefront();
//! tagline.activate(action_tx.clone(), || AppAction::TaglineTick)?;
//! ```

// Re-export everything from core and components
pub use platter_components::*;
pub use platter_core::*;

/// Prelude for convenient imports
pub mod prelude {
    // Primitives
    pub use platter_core::{
        Action, ChangeEvent, Component, ControlledValue, Cycle, Error, EventKind, FanOut,
        Interval, ListenerGuard, Ownership, PointerListeners, Result, ValueSource,
    };

    // Host loop
    pub use platter_core::{
        process_raw_event, spawn_event_poller, Middleware, RawEvent, Reducer, Store,
        TracingMiddleware,
    };

    // Widgets
    pub use platter_components::prelude::*;

    // Ratatui re-exports
    pub use platter_core::{Color, Frame, Line, Modifier, Position, Rect, Span, Style, Text};
}
