//! Interaction primitives for storefront widgets
//!
//! Every interactive widget in a storefront screen is one of a handful of
//! behaviours: a timed rotation, a menu that closes when you click
//! elsewhere, a value that may be owned by the host or by the widget, and
//! content that is shown or dismissed. This crate provides those
//! behaviours once, as small primitives with explicit lifetimes.
//!
//! # Core Concepts
//!
//! - **Component**: widgets render from props and return actions
//! - **Cycle** + **Interval**: looping index advanced by a scoped timer
//! - **PointerListeners**: host-wide pointer-down listeners held by guards
//! - **ControlledValue**: mirror value with controlled/uncontrolled ownership
//! - **FanOut**: ordered notification of optional observers
//! - **Store**: host state with a reducer, logged through `tracing`
//!
//! # Host Loop
//!
//! ```ignore
//! use platter_core::prelude::*;
//!
//! let listeners = PointerListeners::new();
//! loop {
//!     tokio::select! {
//!         Some(raw) = event_rx.recv() => {
//!             let event = process_raw_event(raw);
//!             // Outside-dismissal listeners see every pointer-down first
//!             if let Some(position) = event.pointer_down() {
//!                 listeners.dispatch(position);
//!             }
//!             for action in ui.map_event(&event, store.state()) {
//!                 let _ = action_tx.send(action);
//!             }
//!         }
//!         Some(action) = action_rx.recv() => {
//!             store.dispatch(action);
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod cycle;
pub mod error;
pub mod event;
pub mod host;
pub mod interval;
pub mod observer;
pub mod pointer;
pub mod store;
pub mod testing;
pub mod value;

pub use action::Action;
pub use component::Component;
pub use cycle::Cycle;
pub use error::{Error, Result};
pub use event::EventKind;
pub use host::{process_raw_event, spawn_event_poller, RawEvent};
pub use interval::Interval;
pub use observer::FanOut;
pub use pointer::{ListenerGuard, PointerListeners};
pub use store::{Middleware, Reducer, Store, TracingMiddleware};
pub use value::{ChangeEvent, ControlledValue, Ownership, ValueSource};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

pub use testing::{
    buffer_to_string_plain, char_key, click, key, key_event, mouse_down, type_text,
    RenderHarness,
};

#[cfg(feature = "testing-time")]
pub use tokio::time::{advance as advance_time, pause as pause_time, resume as resume_time};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::cycle::Cycle;
    pub use crate::error::{Error, Result};
    pub use crate::event::EventKind;
    pub use crate::host::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::interval::Interval;
    pub use crate::observer::FanOut;
    pub use crate::pointer::{ListenerGuard, PointerListeners};
    pub use crate::store::{Middleware, Reducer, Store, TracingMiddleware};
    pub use crate::value::{ChangeEvent, ControlledValue, Ownership, ValueSource};

    pub use ratatui::{
        layout::{Position, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
