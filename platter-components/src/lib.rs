//! Storefront widgets built on platter-core
//!
//! Each widget implements `Component<A>` and reports changes by building
//! actions from the observers passed through its props.
//!
//! # Components
//!
//! - [`TaglineRotator`] - hero tagline cycling on a timer
//! - [`Carousel`] - paged slides with arrows, dots and optional auto-play
//! - [`Dropdown`] - menu that closes on outside clicks
//! - [`Switch`] - on/off toggle, controlled or uncontrolled
//! - [`SearchInput`] - query input, controlled or uncontrolled
//! - [`Dialog`] - modal over a dimmed frame, visibility owned by the host
//! - [`Toast`] - notification card with an optional close glyph
//!
//! # Example
//!
//! ```ignore
//! use platter_components::{SearchInput, SearchInputProps, SEARCH_PLACEHOLDER};
//!
//! let mut search = SearchInput::controlled("");
//! search.render(frame, area, SearchInputProps {
//!     value: Some(&state.query),
//!     placeholder: SEARCH_PLACEHOLDER,
//!     is_focused: state.focus == Focus::Search,
//!     show_border: true,
//!     on_change: None,
//!     on_search: Some(Action::Search),
//! });
//! ```

mod carousel;
mod dialog;
mod dropdown;
mod overlay;
mod search_input;
mod switch;
mod tagline;
mod toast;

pub use carousel::{Carousel, CarouselProps, Slide, DEFAULT_AUTOPLAY};
pub use dialog::{Dialog, DialogProps};
pub use dropdown::{Align, Dropdown, DropdownProps};
pub use overlay::{centered_rect, render_overlay, OverlayStyle};
pub use search_input::{SearchInput, SearchInputProps, SEARCH_PLACEHOLDER};
pub use switch::{Switch, SwitchProps};
pub use tagline::{TaglineProps, TaglineRotator, DEFAULT_ROTATION, DEFAULT_TAGLINES};
pub use toast::{toast_area, Toast, ToastProps, ToastVariant};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        centered_rect, render_overlay, toast_area, Align, Carousel, CarouselProps, Dialog,
        DialogProps, Dropdown, DropdownProps, OverlayStyle, SearchInput, SearchInputProps,
        Slide, Switch, SwitchProps, TaglineProps, TaglineRotator, Toast, ToastProps,
        ToastVariant,
    };
}
