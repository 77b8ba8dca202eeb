//! Platter storefront demo
//!
//! A food-delivery home screen wired together from platter widgets: a
//! rotating tagline, an offers carousel, a search box, filter controls,
//! header menus, a sign-out dialog and toasts.

pub mod action;
pub mod config;
pub mod input;
pub mod reducer;
pub mod state;
pub mod ui;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use input::handle_input;
pub use reducer::reducer;
pub use state::AppState;
pub use ui::StorefrontUi;
