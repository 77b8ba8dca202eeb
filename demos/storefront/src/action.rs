//! Storefront actions
//!
//! Naming follows `<Area><Verb>`: the prefix says which part of the screen
//! the action belongs to.

/// Everything that can happen in the storefront
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Timers =====
    /// Tagline rotation period elapsed
    TaglineTick,
    /// Carousel auto-play period elapsed
    CarouselTick,

    // ===== Filters =====
    /// Search query changed
    SearchQuery(String),
    /// Eco-friendly switch toggled
    FilterEcoOnly(bool),
    /// Sort menu item chosen
    SortSelect(usize),

    // ===== Account =====
    /// Account menu item chosen
    AccountSelect(usize),
    /// Sign-out dialog asked to open or close
    SignOutOpenChange(bool),
    /// Sign-out confirmed from the dialog
    SignOutConfirm,

    // ===== UI =====
    /// Toast close glyph clicked
    ToastDismiss,
    /// Move keyboard focus to the next widget
    FocusNext,
    /// Exit the application
    Quit,
}

impl platter::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::TaglineTick => "TaglineTick",
            Action::CarouselTick => "CarouselTick",
            Action::SearchQuery(_) => "SearchQuery",
            Action::FilterEcoOnly(_) => "FilterEcoOnly",
            Action::SortSelect(_) => "SortSelect",
            Action::AccountSelect(_) => "AccountSelect",
            Action::SignOutOpenChange(_) => "SignOutOpenChange",
            Action::SignOutConfirm => "SignOutConfirm",
            Action::ToastDismiss => "ToastDismiss",
            Action::FocusNext => "FocusNext",
            Action::Quit => "Quit",
        }
    }
}
