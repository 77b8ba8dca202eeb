//! Reducer - (state, action) -> changed
//!
//! Widgets never touch `AppState`; they report what the user did and the
//! reducer decides what the host keeps. Controlled widgets then read the
//! new values back through their props on the next render.

use crate::action::Action;
use crate::state::{AppState, Notice, SortKey, ACCOUNT_ITEMS, SIGN_OUT_INDEX};

/// Apply an action to the storefront state
///
/// # Returns
/// `true` if state changed and the screen should re-render
pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        // ===== Timers =====
        // Ticks drive widget-local cycles and are routed by the main loop
        Action::TaglineTick | Action::CarouselTick => false,

        // ===== Filters =====
        Action::SearchQuery(query) => {
            if state.query == query {
                return false;
            }
            state.query = query;
            true
        }

        Action::FilterEcoOnly(on) => {
            if state.eco_only == on {
                return false;
            }
            state.eco_only = on;
            true
        }

        Action::SortSelect(index) => {
            let sort = SortKey::from_index(index);
            if state.sort == sort {
                return false;
            }
            state.sort = sort;
            true
        }

        // ===== Account =====
        Action::AccountSelect(index) => {
            let Some(item) = ACCOUNT_ITEMS.get(index) else {
                return false;
            };
            if !state.signed_in {
                state.toast = Some(Notice::error(
                    "Not signed in",
                    format!("Sign in to open {}", item.to_lowercase()),
                ));
            } else if index == SIGN_OUT_INDEX {
                state.sign_out_open = true;
            } else {
                state.toast = Some(Notice::info(*item).with_description("Coming soon"));
            }
            true
        }

        Action::SignOutOpenChange(open) => {
            if state.sign_out_open == open {
                return false;
            }
            state.sign_out_open = open;
            true
        }

        Action::SignOutConfirm => {
            if !state.sign_out_open {
                return false;
            }
            state.sign_out_open = false;
            state.signed_in = false;
            state.toast = Some(Notice::info("Signed out").with_description("See you soon!"));
            true
        }

        // ===== UI =====
        Action::ToastDismiss => state.toast.take().is_some(),

        Action::FocusNext => {
            state.focus = state.focus.next();
            true
        }

        // Quit is handled in the main loop
        Action::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use platter::ToastVariant;

    #[test]
    fn test_search_query_replaces_value() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::SearchQuery("pizza".into())));
        assert_eq!(state.query, "pizza");

        // Same value again is not a change
        assert!(!reducer(&mut state, Action::SearchQuery("pizza".into())));
    }

    #[test]
    fn test_eco_filter_toggles() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::FilterEcoOnly(true)));
        assert!(state.eco_only);
        assert!(!reducer(&mut state, Action::FilterEcoOnly(true)));
        assert!(reducer(&mut state, Action::FilterEcoOnly(false)));
        assert!(!state.eco_only);
    }

    #[test]
    fn test_sort_select() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::SortSelect(2)));
        assert_eq!(state.sort, SortKey::DeliveryTime);
    }

    #[test]
    fn test_account_sign_out_opens_dialog() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::AccountSelect(SIGN_OUT_INDEX)));
        assert!(state.sign_out_open);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_account_other_item_shows_toast() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AccountSelect(0));
        let toast = state.toast.expect("toast shown");
        assert_eq!(toast.title, "Profile");
        assert_eq!(toast.variant, ToastVariant::Default);
    }

    #[test]
    fn test_account_out_of_range_ignored() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::AccountSelect(9)));
    }

    #[test]
    fn test_sign_out_flow() {
        let mut state = AppState::default();

        // Confirm without an open dialog does nothing
        assert!(!reducer(&mut state, Action::SignOutConfirm));
        assert!(state.signed_in);

        reducer(&mut state, Action::AccountSelect(SIGN_OUT_INDEX));
        assert!(reducer(&mut state, Action::SignOutConfirm));
        assert!(!state.sign_out_open);
        assert!(!state.signed_in);
        assert_eq!(state.toast.as_ref().map(|t| t.title.as_str()), Some("Signed out"));

        // Signed out: the account menu reports an error instead
        reducer(&mut state, Action::AccountSelect(1));
        assert_eq!(
            state.toast.as_ref().map(|t| t.variant),
            Some(ToastVariant::Destructive)
        );
    }

    #[test]
    fn test_dialog_close_request() {
        let mut state = AppState::default();
        state.sign_out_open = true;
        assert!(reducer(&mut state, Action::SignOutOpenChange(false)));
        assert!(!state.sign_out_open);
        assert!(!reducer(&mut state, Action::SignOutOpenChange(false)));
    }

    #[test]
    fn test_toast_dismiss() {
        let mut state = AppState::default();
        state.toast = Some(Notice::info("Order placed"));
        assert!(reducer(&mut state, Action::ToastDismiss));
        assert!(state.toast.is_none());
        assert!(!reducer(&mut state, Action::ToastDismiss));
    }

    #[test]
    fn test_focus_next() {
        let mut state = AppState::default();
        reducer(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::EcoSwitch);
    }

    #[test]
    fn test_ticks_and_quit_do_not_render() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::TaglineTick));
        assert!(!reducer(&mut state, Action::CarouselTick));
        assert!(!reducer(&mut state, Action::Quit));
        assert_eq!(state, AppState::default());
    }
}
