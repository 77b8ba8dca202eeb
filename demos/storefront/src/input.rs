//! Terminal input step of the host loop

use platter::{EventKind, PointerListeners, Store};
use tracing::debug;

use crate::action::Action;
use crate::state::AppState;
use crate::ui::StorefrontUi;

/// Route one terminal event and apply the resulting actions to the store
///
/// Pointer-downs reach the listener registry before the screen sees them.
/// Every action is reduced before this returns, so the next event is mapped
/// against the values the previous one produced. Returns the actions so the
/// caller can act on `Quit`.
pub fn handle_input(
    ui: &mut StorefrontUi,
    listeners: &PointerListeners,
    store: &mut Store<AppState, Action>,
    event: &EventKind,
) -> Vec<Action> {
    if let Some(position) = event.pointer_down() {
        let notified = listeners.dispatch(position);
        debug!(notified, ?position, "Pointer-down dispatched to listeners");
    }

    let actions = ui.map_event(event, store.state());
    for action in &actions {
        store.dispatch(action.clone());
    }
    actions
}
