//! Storefront screen tests through RenderHarness
//!
//! Events are routed the way `main` routes them: pointer-downs reach the
//! listener registry before the screen maps them to actions.

use std::time::Duration;

use platter::testing::{click, key_event, type_text, RenderHarness};
use platter::{assert_emitted, EventKind, PointerListeners, Store, DEFAULT_TAGLINES};
use storefront::state::{Focus, Notice, SortKey, SIGN_OUT_INDEX};
use storefront::{handle_input, reducer, Action, AppState, Config, StorefrontUi};
use tokio::sync::mpsc;

struct Screen {
    listeners: PointerListeners,
    ui: StorefrontUi,
    store: Store<AppState, Action>,
    harness: RenderHarness,
}

impl Screen {
    fn new() -> Self {
        Self::with_state(AppState::default())
    }

    fn with_state(state: AppState) -> Self {
        let listeners = PointerListeners::new();
        let ui = StorefrontUi::new(&Config::default(), &listeners).unwrap();
        Self {
            listeners,
            ui,
            store: Store::new(state, reducer),
            harness: RenderHarness::new(80, 24),
        }
    }

    fn draw(&mut self) -> String {
        let Self {
            ui, store, harness, ..
        } = self;
        harness.render_to_string_plain(|frame| ui.render(frame, store.state()))
    }

    /// Route one event without redrawing, as a burst of queued input does
    fn input(&mut self, event: EventKind) -> Vec<Action> {
        handle_input(&mut self.ui, &self.listeners, &mut self.store, &event)
    }

    /// Route one event, then redraw
    fn send(&mut self, event: EventKind) -> Vec<Action> {
        let actions = self.input(event);
        self.draw();
        actions
    }
}

#[test]
fn test_render_home_screen() {
    let mut screen = Screen::new();
    let output = screen.draw();

    assert!(output.contains("Platter"), "Should show brand");
    assert!(output.contains(DEFAULT_TAGLINES[0]), "Should show first tagline");
    assert!(output.contains("Search for restaurants"), "Should show placeholder");
    assert!(output.contains("Eco-friendly only"));
    assert!(output.contains("Sort: Relevance"));
    assert!(output.contains("Account"));
    assert!(output.contains("Weekend Special"), "Should show first offer");
    assert!(output.contains("Biryani House"));
}

#[test]
fn test_search_filters_list() {
    let mut screen = Screen::new();
    screen.draw();

    for event in type_text("sushi") {
        screen.send(event);
    }

    assert_eq!(screen.store.state().query, "sushi");
    let output = screen.draw();
    assert!(output.contains("Sushi Master"));
    assert!(!output.contains("Biryani House"));
}

#[test]
fn test_search_without_match_shows_message() {
    let mut screen = Screen::new();
    for event in type_text("xyz") {
        screen.send(event);
    }
    assert!(screen.draw().contains("No restaurants match \"xyz\""));
}

#[test]
fn test_q_types_into_search_but_quits_elsewhere() {
    let mut screen = Screen::new();
    screen.draw();

    let actions = screen.send(key_event("q"));
    assert_eq!(actions, vec![Action::SearchQuery("q".into())]);

    screen.send(key_event("tab"));
    assert_eq!(screen.store.state().focus, Focus::EcoSwitch);
    assert_eq!(screen.send(key_event("q")), vec![Action::Quit]);
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut screen = Screen::with_state(AppState {
        sign_out_open: true,
        ..AppState::default()
    });
    assert_eq!(screen.send(key_event("ctrl+c")), vec![Action::Quit]);
}

#[test]
fn test_eco_switch_click() {
    let mut screen = Screen::new();
    screen.draw();

    let actions = screen.send(click(1, 5));
    assert_eq!(actions, vec![Action::FilterEcoOnly(true)]);
    assert!(screen.store.state().eco_only);

    let output = screen.draw();
    assert!(!output.contains("Sushi Master"), "Non-eco restaurants hidden");
    assert!(output.contains("Chaat Street"));

    assert_eq!(screen.send(click(1, 5)), vec![Action::FilterEcoOnly(false)]);
}

#[test]
fn test_sort_menu_select_closes_menu() {
    let mut screen = Screen::new();
    screen.draw();

    // Trigger sits after the 24-column switch slot
    screen.send(click(25, 5));
    assert!(screen.ui.is_sort_open());
    assert_eq!(screen.listeners.len(), 1);

    // Second item, one row below the menu's top border
    let actions = screen.send(click(27, 8));
    assert_eq!(actions, vec![Action::SortSelect(1)]);
    assert_eq!(screen.store.state().sort, SortKey::Rating);
    assert!(!screen.ui.is_sort_open());
    assert!(screen.listeners.is_empty());
    assert!(screen.draw().contains("Sort: Rating"));
}

#[test]
fn test_outside_click_closes_account_menu() {
    let mut screen = Screen::new();
    screen.draw();

    // "Account ▾" is right-aligned in the header
    screen.send(click(72, 0));
    assert!(screen.ui.is_account_open());
    assert!(screen.draw().contains("Sign out"));

    let actions = screen.send(click(10, 20));
    assert!(actions.is_empty());
    assert!(!screen.ui.is_account_open());
    assert!(screen.listeners.is_empty());
}

#[test]
fn test_one_outside_click_closes_both_menus() {
    let mut screen = Screen::new();
    screen.draw();

    screen.send(click(72, 0));
    // Opening the sort menu is itself outside the account menu
    screen.send(click(25, 5));
    assert!(!screen.ui.is_account_open());
    assert!(screen.ui.is_sort_open());

    screen.send(click(10, 20));
    assert!(!screen.ui.is_sort_open());
}

#[test]
fn test_sign_out_flow() {
    let mut screen = Screen::new();
    screen.draw();

    screen.send(click(72, 0));
    // Menu hangs from the trigger's right edge; "Sign out" is the third row
    let actions = screen.send(click(70, 4));
    assert_eq!(actions, vec![Action::AccountSelect(SIGN_OUT_INDEX)]);
    assert!(screen.store.state().sign_out_open);

    let output = screen.draw();
    assert!(output.contains("Sign out of Platter?"));

    // Modal: Tab does not move focus underneath
    assert!(screen.send(key_event("tab")).is_empty());
    assert_eq!(screen.store.state().focus, Focus::Search);

    assert_eq!(screen.send(key_event("y")), vec![Action::SignOutConfirm]);
    let state = screen.store.state();
    assert!(!state.signed_in);
    assert!(!state.sign_out_open);
    assert!(screen.draw().contains("Guest"));
}

#[test]
fn test_sign_out_dialog_escape() {
    let mut screen = Screen::with_state(AppState {
        sign_out_open: true,
        ..AppState::default()
    });
    screen.draw();

    assert_emitted!(screen.send(key_event("esc")), Action::SignOutOpenChange(false));
    assert!(!screen.store.state().sign_out_open);
    assert!(!screen.draw().contains("Sign out of Platter?"));
}

#[test]
fn test_toast_close_glyph() {
    let mut screen = Screen::with_state(AppState {
        toast: Some(Notice::info("Order placed").with_description("On its way")),
        ..AppState::default()
    });
    let output = screen.draw();
    assert!(output.contains("Order placed"));
    assert!(output.contains('✕'));

    // Bottom-right card above the help bar: inner top-right cell
    assert_eq!(screen.send(click(78, 20)), vec![Action::ToastDismiss]);
    assert!(screen.store.state().toast.is_none());
    assert!(!screen.draw().contains("Order placed"));

    // Gone: the same cell is just the restaurant list now
    assert!(screen.send(click(78, 20)).is_empty());
}

#[test]
fn test_carousel_arrow_shows_next_offer() {
    let mut screen = Screen::new();
    screen.draw();

    // Next arrow on the carousel's middle inner row
    let actions = screen.send(click(78, 9));
    assert!(actions.is_empty(), "Slides are not host state");
    assert_eq!(screen.ui.offer_index(), 1);
    assert!(screen.draw().contains("First Order"));
}

#[test]
fn test_queued_keystrokes_all_reach_the_query() {
    let mut screen = Screen::new();
    screen.draw();

    // No redraw between keys: each one must see the query the last produced
    screen.input(key_event("b"));
    screen.input(key_event("o"));
    assert_eq!(screen.store.state().query, "bo");
    assert!(screen.draw().contains("No restaurants match \"bo\""));
}

#[test]
fn test_queued_double_toggle_returns_switch_to_off() {
    let mut screen = Screen::new();
    screen.send(key_event("tab"));
    assert_eq!(screen.store.state().focus, Focus::EcoSwitch);

    let first = screen.input(key_event("space"));
    let second = screen.input(key_event("space"));
    assert_eq!(first, vec![Action::FilterEcoOnly(true)]);
    assert_eq!(second, vec![Action::FilterEcoOnly(false)]);
    assert!(!screen.store.state().eco_only);
}

#[tokio::test(start_paused = true)]
async fn test_timers_drive_tagline_and_carousel() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut screen = Screen::new();
    screen.ui.activate(tx).unwrap();

    // Tagline period (4s) elapses before the carousel's (5s)
    assert_eq!(rx.recv().await, Some(Action::TaglineTick));
    assert!(screen.ui.tick_tagline());
    assert_eq!(screen.ui.tagline(), DEFAULT_TAGLINES[1]);

    assert_eq!(rx.recv().await, Some(Action::CarouselTick));
    assert!(screen.ui.tick_carousel());
    assert_eq!(screen.ui.offer_index(), 1);

    screen.ui.deactivate();
    assert!(!screen.ui.tick_tagline());
    assert!(!screen.ui.tick_carousel());
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_disabled_by_config() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let listeners = PointerListeners::new();
    let config = Config {
        carousel_autoplay: false,
        ..Config::default()
    };
    let mut ui = StorefrontUi::new(&config, &listeners).unwrap();
    ui.activate(tx).unwrap();

    // Sleeping lets the paused clock auto-advance and the timer tasks run
    tokio::time::sleep(Duration::from_secs(11)).await;

    let mut received = Vec::new();
    while let Ok(action) = rx.try_recv() {
        received.push(action);
    }
    assert!(!received.is_empty(), "Tagline keeps rotating");
    assert!(received.iter().all(|a| *a == Action::TaglineTick));
    assert!(!ui.tick_carousel());
}

#[test]
fn test_empty_taglines_rejected() {
    let listeners = PointerListeners::new();
    let config = Config {
        taglines: Vec::new(),
        ..Config::default()
    };
    assert_eq!(
        StorefrontUi::new(&config, &listeners).err(),
        Some(platter::Error::EmptyCycle)
    );
}
