//! Storefront screen
//!
//! Owns the widget instances and their presentation state. Host state comes
//! in as `&AppState`; user intent goes out as [`Action`]s.

use crossterm::event::{KeyCode, KeyModifiers};
use platter::{
    Align, Carousel, CarouselProps, Component, Dialog, DialogProps, Dropdown, DropdownProps,
    EventKind, OverlayStyle, PointerListeners, SearchInput, SearchInputProps, Switch,
    SwitchProps, TaglineProps, TaglineRotator, Toast, ToastProps, SEARCH_PLACEHOLDER,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::action::Action;
use crate::config::Config;
use crate::state::{offer_slides, AppState, Focus, Notice, SortKey, ACCOUNT_ITEMS};

const BRAND: &str = "Platter";
const SIGN_OUT_BODY: &str = "Sign out of Platter?\n\ny: sign out   Esc: cancel";
const HELP: &str = "Tab: focus  ←/→: offers  Space/Enter: toggle  q: quit";
const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 4;

/// All storefront widgets
pub struct StorefrontUi {
    tagline: TaglineRotator,
    carousel: Carousel,
    search: SearchInput,
    eco: Switch,
    sort: Dropdown,
    account: Dropdown,
    dialog: Dialog,
    toast: Toast,
    sort_items: Vec<String>,
    account_items: Vec<String>,
    /// Account menu placement under its trigger
    menu_align: Align,
}

impl StorefrontUi {
    /// Build the widgets; menus register their outside-click listeners on
    /// `listeners` while open
    pub fn new(config: &Config, listeners: &PointerListeners) -> platter::Result<Self> {
        let tagline =
            TaglineRotator::new(config.taglines.iter().cloned())?.with_period(config.tagline_interval());
        let carousel = Carousel::new(offer_slides())?
            .with_autoplay(config.carousel_autoplay)
            .with_period(config.carousel_interval());

        Ok(Self {
            tagline,
            carousel,
            search: SearchInput::controlled(""),
            eco: Switch::controlled(false),
            sort: Dropdown::new(listeners),
            account: Dropdown::new(listeners),
            dialog: Dialog::new(),
            toast: Toast::new(),
            sort_items: SortKey::ALL.iter().map(|k| k.label().to_string()).collect(),
            account_items: ACCOUNT_ITEMS.iter().map(|s| s.to_string()).collect(),
            menu_align: config.menu_align,
        })
    }

    /// Start the tagline rotation and carousel auto-play
    pub fn activate(&mut self, action_tx: mpsc::UnboundedSender<Action>) -> platter::Result<()> {
        self.tagline.activate(action_tx.clone(), || Action::TaglineTick)?;
        self.carousel.activate(action_tx, || Action::CarouselTick)?;
        debug!(
            tagline_ms = self.tagline.period().as_millis() as u64,
            autoplay = self.carousel.is_playing(),
            "Storefront timers started"
        );
        Ok(())
    }

    /// Stop both timers
    pub fn deactivate(&mut self) {
        self.tagline.deactivate();
        self.carousel.deactivate();
    }

    /// Advance the tagline; returns `true` if a re-render is needed
    pub fn tick_tagline(&mut self) -> bool {
        self.tagline.tick()
    }

    /// Advance the carousel; returns `true` if a re-render is needed
    pub fn tick_carousel(&mut self) -> bool {
        let before = self.carousel.index();
        self.carousel.tick::<Action>(None);
        self.carousel.index() != before
    }

    pub fn tagline(&self) -> &str {
        self.tagline.current()
    }

    /// Index of the offer slide on screen
    pub fn offer_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn is_sort_open(&self) -> bool {
        self.sort.is_open()
    }

    pub fn is_account_open(&self) -> bool {
        self.account.is_open()
    }

    /// Map a terminal event to storefront actions
    ///
    /// Pointer-downs must already have gone through the listener registry.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let Some(key) = event.key_press() {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return vec![Action::Quit];
            }
        }

        // The dialog is modal: nothing underneath sees input while it is open
        if state.sign_out_open {
            if event
                .key_press()
                .is_some_and(|key| key.code == KeyCode::Char('y'))
            {
                return vec![Action::SignOutConfirm];
            }
            return self
                .dialog
                .handle_event(event, dialog_props(state))
                .into_iter()
                .collect();
        }

        if let Some(key) = event.key_press() {
            match key.code {
                KeyCode::Tab => {
                    self.sort.close();
                    self.account.close();
                    return vec![Action::FocusNext];
                }
                KeyCode::Char('q') if state.focus != Focus::Search => {
                    return vec![Action::Quit];
                }
                _ => {}
            }
        }

        // Open menus sit on top: a click on one never reaches what is beneath
        let on_menu = event
            .pointer_down()
            .is_some_and(|p| self.sort.contains(p) || self.account.contains(p));
        if on_menu {
            return self.map_menus(event, state);
        }

        let mut actions: Vec<Action> = Vec::new();
        if let Some(notice) = &state.toast {
            actions.extend(self.toast.handle_event(event, toast_props(notice)));
        }
        actions.extend(self.search.handle_event(event, search_props(state)));
        actions.extend(self.eco.handle_event(event, eco_props(state)));
        actions.extend(self.carousel.handle_event(event, carousel_props(state)));
        actions.extend(self.map_menus(event, state));
        actions
    }

    /// Route to both menus; a menu closes once an item is picked
    fn map_menus(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .sort
            .handle_event(event, sort_props(&self.sort_items, state))
            .into_iter()
            .collect();
        if !actions.is_empty() {
            self.sort.close();
        }

        let picked: Vec<Action> = self
            .account
            .handle_event(
                event,
                account_props(&self.account_items, self.menu_align, state),
            )
            .into_iter()
            .collect();
        if !picked.is_empty() {
            self.account.close();
        }
        actions.extend(picked);
        actions
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let [header, tagline, search, filters, carousel, list, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                BRAND,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            header,
        );

        Component::<Action>::render(&mut self.tagline, frame, tagline, TaglineProps::default());
        self.search.render(frame, search, search_props(state));

        let [eco_area, sort_area] =
            Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)]).areas(filters);
        self.eco.render(frame, eco_area, eco_props(state));

        self.carousel.render(frame, carousel, carousel_props(state));
        render_restaurants(frame, list, state);

        frame.render_widget(
            Paragraph::new(HELP)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            help,
        );

        // Menus draw over the body, so they go last
        self.sort.render(
            frame,
            sort_area,
            sort_props(&self.sort_items, state),
        );
        let account_area = account_trigger_area(header, account_label(state));
        self.account.render(
            frame,
            account_area,
            account_props(&self.account_items, self.menu_align, state),
        );

        if let Some(notice) = &state.toast {
            let bounds = Rect {
                height: area.height.saturating_sub(1),
                ..area
            };
            self.toast.render(
                frame,
                platter::toast_area(bounds, TOAST_WIDTH, TOAST_HEIGHT),
                toast_props(notice),
            );
        }

        self.dialog.render(frame, area, dialog_props(state));
    }
}

fn search_props(state: &AppState) -> SearchInputProps<'_, Action> {
    SearchInputProps {
        value: Some(state.query.as_str()),
        placeholder: SEARCH_PLACEHOLDER,
        is_focused: state.focus == Focus::Search,
        show_border: true,
        on_change: None,
        on_search: Some(Action::SearchQuery),
    }
}

fn eco_props(state: &AppState) -> SwitchProps<'static, Action> {
    SwitchProps {
        label: "Eco-friendly only",
        checked: Some(state.eco_only),
        is_focused: state.focus == Focus::EcoSwitch,
        disabled: false,
        on_change: None,
        on_checked_change: Some(Action::FilterEcoOnly),
    }
}

fn carousel_props(state: &AppState) -> CarouselProps<Action> {
    CarouselProps {
        is_focused: state.focus == Focus::Carousel,
        // Slides are presentation only; the host keeps no copy of the index
        on_change: None,
    }
}

fn sort_label(state: &AppState) -> &'static str {
    match state.sort {
        SortKey::Relevance => "Sort: Relevance",
        SortKey::Rating => "Sort: Rating",
        SortKey::DeliveryTime => "Sort: Delivery time",
        SortKey::Cost => "Sort: Cost for two",
    }
}

fn sort_props<'a>(items: &'a [String], state: &AppState) -> DropdownProps<'a, Action> {
    DropdownProps {
        label: sort_label(state),
        items,
        align: Align::Start,
        is_focused: state.focus == Focus::Sort,
        on_select: Some(Action::SortSelect),
    }
}

fn account_label(state: &AppState) -> &'static str {
    if state.signed_in {
        "Account"
    } else {
        "Guest"
    }
}

fn account_props<'a>(items: &'a [String], align: Align, state: &AppState) -> DropdownProps<'a, Action> {
    DropdownProps {
        label: account_label(state),
        items,
        align,
        is_focused: state.focus == Focus::Account,
        on_select: Some(Action::AccountSelect),
    }
}

/// Right-aligned slot in the header for the account trigger
fn account_trigger_area(header: Rect, label: &str) -> Rect {
    // Label plus the " ▾" marker
    let width = (Line::from(label).width() as u16 + 2).min(header.width);
    Rect {
        x: header.right() - width,
        width,
        ..header
    }
}

fn toast_props(notice: &Notice) -> ToastProps<'_, Action> {
    ToastProps {
        title: Some(notice.title.as_str()),
        description: notice.description.as_deref(),
        variant: notice.variant,
        on_close: Some(|| Action::ToastDismiss),
    }
}

fn dialog_props(state: &AppState) -> DialogProps<'static, Action> {
    DialogProps {
        open: state.sign_out_open,
        title: Some("Sign out"),
        body: SIGN_OUT_BODY,
        width: 36,
        height: 7,
        show_close: true,
        style: OverlayStyle::default(),
        on_open_change: Action::SignOutOpenChange,
    }
}

fn render_restaurants(frame: &mut Frame, area: Rect, state: &AppState) {
    let visible = state.visible();
    if visible.is_empty() {
        let message = if state.query.is_empty() {
            "No restaurants match these filters".to_string()
        } else {
            format!("No restaurants match \"{}\"", state.query)
        };
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|r| {
            let mut spans = vec![
                Span::styled(
                    format!("{:<18}", r.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<12}", r.cuisine), Style::default().fg(Color::Gray)),
                Span::styled(format!("★{:.1} ", r.rating), Style::default().fg(Color::Green)),
                Span::raw(format!("{:>3} min  ₹{:<4} for two", r.delivery_minutes, r.cost_for_two)),
            ];
            if r.eco_friendly {
                spans.push(Span::styled("  eco", Style::default().fg(Color::Green)));
            }
            if let Some(offer) = r.offer {
                spans.push(Span::styled(
                    format!("  {offer}"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
