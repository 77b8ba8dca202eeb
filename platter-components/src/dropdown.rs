//! Dropdown menu that closes on outside clicks
//!
//! The trigger toggles the menu. While the menu is open the dropdown holds
//! a [`ListenerGuard`] in the host's [`PointerListeners`] registry, so any
//! pointer-down outside the trigger and menu closes it. Closing releases
//! the guard, and so does dropping the dropdown.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crossterm::event::KeyCode;
use platter_core::{Component, EventKind, ListenerGuard, PointerListeners};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

const TRIGGER_MARKER: &str = " ▾";

/// Horizontal placement of the menu relative to the trigger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Props for Dropdown
pub struct DropdownProps<'a, A> {
    /// Trigger text
    pub label: &'a str,
    /// Menu entries
    pub items: &'a [String],
    /// Menu placement
    pub align: Align,
    /// Whether keyboard input is routed here
    pub is_focused: bool,
    /// Observer for item selection
    pub on_select: Option<fn(usize) -> A>,
}

/// State shared with the outside-click listener
#[derive(Debug, Default)]
struct Shared {
    open: Cell<bool>,
    /// Trigger and menu from the last render; `None` until rendered
    boundary: Cell<Option<Rect>>,
    listener: RefCell<Option<ListenerGuard>>,
}

impl Shared {
    fn on_pointer_down(&self, position: Position) {
        if !self.open.get() {
            return;
        }
        match self.boundary.get() {
            None => trace!("Dropdown has no boundary yet, skipping outside check"),
            Some(boundary) if boundary.contains(position) => {}
            Some(_) => {
                debug!(x = position.x, y = position.y, "Dropdown dismissed by outside click");
                self.close();
            }
        }
    }

    fn close(&self) {
        self.open.set(false);
        let guard = self.listener.borrow_mut().take();
        drop(guard);
    }
}

/// A trigger with a menu that dismisses on outside pointer-downs
#[derive(Debug)]
pub struct Dropdown {
    listeners: PointerListeners,
    shared: Rc<Shared>,
    highlight: usize,
    trigger_area: Option<Rect>,
    item_rows: Vec<Rect>,
}

impl Dropdown {
    /// Create a closed dropdown bound to the host's listener registry
    pub fn new(listeners: &PointerListeners) -> Self {
        Self {
            listeners: listeners.clone(),
            shared: Rc::new(Shared::default()),
            highlight: 0,
            trigger_area: None,
            item_rows: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.shared.open.get()
    }

    /// Open the menu and start listening for outside clicks
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let guard = self.listeners.register(move |position| {
            if let Some(shared) = weak.upgrade() {
                shared.on_pointer_down(position);
            }
        });
        *self.shared.listener.borrow_mut() = Some(guard);
        self.shared.open.set(true);
        self.highlight = 0;
        debug!("Dropdown opened");
    }

    /// Close the menu and stop listening
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.shared.close();
        debug!("Dropdown closed");
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Index of the keyboard-highlighted item
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Whether `position` lands on the trigger, or on the menu while open
    ///
    /// Hosts use this to keep a click on the menu from reaching widgets
    /// drawn underneath it.
    pub fn contains(&self, position: Position) -> bool {
        let area = if self.is_open() {
            self.shared.boundary.get()
        } else {
            self.trigger_area
        };
        area.is_some_and(|r| r.contains(position))
    }

    fn hit_trigger(&self, position: Position) -> bool {
        self.trigger_area.is_some_and(|r| r.contains(position))
    }

    fn hit_item(&self, position: Position) -> Option<usize> {
        self.item_rows.iter().position(|r| r.contains(position))
    }
}

impl<A> Component<A> for Dropdown {
    type Props<'a> = DropdownProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if let Some(position) = event.pointer_down() {
            if self.hit_trigger(position) {
                self.toggle();
                return None;
            }
            if self.is_open() {
                if let Some(index) = self.hit_item(position) {
                    self.highlight = index;
                    return props.on_select.map(|f| f(index));
                }
            }
            return None;
        }

        if !props.is_focused {
            return None;
        }
        let Some(key) = event.key_press() else {
            return None;
        };
        let last = props.items.len().saturating_sub(1);
        match key.code {
            KeyCode::Char(' ') => {
                self.toggle();
                None
            }
            KeyCode::Enter if !self.is_open() => {
                self.open();
                None
            }
            KeyCode::Enter if !props.items.is_empty() => {
                let index = self.highlight.min(last);
                props.on_select.map(|f| f(index))
            }
            KeyCode::Esc => {
                self.close();
                None
            }
            KeyCode::Up if self.is_open() => {
                self.highlight = self.highlight.saturating_sub(1);
                None
            }
            KeyCode::Down if self.is_open() => {
                self.highlight = (self.highlight + 1).min(last);
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let label = Line::from(vec![
            Span::raw(props.label),
            Span::styled(TRIGGER_MARKER, Style::default().fg(Color::DarkGray)),
        ]);
        let trigger_style = if props.is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let trigger = Rect {
            width: (label.width() as u16).min(area.width),
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(Paragraph::new(label).style(trigger_style), trigger);
        self.trigger_area = Some(trigger);
        self.item_rows.clear();

        if !self.is_open() {
            self.shared.boundary.set(Some(trigger));
            return;
        }

        let menu = menu_rect(trigger, props.items, props.align, frame.area());
        frame.render_widget(Clear, menu);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(menu);
        frame.render_widget(block, menu);

        self.highlight = self.highlight.min(props.items.len().saturating_sub(1));
        for (i, item) in props.items.iter().enumerate().take(inner.height as usize) {
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            let style = if i == self.highlight {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            frame.render_widget(Paragraph::new(format!(" {item}")).style(style), row);
            self.item_rows.push(row);
        }

        self.shared.boundary.set(Some(trigger.union(menu)));
    }
}

/// Menu placement below the trigger, kept inside `bounds`
fn menu_rect(trigger: Rect, items: &[String], align: Align, bounds: Rect) -> Rect {
    let content = items
        .iter()
        .map(|item| Line::from(item.as_str()).width() as u16)
        .max()
        .unwrap_or(0);
    // Borders plus one cell of padding on each side
    let width = (content + 4).min(bounds.width);
    let height = (items.len() as u16 + 2).min(bounds.bottom().saturating_sub(trigger.bottom()));

    let x = match align {
        Align::Start => trigger.x,
        Align::Center => (trigger.x + trigger.width / 2).saturating_sub(width / 2),
        Align::End => trigger.right().saturating_sub(width),
    };
    let x = x.clamp(bounds.x, bounds.right().saturating_sub(width).max(bounds.x));

    Rect::new(x, trigger.bottom(), width, height)
}
