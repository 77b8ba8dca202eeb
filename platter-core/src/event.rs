//! Event types delivered to widgets

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// The event payload a widget receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event; the host poller forwards only pointer-downs
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// Position of a pointer-down (any button), if this is one
    pub fn pointer_down(&self) -> Option<Position> {
        match self {
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Down(_),
                column,
                row,
                ..
            }) => Some(Position::new(*column, *row)),
            _ => None,
        }
    }

    /// Key code of a key press, ignoring repeats and releases
    pub fn key_press(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) if key.kind != KeyEventKind::Release => Some(key),
            _ => None,
        }
    }

    /// Whether this is Space or Enter, the keys that activate a focused widget
    pub fn is_activation_key(&self) -> bool {
        self.key_press()
            .is_some_and(|key| matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')))
    }
}
