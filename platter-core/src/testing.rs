//! Test utilities for platter widgets
//!
//! - [`key`], [`char_key`], [`type_text`]: build keyboard events
//! - [`click`], [`mouse_down`]: build pointer-down events
//! - [`RenderHarness`]: render widgets into an in-memory terminal
//! - `assert_emitted!`, `assert_not_emitted!`, `count_emitted!`: inspect
//!   actions returned by `handle_event`
//!
//! # Example
//!
//! ```ignore
//! use platter::testing::{click, RenderHarness};
//!
//! let mut harness = RenderHarness::new(40, 6);
//! let output = harness.render_to_string_plain(|frame| {
//!     toast.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Order placed"));
//!
//! let actions: Vec<_> = toast.handle_event(&click(37, 1), props).into_iter().collect();
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::event::EventKind;

/// Create a `KeyEvent` from a key string such as `"a"`, `"enter"` or `"ctrl+u"`.
///
/// # Panics
///
/// Panics if the key string is not recognised.
pub fn key(s: &str) -> KeyEvent {
    let lowered = s.trim().to_lowercase();
    let (modifiers, name) = match lowered.split_once('+') {
        Some(("ctrl", rest)) => (KeyModifiers::CONTROL, rest),
        Some(("alt", rest)) => (KeyModifiers::ALT, rest),
        Some(("shift", rest)) => (KeyModifiers::SHIFT, rest),
        _ => (KeyModifiers::NONE, lowered.as_str()),
    };

    let code = match name {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        c if c.chars().count() == 1 => {
            // Keep the caller's case for plain characters
            let original = s.trim().chars().last().unwrap_or(' ');
            KeyCode::Char(original)
        }
        _ => panic!("Invalid key string: {:?}", s),
    };

    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Wrap a key string as an [`EventKind::Key`]
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// One key event per character of `text`
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

/// A left-button pointer-down `MouseEvent` at `(column, row)`
pub fn mouse_down(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A left-button pointer-down as an [`EventKind`]
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(mouse_down(column, row))
}

/// Renders widgets into an in-memory terminal
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend is infallible");
        Self { terminal }
    }

    /// Render one frame and return the resulting buffer
    pub fn render<F>(&mut self, f: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("test backend is infallible");
        self.terminal.backend().buffer().clone()
    }

    /// Render one frame and return it as plain text, one line per row
    pub fn render_to_string_plain<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(&self.render(f))
    }
}

/// Convert a buffer to plain text (symbols only, rows joined by newlines)
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Assert that an action matching a pattern was emitted.
///
/// # Example
///
/// ```ignore
/// assert_emitted!(actions, Action::SearchChange(q) if q == "pizza");
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count actions matching a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
