//! Single-line search input with controlled or uncontrolled value

use crossterm::event::{KeyCode, KeyModifiers};
use platter_core::{ChangeEvent, Component, ControlledValue, EventKind, FanOut};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder shown while the query is empty
pub const SEARCH_PLACEHOLDER: &str = "Search for restaurants, food...";

/// Props for SearchInput
pub struct SearchInputProps<'a, A> {
    /// Host-supplied query; adopted only by controlled inputs
    pub value: Option<&'a str>,
    /// Placeholder text when empty
    pub placeholder: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Whether to show border
    pub show_border: bool,
    /// Low-level observer, notified first
    pub on_change: Option<fn(ChangeEvent<String>) -> A>,
    /// Semantic observer with the new query, notified second
    pub on_search: Option<fn(String) -> A>,
}

/// A single-line query input with cursor
///
/// Handles typing, backspace, delete, and cursor movement. Every edit that
/// changes the query notifies `on_change` then `on_search`.
#[derive(Debug, Default)]
pub struct SearchInput {
    value: ControlledValue<String>,
    /// Cursor position (byte index)
    cursor: usize,
}

impl SearchInput {
    /// Uncontrolled input starting empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Uncontrolled input starting at `initial`, cursor at the end
    pub fn with_value(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            cursor: initial.len(),
            value: ControlledValue::uncontrolled(initial),
        }
    }

    /// Input whose query is owned by the host
    pub fn controlled(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            cursor: value.len(),
            value: ControlledValue::controlled(value),
        }
    }

    /// Query currently shown
    pub fn value(&self) -> &str {
        self.value.get()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn sync(&mut self, external: Option<&str>) {
        let external = external.map(str::to_owned);
        if self.value.sync(external.as_ref()) {
            self.cursor = self.value().len();
        }
        self.cursor = self.cursor.min(self.value().len());
    }

    fn move_cursor_left(&mut self) {
        let value = self.value.get();
        if let Some((i, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    fn move_cursor_right(&mut self) {
        let value = self.value.get();
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, c: char) -> String {
        let value = self.value.get();
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    fn delete_char_before(&mut self) -> Option<String> {
        let value = self.value.get();
        let (start, _) = value[..self.cursor].char_indices().next_back()?;
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    fn delete_char_at(&self) -> Option<String> {
        let value = self.value.get();
        let c = value[self.cursor..].chars().next()?;
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..self.cursor]);
        next.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(next)
    }

    /// Apply a key, returning the new query if it changed
    fn edit(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<String> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = self.value().len();
                    None
                }
                KeyCode::Char('u') if !self.value().is_empty() => {
                    self.cursor = 0;
                    Some(String::new())
                }
                _ => None,
            };
        }

        match code {
            KeyCode::Char(c) => Some(self.insert_char(c)),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => {
                self.move_cursor_left();
                None
            }
            KeyCode::Right => {
                self.move_cursor_right();
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.value().len();
                None
            }
            _ => None,
        }
    }
}

impl<A> Component<A> for SearchInput {
    type Props<'a> = SearchInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.sync(props.value);
        if !props.is_focused {
            return FanOut::new();
        }
        let Some(key) = event.key_press() else {
            return FanOut::new();
        };
        let Some(next) = self.edit(key.code, key.modifiers) else {
            return FanOut::new();
        };

        let previous = self.value.accept(next.clone());
        FanOut::new()
            .notify(
                props.on_change,
                ChangeEvent {
                    previous,
                    value: next.clone(),
                    trigger: event.clone(),
                },
            )
            .notify(props.on_search, next)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.value);

        let value = self.value.get();
        let (text, style) = if value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (value.as_str(), Style::default())
        };
        let mut paragraph = Paragraph::new(text).style(style);

        if props.show_border {
            paragraph = paragraph.block(Block::default().borders(Borders::ALL).border_style(
                if props.is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ));
        }
        frame.render_widget(paragraph, area);

        if props.is_focused {
            let border = u16::from(props.show_border);
            let offset = Line::from(&value[..self.cursor]).width() as u16;
            let cursor_x = area.x + border + offset;
            let max_x = area.right().saturating_sub(border);
            if cursor_x < max_x {
                frame.set_cursor_position((cursor_x, area.y + border));
            }
        }
    }
}
