//! Modal dialog with overlay dismissal
//!
//! Visibility is owned by the host through the `open` prop. The dialog
//! never closes itself: clicks on the overlay, the close glyph, or Esc all
//! ask the host to close by emitting `on_open_change(false)`.

use crossterm::event::KeyCode;
use platter_core::{Component, EventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::trace;

use crate::overlay::{centered_rect, render_overlay, OverlayStyle};

const CLOSE_GLYPH: &str = "✕";

/// Props for Dialog
pub struct DialogProps<'a, A> {
    /// Whether the dialog is shown
    pub open: bool,
    pub title: Option<&'a str>,
    pub body: &'a str,
    /// Content box size, clamped to the frame
    pub width: u16,
    pub height: u16,
    /// Draw a close glyph in the top-right corner
    pub show_close: bool,
    pub style: OverlayStyle,
    /// Asked to change visibility; the dialog only ever asks for `false`
    pub on_open_change: fn(bool) -> A,
}

#[derive(Debug, Default, Clone, Copy)]
struct HitAreas {
    content: Option<Rect>,
    close: Option<Rect>,
}

/// Centred dialog drawn over a dimmed frame
#[derive(Debug, Default)]
pub struct Dialog {
    hits: HitAreas,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content box from the last open render
    pub fn content_area(&self) -> Option<Rect> {
        self.hits.content
    }

    fn classify(&self, position: Position) -> Option<Target> {
        let content = self.hits.content?;
        if self.hits.close.is_some_and(|r| r.contains(position)) {
            Some(Target::Close)
        } else if content.contains(position) {
            Some(Target::Content)
        } else {
            Some(Target::Overlay)
        }
    }
}

enum Target {
    Overlay,
    Content,
    Close,
}

impl<A> Component<A> for Dialog {
    type Props<'a> = DialogProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.open {
            self.hits = HitAreas::default();
            return None;
        }

        if event
            .key_press()
            .is_some_and(|key| key.code == KeyCode::Esc)
        {
            return Some((props.on_open_change)(false));
        }

        let Some(position) = event.pointer_down() else {
            return None;
        };
        match self.classify(position) {
            Some(Target::Overlay) | Some(Target::Close) => Some((props.on_open_change)(false)),
            Some(Target::Content) => None,
            None => {
                trace!("Dialog not rendered yet, ignoring pointer-down");
                None
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, _area: Rect, props: Self::Props<'_>) {
        if !props.open {
            self.hits = HitAreas::default();
            return;
        }

        let content = centered_rect(props.width, props.height, frame.area());
        render_overlay(frame, content, &props.style);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        if let Some(title) = props.title {
            block = block.title(Line::styled(
                format!(" {title} "),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        let inner = block.inner(content);
        frame.render_widget(block, content);
        frame.render_widget(
            Paragraph::new(props.body).wrap(Wrap { trim: true }),
            inner,
        );

        self.hits.content = Some(content);
        self.hits.close = None;
        if props.show_close && content.width >= 4 {
            let close = Rect::new(content.right() - 3, content.y, 1, 1);
            frame.render_widget(
                Paragraph::new(CLOSE_GLYPH).style(Style::default().fg(Color::White)),
                close,
            );
            self.hits.close = Some(close);
        }
    }
}
