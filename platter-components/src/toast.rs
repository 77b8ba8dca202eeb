//! Transient notification card
//!
//! A toast is visible while the host keeps rendering it. There is no
//! timeout; it goes away when the host drops it, typically in response to
//! `on_close`.

use platter_core::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use serde::{Deserialize, Serialize};

const CLOSE_GLYPH: &str = "✕";

/// Presentation variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    fn border_style(self) -> Style {
        match self {
            ToastVariant::Default => Style::default().fg(Color::Gray),
            ToastVariant::Destructive => Style::default().fg(Color::Red),
        }
    }

    fn body_style(self) -> Style {
        match self {
            ToastVariant::Default => Style::default(),
            ToastVariant::Destructive => Style::default().fg(Color::LightRed),
        }
    }
}

/// Props for Toast
pub struct ToastProps<'a, A> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub variant: ToastVariant,
    /// Close observer; without it no close glyph is drawn
    pub on_close: Option<fn() -> A>,
}

/// Toast card with an optional close glyph
#[derive(Debug, Default)]
pub struct Toast {
    close_area: Option<Rect>,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a close glyph was drawn on the last render
    pub fn has_close(&self) -> bool {
        self.close_area.is_some()
    }
}

/// Bottom-right placement for a toast of the given size
pub fn toast_area(bounds: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    Rect::new(
        bounds.right() - width,
        bounds.bottom() - height,
        width,
        height,
    )
}

impl<A> Component<A> for Toast {
    type Props<'a> = ToastProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let Some(on_close) = props.on_close else {
            return None;
        };
        let hit = event
            .pointer_down()
            .zip(self.close_area)
            .is_some_and(|(position, area)| area.contains(position));
        hit.then(on_close)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(props.variant.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        if let Some(title) = props.title {
            lines.push(Line::styled(
                title,
                props.variant.body_style().add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(description) = props.description {
            lines.push(Line::styled(description, props.variant.body_style()));
        }

        // Leave the last column free for the close glyph
        let text_area = Rect {
            width: inner.width.saturating_sub(2),
            ..inner
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text_area);

        self.close_area = None;
        if props.on_close.is_some() && inner.width > 0 && inner.height > 0 {
            let close = Rect::new(inner.right() - 1, inner.y, 1, 1);
            frame.render_widget(
                Paragraph::new(CLOSE_GLYPH).style(Style::default().fg(Color::DarkGray)),
                close,
            );
            self.close_area = Some(close);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platter_core::testing::{click, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Dismiss,
    }

    fn props(on_close: Option<fn() -> TestAction>) -> ToastProps<'static, TestAction> {
        ToastProps {
            title: Some("Order placed"),
            description: Some("Arriving in 30 minutes"),
            variant: ToastVariant::Default,
            on_close,
        }
    }

    fn render(toast: &mut Toast, harness: &mut RenderHarness, on_close: Option<fn() -> TestAction>) -> String {
        harness.render_to_string_plain(|frame| {
            toast.render(frame, frame.area(), props(on_close));
        })
    }

    #[test]
    fn test_without_on_close_no_affordance() {
        let mut harness = RenderHarness::new(40, 4);
        let mut toast = Toast::new();
        let output = render(&mut toast, &mut harness, None);

        assert!(output.contains("Order placed"));
        assert!(!output.contains(CLOSE_GLYPH));
        assert!(!toast.has_close());

        let actions: Vec<_> = toast.handle_event(&click(38, 1), props(None)).into_iter().collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_close_click_emits_once() {
        let mut harness = RenderHarness::new(40, 4);
        let mut toast = Toast::new();
        let output = render(&mut toast, &mut harness, Some(|| TestAction::Dismiss));
        assert!(output.contains(CLOSE_GLYPH));

        let actions: Vec<_> = toast
            .handle_event(&click(38, 1), props(Some(|| TestAction::Dismiss)))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Dismiss]);
    }

    #[test]
    fn test_click_elsewhere_is_ignored() {
        let mut harness = RenderHarness::new(40, 4);
        let mut toast = Toast::new();
        render(&mut toast, &mut harness, Some(|| TestAction::Dismiss));

        let actions: Vec<_> = toast
            .handle_event(&click(5, 2), props(Some(|| TestAction::Dismiss)))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_destructive_variant_styles_border() {
        let mut harness = RenderHarness::new(40, 4);
        let mut toast = Toast::new();
        let buffer = harness.render(|frame| {
            let props = ToastProps {
                variant: ToastVariant::Destructive,
                ..props(None)
            };
            toast.render(frame, frame.area(), props);
        });
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_toast_area_bottom_right() {
        let area = toast_area(Rect::new(0, 0, 80, 24), 30, 4);
        assert_eq!(area, Rect::new(50, 20, 30, 4));
    }

    #[test]
    fn test_variant_deserializes() {
        let variant: ToastVariant = serde_json::from_str("\"destructive\"").unwrap();
        assert_eq!(variant, ToastVariant::Destructive);
    }
}
