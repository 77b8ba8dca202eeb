//! Full-frame overlay with background dimming
//!
//! Dims everything rendered so far and fills the content box, so widgets
//! drawn afterwards sit on top of a visibly inactive background.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::{Clear, Widget},
    Frame,
};

/// Overlay appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Dim factor for background (0.0 = no dim, 1.0 = black)
    pub dim_factor: f32,
    /// Background color for the content box (None = cleared only)
    pub bg_color: Option<Color>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            dim_factor: 0.5,
            bg_color: None,
        }
    }
}

impl OverlayStyle {
    /// Create a style with a content background color
    pub fn with_bg(bg_color: Color) -> Self {
        Self {
            bg_color: Some(bg_color),
            ..Default::default()
        }
    }
}

/// Dim the whole frame and prepare `content` for drawing on top
///
/// Call this after the background has been rendered.
pub fn render_overlay(frame: &mut Frame, content: Rect, style: &OverlayStyle) {
    dim_buffer(frame.buffer_mut(), style.dim_factor);
    frame.render_widget(Clear, content);
    if let Some(bg) = style.bg_color {
        frame.render_widget(BgFill(bg), content);
    }
}

/// Calculate a centered rectangle within an area, keeping a 1-cell margin
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn dim_buffer(buffer: &mut Buffer, factor: f32) {
    let scale = 1.0 - factor.clamp(0.0, 1.0);
    for cell in buffer.content.iter_mut() {
        cell.fg = match cell.fg {
            Color::Rgb(r, g, b) => scale_rgb(r, g, b, scale),
            _ => Color::DarkGray,
        };
        if let Color::Rgb(r, g, b) = cell.bg {
            cell.bg = scale_rgb(r, g, b, scale);
        }
    }
}

fn scale_rgb(r: u8, g: u8, b: u8, scale: f32) -> Color {
    let ch = |c: u8| (c as f32 * scale).round() as u8;
    Color::Rgb(ch(r), ch(g), ch(b))
}

struct BgFill(Color);

impl Widget for BgFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, ratatui::style::Style::default().bg(self.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platter_core::testing::RenderHarness;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_overlay_dims_background() {
        let mut harness = RenderHarness::new(20, 5);
        let buffer = harness.render(|frame| {
            frame.render_widget(Paragraph::new("menu"), frame.area());
            let content = centered_rect(6, 1, frame.area());
            render_overlay(frame, content, &OverlayStyle::default());
        });

        assert_eq!(buffer[(0, 0)].fg, Color::DarkGray);
        assert_eq!(buffer[(0, 0)].symbol(), "m");
    }

    #[test]
    fn test_overlay_clears_content() {
        let mut harness = RenderHarness::new(20, 5);
        let buffer = harness.render(|frame| {
            frame.render_widget(Paragraph::new("x".repeat(100)), frame.area());
            render_overlay(
                frame,
                Rect::new(2, 0, 4, 1),
                &OverlayStyle::with_bg(Color::Rgb(30, 30, 40)),
            );
        });

        assert_eq!(buffer[(2, 0)].symbol(), " ");
        assert_eq!(buffer[(2, 0)].bg, Color::Rgb(30, 30, 40));
        assert_eq!(buffer[(1, 0)].symbol(), "x");
    }

    #[test]
    fn test_centered_rect() {
        let centered = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(centered, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let centered = centered_rect(100, 50, Rect::new(0, 0, 30, 10));
        assert!(centered.width <= 28);
        assert!(centered.height <= 8);
    }
}
