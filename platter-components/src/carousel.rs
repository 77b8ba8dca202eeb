//! Slide carousel with optional auto-play
//!
//! Navigation wraps in both directions; jumping through a dot indicator is
//! clamped to the last slide. Auto-play reuses [`Interval`] and only runs
//! when it is enabled and there is more than one slide.

use std::time::Duration;

use crossterm::event::KeyCode;
use platter_core::{Action, Component, Cycle, EventKind, FanOut, Interval, Result};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Default auto-play period
pub const DEFAULT_AUTOPLAY: Duration = Duration::from_millis(5000);

const PREV_GLYPH: &str = "‹";
const NEXT_GLYPH: &str = "›";
const DOT_ACTIVE: &str = "●";
const DOT_INACTIVE: &str = "○";

/// One carousel slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub detail: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Props for Carousel
pub struct CarouselProps<A> {
    /// Whether Left/Right keys navigate
    pub is_focused: bool,
    /// Observer for every index change
    pub on_change: Option<fn(usize) -> A>,
}

impl<A> Clone for CarouselProps<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for CarouselProps<A> {}

#[derive(Debug, Default)]
struct HitAreas {
    prev: Option<Rect>,
    next: Option<Rect>,
    dots: Vec<Rect>,
}

/// Horizontally paged slides
#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    cycle: Cycle,
    autoplay: bool,
    period: Duration,
    ticker: Option<Interval>,
    hits: HitAreas,
}

impl Carousel {
    /// Create a carousel positioned on the first slide, auto-play off
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        let cycle = Cycle::new(slides.len())?;
        Ok(Self {
            slides,
            cycle,
            autoplay: false,
            period: DEFAULT_AUTOPLAY,
            ticker: None,
            hits: HitAreas::default(),
        })
    }

    /// Enable or disable auto-play (applies on the next `activate`)
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Start auto-play if it is enabled and there is more than one slide
    ///
    /// Otherwise this is a no-op and no timer is scheduled.
    pub fn activate<A: Action>(
        &mut self,
        action_tx: mpsc::UnboundedSender<A>,
        on_tick: fn() -> A,
    ) -> Result<()> {
        self.ticker = None;
        if !self.autoplay || self.slides.len() < 2 {
            debug!(
                autoplay = self.autoplay,
                slides = self.slides.len(),
                "Carousel auto-play not scheduled"
            );
            return Ok(());
        }
        self.ticker = Some(Interval::start(
            "carousel",
            self.period,
            action_tx,
            on_tick,
        )?);
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.ticker = None;
    }

    /// Whether an auto-play timer is running
    pub fn is_playing(&self) -> bool {
        self.ticker.is_some()
    }

    /// Auto-play step, routed here by the host
    pub fn tick<A>(&mut self, on_change: Option<fn(usize) -> A>) -> FanOut<A> {
        if !self.is_playing() {
            trace!("Ignoring carousel tick while not playing");
            return FanOut::new();
        }
        let changed = self.cycle.advance();
        self.changed(changed, on_change)
    }

    pub fn next<A>(&mut self, on_change: Option<fn(usize) -> A>) -> FanOut<A> {
        let changed = self.cycle.advance();
        self.changed(changed, on_change)
    }

    pub fn prev<A>(&mut self, on_change: Option<fn(usize) -> A>) -> FanOut<A> {
        let changed = self.cycle.retreat();
        self.changed(changed, on_change)
    }

    /// Jump to `index`, clamped to the last slide
    pub fn go_to<A>(&mut self, index: usize, on_change: Option<fn(usize) -> A>) -> FanOut<A> {
        let changed = self.cycle.go_to(index);
        self.changed(changed, on_change)
    }

    pub fn index(&self) -> usize {
        self.cycle.index()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.cycle.index()]
    }

    fn changed<A>(&self, changed: bool, on_change: Option<fn(usize) -> A>) -> FanOut<A> {
        if changed {
            FanOut::new().notify(on_change, self.cycle.index())
        } else {
            FanOut::new()
        }
    }

    fn hit(&self, position: Position) -> Option<Nav> {
        if self.hits.prev.is_some_and(|r| r.contains(position)) {
            return Some(Nav::Prev);
        }
        if self.hits.next.is_some_and(|r| r.contains(position)) {
            return Some(Nav::Next);
        }
        self.hits
            .dots
            .iter()
            .position(|r| r.contains(position))
            .map(Nav::Dot)
    }
}

enum Nav {
    Prev,
    Next,
    Dot(usize),
}

impl<A> Component<A> for Carousel {
    type Props<'a> = CarouselProps<A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if let Some(position) = event.pointer_down() {
            return match self.hit(position) {
                Some(Nav::Prev) => self.prev(props.on_change),
                Some(Nav::Next) => self.next(props.on_change),
                Some(Nav::Dot(index)) => self.go_to(index, props.on_change),
                None => FanOut::new(),
            };
        }

        if !props.is_focused {
            return FanOut::new();
        }
        match event.key_press().map(|key| key.code) {
            Some(KeyCode::Left) => self.prev(props.on_change),
            Some(KeyCode::Right) => self.next(props.on_change),
            _ => FanOut::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.hits = HitAreas::default();

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let slide = self.current();
        let body = vec![
            Line::styled(
                slide.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(slide.detail.clone(), Style::default().fg(Color::Gray)),
        ];
        let body_height = (body.len() as u16).min(inner.height);
        let body_y = inner.y + inner.height.saturating_sub(body_height) / 2;
        let body_area = Rect::new(inner.x + 1, body_y, inner.width - 2, body_height);
        frame.render_widget(
            Paragraph::new(body).alignment(Alignment::Center),
            body_area,
        );

        if self.slides.len() < 2 {
            return;
        }

        let arrow_y = inner.y + inner.height / 2;
        let prev = Rect::new(inner.x, arrow_y, 1, 1);
        let next = Rect::new(inner.right() - 1, arrow_y, 1, 1);
        let arrow_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(PREV_GLYPH).style(arrow_style), prev);
        frame.render_widget(Paragraph::new(NEXT_GLYPH).style(arrow_style), next);
        self.hits.prev = Some(prev);
        self.hits.next = Some(next);

        // Dots sit on the last inner row, separated by one space
        let count = self.slides.len() as u16;
        let dots_width = count * 2 - 1;
        if dots_width > inner.width || inner.height < 3 {
            return;
        }
        let dots_y = inner.bottom() - 1;
        let dots_x = inner.x + (inner.width - dots_width) / 2;
        for i in 0..self.slides.len() {
            let rect = Rect::new(dots_x + i as u16 * 2, dots_y, 1, 1);
            let (glyph, style) = if i == self.cycle.index() {
                (DOT_ACTIVE, Style::default().fg(Color::White))
            } else {
                (DOT_INACTIVE, Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(Paragraph::new(glyph).style(style), rect);
            self.hits.dots.push(rect);
        }
    }
}
