//! Rotating hero tagline
//!
//! Shows one tagline at a time and moves to the next one on a fixed period,
//! looping forever while active. The rotation timer is an
//! [`Interval`] owned by the rotator: it is created by `activate`, stopped
//! by `deactivate`, and stopped automatically when the rotator is dropped.

use std::num::NonZeroUsize;
use std::time::Duration;

use platter_core::{Action, Component, Cycle, Interval, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;
use tracing::trace;

/// Storefront hero taglines
pub const DEFAULT_TAGLINES: [&str; 5] = [
    "Craving Something Delicious? 🍕",
    "Order Happiness in 30 Minutes ⚡",
    "Bringing Flavor to Your Doorstep 🚀",
    "Your Favorite Food, Delivered Fast 🎯",
    "Taste the Best in Town 🌟",
];

const DEFAULT_COUNT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_TAGLINES.len()) {
    Some(n) => n,
    None => panic!("default taglines are empty"),
};

/// Time each tagline stays on screen
pub const DEFAULT_ROTATION: Duration = Duration::from_millis(4000);

/// Props for TaglineRotator
#[derive(Debug, Clone, Copy)]
pub struct TaglineProps {
    pub style: Style,
}

impl Default for TaglineProps {
    fn default() -> Self {
        Self {
            style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Cycles through taglines on a timer
#[derive(Debug)]
pub struct TaglineRotator {
    taglines: Vec<String>,
    cycle: Cycle,
    period: Duration,
    ticker: Option<Interval>,
}

impl TaglineRotator {
    /// Create a rotator over `taglines`, starting at the first one
    ///
    /// An empty list is rejected with [`platter_core::Error::EmptyCycle`].
    pub fn new<I, S>(taglines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let taglines: Vec<String> = taglines.into_iter().map(Into::into).collect();
        let cycle = Cycle::new(taglines.len())?;
        Ok(Self {
            taglines,
            cycle,
            period: DEFAULT_ROTATION,
            ticker: None,
        })
    }

    /// Rotator over the storefront's default taglines
    pub fn storefront() -> Self {
        Self {
            taglines: DEFAULT_TAGLINES.iter().map(|s| s.to_string()).collect(),
            cycle: Cycle::from_len(DEFAULT_COUNT),
            period: DEFAULT_ROTATION,
            ticker: None,
        }
    }

    /// Set the rotation period (takes effect on the next `activate`)
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Start rotating: `on_tick()` is sent on `action_tx` once per period
    ///
    /// The host routes that action back to [`tick`](Self::tick). Activating
    /// an active rotator restarts its timer.
    pub fn activate<A: Action>(
        &mut self,
        action_tx: mpsc::UnboundedSender<A>,
        on_tick: fn() -> A,
    ) -> Result<()> {
        self.ticker = None;
        self.ticker = Some(Interval::start("tagline", self.period, action_tx, on_tick)?);
        Ok(())
    }

    /// Stop rotating. The current tagline stays on screen.
    pub fn deactivate(&mut self) {
        self.ticker = None;
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Advance to the next tagline
    ///
    /// Ticks that arrive while inactive are dropped. Returns `true` if the
    /// visible tagline changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            trace!("Ignoring tagline tick while inactive");
            return false;
        }
        self.cycle.advance()
    }

    /// Index of the visible tagline; also the transition key for animation
    pub fn index(&self) -> usize {
        self.cycle.index()
    }

    /// The visible tagline
    pub fn current(&self) -> &str {
        &self.taglines[self.cycle.index()]
    }

    pub fn taglines(&self) -> &[String] {
        &self.taglines
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl<A> Component<A> for TaglineRotator {
    type Props<'a> = TaglineProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [_, line, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let paragraph = Paragraph::new(self.current())
            .alignment(Alignment::Center)
            .style(props.style);
        frame.render_widget(paragraph, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platter_core::{testing::RenderHarness, Error};

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        TaglineTick,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "TaglineTick"
        }
    }

    #[test]
    fn test_empty_taglines_rejected() {
        let result = TaglineRotator::new(Vec::<String>::new());
        assert_eq!(result.unwrap_err(), Error::EmptyCycle);
    }

    #[test]
    fn test_starts_at_first_tagline() {
        let rotator = TaglineRotator::storefront();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), DEFAULT_TAGLINES[0]);
        assert_eq!(rotator.period(), Duration::from_millis(4000));
    }

    #[test]
    fn test_tick_ignored_before_activation() {
        let mut rotator = TaglineRotator::new(["a", "b"]).unwrap();
        assert!(!rotator.tick());
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_activate_without_runtime_fails() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut rotator = TaglineRotator::new(["a", "b"]).unwrap();
        assert!(rotator.activate(tx, || TestAction::TaglineTick).is_err());
        assert!(!rotator.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_index_is_ticks_mod_len() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut rotator = TaglineRotator::new(["a", "b", "c"]).unwrap();
        rotator.activate(tx, || TestAction::TaglineTick).unwrap();

        for k in 1..=7 {
            let action = rx.recv().await.expect("tick");
            assert_eq!(action, TestAction::TaglineTick);
            rotator.tick();
            assert_eq!(rotator.index(), k % 3);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_tagline_stays_put() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut rotator = TaglineRotator::new(["only"]).unwrap();
        rotator.activate(tx, || TestAction::TaglineTick).unwrap();

        for _ in 0..5 {
            rx.recv().await.expect("tick");
            assert!(!rotator.tick());
            assert_eq!(rotator.index(), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_change_after_deactivate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut rotator = TaglineRotator::new(["a", "b", "c"])
            .unwrap()
            .with_period(Duration::from_millis(100));
        rotator.activate(tx, || TestAction::TaglineTick).unwrap();

        rx.recv().await.expect("tick");
        rotator.tick();
        assert_eq!(rotator.index(), 1);

        rotator.deactivate();
        tokio::time::sleep(Duration::from_secs(5)).await;

        // Any tick still queued must not move the index
        while let Ok(TestAction::TaglineTick) = rx.try_recv() {
            rotator.tick();
        }
        assert!(!rotator.tick());
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn test_render_shows_only_current() {
        let mut harness = RenderHarness::new(50, 3);
        let mut rotator = TaglineRotator::storefront();

        let output = harness.render_to_string_plain(|frame| {
            Component::<TestAction>::render(&mut rotator, frame, frame.area(), TaglineProps::default());
        });

        assert!(output.contains("Craving Something Delicious?"));
        assert!(!output.contains("Order Happiness"));
    }
}
