//! On/off switch with controlled or uncontrolled state

use platter_core::{ChangeEvent, Component, ControlledValue, EventKind, FanOut};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TRACK_ON: &str = "━━●";
const TRACK_OFF: &str = "●━━";

/// Props for Switch
pub struct SwitchProps<'a, A> {
    pub label: &'a str,
    /// Host-supplied state; adopted only by controlled switches
    pub checked: Option<bool>,
    pub is_focused: bool,
    /// Ignore input and render dimmed
    pub disabled: bool,
    /// Low-level observer, notified first
    pub on_change: Option<fn(ChangeEvent<bool>) -> A>,
    /// Semantic observer, notified second
    pub on_checked_change: Option<fn(bool) -> A>,
}

/// A toggle rendered as a small track with a knob
#[derive(Debug, Default)]
pub struct Switch {
    value: ControlledValue<bool>,
    area: Option<Rect>,
}

impl Switch {
    /// Switch whose state is owned by the host
    pub fn controlled(checked: bool) -> Self {
        Self {
            value: ControlledValue::controlled(checked),
            area: None,
        }
    }

    /// Switch that owns its state, starting at `default_checked`
    pub fn uncontrolled(default_checked: bool) -> Self {
        Self {
            value: ControlledValue::uncontrolled(default_checked),
            area: None,
        }
    }

    /// State currently shown
    pub fn is_checked(&self) -> bool {
        *self.value.get()
    }

    fn hit(&self, position: Position) -> bool {
        self.area.is_some_and(|r| r.contains(position))
    }
}

impl<A> Component<A> for Switch {
    type Props<'a> = SwitchProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.value.sync(props.checked.as_ref());
        if props.disabled {
            return FanOut::new();
        }

        let toggled = (props.is_focused && event.is_activation_key())
            || event.pointer_down().is_some_and(|p| self.hit(p));
        if !toggled {
            return FanOut::new();
        }

        let next = !self.is_checked();
        let previous = self.value.accept(next);
        FanOut::new()
            .notify(
                props.on_change,
                ChangeEvent {
                    previous,
                    value: next,
                    trigger: event.clone(),
                },
            )
            .notify(props.on_checked_change, next)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.value.sync(props.checked.as_ref());

        let (track, track_style) = if self.is_checked() {
            (TRACK_ON, Style::default().fg(Color::Green))
        } else {
            (TRACK_OFF, Style::default().fg(Color::DarkGray))
        };
        let mut label_style = Style::default();
        if props.is_focused {
            label_style = label_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }

        let line = Line::from(vec![
            Span::styled(track, track_style),
            Span::raw(" "),
            Span::styled(props.label, label_style),
        ]);
        let width = (line.width() as u16).min(area.width);
        let mut paragraph = Paragraph::new(line);
        if props.disabled {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }

        let switch_area = Rect {
            width,
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(paragraph, switch_area);
        self.area = Some(switch_area);
    }
}
