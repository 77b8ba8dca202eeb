//! Component trait for storefront widgets

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A widget that renders from props and reports changes as actions
///
/// Widgets follow these rules:
/// 1. Props carry everything the host owns (controlled values, flags, observers)
/// 2. `handle_event` returns actions built by the observers in props, never
///    touching host state itself
/// 3. Transient presentation state (open/closed, cursor, cycle index, the
///    last rendered boundary) lives in `&mut self`
///
/// Observers are optional `fn` action constructors. An absent observer is
/// skipped, it never changes whether the others fire.
///
/// # Example
///
/// ```ignore
/// use platter::{Component, EventKind, Frame, Rect};
///
/// struct Badge { area: Option<Rect> }
///
/// struct BadgeProps {
///     count: u32,
///     on_click: Option<fn() -> AppAction>,
/// }
///
/// impl Component<AppAction> for Badge {
///     type Props<'a> = BadgeProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         let hit = event.pointer_down().zip(self.area).is_some_and(|(p, a)| a.contains(p));
///         if hit { props.on_click.map(|f| f()) } else { None }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         self.area = Some(area);
///         frame.render_widget(Paragraph::new(props.count.to_string()), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the widget (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `Vec<A>` / [`FanOut`](crate::FanOut) - several, in observer order
    ///
    /// Default implementation returns no actions (render-only widgets).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the widget to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
