//! Terminal event plumbing for the host loop

use std::time::Duration;

use crossterm::event::{self, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::event::EventKind;

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

/// Events the widgets react to; pointer motion, releases and scrolling are
/// dropped at the source so they never wake the host loop
fn forward(event: event::Event) -> Option<RawEvent> {
    match event {
        event::Event::Key(key) => Some(RawEvent::Key(key)),
        event::Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(RawEvent::Mouse(mouse)),
            _ => None,
        },
        event::Event::Resize(w, h) => Some(RawEvent::Resize(w, h)),
        _ => None,
    }
}

/// Spawn the terminal event poller
///
/// Every `loop_sleep` the task drains up to a batch of pending crossterm
/// events, waiting at most `poll_timeout` for each, and forwards the ones
/// widgets use on `tx`. It stops when `cancel_token` is cancelled or the
/// receiver is gone.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    const BATCH: usize = 20;

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    // Leave nothing queued for the shell once the UI is gone
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    info!("Event poller stopped");
                    return;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    for _ in 0..BATCH {
                        if !event::poll(poll_timeout).unwrap_or(false) {
                            break;
                        }
                        let Some(raw) = event::read().ok().and_then(forward) else {
                            continue;
                        };
                        if tx.send(raw).is_err() {
                            debug!("Host loop gone, stopping event poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Process a raw event into an EventKind
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => EventKind::Mouse(mouse),
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}
