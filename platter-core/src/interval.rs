//! Recurring action source with a scoped lifetime
//!
//! An [`Interval`] owns a tokio task that sends an action to the host loop
//! once per period. The task lives exactly as long as the `Interval` value:
//! dropping it (explicitly, on widget deactivation, or when the owning
//! widget is dropped) aborts the task, so a stopped widget never receives
//! another tick from it.
//!
//! # Example
//!
//! ```ignore
//! use platter_core::Interval;
//! use std::time::Duration;
//!
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//!
//! // Rotate the hero tagline every 4 seconds
//! let ticker = Interval::start("tagline", Duration::from_secs(4), action_tx, || Action::TaglineTick)?;
//!
//! // Stop on unmount
//! drop(ticker);
//! ```

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::Action;

/// A running interval. Stops when dropped.
#[must_use = "dropping an Interval stops it immediately"]
#[derive(Debug)]
pub struct Interval {
    handle: AbortHandle,
    label: &'static str,
    period: Duration,
}

impl Interval {
    /// Start sending `action_fn()` on `action_tx` every `period`.
    ///
    /// The first action is sent after one full period, not immediately.
    /// The task also ends on its own once the receiving side is gone.
    ///
    /// Fails with [`Error::ZeroPeriod`] for a zero period and with
    /// [`Error::NoRuntime`] when called outside a tokio runtime.
    pub fn start<A, F>(
        label: &'static str,
        period: Duration,
        action_tx: mpsc::UnboundedSender<A>,
        action_fn: F,
    ) -> Result<Self>
    where
        A: Action,
        F: Fn() -> A + Send + 'static,
    {
        if period.is_zero() {
            return Err(Error::ZeroPeriod);
        }
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime(label))?;

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Skip the first immediate tick
            interval.tick().await;

            loop {
                interval.tick().await;
                let action = action_fn();
                trace!(interval = label, action = action.name(), "Interval fired");
                if action_tx.send(action).is_err() {
                    debug!(interval = label, "Action channel closed, stopping interval");
                    break;
                }
            }
        });

        debug!(
            interval = label,
            period_ms = period.as_millis() as u64,
            "Interval started"
        );

        Ok(Self {
            handle: handle.abort_handle(),
            label,
            period,
        })
    }

    /// Label given at start, used in log records
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Time between two actions
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the underlying task has ended (channel closed or aborted)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the interval. Equivalent to dropping it.
    pub fn stop(self) {}
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(interval = self.label, "Interval stopped");
    }
}
