//! Action trait for messages widgets hand back to their host

use std::fmt::Debug;

/// A message produced by a widget observer or a scheduled interval
///
/// Widgets never reach into host state. Every observer is an action
/// constructor, and the host loop decides what the action means.
///
/// - Clone + Debug: actions are logged by the store middleware
/// - Send + 'static: intervals send them across the tokio channel
pub trait Action: Clone + Debug + Send + 'static {
    /// Short name used in log records
    fn name(&self) -> &'static str;
}
