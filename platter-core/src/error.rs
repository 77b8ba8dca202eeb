//! Error type for primitive construction and scheduling

use thiserror::Error;

/// Errors raised while building or activating interaction primitives
///
/// Runtime interaction (clicks, keys, ticks) never fails; only setup does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A cycle was built over an empty sequence
    #[error("a cycle needs at least one item")]
    EmptyCycle,

    /// An interval was started with a zero period
    #[error("interval period must be greater than zero")]
    ZeroPeriod,

    /// An interval was started outside a tokio runtime
    #[error("no tokio runtime available to schedule `{0}`")]
    NoRuntime(&'static str),
}

/// Result alias for platter-core operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
