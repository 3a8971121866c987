//! Runtime error types for the HealthHub page runtimes.
//!
//! All fallible operations return `HealthHubResult<T>`. The only failure a
//! user of the dashboard ever sees is `Validation`; the remaining
//! variants guard the page state machines against out-of-order calls.

use thiserror::Error;

/// The unified error type for the HealthHub runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HealthHubError {
    /// Required form input is missing. Blocks the action without side effects.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// A simulated request is still pending on this page.
    #[error("{operation} is already in flight")]
    RequestInFlight { operation: String },

    /// A page state machine was asked to do something its current state forbids.
    #[error("cannot {action} from state '{from}'")]
    IllegalTransition { from: String, action: String },

    /// A timer callback belonging to a run that was reset fired late.
    #[error("stale pipeline run {stale} (current run is {current})")]
    StaleRun { current: u64, stale: u64 },

    /// The action needs a subject (a plan, a pending query) that does not exist.
    #[error("nothing to {action}")]
    NothingToAct { action: String },

    /// A settings value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The activity feed could not record an event.
    #[error("activity write failed: {reason}")]
    ActivityWriteFailed { reason: String },

    /// A page or feed export could not be rendered.
    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}

/// Convenience alias used throughout the HealthHub crates.
pub type HealthHubResult<T> = Result<T, HealthHubError>;
