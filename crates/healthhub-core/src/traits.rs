//! Seam traits for the HealthHub page runtimes.
//!
//! These traits mark where a real backend would plug in:
//!
//! - `Responder`: answers a query assistant message
//! - `PlanSelector`: turns a care plan request into a plan
//! - `Analyzer`: produces a diagnostic result for an uploaded image
//! - `Clock`: supplies "now" and "today"
//! - `ActivitySink`: records completed operations for the dashboard feed
//!
//! The reference implementations in `healthhub-mock` are pure lookups over
//! literal tables. Nothing here performs I/O.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use healthhub_contracts::{
    care_plan::{CarePlanRequest, PlanTemplate},
    dashboard::NewActivity,
    diagnostic::{DiagnosticResult, UploadedImage},
    error::HealthHubResult,
};

/// Produces the assistant's reply to one user query.
pub trait Responder: Send + Sync {
    /// Must be deterministic for a given query.
    fn respond(&self, query: &str) -> String;
}

/// Builds a care plan for a validated request.
pub trait PlanSelector: Send + Sync {
    /// `start` becomes the plan's start date; the end date is derived from it.
    fn select(&self, request: &CarePlanRequest, start: NaiveDate) -> PlanTemplate;
}

/// Analyses an uploaded image.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, image: &UploadedImage) -> DiagnosticResult;
}

/// Source of wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Append-only sink for completed operations.
///
/// A failed write is returned to the caller; the operation that produced the
/// activity has already completed by then.
pub trait ActivitySink: Send + Sync {
    fn record(&self, activity: NewActivity) -> HealthHubResult<()>;
}

impl<T: ActivitySink + ?Sized> ActivitySink for Arc<T> {
    fn record(&self, activity: NewActivity) -> HealthHubResult<()> {
        (**self).record(activity)
    }
}
