//! Dashboard page: metric cards, performance tab, models list, and the
//! recent-activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::info;

use healthhub_activity::{ActivityFeed, InMemoryActivityLog};
use healthhub_contracts::{
    dashboard::{DashboardMetrics, PerformanceSnapshot},
    diagnostic::DiagnosticModel,
    timing::Timings,
};

use crate::mock_data::{dashboard_metrics, diagnostic_models, performance};

/// Number of feed entries shown on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Wait out the simulated load, then return the fixed counters.
pub async fn load_metrics(timings: &Timings) -> DashboardMetrics {
    sleep(timings.dashboard_load_delay()).await;
    let metrics = dashboard_metrics();
    info!(
        diagnostics = metrics.diagnostics,
        queries = metrics.queries,
        care_plans = metrics.care_plans,
        "dashboard metrics loaded"
    );
    metrics
}

/// One row of the recent-activity list as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub title: String,
    pub description: String,
    pub age: String,
}

/// Everything the dashboard page shows once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub metrics: DashboardMetrics,
    pub performance: PerformanceSnapshot,
    pub models: Vec<DiagnosticModel>,
    pub recent_activity: Vec<ActivityRow>,
    /// The whole feed as of load time, for export.
    pub activity_feed: ActivityFeed,
}

/// Load the metrics and assemble the page against `activity` as of `now`.
pub async fn load_view(timings: &Timings, activity: &InMemoryActivityLog, now: DateTime<Utc>) -> DashboardView {
    let metrics = load_metrics(timings).await;
    let recent_activity = activity
        .recent(RECENT_ACTIVITY_LIMIT)
        .into_iter()
        .map(|event| ActivityRow {
            age: event.age(now),
            title: event.title,
            description: event.description,
        })
        .collect();

    DashboardView {
        metrics,
        performance: performance(),
        models: diagnostic_models(),
        recent_activity,
        activity_feed: activity.export(now),
    }
}
