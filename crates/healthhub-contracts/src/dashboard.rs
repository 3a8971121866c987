//! Dashboard page types and the activity feed vocabulary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline counters shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub diagnostics: u32,
    pub queries: u32,
    pub care_plans: u32,
    /// Pre-formatted, e.g. "1.2M".
    pub data_records: String,
    pub alerts: u32,
    pub models: u32,
}

/// Resource utilisation shown on the "Performance" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub cpu_percent: u8,
    pub memory_percent: u8,
    pub storage_percent: u8,
    pub network_mbps: u32,
}

/// What produced an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    DiagnosticCompleted,
    QueryAnswered,
    CarePlanGenerated,
    CarePlanSaved,
    CarePlanFinalized,
    DatasetGenerated,
    AlertRaised,
}

/// An activity about to be recorded. The feed assigns the sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub at: DateTime<Utc>,
}

impl NewActivity {
    pub fn new(
        kind: ActivityKind,
        title: impl Into<String>,
        description: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            at,
        }
    }
}
