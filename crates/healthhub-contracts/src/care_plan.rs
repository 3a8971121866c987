//! Care plan types.
//!
//! A `PlanTemplate` is never built field by field by callers: the condition
//! selector picks one of the four `PlanKind`s and fills in patient details and
//! dates. Field names serialize in camelCase to match the dashboard payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four fixed plan templates the condition selector can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanKind {
    Diabetes,
    Hypertension,
    Asthma,
    General,
}

impl PlanKind {
    /// All kinds in selector priority order, generic fallback last.
    pub const ALL: [PlanKind; 4] = [
        PlanKind::Diabetes,
        PlanKind::Hypertension,
        PlanKind::Asthma,
        PlanKind::General,
    ];

    /// Length of the plan in days, counted from the start date.
    pub fn duration_days(self) -> i64 {
        match self {
            PlanKind::Diabetes => 90,
            PlanKind::Hypertension => 60,
            PlanKind::Asthma => 45,
            PlanKind::General => 30,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PlanKind::Diabetes => "Diabetes Management Plan",
            PlanKind::Hypertension => "Hypertension Management Plan",
            PlanKind::Asthma => "Asthma Management Plan",
            PlanKind::General => "General Health Management Plan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanActivity {
    /// Serialized as `type` to match the dashboard payload.
    #[serde(rename = "type")]
    pub kind: String,
    pub frequency: String,
    pub details: String,
}

/// A fully populated care plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTemplate {
    pub kind: PlanKind,
    pub title: String,
    pub patient_name: String,
    pub patient_age: String,
    pub condition: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub medications: Vec<Medication>,
    pub activities: Vec<PlanActivity>,
    pub diet: Vec<String>,
    pub follow_up: String,
}

/// The care plan form as submitted.
///
/// Only `patient_name` and `condition` are validated. Age is free text and
/// the remaining fields are carried for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanRequest {
    pub patient_name: String,
    pub patient_age: String,
    pub condition: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub current_medications: String,
    #[serde(default)]
    pub notes: String,
}

impl CarePlanRequest {
    pub fn new(
        patient_name: impl Into<String>,
        patient_age: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            patient_age: patient_age.into(),
            condition: condition.into(),
            ..Self::default()
        }
    }
}

/// Lifecycle of the plan shown on the care plans page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    Draft,
    Saved,
    Finalized,
}

/// An entry in the "Active Plans" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlanSummary {
    pub title: String,
    pub patient_name: String,
    pub patient_age: u32,
    pub badge: String,
}
