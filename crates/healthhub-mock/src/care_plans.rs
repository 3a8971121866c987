//! The condition selector: free-text condition in, one of four plan
//! templates out.

use chrono::{Duration, NaiveDate};

use healthhub_contracts::care_plan::{CarePlanRequest, PlanKind, PlanTemplate};
use healthhub_core::traits::PlanSelector;

use crate::mock_data::template_body;

/// Pick a template by case-insensitive substring match on the condition.
///
/// Checked in order: "diabetes", "hypertension", "asthma". The first match
/// wins; anything else gets the general template.
pub fn select_kind(condition: &str) -> PlanKind {
    let condition = condition.to_lowercase();
    if condition.contains("diabetes") {
        PlanKind::Diabetes
    } else if condition.contains("hypertension") {
        PlanKind::Hypertension
    } else if condition.contains("asthma") {
        PlanKind::Asthma
    } else {
        PlanKind::General
    }
}

/// Fill the selected template with the request's patient details.
///
/// The plan runs from `start` for the template's fixed number of days.
pub fn build_plan(request: &CarePlanRequest, start: NaiveDate) -> PlanTemplate {
    let kind = select_kind(&request.condition);
    let body = template_body(kind);

    PlanTemplate {
        kind,
        title: kind.title().to_string(),
        patient_name: request.patient_name.clone(),
        patient_age: request.patient_age.clone(),
        condition: body
            .condition_label
            .map(str::to_string)
            .unwrap_or_else(|| request.condition.clone()),
        start_date: start,
        end_date: start + Duration::days(kind.duration_days()),
        medications: body.medications(),
        activities: body.activities(),
        diet: body.diet(),
        follow_up: body.follow_up.to_string(),
    }
}

/// `PlanSelector` over the literal templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionPlanSelector;

impl PlanSelector for ConditionPlanSelector {
    fn select(&self, request: &CarePlanRequest, start: NaiveDate) -> PlanTemplate {
        build_plan(request, start)
    }
}
