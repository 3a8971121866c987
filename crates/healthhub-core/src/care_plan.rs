//! Care plans page state.
//!
//! The desk holds the plan currently on display. A generation request is
//! validated before anything changes; a rejected request leaves the desk
//! exactly as it was.

use tracing::{debug, warn};

use healthhub_contracts::{
    care_plan::{CarePlanRequest, PlanStatus, PlanTemplate},
    error::{HealthHubError, HealthHubResult},
};

/// Shown when the form lacks a patient name or condition.
pub const MISSING_FIELDS: &str = "Please provide at least patient name and condition.";

/// Check the two required form fields. Only a truly empty field is missing;
/// whitespace is accepted as typed.
pub fn validate(request: &CarePlanRequest) -> HealthHubResult<()> {
    if request.patient_name.is_empty() || request.condition.is_empty() {
        return Err(HealthHubError::Validation { reason: MISSING_FIELDS.to_string() });
    }
    Ok(())
}

#[derive(Default)]
pub struct CarePlanDesk {
    generating: bool,
    current: Option<(PlanTemplate, PlanStatus)>,
}

impl CarePlanDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn plan(&self) -> Option<&PlanTemplate> {
        self.current.as_ref().map(|(plan, _)| plan)
    }

    pub fn status(&self) -> Option<PlanStatus> {
        self.current.as_ref().map(|(_, status)| *status)
    }

    /// Accept a generation request. Refused while another is pending.
    pub fn begin(&mut self, request: &CarePlanRequest) -> HealthHubResult<()> {
        if self.generating {
            return Err(HealthHubError::RequestInFlight {
                operation: "care plan generation".to_string(),
            });
        }
        if let Err(e) = validate(request) {
            warn!(error = %e, "care plan request rejected");
            return Err(e);
        }

        debug!(condition = %request.condition, "care plan generation started");
        self.generating = true;
        Ok(())
    }

    /// Display a freshly generated plan as a draft, replacing any previous one.
    pub fn finish(&mut self, plan: PlanTemplate) -> HealthHubResult<&PlanTemplate> {
        if !self.generating {
            return Err(HealthHubError::NothingToAct { action: "finish".to_string() });
        }
        self.generating = false;
        let (plan, _) = self.current.insert((plan, PlanStatus::Draft));
        Ok(plan)
    }

    /// Mark the displayed plan as saved. A finalized plan cannot go back.
    pub fn save(&mut self) -> HealthHubResult<&PlanTemplate> {
        self.advance("save", PlanStatus::Saved)
    }

    /// Mark the displayed plan as finalized and sent to the patient.
    pub fn finalize(&mut self) -> HealthHubResult<&PlanTemplate> {
        self.advance("finalize", PlanStatus::Finalized)
    }

    fn advance(&mut self, action: &str, to: PlanStatus) -> HealthHubResult<&PlanTemplate> {
        let (plan, status) = self
            .current
            .as_mut()
            .ok_or_else(|| HealthHubError::NothingToAct { action: action.to_string() })?;

        if *status == PlanStatus::Finalized {
            return Err(HealthHubError::IllegalTransition {
                from: "finalized".to_string(),
                action: action.to_string(),
            });
        }
        *status = to;
        Ok(plan)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use healthhub_contracts::{
        care_plan::{CarePlanRequest, PlanKind, PlanStatus, PlanTemplate},
        error::HealthHubError,
    };

    use super::{validate, CarePlanDesk, MISSING_FIELDS};

    fn plan(title: &str) -> PlanTemplate {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        PlanTemplate {
            kind: PlanKind::General,
            title: title.to_string(),
            patient_name: "Ada".to_string(),
            patient_age: "40".to_string(),
            condition: "Other".to_string(),
            start_date: start,
            end_date: start,
            medications: vec![],
            activities: vec![],
            diet: vec![],
            follow_up: String::new(),
        }
    }

    #[test]
    fn test_validation_requires_name_and_condition() {
        assert!(validate(&CarePlanRequest::new("Ada", "", "Asthma")).is_ok());
        // Age is never validated.
        assert!(validate(&CarePlanRequest::new("Ada", "not a number", "Asthma")).is_ok());

        for request in [
            CarePlanRequest::new("", "40", "Asthma"),
            CarePlanRequest::new("Ada", "40", ""),
            CarePlanRequest::default(),
        ] {
            assert_eq!(
                validate(&request),
                Err(HealthHubError::Validation { reason: MISSING_FIELDS.to_string() })
            );
        }
    }

    #[test]
    fn test_whitespace_fields_are_not_empty() {
        assert!(validate(&CarePlanRequest::new(" ", "40", "asthma")).is_ok());
        assert!(validate(&CarePlanRequest::new("Ada", "40", "   ")).is_ok());

        let mut desk = CarePlanDesk::new();
        desk.begin(&CarePlanRequest::new(" ", "40", "asthma")).unwrap();
        assert!(desk.is_generating());
    }

    /// A rejected request must not touch the displayed plan or start generating.
    #[test]
    fn test_rejected_request_leaves_desk_untouched() {
        let mut desk = CarePlanDesk::new();
        desk.begin(&CarePlanRequest::new("Ada", "40", "Asthma")).unwrap();
        desk.finish(plan("existing")).unwrap();

        let err = desk.begin(&CarePlanRequest::new("", "", "")).unwrap_err();
        assert!(matches!(err, HealthHubError::Validation { .. }));
        assert!(!desk.is_generating());
        assert_eq!(desk.plan().map(|p| p.title.as_str()), Some("existing"));
        assert_eq!(desk.status(), Some(PlanStatus::Draft));
    }

    #[test]
    fn test_begin_while_generating_is_refused() {
        let mut desk = CarePlanDesk::new();
        let request = CarePlanRequest::new("Ada", "40", "Asthma");
        desk.begin(&request).unwrap();
        assert!(matches!(
            desk.begin(&request),
            Err(HealthHubError::RequestInFlight { .. })
        ));
    }

    #[test]
    fn test_finish_without_begin_fails() {
        let mut desk = CarePlanDesk::new();
        assert!(matches!(
            desk.finish(plan("x")),
            Err(HealthHubError::NothingToAct { .. })
        ));
        assert!(desk.plan().is_none());
    }

    #[test]
    fn test_new_plan_replaces_previous() {
        let mut desk = CarePlanDesk::new();
        let request = CarePlanRequest::new("Ada", "40", "Asthma");

        desk.begin(&request).unwrap();
        desk.finish(plan("first")).unwrap();
        desk.save().unwrap();

        desk.begin(&request).unwrap();
        desk.finish(plan("second")).unwrap();
        assert_eq!(desk.plan().unwrap().title, "second");
        assert_eq!(desk.status(), Some(PlanStatus::Draft));
    }

    #[test]
    fn test_save_and_finalize() {
        let mut desk = CarePlanDesk::new();
        assert!(matches!(desk.save(), Err(HealthHubError::NothingToAct { .. })));

        desk.begin(&CarePlanRequest::new("Ada", "40", "Asthma")).unwrap();
        desk.finish(plan("p")).unwrap();

        desk.save().unwrap();
        assert_eq!(desk.status(), Some(PlanStatus::Saved));

        desk.finalize().unwrap();
        assert_eq!(desk.status(), Some(PlanStatus::Finalized));

        assert!(matches!(
            desk.save(),
            Err(HealthHubError::IllegalTransition { .. })
        ));
    }
}
