//! Personalized care plans: validate, generate, save, finalize.

use healthhub_contracts::{
    care_plan::{CarePlanRequest, PlanTemplate},
    error::{HealthHubError, HealthHubResult},
};
use healthhub_core::care_plan::CarePlanDesk;

use crate::{mock_data::active_plans, runtime::MockRuntime};

/// Requests used when none is given: one per template plus a rejected form.
pub fn sample_requests() -> Vec<CarePlanRequest> {
    vec![
        CarePlanRequest {
            allergies: "Penicillin".to_string(),
            current_medications: "Atorvastatin 20mg".to_string(),
            notes: "Prefers morning appointments".to_string(),
            ..CarePlanRequest::new("Maria Garcia", "52", "Type 2 Diabetes")
        },
        CarePlanRequest::new("James Wilson", "67", "Stage 1 hypertension"),
        CarePlanRequest::new("Emily Chen", "29", "Moderate persistent asthma"),
        CarePlanRequest::new("Alex Morgan", "45", "Lower back pain"),
        CarePlanRequest::new("", "38", "Asthma"),
    ]
}

/// The optional form fields that were filled in, labelled for display.
///
/// They are shown alongside the request but never influence template selection.
pub fn intake_details(request: &CarePlanRequest) -> Vec<(&'static str, &str)> {
    [
        ("Allergies", request.allergies.as_str()),
        ("Current medications", request.current_medications.as_str()),
        ("Notes", request.notes.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect()
}

/// Generate a plan for each request; the last generated plan is saved and
/// finalized. A rejected request prints the validation notice and moves on.
pub async fn run_scenario(runtime: &MockRuntime, requests: &[CarePlanRequest]) -> HealthHubResult<()> {
    println!("=== Personalized Care Plans ===");
    println!();

    println!("  Active plans:");
    for plan in active_plans() {
        println!(
            "    {} ({}, {}) [{}]",
            plan.title, plan.patient_name, plan.patient_age, plan.badge
        );
    }
    println!();

    let mut desk = CarePlanDesk::new();
    for request in requests {
        println!(
            "  Request: name='{}' age='{}' condition='{}'",
            request.patient_name, request.patient_age, request.condition
        );
        for (label, value) in intake_details(request) {
            println!("    {}: {}", label, value);
        }
        match runtime.executor.generate_plan(&mut desk, request).await {
            Ok(plan) => print_plan(&plan),
            Err(HealthHubError::Validation { reason }) => {
                println!("  Missing information: {}", reason);
                println!();
            }
            Err(e) => return Err(e),
        }
    }

    if desk.plan().is_some() {
        runtime.executor.save_plan(&mut desk)?;
        println!("  Plan saved:             {:?}", desk.status());
        runtime.executor.finalize_plan(&mut desk)?;
        println!("  Plan finalized:         {:?}", desk.status());
        println!();
    }

    Ok(())
}

fn print_plan(plan: &PlanTemplate) {
    println!("  {}", plan.title);
    println!("    Patient:   {} ({})", plan.patient_name, plan.patient_age);
    println!("    Condition: {}", plan.condition);
    println!("    Period:    {} to {}", plan.start_date, plan.end_date);
    println!("    Medications:");
    for m in &plan.medications {
        println!("      {} {} {}", m.name, m.dosage, m.frequency);
    }
    println!("    Activities:");
    for a in &plan.activities {
        println!("      {}: {} ({})", a.kind, a.frequency, a.details);
    }
    println!("    Diet:");
    for d in &plan.diet {
        println!("      - {}", d);
    }
    println!("    Follow-up: {}", plan.follow_up);
    println!();
}
