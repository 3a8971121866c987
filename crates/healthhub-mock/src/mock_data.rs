//! Literal tables behind the four HealthHub pages.
//!
//! All data in this module is hardcoded and fictional. Nothing here is ever
//! computed from input beyond picking a row; the selectors in `care_plans`,
//! `responder`, and `diagnostics` are thin lookups over these tables.

use chrono::{DateTime, Duration, Utc};

use healthhub_contracts::{
    care_plan::{ActivePlanSummary, Medication, PlanActivity, PlanKind},
    chat::ResponseTopic,
    dashboard::{ActivityKind, DashboardMetrics, NewActivity, PerformanceSnapshot},
    diagnostic::{DiagnosticModel, DiagnosticResult, RecentAnalysis, Region},
};

// ── Care plan templates ───────────────────────────────────────────────────────

/// The fixed body of one plan template, before patient details and dates.
pub struct TemplateBody {
    /// `None` echoes the condition the clinician entered.
    pub condition_label: Option<&'static str>,
    pub medications: &'static [(&'static str, &'static str, &'static str)],
    pub activities: &'static [(&'static str, &'static str, &'static str)],
    pub diet: &'static [&'static str],
    pub follow_up: &'static str,
}

impl TemplateBody {
    pub fn medications(&self) -> Vec<Medication> {
        self.medications
            .iter()
            .map(|(name, dosage, frequency)| Medication {
                name: name.to_string(),
                dosage: dosage.to_string(),
                frequency: frequency.to_string(),
            })
            .collect()
    }

    pub fn activities(&self) -> Vec<PlanActivity> {
        self.activities
            .iter()
            .map(|(kind, frequency, details)| PlanActivity {
                kind: kind.to_string(),
                frequency: frequency.to_string(),
                details: details.to_string(),
            })
            .collect()
    }

    pub fn diet(&self) -> Vec<String> {
        self.diet.iter().map(|s| s.to_string()).collect()
    }
}

static DIABETES: TemplateBody = TemplateBody {
    condition_label: Some("Type 2 Diabetes"),
    medications: &[
        ("Metformin", "500mg", "Twice daily with meals"),
        ("Glipizide", "5mg", "Once daily before breakfast"),
    ],
    activities: &[
        ("Blood Glucose Monitoring", "3 times daily", "Before meals"),
        ("Physical Activity", "30 minutes", "5 days per week, moderate intensity"),
        ("Foot Examination", "Daily", "Check for cuts, blisters, or redness"),
    ],
    diet: &[
        "Limit carbohydrates to 45-60g per meal",
        "Increase fiber intake with vegetables and whole grains",
        "Avoid sugary beverages and processed foods",
        "Stay hydrated with water throughout the day",
    ],
    follow_up: "Schedule appointment with endocrinologist in 4 weeks",
};

static HYPERTENSION: TemplateBody = TemplateBody {
    condition_label: Some("Hypertension"),
    medications: &[
        ("Lisinopril", "10mg", "Once daily"),
        ("Hydrochlorothiazide", "12.5mg", "Once daily in the morning"),
    ],
    activities: &[
        ("Blood Pressure Monitoring", "Twice daily", "Morning and evening"),
        ("Physical Activity", "30 minutes", "Most days of the week"),
        ("Stress Management", "Daily", "Meditation or deep breathing exercises"),
    ],
    diet: &[
        "Follow DASH diet (Dietary Approaches to Stop Hypertension)",
        "Limit sodium intake to less than 2,300mg per day",
        "Increase potassium-rich foods (bananas, potatoes, spinach)",
        "Limit alcohol consumption",
    ],
    follow_up: "Schedule appointment with cardiologist in 6 weeks",
};

static ASTHMA: TemplateBody = TemplateBody {
    condition_label: Some("Asthma"),
    medications: &[
        ("Albuterol Inhaler", "2 puffs", "As needed for symptoms"),
        ("Fluticasone Inhaler", "2 puffs", "Twice daily"),
    ],
    activities: &[
        ("Peak Flow Monitoring", "Daily", "Morning and evening"),
        ("Breathing Exercises", "10 minutes", "Twice daily"),
        ("Trigger Avoidance", "Ongoing", "Minimize exposure to known triggers"),
    ],
    diet: &[
        "Maintain a healthy weight",
        "Stay hydrated throughout the day",
        "Consider foods rich in antioxidants",
        "Avoid sulfites in food if sensitive",
    ],
    follow_up: "Schedule appointment with pulmonologist in 4 weeks",
};

static GENERAL: TemplateBody = TemplateBody {
    condition_label: None,
    medications: &[("As prescribed by physician", "", "")],
    activities: &[
        ("Physical Activity", "30 minutes", "Most days of the week"),
        ("Sleep", "7-8 hours", "Maintain consistent sleep schedule"),
    ],
    diet: &[
        "Balanced diet with plenty of fruits and vegetables",
        "Stay hydrated with water throughout the day",
        "Limit processed foods and added sugars",
    ],
    follow_up: "Schedule follow-up appointment in 4 weeks",
};

pub fn template_body(kind: PlanKind) -> &'static TemplateBody {
    match kind {
        PlanKind::Diabetes => &DIABETES,
        PlanKind::Hypertension => &HYPERTENSION,
        PlanKind::Asthma => &ASTHMA,
        PlanKind::General => &GENERAL,
    }
}

/// The "Active Plans" list on the care plans page.
pub fn active_plans() -> Vec<ActivePlanSummary> {
    [
        ("Diabetes Management Plan", "John Smith", 58, "Active"),
        ("Hypertension Management Plan", "Mary Johnson", 64, "Active"),
        ("Post-Surgery Recovery Plan", "Robert Davis", 42, "Review Needed"),
        ("Arthritis Management Plan", "Patricia Brown", 71, "Updated"),
    ]
    .into_iter()
    .map(|(title, patient, age, badge)| ActivePlanSummary {
        title: title.to_string(),
        patient_name: patient.to_string(),
        patient_age: age,
        badge: badge.to_string(),
    })
    .collect()
}

// ── Query assistant ───────────────────────────────────────────────────────────

pub const GREETING: &str = "Hello, I'm your AI health assistant. How can I help you today?";

/// Prompts offered as one-click questions under the chat box.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What medications am I currently taking?",
    "When is my next appointment scheduled?",
    "Can you explain my recent test results?",
    "I've been experiencing headaches and dizziness. What could this mean?",
];

/// Keyword groups in matching priority order.
pub const TOPIC_KEYWORDS: [(ResponseTopic, &[&str]); 4] = [
    (ResponseTopic::Medication, &["medication", "medicine"]),
    (ResponseTopic::Appointment, &["appointment", "schedule"]),
    (ResponseTopic::Results, &["result", "test"]),
    (ResponseTopic::Symptoms, &["symptom", "pain"]),
];

pub fn canned_response(topic: ResponseTopic) -> &'static str {
    match topic {
        ResponseTopic::Medication => {
            "Based on the information in your health record, your current medications include \
             Lisinopril (10mg daily) for blood pressure and Metformin (500mg twice daily) for type 2 \
             diabetes. Always take these medications as prescribed. If you're experiencing any side \
             effects, please consult with your healthcare provider before making any changes to \
             your regimen."
        }
        ResponseTopic::Appointment => {
            "Your next scheduled appointment is on Tuesday, June 15th at 2:30 PM with Dr. Sarah \
             Chen. Would you like me to help you reschedule or set up a new appointment?"
        }
        ResponseTopic::Results => {
            "Your recent lab results from May 5th show normal kidney and liver function. Your HbA1c \
             is 6.8%, which is slightly improved from your previous test but still above the target \
             range. Dr. Chen recommends continuing with your current treatment plan and will discuss \
             potential adjustments at your next appointment."
        }
        ResponseTopic::Symptoms => {
            "Based on the symptoms you've described, this could be related to several conditions. \
             While I can provide general information, I recommend scheduling a consultation with \
             your healthcare provider for a proper evaluation. Would you like me to help you \
             schedule an appointment?"
        }
        ResponseTopic::General => {
            "Thank you for your question. I'm here to help with any health-related inquiries you \
             might have. Could you provide more specific details about your question so I can give \
             you the most accurate information?"
        }
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// The one result every analysis produces.
pub fn diagnostic_result() -> DiagnosticResult {
    DiagnosticResult {
        diagnosis: "Potential early-stage pneumonia detected".to_string(),
        confidence: 87,
        regions: vec![
            Region { x: 120, y: 150, width: 60, height: 40, probability: 0.87 },
            Region { x: 200, y: 180, width: 30, height: 25, probability: 0.62 },
        ],
        recommendations: vec![
            "Additional CT scan recommended".to_string(),
            "Consult with pulmonologist".to_string(),
            "Follow-up in 2 weeks".to_string(),
        ],
    }
}

pub fn diagnostic_models() -> Vec<DiagnosticModel> {
    [
        ("ChestNet-X", "Specialized for chest X-ray analysis with 97% accuracy"),
        ("NeuroScan-MRI", "Brain MRI analysis with focus on tumor detection"),
        ("DermaScan-AI", "Dermatological image analysis for skin conditions"),
    ]
    .into_iter()
    .map(|(name, description)| DiagnosticModel {
        name: name.to_string(),
        description: description.to_string(),
        active: true,
    })
    .collect()
}

pub fn recent_analyses() -> Vec<RecentAnalysis> {
    vec![
        RecentAnalysis {
            title: "Chest X-ray (PA view)".to_string(),
            analyzed: "2 days ago".to_string(),
        },
        RecentAnalysis {
            title: "Brain MRI (T1 sequence)".to_string(),
            analyzed: "1 week ago".to_string(),
        },
    ]
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        diagnostics: 124,
        queries: 56,
        care_plans: 89,
        data_records: "1.2M".to_string(),
        alerts: 12,
        models: 8,
    }
}

pub fn performance() -> PerformanceSnapshot {
    PerformanceSnapshot {
        cpu_percent: 42,
        memory_percent: 68,
        storage_percent: 23,
        network_mbps: 12,
    }
}

/// The sample "recent activity" entries, oldest first, timed relative to `now`.
pub fn seed_activity(now: DateTime<Utc>) -> Vec<NewActivity> {
    [
        (
            ActivityKind::AlertRaised,
            "High priority alert triggered",
            "Potential adverse reaction detected for patient #3421",
            Duration::days(1),
        ),
        (
            ActivityKind::DatasetGenerated,
            "Synthetic dataset generated",
            "10,000 records created for research project #45",
            Duration::hours(3),
        ),
        (
            ActivityKind::CarePlanSaved,
            "Care plan updated",
            "Treatment adjustments for patient #8976",
            Duration::hours(1),
        ),
        (
            ActivityKind::QueryAnswered,
            "Patient query answered",
            "Response sent to medication inquiry from John D.",
            Duration::minutes(25),
        ),
        (
            ActivityKind::DiagnosticCompleted,
            "New diagnostic result uploaded",
            "MRI scan analysis completed for patient #12458",
            Duration::minutes(10),
        ),
    ]
    .into_iter()
    .map(|(kind, title, description, ago)| NewActivity::new(kind, title, description, now - ago))
    .collect()
}
