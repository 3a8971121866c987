//! Wiring the mock seams into an `Executor` with a shared activity feed.

use std::sync::Arc;

use tracing::debug;

use healthhub_activity::InMemoryActivityLog;
use healthhub_config::Settings;
use healthhub_contracts::{error::HealthHubResult, timing::Timings};
use healthhub_core::{
    chat::ChatSession,
    clock::SystemClock,
    pipeline::DiagnosticPipeline,
    traits::Clock,
    Executor,
};

use crate::{
    care_plans::ConditionPlanSelector,
    diagnostics::CannedAnalyzer,
    mock_data::{seed_activity, GREETING},
    responder::KeywordResponder,
};

/// An executor over the literal tables plus the feed it records into.
pub struct MockRuntime {
    pub executor: Executor,
    pub activity: InMemoryActivityLog,
}

impl MockRuntime {
    /// Build a runtime from loaded settings using the system clock.
    pub fn from_settings(settings: &Settings, instant: bool) -> HealthHubResult<Self> {
        Self::with_clock(settings.effective_timings(instant), settings.seed_activity, SystemClock)
    }

    pub fn with_clock<C: Clock + 'static>(timings: Timings, seed: bool, clock: C) -> HealthHubResult<Self> {
        let activity = if seed {
            InMemoryActivityLog::seeded(seed_activity(clock.now()))?
        } else {
            InMemoryActivityLog::new()
        };
        debug!(seeded = activity.len(), "activity feed ready");

        let executor = Executor::new(
            Box::new(KeywordResponder),
            Box::new(ConditionPlanSelector),
            Box::new(CannedAnalyzer),
            Box::new(clock),
            Arc::new(activity.clone()),
            timings,
        );
        Ok(Self { executor, activity })
    }

    /// A fresh chat transcript opened with the assistant's greeting.
    pub fn new_chat(&self) -> ChatSession {
        ChatSession::new(GREETING, self.executor.clock().now())
    }

    /// A fresh diagnostics page using the configured progress step.
    pub fn new_pipeline(&self) -> DiagnosticPipeline {
        DiagnosticPipeline::new(self.executor.timings().progress_step)
    }
}
