//! The HealthHub executor: drives page state machines through their
//! simulated latencies.
//!
//! Each operation follows the same shape:
//!
//!   validate / claim page → sleep (fixed delay) → seam call → update page → record activity
//!
//! Page state is borrowed mutably for the whole operation, so two runs on the
//! same page instance cannot overlap. Nothing is cancellable: once started, an
//! operation runs to completion unless the page rejects a transition.

use std::sync::Arc;

use tokio::time::sleep;
use tracing::{debug, info};

use healthhub_contracts::{
    care_plan::{CarePlanRequest, PlanTemplate},
    chat::ChatMessage,
    dashboard::{ActivityKind, NewActivity},
    diagnostic::{DiagnosticResult, UploadState, UploadedImage},
    error::HealthHubResult,
    timing::Timings,
};

use crate::{
    care_plan::CarePlanDesk,
    chat::ChatSession,
    pipeline::DiagnosticPipeline,
    traits::{ActivitySink, Analyzer, Clock, PlanSelector, Responder},
};

/// Owns the seam implementations and the timing settings.
///
/// One executor can serve any number of pages; each page holds its own state.
pub struct Executor {
    responder: Box<dyn Responder>,
    selector: Box<dyn PlanSelector>,
    analyzer: Box<dyn Analyzer>,
    clock: Box<dyn Clock>,
    activity: Arc<dyn ActivitySink>,
    timings: Timings,
}

impl Executor {
    pub fn new(
        responder: Box<dyn Responder>,
        selector: Box<dyn PlanSelector>,
        analyzer: Box<dyn Analyzer>,
        clock: Box<dyn Clock>,
        activity: Arc<dyn ActivitySink>,
        timings: Timings,
    ) -> Self {
        Self { responder, selector, analyzer, clock, activity, timings }
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Upload `image`, wait out the analysis, and attach the result.
    ///
    /// # Pipeline
    ///
    /// 1. `start()`, which fails unless the page is idle
    /// 2. one `tick()` per `progress_tick` until the page reports `Analyzing`
    /// 3. sleep `analysis_delay`
    /// 4. `Analyzer::analyze()` and `complete()`
    /// 5. record a `DiagnosticCompleted` activity
    pub async fn run_diagnostics(
        &self,
        pipeline: &mut DiagnosticPipeline,
        image: UploadedImage,
    ) -> HealthHubResult<DiagnosticResult> {
        let ticket = pipeline.start(image.clone())?;

        loop {
            sleep(self.timings.progress_tick()).await;
            if pipeline.tick(ticket)? == UploadState::Analyzing {
                break;
            }
        }

        sleep(self.timings.analysis_delay()).await;
        let result = self.analyzer.analyze(&image);
        pipeline.complete(ticket, result.clone())?;

        self.activity.record(NewActivity::new(
            ActivityKind::DiagnosticCompleted,
            "New diagnostic result uploaded",
            format!("{} analysis completed: {}", image.file_name, result.diagnosis),
            self.clock.now(),
        ))?;

        Ok(result)
    }

    /// Send `text` to the assistant and wait for the reply.
    ///
    /// Whitespace-only text is a no-op and returns `Ok(None)` without waiting.
    pub async fn ask(&self, session: &mut ChatSession, text: &str) -> HealthHubResult<Option<ChatMessage>> {
        if session.submit(text, self.clock.now())?.is_none() {
            debug!("empty query ignored");
            return Ok(None);
        }

        sleep(self.timings.chat_reply_delay()).await;
        let reply = session.deliver(self.responder.as_ref(), self.clock.now())?.clone();

        info!(reply_chars = reply.content.len(), "query answered");
        self.activity.record(NewActivity::new(
            ActivityKind::QueryAnswered,
            "Patient query answered",
            format!("Response sent to inquiry \"{}\"", text.trim()),
            reply.timestamp,
        ))?;

        Ok(Some(reply))
    }

    /// Generate a care plan for `request` and put it on the desk.
    ///
    /// A request missing the patient name or condition fails immediately with
    /// `Validation` and leaves the desk untouched.
    pub async fn generate_plan(
        &self,
        desk: &mut CarePlanDesk,
        request: &CarePlanRequest,
    ) -> HealthHubResult<PlanTemplate> {
        desk.begin(request)?;

        sleep(self.timings.plan_generation_delay()).await;
        let plan = self.selector.select(request, self.clock.today());
        let plan = desk.finish(plan)?.clone();

        info!(
            title = %plan.title,
            start = %plan.start_date,
            end = %plan.end_date,
            "care plan generated"
        );
        self.activity.record(NewActivity::new(
            ActivityKind::CarePlanGenerated,
            "Care plan generated",
            format!("{} created for {}", plan.title, plan.patient_name),
            self.clock.now(),
        ))?;

        Ok(plan)
    }

    pub fn save_plan(&self, desk: &mut CarePlanDesk) -> HealthHubResult<()> {
        let plan = desk.save()?;
        let description = format!("{} saved for {}", plan.title, plan.patient_name);
        self.activity.record(NewActivity::new(
            ActivityKind::CarePlanSaved,
            "Care plan saved",
            description,
            self.clock.now(),
        ))
    }

    pub fn finalize_plan(&self, desk: &mut CarePlanDesk) -> HealthHubResult<()> {
        let plan = desk.finalize()?;
        let description = format!("{} finalized and sent to {}", plan.title, plan.patient_name);
        self.activity.record(NewActivity::new(
            ActivityKind::CarePlanFinalized,
            "Care plan finalized",
            description,
            self.clock.now(),
        ))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use chrono::{NaiveDate, TimeZone, Utc};
    use tokio::time::Instant;

    use healthhub_contracts::{
        care_plan::{CarePlanRequest, PlanKind, PlanStatus, PlanTemplate},
        chat::Role,
        dashboard::{ActivityKind, NewActivity},
        diagnostic::{DiagnosticResult, UploadState, UploadedImage},
        error::{HealthHubError, HealthHubResult},
        timing::Timings,
    };

    use crate::{
        care_plan::CarePlanDesk,
        chat::ChatSession,
        clock::FixedClock,
        pipeline::DiagnosticPipeline,
        traits::{ActivitySink, Analyzer, Clock, PlanSelector, Responder},
    };

    use super::Executor;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    struct MockResponder;

    impl Responder for MockResponder {
        fn respond(&self, query: &str) -> String {
            format!("re: {}", query)
        }
    }

    struct MockSelector;

    impl PlanSelector for MockSelector {
        fn select(&self, request: &CarePlanRequest, start: NaiveDate) -> PlanTemplate {
            PlanTemplate {
                kind: PlanKind::General,
                title: "Mock Plan".to_string(),
                patient_name: request.patient_name.clone(),
                patient_age: request.patient_age.clone(),
                condition: request.condition.clone(),
                start_date: start,
                end_date: start + chrono::Duration::days(30),
                medications: vec![],
                activities: vec![],
                diet: vec![],
                follow_up: String::new(),
            }
        }
    }

    /// An analyzer that counts calls and always returns the same finding.
    struct MockAnalyzer {
        calls: Arc<Mutex<u32>>,
    }

    impl Analyzer for MockAnalyzer {
        fn analyze(&self, _image: &UploadedImage) -> DiagnosticResult {
            *self.calls.lock().unwrap() += 1;
            DiagnosticResult {
                diagnosis: "mock finding".to_string(),
                confidence: 87,
                regions: vec![],
                recommendations: vec![],
            }
        }
    }

    #[derive(Default)]
    struct MockActivity {
        events: Mutex<Vec<NewActivity>>,
    }

    impl ActivitySink for MockActivity {
        fn record(&self, activity: NewActivity) -> HealthHubResult<()> {
            self.events.lock().unwrap().push(activity);
            Ok(())
        }
    }

    struct Harness {
        executor: Executor,
        activity: Arc<MockActivity>,
        analyzer_calls: Arc<Mutex<u32>>,
    }

    fn harness(timings: Timings) -> Harness {
        let activity = Arc::new(MockActivity::default());
        let analyzer_calls = Arc::new(Mutex::new(0));
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap());
        let executor = Executor::new(
            Box::new(MockResponder),
            Box::new(MockSelector),
            Box::new(MockAnalyzer { calls: analyzer_calls.clone() }),
            Box::new(clock),
            activity.clone(),
            timings,
        );
        Harness { executor, activity, analyzer_calls }
    }

    fn kinds(activity: &MockActivity) -> Vec<ActivityKind> {
        activity.events.lock().unwrap().iter().map(|e| e.kind).collect()
    }

    // ── Diagnostics ──────────────────────────────────────────────────────────

    /// Eleven 300 ms ticks plus the 3 s analysis: 6.3 s of timer time.
    #[tokio::test(start_paused = true)]
    async fn test_diagnostics_run_takes_fixed_time() {
        let h = harness(Timings::default());
        let mut pipeline = DiagnosticPipeline::new(10);

        let started = Instant::now();
        let result = h
            .executor
            .run_diagnostics(&mut pipeline, UploadedImage::default())
            .await
            .unwrap();
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_millis(6300), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(6400), "elapsed {:?}", elapsed);

        assert_eq!(result.diagnosis, "mock finding");
        assert_eq!(pipeline.state(), UploadState::Complete);
        assert_eq!(pipeline.progress(), 100);
        assert_eq!(*h.analyzer_calls.lock().unwrap(), 1);
        assert_eq!(kinds(&h.activity), vec![ActivityKind::DiagnosticCompleted]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_diagnostics_requires_idle_page() {
        let h = harness(Timings::instant());
        let mut pipeline = DiagnosticPipeline::default();
        h.executor
            .run_diagnostics(&mut pipeline, UploadedImage::default())
            .await
            .unwrap();

        // Complete pages must be reset before the next upload.
        let err = h
            .executor
            .run_diagnostics(&mut pipeline, UploadedImage::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HealthHubError::IllegalTransition { .. }));

        assert_eq!(*h.analyzer_calls.lock().unwrap(), 1);

        pipeline.reset();
        h.executor
            .run_diagnostics(&mut pipeline, UploadedImage::new("scan.png", 1024))
            .await
            .unwrap();
        assert_eq!(pipeline.snapshot().run, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_diagnostics_publishes_progress() {
        let h = harness(Timings::default());
        let mut pipeline = DiagnosticPipeline::default();
        let mut rx = pipeline.subscribe();

        let observer = tokio::spawn(async move {
            let mut seen = vec![];
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                seen.push(snapshot.state);
                if snapshot.state == UploadState::Complete {
                    break;
                }
            }
            seen
        });

        h.executor
            .run_diagnostics(&mut pipeline, UploadedImage::default())
            .await
            .unwrap();

        let seen = observer.await.unwrap();
        assert_eq!(seen.first(), Some(&UploadState::Uploading));
        assert_eq!(seen.last(), Some(&UploadState::Complete));
        assert!(seen.contains(&UploadState::Analyzing));
    }

    // ── Query assistant ──────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_ask_waits_then_replies() {
        let h = harness(Timings::default());
        let mut session = ChatSession::new("hi", h.executor.clock().now());

        let started = Instant::now();
        let reply = h.executor.ask(&mut session, "my medicine").await.unwrap().unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "re: my medicine");
        assert_eq!(session.messages().len(), 3);
        assert!(!session.is_pending());
        assert_eq!(kinds(&h.activity), vec![ActivityKind::QueryAnswered]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ask_blank_is_noop() {
        let h = harness(Timings::default());
        let mut session = ChatSession::new("hi", h.executor.clock().now());

        let started = Instant::now();
        assert!(h.executor.ask(&mut session, "   ").await.unwrap().is_none());
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(session.messages().len(), 1);
        assert!(kinds(&h.activity).is_empty());
    }

    // ── Care plans ───────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_generate_plan_uses_clock_date() {
        let h = harness(Timings::default());
        let mut desk = CarePlanDesk::new();

        let started = Instant::now();
        let plan = h
            .executor
            .generate_plan(&mut desk, &CarePlanRequest::new("Ada", "40", "Other"))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(plan.start_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(desk.plan(), Some(&plan));
        assert_eq!(desk.status(), Some(PlanStatus::Draft));
        assert!(!desk.is_generating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_plan_validation_blocks_without_delay() {
        let h = harness(Timings::default());
        let mut desk = CarePlanDesk::new();

        let started = Instant::now();
        let err = h
            .executor
            .generate_plan(&mut desk, &CarePlanRequest::new("", "40", "Asthma"))
            .await
            .unwrap_err();

        assert!(matches!(err, HealthHubError::Validation { .. }));
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(desk.plan().is_none());
        assert!(kinds(&h.activity).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_and_finalize_record_activity() {
        let h = harness(Timings::instant());
        let mut desk = CarePlanDesk::new();

        assert!(h.executor.save_plan(&mut desk).is_err());

        h.executor
            .generate_plan(&mut desk, &CarePlanRequest::new("Ada", "40", "Other"))
            .await
            .unwrap();
        h.executor.save_plan(&mut desk).unwrap();
        h.executor.finalize_plan(&mut desk).unwrap();

        assert_eq!(
            kinds(&h.activity),
            vec![
                ActivityKind::CarePlanGenerated,
                ActivityKind::CarePlanSaved,
                ActivityKind::CarePlanFinalized,
            ]
        );
    }
}
