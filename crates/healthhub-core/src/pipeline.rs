//! The diagnostics upload/analysis state machine.
//!
//!   Idle → Uploading (progress ticks) → Analyzing → Complete → [reset] → Idle
//!
//! The machine itself never sleeps. Timers live in the executor (or in
//! whatever drives the page), and every timer callback must present the
//! `RunTicket` that `start()` handed out. A run that was reset can therefore
//! never move the page again, even if its timers fire late.

use tokio::sync::watch;
use tracing::{debug, info};

use healthhub_contracts::{
    diagnostic::{DiagnosticResult, PipelineSnapshot, RunTicket, UploadState, UploadedImage},
    error::{HealthHubError, HealthHubResult},
};

/// Per-page diagnostics state.
///
/// Every transition publishes a `PipelineSnapshot` on a watch channel; call
/// `subscribe()` to observe progress while an executor drives the run.
pub struct DiagnosticPipeline {
    progress_step: u8,
    run: u64,
    state: UploadState,
    progress: u8,
    image: Option<UploadedImage>,
    result: Option<DiagnosticResult>,
    snapshots: watch::Sender<PipelineSnapshot>,
}

impl DiagnosticPipeline {
    /// Create an idle pipeline. `progress_step` is clamped to 1..=100.
    pub fn new(progress_step: u8) -> Self {
        let (snapshots, _) = watch::channel(PipelineSnapshot::default());
        Self {
            progress_step: progress_step.clamp(1, 100),
            run: 0,
            state: UploadState::Idle,
            progress: 0,
            image: None,
            result: None,
            snapshots,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn result(&self) -> Option<&DiagnosticResult> {
        self.result.as_ref()
    }

    /// The file of the current run, if one has been started since the last reset.
    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn snapshot(&self) -> PipelineSnapshot {
        PipelineSnapshot {
            run: self.run,
            state: self.state,
            progress: self.progress,
            result: self.result.clone(),
        }
    }

    /// Receive a snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<PipelineSnapshot> {
        self.snapshots.subscribe()
    }

    /// Begin uploading `image`. Only legal from `Idle`.
    pub fn start(&mut self, image: UploadedImage) -> HealthHubResult<RunTicket> {
        if self.state != UploadState::Idle {
            return Err(self.illegal("start"));
        }

        self.run += 1;
        self.state = UploadState::Uploading;
        self.progress = 0;
        self.result = None;

        info!(run = self.run, file = %image.file_name, "diagnostic upload started");
        self.image = Some(image);
        self.publish();

        Ok(RunTicket(self.run))
    }

    /// Advance the upload by one timer tick and return the resulting state.
    ///
    /// Each tick adds `progress_step` (capped at 100). The first tick that
    /// finds progress already at 100 hands over to `Analyzing`.
    pub fn tick(&mut self, ticket: RunTicket) -> HealthHubResult<UploadState> {
        self.check_ticket(ticket)?;
        if self.state != UploadState::Uploading {
            return Err(self.illegal("tick"));
        }

        if self.progress >= 100 {
            self.state = UploadState::Analyzing;
            info!(run = self.run, "upload finished, analysis started");
        } else {
            self.progress = self.progress.saturating_add(self.progress_step).min(100);
            debug!(run = self.run, progress = self.progress, "upload progress");
        }

        self.publish();
        Ok(self.state)
    }

    /// Attach the analysis result. Only legal from `Analyzing`.
    pub fn complete(&mut self, ticket: RunTicket, result: DiagnosticResult) -> HealthHubResult<()> {
        self.check_ticket(ticket)?;
        if self.state != UploadState::Analyzing {
            return Err(self.illegal("complete"));
        }

        info!(
            run = self.run,
            diagnosis = %result.diagnosis,
            confidence = result.confidence,
            "diagnostic analysis complete"
        );

        self.state = UploadState::Complete;
        self.result = Some(result);
        self.publish();
        Ok(())
    }

    /// Return to `Idle` from any state, dropping progress and result.
    ///
    /// The run counter is kept, so tickets from the reset run stay stale.
    pub fn reset(&mut self) {
        debug!(run = self.run, from = %self.state, "diagnostic pipeline reset");
        self.state = UploadState::Idle;
        self.progress = 0;
        self.image = None;
        self.result = None;
        self.publish();
    }

    fn check_ticket(&self, ticket: RunTicket) -> HealthHubResult<()> {
        // An idle pipeline has no live run: its last ticket was reset.
        if ticket.0 != self.run || self.state == UploadState::Idle {
            return Err(HealthHubError::StaleRun { current: self.run, stale: ticket.0 });
        }
        Ok(())
    }

    fn illegal(&self, action: &str) -> HealthHubError {
        HealthHubError::IllegalTransition {
            from: self.state.to_string(),
            action: action.to_string(),
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}

impl Default for DiagnosticPipeline {
    fn default() -> Self {
        Self::new(10)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
