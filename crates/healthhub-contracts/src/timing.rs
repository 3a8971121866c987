//! Simulated latency settings.
//!
//! Every "asynchronous" operation in the runtime is a fixed sleep. The
//! defaults reproduce the dashboard's timers; `scaled(0.0)` removes
//! all waiting for scripted runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delays and step sizes for the simulated operations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Interval between upload progress ticks.
    pub progress_tick_ms: u64,
    /// Percentage added per progress tick.
    pub progress_step: u8,
    /// Time the analysis stage takes once the upload reaches 100%.
    pub analysis_delay_ms: u64,
    /// Latency before the query assistant answers.
    pub chat_reply_delay_ms: u64,
    /// Latency before a care plan appears.
    pub plan_generation_delay_ms: u64,
    /// Latency before dashboard metrics load.
    pub dashboard_load_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            progress_tick_ms: 300,
            progress_step: 10,
            analysis_delay_ms: 3000,
            chat_reply_delay_ms: 1500,
            plan_generation_delay_ms: 2000,
            dashboard_load_delay_ms: 1500,
        }
    }
}

impl Timings {
    /// Every delay set to zero; step sizes unchanged.
    pub fn instant() -> Self {
        Self::default().scaled(0.0)
    }

    /// Multiply every delay by `factor`. Negative factors are treated as zero.
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = factor.max(0.0);
        let scale = |ms: u64| (ms as f64 * factor).round() as u64;
        Self {
            progress_tick_ms: scale(self.progress_tick_ms),
            progress_step: self.progress_step,
            analysis_delay_ms: scale(self.analysis_delay_ms),
            chat_reply_delay_ms: scale(self.chat_reply_delay_ms),
            plan_generation_delay_ms: scale(self.plan_generation_delay_ms),
            dashboard_load_delay_ms: scale(self.dashboard_load_delay_ms),
        }
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn plan_generation_delay(&self) -> Duration {
        Duration::from_millis(self.plan_generation_delay_ms)
    }

    pub fn dashboard_load_delay(&self) -> Duration {
        Duration::from_millis(self.dashboard_load_delay_ms)
    }
}
