//! Settings schema.
//!
//! Every key is optional; a missing key takes the default shown below.
//!
//! ```toml
//! log_filter = "warn"
//! seed_activity = true
//!
//! [timings]
//! progress_tick_ms = 300
//! progress_step = 10
//! analysis_delay_ms = 3000
//! chat_reply_delay_ms = 1500
//! plan_generation_delay_ms = 2000
//! dashboard_load_delay_ms = 1500
//! ```

use serde::{Deserialize, Serialize};

use healthhub_contracts::timing::Timings;

/// Runtime settings for the demo and the page scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Pre-populate the activity feed with the dashboard's sample entries.
    pub seed_activity: bool,

    pub timings: Timings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            seed_activity: true,
            timings: Timings::default(),
        }
    }
}

impl Settings {
    /// Timings to run with. `instant` zeroes every delay.
    pub fn effective_timings(&self, instant: bool) -> Timings {
        if instant {
            self.timings.scaled(0.0)
        } else {
            self.timings.clone()
        }
    }
}
