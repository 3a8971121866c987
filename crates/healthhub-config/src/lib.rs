//! # healthhub-config
//!
//! TOML settings for the HealthHub runtime: simulated delays, the upload
//! progress step, the fallback log filter, and activity feed seeding.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use healthhub_config::Settings;
//!
//! let settings = Settings::load(Some(Path::new("healthhub.toml")))?;
//! let timings = settings.effective_timings(false);
//! ```

pub mod loader;
pub mod settings;

pub use settings::Settings;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use healthhub_contracts::{error::HealthHubError, timing::Timings};

    use crate::Settings;

    fn config_reason(result: Result<Settings, HealthHubError>) -> String {
        match result {
            Err(HealthHubError::ConfigError { reason }) => reason,
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_filter, "warn");
        assert!(settings.seed_activity);
        assert_eq!(settings.timings, Timings::default());
    }

    /// Keys left out of `[timings]` keep their defaults.
    #[test]
    fn test_partial_timings() {
        let toml = r#"
            log_filter = "healthhub_core=debug"

            [timings]
            analysis_delay_ms = 500
            progress_step = 25
        "#;

        let settings = Settings::from_toml_str(toml).unwrap();
        assert_eq!(settings.log_filter, "healthhub_core=debug");
        assert_eq!(settings.timings.analysis_delay_ms, 500);
        assert_eq!(settings.timings.progress_step, 25);
        assert_eq!(settings.timings.progress_tick_ms, 300);
        assert_eq!(settings.timings.chat_reply_delay_ms, 1500);
    }

    #[test]
    fn test_progress_step_out_of_range() {
        for step in [0, 101, 255] {
            let toml = format!("[timings]\nprogress_step = {}\n", step);
            let reason = config_reason(Settings::from_toml_str(&toml));
            assert!(reason.contains("progress_step"), "unexpected reason: {reason}");
        }
        assert!(Settings::from_toml_str("[timings]\nprogress_step = 100\n").is_ok());
    }

    #[test]
    fn test_blank_log_filter_rejected() {
        let reason = config_reason(Settings::from_toml_str("log_filter = \"  \""));
        assert!(reason.contains("log_filter"));
    }

    #[test]
    fn test_toml_parse_error() {
        let reason = config_reason(Settings::from_toml_str("this is not valid toml ][[["));
        assert!(
            reason.contains("failed to parse settings TOML"),
            "expected parse error message, got: {reason}"
        );
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let reason = config_reason(Settings::from_toml_str("[timings]\nprogress_tick_ms = \"fast\""));
        assert!(reason.contains("failed to parse settings TOML"));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/healthhub-settings.toml");
        let reason = config_reason(Settings::load(Some(path)));
        assert!(reason.contains("failed to read settings file"));
        assert!(reason.contains("healthhub-settings.toml"));
    }

    #[test]
    fn test_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!("healthhub-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "seed_activity = false\n[timings]\nchat_reply_delay_ms = 10\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!settings.seed_activity);
        assert_eq!(settings.timings.chat_reply_delay_ms, 10);
    }

    #[test]
    fn test_effective_timings() {
        let settings = Settings::default();
        assert_eq!(settings.effective_timings(false), Timings::default());

        let instant = settings.effective_timings(true);
        assert_eq!(instant.progress_tick_ms, 0);
        assert_eq!(instant.analysis_delay_ms, 0);
        assert_eq!(instant.progress_step, 10);
    }
}
