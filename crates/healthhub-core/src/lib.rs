//! # healthhub-core
//!
//! Page state machines and the timer-driven executor for HealthHub.
//!
//! This crate provides:
//! - The seam traits (`Responder`, `PlanSelector`, `Analyzer`, `Clock`, `ActivitySink`)
//! - Per-page state: `DiagnosticPipeline`, `ChatSession`, `CarePlanDesk`
//! - The `Executor` that drives those pages through their simulated delays
//!
//! ## Usage
//!
//! ```rust,ignore
//! use healthhub_core::{Executor, pipeline::DiagnosticPipeline};
//!
//! let mut page = DiagnosticPipeline::default();
//! let result = executor.run_diagnostics(&mut page, image).await?;
//! ```

pub mod care_plan;
pub mod chat;
pub mod clock;
pub mod executor;
pub mod pipeline;
pub mod traits;

pub use executor::Executor;
