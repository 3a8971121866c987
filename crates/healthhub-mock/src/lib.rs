//! # healthhub-mock
//!
//! Mock backend for the HealthHub dashboard.
//!
//! Provides the reference implementations of the core seams, all of them
//! lookups over hardcoded tables:
//!
//! 1. **Condition selector** (`care_plans`): condition text to one of four
//!    care plan templates.
//! 2. **Query responder** (`responder`): keyword groups to canned replies.
//! 3. **Canned analyzer** (`diagnostics`): every image yields the same finding.
//!
//! `MockRuntime` wires them into an executor, and `scenarios` walks each page.
//! All data is hardcoded and fictional. No external calls are made.

pub mod care_plans;
pub mod dashboard;
pub mod diagnostics;
pub mod mock_data;
pub mod responder;
pub mod runtime;
pub mod scenarios;

pub use runtime::MockRuntime;

// ── Tests ─────────────────────────────────────────────────────────────────────
