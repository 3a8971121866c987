//! # healthhub-activity
//!
//! The dashboard's append-only "recent activity" feed.
//!
//! Every completed page operation reaches the feed through the
//! [`ActivitySink`](healthhub_core::traits::ActivitySink) seam. Events get
//! gapless sequence numbers in append order and are listed newest first.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use healthhub_activity::InMemoryActivityLog;
//!
//! let log = InMemoryActivityLog::new();
//! // Hand `Arc::new(log.clone())` to `healthhub_core::Executor::new(...)`.
//! for event in log.recent(5) {
//!     println!("{} ({})", event.title, event.age(now));
//! }
//! ```

pub mod age;
pub mod event;
pub mod memory;

pub use age::describe_age;
pub use event::{ActivityEvent, ActivityFeed};
pub use memory::InMemoryActivityLog;

// ── Tests ─────────────────────────────────────────────────────────────────────
