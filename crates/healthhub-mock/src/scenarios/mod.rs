//! Scripted walkthroughs of the four HealthHub pages.
//!
//! Each scenario drives one page through a `MockRuntime` and prints what the
//! page would show. They share the runtime's activity feed, so running the
//! dashboard last reflects everything the other pages did.

pub mod care_plans;
pub mod dashboard;
pub mod diagnostics;
pub mod query_assistant;
