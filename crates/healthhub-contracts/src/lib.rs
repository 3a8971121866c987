//! # healthhub-contracts
//!
//! Shared types, timing settings, and errors for the HealthHub mock runtime.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod care_plan;
pub mod chat;
pub mod dashboard;
pub mod diagnostic;
pub mod error;
pub mod timing;
