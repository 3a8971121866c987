//! Diagnostics page types: the upload state machine's vocabulary and the
//! analysis result it ends in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the diagnostics pipeline currently is.
///
/// Transitions are linear: `Idle → Uploading → Analyzing → Complete`, with
/// a manual reset back to `Idle` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadState {
    Idle,
    Uploading,
    Analyzing,
    Complete,
}

impl UploadState {
    /// Status line shown under the file name.
    pub fn status_line(self) -> &'static str {
        match self {
            UploadState::Idle => "Waiting for upload",
            UploadState::Uploading => "Uploading...",
            UploadState::Analyzing => "AI analysis in progress...",
            UploadState::Complete => "Analysis complete",
        }
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UploadState::Idle => "idle",
            UploadState::Uploading => "uploading",
            UploadState::Analyzing => "analyzing",
            UploadState::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// The simulated file handed to the pipeline. Its contents never matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub file_name: String,
    pub size_bytes: u64,
}

impl UploadedImage {
    pub const DEFAULT_FILE_NAME: &'static str = "chest-xray-frontal.dcm";

    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self { file_name: file_name.into(), size_bytes }
    }
}

impl Default for UploadedImage {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FILE_NAME, 0)
    }
}

/// A highlighted region on the analysed image, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// 0.0–1.0
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub diagnosis: String,
    /// Percentage, 0–100.
    pub confidence: u8,
    pub regions: Vec<Region>,
    pub recommendations: Vec<String>,
}

/// Identifies one run of the pipeline. Returned by `start()`; every later
/// timer callback must present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunTicket(pub u64);

/// Everything an observer needs to render the diagnostics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    /// Zero before the first run.
    pub run: u64,
    pub state: UploadState,
    /// 0–100.
    pub progress: u8,
    pub result: Option<DiagnosticResult>,
}

impl Default for PipelineSnapshot {
    fn default() -> Self {
        Self { run: 0, state: UploadState::Idle, progress: 0, result: None }
    }
}

/// A diagnostic model listed on the "AI Models" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticModel {
    pub name: String,
    pub description: String,
    pub active: bool,
}

/// An entry in the "Recent Analyses" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAnalysis {
    pub title: String,
    /// Relative age, e.g. "2 days ago".
    pub analyzed: String,
}
