//! Mock image analysis.

use tracing::debug;

use healthhub_contracts::diagnostic::{DiagnosticResult, UploadedImage};
use healthhub_core::traits::Analyzer;

use crate::mock_data::diagnostic_result;

/// Returns the same finding for every image; file name and size are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAnalyzer;

impl Analyzer for CannedAnalyzer {
    fn analyze(&self, image: &UploadedImage) -> DiagnosticResult {
        debug!(file = %image.file_name, bytes = image.size_bytes, "analyzing image");
        diagnostic_result()
    }
}
