//! Precision diagnostics: upload, progress, analysis, result, reset.

use tokio::task::JoinHandle;
use tracing::warn;

use healthhub_contracts::{
    diagnostic::{UploadState, UploadedImage},
    error::HealthHubResult,
};

use crate::{mock_data::recent_analyses, runtime::MockRuntime};

/// Size reported for the simulated upload.
const SIMULATED_SIZE_BYTES: u64 = 2_457_600;

/// Wait for the progress printer. Returns false, after logging, if it panicked
/// or was cancelled; the run itself is unaffected.
pub(crate) async fn join_printer(printer: JoinHandle<()>) -> bool {
    match printer.await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "progress printer did not finish");
            false
        }
    }
}

pub async fn run_scenario(runtime: &MockRuntime, file_name: &str) -> HealthHubResult<()> {
    println!("=== Precision Diagnostics ===");
    println!();
    println!("  File:                   {}", file_name);

    let mut pipeline = runtime.new_pipeline();
    let mut rx = pipeline.subscribe();

    // Render progress as the executor publishes it; stop at the result.
    let printer = tokio::spawn(async move {
        let mut last_state = UploadState::Idle;
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            match snapshot.state {
                UploadState::Uploading => {
                    println!("  {:<24}{:>3}%", snapshot.state.status_line(), snapshot.progress)
                }
                UploadState::Analyzing if last_state != UploadState::Analyzing => {
                    println!("  {}", snapshot.state.status_line())
                }
                UploadState::Complete => break,
                _ => {}
            }
            last_state = snapshot.state;
        }
    });

    let image = UploadedImage::new(file_name, SIMULATED_SIZE_BYTES);
    let result = match runtime.executor.run_diagnostics(&mut pipeline, image).await {
        Ok(result) => {
            join_printer(printer).await;
            result
        }
        Err(e) => {
            printer.abort();
            return Err(e);
        }
    };

    println!("  {}", pipeline.state().status_line());
    println!();
    println!("  Diagnosis:              {}", result.diagnosis);
    println!("  Confidence:             {}%", result.confidence);
    for (i, region) in result.regions.iter().enumerate() {
        println!(
            "  Region {}:               ({}, {}) {}x{} p={:.2}",
            i + 1,
            region.x,
            region.y,
            region.width,
            region.height,
            region.probability
        );
    }
    println!("  Recommendations:");
    for rec in &result.recommendations {
        println!("    - {}", rec);
    }
    println!();

    println!("  Recent analyses:");
    for analysis in recent_analyses() {
        println!("    {} (analyzed {})", analysis.title, analysis.analyzed);
    }
    println!();

    pipeline.reset();
    println!("  Page reset:             {}", pipeline.state());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::join_printer;

    #[tokio::test]
    async fn test_join_printer_reports_failure() {
        assert!(join_printer(tokio::spawn(async {})).await);

        let crashed = tokio::spawn(async { panic!("printer crashed") });
        assert!(!join_printer(crashed).await);

        let cancelled = tokio::spawn(std::future::pending::<()>());
        cancelled.abort();
        assert!(!join_printer(cancelled).await);
    }
}
