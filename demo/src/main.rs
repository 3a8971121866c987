//! HealthHub mock dashboard demo CLI.
//!
//! Runs one or all of the page scenarios against the mock backend. Every
//! delay matches the dashboard's timers unless `--instant` is given.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- --instant dashboard --json
//!   cargo run -p demo -- diagnostics --file knee-mri.dcm
//!   cargo run -p demo -- query "When is my next appointment?"
//!   cargo run -p demo -- care-plan --name "Ada Lovelace" --age 36 --condition asthma --allergies latex

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use healthhub_config::Settings;
use healthhub_contracts::{
    care_plan::CarePlanRequest,
    diagnostic::UploadedImage,
    error::{HealthHubError, HealthHubResult},
};
use healthhub_core::traits::Clock;
use healthhub_mock::{
    dashboard::load_view,
    scenarios::{care_plans, dashboard, diagnostics, query_assistant},
    MockRuntime,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// HealthHub: mock clinical dashboard.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "HealthHub mock dashboard demo",
    long_about = "Walks the HealthHub pages (dashboard, diagnostics, query assistant,\n\
                  care plans) against literal mock data with simulated latency."
)]
struct Cli {
    /// TOML settings file. Defaults apply when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip every simulated delay.
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every page in sequence, dashboard last.
    RunAll,
    /// Load the dashboard metrics and recent activity.
    Dashboard {
        /// Print the loaded page as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Upload an image and wait for the analysis.
    Diagnostics {
        #[arg(long, default_value = UploadedImage::DEFAULT_FILE_NAME)]
        file: String,
    },
    /// Ask the query assistant. Each argument is one question.
    Query {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Generate, save, and finalize a care plan.
    CarePlan {
        #[arg(long)]
        name: String,
        #[arg(long)]
        condition: String,
        #[arg(long, default_value = "")]
        age: String,
        /// Known allergies, shown with the request.
        #[arg(long, default_value = "")]
        allergies: String,
        /// Medications the patient already takes.
        #[arg(long, default_value = "")]
        medications: String,
        /// Free-text clinician notes.
        #[arg(long, default_value = "")]
        notes: String,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    let json_only = matches!(cli.command, Command::Dashboard { json: true });
    if !json_only {
        print_banner(&settings, cli.instant);
    }

    match run(cli.command, &settings, cli.instant).await {
        Ok(()) => {
            if !json_only {
                println!("All selected pages completed successfully.");
            }
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Page dispatch ─────────────────────────────────────────────────────────────

async fn run(command: Command, settings: &Settings, instant: bool) -> HealthHubResult<()> {
    let runtime = MockRuntime::from_settings(settings, instant)?;
    info!(instant, seeded = runtime.activity.len(), "runtime ready");

    match command {
        Command::RunAll => {
            diagnostics::run_scenario(&runtime, UploadedImage::DEFAULT_FILE_NAME).await?;
            query_assistant::run_scenario(&runtime, &[]).await?;
            care_plans::run_scenario(&runtime, &care_plans::sample_requests()).await?;
            dashboard::run_scenario(&runtime).await?;
        }
        Command::Dashboard { json: false } => {
            dashboard::run_scenario(&runtime).await?;
        }
        Command::Dashboard { json: true } => {
            let now = runtime.executor.clock().now();
            let view = load_view(runtime.executor.timings(), &runtime.activity, now).await;
            let out = serde_json::to_string_pretty(&view).map_err(|e| HealthHubError::Serialization {
                reason: format!("failed to render dashboard JSON: {}", e),
            })?;
            println!("{}", out);
        }
        Command::Diagnostics { file } => {
            diagnostics::run_scenario(&runtime, &file).await?;
        }
        Command::Query { text } => {
            query_assistant::run_scenario(&runtime, &text).await?;
        }
        Command::CarePlan { name, condition, age, allergies, medications, notes } => {
            let request = CarePlanRequest {
                allergies,
                current_medications: medications,
                notes,
                ..CarePlanRequest::new(name, age, condition)
            };
            // Surface a rejected form as an error exit, not a printed notice.
            healthhub_core::care_plan::validate(&request)?;
            care_plans::run_scenario(&runtime, &[request]).await?;
        }
    }
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner(settings: &Settings, instant: bool) {
    let t = settings.effective_timings(instant);
    println!();
    println!("HealthHub: Mock Clinical Dashboard");
    println!("==================================");
    println!();
    println!("Simulated latency:");
    println!("  Upload tick      {:>5} ms (+{}% per tick)", t.progress_tick_ms, t.progress_step);
    println!("  Image analysis   {:>5} ms", t.analysis_delay_ms);
    println!("  Assistant reply  {:>5} ms", t.chat_reply_delay_ms);
    println!("  Plan generation  {:>5} ms", t.plan_generation_delay_ms);
    println!("  Dashboard load   {:>5} ms", t.dashboard_load_delay_ms);
    println!();
}
