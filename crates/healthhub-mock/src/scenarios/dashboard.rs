//! Dashboard: metric cards, system performance, models, and the feed.

use healthhub_contracts::error::HealthHubResult;
use healthhub_core::traits::Clock;

use crate::{
    dashboard::{load_view, DashboardView},
    runtime::MockRuntime,
};

pub async fn run_scenario(runtime: &MockRuntime) -> HealthHubResult<DashboardView> {
    println!("=== Dashboard ===");
    println!();
    println!("  Loading metrics...");

    let now = runtime.executor.clock().now();
    let view = load_view(runtime.executor.timings(), &runtime.activity, now).await;

    let m = &view.metrics;
    println!("  Diagnostics:            {}", m.diagnostics);
    println!("  Patient queries:        {}", m.queries);
    println!("  Care plans:             {}", m.care_plans);
    println!("  Data records:           {}", m.data_records);
    println!("  Alerts:                 {}", m.alerts);
    println!("  AI models:              {}", m.models);
    println!();

    let p = &view.performance;
    println!(
        "  Performance:            CPU {}%, memory {}%, storage {}%, network {} Mbps",
        p.cpu_percent, p.memory_percent, p.storage_percent, p.network_mbps
    );
    println!();

    println!("  Available models:");
    for model in &view.models {
        println!("    {:<14} {}", model.name, model.description);
    }
    println!();

    println!("  Recent activity:");
    if view.recent_activity.is_empty() {
        println!("    (none)");
    }
    for row in &view.recent_activity {
        println!("    [{}] {}: {}", row.age, row.title, row.description);
    }
    println!();

    Ok(view)
}
