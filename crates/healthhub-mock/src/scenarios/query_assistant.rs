//! Patient query assistant: greeting, then one reply per query.

use healthhub_contracts::{chat::Role, error::HealthHubResult};

use crate::{mock_data::QUICK_QUESTIONS, runtime::MockRuntime};

/// Ask each of `queries` in turn. With no queries, the quick questions are used.
pub async fn run_scenario(runtime: &MockRuntime, queries: &[String]) -> HealthHubResult<()> {
    println!("=== Patient Query Assistant ===");
    println!();

    let queries: Vec<String> = if queries.is_empty() {
        QUICK_QUESTIONS.iter().map(|q| q.to_string()).collect()
    } else {
        queries.to_vec()
    };

    let mut session = runtime.new_chat();
    for query in &queries {
        if runtime.executor.ask(&mut session, query).await?.is_none() {
            println!("  (empty query ignored)");
            println!();
        }
    }

    for message in session.messages() {
        let speaker = match message.role {
            Role::User => "You",
            Role::Assistant => "Assistant",
        };
        println!("  {}: {}", speaker, message.content);
        println!();
    }

    Ok(())
}
