//! `openclaw memory` — Inspect, search, or prune long-term memory.

use super::load_settings;
use openclaw_agent::AgentCore;

pub async fn run(query: Option<String>, delete: Option<String>) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let agent = AgentCore::new(settings);

    if let Some(id) = delete {
        if agent.delete_memory(&id).await? {
            println!("Deleted memory '{id}'.");
        } else {
            println!("No memory with ID '{id}'.");
        }
        return Ok(());
    }

    if let Some(query) = query {
        let results = agent.query_long_term(&query, 5).await;
        if results.is_empty() {
            println!("No matches for '{query}'.");
            return Ok(());
        }
        println!("Matches for '{query}':");
        for result in results {
            println!(
                "  [{}] (distance {:.3}) {}",
                result.id, result.distance, result.text
            );
        }
        return Ok(());
    }

    let records = agent.long_term_records().await?;
    if records.is_empty() {
        println!("Long-term memory is empty.");
        return Ok(());
    }
    println!("{} long-term memories:", records.len());
    for record in records {
        println!("  [{}] {}", record.id, record.text);
    }
    Ok(())
}
