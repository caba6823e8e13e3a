//! `openclaw chat` — Interactive or single-message chat mode.

use super::load_settings;
use anyhow::bail;
use openclaw_agent::AgentCore;
use openclaw_core::error::ProviderError;
use std::io::{BufRead, Write};

pub async fn run(message: Option<String>) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let model = settings.ollama.model.clone();
    let base_url = settings.ollama.base_url.clone();
    let mut agent = AgentCore::new(settings);

    if !agent.health_check().await {
        bail!(
            "Cannot reach Ollama at {base_url}. \
             Is it running? Start it with `ollama serve` and make sure the \
             model is pulled: `ollama pull {model}`"
        );
    }

    if let Some(msg) = message {
        // Single message mode: one turn, print the answer, exit.
        eprint!("  Thinking...");
        let response = agent.handle_message(&msg).await;
        eprint!("\r             \r");
        match response {
            Ok(response) => println!("{}", response.answer),
            Err(e) => bail!("Chat failed: {e}"),
        }
        return Ok(());
    }

    // Interactive mode.
    println!();
    println!("  OpenClaw — Interactive Mode");
    println!("  ---------------------------");
    println!("  Model: {model} ({base_url})");
    println!("  Type your message and press Enter. Type 'exit' to quit.");
    println!();

    if let Some(nudge) = agent.proactive_message() {
        println!("  Claw > {nudge}");
        println!();
    }

    let stdin = std::io::stdin();
    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        eprint!("  ...");
        let response = agent.handle_message(input).await;
        eprint!("\r      \r");

        match response {
            Ok(response) => {
                println!("  Claw > {}", response.answer);
                println!();
            }
            // Transport failure ends the session; nothing useful can follow.
            Err(e @ ProviderError::Unavailable(_)) => bail!("Chat failed: {e}"),
            Err(e) => {
                eprintln!("  Error: {e}");
                println!();
            }
        }
    }

    println!("  Bye!");
    Ok(())
}
