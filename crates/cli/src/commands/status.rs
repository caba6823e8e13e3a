//! `openclaw status` — Show configuration and backend health.

use super::load_settings;
use openclaw_agent::AgentCore;

pub async fn run() -> anyhow::Result<()> {
    let settings = load_settings()?;

    println!("OpenClaw Status");
    println!("===============");
    println!("  Data dir:     {}", openclaw_config::data_dir().display());
    println!("  Settings:     {}", openclaw_config::default_settings_path().display());
    println!("  Ollama URL:   {}", settings.ollama.base_url);
    println!("  Model:        {}", settings.ollama.model);
    println!("  Temperature:  {}", settings.ollama.temperature);
    println!("  Context:      {} tokens", settings.ollama.context_window);
    println!("  Persona:      {} ({})", settings.persona.name, settings.persona.role);

    let agent = AgentCore::new(settings);
    println!();
    if agent.health_check().await {
        println!("  Ollama: reachable, model present");
        match agent.list_models().await {
            Ok(models) if !models.is_empty() => {
                println!("  Available models:");
                for model in models {
                    println!("    - {model}");
                }
            }
            Ok(_) => println!("  No models pulled yet"),
            Err(e) => println!("  Could not list models: {e}"),
        }
    } else {
        println!("  Ollama: NOT reachable — start it with `ollama serve`");
    }

    let memories = agent.long_term_records().await.map(|r| r.len()).unwrap_or(0);
    let todos = agent.todos().map(|t| t.len()).unwrap_or(0);
    println!();
    println!("  Long-term memories: {memories}");
    println!("  To-do items:        {todos}");

    Ok(())
}
