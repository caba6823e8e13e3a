//! Web search tool — deterministic stub results.
//!
//! The search provider integration is a replaceable collaborator; this
//! stub returns plausible titles/URLs/snippets so the reasoning loop can
//! be exercised end-to-end without network access. Swapping in a real
//! engine only requires replacing this one executor.

use async_trait::async_trait;
use openclaw_core::error::ToolError;
use openclaw_core::tool::{ToolDefinition, ToolExecutor};
use std::sync::Arc;

const MAX_RESULTS: usize = 3;

pub struct SearchInternetTool;

impl SearchInternetTool {
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: "search_internet".into(),
            description: "Search the web. Returns titles, URLs, and snippets.".into(),
            parameter_description: "search query string".into(),
            executor: Arc::new(Self),
        }
    }
}

#[async_trait]
impl ToolExecutor for SearchInternetTool {
    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let query = input.trim();
        if query.is_empty() {
            return Ok("No results found.".into());
        }

        let results = mock_results(query);
        Ok(results
            .iter()
            .map(|r| format!("Title: {}\nURL: {}\n{}\n", r.title, r.url, r.snippet))
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string())
    }
}

struct SearchHit {
    title: String,
    url: String,
    snippet: String,
}

fn mock_results(query: &str) -> Vec<SearchHit> {
    (0..MAX_RESULTS)
        .map(|i| SearchHit {
            title: format!("Result {} for: {}", i + 1, query),
            url: format!(
                "https://example.com/search?q={}&p={}",
                query.replace(' ', "+"),
                i + 1
            ),
            snippet: format!("Summary of what the web says about '{query}'."),
        })
        .collect()
}
