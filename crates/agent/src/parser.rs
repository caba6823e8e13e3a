//! Parsing of the model's structured reply.
//!
//! The model is asked for one JSON object with four keys: `thought`,
//! `action`, `action_input`, `answer`. Small local models do not always
//! comply, so parsing degrades in three tiers:
//!
//! 1. strict: the whole reply is the JSON object
//! 2. extraction: the first `{` through the last `}` is the JSON object,
//!    ignoring any chatter around it
//! 3. fallback: the raw text becomes the answer of a synthesized reply
//!
//! Tier 3 can never fail, so the reasoning loop never sees a parse error.

use serde_json::Value;
use tracing::warn;

/// One structured reply from the model, after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub thought: String,
    pub action: Option<String>,
    pub action_input: Option<String>,
    pub answer: Option<String>,
}

impl ModelReply {
    /// True when the model is answering directly rather than calling a tool.
    ///
    /// Small models sometimes emit the *string* `"null"` instead of JSON
    /// null; both count as final.
    pub fn is_final(&self) -> bool {
        match self.action.as_deref() {
            None | Some("null") => true,
            Some(_) => false,
        }
    }
}

/// Parse raw model output into a [`ModelReply`]. Total: always returns a
/// reply, falling back to treating the whole text as a direct answer.
pub fn parse_model_reply(raw: &str) -> ModelReply {
    // Tier 1: the reply is exactly one JSON object.
    if let Some(reply) = object_to_reply(serde_json::from_str(raw).ok()) {
        return reply;
    }

    // Tier 2: find a JSON object embedded in surrounding text.
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            let candidate = &raw[start..=end];
            if let Some(reply) = object_to_reply(serde_json::from_str(candidate).ok()) {
                return reply;
            }
        }
    }

    // Tier 3: not JSON at all. Use the text as the answer.
    let preview: String = raw.chars().take(200).collect();
    warn!(raw = %preview, "Failed to parse JSON from model output");
    ModelReply {
        thought: "(parse failure -- raw text used as answer)".into(),
        action: None,
        action_input: None,
        answer: Some(raw.to_string()),
    }
}

fn object_to_reply(value: Option<Value>) -> Option<ModelReply> {
    let Value::Object(obj) = value? else {
        return None;
    };
    let field = |key: &str| obj.get(key).and_then(Value::as_str).map(String::from);
    Some(ModelReply {
        thought: field("thought").unwrap_or_default(),
        action: field("action"),
        action_input: field("action_input"),
        answer: field("answer"),
    })
}
