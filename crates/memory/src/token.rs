//! Token estimation utilities.
//!
//! Uses a character-based heuristic: ~4 characters per token. This
//! approximation is accurate within ~10% for BPE tokenizers on English
//! text, and it is monotonic in text length — the only property the
//! trimming logic actually relies on.

use openclaw_core::message::Message;

/// Estimate the token count for a string.
///
/// Heuristic: 1 token ≈ 4 characters. Rounds up.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    (text.len() + 3) / 4
}

/// Estimate tokens for a single message.
pub fn estimate_message_tokens(message: &Message) -> usize {
    estimate_tokens(&message.content)
}

/// Estimate tokens for a slice of messages.
pub fn estimate_messages_tokens(messages: &[Message]) -> usize {
    messages.iter().map(estimate_message_tokens).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn four_chars_is_one_token() {
        assert_eq!(estimate_tokens("test"), 1);
    }

    #[test]
    fn five_chars_rounds_up() {
        assert_eq!(estimate_tokens("hello"), 2);
    }

    #[test]
    fn monotonic_in_length() {
        let short = "a".repeat(40);
        let long = "a".repeat(400);
        assert!(estimate_tokens(&long) > estimate_tokens(&short));
    }

    #[test]
    fn multiple_messages() {
        let msgs = vec![
            Message::user("hello"),     // 5 chars → 2 tokens
            Message::assistant("worlds"), // 6 chars → 2 tokens
        ];
        assert_eq!(estimate_messages_tokens(&msgs), 4);
    }
}
