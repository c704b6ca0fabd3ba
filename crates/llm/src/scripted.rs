//! Deterministic generator for tests.
//!
//! Mirrors the shape of a real backend but replies from a script:
//! sequential replies (cycling once exhausted), content-matched replies,
//! echo mode, and injected failures. Every prompt is recorded so tests can
//! assert on what was actually sent.
//!
//! Shipped as part of the crate (not behind `cfg(test)`) so downstream
//! crates can drive their own workflows against it.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::generator::{GenerationError, TextGenerator};

enum Reply {
    Text(String),
    Failure(String),
}

struct ConditionalReply {
    needle: String,
    reply: Reply,
}

/// Scripted [`TextGenerator`].
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<Vec<Reply>>,
    next_reply: AtomicUsize,
    conditional: Mutex<Vec<ConditionalReply>>,
    echo: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo mode: every completion is the prompt itself.
    pub fn echo() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    /// Queue a sequential reply. Replies are returned in order and cycle
    /// once exhausted.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().push(Reply::Text(text.into()));
        self
    }

    /// Queue a sequential failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.replies.lock().push(Reply::Failure(message.into()));
        self
    }

    /// Reply with `text` whenever the prompt contains `needle`. Conditional
    /// replies are checked before the sequential script.
    pub fn when_contains(self, needle: impl Into<String>, text: impl Into<String>) -> Self {
        self.conditional.lock().push(ConditionalReply {
            needle: needle.into(),
            reply: Reply::Text(text.into()),
        });
        self
    }

    /// Fail whenever the prompt contains `needle`.
    pub fn fail_when_contains(self, needle: impl Into<String>, message: impl Into<String>) -> Self {
        self.conditional.lock().push(ConditionalReply {
            needle: needle.into(),
            reply: Reply::Failure(message.into()),
        });
        self
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }

    /// Every prompt sent, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Whether any recorded prompt contains `needle`.
    pub fn saw_prompt_containing(&self, needle: &str) -> bool {
        self.prompts.lock().iter().any(|p| p.contains(needle))
    }

    fn next(&self, prompt: &str) -> Result<String, GenerationError> {
        let conditional = self.conditional.lock();
        for candidate in conditional.iter() {
            if prompt.contains(&candidate.needle) {
                return match &candidate.reply {
                    Reply::Text(text) => Ok(text.clone()),
                    Reply::Failure(message) => Err(GenerationError::Provider(message.clone())),
                };
            }
        }
        drop(conditional);

        if self.echo {
            return Ok(prompt.to_string());
        }

        let replies = self.replies.lock();
        if replies.is_empty() {
            return Ok("scripted reply".to_string());
        }
        let index = self.next_reply.fetch_add(1, Ordering::SeqCst) % replies.len();
        match &replies[index] {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Failure(message) => Err(GenerationError::Provider(message.clone())),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());
        self.next(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sequential_replies_cycle() {
        let backend = ScriptedGenerator::new()
            .with_reply("first")
            .with_reply("second");

        assert_eq!(backend.complete("a").await.unwrap(), "first");
        assert_eq!(backend.complete("b").await.unwrap(), "second");
        assert_eq!(backend.complete("c").await.unwrap(), "first");
    }

    #[tokio::test]
    async fn conditional_replies_take_precedence() {
        let backend = ScriptedGenerator::new()
            .with_reply("fallback")
            .when_contains("flights", "two flights found");

        assert_eq!(
            backend.complete("search flights to BCN").await.unwrap(),
            "two flights found"
        );
        assert_eq!(backend.complete("anything else").await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn injected_failures_surface_as_provider_errors() {
        let backend = ScriptedGenerator::new().fail_when_contains("hotel", "quota exceeded");

        let err = backend.complete("find a hotel").await.unwrap_err();
        assert!(matches!(err, GenerationError::Provider(msg) if msg == "quota exceeded"));
    }

    #[tokio::test]
    async fn records_every_prompt() {
        let backend = ScriptedGenerator::echo();
        backend.complete("one").await.unwrap();
        backend.complete("two").await.unwrap();

        assert_eq!(backend.call_count(), 2);
        assert_eq!(backend.prompts(), vec!["one", "two"]);
        assert!(backend.saw_prompt_containing("tw"));
        assert!(!backend.saw_prompt_containing("three"));
    }
}
