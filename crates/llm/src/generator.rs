//! The text-generation contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::template::PromptTemplate;

/// Errors from the text-generation pipeline. Generation failures are not
/// retried: they abort the calling node and propagate to the scheduler.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A template placeholder had no matching variable.
    #[error("no value for template variable: {0}")]
    MissingVariable(String),

    /// The provider rejected the request or returned an error payload.
    #[error("provider error: {0}")]
    Provider(String),

    /// The request never reached the provider.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider response did not have the expected shape.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The model returned an empty completion. Successful generations are
    /// required to be non-empty.
    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// A substitutable text-generation backend. Implementations are stateless
/// from the caller's point of view and need no external synchronization.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce a completion for a fully rendered prompt.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Render `template` with `vars` and complete it, rejecting empty
    /// output. This is the call every workflow node makes.
    async fn generate(
        &self,
        template: &PromptTemplate,
        vars: &[(&str, &str)],
    ) -> Result<String, GenerationError> {
        let prompt = template.render(vars)?;
        let completion = self.complete(&prompt).await?;
        if completion.trim().is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }
        Ok(completion)
    }
}
