//! Agent-level error types.

use thiserror::Error;
use tripweaver_llm::GenerationError;

/// Errors raised inside workflow agents.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The text-generation call failed. Not retried; the node aborts and
    /// the scheduler short-circuits the run.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// A required predecessor output is absent. The graph topology is
    /// supposed to make this impossible, so hitting it means the graph was
    /// mis-built — it is fatal, not recoverable.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),

    /// The collaborator supplied a decision outside the accepted set.
    /// Handled inside the approval loop by re-prompting; never crosses the
    /// node boundary.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The interactive channel itself failed (closed terminal, EOF,
    /// exhausted script).
    #[error("collaborator error: {0}")]
    Collaborator(String),

    /// Search results could not be serialized into prompt text.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
