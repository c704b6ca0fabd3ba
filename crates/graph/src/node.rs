//! Node contract and function adapter.

use async_trait::async_trait;
use std::future::Future;

use crate::state::WorkflowState;

/// Boxed error crossing the node/scheduler seam. Domain error types convert
/// into it with `?`.
pub type NodeError = Box<dyn std::error::Error + Send + Sync>;

/// A named unit of work: reads the shared state, returns a partial-state
/// patch. Nodes must not communicate through anything but the patch; the
/// snapshot they receive is theirs alone.
#[async_trait]
pub trait Node<S: WorkflowState>: Send + Sync {
    async fn run(&self, state: &S) -> Result<S::Patch, NodeError>;
}

/// Adapter turning an async closure into a [`Node`]. The closure receives
/// its own clone of the state.
pub struct FnNode<F>(pub F);

#[async_trait]
impl<S, F, Fut> Node<S> for FnNode<F>
where
    S: WorkflowState,
    F: Fn(S) -> Fut + Send + Sync,
    Fut: Future<Output = Result<S::Patch, NodeError>> + Send,
{
    async fn run(&self, state: &S) -> Result<S::Patch, NodeError> {
        (self.0)(state.clone()).await
    }
}
