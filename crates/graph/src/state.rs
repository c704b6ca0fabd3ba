//! Shared workflow state contract.

/// State threaded through a [`TaskGraph`](crate::TaskGraph).
///
/// The scheduler hands each node a cloned snapshot and folds the node's
/// patch back into its own copy, so implementations should be cheap to
/// clone. `merge` must be a shallow union: every slot the patch carries
/// overwrites the corresponding slot in `self`, everything else is left
/// untouched. Merging the same patch twice must equal merging it once.
pub trait WorkflowState: Clone + Send + Sync + 'static {
    /// Partial-state update produced by a node.
    type Patch: Send + 'static;

    /// Fold a patch into the accumulating state.
    fn merge(&mut self, patch: Self::Patch);
}
