//! Scheduler error types.

use thiserror::Error;

use crate::node::NodeError;

/// Errors raised while building or executing a task graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge or entry declaration names a node that was never registered.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Two nodes were registered under the same name.
    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    /// The same edge was declared twice.
    #[error("duplicate edge: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    /// No entry nodes were declared.
    #[error("graph has no entry nodes")]
    NoEntryNodes,

    /// An entry node has an incoming edge; entries must have no predecessors.
    #[error("entry node has a predecessor: {0}")]
    EntryHasPredecessor(String),

    /// A non-entry node has no incoming edge and can never become eligible.
    #[error("node is unreachable (no predecessor and not an entry): {0}")]
    OrphanNode(String),

    /// The edge set contains a cycle.
    #[error("cycle detected through node: {0}")]
    CycleDetected(String),

    /// A node has no path to the terminal marker.
    #[error("END is not reachable from node: {0}")]
    EndUnreachable(String),

    /// A node returned an error; execution was aborted before any dependent
    /// node could run.
    #[error("node `{node}` failed: {source}")]
    NodeFailed {
        node: String,
        #[source]
        source: NodeError,
    },

    /// A node task panicked.
    #[error("node `{node}` panicked")]
    NodePanicked { node: String },
}
