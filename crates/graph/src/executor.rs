//! Graph execution: concurrent dispatch, single-threaded merge.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::{Id, JoinSet};

use crate::error::GraphError;
use crate::node::{Node, NodeError};
use crate::state::WorkflowState;
use crate::END;

/// A validated, executable task graph. Produced by
/// [`GraphBuilder::build`](crate::GraphBuilder::build).
pub struct TaskGraph<S: WorkflowState> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    entries: Vec<String>,
    successors: HashMap<String, Vec<String>>,
    in_degree: HashMap<String, usize>,
}

impl<S: WorkflowState> std::fmt::Debug for TaskGraph<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskGraph")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("entries", &self.entries)
            .field("successors", &self.successors)
            .field("in_degree", &self.in_degree)
            .finish()
    }
}

impl<S: WorkflowState> TaskGraph<S> {
    pub(crate) fn new(
        nodes: HashMap<String, Arc<dyn Node<S>>>,
        entries: Vec<String>,
        successors: HashMap<String, Vec<String>>,
        in_degree: HashMap<String, usize>,
    ) -> Self {
        Self {
            nodes,
            entries,
            successors,
            in_degree,
        }
    }

    /// Registered node names, in no particular order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Run the graph to completion and return the final state.
    ///
    /// All entry nodes are dispatched immediately; each further node is
    /// dispatched the moment its last predecessor's patch has merged. Every
    /// node receives a snapshot of the state as of its dispatch, and patches
    /// are merged here, on the scheduler task, in completion order — merges
    /// never interleave.
    ///
    /// The first node failure aborts the run: the error is returned and any
    /// in-flight sibling tasks are cancelled when the task set drops, so a
    /// convergent node can never observe a partially satisfied precondition.
    ///
    /// The caller just awaits a single future; the internal concurrency is
    /// not observable through the return value.
    pub async fn execute(&self, initial: S) -> Result<S, GraphError> {
        let mut state = initial;
        let mut pending = self.in_degree.clone();
        let mut tasks: JoinSet<(String, Result<S::Patch, NodeError>)> = JoinSet::new();
        let mut running: HashMap<Id, String> = HashMap::new();

        for entry in &self.entries {
            self.dispatch(entry, &state, &mut tasks, &mut running)?;
        }

        while let Some(joined) = tasks.join_next_with_id().await {
            let (id, (name, outcome)) = match joined {
                Ok(completed) => completed,
                Err(join_err) => {
                    let node = running
                        .remove(&join_err.id())
                        .unwrap_or_else(|| "<unknown>".to_string());
                    tracing::warn!(node = %node, "node task panicked");
                    return Err(GraphError::NodePanicked { node });
                }
            };
            running.remove(&id);

            let patch = match outcome {
                Ok(patch) => patch,
                Err(source) => {
                    tracing::warn!(node = %name, error = %source, "node failed, aborting run");
                    return Err(GraphError::NodeFailed { node: name, source });
                }
            };

            state.merge(patch);
            tracing::debug!(node = %name, "patch merged");

            for succ in self.successors.get(&name).into_iter().flatten() {
                if succ == END {
                    continue;
                }
                let remaining = pending
                    .get_mut(succ)
                    .ok_or_else(|| GraphError::UnknownNode(succ.clone()))?;
                *remaining -= 1;
                if *remaining == 0 {
                    self.dispatch(succ, &state, &mut tasks, &mut running)?;
                }
            }
        }

        Ok(state)
    }

    fn dispatch(
        &self,
        name: &str,
        state: &S,
        tasks: &mut JoinSet<(String, Result<S::Patch, NodeError>)>,
        running: &mut HashMap<Id, String>,
    ) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get(name)
            .cloned()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))?;
        let snapshot = state.clone();
        let task_name = name.to_string();
        tracing::debug!(node = %name, "dispatching node");
        let handle = tasks.spawn(async move {
            let outcome = node.run(&snapshot).await;
            (task_name, outcome)
        });
        running.insert(handle.id(), name.to_string());
        Ok(())
    }
}
