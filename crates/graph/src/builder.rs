//! Graph construction and validation.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::error::GraphError;
use crate::executor::TaskGraph;
use crate::node::Node;
use crate::state::WorkflowState;
use crate::END;

/// Builder for a [`TaskGraph`].
///
/// Registration order is preserved so validation errors are deterministic.
/// All structural checks run in [`build`](Self::build): edge endpoints must
/// be registered (`END` is only valid as a target), entries must have no
/// predecessors, every other node must have at least one, the edge set must
/// be acyclic, and `END` must be reachable from every node.
pub struct GraphBuilder<S: WorkflowState> {
    nodes: Vec<(String, Arc<dyn Node<S>>)>,
    entries: Vec<String>,
    edges: Vec<(String, String)>,
}

impl<S: WorkflowState> Default for GraphBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WorkflowState> GraphBuilder<S> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            entries: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Register a named node.
    pub fn add_node(mut self, name: impl Into<String>, node: impl Node<S> + 'static) -> Self {
        self.nodes.push((name.into(), Arc::new(node)));
        self
    }

    /// Register a node that is already behind an `Arc`.
    pub fn add_shared_node(mut self, name: impl Into<String>, node: Arc<dyn Node<S>>) -> Self {
        self.nodes.push((name.into(), node));
        self
    }

    /// Declare an entry point. Entries are dispatched together when
    /// execution starts; a graph may declare any number of them.
    pub fn add_entry(mut self, name: impl Into<String>) -> Self {
        self.entries.push(name.into());
        self
    }

    /// Declare a directed edge. `to` may be [`END`].
    pub fn add_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Validate the topology and produce an executable graph.
    pub fn build(self) -> Result<TaskGraph<S>, GraphError> {
        let mut nodes: HashMap<String, Arc<dyn Node<S>>> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for (name, node) in self.nodes {
            if nodes.insert(name.clone(), node).is_some() {
                return Err(GraphError::DuplicateNode(name));
            }
            order.push(name);
        }

        if self.entries.is_empty() {
            return Err(GraphError::NoEntryNodes);
        }
        for entry in &self.entries {
            if !nodes.contains_key(entry) {
                return Err(GraphError::UnknownNode(entry.clone()));
            }
        }

        let mut seen_edges: HashSet<(String, String)> = HashSet::new();
        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        let mut in_degree: HashMap<String, usize> =
            order.iter().map(|n| (n.clone(), 0)).collect();
        for (from, to) in &self.edges {
            if !nodes.contains_key(from) {
                return Err(GraphError::UnknownNode(from.clone()));
            }
            if to != END && !nodes.contains_key(to) {
                return Err(GraphError::UnknownNode(to.clone()));
            }
            if !seen_edges.insert((from.clone(), to.clone())) {
                return Err(GraphError::DuplicateEdge {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
            successors
                .entry(from.clone())
                .or_default()
                .push(to.clone());
            if to != END {
                *in_degree.get_mut(to).expect("target registered above") += 1;
            }
        }

        let entry_set: HashSet<&str> = self.entries.iter().map(String::as_str).collect();
        for name in &order {
            let degree = in_degree[name];
            if entry_set.contains(name.as_str()) {
                if degree != 0 {
                    return Err(GraphError::EntryHasPredecessor(name.clone()));
                }
            } else if degree == 0 {
                return Err(GraphError::OrphanNode(name.clone()));
            }
        }

        Self::check_acyclic(&order, &successors, &in_degree)?;
        Self::check_end_reachable(&order, &self.edges)?;

        Ok(TaskGraph::new(nodes, self.entries, successors, in_degree))
    }

    /// Kahn's algorithm over the node-to-node edges.
    fn check_acyclic(
        order: &[String],
        successors: &HashMap<String, Vec<String>>,
        in_degree: &HashMap<String, usize>,
    ) -> Result<(), GraphError> {
        let mut degrees = in_degree.clone();
        let mut queue: VecDeque<&String> =
            order.iter().filter(|n| degrees[*n] == 0).collect();
        let mut visited = 0usize;
        while let Some(name) = queue.pop_front() {
            visited += 1;
            for succ in successors.get(name).into_iter().flatten() {
                if succ == END {
                    continue;
                }
                let d = degrees.get_mut(succ).expect("validated successor");
                *d -= 1;
                if *d == 0 {
                    queue.push_back(succ);
                }
            }
        }
        if visited == order.len() {
            Ok(())
        } else {
            let stuck = order
                .iter()
                .find(|n| degrees[*n] > 0)
                .expect("some node remains in the cycle");
            Err(GraphError::CycleDetected(stuck.clone()))
        }
    }

    /// Reverse reachability from `END`: every node must lie on some path to
    /// the terminal marker.
    fn check_end_reachable(order: &[String], edges: &[(String, String)]) -> Result<(), GraphError> {
        let mut predecessors: HashMap<&str, Vec<&str>> = HashMap::new();
        for (from, to) in edges {
            predecessors.entry(to.as_str()).or_default().push(from);
        }

        let mut reaches_end: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = predecessors
            .get(END)
            .into_iter()
            .flatten()
            .copied()
            .collect();
        while let Some(name) = queue.pop_front() {
            if reaches_end.insert(name) {
                for pred in predecessors.get(name).into_iter().flatten() {
                    queue.push_back(pred);
                }
            }
        }

        match order.iter().find(|n| !reaches_end.contains(n.as_str())) {
            Some(stranded) => Err(GraphError::EndUnreachable(stranded.clone())),
            None => Ok(()),
        }
    }
}
