//! # Task-Graph Execution Engine
//!
//! A small LangGraph-inspired scheduler for fan-out / fan-in workflows:
//!
//! - **Parallel entry points**: every entry node is dispatched onto the
//!   runtime at once; independent nodes genuinely run concurrently.
//! - **Typed shared state**: nodes read a snapshot of the accumulating state
//!   and return a partial-state patch; patches are merged on the scheduler
//!   task, one at a time, so merges never interleave.
//! - **Convergence (barrier) semantics**: a node with several predecessors
//!   runs exactly once, after the last of them has merged.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tripweaver_graph::{FnNode, GraphBuilder, END};
//!
//! let graph = GraphBuilder::new()
//!     .add_node("left", FnNode(|s: Counters| async move { Ok(s.patch_left()) }))
//!     .add_node("right", FnNode(|s: Counters| async move { Ok(s.patch_right()) }))
//!     .add_node("join", FnNode(|s: Counters| async move { Ok(s.patch_total()) }))
//!     .add_entry("left")
//!     .add_entry("right")
//!     .add_edge("left", "join")
//!     .add_edge("right", "join")
//!     .add_edge("join", END)
//!     .build()?;
//!
//! let final_state = graph.execute(Counters::default()).await?;
//! ```

mod builder;
mod error;
mod executor;
mod node;
mod state;

pub use builder::GraphBuilder;
pub use error::GraphError;
pub use executor::TaskGraph;
pub use node::{FnNode, Node, NodeError};
pub use state::WorkflowState;

/// Terminal marker. Valid only as an edge target; reaching it ends that path.
pub const END: &str = "__end__";
