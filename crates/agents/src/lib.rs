//! # Travel-Planning Agents
//!
//! The travel domain on top of the task-graph engine: six independent
//! gather agents (flights, hotels, events, restaurants, attractions, social
//! places) fan out over a shared request, a consolidation agent folds their
//! analyses into one plan, and a human-approval agent closes the loop.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tripweaver_agents::{build_travel_graph, ScriptedCollaborator, TravelState};
//! use tripweaver_llm::ScriptedGenerator;
//!
//! let generator = Arc::new(ScriptedGenerator::new().with_reply("Sounds great"));
//! let collaborator = Arc::new(ScriptedCollaborator::new().with_choice("yes"));
//! let graph = build_travel_graph(generator, collaborator)?;
//!
//! let state = TravelState::new("Barcelona, Spain", "March 15-20, 2024", "$2000");
//! let final_state = graph.execute(state).await?;
//! assert!(final_state.human_approved);
//! ```

mod approval;
mod consolidate;
mod errors;
mod gather;
pub mod prompts;
pub mod search;
mod state;
mod workflow;

pub use approval::{ApprovalAgent, Collaborator, ScriptedCollaborator};
pub use consolidate::ConsolidateAgent;
pub use errors::AgentError;
pub use gather::{Domain, GatherAgent};
pub use state::{DomainResult, StatePatch, TravelState};
pub use workflow::{build_travel_graph, CONSOLIDATE, HUMAN_APPROVAL};
