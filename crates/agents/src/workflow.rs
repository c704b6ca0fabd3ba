//! The travel-planning workflow graph.

use std::sync::Arc;

use tripweaver_graph::{GraphBuilder, GraphError, TaskGraph, END};
use tripweaver_llm::TextGenerator;

use crate::approval::{ApprovalAgent, Collaborator};
use crate::consolidate::ConsolidateAgent;
use crate::gather::{Domain, GatherAgent};
use crate::state::TravelState;

/// Fan-in node name.
pub const CONSOLIDATE: &str = "consolidate";
/// Terminal interactive node name.
pub const HUMAN_APPROVAL: &str = "human_approval";

/// Build the full workflow: six gather entries fanning into
/// [`CONSOLIDATE`], then [`HUMAN_APPROVAL`], then [`END`].
///
/// The generator and collaborator are owned by the caller and injected
/// here, so tests (and alternative frontends) substitute them freely.
pub fn build_travel_graph(
    generator: Arc<dyn TextGenerator>,
    collaborator: Arc<dyn Collaborator>,
) -> Result<TaskGraph<TravelState>, GraphError> {
    let mut builder = GraphBuilder::new();
    for domain in Domain::ALL {
        builder = builder
            .add_node(
                domain.node_name(),
                GatherAgent::new(domain, Arc::clone(&generator)),
            )
            .add_entry(domain.node_name())
            .add_edge(domain.node_name(), CONSOLIDATE);
    }
    builder
        .add_node(CONSOLIDATE, ConsolidateAgent::new(Arc::clone(&generator)))
        .add_node(HUMAN_APPROVAL, ApprovalAgent::new(generator, collaborator))
        .add_edge(CONSOLIDATE, HUMAN_APPROVAL)
        .add_edge(HUMAN_APPROVAL, END)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::ScriptedCollaborator;
    use tripweaver_llm::ScriptedGenerator;

    #[test]
    fn graph_registers_all_eight_nodes() {
        let graph = build_travel_graph(
            Arc::new(ScriptedGenerator::new()),
            Arc::new(ScriptedCollaborator::new()),
        )
        .unwrap();

        let mut names: Vec<&str> = graph.node_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "attractions_search",
                "consolidate",
                "events_search",
                "flight_search",
                "hotel_search",
                "human_approval",
                "restaurant_search",
                "social_places_search",
            ]
        );
    }
}
