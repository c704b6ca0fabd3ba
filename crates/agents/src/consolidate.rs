//! Fan-in: fold the six analyses into one travel plan.

use async_trait::async_trait;
use std::sync::Arc;

use tripweaver_graph::{Node, NodeError};
use tripweaver_llm::TextGenerator;

use crate::errors::AgentError;
use crate::prompts;
use crate::state::{DomainResult, StatePatch, TravelState};

/// Consolidation agent. Runs strictly after all six gather nodes — the
/// graph topology enforces that, so an absent analysis here means the graph
/// was mis-built and the error is fatal.
pub struct ConsolidateAgent {
    generator: Arc<dyn TextGenerator>,
}

impl ConsolidateAgent {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn consolidate(&self, state: &TravelState) -> Result<StatePatch, AgentError> {
        let flights = analysis_of(&state.flight_results, "flight_results")?;
        let hotels = analysis_of(&state.hotel_results, "hotel_results")?;
        let events = analysis_of(&state.events_results, "events_results")?;
        let restaurants = analysis_of(&state.restaurant_results, "restaurant_results")?;
        let attractions = analysis_of(&state.attractions_results, "attractions_results")?;
        let social_places = analysis_of(&state.social_places_results, "social_places_results")?;

        let vars = [
            ("destination", state.destination.as_str()),
            ("dates", state.dates.as_str()),
            ("budget", state.budget.as_str()),
            ("flights", flights),
            ("hotels", hotels),
            ("events", events),
            ("restaurants", restaurants),
            ("attractions", attractions),
            ("social_places", social_places),
        ];
        let final_plan = self.generator.generate(&prompts::CONSOLIDATION, &vars).await?;

        tracing::info!(plan_chars = final_plan.len(), "travel plan consolidated");
        Ok(StatePatch::final_plan(final_plan))
    }
}

fn analysis_of<'a>(
    slot: &'a Option<DomainResult>,
    name: &'static str,
) -> Result<&'a str, AgentError> {
    slot.as_ref()
        .map(|result| result.analysis.as_str())
        .ok_or(AgentError::MissingDependency(name))
}

#[async_trait]
impl Node<TravelState> for ConsolidateAgent {
    async fn run(&self, state: &TravelState) -> Result<StatePatch, NodeError> {
        Ok(self.consolidate(state).await?)
    }
}
