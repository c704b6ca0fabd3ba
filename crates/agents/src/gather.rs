//! The six independent gather agents.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use tripweaver_graph::{Node, NodeError};
use tripweaver_llm::{PromptTemplate, TextGenerator};

use crate::errors::AgentError;
use crate::prompts;
use crate::search;
use crate::state::{DomainResult, StatePatch, TravelState};

/// One slice of the travel request. Flights through restaurants are backed
/// by a search provider; attractions and social places are generated
/// directly by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Flights,
    Hotels,
    Events,
    Restaurants,
    Attractions,
    SocialPlaces,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Flights,
        Domain::Hotels,
        Domain::Events,
        Domain::Restaurants,
        Domain::Attractions,
        Domain::SocialPlaces,
    ];

    /// Node name in the workflow graph.
    pub fn node_name(self) -> &'static str {
        match self {
            Domain::Flights => "flight_search",
            Domain::Hotels => "hotel_search",
            Domain::Events => "events_search",
            Domain::Restaurants => "restaurant_search",
            Domain::Attractions => "attractions_search",
            Domain::SocialPlaces => "social_places_search",
        }
    }

    fn template(self) -> &'static PromptTemplate {
        match self {
            Domain::Flights => &prompts::FLIGHT_ANALYSIS,
            Domain::Hotels => &prompts::HOTEL_ANALYSIS,
            Domain::Events => &prompts::EVENTS_ANALYSIS,
            Domain::Restaurants => &prompts::RESTAURANT_ANALYSIS,
            Domain::Attractions => &prompts::ATTRACTIONS_GUIDE,
            Domain::SocialPlaces => &prompts::SOCIAL_PLACES_GUIDE,
        }
    }

    /// Run the search provider, if this domain has one.
    fn search(self, state: &TravelState) -> Option<Value> {
        match self {
            Domain::Flights => Some(search::flight_search(
                &state.destination,
                &state.dates,
                &state.budget,
            )),
            Domain::Hotels => Some(search::hotel_search(
                &state.destination,
                &state.dates,
                &state.budget,
            )),
            Domain::Events => Some(search::events_search(&state.destination, &state.dates)),
            Domain::Restaurants => Some(search::restaurant_search(&state.destination)),
            Domain::Attractions | Domain::SocialPlaces => None,
        }
    }

    /// Wrap this domain's result into a patch touching only its own slot.
    fn patch(self, result: DomainResult) -> StatePatch {
        let mut patch = StatePatch::default();
        match self {
            Domain::Flights => patch.flight_results = Some(result),
            Domain::Hotels => patch.hotel_results = Some(result),
            Domain::Events => patch.events_results = Some(result),
            Domain::Restaurants => patch.restaurant_results = Some(result),
            Domain::Attractions => patch.attractions_results = Some(result),
            Domain::SocialPlaces => patch.social_places_results = Some(result),
        }
        patch
    }
}

/// Gather agent for a single [`Domain`]. Reads the request fields, runs the
/// domain's provider (if any), asks the generator for an analysis, and
/// returns a patch for its own result slot — nothing else.
pub struct GatherAgent {
    domain: Domain,
    generator: Arc<dyn TextGenerator>,
}

impl GatherAgent {
    pub fn new(domain: Domain, generator: Arc<dyn TextGenerator>) -> Self {
        Self { domain, generator }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub async fn gather(&self, state: &TravelState) -> Result<StatePatch, AgentError> {
        let searched = self.domain.search(state);
        let results_json = match &searched {
            Some(data) => serde_json::to_string_pretty(data)?,
            None => String::new(),
        };

        let vars = [
            ("destination", state.destination.as_str()),
            ("dates", state.dates.as_str()),
            ("budget", state.budget.as_str()),
            ("results", results_json.as_str()),
        ];
        let analysis = self
            .generator
            .generate(self.domain.template(), &vars)
            .await?;

        tracing::info!(
            node = self.domain.node_name(),
            analysis_chars = analysis.len(),
            "gather complete"
        );

        let data = searched.unwrap_or_else(|| json!({"llm_generated": true}));
        Ok(self.domain.patch(DomainResult { data, analysis }))
    }
}

#[async_trait]
impl Node<TravelState> for GatherAgent {
    async fn run(&self, state: &TravelState) -> Result<StatePatch, NodeError> {
        Ok(self.gather(state).await?)
    }
}
