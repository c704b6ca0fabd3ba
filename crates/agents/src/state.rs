//! Shared travel-planning state and its merge policy.

use serde::{Deserialize, Serialize};
use tripweaver_graph::WorkflowState;

/// One domain's gathered output: the provider payload (or an
/// `{"llm_generated": true}` sentinel for the LLM-native domains) plus the
/// generated analysis text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainResult {
    pub data: serde_json::Value,
    pub analysis: String,
}

/// The single state record flowing through the travel workflow.
///
/// `destination`, `dates` and `budget` are set once by the driver and only
/// ever read. Each result slot is written exactly once, by exactly one
/// gather node; `final_plan` is written by consolidation and may be
/// overwritten once by the approval flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelState {
    pub destination: String,
    pub dates: String,
    pub budget: String,
    pub flight_results: Option<DomainResult>,
    pub hotel_results: Option<DomainResult>,
    pub events_results: Option<DomainResult>,
    pub restaurant_results: Option<DomainResult>,
    pub attractions_results: Option<DomainResult>,
    pub social_places_results: Option<DomainResult>,
    pub final_plan: Option<String>,
    pub human_approved: bool,
}

impl TravelState {
    /// Fresh state with every result slot empty and approval unset.
    pub fn new(
        destination: impl Into<String>,
        dates: impl Into<String>,
        budget: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            dates: dates.into(),
            budget: budget.into(),
            flight_results: None,
            hotel_results: None,
            events_results: None,
            restaurant_results: None,
            attractions_results: None,
            social_places_results: None,
            final_plan: None,
            human_approved: false,
        }
    }

    /// True once all six gather slots are filled.
    pub fn all_results_present(&self) -> bool {
        self.flight_results.is_some()
            && self.hotel_results.is_some()
            && self.events_results.is_some()
            && self.restaurant_results.is_some()
            && self.attractions_results.is_some()
            && self.social_places_results.is_some()
    }
}

/// Partial-state update produced by one node. Every `Some` slot overwrites
/// the corresponding state slot on merge; `None` slots are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePatch {
    pub flight_results: Option<DomainResult>,
    pub hotel_results: Option<DomainResult>,
    pub events_results: Option<DomainResult>,
    pub restaurant_results: Option<DomainResult>,
    pub attractions_results: Option<DomainResult>,
    pub social_places_results: Option<DomainResult>,
    pub final_plan: Option<String>,
    pub human_approved: Option<bool>,
}

impl StatePatch {
    pub fn final_plan(plan: impl Into<String>) -> Self {
        Self {
            final_plan: Some(plan.into()),
            ..Self::default()
        }
    }

    pub fn approval(approved: bool) -> Self {
        Self {
            human_approved: Some(approved),
            ..Self::default()
        }
    }

    /// Approval decision together with a replacement plan (the
    /// modify-then-decide path).
    pub fn revised(plan: impl Into<String>, approved: bool) -> Self {
        Self {
            final_plan: Some(plan.into()),
            human_approved: Some(approved),
            ..Self::default()
        }
    }

    /// Slots this patch would write, for logging.
    pub fn touched_slots(&self) -> Vec<&'static str> {
        let mut slots = Vec::new();
        if self.flight_results.is_some() {
            slots.push("flight_results");
        }
        if self.hotel_results.is_some() {
            slots.push("hotel_results");
        }
        if self.events_results.is_some() {
            slots.push("events_results");
        }
        if self.restaurant_results.is_some() {
            slots.push("restaurant_results");
        }
        if self.attractions_results.is_some() {
            slots.push("attractions_results");
        }
        if self.social_places_results.is_some() {
            slots.push("social_places_results");
        }
        if self.final_plan.is_some() {
            slots.push("final_plan");
        }
        if self.human_approved.is_some() {
            slots.push("human_approved");
        }
        slots
    }
}

impl WorkflowState for TravelState {
    type Patch = StatePatch;

    /// Shallow union: patch slots overwrite, absent slots leave state
    /// untouched. Idempotent per slot.
    fn merge(&mut self, patch: StatePatch) {
        if let Some(v) = patch.flight_results {
            self.flight_results = Some(v);
        }
        if let Some(v) = patch.hotel_results {
            self.hotel_results = Some(v);
        }
        if let Some(v) = patch.events_results {
            self.events_results = Some(v);
        }
        if let Some(v) = patch.restaurant_results {
            self.restaurant_results = Some(v);
        }
        if let Some(v) = patch.attractions_results {
            self.attractions_results = Some(v);
        }
        if let Some(v) = patch.social_places_results {
            self.social_places_results = Some(v);
        }
        if let Some(v) = patch.final_plan {
            self.final_plan = Some(v);
        }
        if let Some(v) = patch.human_approved {
            self.human_approved = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result(tag: &str) -> DomainResult {
        DomainResult {
            data: json!({"tag": tag}),
            analysis: format!("analysis for {tag}"),
        }
    }

    #[test]
    fn new_state_has_empty_slots() {
        let state = TravelState::new("Barcelona, Spain", "March 15-20, 2024", "$2000");
        assert!(!state.all_results_present());
        assert!(state.final_plan.is_none());
        assert!(!state.human_approved);
    }

    #[test]
    fn merge_fills_only_patched_slots() {
        let mut state = TravelState::new("Barcelona, Spain", "March 15-20, 2024", "$2000");
        let patch = StatePatch {
            flight_results: Some(sample_result("flights")),
            ..StatePatch::default()
        };
        state.merge(patch);

        assert!(state.flight_results.is_some());
        assert!(state.hotel_results.is_none());
        assert_eq!(state.destination, "Barcelona, Spain");
    }

    #[test]
    fn merge_is_idempotent_per_patch() {
        let mut once = TravelState::new("Barcelona, Spain", "March 15-20, 2024", "$2000");
        let patch = StatePatch {
            hotel_results: Some(sample_result("hotels")),
            final_plan: Some("the plan".to_string()),
            ..StatePatch::default()
        };
        once.merge(patch.clone());

        let mut twice = once.clone();
        twice.merge(patch);

        assert_eq!(once, twice);
    }

    #[test]
    fn later_merge_overwrites_final_plan() {
        let mut state = TravelState::new("Barcelona, Spain", "March 15-20, 2024", "$2000");
        state.merge(StatePatch::final_plan("original"));
        state.merge(StatePatch::revised("revised", false));

        assert_eq!(state.final_plan.as_deref(), Some("revised"));
        assert!(!state.human_approved);
    }

    #[test]
    fn all_results_present_requires_all_six() {
        let mut state = TravelState::new("Barcelona, Spain", "March 15-20, 2024", "$2000");
        let slots: [fn(&mut StatePatch, DomainResult); 6] = [
            |p, r| p.flight_results = Some(r),
            |p, r| p.hotel_results = Some(r),
            |p, r| p.events_results = Some(r),
            |p, r| p.restaurant_results = Some(r),
            |p, r| p.attractions_results = Some(r),
            |p, r| p.social_places_results = Some(r),
        ];
        for (i, fill) in slots.iter().enumerate() {
            assert!(!state.all_results_present());
            let mut patch = StatePatch::default();
            fill(&mut patch, sample_result(&i.to_string()));
            state.merge(patch);
        }
        assert!(state.all_results_present());
    }

    #[test]
    fn touched_slots_names_patched_fields() {
        let patch = StatePatch::revised("plan", true);
        assert_eq!(patch.touched_slots(), vec!["final_plan", "human_approved"]);
    }
}
