//! Human approval: the terminal interactive agent.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use tripweaver_graph::{Node, NodeError};
use tripweaver_llm::TextGenerator;

use crate::errors::AgentError;
use crate::prompts;
use crate::state::{StatePatch, TravelState};

/// The interactive counterpart of the workflow. Implementations collect
/// decisions and free text; `present` hands them content to display, so
/// rendering stays out of the agents entirely.
pub trait Collaborator: Send + Sync {
    /// Ask for one of `options`. Implementations may return any string —
    /// validation and re-prompting happen in the approval loop.
    fn ask_choice(
        &self,
        prompt: &str,
        options: &[&str],
        default: &str,
    ) -> Result<String, AgentError>;

    /// Ask for free-form text.
    fn ask_text(&self, prompt: &str) -> Result<String, AgentError>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool, AgentError>;

    /// Display content to the human. Default: drop it.
    fn present(&self, _heading: &str, _body: &str) {}
}

/// Decisions accepted by the approval loop.
const DECISIONS: [&str; 3] = ["yes", "no", "modify"];

/// Terminal approval agent. Presents the consolidated plan, then loops on
/// `{yes, no, modify}` until it gets a valid decision:
///
/// - `yes` / `no` settle `human_approved` and finish;
/// - `modify` collects feedback, asks the generator for a revision,
///   presents it, and takes a single yes/no confirmation. The revised text
///   replaces `final_plan` in both cases — a declined revision is kept, not
///   rolled back.
///
/// One revision round only; the confirm answer is final.
pub struct ApprovalAgent {
    generator: Arc<dyn TextGenerator>,
    collaborator: Arc<dyn Collaborator>,
}

impl ApprovalAgent {
    pub fn new(generator: Arc<dyn TextGenerator>, collaborator: Arc<dyn Collaborator>) -> Self {
        Self {
            generator,
            collaborator,
        }
    }

    pub async fn review(&self, state: &TravelState) -> Result<StatePatch, AgentError> {
        let plan = state
            .final_plan
            .as_deref()
            .ok_or(AgentError::MissingDependency("final_plan"))?;

        self.collaborator.present(
            &format!(
                "Travel plan for {} ({}, {})",
                state.destination, state.dates, state.budget
            ),
            plan,
        );

        loop {
            let raw = self.collaborator.ask_choice(
                "Do you approve this travel plan?",
                &DECISIONS,
                "yes",
            )?;
            match raw.trim().to_lowercase().as_str() {
                "yes" | "y" => {
                    tracing::info!("travel plan approved");
                    return Ok(StatePatch::approval(true));
                }
                "no" | "n" => {
                    tracing::info!("travel plan rejected");
                    return Ok(StatePatch::approval(false));
                }
                "modify" | "m" => return self.revise(plan).await,
                other => {
                    // Malformed input never fails the node; ask again.
                    let rejected = AgentError::InvalidChoice(other.to_string());
                    tracing::debug!(error = %rejected, "re-prompting for a valid decision");
                }
            }
        }
    }

    async fn revise(&self, original_plan: &str) -> Result<StatePatch, AgentError> {
        let feedback = self.collaborator.ask_text("Your feedback")?;
        let revised = self
            .generator
            .generate(
                &prompts::PLAN_MODIFICATION,
                &[("original_plan", original_plan), ("feedback", &feedback)],
            )
            .await?;

        self.collaborator.present("Revised travel plan", &revised);
        let approved = self.collaborator.confirm("Do you approve the revised plan?")?;
        tracing::info!(approved, "revised travel plan reviewed");
        Ok(StatePatch::revised(revised, approved))
    }
}

#[async_trait]
impl Node<TravelState> for ApprovalAgent {
    async fn run(&self, state: &TravelState) -> Result<StatePatch, NodeError> {
        Ok(self.review(state).await?)
    }
}

/// Queue-driven [`Collaborator`] for tests and non-interactive runs.
/// Exhausted choice scripts fall back to the prompt's default; exhausted
/// text/confirm scripts are an error.
#[derive(Default)]
pub struct ScriptedCollaborator {
    choices: Mutex<VecDeque<String>>,
    texts: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
    choice_prompts: Mutex<Vec<String>>,
    presented: Mutex<Vec<(String, String)>>,
}

impl ScriptedCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice(self, choice: impl Into<String>) -> Self {
        self.choices.lock().push_back(choice.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.texts.lock().push_back(text.into());
        self
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.lock().push_back(answer);
        self
    }

    /// How many times a decision was requested.
    pub fn choice_count(&self) -> usize {
        self.choice_prompts.lock().len()
    }

    /// Everything shown via `present`, in order.
    pub fn presented(&self) -> Vec<(String, String)> {
        self.presented.lock().clone()
    }
}

impl Collaborator for ScriptedCollaborator {
    fn ask_choice(
        &self,
        prompt: &str,
        _options: &[&str],
        default: &str,
    ) -> Result<String, AgentError> {
        self.choice_prompts.lock().push(prompt.to_string());
        Ok(self
            .choices
            .lock()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }

    fn ask_text(&self, _prompt: &str) -> Result<String, AgentError> {
        self.texts
            .lock()
            .pop_front()
            .ok_or_else(|| AgentError::Collaborator("text script exhausted".to_string()))
    }

    fn confirm(&self, _prompt: &str) -> Result<bool, AgentError> {
        self.confirms
            .lock()
            .pop_front()
            .ok_or_else(|| AgentError::Collaborator("confirm script exhausted".to_string()))
    }

    fn present(&self, heading: &str, body: &str) {
        self.presented
            .lock()
            .push((heading.to_string(), body.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripweaver_llm::ScriptedGenerator;

    fn reviewed_state() -> TravelState {
        let mut state = TravelState::new("Barcelona", "March 15-20, 2024", "$2000");
        state.final_plan = Some("Original plan".to_string());
        state
    }

    fn agent(
        generator: ScriptedGenerator,
        collaborator: ScriptedCollaborator,
    ) -> (ApprovalAgent, Arc<ScriptedCollaborator>) {
        let collaborator = Arc::new(collaborator);
        let shared: Arc<dyn Collaborator> = collaborator.clone();
        let agent = ApprovalAgent::new(Arc::new(generator), shared);
        (agent, collaborator)
    }

    #[tokio::test]
    async fn yes_approves_and_keeps_the_plan() {
        let (agent, _) = agent(
            ScriptedGenerator::new(),
            ScriptedCollaborator::new().with_choice("yes"),
        );
        let patch = agent.review(&reviewed_state()).await.unwrap();
        assert_eq!(patch.human_approved, Some(true));
        assert!(patch.final_plan.is_none());
    }

    #[tokio::test]
    async fn no_rejects_without_touching_the_plan() {
        let (agent, _) = agent(
            ScriptedGenerator::new(),
            ScriptedCollaborator::new().with_choice("no"),
        );
        let patch = agent.review(&reviewed_state()).await.unwrap();
        assert_eq!(patch.human_approved, Some(false));
        assert!(patch.final_plan.is_none());
    }

    #[tokio::test]
    async fn shorthand_answers_are_accepted() {
        for (answer, expected) in [("y", true), ("N", false), ("  YES ", true)] {
            let (agent, _) = agent(
                ScriptedGenerator::new(),
                ScriptedCollaborator::new().with_choice(answer),
            );
            let patch = agent.review(&reviewed_state()).await.unwrap();
            assert_eq!(patch.human_approved, Some(expected), "answer {answer:?}");
        }
    }

    #[tokio::test]
    async fn modify_then_confirm_adopts_the_revision() {
        let (agent, collaborator) = agent(
            ScriptedGenerator::new().with_reply("Revised plan with more restaurants"),
            ScriptedCollaborator::new()
                .with_choice("modify")
                .with_text("add more restaurants")
                .with_confirm(true),
        );
        let patch = agent.review(&reviewed_state()).await.unwrap();

        assert_eq!(
            patch.final_plan.as_deref(),
            Some("Revised plan with more restaurants")
        );
        assert_eq!(patch.human_approved, Some(true));
        // The revision was shown before the confirm.
        assert!(collaborator
            .presented()
            .iter()
            .any(|(heading, body)| heading == "Revised travel plan"
                && body == "Revised plan with more restaurants"));
    }

    #[tokio::test]
    async fn declined_revision_is_kept_unapproved() {
        // Deliberate: a declined revision still replaces the plan.
        let (agent, _) = agent(
            ScriptedGenerator::new().with_reply("Revised but unwanted"),
            ScriptedCollaborator::new()
                .with_choice("modify")
                .with_text("make it cheaper")
                .with_confirm(false),
        );
        let patch = agent.review(&reviewed_state()).await.unwrap();

        assert_eq!(patch.final_plan.as_deref(), Some("Revised but unwanted"));
        assert_eq!(patch.human_approved, Some(false));
    }

    #[tokio::test]
    async fn invalid_choices_reprompt_until_valid() {
        let (agent, collaborator) = agent(
            ScriptedGenerator::new(),
            ScriptedCollaborator::new()
                .with_choice("book it")
                .with_choice("definitely")
                .with_choice("yes"),
        );
        let patch = agent.review(&reviewed_state()).await.unwrap();
        assert_eq!(patch.human_approved, Some(true));
        assert_eq!(collaborator.choice_count(), 3);
    }

    #[tokio::test]
    async fn missing_plan_is_a_fatal_dependency_error() {
        let (agent, _) = agent(
            ScriptedGenerator::new(),
            ScriptedCollaborator::new().with_choice("yes"),
        );
        let state = TravelState::new("Barcelona", "March 15-20, 2024", "$2000");
        let err = agent.review(&state).await.unwrap_err();
        assert!(matches!(err, AgentError::MissingDependency("final_plan")));
    }

    #[tokio::test]
    async fn revision_failure_propagates() {
        let (agent, _) = agent(
            ScriptedGenerator::new().with_failure("model offline"),
            ScriptedCollaborator::new()
                .with_choice("modify")
                .with_text("anything"),
        );
        let err = agent.review(&reviewed_state()).await.unwrap_err();
        assert!(matches!(err, AgentError::Generation(_)));
    }

    #[tokio::test]
    async fn exhausted_choice_script_falls_back_to_the_default() {
        let (agent, _) = agent(ScriptedGenerator::new(), ScriptedCollaborator::new());
        let patch = agent.review(&reviewed_state()).await.unwrap();
        assert_eq!(patch.human_approved, Some(true));
    }
}
