//! Travel-request collection: direct prompts or an AI-assisted
//! conversation.

use anyhow::Result;
use regex::Regex;
use serde_json::Value;
use tripweaver_agents::{prompts, Collaborator};
use tripweaver_llm::TextGenerator;

/// The three request fields the workflow needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelDetails {
    pub destination: String,
    pub dates: String,
    pub budget: String,
}

impl TravelDetails {
    pub fn is_complete(&self) -> bool {
        !self.destination.is_empty() && !self.dates.is_empty() && !self.budget.is_empty()
    }

    /// Overwrite fields with newly extracted non-empty values; everything
    /// else keeps its prior value.
    fn absorb(&mut self, found: ExtractedFields) {
        if !found.destination.is_empty() {
            self.destination = found.destination;
        }
        if !found.dates.is_empty() {
            self.dates = found.dates;
        }
        if !found.budget.is_empty() {
            self.budget = found.budget;
        }
    }

    fn or_not_provided(value: &str) -> &str {
        if value.is_empty() {
            "Not provided"
        } else {
            value
        }
    }
}

/// Ask for the three fields one by one.
pub fn collect_direct(collaborator: &dyn Collaborator) -> Result<TravelDetails> {
    Ok(TravelDetails {
        destination: collaborator.ask_text("Destination")?,
        dates: collaborator.ask_text("Travel dates (e.g., March 15-20, 2024)")?,
        budget: collaborator.ask_text("Budget (e.g., $2000 total)")?,
    })
}

const MAX_TURNS: usize = 10;

/// Collect the request through a model-led conversation.
///
/// Each user message goes through an extraction pass; when extraction fails
/// the previously collected values are kept and the conversation simply
/// continues. The assistant signals completion with a `COMPLETE: YES` reply
/// carrying `DESTINATION:`/`DATES:`/`BUDGET:` lines.
pub async fn collect_conversational(
    generator: &dyn TextGenerator,
    collaborator: &dyn Collaborator,
) -> Result<TravelDetails> {
    let mut details = TravelDetails::default();
    let mut history: Vec<String> = Vec::new();

    let opening = generator.generate(&prompts::INTAKE_OPENING, &[]).await?;
    collaborator.present("Assistant", &opening);
    history.push(format!("AI: {opening}"));

    for _ in 0..MAX_TURNS {
        let user_input = collaborator.ask_text("You")?;
        if user_input.trim().is_empty() {
            continue;
        }
        history.push(format!("User: {user_input}"));

        let extraction_vars = [
            ("user_input", user_input.as_str()),
            ("destination", details.destination.as_str()),
            ("dates", details.dates.as_str()),
            ("budget", details.budget.as_str()),
        ];
        let raw = generator
            .generate(&prompts::INTAKE_EXTRACTION, &extraction_vars)
            .await?;
        match extract_fields(&raw) {
            Ok(found) => details.absorb(found),
            Err(err) => {
                // Keep whatever was collected so far and move on.
                tracing::debug!(error = %err, "extraction failed, keeping prior values");
            }
        }

        let recent = recent_history(&history, 6);
        let context_vars = [
            ("conversation_history", recent.as_str()),
            ("user_input", user_input.as_str()),
            (
                "destination",
                TravelDetails::or_not_provided(&details.destination),
            ),
            ("dates", TravelDetails::or_not_provided(&details.dates)),
            ("budget", TravelDetails::or_not_provided(&details.budget)),
        ];
        let reply = generator
            .generate(&prompts::INTAKE_CONTEXT, &context_vars)
            .await?;
        collaborator.present("Assistant", &reply);
        history.push(format!("AI: {reply}"));

        if reply.contains("COMPLETE: YES") {
            apply_completion_lines(&reply, &mut details);
            break;
        }
    }

    if !details.is_complete() {
        tracing::warn!("intake ended with missing fields, using what was collected");
    }
    Ok(details)
}

fn recent_history(history: &[String], keep: usize) -> String {
    let start = history.len().saturating_sub(keep);
    history[start..].join("\n")
}

#[derive(Debug, Default)]
struct ExtractedFields {
    destination: String,
    dates: String,
    budget: String,
}

#[derive(Debug, thiserror::Error)]
enum ExtractionError {
    #[error("no JSON object in reply")]
    NoJson,
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pull the first `{...}` span out of the reply and read the three known
/// keys from it. Unknown keys are ignored; missing keys read as empty.
fn extract_fields(reply: &str) -> Result<ExtractedFields, ExtractionError> {
    let object = Regex::new(r"(?s)\{.*\}")
        .expect("static pattern")
        .find(reply)
        .ok_or(ExtractionError::NoJson)?;
    let parsed: Value = serde_json::from_str(object.as_str())?;

    let field = |key: &str| {
        parsed[key]
            .as_str()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    };
    Ok(ExtractedFields {
        destination: field("destination"),
        dates: field("dates"),
        budget: field("budget"),
    })
}

/// Read the `DESTINATION:`/`DATES:`/`BUDGET:` lines from a completion
/// reply.
fn apply_completion_lines(reply: &str, details: &mut TravelDetails) {
    for line in reply.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("DESTINATION:") {
            details.destination = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("DATES:") {
            details.dates = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("BUDGET:") {
            details.budget = rest.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripweaver_agents::ScriptedCollaborator;

    #[test]
    fn extracts_fields_from_surrounding_prose() {
        let reply = r#"Here you go: {"destination": "Rome, Italy", "dates": "", "budget": "$1200"} hope that helps"#;
        let found = extract_fields(reply).unwrap();
        assert_eq!(found.destination, "Rome, Italy");
        assert_eq!(found.dates, "");
        assert_eq!(found.budget, "$1200");
    }

    #[test]
    fn extraction_failure_is_an_error_not_a_panic() {
        assert!(matches!(
            extract_fields("no json here"),
            Err(ExtractionError::NoJson)
        ));
        assert!(matches!(
            extract_fields("{not valid json}"),
            Err(ExtractionError::Parse(_))
        ));
    }

    #[test]
    fn absorb_keeps_prior_values_for_empty_fields() {
        let mut details = TravelDetails {
            destination: "Rome, Italy".to_string(),
            dates: "May 1-5".to_string(),
            budget: String::new(),
        };
        details.absorb(ExtractedFields {
            destination: String::new(),
            dates: "June 1-5".to_string(),
            budget: "$900".to_string(),
        });
        assert_eq!(details.destination, "Rome, Italy");
        assert_eq!(details.dates, "June 1-5");
        assert_eq!(details.budget, "$900");
    }

    #[test]
    fn completion_lines_fill_the_details() {
        let reply = "Perfect! I have all the information I need.\n\n\
                     DESTINATION: Barcelona, Spain\n\
                     DATES: March 15-20, 2024\n\
                     BUDGET: $2000\n\
                     COMPLETE: YES";
        let mut details = TravelDetails::default();
        apply_completion_lines(reply, &mut details);
        assert_eq!(details.destination, "Barcelona, Spain");
        assert_eq!(details.dates, "March 15-20, 2024");
        assert_eq!(details.budget, "$2000");
        assert!(details.is_complete());
    }

    #[test]
    fn direct_intake_reads_three_fields() {
        let collaborator = ScriptedCollaborator::new()
            .with_text("Barcelona, Spain")
            .with_text("March 15-20, 2024")
            .with_text("$2000");
        let details = collect_direct(&collaborator).unwrap();
        assert_eq!(
            details,
            TravelDetails {
                destination: "Barcelona, Spain".to_string(),
                dates: "March 15-20, 2024".to_string(),
                budget: "$2000".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn conversational_intake_completes_on_the_sentinel() {
        use tripweaver_llm::ScriptedGenerator;

        let generator = ScriptedGenerator::new()
            // Opening message.
            .with_reply("Where would you like to go?")
            // Extraction for the single user turn.
            .when_contains(
                "Extract travel information",
                r#"{"destination": "Barcelona, Spain", "dates": "March 15-20, 2024", "budget": "$2000"}"#,
            )
            // Context reply signalling completion.
            .when_contains(
                "CONVERSATION HISTORY",
                "Perfect! I have all the information I need.\n\n\
                 DESTINATION: Barcelona, Spain\n\
                 DATES: March 15-20, 2024\n\
                 BUDGET: $2000\n\
                 COMPLETE: YES",
            );
        let collaborator = ScriptedCollaborator::new()
            .with_text("Barcelona in March for about $2000");

        let details = collect_conversational(&generator, &collaborator)
            .await
            .unwrap();
        assert!(details.is_complete());
        assert_eq!(details.destination, "Barcelona, Spain");
    }
}
