//! Terminal collaborator over `dialoguer`.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tripweaver_agents::{AgentError, Collaborator};

/// Interactive prompts on the controlling terminal.
pub struct ConsoleCollaborator;

impl ConsoleCollaborator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleCollaborator {
    fn default() -> Self {
        Self::new()
    }
}

fn channel_error(err: dialoguer::Error) -> AgentError {
    AgentError::Collaborator(err.to_string())
}

impl Collaborator for ConsoleCollaborator {
    fn ask_choice(
        &self,
        prompt: &str,
        options: &[&str],
        default: &str,
    ) -> Result<String, AgentError> {
        let default_index = options.iter().position(|o| *o == default).unwrap_or(0);
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(default_index)
            .interact()
            .map_err(channel_error)?;
        Ok(options[index].to_string())
    }

    fn ask_text(&self, prompt: &str) -> Result<String, AgentError> {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("please enter a value")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(channel_error)?;
        Ok(text.trim().to_string())
    }

    fn confirm(&self, prompt: &str) -> Result<bool, AgentError> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()
            .map_err(channel_error)
    }

    fn present(&self, heading: &str, body: &str) {
        println!("\n=== {heading} ===\n");
        println!("{body}\n");
    }
}
