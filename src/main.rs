//! Parallel travel planning with a human in the loop.
//!
//! Six gather agents run concurrently over one request, a consolidation
//! step folds their analyses into a single plan, and the plan goes to the
//! terminal for approval before anything else happens with it.

mod console;
mod intake;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use console::ConsoleCollaborator;
use intake::TravelDetails;
use tripweaver_agents::{build_travel_graph, Collaborator, TravelState};
use tripweaver_llm::{OpenAiGenerator, TextGenerator};

#[derive(Parser)]
#[command(
    name = "tripweaver",
    version,
    about = "Plan a trip with parallel searches and human approval"
)]
struct Cli {
    /// Travel destination, e.g. "Barcelona, Spain"
    #[arg(long)]
    destination: Option<String>,

    /// Travel dates, e.g. "March 15-20, 2024"
    #[arg(long)]
    dates: Option<String>,

    /// Budget, e.g. "$2000 total"
    #[arg(long)]
    budget: Option<String>,

    /// Collect the request through an AI-assisted conversation instead of
    /// direct prompts
    #[arg(long)]
    ai_intake: bool,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model to use for every generation step
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// OpenAI-compatible base URL (proxy, local server)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tripweaver=info,warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut generator = OpenAiGenerator::new(&cli.api_key).with_model(&cli.model);
    if let Some(base_url) = &cli.base_url {
        generator = generator.with_base_url(base_url);
    }
    let generator: Arc<dyn TextGenerator> = Arc::new(generator);
    let collaborator: Arc<dyn Collaborator> = Arc::new(ConsoleCollaborator::new());

    let details = resolve_request(&cli, generator.as_ref(), collaborator.as_ref()).await?;
    anyhow::ensure!(
        details.is_complete(),
        "a destination, dates and budget are all required"
    );

    collaborator.present(
        "Travel request",
        &format!(
            "Destination: {}\nDates:       {}\nBudget:      {}",
            details.destination, details.dates, details.budget
        ),
    );
    tracing::info!("running parallel searches for flights, hotels, events, restaurants, attractions and social places");

    let graph = build_travel_graph(Arc::clone(&generator), Arc::clone(&collaborator))
        .context("building the travel workflow")?;
    let state = TravelState::new(details.destination, details.dates, details.budget);
    let result = graph
        .execute(state)
        .await
        .context("travel planning failed")?;

    if result.human_approved {
        collaborator.present(
            "Approved",
            "Your travel plan has been approved and is ready for booking.\n\
             Next step: proceed with reservations based on the approved plan.",
        );
    } else {
        collaborator.present(
            "Not approved",
            "The travel plan was not approved.\n\
             You can restart the process with modified requirements.",
        );
    }

    Ok(())
}

/// Use the flags when all three are present, otherwise fall back to the
/// chosen interactive intake.
async fn resolve_request(
    cli: &Cli,
    generator: &dyn TextGenerator,
    collaborator: &dyn Collaborator,
) -> anyhow::Result<TravelDetails> {
    if let (Some(destination), Some(dates), Some(budget)) =
        (&cli.destination, &cli.dates, &cli.budget)
    {
        return Ok(TravelDetails {
            destination: destination.clone(),
            dates: dates.clone(),
            budget: budget.clone(),
        });
    }
    if cli.ai_intake {
        intake::collect_conversational(generator, collaborator).await
    } else {
        intake::collect_direct(collaborator)
    }
}
