//! CLI entrypoint for Agent Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use council_application::RunCouncilUseCase;
use council_domain::{DecisionMethod, Problem};
use council_infrastructure::{
    ConfigLoader, FileConfig, OllamaClient, OllamaPersonaGateway, OllamaSynthesizer,
};
use council_presentation::{Cli, ConsoleFormatter, CouncilRepl, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Agent Council");

    // Load configuration
    let file_config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let mut session_config = file_config.to_session_config();
    if cli.majority {
        session_config = session_config.with_method(DecisionMethod::MajorityVoting);
    }
    if let Some(rounds) = cli.rounds {
        session_config = session_config.with_debate_rounds(rounds);
    }

    // === Dependency Injection ===
    let client = Arc::new(
        OllamaClient::new(file_config.ollama.base_url.clone())
            .context("Failed to build HTTP client")?,
    );

    // An unreachable backend makes the whole session unusable, so this is
    // the one check that aborts before anything starts.
    client.check_connectivity().await.with_context(|| {
        format!(
            "Cannot reach Ollama at {} (is the server running?)",
            file_config.ollama.base_url
        )
    })?;

    let gateway = Arc::new(OllamaPersonaGateway::new(
        Arc::clone(&client),
        file_config.models.clone(),
    ));

    // Chat mode
    if cli.chat {
        let mut repl = CouncilRepl::new(gateway, &session_config);
        repl.run().await?;
        return Ok(());
    }

    // Single problem mode
    let problem_text = match cli.problem {
        Some(p) => p,
        None => bail!("A problem is required. Use --chat for interactive mode."),
    };
    let problem = Problem::new(problem_text.clone())?;

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|           Agent Council - Persona Debate                   |");
        println!("+============================================================+");
        println!();
        println!("Problem: {problem_text}");
        println!();
    }

    let synthesizer = Arc::new(OllamaSynthesizer::new(
        Arc::clone(&client),
        &file_config.models,
    ));
    let council = RunCouncilUseCase::new(gateway, synthesizer, session_config);

    // Execute with or without progress reporting
    let state = if cli.quiet {
        council.run(problem).await?
    } else {
        let progress = ProgressReporter::new();
        council.run_with_progress(problem, &progress).await?
    };

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&state),
        OutputFormat::Decision => ConsoleFormatter::format_decision_only(&state),
        OutputFormat::Json => ConsoleFormatter::format_json(&state),
    };

    println!("{output}");

    Ok(())
}
