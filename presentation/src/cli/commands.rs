//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all steps
    Full,
    /// Only the final decision
    Decision,
    /// JSON output
    Json,
}

/// CLI arguments for agent-council
#[derive(Parser, Debug)]
#[command(name = "agent-council")]
#[command(author, version, about = "Agentic Council - four personas debate your problem and decide")]
#[command(long_about = r#"
Agent Council runs a group chat of four specialized personas over your problem.

The protocol has five steps:
1. Broadcast: your problem opens the group chat
2. Parallel Responses: all four personas analyze it concurrently
3. Debate: open discussion rounds where personas react to each other
4. Synthesis: a meta-agent merges all perspectives into a structured report
5. Decision: a weighted (or majority) recommendation with per-persona breakdown

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config (or ./.council.toml)
3. ~/.config/agent-council/config.toml   Global config

Example:
  agent-council "Should we launch the product in 8 weeks?"
  agent-council --majority --rounds 1 "Rewrite the billing service?"
  agent-council --chat
"#)]
pub struct Cli {
    /// The problem to put before the council (not required in chat mode)
    pub problem: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Use majority voting instead of the weighted decision model
    #[arg(long)]
    pub majority: bool,

    /// Number of open-discussion rounds
    #[arg(long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
