//! Console output formatter for council sessions

use colored::Colorize;
use council_domain::{ConversationState, PersonaRole, Speaker};

/// Formats a finished council session for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete session: transcript, synthesis and decision
    pub fn format(state: &ConversationState) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agent Council"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Problem:".cyan().bold(),
            state.problem().content()
        ));

        output.push_str(&Self::section_header("Group Chat"));
        for message in state.transcript() {
            output.push('\n');
            output.push_str(&Self::chat_line(message.speaker, &message.text));
        }

        if let Some(synthesis) = state.synthesis() {
            output.push_str(&Self::section_header("Synthesis"));
            output.push_str(&format!("\n{}\n", synthesis.summary));

            output.push_str(&Self::bullet_list("Agreements:", &synthesis.agreements, "green"));
            output.push_str(&Self::bullet_list("Conflicts:", &synthesis.conflicts, "yellow"));
            output.push_str(&Self::bullet_list(
                "Blind Spots:",
                &synthesis.blind_spots,
                "yellow",
            ));
            output.push_str(&Self::bullet_list(
                "Options:",
                &synthesis.final_options,
                "cyan",
            ));
        }

        output.push_str(&Self::format_decision_section(state));
        output.push_str(&Self::footer());
        output
    }

    /// Format only the decision (concise output)
    pub fn format_decision_only(state: &ConversationState) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n\n",
            "=== Council Decision ===".cyan().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Problem:".bold(),
            state.problem().content()
        ));
        output.push_str(&Self::format_decision_section(state));
        output
    }

    /// Format the whole session as JSON
    pub fn format_json(state: &ConversationState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    /// One colored chat line, persona aliases each in their own color
    pub fn chat_line(speaker: Speaker, text: &str) -> String {
        let name = match speaker {
            Speaker::User => "You".bold().white(),
            Speaker::Persona(PersonaRole::Visionary) => "Elon".bold().magenta(),
            Speaker::Persona(PersonaRole::Strategist) => "Sam".bold().blue(),
            Speaker::Persona(PersonaRole::Operator) => "Sheryl".bold().green(),
            Speaker::Persona(PersonaRole::RiskAnalyst) => "Ray".bold().yellow(),
        };
        format!("{name}: {text}\n")
    }

    fn format_decision_section(state: &ConversationState) -> String {
        let Some(decision) = state.decision() else {
            return String::new();
        };

        let mut output = String::new();
        output.push_str(&Self::section_header("Final Decision"));
        output.push_str(&format!(
            "\n{} {}\n\n",
            "Method:".cyan().bold(),
            decision.method.as_str()
        ));
        output.push_str(&decision.synthesis_summary);
        output.push('\n');

        output.push_str(&Self::bullet_list(
            "Recommended Options:",
            &decision.recommended_options,
            "green",
        ));

        if !decision.breakdown.is_empty() {
            output.push_str(&format!("\n{}\n", "Breakdown:".cyan().bold()));
            for (name, entry) in &decision.breakdown {
                match entry.weight {
                    Some(weight) => output.push_str(&format!(
                        "  {} (weight {:.2}): {}\n",
                        name.bold(),
                        weight,
                        entry.response_preview
                    )),
                    None => output.push_str(&format!(
                        "  {}: {}\n",
                        name.bold(),
                        entry.response_preview
                    )),
                }
            }
        }
        output
    }

    fn bullet_list(title: &str, items: &[String], color: &str) -> String {
        if items.is_empty() {
            return String::new();
        }
        let title = match color {
            "green" => title.green().bold(),
            "yellow" => title.yellow().bold(),
            _ => title.cyan().bold(),
        };
        let mut output = format!("\n{title}\n");
        for item in items {
            output.push_str(&format!("  * {item}\n"));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
