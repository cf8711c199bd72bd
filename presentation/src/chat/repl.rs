//! REPL for the interactive council chat

use crate::chat::Mentions;
use crate::output::ConsoleFormatter;
use colored::Colorize;
use council_application::{
    CouncilProgress, PersonaGateway, RunDebateUseCase, RunRoundUseCase, SessionConfig,
};
use council_domain::{ChatMessage, ConversationState, PersonaRole, Problem, ProtocolStep};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use std::time::Duration;

/// Echoes each transcript message as a colored chat line, nothing else
struct ChatEcho;

impl CouncilProgress for ChatEcho {
    fn on_step_start(&self, _step: ProtocolStep, _total_tasks: usize) {}
    fn on_persona_complete(
        &self,
        _step: ProtocolStep,
        _role: PersonaRole,
        _success: bool,
        _elapsed: Duration,
    ) {
    }
    fn on_step_complete(&self, _step: ProtocolStep) {}

    fn on_message(&self, message: &ChatMessage) {
        print!("{}", ConsoleFormatter::chat_line(message.speaker, &message.text));
    }
}

/// Interactive group chat with the four personas
pub struct CouncilRepl<G: PersonaGateway + 'static> {
    round: RunRoundUseCase<G>,
    debate: RunDebateUseCase<G>,
    state: Option<ConversationState>,
}

impl<G: PersonaGateway + 'static> CouncilRepl<G> {
    pub fn new(gateway: Arc<G>, config: &SessionConfig) -> Self {
        Self {
            round: RunRoundUseCase::new(Arc::clone(&gateway), config.call_timeout),
            debate: RunDebateUseCase::new(
                gateway,
                config.call_timeout,
                config.max_debate_exchanges,
            ),
            state: None,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("agent-council").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim().to_string();

                    if line.is_empty() {
                        // Let the personas keep talking; each may skip.
                        self.optional_round().await;
                        continue;
                    }

                    if line == "exit" || line == "quit" {
                        println!("Bye!");
                        break;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(&line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(&line);
                    self.process_message(&line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Agent Council - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Personas: {}",
            PersonaRole::all()
                .iter()
                .map(|r| format!("{} ({})", r.alias(), r.as_str()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        println!("Type a message and all four reply. Tag someone (@Sam, @Ray) for a");
        println!("focused debate. Press Enter on an empty line to let them keep talking.");
        println!("Commands: /help, /personas, /quit");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /personas        - Show the council members");
                println!("  /quit, /exit, /q - Exit chat (also: exit, quit)");
                println!();
                false
            }
            "/personas" => {
                println!();
                println!("Council members:");
                for role in PersonaRole::all() {
                    println!("  @{} - {}", role.alias(), role.as_str());
                }
                println!();
                false
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, line: &str) {
        let mentions = Mentions::parse(line);
        for name in &mentions.unknown {
            println!("{}", format!("(no persona named @{name})").dimmed());
        }

        if self.state_for(line).is_none() {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.append_message(ChatMessage::from_user(line.to_string()));

        println!();
        if mentions.is_empty() {
            self.round.execute(state, true, &ChatEcho).await;
        } else {
            self.debate
                .execute(state, &mentions.roles, line, &ChatEcho)
                .await;
        }
        println!();
    }

    async fn optional_round(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        println!();
        let replies = self.round.execute(state, false, &ChatEcho).await;
        if replies.is_empty() {
            println!("{}", "(everyone passed)".dimmed());
        }
        println!();
    }

    /// First message opens the session; later ones reuse it.
    fn state_for(&mut self, line: &str) -> Option<&mut ConversationState> {
        if self.state.is_none() {
            match Problem::new(line) {
                Ok(problem) => self.state = Some(ConversationState::new(problem)),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return None;
                }
            }
        }
        self.state.as_mut()
    }
}
