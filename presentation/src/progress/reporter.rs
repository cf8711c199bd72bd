//! Progress reporting for council execution

use crate::output::ConsoleFormatter;
use colored::Colorize;
use council_application::CouncilProgress;
use council_domain::{ChatMessage, PersonaRole, ProtocolStep};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a live per-step progress bar and streamed chat lines
pub struct ProgressReporter {
    multi: MultiProgress,
    step_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            step_bar: Mutex::new(None),
        }
    }

    fn step_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn step_display_name(step: ProtocolStep) -> &'static str {
        match step {
            ProtocolStep::Broadcast => "Step 1: Broadcast",
            ProtocolStep::ParallelResponses => "Step 2: Parallel Responses",
            ProtocolStep::Debate => "Step 3: Debate",
            ProtocolStep::Synthesis => "Step 4: Synthesis",
            ProtocolStep::Decision => "Step 5: Decision",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CouncilProgress for ProgressReporter {
    fn on_step_start(&self, step: ProtocolStep, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::step_style());
        pb.set_prefix(Self::step_display_name(step));
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(120));

        *self.step_bar.lock().unwrap() = Some(pb);
    }

    fn on_persona_complete(
        &self,
        _step: ProtocolStep,
        role: PersonaRole,
        success: bool,
        elapsed: Duration,
    ) {
        if let Some(pb) = self.step_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {} ({:.1}s)", "v".green(), role.alias(), elapsed.as_secs_f64())
            } else {
                format!("{} {}", "x".red(), role.alias())
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_step_complete(&self, step: ProtocolStep) {
        if let Some(pb) = self.step_bar.lock().unwrap().take() {
            pb.finish_with_message(format!(
                "{} complete",
                Self::step_display_name(step).green()
            ));
        }
    }

    fn on_persona_skipped(&self, role: PersonaRole) {
        if let Some(pb) = self.step_bar.lock().unwrap().as_ref() {
            pb.set_message(format!("{} {} skipped", "-".dimmed(), role.alias()));
        }
    }

    fn on_message(&self, message: &ChatMessage) {
        let line = ConsoleFormatter::chat_line(message.speaker, &message.text);
        let _ = self.multi.println(line.trim_end());
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl CouncilProgress for SimpleProgress {
    fn on_step_start(&self, step: ProtocolStep, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::step_display_name(step).bold(),
            total_tasks
        );
    }

    fn on_persona_complete(
        &self,
        _step: ProtocolStep,
        role: PersonaRole,
        success: bool,
        _elapsed: Duration,
    ) {
        if success {
            println!("  {} {}", "v".green(), role.alias());
        } else {
            println!("  {} {} (failed)", "x".red(), role.alias());
        }
    }

    fn on_step_complete(&self, _step: ProtocolStep) {
        println!();
    }

    fn on_persona_skipped(&self, role: PersonaRole) {
        println!("  {} {} skipped", "-".dimmed(), role.alias());
    }
}
