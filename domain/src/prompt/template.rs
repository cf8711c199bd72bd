//! Prompt templates for each stage of the council flow

use crate::chat::SKIP_TOKEN;
use crate::persona::PersonaRole;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for a persona
    pub fn persona_system(role: PersonaRole) -> String {
        super::persona::system_prompt(role)
    }

    /// System prompt for the synthesis meta-agent
    pub fn synthesis_system() -> &'static str {
        super::persona::synthesis_system_prompt()
    }

    /// Initial broadcast prompt: analyze the problem from the role's perspective
    pub fn analyze(role: PersonaRole, problem: &str) -> String {
        format!(
            "Analyze this problem from the {} perspective:\n\n{}",
            role.as_str().to_lowercase(),
            problem
        )
    }

    /// Open-discussion prompt: respond naturally to the ongoing conversation
    pub fn discussion(context: &str) -> String {
        format!(
            "The group is discussing:\n\n{context}\n\n\
             What do you think? Respond naturally to the conversation."
        )
    }

    /// Skip-enabled round prompt: contribute only if there is something to add
    pub fn optional_round(context: &str) -> String {
        format!(
            "The group is discussing:\n\n{context}\n\n\
             Do you have something to add? Only respond if you have something \
             relevant to say. If you don't have anything to add, respond with \
             just '{SKIP_TOKEN}'."
        )
    }

    /// Debate prompt for an addressed persona.
    ///
    /// Exchange 1 responds to the user's request; later exchanges respond to
    /// the other participants and push toward closing the topic.
    pub fn debate(
        role: PersonaRole,
        user_message: &str,
        context: &str,
        exchange: usize,
        max_exchanges: usize,
    ) -> String {
        let alias = role.alias();
        if exchange == 0 {
            format!(
                "You are {alias} in a focused debate. The user asked: \"{user_message}\"\n\n\
                 RECENT CONVERSATION:\n{context}\n\n\
                 Respond to the user's request. This is exchange 1 of up to {max_exchanges}. \
                 Try to make progress toward closing the topic. Be direct and substantive."
            )
        } else {
            format!(
                "You are {alias} in a focused debate.\n\n\
                 RECENT CONVERSATION:\n{context}\n\n\
                 This is exchange {} of up to {max_exchanges}. Respond to what others said. \
                 Try to move toward closing the topic - agree, disagree, or propose a \
                 resolution. If the topic feels resolved, you can acknowledge that.",
                exchange + 1
            )
        }
    }

    /// Critique prompt: react to the other personas' positions
    pub fn critique(role: PersonaRole, problem: &str, others: &[(String, String)]) -> String {
        let mut prompt = format!(
            "You are {} in a group chat debating this problem:\n\n{}\n\n\
             The others said:\n",
            role.alias(),
            problem
        );
        for (name, response) in others {
            prompt.push_str(&format!("\n--- {name} ---\n{response}\n"));
        }
        prompt.push_str(
            "\nReact from your own perspective: what do they get right, what are they \
             missing? Reference people by name. Keep it SHORT (2-3 sentences).",
        );
        prompt
    }

    /// Synthesis prompt over all persona responses
    pub fn synthesis(problem: &str, responses: &[(String, String)]) -> String {
        let mut prompt = format!(
            "Analyze and synthesize the following responses from 4 specialized \
             advisors regarding this problem:\n\nPROBLEM:\n{problem}\n\nRESPONSES:\n"
        );
        for (name, response) in responses {
            prompt.push_str(&format!("\n### {name}\n{response}\n"));
        }
        prompt.push_str(
            "\nYour task:\n\
             1. Provide a comprehensive summary of all perspectives\n\
             2. Identify key agreements across advisors\n\
             3. Highlight conflicts or disagreements\n\
             4. Identify blind spots or unaddressed areas\n\
             5. Propose 2-3 final options or paths forward\n\n\
             Be thorough, balanced, and actionable.",
        );
        prompt
    }
}
