//! Group-chat lexicon and context windowing
//!
//! Skip-token and closing-signal detection are purely lexical: a
//! case-insensitive match against fixed strings, no NLP.

use crate::session::ChatMessage;

/// Token a persona replies with to abstain from a round
pub const SKIP_TOKEN: &str = "SKIP";

/// Number of transcript lines included in the "recent conversation" window
pub const CONTEXT_WINDOW_LINES: usize = 10;

/// Phrases that signal a debate topic is resolving
pub const CLOSING_SIGNALS: &[&str] = &[
    "agree",
    "sounds good",
    "makes sense",
    "resolved",
    "i think we're done",
    "that works",
];

/// Check whether a reply is an abstention.
///
/// Matches the skip token case-insensitively, either as the whole reply or
/// as its prefix ("skip", "SKIP - nothing to add").
pub fn is_skip(reply: &str) -> bool {
    reply
        .trim()
        .get(..SKIP_TOKEN.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SKIP_TOKEN))
}

/// Check whether a reply contains any closing signal (case-insensitive substring)
pub fn contains_closing_signal(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    CLOSING_SIGNALS.iter().any(|signal| lowered.contains(signal))
}

/// Build the bounded "recent conversation" context from a transcript.
///
/// Takes the last [`CONTEXT_WINDOW_LINES`] entries (fewer if the history is
/// shorter) and joins them as `Speaker: text` lines.
pub fn context_window(transcript: &[ChatMessage]) -> String {
    let start = transcript.len().saturating_sub(CONTEXT_WINDOW_LINES);
    transcript[start..]
        .iter()
        .map(|msg| msg.as_chat_line())
        .collect::<Vec<_>>()
        .join("\n")
}
