//! Prompt assembly for the summarization call.
//!
//! The instruction text and both size limits are fixed: the message portion of
//! the prompt is capped to its trailing 12,000 characters so channel volume
//! never overruns the model's context window, and the model's output budget is
//! a flat 512 tokens.

/// Fixed instruction prepended to the joined channel text.
pub const SUMMARY_INSTRUCTION: &str = "Summarise the following stand-up updates into exactly \
five concise bullet points. Omit greetings and small talk:\n\n";

/// Maximum number of characters of joined message text sent to the model.
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Output budget for a single completion call.
pub const MAX_OUTPUT_TOKENS: u32 = 512;

/// Join message texts with a blank-line separator, preserving retrieval order.
#[must_use]
pub fn join_texts(texts: &[&str]) -> String {
    texts.join("\n\n")
}

/// Keep only the trailing `max_chars` characters of `text`.
///
/// Counts characters rather than bytes so a multi-byte code point is never
/// split. Dropping the head (oldest content) over the tail is the documented
/// truncation policy.
#[must_use]
pub fn truncate_to_tail(text: &str, max_chars: usize) -> &str {
    let total = text.chars().count();
    if total <= max_chars {
        return text;
    }
    let skip = total - max_chars;
    text.char_indices()
        .nth(skip)
        .map_or(text, |(idx, _)| &text[idx..])
}

/// Build the full prompt: instruction plus the joined, tail-truncated text.
#[must_use]
pub fn build_summary_prompt(texts: &[&str]) -> String {
    let joined = join_texts(texts);
    let clipped = truncate_to_tail(&joined, MAX_PROMPT_CHARS);
    format!("{SUMMARY_INSTRUCTION}{clipped}")
}
