use standup_summariser::prompt::{
    MAX_PROMPT_CHARS, SUMMARY_INSTRUCTION, build_summary_prompt, join_texts, truncate_to_tail,
};

#[test]
fn test_join_texts_uses_blank_line_separator() {
    let texts = vec!["did X", "did Y", "did Z"];
    assert_eq!(join_texts(&texts), "did X\n\ndid Y\n\ndid Z");
}

#[test]
fn test_join_texts_preserves_retrieval_order() {
    // Whatever order the API returned is the order we join in
    let texts = vec!["newest", "older", "oldest"];
    assert_eq!(join_texts(&texts), "newest\n\nolder\n\noldest");
}

#[test]
fn test_truncate_to_tail_short_input_untouched() {
    let text = "short update";
    assert_eq!(truncate_to_tail(text, MAX_PROMPT_CHARS), text);
}

#[test]
fn test_truncate_to_tail_exact_limit_untouched() {
    let text = "a".repeat(MAX_PROMPT_CHARS);
    assert_eq!(truncate_to_tail(&text, MAX_PROMPT_CHARS), text);
}

#[test]
fn test_truncate_to_tail_keeps_trailing_suffix() {
    let head = "h".repeat(500);
    let tail = "t".repeat(MAX_PROMPT_CHARS);
    let text = format!("{head}{tail}");

    let clipped = truncate_to_tail(&text, MAX_PROMPT_CHARS);
    assert_eq!(clipped.chars().count(), MAX_PROMPT_CHARS);
    assert_eq!(clipped, tail);
}

#[test]
fn test_truncate_to_tail_counts_characters_not_bytes() {
    // Four characters, twelve bytes; a byte-based slice would split a code point
    let text = "日本語だ";
    let clipped = truncate_to_tail(text, 2);
    assert_eq!(clipped, "語だ");
}

#[test]
fn test_build_summary_prompt_starts_with_instruction() {
    let prompt = build_summary_prompt(&["did X", "did Y"]);
    assert!(prompt.starts_with(SUMMARY_INSTRUCTION));
    assert!(prompt.ends_with("did X\n\ndid Y"));
}

#[test]
fn test_build_summary_prompt_caps_message_portion() {
    let long = "u".repeat(9_000);
    let texts = vec![long.as_str(), long.as_str()];
    let prompt = build_summary_prompt(&texts);

    let message_portion = prompt
        .strip_prefix(SUMMARY_INSTRUCTION)
        .expect("prompt must start with the instruction");
    assert_eq!(message_portion.chars().count(), MAX_PROMPT_CHARS);

    // The clipped portion is the tail of the raw join
    let raw = join_texts(&texts);
    let expected: String = raw
        .chars()
        .skip(raw.chars().count() - MAX_PROMPT_CHARS)
        .collect();
    assert_eq!(message_portion, expected);
}
