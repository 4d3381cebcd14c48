//! Separation of `<think>` reasoning traces from the final answer

const OPEN_TAG: &str = "<think>";
const CLOSE_TAG: &str = "</think>";

/// Split `text` into the reasoning trace and the answer.
///
/// Every closed `<think>...</think>` block is removed from the answer and
/// joined into the trace. An unterminated block runs to the end of the text.
pub fn split_thinking(text: &str) -> (Option<String>, String) {
    let mut thinking: Vec<&str> = Vec::new();
    let mut answer = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN_TAG) {
        answer.push_str(&rest[..start]);
        let inner = &rest[start + OPEN_TAG.len()..];
        match inner.find(CLOSE_TAG) {
            Some(end) => {
                thinking.push(inner[..end].trim());
                rest = &inner[end + CLOSE_TAG.len()..];
            }
            None => {
                thinking.push(inner.trim());
                rest = "";
            }
        }
    }
    answer.push_str(rest);

    let thinking: Vec<&str> = thinking.into_iter().filter(|t| !t.is_empty()).collect();
    let thinking = (!thinking.is_empty()).then(|| thinking.join("\n"));
    (thinking, answer.trim().to_string())
}
