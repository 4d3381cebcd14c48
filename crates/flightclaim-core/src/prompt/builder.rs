//! Prompt builders

use super::templates::{CANCELLATION_REASON_PROMPT, ELIGIBILITY_PROMPT};
use crate::normalizer::MAX_REASON_SNIPPETS;
use crate::types::FlightDetail;

/// Cap for each flight detail field
pub const MAX_FIELD_CHARS: usize = 120;

/// Cap for each web snippet
pub const MAX_SNIPPET_CHARS: usize = 500;

/// Cap for the merged policy text
pub const MAX_POLICY_CHARS: usize = 8000;

const ELLIPSIS: char = '…';

/// Truncate to at most `max` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

/// Substitute `{key}` placeholders in one left-to-right pass
fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let substituted = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (v, end))
        });

        match substituted {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn flight_values(detail: &FlightDetail) -> Vec<(&'static str, String)> {
    vec![
        ("airline", truncate_chars(&detail.airline, MAX_FIELD_CHARS)),
        ("origin", truncate_chars(&detail.origin, MAX_FIELD_CHARS)),
        ("destination", truncate_chars(&detail.destination, MAX_FIELD_CHARS)),
        (
            "scheduled_departure",
            truncate_chars(&detail.scheduled_departure, MAX_FIELD_CHARS),
        ),
        (
            "actual_departure",
            truncate_chars(&detail.actual_departure, MAX_FIELD_CHARS),
        ),
        ("status", truncate_chars(&detail.status, MAX_FIELD_CHARS)),
    ]
}

/// Render the eligibility prompt from a flight and its policy text
pub fn build_eligibility_prompt(detail: &FlightDetail, policy: &str) -> String {
    let mut values = flight_values(detail);
    values.push(("policy", truncate_chars(policy, MAX_POLICY_CHARS)));
    render(ELIGIBILITY_PROMPT, &values)
}

/// Render the cancellation-reason prompt from a flight and ranked web snippets.
///
/// Only the first snippets up to the inference limit are used; no snippets
/// leaves the results section empty.
pub fn build_cancellation_prompt<S: AsRef<str>>(detail: &FlightDetail, snippets: &[S]) -> String {
    let joined = snippets
        .iter()
        .take(MAX_REASON_SNIPPETS)
        .map(|s| truncate_chars(s.as_ref(), MAX_SNIPPET_CHARS))
        .collect::<Vec<_>>()
        .join("\n");

    let mut values = flight_values(detail);
    values.push(("snippets", joined));
    render(CANCELLATION_REASON_PROMPT, &values)
}
