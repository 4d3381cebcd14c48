//! Server-sent-event decoding for chat-completion streams
//!
//! The engine frames each delta as a `data: {json}` line and ends the stream
//! with `data: [DONE]`. Network chunks do not respect line boundaries, so the
//! decoder buffers raw bytes until a full line is available.

use crate::error::{LLMError, Result};
use futures::{Stream, StreamExt};
use serde_json::Value;
use std::fmt::Display;
use std::pin::Pin;
use tracing::{debug, warn};

/// Lazily produced answer fragments, in arrival order
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

const DATA_PREFIX: &str = "data:";
const DONE_SENTINEL: &str = "[DONE]";

/// A decoded SSE line worth acting on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// Non-empty content delta
    Fragment(String),
    /// End-of-stream sentinel
    Done,
    /// The engine reported an error inside the stream
    Error(String),
}

/// Incremental line decoder for chat-completion SSE bodies
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk and return the events of every line it completes
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(event) = decode_line(&line) {
                events.push(event);
            }
        }
        events
    }

    /// Flush a trailing line that arrived without a newline
    pub fn finish(&mut self) -> Vec<SseEvent> {
        let line = std::mem::take(&mut self.buffer);
        decode_line(&line).into_iter().collect()
    }
}

fn decode_line(raw: &[u8]) -> Option<SseEvent> {
    let line = String::from_utf8_lossy(raw);
    let line = line.trim_end_matches(&['\n', '\r'][..]);

    // Blank separators, comments and non-data fields carry no content
    let payload = line.strip_prefix(DATA_PREFIX)?.trim();
    if payload.is_empty() {
        return None;
    }
    if payload == DONE_SENTINEL {
        return Some(SseEvent::Done);
    }

    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => {
            warn!("Skipping malformed stream fragment: {} ({})", payload, e);
            return None;
        }
    };

    if let Some(error) = value.get("error") {
        let message = error["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Some(SseEvent::Error(message));
    }

    match value["choices"][0]["delta"]["content"].as_str() {
        Some(content) if !content.is_empty() => Some(SseEvent::Fragment(content.to_string())),
        _ => None,
    }
}

/// Turn a raw byte stream into a [`TokenStream`].
///
/// Nothing is read until the returned stream is polled, and dropping it drops
/// `body`, which releases the upstream connection. A transport error ends the
/// stream with a single [`LLMError::StreamInterrupted`] item.
pub fn decode_sse<S, B, E>(body: S) -> TokenStream
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut body = Box::pin(body);
        let mut decoder = SseDecoder::new();
        let mut finished = false;
        let mut emitted = 0usize;

        while let Some(chunk) = body.next().await {
            let events = match chunk {
                Ok(bytes) => decoder.push(bytes.as_ref()),
                Err(e) => {
                    warn!("Reasoning stream interrupted after {} fragments: {}", emitted, e);
                    yield Err(LLMError::StreamInterrupted(e.to_string()));
                    finished = true;
                    break;
                }
            };

            for event in events {
                match event {
                    SseEvent::Fragment(text) => {
                        emitted += 1;
                        yield Ok(text);
                    }
                    SseEvent::Done => {
                        finished = true;
                        break;
                    }
                    SseEvent::Error(message) => {
                        yield Err(LLMError::StreamInterrupted(message));
                        finished = true;
                        break;
                    }
                }
            }
            if finished {
                break;
            }
        }

        if !finished {
            for event in decoder.finish() {
                match event {
                    SseEvent::Fragment(text) => {
                        emitted += 1;
                        yield Ok(text);
                    }
                    SseEvent::Done => {}
                    SseEvent::Error(message) => yield Err(LLMError::StreamInterrupted(message)),
                }
            }
            debug!("Reasoning stream closed without end sentinel");
        }

        debug!("Reasoning stream finished with {} fragments", emitted);
    })
}

/// Drain a stream into one string, stopping at the first error
pub async fn collect_text(mut stream: TokenStream) -> Result<String> {
    let mut text = String::new();
    while let Some(fragment) = stream.next().await {
        text.push_str(&fragment?);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn delta(content: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({"choices": [{"delta": {"content": content}}]})
        )
    }

    #[test]
    fn test_decoder_single_line() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(delta("Hello").as_bytes());
        assert_eq!(events, vec![SseEvent::Fragment("Hello".to_string())]);
    }

    #[test]
    fn test_decoder_buffers_partial_lines() {
        let line = delta("split across chunks");
        let (a, b) = line.as_bytes().split_at(17);

        let mut decoder = SseDecoder::new();
        assert!(decoder.push(a).is_empty());
        assert_eq!(
            decoder.push(b),
            vec![SseEvent::Fragment("split across chunks".to_string())]
        );
    }

    #[test]
    fn test_decoder_keeps_multibyte_chars_across_chunks() {
        let line = delta("é");
        let bytes = line.as_bytes();
        let split = line.find('é').unwrap() + 1;

        let mut decoder = SseDecoder::new();
        assert!(decoder.push(&bytes[..split]).is_empty());
        assert_eq!(decoder.push(&bytes[split..]), vec![SseEvent::Fragment("é".to_string())]);
    }

    #[test]
    fn test_decoder_skips_noise() {
        let body = concat!(
            ": keep-alive\n",
            "\n",
            "event: ping\n",
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n",
            "data: {not json}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"\"}}]}\r\n",
            "data: [DONE]\n"
        );
        let mut decoder = SseDecoder::new();
        assert_eq!(decoder.push(body.as_bytes()), vec![SseEvent::Done]);
    }

    #[test]
    fn test_decoder_reports_engine_error() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(b"data: {\"error\":{\"message\":\"rate limited\"}}\n");
        assert_eq!(events, vec![SseEvent::Error("rate limited".to_string())]);
    }

    #[test]
    fn test_decoder_finish_flushes_trailing_line() {
        let mut decoder = SseDecoder::new();
        let line = delta("tail");
        assert!(decoder.push(line.trim_end().as_bytes()).is_empty());
        assert_eq!(decoder.finish(), vec![SseEvent::Fragment("tail".to_string())]);
    }

    #[tokio::test]
    async fn test_decode_sse_stops_at_done() {
        let chunks: Vec<std::result::Result<Vec<u8>, String>> = vec![
            Ok(delta("You ").into_bytes()),
            Ok(format!("{}data: [DONE]\n\n", delta("are eligible")).into_bytes()),
            Ok(delta("ignored").into_bytes()),
        ];

        let text = collect_text(decode_sse(stream::iter(chunks))).await.unwrap();
        assert_eq!(text, "You are eligible");
    }

    #[tokio::test]
    async fn test_decode_sse_transport_error_is_single_item() {
        let chunks: Vec<std::result::Result<Vec<u8>, String>> = vec![
            Ok(delta("partial").into_bytes()),
            Err("connection reset".to_string()),
            Ok(delta("never").into_bytes()),
        ];

        let items: Vec<Result<String>> = decode_sse(stream::iter(chunks)).collect().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), "partial");
        assert!(matches!(items[1], Err(LLMError::StreamInterrupted(_))));
    }

    #[tokio::test]
    async fn test_decode_sse_without_sentinel() {
        let chunks: Vec<std::result::Result<Vec<u8>, String>> =
            vec![Ok(delta("a").into_bytes()), Ok(b"data: {\"choices\":[{\"delta\":{\"content\":\"b\"}}]}".to_vec())];

        let text = collect_text(decode_sse(stream::iter(chunks))).await.unwrap();
        assert_eq!(text, "ab");
    }

    #[tokio::test]
    async fn test_collect_text_propagates_error() {
        let chunks: Vec<std::result::Result<Vec<u8>, String>> =
            vec![Ok(delta("a").into_bytes()), Err("eof".to_string())];

        let err = collect_text(decode_sse(stream::iter(chunks))).await.unwrap_err();
        assert!(matches!(err, LLMError::StreamInterrupted(_)));
    }
}
