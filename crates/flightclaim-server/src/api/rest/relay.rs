//! Fragment relay from the reasoning engine to the HTTP response body

use flightclaim_llm::{LLMError, TokenStream};
use futures::{Stream, StreamExt};
use tracing::{error, info};
use uuid::Uuid;

/// Logs how a relay ended; a drop before completion means the client went away
struct RelayGuard {
    request_id: Uuid,
    fragments: usize,
    finished: bool,
}

impl Drop for RelayGuard {
    fn drop(&mut self) {
        if !self.finished {
            info!(
                request_id = %self.request_id,
                "Client disconnected after {} fragments, releasing reasoning stream",
                self.fragments
            );
        }
    }
}

/// Forward fragments as they arrive.
///
/// Dropping the returned stream (hyper does so when the client disconnects)
/// drops `tokens` and with it the upstream connection. A mid-stream failure
/// is forwarded as an error, which aborts the chunked body early.
pub(super) fn relay_fragments(
    mut tokens: TokenStream,
    request_id: Uuid,
) -> impl Stream<Item = Result<String, LLMError>> + Send + 'static {
    async_stream::stream! {
        let mut guard = RelayGuard {
            request_id,
            fragments: 0,
            finished: false,
        };

        while let Some(item) = tokens.next().await {
            match item {
                Ok(fragment) => {
                    guard.fragments += 1;
                    yield Ok(fragment);
                }
                Err(e) => {
                    error!(request_id = %request_id, "Reasoning stream failed after {} fragments: {}", guard.fragments, e);
                    guard.finished = true;
                    yield Err(e);
                    break;
                }
            }
        }

        if !guard.finished {
            guard.finished = true;
            info!(request_id = %request_id, "Relayed {} fragments", guard.fragments);
        }
    }
}
