//! Server-sent-event decoding for the chat-completions streaming endpoint.
//!
//! DeepSeek (like OpenAI) frames its streaming response as SSE lines:
//!
//! ```text
//! data: {"choices":[{"delta":{"content":"Hello"}}], ...}
//!
//! data: {"choices":[{"delta":{"content":" world"}}], ...}
//!
//! data: [DONE]
//! ```
//!
//! This module is the pure half of the stream pipeline: it never performs
//! I/O.  [`parse_line`] classifies one raw line, [`delta_fragment`] pulls
//! the text delta out of a parsed chunk, and [`DeltaFragments`] combines the
//! two into a lazy iterator over owned text fragments for callers that
//! already hold a line source (a recorded transcript, a test fixture, a
//! blocking reader).  The async HTTP client in this crate drives
//! [`parse_line`] directly, one framed line at a time.
//!
//! Payloads are decoded with `serde_json`, so every JSON escape sequence
//! (`\n`, `\"`, `\\`, `\t`, `\r`, `\uXXXX`) is handled.  Decoding stays
//! tolerant: a payload without a `content` delta contributes no fragment,
//! and a payload that is not valid JSON is dropped with a warning instead
//! of failing the stream.

use super::ChatCompletionChunkResponse;

/// Prefix of every payload-bearing SSE line.
pub const DATA_PREFIX: &str = "data: ";

/// Literal payload signalling end of stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Classification of a single raw line from the event stream.
#[derive(Debug)]
pub enum SseLine {
    /// No `data: ` prefix – blank keep-alive lines and any other framing.
    Ignored,
    /// The `[DONE]` sentinel; no further lines should be read.
    Done,
    /// A payload that parsed into a chunk.
    Chunk(ChatCompletionChunkResponse),
    /// A payload that was not valid JSON.  The stream continues.
    Malformed,
}

/// Classify one raw line of the event stream.
///
/// The payload is whatever follows the `data: ` prefix, surrounding
/// whitespace stripped.
pub fn parse_line(line: &str) -> SseLine {
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return SseLine::Ignored;
    };

    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        return SseLine::Done;
    }

    match serde_json::from_str(payload) {
        Ok(chunk) => SseLine::Chunk(chunk),
        Err(err) => {
            tracing::warn!(error = %err, "dropping undecodable SSE payload");
            SseLine::Malformed
        }
    }
}

/// Extract the first non-empty text delta of a chunk, if any.
///
/// Role-only deltas, heartbeat chunks and empty `content` strings all yield
/// `None`, so callers can print every returned fragment verbatim.
pub fn delta_fragment(chunk: ChatCompletionChunkResponse) -> Option<String> {
    chunk
        .choices
        .into_iter()
        .find_map(|choice| choice.delta.content)
        .filter(|content| !content.is_empty())
}

/// Lazy iterator turning a line sequence into an ordered fragment sequence.
///
/// Lines are pulled one at a time, so a blocking source works: the iterator
/// simply waits inside `lines.next()`.  Iteration stops at the `[DONE]`
/// sentinel without consuming further lines; a source that ends early is
/// treated as normal completion.
pub struct DeltaFragments<I> {
    lines: I,
    finished: bool,
}

impl<I, S> DeltaFragments<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            finished: false,
        }
    }
}

impl<I, S> Iterator for DeltaFragments<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            match parse_line(line.as_ref()) {
                SseLine::Ignored | SseLine::Malformed => {}
                SseLine::Done => {
                    self.finished = true;
                    return None;
                }
                SseLine::Chunk(chunk) => {
                    if let Some(fragment) = delta_fragment(chunk) {
                        return Some(fragment);
                    }
                }
            }
        }

        self.finished = true;
        None
    }
}

/// Single-shot variant for non-streaming responses: pull the first
/// `message.content` string out of a complete response body.
///
/// Tolerant by design – any missing field along the way (or a body that is
/// not JSON at all) yields `None` rather than an error.
pub fn extract_content(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("choices")?
        .as_array()?
        .iter()
        .find_map(|choice| Some(choice.get("message")?.get("content")?.as_str()?.to_owned()))
}
