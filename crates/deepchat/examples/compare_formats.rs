//! # Response Format Comparison
//!
//! Sends the same question four times and shows how the sampling controls
//! reshape the answer:
//!
//! 1. unconstrained,
//! 2. with a JSON response format (`response_format = {"type":"json_object"}`
//!    plus a system instruction naming the keys),
//! 3. with `max_tokens = 10`,
//! 4. with the stop sequence `"\n\n"` (the answer ends at the first blank
//!    line).
//!
//! Answers are streamed so truncation effects are visible as they happen.
//!
//! ```bash
//! export DEEPSEEK_API_KEY=sk-…
//! cargo run -p deepchat --example compare_formats
//! ```

use deepchat::deepseek::{DeepSeekAdapter, DeepSeekAdapterBuilder};
use deepchat::{
    generic::GenericMessage,
    model::{DeepSeekModel, Model},
    provider::{ChatCompleteParameters, StreamingChatProvider as _},
};
use futures_util::StreamExt;
use std::io::{self, Write};

const QUESTION: &str = "Explain why drinking water matters.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = DeepSeekAdapterBuilder::new_from_env().build()?;
    let sep = "=".repeat(60);

    println!("{sep}");
    println!("1. UNCONSTRAINED");
    println!("{QUESTION}");
    println!("{sep}");
    stream_answer(
        &backend,
        ChatCompleteParameters::new(
            vec![GenericMessage::user(QUESTION)],
            Model::DeepSeek(DeepSeekModel::Chat),
        ),
    )
    .await;
    println!();

    println!("{sep}");
    println!("2. EXPLICIT RESPONSE FORMAT (JSON)");
    println!("   System prompt: answer as JSON with keys 'reason' and 'detail'.");
    println!("{sep}");
    stream_answer(
        &backend,
        ChatCompleteParameters::new(
            vec![
                GenericMessage::system(
                    "Answer as a JSON object with the keys 'reason' and 'detail'.",
                ),
                GenericMessage::user(QUESTION),
            ],
            Model::DeepSeek(DeepSeekModel::Chat),
        )
        .with_response_format(serde_json::json!({"type": "json_object"})),
    )
    .await;
    println!();

    println!("{sep}");
    println!("3. LENGTH LIMIT (max_tokens = 10)");
    println!("{sep}");
    stream_answer(
        &backend,
        ChatCompleteParameters::new(
            vec![GenericMessage::user(QUESTION)],
            Model::DeepSeek(DeepSeekModel::Chat),
        )
        .with_max_tokens(10),
    )
    .await;
    println!();

    println!("{sep}");
    println!("4. STOP SEQUENCE (stop = [\"\\n\\n\"])");
    println!("   The answer is cut at the first occurrence of a blank line.");
    println!("{sep}");
    stream_answer(
        &backend,
        ChatCompleteParameters::new(
            vec![GenericMessage::user(QUESTION)],
            Model::DeepSeek(DeepSeekModel::Chat),
        )
        .with_stop(vec!["\n\n".into()]),
    )
    .await;
    println!();
    println!("{sep}");

    Ok(())
}

/// Stream one completion to stdout, flushing after every fragment.
async fn stream_answer(
    backend: &DeepSeekAdapter,
    params: ChatCompleteParameters<GenericMessage>,
) {
    let mut stream = backend.chat_complete_stream(params);

    while let Some(delta) = stream.next().await {
        match delta {
            Ok(text) => {
                print!("{text}");
                io::stdout().flush().ok();
            }
            Err(e) => {
                eprintln!("\nError while streaming: {e}");
                return;
            }
        }
    }
    println!();
}
