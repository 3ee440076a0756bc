//! # Streaming with Cancel-on-Keypress
//!
//! Starts a streaming completion and races it against the Enter key: as
//! soon as a line arrives on stdin the cancellation token fires, the
//! in-flight read unwinds and the resulting `Cancelled` error is silenced
//! (a user-requested stop is not a failure).
//!
//! ```bash
//! export DEEPSEEK_API_KEY=sk-…
//! cargo run -p deepchat --example chat_stream_cancel
//! ```

use deepchat::deepseek::DeepSeekAdapterBuilder;
use deepchat::{
    generic::GenericMessage,
    model::{DeepSeekModel, Model},
    provider::{ChatCompleteParameters, StreamingChatProvider as _},
};
use futures_util::StreamExt;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = DeepSeekAdapterBuilder::new_from_env().build()?;
    let token = CancellationToken::new();

    // A long-winded request, so there is something to interrupt.
    let params = ChatCompleteParameters::new(
        vec![GenericMessage::user(
            "Tell a long, detailed story about a city on the back of a whale.",
        )],
        Model::DeepSeek(DeepSeekModel::Chat),
    )
    .with_cancellation_token(token.clone());

    // Keypress listener: the first line on stdin cancels the stream.
    let keypress = tokio::spawn({
        let token = token.clone();
        async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            if lines.next_line().await.is_ok() {
                token.cancel();
            }
        }
    });

    println!("Streaming – press Enter to cancel.");
    println!();

    let mut stream = backend.chat_complete_stream(params);
    while let Some(delta) = stream.next().await {
        match delta {
            Ok(text) => {
                print!("{text}");
                io::stdout().flush().ok();
            }
            Err(_) if token.is_cancelled() => {
                // The failure follows our own cancellation request; report
                // the stop, not the error.
                println!("\n\n[cancelled by keypress]");
                break;
            }
            Err(e) => {
                eprintln!("\nError while streaming: {e}");
                break;
            }
        }
    }

    keypress.abort();
    println!();
    Ok(())
}
