//! # Console Chat – Minimal Example
//!
//! One-shot mode: join the command-line arguments into a prompt, send it,
//! print the answer.  Without arguments the program drops into an
//! interactive read-eval loop (empty line or `exit` quits).
//!
//! ```bash
//! export DEEPSEEK_API_KEY=sk-…      # mandatory
//! cargo run -p deepchat --example chat -- "Why is the sky blue?"
//! cargo run -p deepchat --example chat
//! ```

use deepchat::deepseek::DeepSeekAdapterBuilder;
use deepchat::{
    generic::GenericMessage,
    model::{DeepSeekModel, Model},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _},
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = DeepSeekAdapterBuilder::new_from_env().build()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        // One-shot mode for scripts.
        ask(&backend, args.join(" ")).await?;
        return Ok(());
    }

    // Interactive mode.
    println!("DeepSeek console – type a prompt (empty line or 'exit' quits):");
    println!("---");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        use std::io::Write as _;
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("exit") {
            break;
        }

        ask(&backend, line.to_owned()).await?;
        println!("---");
    }

    Ok(())
}

async fn ask(
    backend: &deepchat::deepseek::DeepSeekAdapter,
    prompt: String,
) -> anyhow::Result<()> {
    println!("Prompt: {prompt}");

    let params = ChatCompleteParameters::new(
        vec![GenericMessage::user(prompt)],
        Model::DeepSeek(DeepSeekModel::Chat),
    );

    match backend.chat_complete(params).await {
        Ok(response) => match response.message.content {
            Some(answer) => println!("{answer}"),
            None => eprintln!("The model returned no textual content."),
        },
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}
