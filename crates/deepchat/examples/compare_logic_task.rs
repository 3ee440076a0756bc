//! # Logic Task – Four Solving Strategies
//!
//! A small logic puzzle is solved four ways:
//!
//! 1. direct question, no extra instructions (streamed),
//! 2. with an explicit "solve step by step" instruction (streamed),
//! 3. two-stage: first ask the model to write a solving prompt, then solve
//!    the puzzle with that generated prompt,
//! 4. multi-agent: four separate requests with different expert roles
//!    (analyst → engineer → critic → coordinator), where the coordinator
//!    sees all previous answers as assistant messages.
//!
//! ```bash
//! export DEEPSEEK_API_KEY=sk-…
//! cargo run -p deepchat --example compare_logic_task
//! ```

use deepchat::deepseek::{DeepSeekAdapter, DeepSeekAdapterBuilder};
use deepchat::{
    generic::GenericMessage,
    model::{DeepSeekModel, Model},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _, StreamingChatProvider as _},
};
use futures_util::StreamExt;
use std::io::{self, Write};

const TASK: &str = "Two drivers have a brother named Andrew, but Andrew has no brothers. \
How is that possible?";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = DeepSeekAdapterBuilder::new_from_env().build()?;
    let sep = "=".repeat(60);
    let dash = "-".repeat(40);

    println!("{sep}");
    println!("TASK");
    println!("{sep}");
    println!("{TASK}");
    println!();

    println!("{sep}");
    println!("1. DIRECT ANSWER (no extra instructions)");
    println!("{sep}");
    stream_answer(&backend, vec![GenericMessage::user(TASK)]).await;
    println!();

    println!("{sep}");
    println!("2. WITH A \"SOLVE STEP BY STEP\" INSTRUCTION");
    println!("{sep}");
    stream_answer(
        &backend,
        vec![GenericMessage::user(format!("Solve step by step.\n\n{TASK}"))],
    )
    .await;
    println!();

    println!("{sep}");
    println!("3. MODEL-GENERATED PROMPT FIRST, THEN THE SOLUTION");
    println!("{sep}");
    let prompt_request = format!(
        "Write one short prompt (an instruction) for solving the following \
         logic puzzle. The prompt should hint at how to approach the task. \
         Output only the prompt text, no solution.\n\nTask:\n{TASK}"
    );
    let generated_prompt = full_answer(&backend, vec![GenericMessage::user(prompt_request)]).await;
    match generated_prompt {
        Some(prompt) if !prompt.trim().is_empty() => {
            println!("Generated prompt: {prompt}");
            println!();
            println!("Result with that prompt:");
            stream_answer(
                &backend,
                vec![
                    GenericMessage::user(prompt.trim().to_owned()),
                    GenericMessage::user(TASK),
                ],
            )
            .await;
        }
        _ => println!("Could not obtain a prompt from the model."),
    }
    println!();

    println!("{sep}");
    println!("4. MULTI-AGENT (4 requests: analyst → engineer → critic → coordinator)");
    println!("{sep}");

    println!("Step 1 — role: analyst");
    println!("{dash}");
    let analysis = full_answer(
        &backend,
        vec![
            GenericMessage::system("You are an expert analyst."),
            GenericMessage::user(TASK),
        ],
    )
    .await;
    println!("{}", analysis.as_deref().unwrap_or("(no answer)"));
    println!();

    println!("Step 2 — role: engineer");
    println!("{dash}");
    let solution = full_answer(
        &backend,
        vec![
            GenericMessage::system("You are an expert engineer."),
            GenericMessage::user(TASK),
        ],
    )
    .await;
    println!("{}", solution.as_deref().unwrap_or("(no answer)"));
    println!();

    println!("Step 3 — role: critic");
    println!("{dash}");
    let critique = full_answer(
        &backend,
        vec![
            GenericMessage::system("You are an expert critic."),
            GenericMessage::user(TASK),
        ],
    )
    .await;
    println!("{}", critique.as_deref().unwrap_or("(no answer)"));
    println!();

    println!("Step 4 — role: coordinator");
    println!("{dash}");
    let summary = full_answer(
        &backend,
        vec![
            GenericMessage::system(
                "You are the coordinator. Based on the analysis, the solution and \
                 the critique, write a short final summary answering the task. Do \
                 not repeat the other answers verbatim.",
            ),
            GenericMessage::user(TASK),
            GenericMessage::assistant(analysis.unwrap_or_default()),
            GenericMessage::user("The analyst's answer. Next, the engineer's:"),
            GenericMessage::assistant(solution.unwrap_or_default()),
            GenericMessage::user("The engineer's answer. Next, the critic's:"),
            GenericMessage::assistant(critique.unwrap_or_default()),
            GenericMessage::user("The critique. Now give the final summary."),
        ],
    )
    .await;
    println!("{}", summary.as_deref().unwrap_or("(no answer)"));
    println!();
    println!("{sep}");
    println!("Done.");

    Ok(())
}

async fn stream_answer(backend: &DeepSeekAdapter, messages: Vec<GenericMessage>) {
    let params = ChatCompleteParameters::new(messages, Model::DeepSeek(DeepSeekModel::Chat));
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

async fn full_answer(backend: &DeepSeekAdapter, messages: Vec<GenericMessage>) -> Option<String> {
    let params = ChatCompleteParameters::new(messages, Model::DeepSeek(DeepSeekModel::Chat));
    match backend.chat_complete(params).await {
        Ok(response) => response.message.content,
        Err(e) => {
            eprintln!("Error: {e}");
            None
        }
    }
}
