//! # Temperature Comparison
//!
//! The same prompt at `temperature` 0, 0.7 and 1.2, followed by a fourth
//! call that asks the model itself to compare the three answers for
//! accuracy, creativity and diversity, and to recommend a setting per task
//! type.
//!
//! ```bash
//! export DEEPSEEK_API_KEY=sk-…
//! cargo run -p deepchat --example compare_temperature
//! ```

use deepchat::deepseek::{DeepSeekAdapter, DeepSeekAdapterBuilder};
use deepchat::{
    generic::GenericMessage,
    model::{DeepSeekModel, Model},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _},
};

const PROMPT: &str = "Invent a bedtime story about a lighthouse keeper's cat.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = DeepSeekAdapterBuilder::new_from_env().build()?;
    let sep = "=".repeat(60);

    println!("{sep}");
    println!("PROMPT (identical for all three calls)");
    println!("{sep}");
    println!("{PROMPT}");
    println!();

    let mut answers = Vec::new();
    for temperature in [0.0, 0.7, 1.2] {
        println!("{sep}");
        println!("ANSWER at temperature = {temperature}");
        println!("{sep}");

        let answer = request_with_temperature(&backend, PROMPT, temperature, None).await;
        println!("{}", answer.as_deref().unwrap_or("(no answer)"));
        println!();
        answers.push(answer);
    }

    println!("{sep}");
    println!("COMPARISON AND RECOMMENDATIONS (the model judges itself)");
    println!("{sep}");

    let comparison_prompt = format!(
        "Below is one prompt and three answers generated at different \
         temperature settings (0, 0.7, 1.2).\n\n\
         Prompt: {PROMPT}\n\n\
         Answer 1 (temperature = 0):\n{}\n\n\
         Answer 2 (temperature = 0.7):\n{}\n\n\
         Answer 3 (temperature = 1.2):\n{}\n\n\
         Step by step:\n\
         1) Compare the answers for accuracy (factuality and consistency).\n\
         2) Compare them for creativity (ideas, phrasing).\n\
         3) Compare them for diversity (how much they differ from each other).\n\
         4) Recommend which setting fits which kind of task, with examples.",
        answers[0].as_deref().unwrap_or("(no answer)"),
        answers[1].as_deref().unwrap_or("(no answer)"),
        answers[2].as_deref().unwrap_or("(no answer)"),
    );

    let judgement = request_with_temperature(
        &backend,
        &comparison_prompt,
        0.3,
        Some("You are an expert in text evaluation and language-model tuning. Answer in a structured, matter-of-fact way."),
    )
    .await;
    println!("{}", judgement.as_deref().unwrap_or("(no answer)"));
    println!();
    println!("{sep}");
    println!("Done.");

    Ok(())
}

async fn request_with_temperature(
    backend: &DeepSeekAdapter,
    user_message: &str,
    temperature: f64,
    system: Option<&str>,
) -> Option<String> {
    let mut messages = Vec::new();
    if let Some(system) = system {
        messages.push(GenericMessage::system(system));
    }
    messages.push(GenericMessage::user(user_message));

    let params = ChatCompleteParameters::new(messages, Model::DeepSeek(DeepSeekModel::Chat))
        .with_temperature(temperature);

    match backend.chat_complete(params).await {
        Ok(response) => response.message.content,
        Err(e) => {
            eprintln!("Error: {e}");
            None
        }
    }
}
