//! Courtside - interactive CLI entry point.

use std::io::{BufRead, Write};
use std::sync::Arc;

use courtside::agent::Agent;
use courtside::config::Config;
use courtside::data::{Repository, StatusStore};
use courtside::scrape::EspnScraper;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtside=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!("Loaded configuration: model={}", config.default_model);

    let store = StatusStore::new(config.data_path.clone());
    let source = Arc::new(EspnScraper::new(config.source_url.clone()));
    let repo = Arc::new(Repository::new(store, source));

    // Make sure there is local data before taking questions.
    if repo.load()?.is_empty() {
        println!("No local injury data found. Fetching from ESPN...");
        let records = repo.refresh_and_store().await?;
        println!("Stored {} player status rows.", records.len());
    }

    let agent = Agent::new(config, Arc::clone(&repo));

    println!("NBA Injury Assistant - type a question (or 'exit' to quit):");
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }

        match agent.answer_question(question).await {
            Ok(answer) if answer.is_empty() => println!("[No answer produced]"),
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    println!("Goodbye!");

    Ok(())
}
