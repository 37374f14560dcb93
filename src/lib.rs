//! # Courtside
//!
//! A tool-calling assistant for NBA injury reports.
//!
//! This library provides:
//! - A scraper and CSV-backed repository for the ESPN injury table
//! - A team-affiliation inference engine for free-text injury notes
//! - A bounded tool-calling agent loop over an OpenRouter-backed model
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Build context with system prompt and the user's question
//! 2. Call the model with the injury tools bound
//! 3. Execute any requested tool calls, feed results back
//! 4. Repeat until the model answers or the round budget runs out
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use courtside::agent::Agent;
//! use courtside::config::Config;
//! use courtside::data::{Repository, StatusStore};
//! use courtside::scrape::EspnScraper;
//!
//! let config = Config::from_env()?;
//! let repo = Arc::new(Repository::new(
//!     StatusStore::new(config.data_path.clone()),
//!     Arc::new(EspnScraper::new(config.source_url.clone())),
//! ));
//! let agent = Agent::new(config, repo);
//! let answer = agent.answer_question("Is LeBron James playing tonight?").await?;
//! ```

pub mod agent;
pub mod config;
pub mod data;
pub mod llm;
pub mod scrape;
pub mod teams;
pub mod tools;

pub use config::Config;
