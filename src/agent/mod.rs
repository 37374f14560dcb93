//! Agent module - the core question-answering logic.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Build context with system prompt and the user's question
//! 2. Call the model with the injury tools bound
//! 3. If the model requests tool calls, execute them and feed results back
//! 4. Repeat until the model answers or the round budget is exhausted

mod agent_loop;
mod prompt;

pub use agent_loop::Agent;
pub use prompt::build_system_prompt;
