//! Core agent loop implementation.

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::data::Repository;
use crate::llm::{ChatMessage, LlmClient, OpenRouterClient, Role, ToolCall};
use crate::tools::ToolRegistry;

use super::prompt::{build_system_prompt, ANSWER_NUDGE};

/// The tool-calling injury assistant.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    repo: Arc<Repository>,
}

impl Agent {
    /// Create a new agent backed by OpenRouter.
    pub fn new(config: Config, repo: Arc<Repository>) -> Self {
        let llm = Arc::new(OpenRouterClient::new(config.api_key.clone()));
        Self::with_client(config, llm, repo)
    }

    /// Create an agent with an explicit model client (useful for testing).
    pub fn with_client(config: Config, llm: Arc<dyn LlmClient>, repo: Arc<Repository>) -> Self {
        let tools = ToolRegistry::new();
        Self {
            config,
            llm,
            tools,
            repo,
        }
    }

    /// Answer a natural-language question about injury status.
    ///
    /// Runs the bounded conversation: the model may request tool calls for
    /// up to `max_rounds` rounds; the first reply without tool calls is
    /// the answer. On budget exhaustion the last tool output stands in as
    /// a best-effort answer rather than failing the conversation.
    pub async fn answer_question(&self, question: &str) -> anyhow::Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(String::new());
        }

        let mut messages = vec![
            ChatMessage {
                role: Role::System,
                content: Some(build_system_prompt(&self.tools)),
                tool_calls: None,
                tool_call_id: None,
            },
            ChatMessage {
                role: Role::User,
                content: Some(question.to_string()),
                tool_calls: None,
                tool_call_id: None,
            },
        ];

        let tool_schemas = self.tools.get_tool_schemas();
        let mut last_tool_output: Option<String> = None;

        for round in 0..self.config.max_rounds {
            tracing::debug!(round = round + 1, "agent round");

            let response = self
                .llm
                .chat_completion(&self.config.default_model, &messages, Some(&tool_schemas))
                .await?;

            let tool_calls = response.tool_calls.clone().unwrap_or_default();
            if tool_calls.is_empty() {
                return Ok(response.content.unwrap_or_default().trim().to_string());
            }

            messages.push(ChatMessage {
                role: Role::Assistant,
                content: response.content.clone(),
                tool_calls: Some(tool_calls.clone()),
                tool_call_id: None,
            });

            // Execute requested calls in order, each answered by a tool
            // turn before the next model invocation.
            for tool_call in &tool_calls {
                let args = parse_arguments(&tool_call.function.arguments);
                let output = self
                    .tools
                    .execute(&tool_call.function.name, args, &self.repo)
                    .await;

                messages.push(ChatMessage {
                    role: Role::Tool,
                    content: Some(output.clone()),
                    tool_calls: None,
                    tool_call_id: Some(result_id(tool_call)),
                });
                last_tool_output = Some(output);
            }

            messages.push(ChatMessage {
                role: Role::System,
                content: Some(ANSWER_NUDGE.to_string()),
                tool_calls: None,
                tool_call_id: None,
            });
        }

        // Round budget exhausted: degrade to the last tool output.
        Ok(last_tool_output.unwrap_or_default())
    }
}

/// Parse a tool-call argument payload.
///
/// A payload that is not valid JSON is passed through as a single implicit
/// string argument.
fn parse_arguments(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Identifier for a tool-result turn: the originating call's id, else the
/// tool's name, else a generic placeholder.
fn result_id(tool_call: &ToolCall) -> String {
    tool_call
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| {
            if tool_call.function.name.is_empty() {
                "tool_call".to_string()
            } else {
                tool_call.function.name.clone()
            }
        })
}
