//! Tool surface exposed to the agent loop.
//!
//! Each tool is an independently callable operation with a fixed argument
//! shape. Dispatch never fails: the registry downgrades unknown tools and
//! internal errors to textual results, because the model expects a
//! response turn for every call it makes.

mod injuries;

pub use injuries::{QueryPlayer, QueryTeam, RefreshDataset};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::data::Repository;
use crate::llm::{FunctionSchema, ToolSchema};

#[derive(Debug, Error)]
pub enum ToolDispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// A named operation the model may invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the tool's arguments.
    fn parameters_schema(&self) -> Value;

    async fn execute(&self, args: Value, repo: &Repository) -> anyhow::Result<String>;
}

/// Tool metadata for prompt building.
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

/// Registry of all available tools.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: vec![
                Box::new(RefreshDataset),
                Box::new(QueryPlayer),
                Box::new(QueryTeam),
            ],
        }
    }

    /// List tool names and descriptions.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    /// Tool schemas in the wire format the model expects.
    pub fn get_tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .iter()
            .map(|tool| ToolSchema {
                r#type: "function".to_string(),
                function: FunctionSchema {
                    name: tool.name().to_string(),
                    description: tool.description().to_string(),
                    parameters: tool.parameters_schema(),
                },
            })
            .collect()
    }

    /// Dispatch a tool call by name and return its textual result.
    pub async fn execute(&self, name: &str, args: Value, repo: &Repository) -> String {
        let Some(tool) = self.tools.iter().find(|tool| tool.name() == name) else {
            return ToolDispatchError::UnknownTool(name.to_string()).to_string();
        };

        match tool.execute(args, repo).await {
            Ok(output) => output,
            Err(e) => format!("Error: {}", e),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
