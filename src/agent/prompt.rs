//! System prompt templates for the assistant.

use crate::tools::ToolRegistry;

/// Instruction appended after each round of tool results.
pub(crate) const ANSWER_NUDGE: &str =
    "Answer the user's question now, using the tool results above.";

/// Build the system prompt with tool definitions.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .list_tools()
        .iter()
        .map(|t| format!("- **{}**: {}", t.name, t.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an assistant answering questions about NBA player injuries from a locally cached dataset.

## Your Tools

{tool_descriptions}

## Rules

1. **Answer from tools** - The local dataset is the source of truth. Don't answer injury questions from memory.

2. **Refresh when stale** - If a lookup comes back empty or the user asks for the latest report, refresh the dataset once and retry before giving up.

3. **Players vs teams** - Use query_player for a named player and query_team for a whole roster. Team nicknames like "Sixers" are fine.

4. **Be honest** - If the dataset has no information, say so plainly. Never invent an injury status.

5. **Be concise** - Answer in a few clear sentences.

When you have what you need, reply with the final answer and no further tool calls."#,
        tool_descriptions = tool_descriptions
    )
}
