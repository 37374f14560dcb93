//! Injury dataset tools: refresh, player lookup, team lookup.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;
use crate::data::{enrich_with_inferred_teams, PlayerStatus, Repository};
use crate::teams;

/// Re-scrape the source and replace the local snapshot.
pub struct RefreshDataset;

#[async_trait]
impl Tool for RefreshDataset {
    fn name(&self) -> &str {
        "refresh_dataset"
    }

    fn description(&self) -> &str {
        "Fetch the latest NBA injury table from the source and replace the local dataset. Returns the number of rows stored."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: Value, repo: &Repository) -> anyhow::Result<String> {
        let records = repo.refresh_and_store().await?;
        Ok(format!(
            "Refreshed injury dataset: {} rows stored.",
            records.len()
        ))
    }
}

/// Look up one player's current injury status.
pub struct QueryPlayer;

#[async_trait]
impl Tool for QueryPlayer {
    fn name(&self) -> &str {
        "query_player"
    }

    fn description(&self) -> &str {
        "Look up a player's current injury status by exact name (case-insensitive). Returns status, reason and expected return when known."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "player_name": {
                    "type": "string",
                    "description": "Full player name, e.g. 'LeBron James'"
                }
            },
            "required": ["player_name"]
        })
    }

    async fn execute(&self, args: Value, repo: &Repository) -> anyhow::Result<String> {
        let player_name = string_arg(&args, "player_name")
            .ok_or_else(|| anyhow::anyhow!("Missing 'player_name' argument"))?;

        let mut records = repo.load()?;
        if records.is_empty() {
            records = repo.refresh_and_store().await?;
        }
        let records = enrich_with_inferred_teams(&records);

        let lines: Vec<String> = records
            .iter()
            .filter(|record| record.player_name.eq_ignore_ascii_case(&player_name))
            .map(format_status_line)
            .collect();

        if lines.is_empty() {
            Ok(format!("No injury info found for {}.", player_name))
        } else {
            Ok(lines.join("\n"))
        }
    }
}

/// List injured players for one team.
pub struct QueryTeam;

#[async_trait]
impl Tool for QueryTeam {
    fn name(&self) -> &str {
        "query_team"
    }

    fn description(&self) -> &str {
        "List currently injured players for a team. Accepts a full franchise name or a nickname like 'Sixers'."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "team_name": {
                    "type": "string",
                    "description": "Team name or nickname, e.g. 'Boston Celtics' or 'Sixers'"
                }
            },
            "required": ["team_name"]
        })
    }

    async fn execute(&self, args: Value, repo: &Repository) -> anyhow::Result<String> {
        let team_name = string_arg(&args, "team_name")
            .ok_or_else(|| anyhow::anyhow!("Missing 'team_name' argument"))?;

        let canonical = teams::resolve_canonical(&team_name)
            .map(str::to_string)
            .unwrap_or_else(|| team_name.clone());

        let records = repo.load()?;

        let mut matches: Vec<&PlayerStatus> = records
            .iter()
            .filter(|record| team_matches(record, &canonical))
            .collect();

        // Only when no explicit affiliation matches, fall back to teams
        // inferred from the injury notes.
        let enriched;
        if matches.is_empty() {
            enriched = enrich_with_inferred_teams(&records);
            matches = enriched
                .iter()
                .filter(|record| team_matches(record, &canonical))
                .collect();
        }

        if matches.is_empty() {
            return Ok(format!("No injured players found for {}.", canonical));
        }

        let lines: Vec<String> = matches
            .iter()
            .map(|record| format!("- {}", format_status_line(record)))
            .collect();
        Ok(lines.join("\n"))
    }
}

fn team_matches(record: &PlayerStatus, canonical: &str) -> bool {
    record
        .team
        .as_deref()
        .is_some_and(|team| team.eq_ignore_ascii_case(canonical))
}

/// Read a named string argument, accepting a bare string payload as the
/// implicit value when the arguments did not parse as an object.
fn string_arg(args: &Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(Value::as_str)
        .or_else(|| args.as_str())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn format_status_line(record: &PlayerStatus) -> String {
    let mut line = match &record.team {
        Some(team) => format!("{} ({}): {}", record.player_name, team, record.status),
        None => format!("{}: {}", record.player_name, record.status),
    };
    if let Some(reason) = &record.reason {
        line.push_str(&format!(" — {}", reason));
    }
    if let Some(expected_return) = &record.expected_return {
        line.push_str(&format!("; expected return: {}", expected_return));
    }
    line
}
