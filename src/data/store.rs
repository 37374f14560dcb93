//! CSV-backed snapshot store for player statuses.
//!
//! The store is a flat file with a fixed header and full-replace
//! semantics: each persist writes a complete snapshot to a sibling temp
//! file and renames it over the store path, so a concurrent reader sees
//! either the old or the new snapshot, never a partial write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::{DataError, PlayerStatus};

const HEADER: &str = "team,player_name,status,reason,expected_return";

/// Handle to the flat CSV file holding the latest injury snapshot.
///
/// The location is explicit per-handle configuration, which keeps test
/// stores isolated from each other.
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored snapshot with `records`.
    ///
    /// An empty record set is a no-op: a failed or empty fetch must never
    /// truncate previously persisted data.
    pub fn persist(&self, records: &[PlayerStatus]) -> Result<(), DataError> {
        if records.is_empty() {
            return Ok(());
        }

        let mut out = String::with_capacity(records.len() * 64);
        out.push_str(HEADER);
        out.push('\n');
        for record in records {
            let fields = [
                record.team.as_deref().unwrap_or(""),
                &record.player_name,
                &record.status,
                record.reason.as_deref().unwrap_or(""),
                record.expected_return.as_deref().unwrap_or(""),
            ];
            let line = fields
                .iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&line);
            out.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, out)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Load the stored snapshot. A missing store is an empty snapshot,
    /// not an error.
    pub fn load(&self) -> Result<Vec<PlayerStatus>, DataError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut lines = content.lines();
        if lines.next().is_none() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_line(line);
            let field = |i: usize| fields.get(i).cloned().unwrap_or_default();
            records.push(PlayerStatus {
                team: non_empty(field(0)),
                player_name: field(1),
                status: field(2),
                reason: non_empty(field(3)),
                expected_return: non_empty(field(4)),
            });
        }
        Ok(records)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Quote a field when it contains a delimiter or a quote. Source cells are
/// single-line; stray newlines are folded into spaces so the store stays
/// line-oriented.
fn escape_field(raw: &str) -> String {
    let flat = if raw.contains('\n') {
        raw.replace('\n', " ")
    } else {
        raw.to_string()
    };
    if flat.contains(',') || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

/// Split one CSV line, honoring double-quoted fields with doubled quotes.
fn split_line(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let chars: Vec<char> = line.chars().collect();
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        if c == '"' {
            if in_quotes && index + 1 < chars.len() && chars[index + 1] == '"' {
                current.push('"');
                index += 2;
                continue;
            }
            in_quotes = !in_quotes;
            index += 1;
            continue;
        }

        if c == ',' && !in_quotes {
            result.push(current.clone());
            current.clear();
        } else {
            current.push(c);
        }
        index += 1;
    }
    result.push(current);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str, team: Option<&str>, reason: Option<&str>) -> PlayerStatus {
        PlayerStatus {
            team: team.map(str::to_string),
            player_name: name.to_string(),
            status: "OUT".to_string(),
            reason: reason.map(str::to_string),
            expected_return: None,
        }
    }

    #[test]
    fn load_missing_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("missing.csv"));
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("injuries.csv"));

        let records = vec![
            record("LeBron James", Some("Los Angeles Lakers"), Some("ankle")),
            record("Joel Embiid", None, None),
        ];
        store.persist(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn quoted_fields_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("injuries.csv"));

        let records = vec![record(
            "Jalen Green",
            Some("Houston Rockets"),
            Some("hamstring, left; says he is \"week to week\""),
        )];
        store.persist(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn persist_empty_preserves_existing_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("injuries.csv"));

        let records = vec![record("LeBron James", Some("Los Angeles Lakers"), None)];
        store.persist(&records).unwrap();

        store.persist(&[]).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn persist_replaces_whole_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("injuries.csv"));

        store
            .persist(&[record("LeBron James", None, None)])
            .unwrap();
        store
            .persist(&[record("Joel Embiid", None, None)])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].player_name, "Joel Embiid");
    }
}
