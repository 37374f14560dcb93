//! Snapshot ingestion and the refresh pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::data::{DataError, PlayerStatus, StatusStore};
use crate::teams;

// Column headers as they appear in the source table.
pub(crate) const COL_NAME: &str = "NAME";
pub(crate) const COL_STATUS: &str = "STATUS";
pub(crate) const COL_TEAM: &str = "TEAM";
pub(crate) const COL_RETURN: &str = "EST. RETURN DATE";
pub(crate) const COL_COMMENT: &str = "COMMENT";

/// Raw tabular snapshot as scraped from the source: the union of column
/// headers plus one map per row keyed by header.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

/// Upstream provider of the raw injury table.
#[async_trait]
pub trait InjurySource: Send + Sync {
    async fn fetch_raw_table(&self) -> Result<RawTable, DataError>;
}

/// Convert a raw snapshot into structured records.
///
/// NAME and STATUS columns are required. Rows missing either value are
/// dropped silently, since incomplete snapshot data is expected. TEAM,
/// EST. RETURN DATE and COMMENT are mapped when present.
pub fn ingest(raw: &RawTable) -> Result<Vec<PlayerStatus>, DataError> {
    for required in [COL_NAME, COL_STATUS] {
        if !raw.columns.iter().any(|column| column == required) {
            return Err(DataError::Schema(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in &raw.rows {
        let (Some(name), Some(status)) = (cell(row, COL_NAME), cell(row, COL_STATUS)) else {
            continue;
        };
        records.push(PlayerStatus {
            team: cell(row, COL_TEAM),
            player_name: name,
            status,
            reason: cell(row, COL_COMMENT),
            expected_return: cell(row, COL_RETURN),
        });
    }
    Ok(records)
}

fn cell(row: &HashMap<String, String>, column: &str) -> Option<String> {
    row.get(column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Fill in missing team affiliations from the injury notes.
///
/// Returns a new record set. An explicit team from the source is never
/// overwritten; inference only applies where `team` is absent.
pub fn enrich_with_inferred_teams(records: &[PlayerStatus]) -> Vec<PlayerStatus> {
    records
        .iter()
        .map(|record| PlayerStatus {
            team: record.team.clone().or_else(|| {
                record
                    .reason
                    .as_deref()
                    .and_then(teams::infer_team)
                    .map(str::to_string)
            }),
            ..record.clone()
        })
        .collect()
}

/// Injury data repository: the single refresh path plus read access to
/// the local snapshot.
pub struct Repository {
    store: StatusStore,
    source: Arc<dyn InjurySource>,
}

impl Repository {
    pub fn new(store: StatusStore, source: Arc<dyn InjurySource>) -> Self {
        Self { store, source }
    }

    /// Fetch, ingest, enrich and persist a fresh snapshot.
    ///
    /// Any failure before the final write leaves the previously persisted
    /// snapshot untouched.
    pub async fn refresh_and_store(&self) -> Result<Vec<PlayerStatus>, DataError> {
        let raw = self.source.fetch_raw_table().await?;
        let records = ingest(&raw)?;
        let records = enrich_with_inferred_teams(&records);
        self.store.persist(&records)?;
        tracing::info!(rows = records.len(), "refreshed injury snapshot");
        Ok(records)
    }

    /// Read the local snapshot. Empty when nothing has been persisted yet.
    pub fn load(&self) -> Result<Vec<PlayerStatus>, DataError> {
        self.store.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn raw_table(columns: &[&str], rows: Vec<Vec<(&str, &str)>>) -> RawTable {
        RawTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect()
                })
                .collect(),
        }
    }

    struct StubSource {
        table: RawTable,
    }

    #[async_trait]
    impl InjurySource for StubSource {
        async fn fetch_raw_table(&self) -> Result<RawTable, DataError> {
            Ok(self.table.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl InjurySource for FailingSource {
        async fn fetch_raw_table(&self) -> Result<RawTable, DataError> {
            Err(DataError::Fetch)
        }
    }

    #[test]
    fn ingest_requires_name_and_status_columns() {
        let missing_status = raw_table(&["NAME", "COMMENT"], vec![]);
        match ingest(&missing_status) {
            Err(DataError::Schema(column)) => assert_eq!(column, "STATUS"),
            other => panic!("expected schema error, got {other:?}"),
        }

        let missing_name = raw_table(&["STATUS"], vec![]);
        assert!(matches!(ingest(&missing_name), Err(DataError::Schema(_))));
    }

    #[test]
    fn ingest_drops_incomplete_rows() {
        let table = raw_table(
            &["NAME", "STATUS"],
            vec![
                vec![("NAME", "LeBron James"), ("STATUS", "OUT")],
                vec![("NAME", ""), ("STATUS", "OUT")],
                vec![("NAME", "Joel Embiid"), ("STATUS", "  ")],
                vec![("STATUS", "DAY-TO-DAY")],
            ],
        );

        let records = ingest(&table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player_name, "LeBron James");
    }

    #[test]
    fn ingest_maps_optional_columns_when_present() {
        let table = raw_table(
            &["NAME", "STATUS", "TEAM", "EST. RETURN DATE", "COMMENT"],
            vec![vec![
                ("NAME", "Joel Embiid"),
                ("STATUS", "OUT"),
                ("TEAM", "Philadelphia 76ers"),
                ("EST. RETURN DATE", "Mar 1"),
                ("COMMENT", "knee soreness"),
            ]],
        );

        let records = ingest(&table).unwrap();
        assert_eq!(records[0].team.as_deref(), Some("Philadelphia 76ers"));
        assert_eq!(records[0].expected_return.as_deref(), Some("Mar 1"));
        assert_eq!(records[0].reason.as_deref(), Some("knee soreness"));
    }

    #[test]
    fn ingest_then_enrich_infers_team_from_comment() {
        let table = raw_table(
            &["NAME", "STATUS", "COMMENT"],
            vec![vec![
                ("NAME", "LeBron James"),
                ("STATUS", "OUT"),
                ("COMMENT", "the Lakers announced LeBron James is out"),
            ]],
        );

        let records = ingest(&table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].team, None);

        let enriched = enrich_with_inferred_teams(&records);
        assert_eq!(enriched[0].team.as_deref(), Some("Los Angeles Lakers"));
    }

    #[test]
    fn enrich_never_overwrites_explicit_team() {
        let records = vec![PlayerStatus {
            team: Some("Miami Heat".to_string()),
            player_name: "Bam Adebayo".to_string(),
            status: "DAY-TO-DAY".to_string(),
            reason: Some("the Celtics recalled someone else entirely".to_string()),
            expected_return: None,
        }];

        let enriched = enrich_with_inferred_teams(&records);
        assert_eq!(enriched[0].team.as_deref(), Some("Miami Heat"));
        // Input is untouched.
        assert_eq!(records[0].team.as_deref(), Some("Miami Heat"));
    }

    #[tokio::test]
    async fn refresh_and_store_persists_enriched_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = StatusStore::new(dir.path().join("injuries.csv"));
        let source = Arc::new(StubSource {
            table: raw_table(
                &["NAME", "STATUS", "COMMENT"],
                vec![vec![
                    ("NAME", "LeBron James"),
                    ("STATUS", "OUT"),
                    ("COMMENT", "the Lakers announced LeBron James is out"),
                ]],
            ),
        });
        let repo = Repository::new(store, source);

        let records = repo.refresh_and_store().await.unwrap();
        assert_eq!(records[0].team.as_deref(), Some("Los Angeles Lakers"));

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn failed_refresh_leaves_previous_snapshot_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("injuries.csv");

        let good = vec![PlayerStatus {
            team: Some("Los Angeles Lakers".to_string()),
            player_name: "LeBron James".to_string(),
            status: "OUT".to_string(),
            reason: None,
            expected_return: None,
        }];
        StatusStore::new(&path).persist(&good).unwrap();

        let repo = Repository::new(StatusStore::new(&path), Arc::new(FailingSource));
        assert!(matches!(
            repo.refresh_and_store().await,
            Err(DataError::Fetch)
        ));
        assert_eq!(repo.load().unwrap(), good);
    }
}
