//! Injury data layer: structured records, the CSV-backed snapshot store,
//! and the refresh pipeline.

mod repository;
mod store;

pub use repository::{enrich_with_inferred_teams, ingest, InjurySource, RawTable, Repository};
pub use store::StatusStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One player's current injury record.
///
/// `status` is whatever the source feed says ("OUT", "DAY-TO-DAY", ...);
/// it is not constrained to an enum. `expected_return` is free text and is
/// never parsed as a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Canonical franchise name, once known. Set from an explicit source
    /// column or, as a fallback, inferred from the injury note.
    pub team: Option<String>,
    pub player_name: String,
    pub status: String,
    /// Free-text injury note, the substrate for team inference.
    pub reason: Option<String>,
    pub expected_return: Option<String>,
}

/// Data-layer failures.
///
/// Schema, fetch and network errors abort the refresh path without
/// touching the previously persisted snapshot.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("source table missing required column: {0}")]
    Schema(String),

    #[error("no injury tables found at source")]
    Fetch,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
