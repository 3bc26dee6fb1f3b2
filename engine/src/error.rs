// ═══════════════════════════════════════════════════════════════════════
// Engine errors
// ═══════════════════════════════════════════════════════════════════════

use crate::types::TerritoryId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("unknown territory {0}")]
    UnknownTerritory(TerritoryId),
    #[error("territory {0} cannot border itself")]
    SelfLoop(TerritoryId),
    #[error("map is full: no territory id left after {0} territories")]
    Full(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("roster is full: no player id left after {0} entries")]
    Full(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("generated map is inconsistent: {0}")]
    Map(#[from] MapError),
    #[error("cannot seat players: {0}")]
    Roster(#[from] RosterError),
}
