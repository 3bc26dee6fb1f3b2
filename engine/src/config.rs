// ═══════════════════════════════════════════════════════════════════════
// Configuration — decision-engine tuning and demo setup parameters
// Both load from JSON; missing fields fall back to the defaults below.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which neutral player a Blockade card cedes its territory to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutralPolicy {
    /// Register a new neutral entry for every Blockade played.
    #[default]
    FreshPerBlockade,
    /// Reuse one persistent neutral entry.
    Shared,
}

/// What a card play does when the target it needs does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreconditionPolicy {
    /// Consume the card, issue nothing.
    #[default]
    Skip,
    /// Return an error and leave the player untouched.
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueConfig {
    /// Max units moved out of the pool by one Deploy.
    pub deploy_batch: u32,
    /// Territories with fewer armies than this always need defending.
    pub defend_threshold: u32,
    pub advance_units: u32,
    pub airlift_units: u32,
    pub blockade_units: u32,
    pub neutral: NeutralPolicy,
    pub preconditions: PreconditionPolicy,
}

impl Default for IssueConfig {
    fn default() -> Self {
        IssueConfig {
            deploy_batch: 5,
            defend_threshold: 5,
            advance_units: 1,
            airlift_units: 5,
            blockade_units: 5,
            neutral: NeutralPolicy::FreshPerBlockade,
            preconditions: PreconditionPolicy::Skip,
        }
    }
}

impl IssueConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: IssueConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read_config(path.as_ref())?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deploy_batch == 0 {
            return Err(ConfigError::Invalid("deploy_batch must be at least 1".into()));
        }
        Ok(())
    }
}

/// Parameters for the seeded demo game the runner plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub player_names: Vec<String>,
    pub territories: u16,
    /// Extra random borders added on top of the ring.
    pub extra_links: u16,
    pub max_starting_armies: u32,
    pub cards_per_hand: usize,
    pub card_copies: usize,
    pub seed: u64,
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            player_names: vec!["Alice".into(), "Bob".into(), "Carol".into()],
            territories: 12,
            extra_links: 6,
            max_starting_armies: 8,
            cards_per_hand: 2,
            card_copies: 4,
            seed: 42,
        }
    }
}

impl SetupConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SetupConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read_config(path.as_ref())?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_names.is_empty() {
            return Err(ConfigError::Invalid("at least one player is required".into()));
        }
        if (self.territories as usize) < self.player_names.len() {
            return Err(ConfigError::Invalid(format!(
                "{} territories cannot seat {} players",
                self.territories,
                self.player_names.len()
            )));
        }
        Ok(())
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}
