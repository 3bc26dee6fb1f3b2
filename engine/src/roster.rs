// ═══════════════════════════════════════════════════════════════════════
// Roster — identifier-keyed table of every player in the game
//
// Territory ownership stores a PlayerId; resolving that id back to a
// player goes through this table, so two players sharing a display
// name never collide.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::RosterError;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

pub const NEUTRAL_NAME: &str = "Neutral";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Issues orders every turn.
    Strategic,
    /// Placeholder that only receives blockaded territories.
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    shared_neutral: Option<PlayerId>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Ids are never reused, so a full roster refuses new entries.
    fn push(&mut self, name: String, kind: PlayerKind) -> Result<PlayerId, RosterError> {
        let count = self.entries.len();
        let id = PlayerId(u16::try_from(count).map_err(|_| RosterError::Full(count))?);
        self.entries.push(RosterEntry { id, name, kind });
        Ok(id)
    }

    /// Register a strategic player and return its id.
    pub fn register(&mut self, name: impl Into<String>) -> Result<PlayerId, RosterError> {
        self.push(name.into(), PlayerKind::Strategic)
    }

    /// Always creates a new neutral entry.
    pub fn spawn_neutral(&mut self) -> Result<PlayerId, RosterError> {
        self.push(NEUTRAL_NAME.to_string(), PlayerKind::Neutral)
    }

    /// The single persistent neutral player, created on first use.
    pub fn shared_neutral(&mut self) -> Result<PlayerId, RosterError> {
        if let Some(id) = self.shared_neutral {
            return Ok(id);
        }
        let id = self.spawn_neutral()?;
        self.shared_neutral = Some(id);
        Ok(id)
    }

    pub fn resolve(&self, id: PlayerId) -> Option<&RosterEntry> {
        self.entries.get(id.0 as usize)
    }

    pub fn name_of(&self, id: PlayerId) -> Option<&str> {
        self.resolve(id).map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    pub fn neutral_count(&self) -> usize {
        self.entries.iter().filter(|e| e.kind == PlayerKind::Neutral).count()
    }
}
