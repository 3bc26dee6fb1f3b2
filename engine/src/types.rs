// ═══════════════════════════════════════════════════════════════════════
// Core types — identifiers and card kinds shared by every crate
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ── Identifiers ────────────────────────────────────────────────────────
// Compact, copyable handles. Ownership is keyed by these, never by name.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PlayerId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct TerritoryId(pub u16);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Card types ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Reinforcement,
    Bomb,
    Airlift,
    Blockade,
    Diplomacy,
}

impl CardType {
    pub const ALL: [CardType; 5] = [
        CardType::Reinforcement,
        CardType::Bomb,
        CardType::Airlift,
        CardType::Blockade,
        CardType::Diplomacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Reinforcement => "Reinforcement",
            CardType::Bomb => "Bomb",
            CardType::Airlift => "Airlift",
            CardType::Blockade => "Blockade",
            CardType::Diplomacy => "Diplomacy",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card type: {0:?}")]
pub struct UnknownCardType(pub String);

impl FromStr for CardType {
    type Err = UnknownCardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardType::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCardType(s.to_string()))
    }
}
