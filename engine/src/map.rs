// ═══════════════════════════════════════════════════════════════════════
// Territory graph — armies, owners and adjacency
// The decision engine only reads from here; conquest and combat write.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::MapError;
use crate::types::{PlayerId, TerritoryId};
use serde::{Deserialize, Serialize};

/// A single node of the territory graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    pub armies: u32,
    pub owner: Option<PlayerId>,
    /// Neighbour slots. `None` marks an unresolved link and is never an enemy.
    pub adjacent: Vec<Option<TerritoryId>>,
}

impl Territory {
    pub fn id(&self) -> TerritoryId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn armies(&self) -> u32 { self.armies }
    pub fn owner(&self) -> Option<PlayerId> { self.owner }
    pub fn adjacent(&self) -> &[Option<TerritoryId>] { &self.adjacent }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }
}

impl std::fmt::Display for Territory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] armies={}", self.name, self.id, self.armies)?;
        match self.owner {
            Some(owner) => write!(f, " owner={}", owner),
            None => write!(f, " owner=none"),
        }
    }
}

/// Territory storage. `TerritoryId(n)` indexes `territories[n]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    territories: Vec<Territory>,
}

impl Map {
    pub fn new() -> Self {
        Map::default()
    }

    /// Append a territory with no owner and no neighbours.
    ///
    /// Fails once every `TerritoryId` is taken.
    pub fn add_territory(&mut self, name: impl Into<String>, armies: u32) -> Result<TerritoryId, MapError> {
        let count = self.territories.len();
        let id = TerritoryId(u16::try_from(count).map_err(|_| MapError::Full(count))?);
        self.territories.push(Territory {
            id,
            name: name.into(),
            armies,
            owner: None,
            adjacent: Vec::new(),
        });
        Ok(id)
    }

    pub fn len(&self) -> usize { self.territories.len() }
    pub fn is_empty(&self) -> bool { self.territories.is_empty() }

    pub fn territory(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.0 as usize)
    }

    pub fn territory_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id.0 as usize)
    }

    pub fn territories(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Display name, or `"?"` for ids the map does not know.
    pub fn name_of(&self, id: TerritoryId) -> &str {
        self.territory(id).map_or("?", |t| t.name.as_str())
    }

    pub fn armies_of(&self, id: TerritoryId) -> Option<u32> {
        self.territory(id).map(|t| t.armies)
    }

    fn require_mut(&mut self, id: TerritoryId) -> Result<&mut Territory, MapError> {
        self.territories.get_mut(id.0 as usize).ok_or(MapError::UnknownTerritory(id))
    }

    /// Link two territories in both directions.
    pub fn connect(&mut self, a: TerritoryId, b: TerritoryId) -> Result<(), MapError> {
        self.connect_one_way(a, b)?;
        self.connect_one_way(b, a)
    }

    pub fn connect_one_way(&mut self, from: TerritoryId, to: TerritoryId) -> Result<(), MapError> {
        if from == to {
            return Err(MapError::SelfLoop(from));
        }
        if self.territory(to).is_none() {
            return Err(MapError::UnknownTerritory(to));
        }
        let t = self.require_mut(from)?;
        if !t.adjacent.contains(&Some(to)) {
            t.adjacent.push(Some(to));
        }
        Ok(())
    }

    /// Add an unresolved neighbour slot, as left behind by a partially loaded map.
    pub fn add_absent_link(&mut self, from: TerritoryId) -> Result<(), MapError> {
        self.require_mut(from)?.adjacent.push(None);
        Ok(())
    }

    pub fn set_owner(&mut self, id: TerritoryId, owner: Option<PlayerId>) -> Result<(), MapError> {
        self.require_mut(id)?.owner = owner;
        Ok(())
    }

    pub fn set_armies(&mut self, id: TerritoryId, armies: u32) -> Result<(), MapError> {
        self.require_mut(id)?.armies = armies;
        Ok(())
    }

    /// Ids of every territory whose owner is `player`, in map order.
    pub fn owned_by(&self, player: PlayerId) -> Vec<TerritoryId> {
        self.territories.iter()
            .filter(|t| t.is_owned_by(player))
            .map(|t| t.id)
            .collect()
    }
}
