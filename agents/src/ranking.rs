// ═══════════════════════════════════════════════════════════════════════
// Territory ranking — which owned territories need defending and which
// neighbours are worth attacking. Recomputed from the map on every call.
// ═══════════════════════════════════════════════════════════════════════

use crate::player::Player;
use conquest_engine::map::{Map, Territory};
use conquest_engine::types::TerritoryId;

impl Player {
    /// Owned territories that are weak (fewer than `defend_threshold`
    /// armies) or border a territory owned by someone else.
    /// Weakest first; ties keep owned order.
    pub fn to_defend(&self, map: &Map) -> Vec<TerritoryId> {
        let mut defend: Vec<&Territory> = self.owned_on(map)
            .filter(|t| t.armies < self.config.defend_threshold || self.borders_foreign(map, t))
            .collect();
        // sort_by_key is stable
        defend.sort_by_key(|t| t.armies);
        defend.into_iter().map(|t| t.id).collect()
    }

    /// Every foreign neighbour of every owned territory, weakest first.
    /// A neighbour bordering several owned territories appears once per border.
    pub fn to_attack(&self, map: &Map) -> Vec<TerritoryId> {
        let mut attack: Vec<&Territory> = self.owned_on(map)
            .flat_map(move |t| self.foreign_neighbours(map, t))
            .collect();
        attack.sort_by_key(|t| t.armies);
        attack.into_iter().map(|t| t.id).collect()
    }

    fn owned_on<'m>(&'m self, map: &'m Map) -> impl Iterator<Item = &'m Territory> + 'm {
        self.territories.iter().filter_map(move |&id| map.territory(id))
    }

    /// Present neighbours not owned by this player. Unowned land counts as
    /// foreign; absent slots and ids the map does not know are skipped.
    fn foreign_neighbours<'m>(&'m self, map: &'m Map, territory: &'m Territory) -> impl Iterator<Item = &'m Territory> + 'm {
        territory.adjacent.iter()
            .filter_map(|slot| *slot)
            .filter_map(move |id| map.territory(id))
            .filter(move |adj| !adj.is_owned_by(self.id))
    }

    fn borders_foreign(&self, map: &Map, territory: &Territory) -> bool {
        self.foreign_neighbours(map, territory).next().is_some()
    }
}
