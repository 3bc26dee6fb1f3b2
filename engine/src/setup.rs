// ═══════════════════════════════════════════════════════════════════════
// Game setup — builds a seeded demo board for N players
// Everything random is drawn from one ChaCha8 stream so a seed fully
// determines the map, the ownership split and every starting hand.
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::{Deck, Hand};
use crate::config::SetupConfig;
use crate::error::{ConfigError, MapError};
use crate::map::Map;
use crate::roster::Roster;
use crate::types::{PlayerId, TerritoryId};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const REGION_NAMES: [&str; 16] = [
    "Ashford", "Brightwater", "Coldmoor", "Duskvale", "Emberfall", "Frosthold",
    "Greywood", "Highmarch", "Ironcliff", "Juniper", "Kingsreach", "Lowfen",
    "Mistport", "Northwatch", "Oakheart", "Pinecrest",
];

/// A player's starting position as dealt by setup.
#[derive(Debug, Clone)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    pub territories: Vec<TerritoryId>,
    pub hand: Hand,
}

#[derive(Debug, Clone)]
pub struct GameSetup {
    pub map: Map,
    pub roster: Roster,
    pub seats: Vec<Seat>,
    pub deck: Deck,
}

fn region_name(index: usize) -> String {
    let base = REGION_NAMES[index % REGION_NAMES.len()];
    match index / REGION_NAMES.len() {
        0 => base.to_string(),
        lap => format!("{} {}", base, lap + 1),
    }
}

/// Create the initial board described by `config`.
pub fn create_initial_state(config: &SetupConfig) -> Result<GameSetup, ConfigError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    // Ring of territories, then a few random chords
    let mut map = Map::new();
    let count = config.territories as usize;
    let ids: Vec<TerritoryId> = (0..count)
        .map(|i| map.add_territory(region_name(i), rng.gen_range(1..=config.max_starting_armies.max(1))))
        .collect::<Result<_, MapError>>()?;
    if count > 1 {
        for i in 0..count {
            map.connect(ids[i], ids[(i + 1) % count])?;
        }
        for _ in 0..config.extra_links {
            let a = ids[rng.gen_range(0..count)];
            let b = ids[rng.gen_range(0..count)];
            if a != b {
                map.connect(a, b)?;
            }
        }
    }

    let mut roster = Roster::new();
    let mut seats: Vec<Seat> = config.player_names.iter()
        .map(|name| -> Result<Seat, ConfigError> {
            Ok(Seat {
                id: roster.register(name.clone())?,
                name: name.clone(),
                territories: Vec::new(),
                hand: Hand::new(),
            })
        })
        .collect::<Result<_, ConfigError>>()?;

    // Deal territories round-robin over a shuffled order
    let mut deal_order = ids.clone();
    deal_order.shuffle(&mut rng);
    for (i, tid) in deal_order.into_iter().enumerate() {
        let seat = &mut seats[i % config.player_names.len()];
        map.set_owner(tid, Some(seat.id))?;
        seat.territories.push(tid);
    }

    let mut deck = Deck::standard(config.card_copies);
    deck.shuffle(&mut rng);
    for seat in &mut seats {
        deck.deal(&mut seat.hand, config.cards_per_hand);
    }

    Ok(GameSetup { map, roster, seats, deck })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_game() {
        let setup = create_initial_state(&SetupConfig::default()).unwrap();
        assert_eq!(setup.map.len(), 12);
        assert_eq!(setup.seats.len(), 3);
        assert_eq!(setup.roster.len(), 3);

        // Every territory is dealt to exactly one seat
        let dealt: usize = setup.seats.iter().map(|s| s.territories.len()).sum();
        assert_eq!(dealt, 12);
        for seat in &setup.seats {
            assert_eq!(seat.territories.len(), 4);
            assert_eq!(seat.hand.len(), 2);
            for &tid in &seat.territories {
                assert_eq!(setup.map.territory(tid).unwrap().owner, Some(seat.id));
            }
        }
        assert_eq!(setup.deck.len(), 5 * 4 - 3 * 2);
    }

    #[test]
    fn test_ring_is_connected() {
        let setup = create_initial_state(&SetupConfig::default()).unwrap();
        for t in setup.map.territories() {
            assert!(t.adjacent.len() >= 2, "{} should border both ring neighbours", t.name);
            assert!(t.armies >= 1 && t.armies <= 8);
        }
    }

    #[test]
    fn test_deterministic_seed() {
        let config = SetupConfig { seed: 123, ..SetupConfig::default() };
        let s1 = create_initial_state(&config).unwrap();
        let s2 = create_initial_state(&config).unwrap();
        assert_eq!(s1.map, s2.map);
        assert_eq!(s1.deck, s2.deck);
        for (a, b) in s1.seats.iter().zip(&s2.seats) {
            assert_eq!(a.territories, b.territories);
            assert_eq!(a.hand, b.hand);
        }
    }

    #[test]
    fn test_rejects_more_players_than_territories() {
        let config = SetupConfig { territories: 2, ..SetupConfig::default() };
        assert!(matches!(create_initial_state(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_region_names_wrap() {
        assert_eq!(region_name(0), "Ashford");
        assert_eq!(region_name(16), "Ashford 2");
    }
}
