// ═══════════════════════════════════════════════════════════════════════
// Player — identity, reinforcement pool, hand and private order queue
//
// A Player owns its OrderQueue outright. Cloning a player deep-copies
// the queue; territories are referenced by id and stay in the Map.
// ═══════════════════════════════════════════════════════════════════════

use conquest_engine::cards::Hand;
use conquest_engine::config::IssueConfig;
use conquest_engine::map::Map;
use conquest_engine::orders::OrderQueue;
use conquest_engine::types::{PlayerId, TerritoryId};

#[derive(Debug)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) territories: Vec<TerritoryId>,
    pub(crate) hand: Hand,
    pub(crate) orders: OrderQueue,
    pub(crate) reinforcements: u32,
    /// Set when a deploy found no defend target; cleared by a new pool.
    pub(crate) deploy_stalled: bool,
    pub(crate) negotiating: bool,
    pub(crate) config: IssueConfig,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player::with_config(id, name, IssueConfig::default())
    }

    pub fn with_config(id: PlayerId, name: impl Into<String>, config: IssueConfig) -> Self {
        Player {
            id,
            name: name.into(),
            territories: Vec::new(),
            hand: Hand::new(),
            orders: OrderQueue::new(),
            reinforcements: 0,
            deploy_stalled: false,
            negotiating: false,
            config,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn id(&self) -> PlayerId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn territories(&self) -> &[TerritoryId] { &self.territories }
    pub fn hand(&self) -> &Hand { &self.hand }
    pub fn hand_mut(&mut self) -> &mut Hand { &mut self.hand }
    pub fn orders(&self) -> &OrderQueue { &self.orders }
    pub fn orders_mut(&mut self) -> &mut OrderQueue { &mut self.orders }
    pub fn reinforcements(&self) -> u32 { self.reinforcements }
    pub fn is_deploy_stalled(&self) -> bool { self.deploy_stalled }
    pub fn config(&self) -> &IssueConfig { &self.config }

    /// Set by the diplomacy effect; combat reads it to skip attacks.
    pub fn is_negotiating(&self) -> bool { self.negotiating }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_reinforcements(&mut self, pool: u32) {
        self.reinforcements = pool;
        self.deploy_stalled = false;
    }

    pub fn set_negotiating(&mut self, status: bool) {
        self.negotiating = status;
    }

    pub fn set_config(&mut self, config: IssueConfig) {
        self.config = config;
    }

    /// Record a conquered territory. Already-owned ids are ignored.
    pub fn add_territory(&mut self, territory: TerritoryId) {
        if !self.territories.contains(&territory) {
            self.territories.push(territory);
        }
    }

    pub fn remove_territory(&mut self, territory: TerritoryId) {
        self.territories.retain(|&t| t != territory);
    }

    pub fn owns(&self, territory: TerritoryId) -> bool {
        self.territories.contains(&territory)
    }

    /// Display adapter that also prints each owned territory from `map`.
    pub fn report<'a>(&'a self, map: &'a Map) -> PlayerReport<'a> {
        PlayerReport { player: self, map }
    }
}

impl Clone for Player {
    fn clone(&self) -> Self {
        Player {
            id: self.id,
            name: self.name.clone(),
            territories: self.territories.clone(),
            hand: self.hand.clone(),
            orders: self.orders.clone(),
            reinforcements: self.reinforcements,
            deploy_stalled: self.deploy_stalled,
            negotiating: self.negotiating,
            config: self.config,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.id = source.id;
        self.name.clone_from(&source.name);
        self.territories.clone_from(&source.territories);
        self.hand.clone_from(&source.hand);
        self.orders.clone_from(&source.orders);
        self.reinforcements = source.reinforcements;
        self.deploy_stalled = source.deploy_stalled;
        self.negotiating = source.negotiating;
        self.config = source.config;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Player: {}", self.name)?;
        write!(f, "Owned Territories:")?;
        for t in &self.territories {
            write!(f, " {}", t)?;
        }
        writeln!(f)?;
        writeln!(f, "Orders:")?;
        write!(f, "{}", self.orders)
    }
}

pub struct PlayerReport<'a> {
    player: &'a Player,
    map: &'a Map,
}

impl std::fmt::Display for PlayerReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.player;
        writeln!(f, "Player: {} ({})", p.name, p.id)?;
        writeln!(f, "Reinforcements: {}  Cards: {}", p.reinforcements, p.hand.len())?;
        writeln!(f, "Owned Territories:")?;
        for &tid in &p.territories {
            match self.map.territory(tid) {
                Some(t) => writeln!(f, "  {}", t)?,
                None => writeln!(f, "  {} (not on map)", tid)?,
            }
        }
        writeln!(f, "Orders:")?;
        write!(f, "{}", p.orders)
    }
}
