// ═══════════════════════════════════════════════════════════════════════
// Decision observers — what the issuing engine reports while it works
//
// The decision code never logs directly. It emits DecisionEvents into an
// observer: TracingObserver forwards them to `tracing`, RecordingObserver
// keeps them for tests, and `()` drops them.
// ═══════════════════════════════════════════════════════════════════════

use conquest_engine::types::{CardType, PlayerId, TerritoryId};
use conquest_engine::OrderKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Why a batch of Advance orders was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvancePurpose {
    Defend,
    Attack,
}

/// The target a card needed but could not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRole {
    AttackTarget,
    DefendTarget,
    SourceTerritory,
}

impl std::fmt::Display for TargetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetRole::AttackTarget => write!(f, "attack target"),
            TargetRole::DefendTarget => write!(f, "defend target"),
            TargetRole::SourceTerritory => write!(f, "source territory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionEvent {
    DeployAttempt { player: PlayerId, pool: u32 },
    Deployed { player: PlayerId, target: TerritoryId, units: u32, remaining: u32 },
    /// Reinforcements are waiting but nothing qualifies for defence.
    NoDefendTarget { player: PlayerId, pool: u32 },
    Advanced { player: PlayerId, purpose: AdvancePurpose, orders: usize },
    CardConsulted { player: PlayerId, card: CardType, hand_size: usize },
    CardPlayed { player: PlayerId, card: CardType, order: Option<OrderKind> },
    MissingTarget { player: PlayerId, card: CardType, role: TargetRole },
}

pub trait DecisionObserver {
    fn on_event(&mut self, event: &DecisionEvent);
}

impl DecisionObserver for () {
    fn on_event(&mut self, _event: &DecisionEvent) {}
}

/// Forwards every event to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn on_event(&mut self, event: &DecisionEvent) {
        match *event {
            DecisionEvent::DeployAttempt { player, pool } => {
                debug!(%player, pool, "attempting to deploy reinforcements");
            }
            DecisionEvent::Deployed { player, target, units, remaining } => {
                info!(%player, %target, units, remaining, "issued deploy order");
            }
            DecisionEvent::NoDefendTarget { player, pool } => {
                warn!(%player, pool, "reinforcements available but no territory to defend");
            }
            DecisionEvent::Advanced { player, purpose, orders } => {
                info!(%player, ?purpose, orders, "issued advance orders");
            }
            DecisionEvent::CardConsulted { player, card, hand_size } => {
                debug!(%player, %card, hand_size, "consulting first card");
            }
            DecisionEvent::CardPlayed { player, card, order: Some(kind) } => {
                info!(%player, %card, order = ?kind, "played card");
            }
            DecisionEvent::CardPlayed { player, card, order: None } => {
                info!(%player, %card, "discarded card without an order");
            }
            DecisionEvent::MissingTarget { player, card, role } => {
                warn!(%player, %card, %role, "card has no valid target");
            }
        }
    }
}

/// Keeps every event in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<DecisionEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        RecordingObserver::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DecisionObserver for RecordingObserver {
    fn on_event(&mut self, event: &DecisionEvent) {
        self.events.push(event.clone());
    }
}
