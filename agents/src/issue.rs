// ═══════════════════════════════════════════════════════════════════════
// Order issuance — one decision step per call
//
// Priority, first applicable branch wins and the call returns:
//   1. Deploy reinforcements to the weakest defend target
//   2. Advance from the first owned territory to every defend target
//   3. Advance from the first owned territory to every attack target
//   4. Play the first card in hand
//
// A pool with nowhere to deploy stalls once; later calls skip step 1
// until the pool is topped up again.
//
// has_more_orders() gates the defend/attack terms behind a non-empty
// pool even though steps 2-3 run with an empty pool. Drivers therefore
// bound the number of calls; see turn::run_issue_phase.
// ═══════════════════════════════════════════════════════════════════════

use crate::observer::{AdvancePurpose, DecisionEvent, DecisionObserver, TargetRole};
use crate::player::Player;
use conquest_engine::cards::Card;
use conquest_engine::config::{NeutralPolicy, PreconditionPolicy};
use conquest_engine::error::RosterError;
use conquest_engine::map::Map;
use conquest_engine::orders::{Order, OrderKind};
use conquest_engine::roster::Roster;
use conquest_engine::types::{CardType, TerritoryId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a single `issue_order` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueOutcome {
    Deployed { target: TerritoryId, units: u32, remaining: u32 },
    /// Pool is non-empty but nothing qualifies for defence. No order was
    /// issued; the next call moves on to step 2.
    Stalled { pool: u32 },
    Advanced { purpose: AdvancePurpose, orders: usize },
    /// The first card was consumed; `order` is what it produced, if anything.
    CardPlayed { card: CardType, order: Option<OrderKind> },
    Idle,
}

impl IssueOutcome {
    /// Number of orders this step appended to the queue.
    pub fn orders_added(&self) -> usize {
        match *self {
            IssueOutcome::Deployed { .. } => 1,
            IssueOutcome::Advanced { orders, .. } => orders,
            IssueOutcome::CardPlayed { order: Some(_), .. } => 1,
            IssueOutcome::CardPlayed { order: None, .. }
            | IssueOutcome::Stalled { .. }
            | IssueOutcome::Idle => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueError {
    #[error("{card} card needs a {role} but none exists")]
    MissingTarget { card: CardType, role: TargetRole },
    #[error("cannot create a neutral player: {0}")]
    Roster(#[from] RosterError),
}

impl Player {
    /// Run one step of the issuing state machine.
    ///
    /// Reads `map`, may register neutral players in `roster` (Blockade),
    /// and reports what it did to `observer`. Under
    /// `PreconditionPolicy::Fail` a card without its required target
    /// returns an error and leaves the player untouched.
    pub fn issue_order(
        &mut self,
        map: &Map,
        roster: &mut Roster,
        observer: &mut dyn DecisionObserver,
    ) -> Result<IssueOutcome, IssueError> {
        if self.reinforcements > 0 && !self.deploy_stalled {
            return Ok(self.deploy(map, observer));
        }

        let defend = self.to_defend(map);
        if !defend.is_empty() {
            return Ok(self.advance_to(&defend, AdvancePurpose::Defend, observer));
        }

        let attack = self.to_attack(map);
        if !attack.is_empty() {
            return Ok(self.advance_to(&attack, AdvancePurpose::Attack, observer));
        }

        self.play_first_card(map, roster, observer)
    }

    /// Step 4 on its own: consult and consume the first card in hand.
    ///
    /// On a consistent map any attack target implies a defend target, so
    /// `issue_order` only reaches this step once both rankings are empty.
    /// Drivers that want targeted card plays call it directly.
    pub fn play_first_card(
        &mut self,
        map: &Map,
        roster: &mut Roster,
        observer: &mut dyn DecisionObserver,
    ) -> Result<IssueOutcome, IssueError> {
        match self.hand.first().copied() {
            Some(card) => self.play_card(card, map, roster, observer),
            None => Ok(IssueOutcome::Idle),
        }
    }

    /// True while the driver should keep calling `issue_order`.
    pub fn has_more_orders(&self, map: &Map) -> bool {
        let has_reinforcements = self.reinforcements > 0;
        let has_defend_targets = has_reinforcements && !self.to_defend(map).is_empty();
        let has_attack_targets = has_reinforcements && !self.to_attack(map).is_empty();
        let has_cards = !self.hand.is_empty();

        has_reinforcements || has_defend_targets || has_attack_targets || has_cards
    }

    // ── Steps ──────────────────────────────────────────────────────────

    fn deploy(&mut self, map: &Map, observer: &mut dyn DecisionObserver) -> IssueOutcome {
        let pool = self.reinforcements;
        observer.on_event(&DecisionEvent::DeployAttempt { player: self.id, pool });

        let Some(&target) = self.to_defend(map).first() else {
            observer.on_event(&DecisionEvent::NoDefendTarget { player: self.id, pool });
            self.deploy_stalled = true;
            return IssueOutcome::Stalled { pool };
        };

        let units = pool.min(self.config.deploy_batch);
        self.reinforcements -= units;
        self.orders.add_order(Order::deploy(self.id, target, units));
        observer.on_event(&DecisionEvent::Deployed {
            player: self.id,
            target,
            units,
            remaining: self.reinforcements,
        });
        IssueOutcome::Deployed { target, units, remaining: self.reinforcements }
    }

    /// One Advance per target, all sourced from the first owned territory.
    fn advance_to(
        &mut self,
        targets: &[TerritoryId],
        purpose: AdvancePurpose,
        observer: &mut dyn DecisionObserver,
    ) -> IssueOutcome {
        // Targets only exist when something is owned
        let Some(&source) = self.territories.first() else {
            return IssueOutcome::Idle;
        };
        for &target in targets {
            self.orders.add_order(Order::advance(self.id, source, target, self.config.advance_units));
        }
        observer.on_event(&DecisionEvent::Advanced { player: self.id, purpose, orders: targets.len() });
        IssueOutcome::Advanced { purpose, orders: targets.len() }
    }

    fn play_card(
        &mut self,
        card: Card,
        map: &Map,
        roster: &mut Roster,
        observer: &mut dyn DecisionObserver,
    ) -> Result<IssueOutcome, IssueError> {
        let card_type = card.card_type();
        observer.on_event(&DecisionEvent::CardConsulted {
            player: self.id,
            card: card_type,
            hand_size: self.hand.len(),
        });

        let order = match card_type {
            CardType::Reinforcement => None,
            CardType::Bomb => match self.to_attack(map).first() {
                Some(&target) => Some(Order::bomb(self.id, target)),
                None => return self.missing_target(card, TargetRole::AttackTarget, observer),
            },
            CardType::Airlift => {
                let Some(&source) = self.territories.first() else {
                    return self.missing_target(card, TargetRole::SourceTerritory, observer);
                };
                let Some(&target) = self.to_defend(map).first() else {
                    return self.missing_target(card, TargetRole::DefendTarget, observer);
                };
                Some(Order::airlift(self.id, source, target, self.config.airlift_units))
            }
            CardType::Blockade => {
                let Some(&target) = self.to_defend(map).first() else {
                    return self.missing_target(card, TargetRole::DefendTarget, observer);
                };
                let neutral = match self.config.neutral {
                    NeutralPolicy::FreshPerBlockade => roster.spawn_neutral()?,
                    NeutralPolicy::Shared => roster.shared_neutral()?,
                };
                Some(Order::blockade(self.id, neutral, target, self.config.blockade_units))
            }
            // No counterpart is an outcome, not a precondition failure
            CardType::Diplomacy => self.to_attack(map).first()
                .and_then(|&target| map.territory(target))
                .and_then(|t| t.owner)
                .filter(|&owner| roster.resolve(owner).is_some())
                .map(|owner| Order::negotiate(self.id, owner)),
        };

        let kind = order.as_ref().map(Order::kind);
        self.hand.remove_card(&card);
        if let Some(order) = order {
            self.orders.add_order(order);
        }
        observer.on_event(&DecisionEvent::CardPlayed { player: self.id, card: card_type, order: kind });
        Ok(IssueOutcome::CardPlayed { card: card_type, order: kind })
    }

    fn missing_target(
        &mut self,
        card: Card,
        role: TargetRole,
        observer: &mut dyn DecisionObserver,
    ) -> Result<IssueOutcome, IssueError> {
        let card_type = card.card_type();
        observer.on_event(&DecisionEvent::MissingTarget { player: self.id, card: card_type, role });
        match self.config.preconditions {
            PreconditionPolicy::Skip => {
                self.hand.remove_card(&card);
                observer.on_event(&DecisionEvent::CardPlayed { player: self.id, card: card_type, order: None });
                Ok(IssueOutcome::CardPlayed { card: card_type, order: None })
            }
            PreconditionPolicy::Fail => Err(IssueError::MissingTarget { card: card_type, role }),
        }
    }
}
