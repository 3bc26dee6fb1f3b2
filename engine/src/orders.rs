// ═══════════════════════════════════════════════════════════════════════
// Orders and the per-player order queue
//
// Orders are plain values: they name territories and players by id and
// own nothing. Cloning a queue therefore produces fully independent
// orders, which is what duplicating a player relies on.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{PlayerId, TerritoryId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    Deploy,
    Advance,
    Bomb,
    Airlift,
    Blockade,
    Negotiate,
}

/// An action request awaiting execution. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    Deploy { issuer: PlayerId, target: TerritoryId, units: u32 },
    Advance { issuer: PlayerId, source: TerritoryId, target: TerritoryId, units: u32 },
    Bomb { issuer: PlayerId, target: TerritoryId },
    Airlift { issuer: PlayerId, source: TerritoryId, target: TerritoryId, units: u32 },
    /// Hands `target` over to `neutral` once executed.
    Blockade { issuer: PlayerId, neutral: PlayerId, target: TerritoryId, units: u32 },
    Negotiate { issuer: PlayerId, counterpart: PlayerId },
}

impl Order {
    pub fn deploy(issuer: PlayerId, target: TerritoryId, units: u32) -> Self {
        Order::Deploy { issuer, target, units }
    }

    pub fn advance(issuer: PlayerId, source: TerritoryId, target: TerritoryId, units: u32) -> Self {
        Order::Advance { issuer, source, target, units }
    }

    pub fn bomb(issuer: PlayerId, target: TerritoryId) -> Self {
        Order::Bomb { issuer, target }
    }

    pub fn airlift(issuer: PlayerId, source: TerritoryId, target: TerritoryId, units: u32) -> Self {
        Order::Airlift { issuer, source, target, units }
    }

    pub fn blockade(issuer: PlayerId, neutral: PlayerId, target: TerritoryId, units: u32) -> Self {
        Order::Blockade { issuer, neutral, target, units }
    }

    pub fn negotiate(issuer: PlayerId, counterpart: PlayerId) -> Self {
        Order::Negotiate { issuer, counterpart }
    }

    pub fn kind(&self) -> OrderKind {
        match self {
            Order::Deploy { .. } => OrderKind::Deploy,
            Order::Advance { .. } => OrderKind::Advance,
            Order::Bomb { .. } => OrderKind::Bomb,
            Order::Airlift { .. } => OrderKind::Airlift,
            Order::Blockade { .. } => OrderKind::Blockade,
            Order::Negotiate { .. } => OrderKind::Negotiate,
        }
    }

    pub fn issuer(&self) -> PlayerId {
        match *self {
            Order::Deploy { issuer, .. }
            | Order::Advance { issuer, .. }
            | Order::Bomb { issuer, .. }
            | Order::Airlift { issuer, .. }
            | Order::Blockade { issuer, .. }
            | Order::Negotiate { issuer, .. } => issuer,
        }
    }

    /// The territory the order acts on, if it has one.
    pub fn target(&self) -> Option<TerritoryId> {
        match *self {
            Order::Deploy { target, .. }
            | Order::Advance { target, .. }
            | Order::Bomb { target, .. }
            | Order::Airlift { target, .. }
            | Order::Blockade { target, .. } => Some(target),
            Order::Negotiate { .. } => None,
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Deploy { issuer, target, units } =>
                write!(f, "Deploy {} units to {} (by {})", units, target, issuer),
            Order::Advance { issuer, source, target, units } =>
                write!(f, "Advance {} units {} -> {} (by {})", units, source, target, issuer),
            Order::Bomb { issuer, target } =>
                write!(f, "Bomb {} (by {})", target, issuer),
            Order::Airlift { issuer, source, target, units } =>
                write!(f, "Airlift {} units {} -> {} (by {})", units, source, target, issuer),
            Order::Blockade { issuer, neutral, target, units } =>
                write!(f, "Blockade {} with {} units, ceded to {} (by {})", target, units, neutral, issuer),
            Order::Negotiate { issuer, counterpart } =>
                write!(f, "Negotiate between {} and {}", issuer, counterpart),
        }
    }
}

// ── Order queue ────────────────────────────────────────────────────────

/// A player's pending orders, in issue order.
///
/// Append-only from the decision engine's side; the execution phase
/// empties it with [`OrderQueue::take_all`].
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQueue {
    orders: Vec<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        OrderQueue::default()
    }

    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn len(&self) -> usize { self.orders.len() }
    pub fn is_empty(&self) -> bool { self.orders.is_empty() }
    pub fn orders(&self) -> &[Order] { &self.orders }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    /// Hand every queued order to the caller, leaving the queue empty.
    pub fn take_all(&mut self) -> Vec<Order> {
        std::mem::take(&mut self.orders)
    }

    pub fn count_of(&self, kind: OrderKind) -> usize {
        self.orders.iter().filter(|o| o.kind() == kind).count()
    }
}

impl Clone for OrderQueue {
    fn clone(&self) -> Self {
        OrderQueue { orders: self.orders.iter().cloned().collect() }
    }

    /// Drops the held orders, then installs copies of `source`'s.
    fn clone_from(&mut self, source: &Self) {
        self.orders.clear();
        self.orders.extend(source.orders.iter().cloned());
    }
}

impl<'a> IntoIterator for &'a OrderQueue {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

impl std::fmt::Display for OrderQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.orders.is_empty() {
            return writeln!(f, "  (no orders)");
        }
        for (i, order) in self.orders.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, order)?;
        }
        Ok(())
    }
}
