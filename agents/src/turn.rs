// ═══════════════════════════════════════════════════════════════════════
// Issue phase driver — calls issue_order until the player is done
// ═══════════════════════════════════════════════════════════════════════

use crate::issue::{IssueError, IssueOutcome};
use crate::observer::DecisionObserver;
use crate::player::Player;
use conquest_engine::map::Map;
use conquest_engine::roster::Roster;
use serde::{Deserialize, Serialize};

/// Record of one player's issue phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub steps: Vec<IssueOutcome>,
    /// Stopped by `max_calls` while `has_more_orders` was still true.
    pub exhausted: bool,
}

impl PhaseSummary {
    pub fn calls(&self) -> usize {
        self.steps.len()
    }

    pub fn orders_added(&self) -> usize {
        self.steps.iter().map(IssueOutcome::orders_added).sum()
    }
}

/// Drive `player` through its issue phase.
///
/// `max_calls` is a safety limit: with an empty pool and cards in hand,
/// defend/attack advances keep firing while the hand is never reached.
pub fn run_issue_phase(
    player: &mut Player,
    map: &Map,
    roster: &mut Roster,
    observer: &mut dyn DecisionObserver,
    max_calls: usize,
) -> Result<PhaseSummary, IssueError> {
    let mut steps = Vec::new();
    while player.has_more_orders(map) {
        if steps.len() >= max_calls {
            return Ok(PhaseSummary { steps, exhausted: true });
        }
        steps.push(player.issue_order(map, roster, observer)?);
    }
    Ok(PhaseSummary { steps, exhausted: false })
}
