pub mod player;
pub mod ranking;
pub mod issue;
pub mod observer;
pub mod turn;

pub use player::{Player, PlayerReport};
pub use issue::{IssueError, IssueOutcome};
pub use observer::{AdvancePurpose, DecisionEvent, DecisionObserver, RecordingObserver, TargetRole, TracingObserver};
pub use turn::{run_issue_phase, PhaseSummary};
