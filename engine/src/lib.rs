pub mod types;
pub mod error;
pub mod map;
pub mod cards;
pub mod orders;
pub mod roster;
pub mod config;
pub mod setup;

pub use types::*;
pub use error::{ConfigError, MapError, RosterError};
pub use map::{Map, Territory};
pub use cards::{Card, Deck, Hand};
pub use orders::{Order, OrderKind, OrderQueue};
pub use roster::{PlayerKind, Roster, RosterEntry};
pub use config::{IssueConfig, NeutralPolicy, PreconditionPolicy, SetupConfig};
