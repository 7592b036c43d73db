//! Croupier - deterministic bet settlement for table games
//!
//! Maps an opaque upstream result descriptor to a win/lose/payout decision
//! for an arbitrary, data-driven set of bet definitions. The pipeline is
//! parse -> derive -> match -> settle: a game-specific parser extracts the
//! canonical outcome, a pure deriver expands it into classification
//! attributes, a generic matcher judges each bet's coverage string against
//! them, and the engine aggregates decisions for the external wallet
//! service to apply.
//!
//! The core is synchronous and pure: no I/O, no randomness in decisions, no
//! shared mutable state. Idempotent application of the results (crediting,
//! bet-status transitions) is the caller's responsibility.

pub mod config;
pub mod errors;
pub mod games;
pub mod settlement;

pub use config::{ConfigLoader, SettlementConfig};
pub use errors::{SettlementError, SettlementResult};
pub use games::roulette::RouletteRules;
pub use settlement::{
    BetCatalog, BetDefinition, BetSide, GameRules, RoundSettlement, SettlementDecision,
    SettlementEngine, UserBet,
};
