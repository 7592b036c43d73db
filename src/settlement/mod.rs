//! Settlement framework
//!
//! Generic round-settlement machinery parameterized by a per-game rules
//! plug-in. The engine owns the orchestration (parse once, derive once,
//! judge every bet, compute payouts); a [`GameRules`] implementation owns
//! everything game-specific.

pub mod catalog;
pub mod engine;
pub mod types;

use crate::errors::SettlementError;

pub use catalog::BetCatalog;
pub use engine::SettlementEngine;
pub use types::{BetDefinition, BetSide, RoundSettlement, SettlementDecision, UserBet};

/// Game-specific settlement rules
///
/// Implementations must be pure: same descriptor and outcome always produce
/// the same attributes and the same match results. New games plug in here
/// without touching the engine.
pub trait GameRules {
    /// Canonical outcome extracted from the upstream result
    type Outcome;
    /// Classifications bets are matched against, derived once per round
    type Attributes;

    /// Parse an upstream descriptor, or fail explicitly. Never guesses.
    fn parse_result(&self, descriptor: &str) -> Result<Self::Outcome, SettlementError>;

    /// Expand an outcome into its full attribute set. Total over the
    /// outcome domain.
    fn derive_attributes(&self, outcome: &Self::Outcome) -> Self::Attributes;

    /// Whether the condition named by a coverage string occurred. Malformed
    /// or unrecognized coverage is a non-match, never an error. Back/lay
    /// inversion is NOT applied here.
    fn condition_holds(&self, coverage: &str, attributes: &Self::Attributes) -> bool;

    /// Short human-readable outcome description for audit reasons
    fn describe_outcome(&self, attributes: &Self::Attributes) -> String;
}
