//! Settlement data types
//!
//! Explicit tagged records for everything crossing the settlement boundary.
//! Field normalization (trimming, catalog aliasing) happens when data enters
//! the core, not inside matching logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the condition a wager takes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BetSide {
    /// Wins if the named condition occurs
    Back,
    /// Wins if the named condition does NOT occur (exchange-style inverse)
    Lay,
}

impl fmt::Display for BetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetSide::Back => write!(f, "back"),
            BetSide::Lay => write!(f, "lay"),
        }
    }
}

/// A placed wager, owned by the round/wallet service. The engine only reads
/// these; it never mutates bet storage or balances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserBet {
    /// Caller-side identifier echoed back on the decision
    pub bet_id: String,
    /// Coverage string or catalog bet-type label
    pub bet_type: String,
    pub amount: f64,
    pub odds: f64,
    pub side: BetSide,
}

/// Catalog entry mapping a user-facing bet type to its canonical coverage
/// string. Identity lives in the coverage field (`n` on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BetDefinition {
    /// Canonical coverage string matched against derived attributes
    #[serde(alias = "n")]
    pub coverage: String,
    /// Display label shown to users
    pub label: String,
    /// Catalog odds metadata, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odds: Option<f64>,
}

/// Per-bet settlement output, produced once per round-bet pair and consumed
/// by the external wallet service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementDecision {
    pub bet_id: String,
    pub won: bool,
    /// Audit/diagnostic text, never shown to end users verbatim
    pub reason: String,
    /// Computed payout for winners, absent for losers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<f64>,
}

/// Aggregate settlement report for one round. Decisions preserve the input
/// bet order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSettlement {
    pub settlement_id: String,
    /// Outcome echo for audit, absent when the result was unparseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub decisions: Vec<SettlementDecision>,
    pub total_payout: f64,
}

/// Round `value` to `decimals` places, half away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
