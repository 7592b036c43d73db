//! Settlement engine
//!
//! Runs the full pipeline for a round: parse the upstream descriptor once,
//! derive attributes once, judge every bet against that identical state, and
//! compute payouts for winners. Pure computation over its inputs: no I/O, no
//! randomness in decisions, no time dependency. Applying the results
//! (ledger credits, bet status transitions) is the caller's responsibility,
//! as is invoking settlement at-most-once per round.

use super::catalog::BetCatalog;
use super::types::{round_to, BetSide, RoundSettlement, SettlementDecision, UserBet};
use super::GameRules;
use crate::config::SettlementConfig;
use tracing::{debug, warn};
use uuid::Uuid;

/// Round settlement orchestrator, generic over a per-game rules plug-in
pub struct SettlementEngine<R: GameRules> {
    rules: R,
    config: SettlementConfig,
}

impl<R: GameRules> SettlementEngine<R> {
    pub fn new(rules: R) -> Self {
        Self::with_config(rules, SettlementConfig::default())
    }

    pub fn with_config(rules: R, config: SettlementConfig) -> Self {
        Self { rules, config }
    }

    /// Settle every bet in a round against an upstream result descriptor.
    ///
    /// Decisions come back in input-bet order. An unparseable or
    /// out-of-domain result degrades safely: every bet loses, each decision
    /// carrying a reason distinguishable from an ordinary loss so operators
    /// can detect upstream feed problems.
    pub fn settle_round(
        &self,
        descriptor: &str,
        bets: &[UserBet],
        catalog: &BetCatalog,
    ) -> RoundSettlement {
        let settlement_id = Uuid::new_v4().to_string();

        let outcome = match self.rules.parse_result(descriptor) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    settlement_id = %settlement_id,
                    descriptor = %descriptor,
                    "result descriptor rejected, settling round as all-lose: {}", err
                );
                return self.settle_unparseable(settlement_id, err.to_string(), bets);
            }
        };

        // Derived once and reused, so every bet in the round is judged
        // against the identical state
        let attributes = self.rules.derive_attributes(&outcome);
        let outcome_text = self.rules.describe_outcome(&attributes);

        let mut decisions = Vec::with_capacity(bets.len());
        let mut total_payout = 0.0;

        for bet in bets {
            let coverage = catalog.resolve(&bet.bet_type);
            let condition = self.rules.condition_holds(coverage, &attributes);
            let won = match bet.side {
                BetSide::Back => condition,
                BetSide::Lay => !condition,
            };

            let payout = if won {
                let amount = round_to(bet.amount * bet.odds, self.config.payout_decimals);
                total_payout += amount;
                Some(amount)
            } else {
                None
            };

            let reason = format!(
                "{} bet on '{}' {}: condition {} for result {}",
                bet.side,
                coverage,
                if won { "won" } else { "lost" },
                if condition { "occurred" } else { "did not occur" },
                outcome_text,
            );

            debug!(
                settlement_id = %settlement_id,
                bet_id = %bet.bet_id,
                coverage = %coverage,
                won,
                "settled bet"
            );

            decisions.push(SettlementDecision {
                bet_id: bet.bet_id.clone(),
                won,
                reason,
                payout,
            });
        }

        RoundSettlement {
            settlement_id,
            outcome: Some(outcome_text),
            decisions,
            total_payout,
        }
    }

    /// Degraded path: the round result could not be established, so no
    /// condition can be said to have occurred and every bet loses
    fn settle_unparseable(
        &self,
        settlement_id: String,
        reason: String,
        bets: &[UserBet],
    ) -> RoundSettlement {
        let decisions = bets
            .iter()
            .map(|bet| SettlementDecision {
                bet_id: bet.bet_id.clone(),
                won: false,
                reason: reason.clone(),
                payout: None,
            })
            .collect();

        RoundSettlement {
            settlement_id,
            outcome: None,
            decisions,
            total_payout: 0.0,
        }
    }
}
