//! European roulette settlement rules
//!
//! Wires the three roulette stages (descriptor parsing, attribute
//! derivation, coverage matching) into the generic [`GameRules`] plug-in
//! consumed by the settlement engine.

pub mod attributes;
pub mod matcher;
pub mod parser;

pub use attributes::{
    Color, Column, DerivedAttributes, Dozen, HalfRange, Parity, WinningNumber, WHEEL_MAX,
};
pub use matcher::CoverageKind;

use crate::errors::SettlementError;
use crate::settlement::GameRules;

/// Roulette implementation of the settlement rules seam
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteRules;

impl RouletteRules {
    pub fn new() -> Self {
        Self
    }
}

impl GameRules for RouletteRules {
    type Outcome = WinningNumber;
    type Attributes = DerivedAttributes;

    fn parse_result(&self, descriptor: &str) -> Result<WinningNumber, SettlementError> {
        parser::parse_result(descriptor)
    }

    fn derive_attributes(&self, outcome: &WinningNumber) -> DerivedAttributes {
        DerivedAttributes::derive(*outcome)
    }

    fn condition_holds(&self, coverage: &str, attributes: &DerivedAttributes) -> bool {
        matcher::condition_holds(coverage, attributes)
    }

    fn describe_outcome(&self, attributes: &DerivedAttributes) -> String {
        attributes.to_string()
    }
}
