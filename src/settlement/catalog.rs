//! Bet-type catalog
//!
//! Normalizes user-facing bet type strings to their canonical coverage form.
//! A lookup miss falls back to the raw bet type so settlement never blocks
//! on missing catalog metadata.

use super::types::BetDefinition;
use crate::errors::SettlementError;
use std::path::Path;

/// In-memory catalog of bet definitions
#[derive(Debug, Clone, Default)]
pub struct BetCatalog {
    definitions: Vec<BetDefinition>,
}

impl BetCatalog {
    pub fn new(definitions: Vec<BetDefinition>) -> Self {
        Self { definitions }
    }

    /// Empty catalog: every lookup falls back to the raw bet type
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load definitions from a JSON export of the game-catalog service
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettlementError> {
        let path_display = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| SettlementError::CatalogLoad {
            path: path_display.clone(),
            reason: e.to_string(),
        })?;
        let definitions: Vec<BetDefinition> =
            serde_json::from_str(&content).map_err(|e| SettlementError::CatalogLoad {
                path: path_display,
                reason: e.to_string(),
            })?;
        Ok(Self::new(definitions))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Resolve a bet's raw type to its effective coverage string.
    ///
    /// Matches the raw type against each definition's canonical coverage or
    /// display label, case-insensitively; a miss returns the raw type
    /// verbatim.
    pub fn resolve<'a>(&'a self, raw_bet_type: &'a str) -> &'a str {
        let wanted = raw_bet_type.trim();
        self.definitions
            .iter()
            .find(|def| {
                def.coverage.trim().eq_ignore_ascii_case(wanted)
                    || def.label.trim().eq_ignore_ascii_case(wanted)
            })
            .map(|def| def.coverage.as_str())
            .unwrap_or(raw_bet_type)
    }

    /// Catalog odds for a bet type, when the catalog carries them
    pub fn odds_for(&self, raw_bet_type: &str) -> Option<f64> {
        let wanted = raw_bet_type.trim();
        self.definitions
            .iter()
            .find(|def| {
                def.coverage.trim().eq_ignore_ascii_case(wanted)
                    || def.label.trim().eq_ignore_ascii_case(wanted)
            })
            .and_then(|def| def.odds)
    }
}
