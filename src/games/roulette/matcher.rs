//! Generic coverage matching against derived attributes
//!
//! A bet's coverage string is classified once into a [`CoverageKind`] and
//! then evaluated against the round's attributes. The matcher knows the
//! generic pattern shapes, not the bet catalog: a new bet type needs no code
//! here as long as its coverage fits one of the recognized shapes.
//!
//! The matcher only answers whether the named condition occurred. Back/lay
//! inversion is applied uniformly by the settlement engine, which keeps
//! exchange-style symmetry automatic for every coverage shape, including
//! unrecognized ones.

use super::attributes::{Color, Column, DerivedAttributes, Dozen, Parity};
use serde::{Deserialize, Serialize};

/// Coverage shape resolved from a bet's coverage string, in the strict
/// priority order of classification (first matching shape wins)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CoverageKind {
    /// Pure digit string, matched by numeric equality
    ExactNumber(u32),
    /// Comma-separated integer set, matched by membership
    NumberList(Vec<u32>),
    Color(Color),
    Parity(Parity),
    /// Inclusive numeric span ("A to B" or "A-B")
    Range { low: u32, high: u32 },
    Dozen(Dozen),
    Column(Column),
    /// Anything else, matched literally against derived label text
    Literal(String),
}

/// Classify a coverage string. Comparisons downstream are case-insensitive;
/// the string is normalized here so classification happens once per bet.
pub fn classify(coverage: &str) -> CoverageKind {
    let normalized = coverage.trim().to_lowercase();

    if !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(value) = normalized.parse::<u32>() {
            return CoverageKind::ExactNumber(value);
        }
    }

    if normalized.contains(',') {
        let members: Vec<u32> = normalized
            .split(',')
            .filter_map(|token| token.trim().parse::<u32>().ok())
            .collect();
        return CoverageKind::NumberList(members);
    }

    match normalized.as_str() {
        "red" => return CoverageKind::Color(Color::Red),
        "black" => return CoverageKind::Color(Color::Black),
        "green" => return CoverageKind::Color(Color::Green),
        "odd" => return CoverageKind::Parity(Parity::Odd),
        "even" => return CoverageKind::Parity(Parity::Even),
        _ => {}
    }

    if let Some((low, high)) = parse_range(&normalized) {
        return CoverageKind::Range { low, high };
    }

    if let Some(ordinal) = ordinal_cue(&normalized) {
        if normalized.contains("12") || normalized.contains("dozen") {
            return CoverageKind::Dozen(match ordinal {
                1 => Dozen::First,
                2 => Dozen::Second,
                _ => Dozen::Third,
            });
        }
        if normalized.contains("col") {
            return CoverageKind::Column(match ordinal {
                1 => Column::First,
                2 => Column::Second,
                _ => Column::Third,
            });
        }
    }

    CoverageKind::Literal(normalized)
}

/// Decide whether the condition named by a coverage string occurred.
///
/// Empty, malformed, or unrecognized coverage is a non-match, never an
/// error: bad catalog data must not crash settlement.
pub fn condition_holds(coverage: &str, attributes: &DerivedAttributes) -> bool {
    kind_holds(&classify(coverage), attributes)
}

/// Evaluate an already-classified coverage against the round attributes
pub fn kind_holds(kind: &CoverageKind, attributes: &DerivedAttributes) -> bool {
    let outcome = attributes.number.value() as u32;

    match kind {
        CoverageKind::ExactNumber(value) => *value == outcome,
        CoverageKind::NumberList(members) => members.contains(&outcome),
        CoverageKind::Color(color) => *color == attributes.color,
        // Zero carries the Parity::Zero sentinel, which equals neither
        // Odd nor Even, so parity bets never match a zero spin
        CoverageKind::Parity(parity) => *parity == attributes.parity,
        CoverageKind::Range { low, high } => outcome >= *low && outcome <= *high,
        CoverageKind::Dozen(dozen) => *dozen == attributes.dozen,
        CoverageKind::Column(column) => *column == attributes.column,
        CoverageKind::Literal(text) => {
            !text.is_empty()
                && (text == &attributes.range.to_string()
                    || text == &attributes.dozen.to_string()
                    || text == &attributes.column.to_string())
        }
    }
}

/// Parse "A to B" / "A-B" span patterns
fn parse_range(text: &str) -> Option<(u32, u32)> {
    let (left, right) = text
        .split_once(" to ")
        .or_else(|| text.split_once('-'))?;
    let low = left.trim().parse::<u32>().ok()?;
    let high = right.trim().parse::<u32>().ok()?;
    Some((low, high))
}

/// Ordinal cue shared by dozen and column coverage
fn ordinal_cue(text: &str) -> Option<u8> {
    if text.contains("1st") || text.contains("first") {
        Some(1)
    } else if text.contains("2nd") || text.contains("second") {
        Some(2)
    } else if text.contains("3rd") || text.contains("third") {
        Some(3)
    } else {
        None
    }
}
