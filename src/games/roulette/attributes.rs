//! Winning-number classification for the European wheel
//!
//! Every attribute is totally determined by the winning number: same number,
//! same attributes, no hidden state. Zero carries sentinel values in every
//! grouping so downstream matching rejects parity/range/dozen/column bets
//! against a zero spin without special-casing zero anywhere else.

use crate::errors::SettlementError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest number on the wheel
pub const WHEEL_MAX: u8 = 36;

/// Red pocket membership. The red/black assignment is a fixed table
/// convention, not a formula.
const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Validated winning number, the single source of truth for a round.
///
/// Domain checking happens here, at construction, so out-of-range values
/// can never reach attribute derivation or matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct WinningNumber(u8);

impl WinningNumber {
    pub fn new(value: u8) -> Result<Self, SettlementError> {
        if value > WHEEL_MAX {
            return Err(SettlementError::OutOfDomain {
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for WinningNumber {
    type Error = SettlementError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WinningNumber> for u8 {
    fn from(number: WinningNumber) -> Self {
        number.0
    }
}

impl fmt::Display for WinningNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pocket color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
        }
    }
}

/// Odd/even grouping; zero belongs to neither
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
    Zero,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd => write!(f, "odd"),
            Parity::Even => write!(f, "even"),
            Parity::Zero => write!(f, "zero"),
        }
    }
}

/// Low/high half of the layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HalfRange {
    Low,
    High,
    Zero,
}

impl fmt::Display for HalfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalfRange::Low => write!(f, "1 to 18"),
            HalfRange::High => write!(f, "19 to 36"),
            HalfRange::Zero => write!(f, "zero"),
        }
    }
}

/// Three equal partitions of 1-36
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dozen {
    First,
    Second,
    Third,
    Zero,
}

impl fmt::Display for Dozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dozen::First => write!(f, "1st 12"),
            Dozen::Second => write!(f, "2nd 12"),
            Dozen::Third => write!(f, "3rd 12"),
            Dozen::Zero => write!(f, "zero"),
        }
    }
}

/// Three interleaved columns following the physical table layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    First,
    Second,
    Third,
    Zero,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::First => write!(f, "1st column"),
            Column::Second => write!(f, "2nd column"),
            Column::Third => write!(f, "3rd column"),
            Column::Zero => write!(f, "zero"),
        }
    }
}

/// Full set of classifications for a spin, derived once per round and
/// read-only afterwards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedAttributes {
    pub number: WinningNumber,
    pub color: Color,
    pub parity: Parity,
    pub range: HalfRange,
    pub dozen: Dozen,
    pub column: Column,
}

impl DerivedAttributes {
    /// Classify a winning number. Total over the domain: the number was
    /// validated at construction, so this never fails.
    pub fn derive(number: WinningNumber) -> Self {
        let n = number.value();

        if n == 0 {
            return Self {
                number,
                color: Color::Green,
                parity: Parity::Zero,
                range: HalfRange::Zero,
                dozen: Dozen::Zero,
                column: Column::Zero,
            };
        }

        let color = if RED_NUMBERS.contains(&n) {
            Color::Red
        } else {
            Color::Black
        };

        let parity = if n % 2 == 0 { Parity::Even } else { Parity::Odd };

        let range = if n <= 18 { HalfRange::Low } else { HalfRange::High };

        let dozen = match (n - 1) / 12 {
            0 => Dozen::First,
            1 => Dozen::Second,
            _ => Dozen::Third,
        };

        // Remainder 1 -> column 1, 2 -> column 2, 0 -> column 3
        let column = match n % 3 {
            1 => Column::First,
            2 => Column::Second,
            _ => Column::Third,
        };

        Self {
            number,
            color,
            parity,
            range,
            dozen,
            column,
        }
    }
}

impl fmt::Display for DerivedAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.color)
    }
}
