//! Upstream result descriptor parsing
//!
//! The odds provider feed is not contractually clean: descriptors arrive as
//! bare numbers ("17", "02"), labelled text ("Winner 17", "17 : Red"), or
//! `#`-delimited segments where only a later segment carries the number
//! ("Winner#17"). Parsing either produces a validated winning number or an
//! explicit unparseable error; it never guesses and never defaults to zero.

use super::attributes::{WinningNumber, WHEEL_MAX};
use crate::errors::SettlementError;

const SEGMENT_SEPARATOR: char = '#';

/// Extract the winning number from a free-text descriptor.
///
/// The first non-empty segment is authoritative; later segments are only
/// consulted when earlier ones yield nothing. Within a segment the first
/// in-domain 1-2 digit token wins. As a last resort the first segment is
/// parsed whole as an integer, which covers bare numbers with leading
/// zeros.
pub fn parse_result(descriptor: &str) -> Result<WinningNumber, SettlementError> {
    let segments: Vec<&str> = descriptor
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    for segment in &segments {
        if let Some(number) = scan_segment(segment) {
            return Ok(number);
        }
    }

    if let Some(first) = segments.first() {
        if let Ok(value) = first.parse::<u8>() {
            if let Ok(number) = WinningNumber::new(value) {
                return Ok(number);
            }
        }
    }

    Err(SettlementError::UnparseableResult {
        descriptor: descriptor.to_string(),
    })
}

/// Find the first in-domain 1-2 digit token in a segment. Longer digit runs
/// are not wheel numbers and are skipped, as are runs above the domain.
fn scan_segment(segment: &str) -> Option<WinningNumber> {
    let mut run = String::new();

    for ch in segment.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            run.push(ch);
            continue;
        }
        if !run.is_empty() {
            if run.len() <= 2 {
                if let Ok(value) = run.parse::<u8>() {
                    if value <= WHEEL_MAX {
                        return WinningNumber::new(value).ok();
                    }
                }
            }
            run.clear();
        }
    }

    None
}
