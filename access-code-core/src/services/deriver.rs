//! Standard access code derivation.
//!
//! Possession of the unlock code is the sole trust anchor: the standard
//! access code is a pure function of it, and the verifier recomputes it on
//! every check. The arithmetic reproduces the legacy scheme exactly; any
//! change breaks codes that are already in the field.

use crate::services::error::CodeError;
use crate::utils::{consecutive_pairs, digits, join_digits};

/// Derive the standard access code for `unlock_code`.
///
/// The unlock code must render as at least 6 decimal digits; only the first
/// 6 are used. The result always concatenates two 3-digit halves:
/// `part_a = (p1 * p2) % 256 + 100` (range 100..=355) followed by
/// `part_b = (p1 * p3) % 256 + part_a` (range 100..=610).
pub fn derive_standard_access_code(unlock_code: u32) -> Result<u32, CodeError> {
    let code = unlock_code.to_string();
    if code.len() < 6 {
        return Err(CodeError::IncorrectLength);
    }

    let p1: u32 = code[0..2].parse().map_err(|_| CodeError::InvalidData)?;
    let p2: u32 = code[2..4].parse().map_err(|_| CodeError::InvalidData)?;
    let p3: u32 = code[4..6].parse().map_err(|_| CodeError::InvalidData)?;

    let part_a = (p1 * p2) % 256 + 100;
    let part_b = (p1 * p3) % 256 + part_a;

    // Both halves are always exactly 3 digits, so plain concatenation keeps
    // the code at 6 digits.
    format!("{part_a}{part_b}")
        .parse()
        .map_err(|_| CodeError::InvalidData)
}

/// Checksum key over a standard access code: its six digits are folded into
/// three non-overlapping pairs, each pair reduced to `(a + b) % 10`, and a
/// per-pair result of `0` is substituted with `1` (the scheme reserves zero
/// as an invalid pair-checksum digit). The three digits concatenate into one
/// 3-digit key.
pub(crate) fn checksum_key(standard_access_code: u32) -> u32 {
    let pair_sums: Vec<u32> = consecutive_pairs(&digits(standard_access_code))
        .into_iter()
        .map(|(a, b)| {
            let sum = (a + b) % 10;
            if sum == 0 {
                1
            } else {
                sum
            }
        })
        .collect();

    join_digits(&pair_sums).unwrap_or(0)
}
