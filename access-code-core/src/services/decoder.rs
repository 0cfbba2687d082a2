//! Access code decoding and validation.
//!
//! A presented code is either the standard access code for the claimed
//! unlock code, or a data-bearing variant whose first three digits exceed
//! 355 and carry `355 + payload` while the last three carry a checksum key
//! over the standard code. Every failure is a reported status, never a
//! panic or an escaping error.

use crate::models::{AccessCodeResult, DecodeStatus};
use crate::services::deriver::{checksum_key, derive_standard_access_code};
use crate::utils::digit_sum;

/// First-part values up to and including this are standard access codes;
/// anything above carries data. Part of the wire format.
const MAX_STANDARD_FIRST_PART: u32 = 355;

/// Decode `access_code` against the unlock code it claims to be paired
/// with. Stateless; every call is independent.
pub fn decode_access_code(access_code: u32, unlock_code: u32) -> AccessCodeResult {
    let code = access_code.to_string();
    if code.len() < 6 {
        tracing::debug!(access_code, "presented code shorter than 6 digits");
        return AccessCodeResult::new(DecodeStatus::IncorrectLength);
    }

    match code[0..3].parse::<u32>() {
        Ok(first) if first > MAX_STANDARD_FIRST_PART => {
            decode_with_data(&code, first, unlock_code)
        }
        Ok(_) => decode_standard(access_code, unlock_code),
        Err(_) => AccessCodeResult::new(DecodeStatus::AccessDataNotInteger),
    }
}

fn decode_standard(access_code: u32, unlock_code: u32) -> AccessCodeResult {
    let derived = match derive_standard_access_code(unlock_code) {
        Ok(derived) => derived,
        Err(err) => {
            tracing::warn!(unlock_code, %err, "could not derive standard access code");
            return AccessCodeResult::new(DecodeStatus::CouldNotCreatePrivateKeyFromUnlockCode);
        }
    };

    if access_code == derived {
        AccessCodeResult::new(DecodeStatus::Ok)
    } else {
        AccessCodeResult::new(DecodeStatus::KeyMismatch)
    }
}

fn decode_with_data(code: &str, first: u32, unlock_code: u32) -> AccessCodeResult {
    let second: u32 = match code[3..6].parse() {
        Ok(second) => second,
        Err(_) => return AccessCodeResult::new(DecodeStatus::AccessDataNotInteger),
    };

    let standard = match derive_standard_access_code(unlock_code) {
        Ok(standard) => standard,
        Err(err) => {
            tracing::warn!(unlock_code, %err, "could not derive standard access code");
            return AccessCodeResult::new(DecodeStatus::CouldNotCreatePrivateKeyFromUnlockCode);
        }
    };

    let key = presented_key(second, digit_sum(first));
    let expected = checksum_key(standard);
    if key != expected {
        tracing::debug!(key, expected, "checksum key mismatch on data-bearing code");
        return AccessCodeResult::new(DecodeStatus::KeyMismatch);
    }

    AccessCodeResult::with_data(DecodeStatus::Ok, first - MAX_STANDARD_FIRST_PART)
}

/// Recover the presented checksum key from the second half of a
/// data-bearing code. The key space is a ring of size 1000: a negative
/// difference wraps to `1000 - |diff|` by design.
fn presented_key(second_part: u32, first_part_sum: u32) -> u32 {
    let diff = second_part as i32 - first_part_sum as i32;
    if diff < 0 {
        1000 - diff.unsigned_abs()
    } else {
        diff as u32
    }
}
