//! Issuer-side construction of data-bearing access codes.

use crate::services::deriver::{checksum_key, derive_standard_access_code};
use crate::services::error::CodeError;
use crate::utils::digit_sum;

/// Largest payload whose first part (`355 + payload`) still fits in three
/// digits.
const MAX_PAYLOAD: u32 = 644;

/// Build the data-bearing access code that embeds `payload` and
/// authenticates against `unlock_code`.
///
/// The payload must be in `1..=644`: zero would put the first part exactly
/// at the 355 boundary, where the decoder classifies the code as standard.
/// The second half is the checksum key shifted by the first half's digit
/// sum on a ring of size 1000, rendered zero-padded so the code always has
/// exactly 6 digits.
pub fn encode_data_access_code(payload: u32, unlock_code: u32) -> Result<u32, CodeError> {
    if payload == 0 || payload > MAX_PAYLOAD {
        return Err(CodeError::InvalidData);
    }

    let standard = derive_standard_access_code(unlock_code)?;
    let first = 355 + payload;
    let second = (checksum_key(standard) + digit_sum(first)) % 1000;

    format!("{first}{second:03}")
        .parse()
        .map_err(|_| CodeError::InvalidData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // Unlock 123456 -> standard 252412 -> checksum key 763.
        // Payload 5: first = 360, digit sum 9, second = 772.
        assert_eq!(encode_data_access_code(5, 123456), Ok(360772));
    }

    #[test]
    fn test_payload_bounds() {
        assert_eq!(encode_data_access_code(0, 123456), Err(CodeError::InvalidData));
        assert_eq!(encode_data_access_code(645, 123456), Err(CodeError::InvalidData));
        assert!(encode_data_access_code(644, 123456).is_ok());
    }

    #[test]
    fn test_code_always_keeps_six_digits() {
        for payload in [1, 9, 100, 356, 643, 644] {
            let code = encode_data_access_code(payload, 123456).unwrap();
            assert_eq!(code.to_string().len(), 6, "payload {payload}");
        }
    }

    #[test]
    fn test_propagates_derivation_failure() {
        assert_eq!(
            encode_data_access_code(5, 12345),
            Err(CodeError::IncorrectLength)
        );
    }
}
