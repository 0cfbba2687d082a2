//! Decode outcome types for presented access codes.

use serde::{Deserialize, Serialize};

/// Named payload bits carried by a data-bearing access code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum AccessCodeFlag {
    /// The granted privilege should lapse after one day.
    ExpireAfterDay = 1,
}

impl AccessCodeFlag {
    pub fn mask(self) -> u32 {
        self as u32
    }
}

/// Payload recovered from a data-bearing access code, interpreted as a set
/// of boolean flags. Further bits can be added without changing the wire
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessCodeData {
    payload: u32,
}

impl AccessCodeData {
    pub fn new(payload: u32) -> Self {
        Self { payload }
    }

    pub fn payload(self) -> u32 {
        self.payload
    }

    pub fn has_flag(self, flag: AccessCodeFlag) -> bool {
        self.payload & flag.mask() != 0
    }

    pub fn expire_after_day(self) -> bool {
        self.has_flag(AccessCodeFlag::ExpireAfterDay)
    }
}

/// Outcome of a decode attempt. Every branch of the decoder reports one of
/// these; nothing panics or escapes as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStatus {
    Ok,
    IncorrectLength,
    KeyMismatch,
    InvalidData,
    CouldNotCreatePrivateKeyFromUnlockCode,
    AccessDataNotInteger,
}

/// Decode result: a status plus the recovered payload, present only when
/// the status is `Ok` and the presented code was data-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessCodeResult {
    pub status: DecodeStatus,
    pub data: Option<AccessCodeData>,
}

impl AccessCodeResult {
    pub fn new(status: DecodeStatus) -> Self {
        Self { status, data: None }
    }

    pub fn with_data(status: DecodeStatus, payload: u32) -> Self {
        Self {
            status,
            data: Some(AccessCodeData::new(payload)),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == DecodeStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_after_day_is_bit_zero() {
        assert!(AccessCodeData::new(1).expire_after_day());
        assert!(AccessCodeData::new(3).expire_after_day());
        assert!(!AccessCodeData::new(2).expire_after_day());
        assert!(!AccessCodeData::new(0).expire_after_day());
    }

    #[test]
    fn test_result_carries_payload_only_when_attached() {
        let plain = AccessCodeResult::new(DecodeStatus::Ok);
        assert!(plain.is_ok());
        assert!(plain.data.is_none());

        let with_data = AccessCodeResult::with_data(DecodeStatus::Ok, 5);
        assert_eq!(with_data.data.map(|d| d.payload()), Some(5));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DecodeStatus::KeyMismatch).unwrap(),
            "\"key_mismatch\""
        );
        assert_eq!(
            serde_json::to_string(&DecodeStatus::CouldNotCreatePrivateKeyFromUnlockCode).unwrap(),
            "\"could_not_create_private_key_from_unlock_code\""
        );
    }
}
