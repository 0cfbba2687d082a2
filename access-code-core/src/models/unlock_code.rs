//! Unlock code value type - the operator-held root of trust.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 6-digit unlock code issued to an operator.
///
/// Structurally `P1 P2 P3` where each part is exactly two digits: `P1` and
/// `P3` encode `(random 1-8)*10 + zone` and `P2` is a random value in
/// `10..=98`. The newtype exists to mark values produced by the generator;
/// codes received out-of-band arrive as plain integers and are wrapped via
/// `From<u32>` without validation, since the deriver re-checks shape anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockCode(u32);

impl UnlockCode {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for UnlockCode {
    fn from(value: u32) -> Self {
        UnlockCode(value)
    }
}

impl fmt::Display for UnlockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
