//! Privilege zone tags embedded in unlock codes.

use serde::{Deserialize, Serialize};

/// Privilege category carried in the low digit of an unlock code's first and
/// third parts. The discriminants are part of the wire format of issued
/// codes and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum Zone {
    OperatorLogin = 1,
    PasswordReset = 2,
    LoginBypass = 3,
    Diagnostics = 4,
    QueueLimitOverride = 5,
    ProductUnlock = 6,
    ProductCustom = 7,
    UpdateBypass = 8,
    GpsBypass = 9,
}

impl Zone {
    /// Every zone, in discriminant order.
    pub const ALL: [Zone; 9] = [
        Zone::OperatorLogin,
        Zone::PasswordReset,
        Zone::LoginBypass,
        Zone::Diagnostics,
        Zone::QueueLimitOverride,
        Zone::ProductUnlock,
        Zone::ProductCustom,
        Zone::UpdateBypass,
        Zone::GpsBypass,
    ];

    /// Numeric discriminant as embedded in unlock codes.
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::OperatorLogin => "operator_login",
            Zone::PasswordReset => "password_reset",
            Zone::LoginBypass => "login_bypass",
            Zone::Diagnostics => "diagnostics",
            Zone::QueueLimitOverride => "queue_limit_override",
            Zone::ProductUnlock => "product_unlock",
            Zone::ProductCustom => "product_custom",
            Zone::UpdateBypass => "update_bypass",
            Zone::GpsBypass => "gps_bypass",
        }
    }
}

impl TryFrom<u32> for Zone {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Zone::ALL
            .into_iter()
            .find(|z| z.value() == value)
            .ok_or(value)
    }
}
