pub mod access_code;
pub mod unlock_code;
pub mod zone;

pub use access_code::{AccessCodeData, AccessCodeFlag, AccessCodeResult, DecodeStatus};
pub use unlock_code::UnlockCode;
pub use zone::Zone;
