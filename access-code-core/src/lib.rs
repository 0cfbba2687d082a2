//! access-code-core: offline pairing of 6-digit unlock and access codes.
//!
//! An issuer generates an **unlock code** tagged with a privilege [`Zone`];
//! a verifier holding only that unlock code can check a presented **access
//! code** offline, either as the standard re-derivation of the unlock code
//! or as a data-bearing variant embedding a small flag payload.
//!
//! The arithmetic reproduces a legacy scheme bit-for-bit and is not
//! cryptographic: it offers no confidentiality and only incidental
//! resistance to forgery. Everything here is pure and stateless; only
//! generation consumes entropy.

pub mod models;
pub mod services;
pub mod utils;

pub use models::{AccessCodeData, AccessCodeFlag, AccessCodeResult, DecodeStatus, UnlockCode, Zone};
pub use services::{
    decode_access_code, derive_standard_access_code, encode_data_access_code, CodeError,
    UnlockCodeGenerator,
};

/// Generate a fresh unlock code for `zone` using the thread-local rng.
///
/// Issuers needing deterministic output should build an
/// [`UnlockCodeGenerator`] over a seeded rng instead.
pub fn generate_unlock_code(zone: Zone) -> UnlockCode {
    UnlockCodeGenerator::new().generate(zone)
}
