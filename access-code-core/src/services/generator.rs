//! Unlock code generation for issuers.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::models::{UnlockCode, Zone};

/// Issues unlock codes tagged with a privilege zone.
///
/// Generic over its random source so tests can inject a seeded rng; the
/// default constructor uses the thread-local generator. Uniformity over the
/// stated ranges is all the scheme asks for - the randomness is explicitly
/// not cryptographic.
pub struct UnlockCodeGenerator<R: Rng> {
    rng: R,
}

impl UnlockCodeGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for UnlockCodeGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UnlockCodeGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a fresh 6-digit unlock code for `zone`.
    ///
    /// Each of the three parts is exactly two digits: the first and third
    /// are `(1..=8)*10 + zone`, the middle is drawn from `10..=98`, so the
    /// concatenation can never lose a leading zero.
    pub fn generate(&mut self, zone: Zone) -> UnlockCode {
        let part1 = self.rng.gen_range(1..=8) * 10 + zone.value();
        let part2 = self.rng.gen_range(10..=98u32);
        let part3 = self.rng.gen_range(1..=8) * 10 + zone.value();

        let code: u32 = format!("{part1}{part2}{part3}")
            .parse()
            .unwrap_or_default();
        tracing::debug!(zone = zone.as_str(), "generated unlock code");

        UnlockCode::from(code)
    }
}
