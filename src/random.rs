use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, SeedableRng};

use crate::error::RandomSourceError;

/// Uniform character selection backed by a cryptographically secure RNG.
///
/// `Rng::random_range` rejects out-of-zone samples instead of reducing modulo the
/// range, so every position of the charset is equally likely.
pub struct SecureCharSource<R> {
    rng: R,
}

impl<R: CryptoRng> SecureCharSource<R> {
    pub fn new(rng: R) -> Self {
        SecureCharSource { rng }
    }

    /// Pick one character from `charset`.
    ///
    /// # Panics
    ///
    /// Panics if `charset` is empty.
    pub fn draw(&mut self, charset: &[u8]) -> u8 {
        debug_assert!(!charset.is_empty(), "cannot draw from an empty charset");
        charset[self.rng.random_range(0..charset.len())]
    }

    pub(crate) fn draw_into(&mut self, buf: &mut Vec<u8>, charset: &[u8], count: usize) {
        buf.extend((0..count).map(|_| self.draw(charset)));
    }

    /// Permute `buf` in place, every ordering equally likely.
    pub fn shuffle(&mut self, buf: &mut [u8]) {
        buf.shuffle(&mut self.rng);
    }
}

impl SecureCharSource<ThreadRng> {
    /// Thread-local CSPRNG, reseeded from the OS periodically.
    pub fn thread() -> Self {
        SecureCharSource::new(rand::rng())
    }
}

impl SecureCharSource<StdRng> {
    /// CSPRNG seeded directly from the operating system.
    pub fn from_os_rng() -> Result<Self, RandomSourceError> {
        StdRng::try_from_os_rng()
            .map(SecureCharSource::new)
            .map_err(|err| RandomSourceError::Unavailable(err.to_string()))
    }
}
