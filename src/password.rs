use log::trace;
use rand::rngs::{StdRng, ThreadRng};
use rand::CryptoRng;
use zeroize::Zeroize;

use crate::charset::{CharacterClass, DIGITS, FULL_ALPHABET, LOWERCASE, SPECIAL, UPPERCASE};
use crate::config::{PasswordConfig, MIN_PASSWORD_LENGTH};
use crate::error::{ConfigError, RandomSourceError};
use crate::random::SecureCharSource;

/// Builds passwords from an owned random source.
pub struct PasswordComposer<R> {
    source: SecureCharSource<R>,
}

impl<R: CryptoRng> PasswordComposer<R> {
    pub fn new(source: SecureCharSource<R>) -> Self {
        PasswordComposer { source }
    }

    /// Password of `max(length, 8)` characters with at least one character of every class.
    ///
    /// # Panics
    ///
    /// Panics if the buffer for `length` characters cannot be allocated.
    pub fn generate_by_length(&mut self, length: usize) -> String {
        trace!("Generating random password by length");

        let length = length.max(MIN_PASSWORD_LENGTH);
        let mut buf = Vec::with_capacity(length);
        for charset in [LOWERCASE, UPPERCASE, DIGITS, SPECIAL] {
            buf.push(self.source.draw(charset));
        }

        self.pad_and_finish(buf, length)
    }

    /// Password satisfying every enforced minimum of `config`, padded to `config.min_length`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer for `config.min_length` characters cannot be allocated.
    pub fn generate_by_config(&mut self, config: &PasswordConfig) -> Result<String, ConfigError> {
        trace!("Generating random password by configuration");

        config.validate()?;

        let buf = self.required_chars(config);
        Ok(self.pad_and_finish(buf, config.min_length))
    }

    /// Enforced characters in class order, before padding and shuffling.
    fn required_chars(&mut self, config: &PasswordConfig) -> Vec<u8> {
        let mut buf = Vec::with_capacity(config.min_length);
        for class in CharacterClass::ALL {
            let rule = config.rule(class);
            if rule.enforced {
                self.source.draw_into(&mut buf, class.alphabet(), rule.minimum);
            }
        }
        buf
    }

    fn pad_and_finish(&mut self, mut buf: Vec<u8>, length: usize) -> String {
        let padding = length.saturating_sub(buf.len());
        self.source.draw_into(&mut buf, FULL_ALPHABET, padding);
        self.source.shuffle(&mut buf);

        let password: String = buf.iter().map(|&b| char::from(b)).collect();
        buf.zeroize();
        password
    }
}

impl PasswordComposer<ThreadRng> {
    pub fn thread() -> Self {
        PasswordComposer::new(SecureCharSource::thread())
    }
}

impl PasswordComposer<StdRng> {
    pub fn from_os_rng() -> Result<Self, RandomSourceError> {
        SecureCharSource::from_os_rng().map(PasswordComposer::new)
    }
}

/// Generate a password of at least `length` characters with the thread-local CSPRNG.
pub fn generate_by_length(length: usize) -> String {
    PasswordComposer::thread().generate_by_length(length)
}

/// Generate a password satisfying `config` with the thread-local CSPRNG.
pub fn generate_by_config(config: &PasswordConfig) -> Result<String, ConfigError> {
    PasswordComposer::thread().generate_by_config(config)
}
