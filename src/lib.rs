//! Random password generation under per-class composition rules.
//!
//! ```
//! use pwsmith::{generate_by_config, generate_by_length, ClassRule, PasswordConfig};
//!
//! assert_eq!(generate_by_length(3).len(), 8);
//!
//! let config = PasswordConfig {
//!     digits: ClassRule::enforce(3),
//!     special: ClassRule::enforce(2),
//!     min_length: 12,
//!     ..PasswordConfig::default()
//! };
//! assert_eq!(generate_by_config(&config).unwrap().len(), 12);
//! ```

pub mod charset;
pub mod config;
pub mod error;
pub mod password;
pub mod random;

pub use charset::CharacterClass;
pub use config::{
    read_config, validate, ClassRule, PasswordConfig, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use error::{ConfigError, ConfigFileError, Error, RandomSourceError};
pub use password::{generate_by_config, generate_by_length, PasswordComposer};
pub use random::SecureCharSource;
