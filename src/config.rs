// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

use crate::charset::CharacterClass;
use crate::error::{ConfigError, ConfigFileError};

/// Length below which no password is ever generated from a bare length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest password the command line accepts.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// Minimum character count for one class, inert unless `enforced`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassRule {
    pub enforced: bool,
    pub minimum: usize,
}

impl ClassRule {
    pub fn enforce(minimum: usize) -> Self {
        ClassRule {
            enforced: true,
            minimum,
        }
    }

    /// Characters this rule adds to the required total.
    pub fn required(&self) -> usize {
        if self.enforced {
            self.minimum
        } else {
            0
        }
    }
}

impl Default for ClassRule {
    fn default() -> Self {
        ClassRule {
            enforced: false,
            minimum: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordConfig {
    pub digits: ClassRule,
    pub uppercase: ClassRule,
    pub lowercase: ClassRule,
    pub special: ClassRule,
    pub min_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        PasswordConfig {
            digits: ClassRule::default(),
            uppercase: ClassRule::default(),
            lowercase: ClassRule::default(),
            special: ClassRule::default(),
            min_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordConfig {
    pub fn rule(&self, class: CharacterClass) -> &ClassRule {
        match class {
            CharacterClass::Digit => &self.digits,
            CharacterClass::Uppercase => &self.uppercase,
            CharacterClass::Lowercase => &self.lowercase,
            CharacterClass::Special => &self.special,
        }
    }

    pub fn rule_mut(&mut self, class: CharacterClass) -> &mut ClassRule {
        match class {
            CharacterClass::Digit => &mut self.digits,
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Special => &mut self.special,
        }
    }

    /// Sum of all enforced minimums, `None` on overflow.
    pub fn required(&self) -> Option<usize> {
        CharacterClass::ALL
            .iter()
            .try_fold(0usize, |sum, &class| sum.checked_add(self.rule(class).required()))
    }

    /// Checks that the enforced minimums fit into `min_length`.
    ///
    /// A sum of minimums that overflows `usize` never fits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.required() {
            Some(required) if required <= self.min_length => {
                debug!(
                    "Configuration valid: {required} of {} characters constrained",
                    self.min_length
                );
                Ok(())
            }
            required => {
                let required = required.unwrap_or(usize::MAX);
                debug!(
                    "Rejecting configuration: {required} required characters exceed minimum length {}",
                    self.min_length
                );
                Err(ConfigError::InsufficientLength {
                    required,
                    min_length: self.min_length,
                })
            }
        }
    }
}

pub fn validate(config: &PasswordConfig) -> Result<(), ConfigError> {
    config.validate()
}

pub fn read_config(config_path: &Path) -> Result<PasswordConfig, ConfigFileError> {
    debug!("Reading config at: {}", config_path.display());

    let mut config_data: String = String::new();
    File::open(config_path)
        .and_then(|mut config_file| config_file.read_to_string(&mut config_data))
        .map_err(|source| ConfigFileError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;

    serde_yaml::from_str(&config_data).map_err(|source| ConfigFileError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn full_config(min_length: usize) -> PasswordConfig {
        PasswordConfig {
            digits: ClassRule::enforce(3),
            uppercase: ClassRule::enforce(2),
            lowercase: ClassRule::enforce(2),
            special: ClassRule::enforce(2),
            min_length,
        }
    }

    #[test]
    fn default_config() {
        let config = PasswordConfig::default();
        assert_eq!(config.min_length, 8);
        for class in CharacterClass::ALL {
            assert!(!config.rule(class).enforced);
            assert_eq!(config.rule(class).minimum, 1);
        }
        assert_eq!(config.required(), Some(0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unenforced_minimums_are_ignored() {
        let mut config = PasswordConfig::default();
        config.digits.minimum = 100;
        assert_eq!(config.required(), Some(0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_within_length() {
        assert!(validate(&full_config(12)).is_ok());
    }

    #[test]
    fn validate_exact_length() {
        assert!(validate(&full_config(9)).is_ok());
    }

    #[test]
    fn validate_insufficient_length() {
        assert_eq!(
            validate(&full_config(5)),
            Err(ConfigError::InsufficientLength {
                required: 9,
                min_length: 5
            })
        );
    }

    #[test]
    fn validate_overflowing_minimums() {
        let mut config = full_config(usize::MAX);
        config.digits.minimum = usize::MAX;
        assert_eq!(config.required(), None);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InsufficientLength {
                required: usize::MAX,
                min_length: usize::MAX
            })
        );
    }

    #[test]
    fn rule_mut_targets_class() {
        let mut config = PasswordConfig::default();
        *config.rule_mut(CharacterClass::Special) = ClassRule::enforce(4);
        assert_eq!(config.special, ClassRule::enforce(4));
        assert_eq!(config.required(), Some(4));
    }

    #[test]
    fn read_config_full() {
        let config = read_config(&PathBuf::from("tests/resources/config/full.yml")).unwrap();
        assert_eq!(config, full_config(12));
    }

    #[test]
    fn read_config_partial_uses_defaults() {
        let config = read_config(&PathBuf::from("tests/resources/config/partial.yml")).unwrap();
        assert_eq!(config.min_length, 16);
        assert_eq!(config.digits, ClassRule::enforce(4));
        assert_eq!(config.uppercase, ClassRule::default());
        assert_eq!(config.special, ClassRule::default());
    }

    #[test]
    fn read_config_invalid_file() {
        let err = read_config(&PathBuf::from("tests/resources/config/non_existing.yml"))
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to read configuration file 'tests/resources/config/non_existing.yml':"));
    }

    #[test]
    fn read_config_unknown_field() {
        let err = read_config(&PathBuf::from("tests/resources/config/unknown_field.yml"))
            .unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
        assert!(err.to_string().contains("unknown field `max_length`"));
    }
}
