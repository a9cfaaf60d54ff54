use clap::{Args, Parser, Subcommand};
use pwsmith::{CharacterClass, ClassRule, PasswordConfig, MAX_PASSWORD_LENGTH};

/// pwsmith - Random passwords with per-class composition rules.
///
/// Generates passwords from lowercase, uppercase, digit and special characters, shuffled with a cryptographically secure random source.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))] // Require at least one subcommand
#[command(propagate_version = true)] // Display version in subcommand help
pub(crate) struct CliArgs {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[clap(short, long, global = true)]
    pub(crate) verbose: bool,

    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Generate passwords of a given length.
    ///
    /// Every password contains at least one character of each class and is never shorter than 8 characters.
    Length(LengthArgs),

    /// Generate passwords satisfying minimum counts per character class.
    ///
    /// Minimums are read from an optional YAML file and overridden by the flags given.
    Config(ConfigArgs),
}

/// Output arguments shared by all subcommands.
#[derive(Args, Debug)]
pub(crate) struct OutputArgs {
    /// Number of passwords to generate
    #[clap(short = 'n', long, default_value = "1")]
    pub(crate) count: usize,

    /// Print passwords as a JSON document
    #[clap(long)]
    pub(crate) json: bool,
}

/// Arguments specific to the `length` subcommand.
#[derive(Args, Debug)]
pub(crate) struct LengthArgs {
    /// Password length, raised to 8 if smaller
    #[clap(short, long, default_value = "12", value_parser = parse_length)]
    pub(crate) length: usize,

    #[clap(flatten)] // Inherit arguments from OutputArgs
    pub(crate) output: OutputArgs,
}

/// Arguments specific to the `config` subcommand.
#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// Path to a YAML password configuration
    #[clap(short, long)]
    pub(crate) config_path: Option<std::path::PathBuf>,

    /// Enforce at least this many digits
    #[clap(long)]
    pub(crate) min_digits: Option<usize>,

    /// Enforce at least this many uppercase letters
    #[clap(long)]
    pub(crate) min_uppercase: Option<usize>,

    /// Enforce at least this many lowercase letters
    #[clap(long)]
    pub(crate) min_lowercase: Option<usize>,

    /// Enforce at least this many special characters
    #[clap(long)]
    pub(crate) min_special: Option<usize>,

    /// Minimum total password length
    #[clap(short, long, value_parser = parse_length)]
    pub(crate) min_length: Option<usize>,

    #[clap(flatten)] // Inherit arguments from OutputArgs
    pub(crate) output: OutputArgs,
}

fn parse_length(value: &str) -> Result<usize, String> {
    let length: usize = value.parse().map_err(|e| format!("{e}"))?;
    if length > MAX_PASSWORD_LENGTH {
        return Err(format!("must be at most {MAX_PASSWORD_LENGTH}"));
    }
    Ok(length)
}

impl ConfigArgs {
    /// Applies the flags given on top of `config`.
    pub(crate) fn apply(&self, mut config: PasswordConfig) -> PasswordConfig {
        let minimums = [
            (CharacterClass::Digit, self.min_digits),
            (CharacterClass::Uppercase, self.min_uppercase),
            (CharacterClass::Lowercase, self.min_lowercase),
            (CharacterClass::Special, self.min_special),
        ];
        for (class, minimum) in minimums {
            if let Some(minimum) = minimum {
                *config.rule_mut(class) = ClassRule::enforce(minimum);
            }
        }
        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }
        config
    }
}
