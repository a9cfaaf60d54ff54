use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;
use pwsmith::{read_config, PasswordComposer, PasswordConfig, MAX_PASSWORD_LENGTH};

use crate::cli::{CliArgs, Command, ConfigArgs, LengthArgs};
use crate::output::write_passwords;

mod cli;
mod output;

fn main() -> ExitCode {
    let args: CliArgs = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("🛑 {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), pwsmith::Error> {
    let mut composer = PasswordComposer::from_os_rng()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Length(LengthArgs { length, output }) => {
            debug!("Generating {} password(s) of length {length}", output.count);
            write_passwords(&mut out, &output, || {
                Ok::<_, pwsmith::Error>(composer.generate_by_length(length))
            })
        }
        Command::Config(config_args) => {
            let config = resolve_config(&config_args)?;
            config.validate()?;
            debug!("Generating {} password(s) from {config:?}", config_args.output.count);
            write_passwords(&mut out, &config_args.output, || {
                composer.generate_by_config(&config)
            })
        }
    }
}

fn resolve_config(config_args: &ConfigArgs) -> Result<PasswordConfig, pwsmith::Error> {
    let base = match &config_args.config_path {
        Some(config_path) => read_config(config_path)?,
        None => PasswordConfig::default(),
    };
    let config = config_args.apply(base);

    if config.min_length > MAX_PASSWORD_LENGTH {
        return Err(pwsmith::Error::LengthLimit {
            length: config.min_length,
            max: MAX_PASSWORD_LENGTH,
        });
    }
    Ok(config)
}
