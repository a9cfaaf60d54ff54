use std::io::Write;

use serde::Serialize;
use zeroize::Zeroize;

use crate::cli::OutputArgs;

#[derive(Serialize)]
struct PasswordBatch<'a> {
    passwords: &'a [String],
}

/// Generates `output.count` passwords with `generate` and writes them to `out`.
pub(crate) fn write_passwords<W, E, F>(
    out: &mut W,
    output: &OutputArgs,
    mut generate: F,
) -> Result<(), pwsmith::Error>
where
    W: Write,
    E: Into<pwsmith::Error>,
    F: FnMut() -> Result<String, E>,
{
    let mut passwords = Vec::with_capacity(output.count);
    for _ in 0..output.count {
        match generate() {
            Ok(password) => passwords.push(password),
            Err(err) => {
                passwords.zeroize();
                return Err(err.into());
            }
        }
    }

    let result = render(out, output.json, &passwords);
    passwords.zeroize();
    result
}

fn render<W: Write>(out: &mut W, json: bool, passwords: &[String]) -> Result<(), pwsmith::Error> {
    if json {
        serde_json::to_writer(&mut *out, &PasswordBatch { passwords })?;
        writeln!(out)?;
    } else {
        for password in passwords {
            writeln!(out, "{password}")?;
        }
    }
    Ok(())
}
