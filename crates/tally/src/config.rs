//! Command-line options shared by `repl` and `run`.
//!
//! Options are parsed by hand: every option is a single argument, either a
//! flag (`--quiet`) or `--name=value`. Anything not starting with `-` is a
//! positional argument and is returned to the caller.

use tally_diagnostic::emitter::ColorMode;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value for --initial: `{0}` is not a finite number")]
    InvalidInitial(String),

    #[error("invalid value for --color: `{0}` (expected auto, always or never)")]
    InvalidColor(String),

    #[error("`{0}` is only valid for `tally run`")]
    RunOnly(&'static str),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Settings for one calculator session.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplConfig {
    /// Accumulator value before the first line.
    pub initial: f64,
    /// Suppress diagnostics on stderr.
    pub quiet: bool,
    pub color: ColorMode,
    /// Print only the final accumulator (`run` only).
    pub final_only: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            initial: 0.0,
            quiet: false,
            color: ColorMode::Auto,
            final_only: false,
        }
    }
}

impl ReplConfig {
    /// Parse options, returning the config and the positional arguments in
    /// order.
    pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = ReplConfig::default();
        let mut positional = Vec::new();

        for arg in args.iter().map(AsRef::as_ref) {
            if let Some(value) = arg.strip_prefix("--initial=") {
                config.initial = parse_initial(value)?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                config.color = ColorMode::parse(value)
                    .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;
            } else if arg == "--quiet" || arg == "-q" {
                config.quiet = true;
            } else if arg == "--final" {
                config.final_only = true;
            } else if arg.starts_with('-') && arg != "-" {
                return Err(ConfigError::UnknownOption(arg.to_string()));
            } else {
                positional.push(arg.to_string());
            }
        }

        Ok((config, positional))
    }
}

fn parse_initial(value: &str) -> Result<f64, ConfigError> {
    match value.parse::<f64>() {
        Ok(initial) if initial.is_finite() => Ok(initial),
        _ => Err(ConfigError::InvalidInitial(value.to_string())),
    }
}

#[cfg(test)]
mod tests;
