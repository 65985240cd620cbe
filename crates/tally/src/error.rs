use std::io;
use std::path::PathBuf;

use tally_diagnostic::{ErrorCode, UnknownErrorCode};
use thiserror::Error;

use crate::ConfigError;

/// Failures of the command-line surface. Evaluation itself never fails.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("missing file path")]
    MissingFile,

    #[error("missing error code")]
    MissingCode,

    #[error(transparent)]
    UnknownCode(#[from] UnknownErrorCode),

    #[error("no documentation available for {0}")]
    Undocumented(ErrorCode),

    #[error("cannot read `{}`: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
