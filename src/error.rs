use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while running a single line.
///
/// None of these end the shell; they are rendered as a diagnostic and the
/// loop moves on to the next prompt.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{}: {source}", .path.display())]
    RedirectOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name}: error waiting for process: {source}")]
    Wait {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid exit code: {0}")]
    InvalidExitCode(String),

    #[error("cd: HOME environment variable not set")]
    HomeNotSet,

    #[error("cd: {0}: No such file or directory")]
    NoSuchDirectory(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("Error getting current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;
