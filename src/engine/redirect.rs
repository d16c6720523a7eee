use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;

use crate::error::{ShellError, ShellResult};
use crate::parser::{Redirect, WriteMode};

/// Where one output stream of a command goes.
#[derive(Debug)]
pub enum Sink {
    /// The shell's own stream.
    Inherit,
    File(File),
}

impl Sink {
    /// Writer for an in-process builtin. `inherited` is used for [`Sink::Inherit`].
    pub fn writer<'s>(&'s mut self, inherited: &'s mut dyn Write) -> &'s mut dyn Write {
        match self {
            Sink::Inherit => inherited,
            Sink::File(f) => f,
        }
    }

    /// Child-process handle for this stream.
    pub fn into_stdio(self) -> Stdio {
        match self {
            Sink::Inherit => Stdio::inherit(),
            Sink::File(f) => Stdio::from(f),
        }
    }
}

/// Open a redirection target, creating it if needed.
pub fn open_redirect(redirect: &Redirect) -> ShellResult<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    match redirect.mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };
    let file = options.open(&redirect.path).map_err(|source| ShellError::RedirectOpen {
        path: PathBuf::from(&redirect.path),
        source,
    })?;
    tracing::debug!(path = %redirect.path, mode = ?redirect.mode, "opened redirect target");
    Ok(file)
}

/// Open the sink for one stream: the target file, or the inherited stream.
pub fn open_sink(redirect: Option<&Redirect>) -> ShellResult<Sink> {
    match redirect {
        Some(r) => open_redirect(r).map(Sink::File),
        None => Ok(Sink::Inherit),
    }
}
