use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment values the shell consults, captured once at startup.
///
/// Nothing in the shell sets environment variables, so this snapshot stays
/// equal to the live environment for the whole session.
#[derive(Debug, Clone, Default)]
pub struct ShellEnv {
    /// `PATH`: colon-separated directories searched in order.
    pub path: Option<OsString>,
    /// `HOME`: target of `cd ~`.
    pub home: Option<OsString>,
}

impl ShellEnv {
    pub fn from_process() -> Self {
        ShellEnv {
            path: env::var_os("PATH"),
            home: env::var_os("HOME"),
        }
    }
}

/// What the REPL should do after a line finishes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExecutionResult {
    KeepRunning,
    /// `exit` was run; terminate the process with this code.
    Exit(i32),
}

/// Process-wide state that outlives a single line.
///
/// `cwd` mirrors the OS working directory. It is read once at startup and
/// afterwards only `cd` changes it (together with the OS one). The shell is
/// single threaded, so nothing here needs locking.
pub struct ShellState {
    pub env: ShellEnv,
    pub cwd: PathBuf,
}

impl ShellState {
    pub fn new() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        ShellState::with_env(ShellEnv::from_process(), cwd)
    }

    pub fn with_env(env: ShellEnv, cwd: PathBuf) -> Self {
        ShellState { env, cwd }
    }
}
