use std::env;
use std::io::Write;

use crate::builtins::registry::{report, CommandInfo, Streams};
use crate::engine::{expand_home, ExecutionResult, ShellState};
use crate::error::{ShellError, ShellResult};

pub const COMMAND_INFO_CD: CommandInfo = CommandInfo {
    name: "cd",
    usage: "cd directory",
    honors_redirects: false,
    run: cd_runner,
};

pub const COMMAND_INFO_PWD: CommandInfo = CommandInfo {
    name: "pwd",
    usage: "pwd",
    honors_redirects: true,
    run: pwd_runner,
};

pub fn pwd_runner(_args: &[String], state: &mut ShellState, streams: &mut Streams<'_>) -> (ExecutionResult, i32) {
    match writeln!(streams.out, "{}", state.cwd.display()) {
        Ok(()) => (ExecutionResult::KeepRunning, 0),
        Err(e) => report(streams, e.into()),
    }
}

pub fn cd_runner(args: &[String], state: &mut ShellState, streams: &mut Streams<'_>) -> (ExecutionResult, i32) {
    match run(args, state) {
        Ok(()) => (ExecutionResult::KeepRunning, 0),
        Err(e) => report(streams, e),
    }
}

/// Change the OS working directory and the tracked copy in `state`.
pub fn run(args: &[String], state: &mut ShellState) -> ShellResult<()> {
    let [arg] = args else {
        return Err(ShellError::Usage(COMMAND_INFO_CD.usage));
    };

    let home = state.env.home.as_deref().filter(|h| !h.is_empty());
    let target = expand_home(arg, home).ok_or(ShellError::HomeNotSet)?;

    if env::set_current_dir(&target).is_err() {
        return Err(ShellError::NoSuchDirectory(arg.clone()));
    }

    state.cwd = env::current_dir().map_err(ShellError::CurrentDir)?;
    tracing::debug!(cwd = %state.cwd.display(), "changed directory");
    Ok(())
}
