use crate::builtins::registry::{report, CommandInfo, Streams};
use crate::engine::{ExecutionResult, ShellState};
use crate::error::{ShellError, ShellResult};

pub const COMMAND_INFO_EXIT: CommandInfo = CommandInfo {
    name: "exit",
    usage: "exit [code]",
    honors_redirects: true,
    run: exit_runner,
};

pub fn exit_runner(args: &[String], _state: &mut ShellState, streams: &mut Streams<'_>) -> (ExecutionResult, i32) {
    match exit_code(args) {
        Ok(code) => (ExecutionResult::Exit(code), code),
        Err(e) => report(streams, e),
    }
}

/// Exit status requested by `exit [code]`. Defaults to 0.
pub fn exit_code(args: &[String]) -> ShellResult<i32> {
    match args.first() {
        None => Ok(0),
        Some(arg) => arg
            .parse::<i32>()
            .map_err(|_| ShellError::InvalidExitCode(arg.clone())),
    }
}
