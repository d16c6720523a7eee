use std::io::Write;

use crate::builtins::registry::{report, CommandInfo, Streams};
use crate::engine::{ExecutionResult, ShellState};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "echo",
    usage: "echo [arg ...]",
    honors_redirects: true,
    run,
};

pub fn run(args: &[String], _state: &mut ShellState, streams: &mut Streams<'_>) -> (ExecutionResult, i32) {
    match writeln!(streams.out, "{}", args.join(" ")) {
        Ok(()) => (ExecutionResult::KeepRunning, 0),
        Err(e) => report(streams, e.into()),
    }
}
