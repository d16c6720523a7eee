use std::io::Write;

use crate::builtins::registry::{report, CommandInfo, Streams};
use crate::engine::{resolve, CommandClass, ExecutionResult, ShellState};
use crate::error::{ShellError, ShellResult};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "type",
    usage: "type command_name",
    honors_redirects: true,
    run: type_runner,
};

pub fn type_runner(args: &[String], state: &mut ShellState, streams: &mut Streams<'_>) -> (ExecutionResult, i32) {
    match run(args, state, &mut *streams.out) {
        Ok(()) => (ExecutionResult::KeepRunning, 0),
        Err(e) => report(streams, e),
    }
}

/// Describe how each name would be run. Names that resolve nowhere are
/// reported on the output sink, not as errors.
pub fn run(args: &[String], state: &ShellState, out: &mut dyn Write) -> ShellResult<()> {
    if args.is_empty() {
        return Err(ShellError::Usage(COMMAND_INFO.usage));
    }

    for name in args {
        match resolve(name, state.env.path.as_deref()) {
            CommandClass::Builtin(_) => writeln!(out, "{} is a shell builtin", name)?,
            CommandClass::External(path) => writeln!(out, "{} is {}", name, path.display())?,
            CommandClass::NotFound => writeln!(out, "{}: not found", name)?,
        }
    }
    Ok(())
}
