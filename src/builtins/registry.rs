use std::fmt;
use std::io::Write;

use crate::builtins;
use crate::engine::{ExecutionResult, ShellState};
use crate::error::ShellError;

/// Output sinks handed to a builtin for the duration of one call.
///
/// These are either the shell's own stdout/stderr or the files named by the
/// line's redirections.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

pub type BuiltinRunner = fn(&[String], &mut ShellState, &mut Streams<'_>) -> (ExecutionResult, i32);

pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    /// `false` means redirections on the line are parsed but not applied.
    pub honors_redirects: bool,
    pub run: BuiltinRunner,
}

impl fmt::Debug for CommandInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandInfo").field("name", &self.name).finish_non_exhaustive()
    }
}

pub const BUILTINS: &[CommandInfo] = &[
    builtins::cd::COMMAND_INFO_CD,
    builtins::echo::COMMAND_INFO,
    builtins::system::COMMAND_INFO_EXIT,
    builtins::cd::COMMAND_INFO_PWD,
    builtins::type_cmd::COMMAND_INFO,
];

pub fn find_command(name: &str) -> Option<&'static CommandInfo> {
    BUILTINS.iter().find(|cmd| cmd.name == name)
}

/// Render a builtin failure on its error sink and map it to status 1.
pub fn report(streams: &mut Streams<'_>, err: ShellError) -> (ExecutionResult, i32) {
    let _ = writeln!(streams.err, "{}", err);
    (ExecutionResult::KeepRunning, 1)
}
