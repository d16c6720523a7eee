use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus};
#[cfg(unix)]
use std::os::unix::process::CommandExt;

use tracing::{debug, warn};

use crate::builtins::registry::{CommandInfo, Streams};
use crate::error::{ShellError, ShellResult};
use crate::parser::ParsedLine;

use super::path::{resolve, CommandClass};
use super::redirect::{open_sink, Sink};
use super::state::{ExecutionResult, ShellState};

/// Status of a command that could not be found or started.
const NOT_FOUND_STATUS: i32 = 127;

// ── Entry point ───────────────────────────────────────────────────────────

/// Run one parsed line: classify the command, open its redirections and
/// dispatch it. Returns `(ExecutionResult, exit_code)`.
///
/// Every failure is reported here and turned into a status; nothing escapes
/// to the caller except the request to exit.
pub fn execute(line: &ParsedLine, state: &mut ShellState) -> (ExecutionResult, i32) {
    let class = resolve(&line.name, state.env.path.as_deref());
    debug!(name = %line.name, ?class, "resolved command");

    if let CommandClass::Builtin(info) = class {
        if !info.honors_redirects {
            if line.stdout.is_some() || line.stderr.is_some() {
                warn!(name = info.name, "redirections ignored for this builtin");
            }
            return run_builtin(info, &line.args, state, Sink::Inherit, Sink::Inherit);
        }
    }

    // The handles close when the sinks drop at the end of this call.
    let (out, err) = match open_sinks(line) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("mysh: {}", e);
            return (ExecutionResult::KeepRunning, 1);
        }
    };

    match class {
        CommandClass::Builtin(info) => run_builtin(info, &line.args, state, out, err),
        CommandClass::External(path) => run_external(&path, line, out, err),
        CommandClass::NotFound => not_found(&line.name, out),
    }
}

/// Open stdout then stderr targets. Nothing runs if either fails.
fn open_sinks(line: &ParsedLine) -> ShellResult<(Sink, Sink)> {
    let out = open_sink(line.stdout.as_ref())?;
    let err = open_sink(line.stderr.as_ref())?;
    Ok((out, err))
}

// ── Dispatch ──────────────────────────────────────────────────────────────

fn run_builtin(
    info: &CommandInfo,
    args: &[String],
    state: &mut ShellState,
    mut out: Sink,
    mut err: Sink,
) -> (ExecutionResult, i32) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let mut streams = Streams {
        out: out.writer(&mut stdout),
        err: err.writer(&mut stderr),
    };

    let result = (info.run)(args, state, &mut streams);
    let _ = streams.out.flush();
    let _ = streams.err.flush();
    result
}

fn run_external(path: &Path, line: &ParsedLine, out: Sink, err: Sink) -> (ExecutionResult, i32) {
    let mut command = Command::new(path);
    // The child sees the name it was invoked by, not the resolved path.
    #[cfg(unix)]
    command.arg0(&line.name);
    command
        .args(&line.args)
        .stdout(out.into_stdio())
        .stderr(err.into_stdio());

    // Anything the shell buffered must land before the child writes.
    let _ = io::stdout().flush();

    debug!(path = %path.display(), argv0 = %line.name, "spawning");
    let code = match command.spawn() {
        Ok(mut child) => match child.wait() {
            Ok(status) => {
                debug!(name = %line.name, %status, "process exited");
                status_code(status)
            }
            Err(source) => {
                eprintln!("mysh: {}", ShellError::Wait { name: line.name.clone(), source });
                1
            }
        },
        Err(source) => {
            eprintln!("mysh: {}", ShellError::Spawn { name: line.name.clone(), source });
            NOT_FOUND_STATUS
        }
    };
    (ExecutionResult::KeepRunning, code)
}

/// Not-found is ordinary output, written to the command's stdout sink.
fn not_found(name: &str, mut out: Sink) -> (ExecutionResult, i32) {
    let mut stdout = io::stdout().lock();
    let writer = out.writer(&mut stdout);
    let _ = writeln!(writer, "{}: command not found", name);
    let _ = writer.flush();
    (ExecutionResult::KeepRunning, NOT_FOUND_STATUS)
}

fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

// ── Tests ──────────────────────────────────────────────────────────────────
