mod builtins;
mod completion;
mod engine;
mod error;
mod parser;

use std::io::{self, Write};
use std::process;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use completion::ShellHelper;
use engine::{ExecutionResult, ShellState};

const PROMPT: &str = "$ ";

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> rustyline::Result<()> {
    init_logging();
    let mut state = ShellState::new();
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new(state.env.path.clone())));

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                let Some(parsed) = parser::parse_line(input) else {
                    continue;
                };
                if let (ExecutionResult::Exit(code), _) = engine::execute(&parsed, &mut state) {
                    let _ = io::stdout().flush();
                    process::exit(code);
                }
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("mysh: end of input");
                process::exit(1);
            }
            Err(err) => {
                eprintln!("mysh: error reading input: {}", err);
                process::exit(1);
            }
        }
    }
}
