mod state;
mod redirect;
mod path;
mod execution;

// Re-export the public API so that `main.rs` and `builtins/` only name
// `engine::*`.
pub use state::{ExecutionResult, ShellEnv, ShellState};
pub use execution::execute;
pub use path::{expand_home, is_executable, resolve, CommandClass};
