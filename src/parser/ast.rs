// ── AST types ──────────────────────────────────────────────────────────────

/// How a redirection target is opened.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WriteMode {
    /// `>`, `1>`, `2>` — recreate the file before writing
    Truncate,
    /// `>>`, `1>>`, `2>>` — keep existing content, write at the end
    Append,
}

/// Which output stream of a command a redirection applies to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// A recognised redirection operator token such as `2>>`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RedirectOp {
    pub stream: Stream,
    pub mode: WriteMode,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Redirect {
    pub path: String,
    pub mode: WriteMode,
}

/// Result of splitting a token list into command words and redirections.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Extracted {
    pub tokens: Vec<String>,
    pub stdout: Option<Redirect>,
    pub stderr: Option<Redirect>,
}

/// One fully parsed input line. `name` is never empty.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParsedLine {
    pub name: String,
    pub args: Vec<String>,
    pub stdout: Option<Redirect>,
    pub stderr: Option<Redirect>,
}
