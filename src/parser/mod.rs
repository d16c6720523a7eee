mod ast;
mod redirect;
mod tokenize;

// Re-export the public surface so that callers only ever name `crate::parser::*`.
pub use ast::{ParsedLine, Redirect, WriteMode};

use ast::Extracted;
use redirect::extract_redirects;
use tokenize::tokenize;

// ── Public API ────────────────────────────────────────────────────────────

/// Parse one input line into a command, its arguments and its redirections.
///
/// Returns `None` when nothing is left to run: an empty or blank line, or a
/// line made only of redirections.
pub fn parse_line(input: &str) -> Option<ParsedLine> {
    let Extracted { tokens, stdout, stderr } = extract_redirects(tokenize(input));

    let mut words = tokens.into_iter();
    let name = words.next()?;
    Some(ParsedLine {
        name,
        args: words.collect(),
        stdout,
        stderr,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let cmd = parse_line("ls -la").unwrap();
        assert_eq!(cmd.name, "ls");
        assert_eq!(cmd.args, vec!["-la"]);
        assert_eq!(cmd.stdout, None);
        assert_eq!(cmd.stderr, None);
    }

    #[test]
    fn test_parse_quoted() {
        let cmd = parse_line("echo \"hello world\"").unwrap();
        assert_eq!(cmd.name, "echo");
        assert_eq!(cmd.args, vec!["hello world"]);
    }

    #[test]
    fn test_parse_quoted_command_name() {
        let cmd = parse_line("'my program' arg").unwrap();
        assert_eq!(cmd.name, "my program");
        assert_eq!(cmd.args, vec!["arg"]);
    }

    #[test]
    fn test_empty() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
    }

    #[test]
    fn test_only_redirection_is_noop() {
        assert!(parse_line("> out.txt").is_none());
        assert!(parse_line("2>> err.txt").is_none());
    }

    #[test]
    fn test_redirect_target_with_spaces() {
        let cmd = parse_line("echo hi > 'my file.txt'").unwrap();
        assert_eq!(cmd.args, vec!["hi"]);
        assert_eq!(
            cmd.stdout,
            Some(Redirect { path: "my file.txt".to_string(), mode: WriteMode::Truncate })
        );
    }

    #[test]
    fn test_both_redirects() {
        let cmd = parse_line("ls /nope 2>> err.log >> out.log").unwrap();
        assert_eq!(cmd.name, "ls");
        assert_eq!(cmd.args, vec!["/nope"]);
        assert_eq!(
            cmd.stdout,
            Some(Redirect { path: "out.log".to_string(), mode: WriteMode::Append })
        );
        assert_eq!(
            cmd.stderr,
            Some(Redirect { path: "err.log".to_string(), mode: WriteMode::Append })
        );
    }
}
