use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::one_of,
    combinator::{all_consuming, map, opt},
    IResult,
    Parser,
};

use super::ast::{Extracted, Redirect, RedirectOp, Stream, WriteMode};

// ── Operator recognition ──────────────────────────────────────────────────

/// `[1|2]` followed by `>>` or `>`.
fn redirect_op(input: &str) -> IResult<&str, RedirectOp> {
    let (input, fd) = opt(one_of("12")).parse(input)?;
    let (input, mode) = alt((
        // `>>` must be tried before `>`.
        map(tag(">>"), |_| WriteMode::Append),
        map(tag(">"), |_| WriteMode::Truncate),
    ))
    .parse(input)?;
    let stream = if fd == Some('2') { Stream::Stderr } else { Stream::Stdout };
    Ok((input, RedirectOp { stream, mode }))
}

/// Classify a whole token as a redirection operator.
///
/// Only exact matches count: `>`, `1>`, `>>`, `1>>`, `2>`, `2>>`.
/// Anything else (`>file`, `3>`, `>>>`) is an ordinary word.
pub fn parse_redirect_op(token: &str) -> Option<RedirectOp> {
    all_consuming(redirect_op)
        .parse(token)
        .ok()
        .map(|(_, op)| op)
}

// ── Extraction ────────────────────────────────────────────────────────────

/// Pull redirections out of a token list.
///
/// The command words end at the first operator that has a target. Later
/// operators still fill their stream's slot, but each stream keeps the first
/// target it was given. An operator in last position has no target and is
/// left in place as a plain word. The word after an operator is always its
/// target, never an operator itself.
pub fn extract_redirects(mut tokens: Vec<String>) -> Extracted {
    let mut stdout: Option<Redirect> = None;
    let mut stderr: Option<Redirect> = None;
    // Set once, at the first operator that has a target.
    let mut boundary: Option<usize> = None;

    let mut i = 0;
    while i < tokens.len() {
        let Some(op) = parse_redirect_op(&tokens[i]) else {
            i += 1;
            continue;
        };
        let Some(target) = tokens.get(i + 1) else {
            break;
        };

        if boundary.is_none() {
            boundary = Some(i);
        }

        let slot = match op.stream {
            Stream::Stdout => &mut stdout,
            Stream::Stderr => &mut stderr,
        };
        if slot.is_none() {
            *slot = Some(Redirect { path: target.clone(), mode: op.mode });
        }
        i += 2;
    }

    if let Some(end) = boundary {
        tokens.truncate(end);
    }
    Extracted { tokens, stdout, stderr }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn redirect(path: &str, mode: WriteMode) -> Option<Redirect> {
        Some(Redirect { path: path.to_string(), mode })
    }

    #[test]
    fn test_operator_table() {
        let cases = [
            (">", Stream::Stdout, WriteMode::Truncate),
            ("1>", Stream::Stdout, WriteMode::Truncate),
            (">>", Stream::Stdout, WriteMode::Append),
            ("1>>", Stream::Stdout, WriteMode::Append),
            ("2>", Stream::Stderr, WriteMode::Truncate),
            ("2>>", Stream::Stderr, WriteMode::Append),
        ];
        for (token, stream, mode) in cases {
            assert_eq!(
                parse_redirect_op(token),
                Some(RedirectOp { stream, mode }),
                "operator {token}"
            );
        }
    }

    #[test]
    fn test_non_operators() {
        for token in ["", "1", "2", "3>", ">>>", ">file", "2>err", "12>", "<", "&>", "echo"] {
            assert_eq!(parse_redirect_op(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_no_operators() {
        let out = extract_redirects(words("ls -la /tmp"));
        assert_eq!(out.tokens, words("ls -la /tmp"));
        assert_eq!(out.stdout, None);
        assert_eq!(out.stderr, None);
    }

    #[test]
    fn test_stdout_truncate() {
        let out = extract_redirects(words("echo hi > out.txt"));
        assert_eq!(out.tokens, words("echo hi"));
        assert_eq!(out.stdout, redirect("out.txt", WriteMode::Truncate));
        assert_eq!(out.stderr, None);
    }

    #[test]
    fn test_stdout_append() {
        let out = extract_redirects(words("echo hi 1>> out.txt"));
        assert_eq!(out.tokens, words("echo hi"));
        assert_eq!(out.stdout, redirect("out.txt", WriteMode::Append));
    }

    #[test]
    fn test_stderr_append() {
        let out = extract_redirects(words("cat missing 2>> err.txt"));
        assert_eq!(out.tokens, words("cat missing"));
        assert_eq!(out.stdout, None);
        assert_eq!(out.stderr, redirect("err.txt", WriteMode::Append));
    }

    #[test]
    fn test_both_streams_stdout_first() {
        let out = extract_redirects(words("cmd a > out.txt 2> err.txt"));
        assert_eq!(out.tokens, words("cmd a"));
        assert_eq!(out.stdout, redirect("out.txt", WriteMode::Truncate));
        assert_eq!(out.stderr, redirect("err.txt", WriteMode::Truncate));
    }

    #[test]
    fn test_both_streams_stderr_first() {
        let out = extract_redirects(words("cmd a 2> err.txt > out.txt"));
        assert_eq!(out.tokens, words("cmd a"));
        assert_eq!(out.stdout, redirect("out.txt", WriteMode::Truncate));
        assert_eq!(out.stderr, redirect("err.txt", WriteMode::Truncate));
    }

    #[test]
    fn test_first_target_per_stream_wins() {
        let out = extract_redirects(words("echo hi > first.txt >> second.txt"));
        assert_eq!(out.tokens, words("echo hi"));
        assert_eq!(out.stdout, redirect("first.txt", WriteMode::Truncate));
    }

    #[test]
    fn test_words_after_boundary_are_dropped() {
        let out = extract_redirects(words("echo a > out.txt b c"));
        assert_eq!(out.tokens, words("echo a"));
        assert_eq!(out.stdout, redirect("out.txt", WriteMode::Truncate));
    }

    #[test]
    fn test_trailing_operator_is_a_word() {
        let out = extract_redirects(words("echo hi >"));
        assert_eq!(out.tokens, words("echo hi >"));
        assert_eq!(out.stdout, None);
    }

    #[test]
    fn test_target_is_not_an_operator() {
        let out = extract_redirects(words("echo hi > 2> x"));
        assert_eq!(out.tokens, words("echo hi"));
        assert_eq!(out.stdout, redirect("2>", WriteMode::Truncate));
        assert_eq!(out.stderr, None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        for line in [
            "echo hi > out.txt",
            "cmd 2> err.txt > out.txt extra",
            "echo hi >",
            "plain words only",
        ] {
            let once = extract_redirects(words(line));
            let twice = extract_redirects(once.tokens.clone());
            assert_eq!(twice.tokens, once.tokens, "line {line:?}");
            assert_eq!(twice.stdout, None);
            assert_eq!(twice.stderr, None);
        }
    }
}
