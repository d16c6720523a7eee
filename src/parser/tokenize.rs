/// Split a raw input line into argument words.
///
/// Quoting rules:
/// - `'…'`  — everything literal, including `\` and `"`
/// - `"…"`  — literal, except `\\` and `\"` which yield `\` and `"`
/// - `\c`   — outside quotes, `c` is taken literally (including a space)
/// - space  — outside quotes, separates words; runs of spaces collapse
///
/// An unterminated quote is not an error: whatever was collected is emitted
/// as the last word.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_single => current.push(ch),
            '\\' if in_double => {
                if matches!(chars.peek(), Some('\\') | Some('"')) {
                    escaped = true;
                } else {
                    current.push(ch);
                }
            }
            '\\' => escaped = true,
            '"' if !in_single => in_double = !in_double,
            '\'' if !in_double => in_single = !in_single,
            ' ' if !in_single && !in_double => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            other => current.push(other),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

// ── Tests ──────────────────────────────────────────────────────────────────
