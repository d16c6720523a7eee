use std::collections::BTreeSet;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;

use rustyline::completion::{Completer, Pair};
use rustyline::{Context, Helper, Highlighter, Hinter, Validator};

use crate::builtins::registry::BUILTINS;
use crate::engine::is_executable;

/// Line-editor helper: tab completes the command word.
#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct ShellHelper {
    search_path: Option<OsString>,
}

impl ShellHelper {
    pub fn new(search_path: Option<OsString>) -> Self {
        ShellHelper { search_path }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let word = before.trim_start();
        // Arguments are not completed.
        if word.is_empty() || word.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let start = pos - word.len();
        let pairs = command_candidates(word, self.search_path.as_deref())
            .into_iter()
            .map(|name| Pair {
                replacement: format!("{} ", name),
                display: name,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Builtins and `PATH` executables whose name starts with `prefix`, sorted
/// and without duplicates.
pub fn command_candidates(prefix: &str, search_path: Option<&OsStr>) -> Vec<String> {
    let mut names: BTreeSet<String> = BUILTINS
        .iter()
        .map(|b| b.name)
        .filter(|name| name.starts_with(prefix))
        .map(String::from)
        .collect();

    if let Some(paths) = search_path {
        for dir in env::split_paths(paths) {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let Ok(name) = entry.file_name().into_string() else {
                    continue;
                };
                if name.starts_with(prefix) && is_executable(&entry.path()) {
                    names.insert(name);
                }
            }
        }
    }

    names.into_iter().collect()
}
