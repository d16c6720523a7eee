use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::builtins::registry::{self, CommandInfo};

/// How a command name will be run.
#[derive(Debug, Clone)]
pub enum CommandClass {
    Builtin(&'static CommandInfo),
    External(PathBuf),
    NotFound,
}

/// Classify `name`. Builtins always win over files on the search path.
pub fn resolve(name: &str, search_path: Option<&OsStr>) -> CommandClass {
    if let Some(info) = registry::find_command(name) {
        return CommandClass::Builtin(info);
    }
    match find_executable(name, search_path) {
        Some(path) => CommandClass::External(path),
        None => CommandClass::NotFound,
    }
}

/// Expand a leading `~` to `home`. Other paths are returned untouched.
///
/// Returns `None` only when the path needs `home` and it is unset.
pub fn expand_home(path_str: &str, home: Option<&OsStr>) -> Option<PathBuf> {
    if path_str == "~" {
        return home.map(PathBuf::from);
    }
    if let Some(rest) = path_str.strip_prefix("~/") {
        return home.map(|h| Path::new(h).join(rest));
    }
    Some(PathBuf::from(path_str))
}

/// Locate an executable for `cmd`.
///
/// A name with a `/` in it is checked as-is. Otherwise each directory of
/// `search_path` is tried in order and the first hit wins.
pub fn find_executable(cmd: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if cmd.is_empty() {
        return None;
    }

    if cmd.contains('/') {
        return check_path(PathBuf::from(cmd));
    }

    let paths = search_path?;
    env::split_paths(paths).find_map(|dir| check_path(dir.join(cmd)))
}

fn check_path(p: PathBuf) -> Option<PathBuf> {
    is_executable(&p).then_some(p)
}

/// An existing non-directory with at least one execute bit set.
pub fn is_executable(p: &Path) -> bool {
    let Ok(meta) = std::fs::metadata(p) else {
        return false;
    };
    if meta.is_dir() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
