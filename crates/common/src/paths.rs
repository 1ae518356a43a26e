//! Locations of the skill and plugin inputs under the user's `.claude` tree.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Environment variable that relocates the `.claude` tree (non-standard
/// installs, tests).
pub const CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Returns the `.claude` configuration directory.
///
/// Honors [`CONFIG_DIR_ENV`] when set and non-empty, otherwise resolves to
/// `<home>/.claude`. Falls back to a relative `.claude` when no home
/// directory can be determined; downstream scans treat the missing
/// directory as empty.
pub fn claude_dir() -> PathBuf {
    let home = directories::UserDirs::new().map(|d| d.home_dir().to_path_buf());
    resolve_claude_dir(std::env::var_os(CONFIG_DIR_ENV).as_deref(), home.as_deref())
}

fn resolve_claude_dir(env_override: Option<&OsStr>, home: Option<&Path>) -> PathBuf {
    if let Some(dir) = env_override
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    match home {
        Some(home) => home.join(".claude"),
        None => PathBuf::from(".claude"),
    }
}

/// User-global skills root: `<claude-dir>/skills/`.
pub fn user_skills_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join("skills")
}

/// Installed-plugins registry: `<claude-dir>/plugins/installed_plugins.json`.
pub fn installed_plugins_path(claude_dir: &Path) -> PathBuf {
    claude_dir.join("plugins").join("installed_plugins.json")
}
