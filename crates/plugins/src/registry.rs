use std::path::{Path, PathBuf};

use {serde::Deserialize, serde_json::Value, tracing::debug};

/// A plugin resolved from the registry: name plus install location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRef {
    pub name: String,
    pub install_path: PathBuf,
}

impl PluginRef {
    /// Skills root bundled inside this plugin's install directory.
    pub fn skills_dir(&self) -> PathBuf {
        self.install_path.join("skills")
    }
}

/// Registry manifest shape: `{"plugins": {"<name>@<marketplace>": [...]}}`.
///
/// Installation records stay untyped so a malformed entry skips only
/// itself, not its siblings.
#[derive(Debug, Default, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    plugins: serde_json::Map<String, Value>,
}

/// Read the installed-plugins registry, degrading to "no plugins" on any
/// failure.
///
/// A missing file is the common case (no plugins installed) and is not an
/// error. A manifest that fails to read or parse as a whole also yields an
/// empty list; the cause is only surfaced through tracing.
pub fn read_installed_plugins(registry_path: &Path) -> Vec<PluginRef> {
    if !registry_path.exists() {
        return Vec::new();
    }
    match load_registry(registry_path) {
        Ok(plugins) => plugins,
        Err(e) => {
            debug!(?registry_path, %e, "unreadable plugin registry, treating as empty");
            Vec::new()
        },
    }
}

/// Fallible inner loader, kept separate so tests can inspect failure causes.
fn load_registry(registry_path: &Path) -> anyhow::Result<Vec<PluginRef>> {
    let data = std::fs::read_to_string(registry_path)?;
    let registry: RegistryFile = serde_json::from_str(&data)?;

    let mut plugins = Vec::new();
    for (key, installs) in &registry.plugins {
        // Only the first installation record counts, and only when it
        // carries an installPath.
        let Some(first) = installs.as_array().and_then(|a| a.first()) else {
            continue;
        };
        let Some(install_path) = first.get("installPath").and_then(Value::as_str) else {
            continue;
        };
        plugins.push(PluginRef {
            name: plugin_name_from_key(key).to_string(),
            install_path: PathBuf::from(install_path),
        });
    }
    Ok(plugins)
}

/// Plugin name is the registry key up to the first `@` (the marketplace
/// qualifier); a key without `@` is used whole.
pub fn plugin_name_from_key(key: &str) -> &str {
    key.split('@').next().unwrap_or(key)
}
