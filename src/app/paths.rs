// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`SEQUESTERED_ATELIER_CONFIG_DIR`, `SEQUESTERED_ATELIER_ASSETS_DIR`)
//! 4. **Configured value** (assets only, `[gallery] assets_dir`)
//! 5. **Default** - platform config dir via `dirs`, bundled `assets/public` for assets
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.assets_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "SequesteredAtelier";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SEQUESTERED_ATELIER_CONFIG_DIR";

/// Environment variable to override the artwork asset directory.
pub const ENV_ASSETS_DIR: &str = "SEQUESTERED_ATELIER_ASSETS_DIR";

/// Asset directory shipped with the crate.
pub const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/public");

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and asset directories.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    let assets_set = CLI_ASSETS_DIR.set(assets_dir.map(PathBuf::from)).is_ok();
    if !(config_set && assets_set) {
        tracing::debug!("CLI path overrides already initialized; ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`.
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory that artwork image references resolve against.
///
/// `configured` is the `[gallery] assets_dir` value from `settings.toml`.
/// Never fails: the bundled asset directory is the last resort.
pub fn get_assets_dir(configured: Option<PathBuf>) -> PathBuf {
    get_assets_dir_with_override(None, configured)
}

/// Returns the asset directory with an optional override.
pub fn get_assets_dir_with_override(
    override_path: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> PathBuf {
    override_path
        .or_else(get_cli_assets_dir)
        .or_else(|| non_empty_env(ENV_ASSETS_DIR))
        .or(configured)
        .unwrap_or_else(|| PathBuf::from(BUNDLED_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_dir_falls_back_to_bundled_directory() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);

        let result = get_assets_dir(None);
        assert_eq!(result, PathBuf::from(BUNDLED_ASSETS_DIR));
    }

    #[test]
    fn configured_assets_dir_is_used_when_nothing_overrides_it() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);

        let configured = PathBuf::from("/srv/atelier");
        assert_eq!(get_assets_dir(Some(configured.clone())), configured);
    }

    #[test]
    fn env_var_beats_configured_assets_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/env/assets");

        let result = get_assets_dir(Some(PathBuf::from("/configured/assets")));
        assert_eq!(result, PathBuf::from("/env/assets"));

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var_for_assets() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/env/assets");

        let override_path = PathBuf::from("/override/assets");
        let result = get_assets_dir_with_override(Some(override_path.clone()), None);
        assert_eq!(result, override_path);

        std::env::remove_var(ENV_ASSETS_DIR);
    }
}
