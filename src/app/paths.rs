// SPDX-License-Identifier: MPL-2.0
//! Resolution of the directories the application reads from and writes to.
//!
//! The config directory holds `settings.toml`; the data directory holds
//! exported diagnostics reports.
//!
//! # Resolution Order
//!
//! 1. **Explicit override**, the parameter of the `_with_override()` functions
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_TOASTS_DATA_DIR`, `ICED_TOASTS_CONFIG_DIR`)
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToasts";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_TOASTS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Meant to be called once at startup. Later calls are ignored, the first
/// values stay in effect.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = CLI_DATA_DIR.set(data_dir.map(PathBuf::from));
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn from_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_name: &str,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or_else(|| cli.get().and_then(Clone::clone))
        .or_else(|| from_env(env_name))
        .or_else(|| {
            platform.map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the application data directory.
///
/// - Linux: `~/.local/share/IcedToasts/`
/// - macOS: `~/Library/Application Support/IcedToasts/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedToasts\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Returns the application config directory.
///
/// - Linux: `~/.config/IcedToasts/`
/// - macOS: `~/Library/Application Support/IcedToasts/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedToasts\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}
