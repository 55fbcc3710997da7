//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lifedeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::Mode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_mode: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_BASE_URL: &str = "http://localhost:4000";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub mode: Mode,
    pub username: Option<String>,
    pub email: Option<String>,
    pub server_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lifedeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lifedeck").join("config.toml"))
}

/// Load config from `~/.lifedeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lifedeck Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_mode = "two-d"             # "two-d" or "three-d"
# username = "alice"                 # Required for saving patterns
# email = "alice@example.com"

# [server]
# base_url = "http://localhost:4000" # Or set LIFEDECK_SERVER_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// CLI arguments are `None` when the flag was not specified.
pub fn resolve(
    config: &DeckConfig,
    cli_mode: Option<Mode>,
    cli_user: Option<&str>,
    cli_server: Option<&str>,
) -> ResolvedConfig {
    // Mode: CLI → env → config → default
    let mode = cli_mode
        .or_else(|| std::env::var("LIFEDECK_MODE").ok().and_then(|s| parse_mode(&s)))
        .or_else(|| config.general.default_mode.as_deref().and_then(parse_mode))
        .unwrap_or_default();

    // Username: CLI → env → config
    let username = cli_user
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LIFEDECK_USER").ok())
        .or_else(|| config.general.username.clone());

    // Server base URL: CLI → env → config → default
    let server_base_url = cli_server
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LIFEDECK_SERVER_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_BASE_URL.to_string());

    ResolvedConfig {
        mode,
        username,
        email: config.general.email.clone(),
        server_base_url,
    }
}

fn parse_mode(s: &str) -> Option<Mode> {
    match s.to_ascii_lowercase().as_str() {
        "two-d" | "2d" => Some(Mode::TwoD),
        "three-d" | "3d" => Some(Mode::ThreeD),
        _ => {
            warn!("Unrecognized mode '{}', ignoring", s);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = DeckConfig::default();
        assert!(config.general.username.is_none());
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = DeckConfig::default();
        let resolved = resolve(&config, None, None, None);
        assert_eq!(resolved.mode, Mode::TwoD);
        assert_eq!(resolved.server_base_url, DEFAULT_SERVER_BASE_URL);
        assert!(resolved.username.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DeckConfig {
            general: GeneralConfig {
                default_mode: Some("three-d".to_string()),
                username: Some("alice".to_string()),
                email: Some("alice@example.com".to_string()),
            },
            server: ServerConfig {
                base_url: Some("http://example.com:9000".to_string()),
            },
        };
        let resolved = resolve(&config, None, None, None);
        assert_eq!(resolved.mode, Mode::ThreeD);
        assert_eq!(resolved.username.as_deref(), Some("alice"));
        assert_eq!(resolved.server_base_url, "http://example.com:9000");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = DeckConfig {
            general: GeneralConfig {
                default_mode: Some("three-d".to_string()),
                username: Some("alice".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Mode::TwoD), Some("bob"), None);
        assert_eq!(resolved.mode, Mode::TwoD);
        assert_eq!(resolved.username.as_deref(), Some("bob"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
username = "alice"
"#;
        let config: DeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.username.as_deref(), Some("alice"));
        assert!(config.general.default_mode.is_none());
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_mode = "three-d"
username = "alice"
email = "alice@example.com"

[server]
base_url = "http://192.168.1.100:4000"
"#;
        let config: DeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_mode.as_deref(), Some("three-d"));
        assert_eq!(config.general.email.as_deref(), Some("alice@example.com"));
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.100:4000")
        );
    }

    #[test]
    fn test_parse_mode_accepts_both_spellings() {
        assert_eq!(parse_mode("2d"), Some(Mode::TwoD));
        assert_eq!(parse_mode("three-d"), Some(Mode::ThreeD));
        assert_eq!(parse_mode("flat"), None);
    }
}
