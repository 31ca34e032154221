use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::KeyCode;
use serde::Deserialize;

/// Shortest accepted refresh interval.
pub const MIN_REFRESH_RATE_MS: u64 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub refresh_rate_ms: u64,
    pub top_processes: usize,
    pub name_width: u16,
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 2000,
            top_processes: 10,
            name_width: 24,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub refresh: String,
    pub help: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            refresh: "r".to_string(),
            help: "?".to_string(),
        }
    }
}

impl Config {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.general.refresh_rate_ms.max(MIN_REFRESH_RATE_MS))
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysglance").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

/// Parses a key name from the config file: a single character or one of
/// the named keys.
pub fn parse_key(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return (1..=12).contains(&n).then_some(KeyCode::F(n));
    }
    match lower.as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.refresh_rate_ms, 2000);
        assert_eq!(config.general.top_processes, 10);
        assert_eq!(config.general.name_width, 24);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.colors.theme, "dark");
        assert_eq!(config.keybinds.quit, "q");
        assert_eq!(config.refresh_interval(), Duration::from_millis(2000));
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
refresh_rate_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.general.top_processes, 10);
        assert_eq!(config.keybinds.refresh, "r");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
refresh_rate_ms = 1000
top_processes = 5
name_width = 30
log_level = "debug"

[colors]
theme = "light"

[keybinds]
quit = "x"
refresh = "F5"
help = "h"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 1000);
        assert_eq!(config.general.top_processes, 5);
        assert_eq!(config.general.name_width, 30);
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.colors.theme, "light");
        assert_eq!(config.keybinds.quit, "x");
        assert_eq!(parse_key(&config.keybinds.refresh), Some(KeyCode::F(5)));
    }

    #[test]
    fn tiny_refresh_rate_is_raised() {
        let mut config = Config::default();
        config.general.refresh_rate_ms = 0;
        assert_eq!(
            config.refresh_interval(),
            Duration::from_millis(MIN_REFRESH_RATE_MS)
        );
    }

    #[test]
    fn parse_key_names() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("?"), Some(KeyCode::Char('?')));
        assert_eq!(parse_key("Escape"), Some(KeyCode::Esc));
        assert_eq!(parse_key("space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("hyper"), None);
        assert_eq!(parse_key("F1"), Some(KeyCode::F(1)));
        assert_eq!(parse_key("f6"), Some(KeyCode::F(6)));
        assert_eq!(parse_key("F12"), Some(KeyCode::F(12)));
        assert_eq!(parse_key("f0"), None);
        assert_eq!(parse_key("f13"), None);
        assert_eq!(parse_key("fx"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.general.refresh_rate_ms, 2000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("sysglance_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.refresh_rate_ms, 2000);
        let _ = std::fs::remove_file(&temp);
    }
}
