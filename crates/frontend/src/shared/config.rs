//! Resolves the UI configuration: embedded TOML defaults, then `?key=value`
//! overrides from the page URL.

use contracts::shared::config::{UiConfig, UiConfigOverrides};
use leptos::prelude::*;
use log::Level;
use web_sys::window;

/// Resolved configuration plus messages to log once the logger is up
pub struct LoadedConfig {
    pub config: UiConfig,
    pub notes: Vec<(Level, String)>,
}

/// Read overrides from the current location
pub fn load_config() -> LoadedConfig {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    load_config_from_query(&search)
}

pub fn load_config_from_query(search: &str) -> LoadedConfig {
    let mut notes = Vec::new();
    let mut config = match UiConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            notes.push((Level::Warn, format!("Embedded config rejected ({}), using built-in defaults", e)));
            UiConfig::default()
        }
    };

    let query = search.trim_start_matches('?');
    if query.is_empty() {
        notes.push((Level::Info, "Using default embedded configuration".to_string()));
        return LoadedConfig { config, notes };
    }

    match serde_qs::from_str::<UiConfigOverrides>(query) {
        Ok(overrides) => match config.apply(overrides) {
            Ok(()) => notes.push((Level::Info, format!("Configuration overridden from query: {}", query))),
            Err(e) => notes.push((Level::Warn, format!("Ignoring query overrides: {}", e))),
        },
        Err(e) => notes.push((Level::Warn, format!("Ignoring malformed query string: {}", e))),
    }

    LoadedConfig { config, notes }
}

/// Log level named by the config; validated values always parse
pub fn log_level(config: &UiConfig) -> Level {
    config.log_level.parse().unwrap_or(Level::Debug)
}

pub fn use_config() -> UiConfig {
    use_context::<UiConfig>().expect("UiConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        let loaded = load_config_from_query("");
        assert_eq!(loaded.config, UiConfig::default());
        assert_eq!(loaded.notes.len(), 1);
        assert_eq!(loaded.notes[0].0, Level::Info);
    }

    #[test]
    fn test_query_overrides() {
        let loaded = load_config_from_query("?reply_delay_ms=250&log_level=info");
        assert_eq!(loaded.config.reply_delay_ms, 250);
        assert_eq!(log_level(&loaded.config), Level::Info);
        assert_eq!(loaded.config.greeting, UiConfig::default().greeting);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let loaded = load_config_from_query("?utm_source=mail");
        assert_eq!(loaded.config, UiConfig::default());
    }

    #[test]
    fn test_bad_level_keeps_defaults() {
        let loaded = load_config_from_query("?log_level=loud&reply_delay_ms=5");
        assert_eq!(loaded.config, UiConfig::default());
        assert!(loaded.notes.iter().any(|(level, _)| *level == Level::Warn));
    }
}
