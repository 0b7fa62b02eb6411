use serde::Deserialize;
use std::env;
use tourdesk_catalog::OptionCatalog;
use tourdesk_manager::SummaryOptions;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub events: EventsConfig,
    /// Replaces the built-in option lists when present
    #[serde(default)]
    pub catalog: Option<OptionCatalog>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub summary_includes_hotels: bool,
}

impl DisplayConfig {
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            include_hotels: self.summary_includes_hotels,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: default_seed_enabled() }
    }
}

fn default_seed_enabled() -> bool { true }

#[derive(Debug, Deserialize, Clone)]
pub struct EventsConfig {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { channel_capacity: default_channel_capacity() }
    }
}

fn default_channel_capacity() -> usize { 100 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `TOURDESK_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("TOURDESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Catalog from configuration, or the built-in option lists
    pub fn option_catalog(&self) -> OptionCatalog {
        self.catalog.clone().unwrap_or_default()
    }

    /// Defaults for tests and embedding
    pub fn with_port(port: u16) -> Self {
        Self {
            server: ServerConfig { port },
            display: DisplayConfig::default(),
            seed: SeedConfig::default(),
            events: EventsConfig::default(),
            catalog: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_sections_default_when_absent() {
        let config = parse("[server]\nport = 9000\n");

        assert_eq!(config.server.port, 9000);
        assert!(config.seed.enabled);
        assert_eq!(config.events.channel_capacity, 100);
        assert!(!config.display.summary_options().include_hotels);
        assert_eq!(config.option_catalog(), OptionCatalog::standard());
    }

    #[test]
    fn test_catalog_override() {
        let config = parse(
            r#"
            [server]
            port = 8080

            [display]
            summary_includes_hotels = true

            [seed]
            enabled = false

            [catalog]
            cities = ["Lisbon", "Porto"]
            default_room_types = ["Single"]
            excursions = ["Belem Tower Tour"]
            tour_services = ["City Guide"]

            [[catalog.hotels]]
            name = "Casa Azul"
            room_types = ["Twin", "Family"]
            "#,
        );

        assert!(!config.seed.enabled);
        assert!(config.display.summary_options().include_hotels);
        let catalog = config.option_catalog();
        assert!(catalog.is_city("Porto"));
        assert_eq!(catalog.room_type_options("Casa Azul"), ["Twin", "Family"]);
    }
}
