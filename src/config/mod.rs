mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::Settings;

pub use settings::{HttpSettings, RelaySettings, StoreSettings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the http, relay and store configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        http: HttpSettings {
            host: partial
                .http
                .as_ref()
                .and_then(|h| h.host.clone())
                .unwrap_or(default.http.host),
            port: partial
                .http
                .as_ref()
                .and_then(|h| h.port)
                .unwrap_or(default.http.port),
            static_root: partial
                .http
                .as_ref()
                .and_then(|h| h.static_root.clone())
                .unwrap_or(default.http.static_root),
        },
        relay: RelaySettings {
            host: partial
                .relay
                .as_ref()
                .and_then(|r| r.host.clone())
                .unwrap_or(default.relay.host),
            port: partial
                .relay
                .as_ref()
                .and_then(|r| r.port)
                .unwrap_or(default.relay.port),
        },
        store: StoreSettings {
            path: partial
                .store
                .as_ref()
                .and_then(|s| s.path.clone())
                .unwrap_or(default.store.path),
        },
    })
}
