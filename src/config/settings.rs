use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the HTTP front-end, the relay and the store.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub http: HttpSettings,
    pub relay: RelaySettings,
    pub store: StoreSettings,
}

/// Configuration settings for the HTTP front-end.
///
/// Defines the bind address and the directory the static pages are served from.
#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    pub host: String,
    pub port: u16,
    pub static_root: String,
}

/// Configuration settings for the relay.
///
/// Defines the host and port the relay server binds to, and that the relay
/// client connects to.
#[derive(Debug, Deserialize, Clone)]
pub struct RelaySettings {
    pub host: String,
    pub port: u16,
}

/// Configuration settings for the document store.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub path: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub http: Option<PartialHttpSettings>,
    pub relay: Option<PartialRelaySettings>,
    pub store: Option<PartialStoreSettings>,
}

/// Partial HTTP settings.
///
/// Used when loading front-end configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialHttpSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_root: Option<String>,
}

/// Partial relay settings.
#[derive(Debug, Deserialize)]
pub struct PartialRelaySettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial store settings.
#[derive(Debug, Deserialize)]
pub struct PartialStoreSettings {
    pub path: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            http: HttpSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
                static_root: "static".to_string(),
            },
            relay: RelaySettings {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            store: StoreSettings {
                path: "messages_db".to_string(),
            },
        }
    }
}

impl Settings {
    /// The address the relay client connects to and the relay server binds.
    pub fn relay_addr(&self) -> String {
        format!("{}:{}", self.relay.host, self.relay.port)
    }

    /// The address the HTTP front-end binds.
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}
