//! Layered configuration (C9): `config/base` + `config/<APP_ENV>` + environment
//! variables prefixed `MASKPROXY_`, loaded once into a process-wide static.

mod app_env;

pub use app_env::{app_env, AppEnv};

use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Bearer token local callers must present. Empty disables the check
    /// (development convenience only).
    #[serde(default)]
    pub local_api_key: String,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_owned()]
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where and how to reach the Redis-backed mapping store.
///
/// `backend` selects between the persistent Redis store and the in-memory
/// store used by tests and one-shot CLI invocations; it is not itself part
/// of the Redis connection string.
#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
    pub connect_timeout_ms: u64,
    pub default_ttl_seconds: Option<u64>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreSettings {
    /// A `redis://[:password@]host:port/db` connection string, the shape
    /// `redis::Client::open` expects.
    pub fn redis_url(&self) -> String {
        match &self.password {
            Some(password) => {
                format!("redis://:{}@{}:{}/{}", password, self.host, self.port, self.db)
            }
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }

    pub fn connect_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn default_ttl(&self) -> Option<std::time::Duration> {
        self.default_ttl_seconds.map(std::time::Duration::from_secs)
    }
}

/// Where to forward masked requests and how to authenticate.
#[derive(Debug, Deserialize)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout_ms: u64,
    pub model: String,
}

impl UpstreamSettings {
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}

pub fn settings() -> &'static Settings {
    static SETTINGS: OnceCell<Settings> = OnceCell::new();

    SETTINGS.get_or_init(|| load_settings().expect("Failed to load settings"))
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let mut builder = config::Config::builder();

    let current_dir = std::env::current_dir().expect("The current directory to be available");
    let config_dir = current_dir.join("config");

    builder = builder.add_source(config::File::from(config_dir.join("base")).required(true));
    builder = builder.add_source(
        config::File::from(config_dir.join(app_env().as_str())).required(false),
    );
    builder = builder.add_source(config::Environment::with_prefix("MASKPROXY").separator("__"));

    builder.build()?.try_deserialize()
}
