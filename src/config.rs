use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Process configuration, read once at startup from `REPORT_`-prefixed
/// environment variables layered over the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data.db".to_string(),
            port: 8000,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("REPORT_"))
            .extract()
            .expect("invalid REPORT_* environment configuration")
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);
