use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};

/// Which `EventStore` implementation the binary should run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    InMemory,
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "memory" => Ok(Self::InMemory),
            "sqlite" => Ok(Self::Sqlite),
            other => bail!("unknown EVENT_API_STORE value: {other} (expected memory or sqlite)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub database_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("EVENT_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("EVENT_API_PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("EVENT_API_PORT is not a port number: {value}"))?,
            Err(_) => 8080,
        };
        let store = match env::var("EVENT_API_STORE") {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::InMemory,
        };
        let database_path = env::var("EVENT_API_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("events.db"));

        Ok(Self {
            host,
            port,
            store,
            database_path,
        })
    }
}
