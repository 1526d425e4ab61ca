//! Configuration schema for Pillminder.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Root config for the Pillminder service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PillminderConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl PillminderConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> PillminderConfigBuilder {
        PillminderConfigBuilder::default()
    }
}

/// Builder for assembling a `PillminderConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct PillminderConfigBuilder {
    config: PillminderConfig,
}

impl PillminderConfigBuilder {
    /// Replace the HTTP server configuration.
    pub fn server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Replace the reminder store configuration.
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Replace the completion proxy configuration.
    pub fn completion(mut self, completion: CompletionConfig) -> Self {
        self.config.completion = completion;
        self
    }

    pub fn build(self) -> PillminderConfig {
        self.config
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    /// Parse the configured bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|err| ConfigError::invalid("server.bind", format!("{err}")))
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

/// Reminder database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("reminders.db")
}

/// Remote text completion service and demo quota settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Accepted prompts per caller before the demo limit applies.
    #[serde(default = "default_max_messages")]
    pub max_messages: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            max_messages: default_max_messages(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CompletionConfig {
    /// Read the API key from the configured environment variable.
    ///
    /// Blank values are treated as unset.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

/// Free AI messages per caller in the demo.
fn default_max_messages() -> u32 {
    5
}

fn default_timeout_secs() -> u64 {
    30
}
