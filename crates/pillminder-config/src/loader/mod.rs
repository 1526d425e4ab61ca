//! Layered configuration loader.
//!
//! Discovers configuration layers (system, user, cwd, runtime overrides),
//! checks each against the schema, deep-merges them in precedence order and
//! produces the final `PillminderConfig`.

mod layer_io;
mod merge;
mod schema;


use crate::{ConfigError, PillminderConfig};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default config filename in local layers.
const DEFAULT_CONFIG_FILE: &str = "pillminder.json5";
/// Default config directory under the user's home.
const DEFAULT_CONFIG_DIR: &str = ".pillminder";

#[cfg(unix)]
const SYSTEM_CONFIG_PATH: &str = "/etc/pillminder/pillminder.json5";
#[cfg(windows)]
const SYSTEM_CONFIG_PATH: &str = "C:\\ProgramData\\pillminder\\pillminder.json5";

/// Label used in errors raised by in-memory overrides.
const OVERRIDES_LABEL: &str = "overrides";

/// Effective config plus metadata about which layers were loaded.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// The merged, validated config.
    pub config: PillminderConfig,
    /// Layers that contributed to the config, lowest precedence first.
    pub layers: Vec<ConfigLayer>,
}

/// Origin for a single config layer in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// System-wide configuration.
    System,
    /// User-specific configuration.
    User,
    /// Current working directory configuration.
    Cwd,
    /// Explicit `--config` paths (highest precedence).
    Runtime,
}

/// Metadata about a loaded config layer.
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    pub source: ConfigLayerSource,
    pub path: PathBuf,
}

/// Options controlling layered config discovery and overrides.
#[derive(Debug, Clone)]
pub struct LayeredConfigOptions {
    /// Directory searched for a local `pillminder.json5`.
    pub cwd: PathBuf,
    /// Optional system config path (defaults to `/etc/pillminder/pillminder.json5` on Unix).
    pub system_config_path: Option<PathBuf>,
    /// Optional user config path (defaults to `~/.pillminder/pillminder.json5`).
    pub user_config_path: Option<PathBuf>,
    /// Runtime override config paths applied after the discovered layers. These must exist.
    pub runtime_paths: Vec<PathBuf>,
    /// In-memory values (command-line flags) merged on top of every file.
    pub overrides: Option<Value>,
}

impl LayeredConfigOptions {
    /// Create options with default layer locations for the provided cwd.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            system_config_path: layer_io::default_system_config_path(),
            user_config_path: layer_io::default_user_config_path(),
            runtime_paths: Vec::new(),
            overrides: None,
        }
    }

    /// Add a runtime override config path that is applied last.
    pub fn with_runtime_path(mut self, path: impl AsRef<Path>) -> Self {
        self.runtime_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge `value` over all file layers before the config is validated.
    pub fn with_overrides(mut self, value: Value) -> Self {
        match &mut self.overrides {
            Some(existing) => merge::merge_json_values(existing, &value),
            None => self.overrides = Some(value),
        }
        self
    }
}

impl PillminderConfig {
    /// Load a single config from a path (no layering).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading config from path: {}", path.display());
        let layer = layer_io::load_required_layer(ConfigLayerSource::Runtime, path)?;
        config_from_value(layer.value)
    }

    /// Load a single config from JSON5 contents (no layering).
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value = layer_io::parse_layer(contents, "inline")?;
        schema::validate_layer_schema(&value, "inline")?;
        config_from_value(value)
    }

    /// Load a layered config stack using the default layer locations.
    pub fn load_layered(cwd: impl AsRef<Path>) -> Result<LayeredConfig, ConfigError> {
        Self::load_layered_with_options(LayeredConfigOptions::new(cwd))
    }

    /// Load a layered config stack using explicit layer locations and overrides.
    ///
    /// Layer precedence (low -> high): system, user, cwd, runtime files,
    /// in-memory overrides.
    /// Missing optional layers are skipped; a file reachable through two
    /// layers is only applied once.
    pub fn load_layered_with_options(
        options: LayeredConfigOptions,
    ) -> Result<LayeredConfig, ConfigError> {
        let mut layers = Vec::new();
        let mut merged = Value::Object(serde_json::Map::new());
        let mut seen_paths = HashSet::new();

        let cwd_path = options.cwd.join(DEFAULT_CONFIG_FILE);
        let optional = [
            (
                ConfigLayerSource::System,
                options.system_config_path.as_deref(),
            ),
            (ConfigLayerSource::User, options.user_config_path.as_deref()),
            (ConfigLayerSource::Cwd, Some(cwd_path.as_path())),
        ];

        for (source, path) in optional {
            let Some(path) = path else { continue };
            if !seen_paths.insert(unique_path(path)) {
                debug!("skipping duplicate layer (source={source:?}, path={})", path.display());
                continue;
            }
            if let Some(layer) = layer_io::load_optional_layer(source, path)? {
                merge::merge_json_values(&mut merged, &layer.value);
                layers.push(layer.meta);
            }
        }

        for path in &options.runtime_paths {
            let layer = layer_io::load_required_layer(ConfigLayerSource::Runtime, path)?;
            merge::merge_json_values(&mut merged, &layer.value);
            layers.push(layer.meta);
        }

        if let Some(overrides) = &options.overrides {
            schema::validate_layer_schema(overrides, OVERRIDES_LABEL)?;
            debug!("applying in-memory config overrides");
            merge::merge_json_values(&mut merged, overrides);
        }

        let config = config_from_value(merged)?;
        info!("layered config loaded (layers={})", layers.len());
        Ok(LayeredConfig { config, layers })
    }

    /// Validate invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        if self.completion.max_messages == 0 {
            return Err(ConfigError::invalid(
                "completion.max_messages",
                "must be greater than zero",
            ));
        }
        if self.completion.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "completion.timeout_secs",
                "must be greater than zero",
            ));
        }
        if self.completion.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid("completion.endpoint", "cannot be empty"));
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("store.path", "cannot be empty"));
        }
        Ok(())
    }
}

/// Internal representation of a loaded config layer.
#[derive(Debug, Clone)]
struct LoadedLayer {
    meta: ConfigLayer,
    value: Value,
}

fn config_from_value(value: Value) -> Result<PillminderConfig, ConfigError> {
    // Merging onto an empty object strips explicit nulls before decoding.
    let mut normalized = Value::Object(serde_json::Map::new());
    merge::merge_json_values(&mut normalized, &value);
    let config: PillminderConfig = serde_json::from_value(normalized)?;
    config.validate()?;
    Ok(config)
}

/// Stable path used to de-duplicate layers that resolve to the same file.
fn unique_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
