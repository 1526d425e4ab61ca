//! Pillminder application wiring: CLI options, config resolution and startup.

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use pillminder_ai::{CompletionProxy, GeminiProvider};
use pillminder_config::{LayeredConfigOptions, PillminderConfig};
use pillminder_server::AppState;
use pillminder_store::{MedicineCatalog, SqliteReminderStore};
use serde_json::{Map, Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Command-line options for the Pillminder server.
#[derive(Debug, Default, Parser)]
#[command(name = "pillminder", version, about)]
pub struct Cli {
    /// Extra pillminder.json5 files, applied after the system, user and cwd layers
    #[arg(long)]
    pub config: Vec<PathBuf>,
    /// Listen address, e.g. 0.0.0.0:5000
    #[arg(long)]
    pub bind: Option<String>,
    /// Path to the SQLite reminders database
    #[arg(long)]
    pub db: Option<PathBuf>,
}

impl Cli {
    /// Layer locations for `cwd`, any `--config` files, and the flag overrides.
    pub fn config_options(&self, cwd: impl Into<PathBuf>) -> LayeredConfigOptions {
        let options = self
            .config
            .iter()
            .fold(LayeredConfigOptions::new(cwd.into()), |options, path| {
                options.with_runtime_path(path)
            });
        match self.overrides() {
            Some(overrides) => options.with_overrides(overrides),
            None => options,
        }
    }

    /// Load the layered config. Flags take precedence over every file and the
    /// result is validated once, after they are applied.
    pub fn resolve_config(&self, options: LayeredConfigOptions) -> anyhow::Result<PillminderConfig> {
        let layered = PillminderConfig::load_layered_with_options(options)
            .context("failed to load layered config")?;
        for layer in &layered.layers {
            debug!(
                "config layer applied (source={:?}, path={})",
                layer.source,
                layer.path.display()
            );
        }
        Ok(layered.config)
    }

    fn overrides(&self) -> Option<Value> {
        let mut overrides = Map::new();
        if let Some(bind) = &self.bind {
            overrides.insert("server".to_string(), json!({ "bind": bind }));
        }
        if let Some(db) = &self.db {
            overrides.insert(
                "store".to_string(),
                json!({ "path": db.to_string_lossy() }),
            );
        }
        (!overrides.is_empty()).then_some(Value::Object(overrides))
    }
}

/// Build shared application state from a resolved config.
pub fn build_state(config: &PillminderConfig) -> anyhow::Result<AppState> {
    let store = SqliteReminderStore::open(&config.store.path).with_context(|| {
        format!(
            "failed to open reminder store at {}",
            config.store.path.display()
        )
    })?;
    let provider =
        GeminiProvider::from_config(&config.completion).context("failed to build AI client")?;
    let completion = CompletionProxy::new(Arc::new(provider), config.completion.max_messages);
    let catalog = MedicineCatalog::builtin();
    info!(
        "application state ready (db={}, model={}, max_messages={}, medicines={})",
        config.store.path.display(),
        config.completion.model,
        config.completion.max_messages,
        catalog.len()
    );
    Ok(AppState::new(Arc::new(store), completion, catalog))
}

/// Bind the configured address and serve until a shutdown signal.
pub async fn run(config: PillminderConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let state = build_state(&config)?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    pillminder_server::serve(listener, state)
        .await
        .context("server error")
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use pillminder_config::LayeredConfigOptions;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn isolated(cli: &Cli, cwd: &Path) -> LayeredConfigOptions {
        let mut options = cli.config_options(cwd);
        options.system_config_path = None;
        options.user_config_path = None;
        options
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "pillminder",
            "--config",
            "a.json5",
            "--config",
            "b.json5",
            "--bind",
            "0.0.0.0:8080",
            "--db",
            "/tmp/r.db",
        ]);
        assert_eq!(
            cli.config,
            vec![PathBuf::from("a.json5"), PathBuf::from("b.json5")]
        );
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/r.db")));
    }

    #[test]
    fn flags_override_config_files() {
        let temp = tempdir().expect("tempdir");
        fs::write(
            temp.path().join("pillminder.json5"),
            r#"{ server: { bind: "127.0.0.1:7000" }, store: { path: "from-cwd.db" } }"#,
        )
        .expect("write cwd config");
        let runtime = temp.path().join("runtime.json5");
        fs::write(&runtime, r#"{ completion: { max_messages: 3 } }"#).expect("write runtime");

        let cli = Cli {
            config: vec![runtime],
            bind: None,
            db: Some(PathBuf::from("from-flag.db")),
        };
        let config = cli
            .resolve_config(isolated(&cli, temp.path()))
            .expect("config");
        assert_eq!(config.server.bind, "127.0.0.1:7000");
        assert_eq!(config.store.path, PathBuf::from("from-flag.db"));
        assert_eq!(config.completion.max_messages, 3);
    }

    #[test]
    fn flags_rescue_invalid_file_values() {
        let temp = tempdir().expect("tempdir");
        fs::write(
            temp.path().join("pillminder.json5"),
            r#"{ server: { bind: "bogus" }, store: { path: "" } }"#,
        )
        .expect("write cwd config");

        let cli = Cli {
            bind: Some("127.0.0.1:7000".to_string()),
            db: Some(PathBuf::from("rescued.db")),
            ..Cli::default()
        };
        let config = cli
            .resolve_config(isolated(&cli, temp.path()))
            .expect("flags override file values");
        assert_eq!(config.server.bind, "127.0.0.1:7000");
        assert_eq!(config.store.path, PathBuf::from("rescued.db"));
    }

    #[test]
    fn invalid_file_value_without_flag_still_fails() {
        let temp = tempdir().expect("tempdir");
        fs::write(
            temp.path().join("pillminder.json5"),
            r#"{ server: { bind: "bogus" } }"#,
        )
        .expect("write cwd config");
        let cli = Cli::default();
        let err = cli
            .resolve_config(isolated(&cli, temp.path()))
            .expect_err("bad bind");
        assert!(format!("{err:#}").contains("server.bind"), "{err:#}");
    }

    #[test]
    fn invalid_bind_flag_is_rejected() {
        let temp = tempdir().expect("tempdir");
        let cli = Cli {
            bind: Some("not an address".to_string()),
            ..Cli::default()
        };
        let err = cli
            .resolve_config(isolated(&cli, temp.path()))
            .expect_err("bad bind");
        assert!(format!("{err:#}").contains("server.bind"), "{err:#}");
    }

    #[test]
    fn missing_runtime_config_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let cli = Cli {
            config: vec![temp.path().join("absent.json5")],
            ..Cli::default()
        };
        assert!(cli.resolve_config(isolated(&cli, temp.path())).is_err());
    }
}
