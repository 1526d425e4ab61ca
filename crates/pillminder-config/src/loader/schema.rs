//! Schema checks for Pillminder JSON5 configuration layers.
//!
//! Layers are partial: every key is optional, but unknown keys and values of
//! the wrong type are rejected with the layer label and dotted path.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Validate a single config layer against the schema.
pub(super) fn validate_layer_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, "")?;
    ensure_allowed_keys(map, &["$schema", "server", "store", "completion"], layer, "")?;

    if let Some(value) = non_null(map, "$schema") {
        expect_string(value, layer, "$schema")?;
    }
    if let Some(value) = non_null(map, "server") {
        validate_server(value, layer, "server")?;
    }
    if let Some(value) = non_null(map, "store") {
        validate_store(value, layer, "store")?;
    }
    if let Some(value) = non_null(map, "completion") {
        validate_completion(value, layer, "completion")?;
    }
    Ok(())
}

fn validate_server(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["bind"], layer, path)?;
    if let Some(value) = non_null(map, "bind") {
        expect_string(value, layer, &join_path(path, "bind"))?;
    }
    Ok(())
}

fn validate_store(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["path"], layer, path)?;
    if let Some(value) = non_null(map, "path") {
        expect_string(value, layer, &join_path(path, "path"))?;
    }
    Ok(())
}

fn validate_completion(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    let allowed = [
        "endpoint",
        "model",
        "api_key_env",
        "max_messages",
        "timeout_secs",
    ];
    ensure_allowed_keys(map, &allowed, layer, path)?;

    for key in ["endpoint", "model", "api_key_env"] {
        if let Some(value) = non_null(map, key) {
            expect_string(value, layer, &join_path(path, key))?;
        }
    }
    for key in ["max_messages", "timeout_secs"] {
        if let Some(value) = non_null(map, key) {
            expect_u64(value, layer, &join_path(path, key))?;
        }
    }
    Ok(())
}

fn expect_object<'a>(
    value: &'a Value,
    layer: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(layer, path, "expected object")),
    }
}

fn expect_string(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.is_string() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected string"))
    }
}

/// Non-negative integers only; `max_messages: -1` is a type error here
/// rather than a decode failure later.
fn expect_u64(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.is_u64() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected non-negative integer"))
    }
}

fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    layer: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(layer, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn invalid_field(layer: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::invalid(&format!("{layer}:{normalized_path}"), message)
}

/// Look up a key, treating an explicit `null` (a reset to default) as absent.
fn non_null<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}
