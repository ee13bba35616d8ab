//! Per-tool load and save
//!
//! Each tool state implements [`ToolState`], which names its storage key and
//! the presence check a stored blob must pass before it is decoded.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use fetools_css::{ClampTypographyState, GradientState, ShadowGlassState};

use crate::{KeyValueStore, LoadOutcome, StoreError};

/// Storage key of the fluid typography tool.
pub const CLAMP_TYPOGRAPHY_KEY: &str = "fe-tools.clamp-typography.v1";
/// Storage key of the gradient tool.
pub const GRADIENT_KEY: &str = "fe-tools.gradient-generator";
/// Storage key of the shadow and glass tools.
pub const SHADOW_GLASS_KEY: &str = "fe-tools.shadow-glass.v1";

/// A tool state persisted as one JSON blob.
pub trait ToolState: Serialize + DeserializeOwned {
    /// Storage key for this tool.
    const KEY: &'static str;

    /// Check the raw blob before decoding. The default accepts anything.
    fn check_shape(_value: &Value) -> Result<(), String> {
        Ok(())
    }
}

impl ToolState for ClampTypographyState {
    const KEY: &'static str = CLAMP_TYPOGRAPHY_KEY;

    /// Viewport and typography bounds must be truthy and `unit` a string.
    fn check_shape(value: &Value) -> Result<(), String> {
        for pointer in [
            "/viewport/min",
            "/viewport/max",
            "/typography/min",
            "/typography/max",
            "/typography/base",
        ] {
            if !value.pointer(pointer).is_some_and(is_truthy) {
                return Err(format!("missing or empty field {pointer}"));
            }
        }
        if !value.get("unit").is_some_and(Value::is_string) {
            return Err("field /unit is not a string".to_string());
        }
        Ok(())
    }
}

/// Missing gradient fields fall back to defaults, so any object loads.
impl ToolState for GradientState {
    const KEY: &'static str = GRADIENT_KEY;
}

impl ToolState for ShadowGlassState {
    const KEY: &'static str = SHADOW_GLASS_KEY;
}

/// Browser truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read `T` from `store`.
pub fn load<T: ToolState>(store: &dyn KeyValueStore) -> LoadOutcome<T> {
    let raw = match store.get(T::KEY) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => {
            tracing::debug!("load: nothing stored under {}", T::KEY);
            return LoadOutcome::Absent;
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", T::KEY, e);
            return LoadOutcome::Corrupt(e.to_string());
        }
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", T::KEY, e);
            return LoadOutcome::Corrupt(format!("invalid json: {e}"));
        }
    };

    if let Err(reason) = T::check_shape(&value) {
        tracing::warn!("Discarding {}: {}", T::KEY, reason);
        return LoadOutcome::Corrupt(reason);
    }

    match serde_json::from_value(value) {
        Ok(state) => LoadOutcome::Loaded(state),
        Err(e) => {
            tracing::warn!("Failed to decode {}: {}", T::KEY, e);
            LoadOutcome::Corrupt(e.to_string())
        }
    }
}

/// Write `state` to `store` under its tool key.
pub fn save<T: ToolState>(store: &dyn KeyValueStore, state: &T) -> Result<(), StoreError> {
    let result = serde_json::to_string(state)
        .map_err(StoreError::from)
        .and_then(|json| store.set(T::KEY, &json));

    if let Err(e) = &result {
        tracing::error!("Failed to save {}: {}", T::KEY, e);
    }
    result
}
