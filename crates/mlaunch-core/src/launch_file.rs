use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mlaunch_util::errors::{LaunchError, LaunchResult};
use serde_json::Value;

use crate::keys;
use crate::LAUNCH_FILE;

/// Path of the launch file inside `dir`.
pub fn launch_file_path(dir: &Path) -> PathBuf {
    dir.join(LAUNCH_FILE)
}

/// Parse launch file contents into a flat string map.
///
/// The top level must be a JSON object. Strings are taken verbatim, numbers
/// and booleans as their JSON text, nested arrays/objects as compact JSON.
/// `null` entries are dropped.
pub fn parse(content: &str) -> LaunchResult<BTreeMap<String, String>> {
    let value: Value = serde_json::from_str(content).map_err(|e| LaunchError::LaunchFile {
        message: format!("Failed to parse {LAUNCH_FILE}: {e}"),
    })?;

    let Value::Object(object) = value else {
        return Err(LaunchError::LaunchFile {
            message: format!("{LAUNCH_FILE} must contain a JSON object"),
        }
        .into());
    };

    let mut map = BTreeMap::new();
    for (key, value) in object {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string(),
        };
        map.insert(key, text);
    }
    Ok(map)
}

/// Load the launch file from `dir`.
///
/// A missing, unreadable, or malformed file yields an empty map: the caller
/// decides separately (see [`crate::gate`]) whether the file is required.
pub fn load(dir: &Path) -> BTreeMap<String, String> {
    let path = launch_file_path(dir);
    if !path.is_file() {
        tracing::debug!("No {} at {}", LAUNCH_FILE, path.display());
        return BTreeMap::new();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", path.display());
            return BTreeMap::new();
        }
    };

    match parse(&content) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!("Ignoring {}: {e}", path.display());
            BTreeMap::new()
        }
    }
}

/// Contents written by `mlaunch init`: every templated key set to `""`.
pub fn default_template() -> String {
    let object: serde_json::Map<String, Value> = keys::TEMPLATE
        .iter()
        .map(|key| (key.to_string(), Value::String(String::new())))
        .collect();
    format!("{:#}\n", Value::Object(object))
}
