use std::collections::BTreeMap;
use std::process::ExitCode;

use miette::Result;

use mlaunch_core::keys;
use mlaunch_util::errors::LaunchError;

use super::Session;

const MASK: &str = "********";

pub fn exec(session: &Session, reveal: bool, all: bool, json: bool) -> Result<ExitCode> {
    let shown: BTreeMap<&str, &str> = session
        .settings
        .iter()
        .filter(|(key, _)| {
            all || session.launch_file.contains_key(*key) || keys::DERIVED.contains(key)
        })
        .map(|(key, value)| {
            let display = if !reveal && keys::is_secret(key) && !value.is_empty() {
                MASK
            } else {
                value
            };
            (key, display)
        })
        .collect();

    if json {
        let text = serde_json::to_string_pretty(&shown).map_err(|e| LaunchError::Generic {
            message: format!("Failed to serialize settings: {e}"),
        })?;
        println!("{text}");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Resolved settings ({} entries):", shown.len());
    for (key, value) in &shown {
        println!("  {} = {}", console::style(key).bold(), value);
    }
    Ok(ExitCode::SUCCESS)
}
