//! Settings resolution: launch file + environment overlay + derived paths.
//!
//! [`resolve`] is a pure function of its inputs. The ambient working and
//! home directories are passed in through [`ResolveContext`] instead of
//! being read from the process, so resolution can be tested against any
//! directory layout.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mlaunch_util::errors::{LaunchError, LaunchResult};
use serde::Serialize;

use crate::keys;
use crate::paths::{absolutize, display, expand_home, normalize};

/// Output directory used when `METEOR_OUTPUT_DIR` is unset.
pub const DEFAULT_OUTPUT_DIR: &str = ".build";

/// Ambient inputs to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    /// Absolute invocation directory.
    pub cwd: PathBuf,
    /// User home directory, if one is known.
    pub home: Option<PathBuf>,
}

impl ResolveContext {
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: normalize(&cwd.into()),
            home,
        }
    }

    /// Capture the current process's working and home directories.
    pub fn from_process() -> LaunchResult<Self> {
        let cwd = std::env::current_dir().map_err(LaunchError::Io)?;
        Ok(Self::new(cwd, dirs::home_dir()))
    }
}

/// Typed view of the derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    pub android_zipalign: Option<String>,
    pub meteor_input_dir: PathBuf,
    /// Kept as given (relative or absolute).
    pub meteor_output_dir: String,
    pub meteor_output_absolute: PathBuf,
    pub fl_report_path: PathBuf,
    /// `None` when `XCODE_SCHEME_NAME` is unset.
    pub xcode_project: Option<PathBuf>,
    pub sigh_output_path: PathBuf,
    pub gym_output_directory: PathBuf,
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, String>,
    #[serde(skip)]
    paths: DerivedPaths,
}

impl Settings {
    /// Raw value for `key`, including blank strings.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn paths(&self) -> &DerivedPaths {
        &self.paths
    }
}

/// Look up `key`, mapping absent and blank values to `None`.
fn field<'a>(map: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    map.get(key)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

/// Merge `launch_file` with `env` (env wins) and compute the derived fields.
pub fn resolve(
    launch_file: &BTreeMap<String, String>,
    env: &BTreeMap<String, String>,
    ctx: &ResolveContext,
) -> Settings {
    let mut values = launch_file.clone();
    values.extend(env.iter().map(|(k, v)| (k.clone(), v.clone())));

    let paths = derive(&values, ctx);
    tracing::debug!(?paths, "Derived build paths");

    if let Some(ref zipalign) = paths.android_zipalign {
        values.insert(keys::ANDROID_ZIPALIGN.to_string(), zipalign.clone());
    }
    values.insert(
        keys::METEOR_INPUT_DIR.to_string(),
        display(&paths.meteor_input_dir),
    );
    values.insert(
        keys::METEOR_OUTPUT_DIR.to_string(),
        paths.meteor_output_dir.clone(),
    );
    values.insert(
        keys::METEOR_OUTPUT_ABSOLUTE.to_string(),
        display(&paths.meteor_output_absolute),
    );
    values.insert(
        keys::FL_REPORT_PATH.to_string(),
        display(&paths.fl_report_path),
    );
    if let Some(ref project) = paths.xcode_project {
        values.insert(keys::XCODE_PROJECT.to_string(), display(project));
    }
    values.insert(
        keys::SIGH_OUTPUT_PATH.to_string(),
        display(&paths.sigh_output_path),
    );
    values.insert(
        keys::GYM_OUTPUT_DIRECTORY.to_string(),
        display(&paths.gym_output_directory),
    );

    Settings { values, paths }
}

fn derive(values: &BTreeMap<String, String>, ctx: &ResolveContext) -> DerivedPaths {
    let cwd = ctx.cwd.as_path();

    let android_zipalign =
        field(values, keys::ANDROID_ZIPALIGN).map(|raw| resolve_zipalign(raw, ctx));

    let meteor_input_dir = match field(values, keys::METEOR_INPUT_DIR) {
        Some(dir) => absolutize(cwd, dir),
        None => cwd.to_path_buf(),
    };

    let meteor_output_dir = field(values, keys::METEOR_OUTPUT_DIR)
        .unwrap_or(DEFAULT_OUTPUT_DIR)
        .to_string();
    let meteor_output_absolute = absolutize(cwd, &meteor_output_dir);

    let fl_report_path = meteor_output_absolute.join("ios");

    let xcode_project = match field(values, keys::XCODE_SCHEME_NAME) {
        Some(scheme) => Some(
            meteor_output_absolute
                .join("ios")
                .join("project")
                .join(format!("{scheme}.xcodeproj")),
        ),
        None => {
            tracing::debug!(
                "{} is unset; leaving {} out",
                keys::XCODE_SCHEME_NAME,
                keys::XCODE_PROJECT
            );
            None
        }
    };

    DerivedPaths {
        android_zipalign,
        meteor_input_dir,
        meteor_output_dir,
        meteor_output_absolute,
        fl_report_path,
        xcode_project,
        sigh_output_path: cwd.to_path_buf(),
        gym_output_directory: cwd.to_path_buf(),
    }
}

fn resolve_zipalign(raw: &str, ctx: &ResolveContext) -> String {
    match ctx.home.as_deref() {
        Some(home) => {
            if let Some(expanded) = expand_home(raw, home) {
                return display(&expanded);
            }
        }
        None if raw == "~" || raw.starts_with("~/") => {
            tracing::warn!(
                "{} is home-relative but no home directory is known",
                keys::ANDROID_ZIPALIGN
            );
            return raw.to_string();
        }
        None => {}
    }
    if Path::new(raw).is_absolute() {
        raw.to_string()
    } else {
        display(&absolutize(&ctx.cwd, raw))
    }
}
