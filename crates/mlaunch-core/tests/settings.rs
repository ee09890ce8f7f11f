#![cfg(unix)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use mlaunch_core::keys;
use mlaunch_core::settings::{resolve, ResolveContext, Settings};

fn ctx() -> ResolveContext {
    ResolveContext::new("/work/app", Some(PathBuf::from("/home/dev")))
}

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn resolve_file(pairs: &[(&str, &str)]) -> Settings {
    resolve(&map(pairs), &BTreeMap::new(), &ctx())
}

#[test]
fn test_unknown_keys_pass_through() {
    let settings = resolve_file(&[("ANDROID_ZIPALIGN", "/nonsense"), ("WOW", "such")]);
    assert_eq!(settings.get("WOW"), Some("such"));
}

#[test]
fn test_env_overrides_launch_file() {
    let file = map(&[("METEOR_OUTPUT_DIR", "something"), ("ROOT_URL", "https://a")]);
    let env = map(&[("METEOR_OUTPUT_DIR", "nothing")]);
    let settings = resolve(&file, &env, &ctx());
    assert_eq!(settings.get(keys::METEOR_OUTPUT_DIR), Some("nothing"));
    assert_eq!(settings.get("ROOT_URL"), Some("https://a"));
}

#[test]
fn test_env_overrides_every_plain_key() {
    let file = map(&[("A", "file"), ("B", "file"), ("C", "file")]);
    let env = map(&[("A", "env"), ("C", ""), ("D", "env")]);
    let settings = resolve(&file, &env, &ctx());
    assert_eq!(settings.get("A"), Some("env"));
    assert_eq!(settings.get("B"), Some("file"));
    assert_eq!(settings.get("C"), Some(""));
    assert_eq!(settings.get("D"), Some("env"));
}

#[test]
fn test_empty_inputs_use_defaults() {
    let settings = resolve_file(&[]);
    assert_eq!(settings.get(keys::METEOR_INPUT_DIR), Some("/work/app"));
    assert_eq!(settings.get(keys::METEOR_OUTPUT_DIR), Some(".build"));
    assert_eq!(
        settings.get(keys::METEOR_OUTPUT_ABSOLUTE),
        Some("/work/app/.build")
    );
    assert_eq!(settings.get(keys::FL_REPORT_PATH), Some("/work/app/.build/ios"));
    assert_eq!(settings.get(keys::SIGH_OUTPUT_PATH), Some("/work/app"));
    assert_eq!(settings.get(keys::GYM_OUTPUT_DIRECTORY), Some("/work/app"));
    assert!(!settings.contains_key(keys::ANDROID_ZIPALIGN));
}

#[test]
fn test_zipalign_absolute_passes_through() {
    let settings = resolve_file(&[("ANDROID_ZIPALIGN", "/meow")]);
    assert_eq!(settings.get(keys::ANDROID_ZIPALIGN), Some("/meow"));
}

#[test]
fn test_zipalign_home_relative_expands() {
    let settings = resolve_file(&[("ANDROID_ZIPALIGN", "~/meow")]);
    assert_eq!(settings.get(keys::ANDROID_ZIPALIGN), Some("/home/dev/meow"));
}

#[test]
fn test_zipalign_relative_resolves_against_cwd() {
    let settings = resolve_file(&[("ANDROID_ZIPALIGN", "../meow")]);
    assert_eq!(settings.get(keys::ANDROID_ZIPALIGN), Some("/work/meow"));
}

#[test]
fn test_zipalign_backslash_tilde_is_relative() {
    let settings = resolve_file(&[("ANDROID_ZIPALIGN", "~\\meow")]);
    assert_eq!(settings.get(keys::ANDROID_ZIPALIGN), Some("/work/app/~\\meow"));
}

#[test]
fn test_zipalign_env_value_wins() {
    let file = map(&[("ANDROID_ZIPALIGN", "/nonsense")]);
    let env = map(&[("ANDROID_ZIPALIGN", "~/meow")]);
    let settings = resolve(&file, &env, &ctx());
    assert_eq!(settings.get(keys::ANDROID_ZIPALIGN), Some("/home/dev/meow"));
}

#[test]
fn test_zipalign_blank_is_left_alone() {
    let settings = resolve_file(&[("ANDROID_ZIPALIGN", "")]);
    assert_eq!(settings.get(keys::ANDROID_ZIPALIGN), Some(""));
    assert_eq!(settings.paths().android_zipalign, None);
}

#[test]
fn test_zipalign_without_home_is_kept() {
    let ctx = ResolveContext::new("/work/app", None);
    let settings = resolve(&map(&[("ANDROID_ZIPALIGN", "~/meow")]), &BTreeMap::new(), &ctx);
    assert_eq!(settings.get(keys::ANDROID_ZIPALIGN), Some("~/meow"));
}

#[test]
fn test_input_dir_blank_defaults_to_cwd() {
    let settings = resolve_file(&[("METEOR_INPUT_DIR", "")]);
    assert_eq!(settings.get(keys::METEOR_INPUT_DIR), Some("/work/app"));
}

#[test]
fn test_input_dir_whitespace_counts_as_blank() {
    let settings = resolve_file(&[("METEOR_INPUT_DIR", "   ")]);
    assert_eq!(settings.get(keys::METEOR_INPUT_DIR), Some("/work/app"));
}

#[test]
fn test_input_dir_resolved_when_set() {
    let settings = resolve_file(&[("METEOR_INPUT_DIR", "nonsense")]);
    assert_eq!(settings.get(keys::METEOR_INPUT_DIR), Some("/work/app/nonsense"));
}

#[test]
fn test_output_dir_blank_defaults_to_build() {
    let settings = resolve_file(&[("METEOR_OUTPUT_DIR", "")]);
    assert_eq!(settings.get(keys::METEOR_OUTPUT_DIR), Some(".build"));
    assert_eq!(
        settings.get(keys::METEOR_OUTPUT_ABSOLUTE),
        Some("/work/app/.build")
    );
}

#[test]
fn test_output_dir_kept_as_given() {
    let settings = resolve_file(&[("METEOR_OUTPUT_DIR", "../nonsense")]);
    assert_eq!(settings.get(keys::METEOR_OUTPUT_DIR), Some("../nonsense"));
    assert_eq!(
        settings.get(keys::METEOR_OUTPUT_ABSOLUTE),
        Some("/work/nonsense")
    );
    assert_eq!(settings.get(keys::FL_REPORT_PATH), Some("/work/nonsense/ios"));
}

#[test]
fn test_absolute_output_dir() {
    let settings = resolve_file(&[("METEOR_OUTPUT_DIR", "/tmp/out/")]);
    assert_eq!(settings.get(keys::METEOR_OUTPUT_DIR), Some("/tmp/out/"));
    assert_eq!(settings.get(keys::METEOR_OUTPUT_ABSOLUTE), Some("/tmp/out"));
}

#[test]
fn test_xcode_project_default_output() {
    let settings = resolve_file(&[("XCODE_SCHEME_NAME", "scheme")]);
    assert_eq!(
        settings.get(keys::XCODE_PROJECT),
        Some("/work/app/.build/ios/project/scheme.xcodeproj")
    );
}

#[test]
fn test_xcode_project_custom_output() {
    let settings = resolve_file(&[
        ("XCODE_SCHEME_NAME", "scheme"),
        ("METEOR_OUTPUT_DIR", "../nonsense"),
    ]);
    assert_eq!(
        settings.get(keys::XCODE_PROJECT),
        Some("/work/nonsense/ios/project/scheme.xcodeproj")
    );
}

#[test]
fn test_xcode_project_omitted_without_scheme() {
    let settings = resolve_file(&[]);
    assert!(!settings.contains_key(keys::XCODE_PROJECT));
    assert_eq!(settings.paths().xcode_project, None);
}

#[test]
fn test_derived_keys_override_stale_file_values() {
    let settings = resolve_file(&[
        ("METEOR_OUTPUT_ABSOLUTE", "/stale"),
        ("SIGH_OUTPUT_PATH", "/stale"),
    ]);
    assert_eq!(
        settings.get(keys::METEOR_OUTPUT_ABSOLUTE),
        Some("/work/app/.build")
    );
    assert_eq!(settings.get(keys::SIGH_OUTPUT_PATH), Some("/work/app"));
}

#[test]
fn test_typed_paths_match_map() {
    let settings = resolve_file(&[("XCODE_SCHEME_NAME", "App")]);
    let paths = settings.paths();
    assert_eq!(paths.meteor_input_dir, PathBuf::from("/work/app"));
    assert_eq!(paths.meteor_output_absolute, PathBuf::from("/work/app/.build"));
    assert_eq!(
        paths.xcode_project.as_deref(),
        Some(std::path::Path::new(
            "/work/app/.build/ios/project/App.xcodeproj"
        ))
    );
}

#[test]
fn test_serializes_as_flat_map() {
    let settings = resolve_file(&[("WOW", "such")]);
    let json: serde_json::Value = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["WOW"], "such");
    assert_eq!(json["METEOR_OUTPUT_DIR"], ".build");
}
