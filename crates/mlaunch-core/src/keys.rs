//! Setting names recognized by the resolver.

pub const ANDROID_ZIPALIGN: &str = "ANDROID_ZIPALIGN";
pub const METEOR_INPUT_DIR: &str = "METEOR_INPUT_DIR";
pub const METEOR_OUTPUT_DIR: &str = "METEOR_OUTPUT_DIR";
pub const METEOR_OUTPUT_ABSOLUTE: &str = "METEOR_OUTPUT_ABSOLUTE";
pub const FL_REPORT_PATH: &str = "FL_REPORT_PATH";
pub const XCODE_PROJECT: &str = "XCODE_PROJECT";
pub const XCODE_SCHEME_NAME: &str = "XCODE_SCHEME_NAME";
pub const SIGH_OUTPUT_PATH: &str = "SIGH_OUTPUT_PATH";
pub const GYM_OUTPUT_DIRECTORY: &str = "GYM_OUTPUT_DIRECTORY";

/// Keys computed by the resolver rather than read verbatim.
pub const DERIVED: &[&str] = &[
    ANDROID_ZIPALIGN,
    METEOR_INPUT_DIR,
    METEOR_OUTPUT_DIR,
    METEOR_OUTPUT_ABSOLUTE,
    FL_REPORT_PATH,
    XCODE_PROJECT,
    SIGH_OUTPUT_PATH,
    GYM_OUTPUT_DIRECTORY,
];

/// Keys written (empty) into a freshly initialized launch file.
pub const TEMPLATE: &[&str] = &[
    "ANDROID_KEY",
    "ANDROID_KEYSTORE",
    "ANDROID_KEYSTORE_PASSWORD",
    ANDROID_ZIPALIGN,
    "APP_IDENTIFIER",
    "APPLE_ID",
    "APPLE_TEAM_ID",
    METEOR_INPUT_DIR,
    METEOR_OUTPUT_DIR,
    "ROOT_URL",
    XCODE_SCHEME_NAME,
];

/// Whether a key probably holds a credential and should be masked on display.
pub fn is_secret(key: &str) -> bool {
    let upper = key.to_ascii_uppercase();
    ["PASS", "SECRET", "TOKEN"]
        .iter()
        .any(|needle| upper.contains(needle))
}
