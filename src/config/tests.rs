// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::loader::MergePolicy;
use crate::logging::LogLevel;
use crate::utility::encoding::Encoding;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, PathBuf::from("envfiles.log"));
    assert_eq!(config.files.directory_path, None);
    assert_eq!(config.files.encoding, Encoding::Utf8);
    assert_eq!(config.files.policy, MergePolicy::AllOrNothing);
}

#[test]
fn test_parse_files_section() {
    let toml = r#"
[files]
directory_path = "$WORKSPACE/env"
encoding = "latin1"
policy = "best-effort"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(
        config.files.directory_path.as_deref(),
        Some("$WORKSPACE/env")
    );
    assert_eq!(config.files.encoding, Encoding::Latin1);
    assert_eq!(config.files.policy, MergePolicy::BestEffort);
}

#[test]
fn test_parse_global_section() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "custom.log"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, PathBuf::from("custom.log"));
    // Untouched field keeps its default
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
}

#[test]
fn test_parse_rejects_unknown_files_key() {
    let toml = r#"
[files]
directry_path = "/typo"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let toml = "
[global]
output_log_level = 9
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_parse_rejects_unknown_policy() {
    let toml = r#"
[files]
policy = "sometimes"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_programmatic_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[files]\ndirectory_path = \"/from-toml\"\n")
        .set("files.directory_path", "/override")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.files.directory_path.as_deref(), Some("/override"));
}

#[test]
fn test_loaded_files_listing() {
    let loader = ConfigLoader::new().add_toml_str("[global]\n");
    let listing = loader.format_loaded_files();
    assert_eq!(listing, vec!["1. [string] <string>".to_string()]);
}

#[test]
fn test_to_log_config_bridge() {
    let config = Config::parse("[global]\noutput_log_level = 2\n").unwrap();
    let log_config = config.global.to_log_config();
    assert_eq!(log_config.console_level(), LogLevel::WARN);
    assert_eq!(log_config.log_file(), Some("envfiles.log"));
}
