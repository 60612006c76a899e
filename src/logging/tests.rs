// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    assert_eq!(LogLevel::from_int(0), LogLevel::SILENT);
    assert_eq!(LogLevel::from_int(3), LogLevel::INFO);
    assert_eq!(LogLevel::from_int(5), LogLevel::TRACE);
    // Saturates at TRACE
    assert_eq!(LogLevel::from_int(100), LogLevel::TRACE);
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(7), None);
}

#[test]
fn test_log_level_filter_strings() {
    insta::assert_snapshot!(LogLevel::SILENT.to_filter_string(), @"off");
    insta::assert_snapshot!(LogLevel::WARN.to_filter_string(), @"warn");
    insta::assert_snapshot!(LogLevel::TRACE.to_filter_string(), @"trace");
}

#[test]
fn test_log_level_to_tracing_level() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(
        LogLevel::ERROR.to_tracing_level(),
        Some(tracing::Level::ERROR)
    );
    assert_eq!(
        LogLevel::DEBUG.to_tracing_level(),
        Some(tracing::Level::DEBUG)
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("build.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("build.log"));
}
