// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvFilesError, EnvFilesResult, LoadError, ParseError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "files".to_string(),
        key: "encoding".to_string(),
        message: "expected 'utf8', 'latin1', or 'acp'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'encoding' in section '[files]': expected 'utf8', 'latin1', or 'acp'"
    );
}

#[test]
fn test_load_error_display() {
    let err = LoadError::DirectoryNotFound {
        path: "/build/workspace/env".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"directory not found: /build/workspace/env");
}

#[test]
fn test_parse_error_display() {
    let err = ParseError::UnterminatedContinuation { line: 7 };
    insta::assert_snapshot!(err.to_string(), @"unterminated line continuation at line 7");

    let err = ParseError::MalformedUnicodeEscape {
        line: 2,
        sequence: "\\u00g1".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @r"malformed \u escape '\u00g1' at line 2");
}

#[test]
fn test_envfiles_error_size() {
    // EnvFilesError should be reasonably small
    // Box<str> variant (Other) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<EnvFilesError>();
    assert!(size <= 24, "EnvFilesError is {size} bytes, expected <= 24");
}

#[test]
fn test_envfiles_result_size() {
    // Result<(), EnvFilesError> should be reasonably small
    let size = std::mem::size_of::<EnvFilesResult<()>>();
    assert!(size <= 24, "EnvFilesResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_boxed_conversion() {
    let err: EnvFilesError = ParseError::UnterminatedContinuation { line: 1 }.into();
    assert!(matches!(err, EnvFilesError::Parse(_)));

    let err: EnvFilesError = LoadError::DirectoryNotFound {
        path: "/missing".to_string(),
    }
    .into();
    assert!(matches!(err, EnvFilesError::Load(_)));
}
