// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envfiles-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, FilesConfig
//! FilesConfig: directory_path, encoding, policy
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::loader::MergePolicy;
use crate::logging::{LogConfig, LogLevel};
use crate::utility::encoding::Encoding;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("envfiles.log"),
        }
    }
}

impl GlobalConfig {
    /// Bridges the global section into a logging configuration.
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.output_log_level)
            .with_file_level(self.file_log_level)
            .with_log_file(self.log_file.display().to_string())
            .build()
    }
}

/// Environment file loading options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    /// Directory to scan for `.properties` files; may contain one macro
    /// token. Unset means the workspace root placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<String>,
    /// Text encoding of the properties files.
    pub encoding: Encoding,
    /// How per-file failures aggregate.
    pub policy: MergePolicy,
}
