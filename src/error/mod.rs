// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvFilesError (~24 bytes)
//!                 |
//!     +------+----+----+--------+
//!     |      |         |        |
//!     v      v         v        v
//!    Cfg    Load     Parse   Io/Other
//!    Box    Box       Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  ReadError, ParseError, InvalidValue, NotFound
//!   Load    DirectoryNotFound, FileRead, FileParse
//!   Parse   UnterminatedContinuation, MalformedUnicodeEscape
//!
//! All variants boxed => EnvFilesError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvFilesError`].
pub type EnvFilesResult<T> = std::result::Result<T, EnvFilesError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvFilesError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Environment file loading error.
    #[error("load error: {0}")]
    Load(#[from] Box<LoadError>),

    /// Properties text parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvFilesError {
                fn from(err: $error) -> Self {
                    EnvFilesError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    LoadError => Load,
    ParseError => Parse,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Load Errors ---

/// Environment file loading errors.
///
/// One variant per failure kind the loader recognizes. None of these
/// escape the loader's `load` entry point as hard failures; they surface
/// through per-file outcomes and console diagnostics.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resolved directory does not exist or is not a directory.
    /// Treated as "zero candidate files", never fatal.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// Failed to read a candidate properties file.
    #[error("failed to read '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A candidate properties file is malformed.
    #[error("failed to parse '{path}': {source}")]
    FileParse {
        path: String,
        #[source]
        source: ParseError,
    },
}

// --- Parse Errors ---

/// Properties text parsing errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A logical line ends with a continuation backslash but no natural
    /// line follows it.
    #[error("unterminated line continuation at line {line}")]
    UnterminatedContinuation { line: usize },

    /// A `\uXXXX` escape with fewer than four hex digits.
    #[error("malformed \\u escape '{sequence}' at line {line}")]
    MalformedUnicodeEscape { line: usize, sequence: String },
}

#[cfg(test)]
mod tests;
