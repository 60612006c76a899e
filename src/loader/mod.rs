// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory-scoped environment file loading.
//!
//! # Load Pipeline
//!
//! ```text
//! EnvFileLoader::load(current, console)
//!        |
//!        v
//! resolve path ($WORKSPACE default, macro expansion)
//!        |
//!        v
//! scan direct children  *.properties, sorted by name
//!        |
//!        v
//! read + parse each     per-file FileOutcome
//!        |
//!        v
//! apply(MergePolicy)    merge into a COPY of current
//! ```
//!
//! `load` never fails: every failure degrades to returning the caller's
//! map unchanged, with diagnostics on the build console. `try_load`
//! exposes the per-file outcomes for callers that want their own policy.

pub mod report;


use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::types::FilesConfig;
use crate::core::env::container::Env;
use crate::error::{EnvFilesResult, LoadError};
use crate::lifecycle::console::Console;
use crate::properties;
use crate::utility::encoding::Encoding;
use crate::utility::expand::expand;

pub use report::{FileOutcome, LoadReport, MergePolicy};

/// Placeholder used when no directory path is configured.
pub const DEFAULT_PATH: &str = "$WORKSPACE";

/// Candidate files must carry this suffix, checked on the file name only.
pub const PROPERTIES_SUFFIX: &str = ".properties";

/// Prefix for build console diagnostics.
const CONSOLE_PREFIX: &str = "[envfile] ";

/// Loads environment variables from `.properties` files in a directory.
///
/// # Example
///
/// ```no_run
/// use envfiles_rs::core::env::container::Env;
/// use envfiles_rs::lifecycle::console::TracingConsole;
/// use envfiles_rs::loader::EnvFileLoader;
///
/// let loader = EnvFileLoader::builder()
///     .with_directory_path("$WORKSPACE/env".to_string())
///     .build();
///
/// let mut current = Env::new();
/// current.set("WORKSPACE", "/build/ws");
/// let merged = loader.load(&current, &TracingConsole);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct EnvFileLoader {
    /// Directory to scan; may contain macro tokens. Empty or unset means
    /// the workspace root placeholder.
    #[builder(setters(name = with_directory_path))]
    directory_path: Option<String>,
    #[builder(setters(name = with_encoding), default)]
    encoding: Encoding,
    #[builder(setters(name = with_policy), default)]
    policy: MergePolicy,
}

impl Default for EnvFileLoader {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EnvFileLoader {
    /// Builds a loader from the `[files]` configuration section.
    #[must_use]
    pub fn from_config(config: &FilesConfig) -> Self {
        Self {
            directory_path: config.directory_path.clone(),
            encoding: config.encoding,
            policy: config.policy,
        }
    }

    /// The configured directory path, if any.
    #[must_use]
    pub fn directory_path(&self) -> Option<&str> {
        self.directory_path.as_deref()
    }

    /// The text encoding used to read candidate files.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The configured aggregation policy.
    #[must_use]
    pub const fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Loads and merges environment files into a copy of `current`.
    ///
    /// Never fails and never mutates `current`: any failure is written to
    /// the console and, under the configured policy, degrades to
    /// returning `current` unchanged.
    #[must_use]
    pub fn load(&self, current: &Env, console: &dyn Console) -> Env {
        match self.try_load(current, console) {
            Ok(report) => {
                if report.has_failures() && self.policy == MergePolicy::AllOrNothing {
                    console_line(console, "Keeping the build environment unchanged");
                }
                report.apply(current, self.policy)
            }
            Err(err) => {
                console_line(console, &format!("An error has occurred: {err}"));
                warn!(error = %err, "environment file batch aborted");
                current.clone()
            }
        }
    }

    /// Scans, reads and parses candidate files, reporting per-file
    /// outcomes without merging.
    ///
    /// A missing directory is not an error: the report comes back with
    /// zero outcomes and `directory_missing` set.
    ///
    /// # Errors
    ///
    /// Returns an error when the resolved directory exists but cannot be
    /// listed (for example, permission denied).
    pub fn try_load(&self, current: &Env, console: &dyn Console) -> EnvFilesResult<LoadReport> {
        let configured = self
            .directory_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_PATH);
        let resolved = expand(configured, current);
        console_line(console, &format!("Loading properties from: {resolved}"));
        debug!(path = %resolved, "scanning for properties files");

        let dir = PathBuf::from(&resolved);
        let candidates = match list_properties_files(&dir) {
            Ok(candidates) => candidates,
            Err(LoadError::DirectoryNotFound { path }) => {
                console_line(console, &format!("Directory not found: {path}"));
                warn!(path = %path, "properties directory missing, nothing to load");
                return Ok(LoadReport::new(dir, true, Vec::new()));
            }
            Err(other) => return Err(other.into()),
        };

        let mut outcomes = Vec::with_capacity(candidates.len());
        for path in candidates {
            let name = file_name(&path);
            console_line(console, &format!("Reading: {name}"));
            let outcome = FileOutcome::new(path.clone(), read_properties(&path, self.encoding));
            if let Err(err) = outcome.result() {
                console_line(console, &format!("Unable to load {name}: {err}"));
                warn!(file = %path.display(), error = %err, "environment file failed");
            } else {
                debug!(file = %path.display(), pairs = outcome.pair_count(), "environment file loaded");
            }
            outcomes.push(outcome);
        }

        Ok(LoadReport::new(dir, false, outcomes))
    }
}

/// The suffix predicate: is this file name a properties file?
#[must_use]
pub fn is_properties_file(name: &str) -> bool {
    name.ends_with(PROPERTIES_SUFFIX)
}

/// Lists the direct children of `dir` whose name carries the properties
/// suffix, sorted by file name so cross-file override order is
/// deterministic. Not recursive.
fn list_properties_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => {
            LoadError::DirectoryNotFound {
                path: dir.display().to_string(),
            }
        }
        _ => LoadError::FileRead {
            path: dir.display().to_string(),
            source,
        },
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::FileRead {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_properties_file)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads and parses one properties file. The handle is released on every
/// exit path.
fn read_properties(
    path: &Path,
    encoding: Encoding,
) -> Result<Vec<(String, String)>, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    properties::parse_bytes(encoding, &bytes).map_err(|source| LoadError::FileParse {
        path: path.display().to_string(),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn console_line(console: &dyn Console, message: &str) {
    console.write_line(&format!("{CONSOLE_PREFIX}{message}"));
}
