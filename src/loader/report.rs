// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-file load outcomes and merge policies.
//!
//! ```text
//! LoadReport
//!   resolved_dir, directory_missing
//!   outcomes: [FileOutcome]        one per candidate file
//!        |
//!        v
//!   apply(base, policy) --> Env
//!   AllOrNothing: any failure discards the whole batch
//!   BestEffort:   failed files skipped, the rest merge
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;
use crate::error::LoadError;

/// How per-file failures aggregate into the merged result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// A failure on any file discards every file's contribution from the
    /// batch; the caller's map is returned unchanged. The historical
    /// behavior and the default.
    #[default]
    AllOrNothing,
    /// Failed files are skipped; pairs from files that read and parsed
    /// cleanly are merged.
    BestEffort,
}

/// The outcome of reading and parsing one candidate file.
#[derive(Debug)]
pub struct FileOutcome {
    path: PathBuf,
    result: Result<Vec<(String, String)>, LoadError>,
}

impl FileOutcome {
    pub(super) const fn new(path: PathBuf, result: Result<Vec<(String, String)>, LoadError>) -> Self {
        Self { path, result }
    }

    /// Path of the candidate file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed pairs, or the failure for this file.
    #[must_use]
    pub const fn result(&self) -> &Result<Vec<(String, String)>, LoadError> {
        &self.result
    }

    /// True when the file read and parsed cleanly.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Number of pairs parsed from this file (0 on failure).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.result.as_ref().map_or(0, Vec::len)
    }
}

/// Result of one batch load: every candidate file's outcome plus the
/// resolved scan location.
///
/// The report never decides the aggregation policy itself; callers pick
/// one through [`LoadReport::apply`].
#[derive(Debug)]
pub struct LoadReport {
    resolved_dir: PathBuf,
    directory_missing: bool,
    outcomes: Vec<FileOutcome>,
}

impl LoadReport {
    pub(super) const fn new(
        resolved_dir: PathBuf,
        directory_missing: bool,
        outcomes: Vec<FileOutcome>,
    ) -> Self {
        Self {
            resolved_dir,
            directory_missing,
            outcomes,
        }
    }

    /// The directory that was scanned, after macro expansion.
    #[must_use]
    pub fn resolved_dir(&self) -> &Path {
        &self.resolved_dir
    }

    /// True when the resolved directory did not exist (zero candidates).
    #[must_use]
    pub const fn directory_missing(&self) -> bool {
        self.directory_missing
    }

    /// Per-file outcomes, in the deterministic candidate order.
    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// True when any candidate file failed to read or parse.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_ok())
    }

    /// Total pairs parsed across successful files.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.outcomes.iter().map(FileOutcome::pair_count).sum()
    }

    /// Merges the batch into a copy of `base` under the given policy.
    ///
    /// `base` itself is never mutated. Outcomes are applied in candidate
    /// order, so on a key collision the last file processed wins.
    #[must_use]
    pub fn apply(&self, base: &Env, policy: MergePolicy) -> Env {
        if policy == MergePolicy::AllOrNothing && self.has_failures() {
            return base.clone();
        }

        let mut merged = base.clone();
        for outcome in &self.outcomes {
            if let Ok(pairs) = outcome.result() {
                merged.merge_pairs(pairs.iter().cloned());
            }
        }
        merged
    }
}
