// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build console sinks.
//!
//! ```text
//! Console: write_line(&str)
//!   TracingConsole --> tracing::info!
//!   BufferConsole  --> Mutex<Vec<String>>  (tests, embedding)
//! ```

use std::sync::Mutex;
use tracing::info;

/// The host console/log sink a build exposes to its lifecycle hooks.
///
/// Diagnostic lines written here are advisory only; they never affect
/// the loaded environment.
pub trait Console: Send + Sync {
    /// Writes one human-readable line to the build console.
    fn write_line(&self, line: &str);
}

/// Routes console lines to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn write_line(&self, line: &str) {
        info!("{line}");
    }
}

/// Collects console lines in memory.
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the lines written so far.
    ///
    /// # Panics
    ///
    /// Panics if a writer panicked while holding the buffer lock.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("console buffer poisoned").clone()
    }
}

impl Console for BufferConsole {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .expect("console buffer poisoned")
            .push(line.to_string());
    }
}
