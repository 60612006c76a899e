// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-build execution context.
//!
//! ```text
//! BuildContext
//!   build_id            for log correlation
//!   env                 the build's environment
//!   env_file_vars       captured at setup, reapplied on start
//! ```
//!
//! The captured map lives on the context of the one build it was loaded
//! for. Nothing is shared across builds, so concurrent builds cannot
//! observe each other's environment.

use crate::core::env::container::Env;

/// State owned by a single build execution.
#[derive(Debug, Clone)]
pub struct BuildContext {
    build_id: String,
    env: Env,
    env_file_vars: Option<Env>,
}

impl BuildContext {
    /// Creates a context for one build with its starting environment.
    #[must_use]
    pub fn new(build_id: impl Into<String>, env: Env) -> Self {
        Self {
            build_id: build_id.into(),
            env,
            env_file_vars: None,
        }
    }

    /// Identifier of the build this context belongs to.
    #[must_use]
    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    /// The build's current environment.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Mutable access to the build's environment.
    pub const fn env_mut(&mut self) -> &mut Env {
        &mut self.env
    }

    /// Stores the merged environment-file variables captured at setup.
    pub fn capture_env_file_vars(&mut self, vars: Env) {
        self.env_file_vars = Some(vars);
    }

    /// The captured environment-file variables, if setup ran.
    #[must_use]
    pub const fn env_file_vars(&self) -> Option<&Env> {
        self.env_file_vars.as_ref()
    }
}
