// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build lifecycle integration.
//!
//! # Architecture
//!
//! ```text
//! host build lifecycle
//!   |                          |
//!   v  before start            v  after start
//! BuildWrapper::set_up       RunListener::on_started
//!   EnvFilesWrapper            EnvFilesRunListener
//!   load + capture + merge     reapply captured vars
//!          \                  /
//!           v                v
//!          BuildContext (per build)
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`BuildContext`] | Per-build state: environment + captured vars |
//! | [`BuildWrapper`] | Hook invoked once per build before execution |
//! | [`EnvFilesWrapper`] | Loads env files and captures them on the context |
//! | [`RunListener`] | Hook invoked after a build has started |
//! | [`EnvFilesRunListener`] | Reapplies the captured vars to the build |
//! | [`Console`] | The host console/log sink contract |

pub mod console;
pub mod context;


use tracing::debug;

use crate::config::Config;
use crate::loader::EnvFileLoader;

pub use console::{BufferConsole, Console, TracingConsole};
pub use context::BuildContext;

/// A hook the host invokes once per build, before execution starts.
pub trait BuildWrapper {
    /// Prepares the build's environment on its context.
    fn set_up(&self, ctx: &mut BuildContext, console: &dyn Console);
}

/// A hook the host invokes after a build has started.
pub trait RunListener {
    /// Reacts to the build having started.
    fn on_started(&self, ctx: &mut BuildContext, console: &dyn Console);
}

/// Sets environment variables from files in a configured directory.
///
/// Before the build starts, loads the directory's `.properties` files,
/// merges them over the build's environment, stores the merged map on
/// the [`BuildContext`] and applies it to the build.
#[derive(Debug, Clone, Default)]
pub struct EnvFilesWrapper {
    loader: EnvFileLoader,
}

impl EnvFilesWrapper {
    #[must_use]
    pub const fn new(loader: EnvFileLoader) -> Self {
        Self { loader }
    }

    /// Builds the wrapper from application configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(EnvFileLoader::from_config(&config.files))
    }

    /// The underlying loader.
    #[must_use]
    pub const fn loader(&self) -> &EnvFileLoader {
        &self.loader
    }
}

impl BuildWrapper for EnvFilesWrapper {
    fn set_up(&self, ctx: &mut BuildContext, console: &dyn Console) {
        debug!(build = %ctx.build_id(), "reading environment variables from directory");
        let merged = self.loader.load(ctx.env(), console);
        ctx.env_mut().merge(&merged);
        ctx.capture_env_file_vars(merged);
    }
}

/// Reapplies the environment captured at setup once the build starts.
///
/// The variables come back from the same build's context, never from
/// shared state, so concurrent builds stay isolated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvFilesRunListener;

impl EnvFilesRunListener {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RunListener for EnvFilesRunListener {
    fn on_started(&self, ctx: &mut BuildContext, console: &dyn Console) {
        match ctx.env_file_vars().cloned() {
            Some(vars) => {
                debug!(build = %ctx.build_id(), vars = vars.len(), "reapplying captured environment");
                ctx.env_mut().merge(&vars);
            }
            None => {
                console.write_line("[envfile] No captured environment for this build");
                debug!(build = %ctx.build_id(), "no captured environment to reapply");
            }
        }
    }
}
