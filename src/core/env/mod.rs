// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set/get/remove/merge/merge_pairs
//! ```
//!
//! - **Case-insensitive on Windows**
//! - **Copy-on-write**: Clones share data until modified
//! - **UTF-8 internal**: Encoding at I/O boundaries only

pub mod container;
pub mod types;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars().collect();
    container::Env::from_map(vars)
}
