// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment management.
//!
//! ```text
//!        core
//!         |
//!         v
//!        env
//!         |
//!        Env
//!   copy-on-write
//! ```

pub mod env;
