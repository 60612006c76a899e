// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the build lifecycle hooks.
//!
//! Drives the wrapper and listener the way a host build orchestrator
//! would, one context per build.

use envfiles_rs::config::Config;
use envfiles_rs::core::env::container::Env;
use envfiles_rs::lifecycle::{
    BuildContext, BuildWrapper, EnvFilesRunListener, EnvFilesWrapper, RunListener,
};
use envfiles_rs::lifecycle::console::BufferConsole;
use std::io::Write;
use std::path::Path;

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut file = std::fs::File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn full_build_lifecycle() {
    let workspace = tempfile::tempdir().unwrap();
    write_file(
        workspace.path(),
        "build.properties",
        "VERSION=1.4.2\nCHANNEL=beta\n",
    );

    // The host resolves $WORKSPACE from the build's own environment
    let mut env = Env::new();
    env.set("WORKSPACE", workspace.path().display().to_string());
    let mut ctx = BuildContext::new("job-17", env);
    let console = BufferConsole::new();

    // Before start: wrapper with no configured path falls back to $WORKSPACE
    let wrapper = EnvFilesWrapper::default();
    wrapper.set_up(&mut ctx, &console);
    assert_eq!(ctx.env().get("VERSION"), Some("1.4.2"));
    assert_eq!(ctx.env().get("CHANNEL"), Some("beta"));

    // After start: the listener reapplies the captured map
    ctx.env_mut().remove("CHANNEL");
    EnvFilesRunListener::new().on_started(&mut ctx, &console);
    assert_eq!(ctx.env().get("CHANNEL"), Some("beta"));
}

#[test]
fn wrapper_built_from_configuration() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "ci.properties", "CI=true\n");

    let toml = format!(
        "[files]\ndirectory_path = \"{}\"\n",
        dir.path().display()
    );
    let config = Config::parse(&toml).unwrap();
    let wrapper = EnvFilesWrapper::from_config(&config);

    let mut ctx = BuildContext::new("job-1", Env::new());
    let console = BufferConsole::new();
    wrapper.set_up(&mut ctx, &console);

    assert_eq!(ctx.env().get("CI"), Some("true"));
}

#[test]
fn failed_load_leaves_build_environment_intact() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "broken.properties", "dangling=\\");

    let mut env = Env::new();
    env.set("PRESET", "1");
    let mut ctx = BuildContext::new("job-2", env);
    let console = BufferConsole::new();

    let wrapper = EnvFilesWrapper::new(
        envfiles_rs::loader::EnvFileLoader::builder()
            .with_directory_path(dir.path().display().to_string())
            .build(),
    );
    wrapper.set_up(&mut ctx, &console);

    // The build never fails and keeps its original environment
    assert_eq!(ctx.env().get("PRESET"), Some("1"));
    assert_eq!(ctx.env().get("dangling"), None);
    assert!(
        console.lines().iter().any(|l| l.contains("Unable to load")),
        "diagnostic expected, got: {:?}",
        console.lines()
    );

    // The listener still runs, reapplying the (unchanged) capture
    EnvFilesRunListener::new().on_started(&mut ctx, &console);
    assert_eq!(ctx.env().get("PRESET"), Some("1"));
}

#[test]
fn two_builds_never_share_captures() {
    let ws_a = tempfile::tempdir().unwrap();
    let ws_b = tempfile::tempdir().unwrap();
    write_file(ws_a.path(), "env.properties", "SECRET=alpha\n");
    write_file(ws_b.path(), "env.properties", "SECRET=bravo\n");

    let console = BufferConsole::new();
    let wrapper = EnvFilesWrapper::default();

    let mut env_a = Env::new();
    env_a.set("WORKSPACE", ws_a.path().display().to_string());
    let mut env_b = Env::new();
    env_b.set("WORKSPACE", ws_b.path().display().to_string());

    let mut ctx_a = BuildContext::new("job-a", env_a);
    let mut ctx_b = BuildContext::new("job-b", env_b);

    // Interleaved lifecycle of two concurrent builds sharing one wrapper
    wrapper.set_up(&mut ctx_a, &console);
    wrapper.set_up(&mut ctx_b, &console);
    EnvFilesRunListener::new().on_started(&mut ctx_b, &console);
    EnvFilesRunListener::new().on_started(&mut ctx_a, &console);

    assert_eq!(ctx_a.env().get("SECRET"), Some("alpha"));
    assert_eq!(ctx_b.env().get("SECRET"), Some("bravo"));
}
