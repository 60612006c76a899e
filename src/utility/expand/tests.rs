// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::expand;
use crate::core::env::container::Env;

fn vars() -> Env {
    let mut env = Env::new();
    env.set("WORKSPACE", "/build/ws");
    env.set("BUILD_NUMBER", "42");
    env
}

#[test]
fn test_expand_bare_token() {
    insta::assert_snapshot!(expand("$WORKSPACE/env", &vars()), @"/build/ws/env");
}

#[test]
fn test_expand_braced_token() {
    insta::assert_snapshot!(expand("${WORKSPACE}/env", &vars()), @"/build/ws/env");
}

#[test]
fn test_expand_multiple_tokens() {
    insta::assert_snapshot!(
        expand("$WORKSPACE/builds/$BUILD_NUMBER", &vars()),
        @"/build/ws/builds/42"
    );
}

#[test]
fn test_expand_unknown_token_left_as_is() {
    insta::assert_snapshot!(expand("$MISSING/env", &vars()), @"$MISSING/env");
    insta::assert_snapshot!(expand("${MISSING}/env", &vars()), @"${MISSING}/env");
}

#[test]
fn test_expand_dollar_escape() {
    insta::assert_snapshot!(expand("cost: $$5", &vars()), @"cost: $5");
}

#[test]
fn test_expand_lone_dollar_passthrough() {
    // Not a token: $ followed by a non-name character
    insta::assert_snapshot!(expand("100$ и $1", &vars()), @"100$ и $1");
}

#[test]
fn test_expand_no_recursion() {
    let mut env = Env::new();
    env.set("A", "$B");
    env.set("B", "deep");
    // Single pass: the substituted "$B" is not expanded again
    assert_eq!(expand("$A", &env), "$B");
}

#[test]
fn test_expand_token_boundary() {
    // Braces delimit where the name ends
    let mut env = Env::new();
    env.set("DIR", "/opt");
    assert_eq!(expand("${DIR}extra", &env), "/optextra");
    // A bare token swallows trailing name characters
    assert_eq!(expand("$DIRextra", &env), "$DIRextra");
}

#[test]
fn test_expand_empty_template() {
    assert_eq!(expand("", &vars()), "");
}
