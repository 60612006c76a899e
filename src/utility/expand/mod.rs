// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Macro/token expansion for configured paths.
//!
//! ```text
//! expand("$WORKSPACE/env", vars)
//!   $NAME    --> vars["NAME"]       unknown: left as-is
//!   ${NAME}  --> vars["NAME"]       unknown: left as-is
//!   $$       --> $
//! ```
//!
//! Single pass; substituted values are not re-expanded.

use crate::core::env::container::Env;
use regex::Regex;
use std::sync::OnceLock;

/// Token names follow environment-variable naming: a letter or underscore
/// followed by letters, digits or underscores.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$(?:(\$)|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .expect("token pattern is a valid regex")
    })
}

/// Expands `$NAME` and `${NAME}` tokens in `template` using `vars`.
///
/// Tokens whose name is not present in `vars` are left exactly as
/// written; `$$` escapes to a literal `$`. A `$` followed by anything
/// else is not a token and passes through untouched.
///
/// # Example
/// ```
/// use envfiles_rs::core::env::container::Env;
/// use envfiles_rs::utility::expand::expand;
///
/// let mut vars = Env::new();
/// vars.set("WORKSPACE", "/build/ws");
/// assert_eq!(expand("$WORKSPACE/env", &vars), "/build/ws/env");
/// assert_eq!(expand("${MISSING}/env", &vars), "${MISSING}/env");
/// ```
#[must_use]
pub fn expand(template: &str, vars: &Env) -> String {
    token_pattern()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }
            let name = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str());
            name.and_then(|n| vars.get(n)).map_or_else(
                // Unresolved tokens stay as written
                || caps[0].to_string(),
                std::string::ToString::to_string,
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests;
