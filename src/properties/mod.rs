// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented properties text parsing.
//!
//! # Format
//!
//! ```text
//! # comment            ! also a comment
//! key=value            key:value       key value
//! spaced = value       whitespace around the separator is trimmed
//! long = first\
//!        second        continuation, leading whitespace stripped
//! escapes: \t \n \r \f \\ \uXXXX; \<other> is <other>
//! ```
//!
//! Natural lines split on `\n`, `\r` or `\r\n`. Blank lines and comment
//! lines are skipped. Pairs are returned in file order with duplicates
//! preserved; merging decides who wins.

mod parser;


use crate::error::ParseError;
use crate::utility::encoding::{Encoding, bytes_to_utf8};

/// Parses properties text into key/value pairs in file order.
///
/// Duplicate keys are preserved; a later pair is intended to win when the
/// result is merged into an environment.
///
/// # Errors
///
/// Returns a [`ParseError`] for an unterminated trailing continuation or
/// a malformed `\uXXXX` escape.
pub fn parse_str(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    // Tooling-written files may start with a BOM
    parser::parse(input.strip_prefix('\u{feff}').unwrap_or(input))
}

/// Decodes `bytes` with `encoding`, then parses as properties text.
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed properties text; decoding itself
/// never fails (invalid sequences become U+FFFD).
pub fn parse_bytes(encoding: Encoding, bytes: &[u8]) -> Result<Vec<(String, String)>, ParseError> {
    parse_str(&bytes_to_utf8(encoding, bytes))
}
