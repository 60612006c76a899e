// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parser internals: natural lines, logical-line assembly, escapes.
//!
//! ```text
//! input --> natural lines --> logical lines --> (key, value) pairs
//!            \n \r \r\n        continuation       split + unescape
//! ```

use crate::error::ParseError;

/// Whitespace in the properties sense: space, tab, form feed.
const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Parses the full input into key/value pairs in file order.
pub(super) fn parse(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    let lines = natural_lines(input);
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let (line_no, raw) = lines[i];
        let content = raw.trim_start_matches(is_blank);

        if content.is_empty() {
            i += 1;
            continue;
        }
        if content.starts_with('#') || content.starts_with('!') {
            // Comment lines never continue, even with a trailing backslash
            i += 1;
            continue;
        }

        // Assemble the logical line across continuations
        let mut logical = String::new();
        let mut current = content;
        loop {
            if has_continuation(current) {
                logical.push_str(&current[..current.len() - 1]);
                i += 1;
                match lines.get(i) {
                    Some((_, next)) => current = next.trim_start_matches(is_blank),
                    None => return Err(ParseError::UnterminatedContinuation { line: line_no }),
                }
            } else {
                logical.push_str(current);
                break;
            }
        }
        i += 1;

        pairs.push(split_pair(&logical, line_no)?);
    }

    Ok(pairs)
}

/// Splits `input` into `(line_number, content)` natural lines.
///
/// `\r\n` counts as a single terminator; a final line without a
/// terminator still counts.
fn natural_lines(input: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut line_no = 1;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                lines.push((line_no, &input[start..pos]));
                pos += 1;
                start = pos;
                line_no += 1;
            }
            b'\r' => {
                lines.push((line_no, &input[start..pos]));
                pos += 1;
                if bytes.get(pos) == Some(&b'\n') {
                    pos += 1;
                }
                start = pos;
                line_no += 1;
            }
            _ => pos += 1,
        }
    }
    if start < bytes.len() {
        lines.push((line_no, &input[start..]));
    }
    lines
}

/// A line continues when its content ends with an odd number of
/// backslashes (an even count is pairs of escaped backslashes).
fn has_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Splits one logical line into an unescaped key/value pair.
///
/// The key ends at the first unescaped `=`, `:` or blank; blanks around
/// the separator are trimmed. A line with no separator is a key with an
/// empty value.
fn split_pair(logical: &str, line_no: usize) -> Result<(String, String), ParseError> {
    let chars: Vec<char> = logical.chars().collect();
    let len = chars.len();

    let mut idx = 0;
    let mut key_end = len;
    let mut explicit_sep = false;
    let mut escaped = false;
    while idx < len {
        let c = chars[idx];
        if escaped {
            escaped = false;
            idx += 1;
            continue;
        }
        if c == '\\' {
            escaped = true;
            idx += 1;
            continue;
        }
        if c == '=' || c == ':' {
            key_end = idx;
            idx += 1;
            explicit_sep = true;
            break;
        }
        if is_blank(c) {
            key_end = idx;
            break;
        }
        idx += 1;
    }

    // Blanks after the key, then at most one '=' or ':', then blanks again
    while idx < len && is_blank(chars[idx]) {
        idx += 1;
    }
    if !explicit_sep && idx < len && (chars[idx] == '=' || chars[idx] == ':') {
        idx += 1;
    }
    while idx < len && is_blank(chars[idx]) {
        idx += 1;
    }

    let key = unescape(&chars[..key_end], line_no)?;
    let value = unescape(&chars[idx..], line_no)?;
    Ok((key, value))
}

/// Resolves escape sequences in a key or value segment.
fn unescape(chars: &[char], line_no: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(chars.len());
    let mut idx = 0;

    while idx < chars.len() {
        let c = chars[idx];
        if c != '\\' {
            out.push(c);
            idx += 1;
            continue;
        }
        idx += 1;
        let Some(&escaped) = chars.get(idx) else {
            // Dangling backslash at segment end: dropped
            break;
        };
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\u{c}'),
            'u' => {
                let digits = &chars[(idx + 1).min(chars.len())..chars.len().min(idx + 5)];
                let code = parse_hex4(digits);
                match code.and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        let sequence: String =
                            std::iter::once('\\').chain(chars[idx..].iter().take(5).copied()).collect();
                        return Err(ParseError::MalformedUnicodeEscape {
                            line: line_no,
                            sequence,
                        });
                    }
                }
                idx += 4;
            }
            // Any other escaped character is itself
            other => out.push(other),
        }
        idx += 1;
    }

    Ok(out)
}

/// Parses exactly four hex digits into a code point.
fn parse_hex4(digits: &[char]) -> Option<u32> {
    if digits.len() != 4 {
        return None;
    }
    digits
        .iter()
        .try_fold(0u32, |acc, c| c.to_digit(16).map(|d| acc * 16 + d))
}
