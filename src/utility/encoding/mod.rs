// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy encoding conversion for properties file content.
//!
//! ```text
//! External I/O           Internal
//! Latin-1/CP1252 --(decode)--> UTF-8
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Encoding types for properties file content.
///
/// Properties files historically default to ISO-8859-1; modern tooling
/// writes UTF-8. Both are supported, plus the Windows active code page
/// for files produced by legacy Windows build scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8 (code page 65001)
    #[default]
    Utf8,
    /// ISO-8859-1, the historical properties file default
    Latin1,
    /// Active Code Page - typically Windows-1252
    Acp,
}

/// Converts bytes from the given encoding to UTF-8.
///
/// # Arguments
/// * `encoding` - The source encoding of the bytes
/// * `bytes` - The raw bytes to convert
///
/// # Returns
/// A UTF-8 string. Invalid sequences are replaced with U+FFFD (replacement character).
///
/// # Example
/// ```
/// use envfiles_rs::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let latin1_bytes = b"caf\xe9"; // "café" in ISO-8859-1
/// let utf8 = bytes_to_utf8(Encoding::Latin1, latin1_bytes);
/// assert_eq!(utf8, "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => {
            // Lossy conversion, never fails
            String::from_utf8_lossy(bytes)
        }
        Encoding::Latin1 => latin1_to_utf8(bytes),
        Encoding::Acp => {
            // Windows-1252 (Active Code Page)
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
    }
}

/// Converts ISO-8859-1 bytes to UTF-8.
///
/// Every byte maps directly to the Unicode code point of the same value,
/// so this conversion is total. ASCII-only input borrows.
fn latin1_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    if bytes.is_ascii() {
        // ASCII is valid UTF-8 as-is
        return String::from_utf8_lossy(bytes);
    }
    Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
}

#[cfg(test)]
mod tests;
