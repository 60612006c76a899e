// envfiles-rs: Environment Files Build Wrapper - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, bytes_to_utf8};

#[test]
fn test_utf8_passthrough() {
    let bytes = "key=valué".as_bytes();
    assert_eq!(bytes_to_utf8(Encoding::Utf8, bytes), "key=valué");
}

#[test]
fn test_utf8_invalid_sequences_replaced() {
    let bytes = b"key=\xff\xfe";
    let result = bytes_to_utf8(Encoding::Utf8, bytes);
    assert_eq!(result, "key=\u{fffd}\u{fffd}");
}

#[test]
fn test_latin1_high_bytes() {
    // "café" in ISO-8859-1
    assert_eq!(bytes_to_utf8(Encoding::Latin1, b"caf\xe9"), "café");
    // 0x80-0x9F are C1 controls in Latin-1, not Windows-1252 glyphs
    assert_eq!(bytes_to_utf8(Encoding::Latin1, b"\x80"), "\u{80}");
}

#[test]
fn test_latin1_ascii_borrows() {
    let result = bytes_to_utf8(Encoding::Latin1, b"plain ascii");
    assert!(matches!(result, std::borrow::Cow::Borrowed(_)));
    assert_eq!(result, "plain ascii");
}

#[test]
fn test_acp_windows_1252() {
    // 0x80 is the euro sign in Windows-1252
    assert_eq!(bytes_to_utf8(Encoding::Acp, b"\x80"), "€");
    assert_eq!(bytes_to_utf8(Encoding::Acp, b"caf\xe9"), "café");
}

#[test]
fn test_encoding_default() {
    assert_eq!(Encoding::default(), Encoding::Utf8);
}
