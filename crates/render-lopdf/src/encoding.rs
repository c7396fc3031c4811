//! Byte encodings for the strings written into the PDF.
//!
//! Page text uses the fonts' `WinAnsiEncoding` (Windows code page 1252).
//! Link targets are 7-bit ASCII URIs.

/// Byte written for characters code page 1252 cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Characters of the 0x80..=0x9F block, by code. `None` marks unassigned codes.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

/// The code page 1252 byte for `c`, if it has one.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x00..=0x7F | 0xA0..=0xFF => Some(c as u8),
        _ => CP1252_HIGH
            .iter()
            .position(|&mapped| mapped == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

/// Encodes `text` for a `WinAnsiEncoding` font, replacing unmappable characters.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(|c| win_ansi_byte(c).unwrap_or(REPLACEMENT)).collect()
}

fn is_uri_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=%".contains(&byte)
}

/// Percent-encodes the UTF-8 bytes of `url` that may not appear in a URI.
///
/// Reserved characters and existing `%` escapes are kept, so an already
/// encoded URL passes through unchanged.
pub fn to_uri_bytes(url: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(url.len());
    for &byte in url.as_bytes() {
        if is_uri_char(byte) {
            out.push(byte);
        } else {
            out.extend_from_slice(format!("%{:02X}", byte).as_bytes());
        }
    }
    out
}
