//! Demo-mode masking of names, addresses and netblocks.
//!
//! Masking replaces every character inside a window with
//! [`MASK_GLYPH`](crate::config::MASK_GLYPH) except the separators `. / - `
//! and space. Masking twice gives the same result as masking once. When the
//! separator defining a window is missing the window covers the whole input.

use crate::config::MASK_GLYPH;

/// Mask from the first `.` to the end: `www.example.com` -> `www.xxxxxxx.xxx`.
pub fn censor_domain(input: &str) -> String {
    let start = char_position(input, |c| c == '.').unwrap_or(0);
    censor_string(input, start, input.chars().count())
}

/// Mask up to the last `.`: `93.184.216.34` -> `xx.xxx.xxx.34`.
pub fn censor_ip(input: &str) -> String {
    let end = input
        .chars()
        .rev()
        .position(|c| c == '.')
        .map(|from_end| input.chars().count() - from_end - 1)
        .unwrap_or_else(|| input.chars().count());
    censor_string(input, 0, end)
}

/// Mask the address part, keep the prefix length: `10.0.0.0/24` -> `xx.x.x.x/24`.
pub fn censor_netblock(input: &str) -> String {
    let end = char_position(input, |c| c == '/').unwrap_or_else(|| input.chars().count());
    censor_string(input, 0, end)
}

/// Mask the chars in `[start, end)`. Out-of-range bounds are clamped.
pub fn censor_string(input: &str, start: usize, end: usize) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < start || i >= end || matches!(c, '.' | '/' | '-' | ' ') {
                c
            } else {
                MASK_GLYPH
            }
        })
        .collect()
}

/// Mask all of `input`, used for ASN ids and organization names.
pub fn censor_all(input: &str) -> String {
    censor_string(input, 0, input.chars().count())
}

fn char_position<P: Fn(char) -> bool>(input: &str, pred: P) -> Option<usize> {
    input.chars().position(pred)
}
