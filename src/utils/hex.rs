//! Hex previews of raw buffers for diagnostics.

use std::fmt::Write;

/// Number of leading bytes shown by [`preview`]
pub const PREVIEW_LEN: usize = 16;

/// Render up to [`PREVIEW_LEN`] bytes as space-separated hex, marking truncation
pub fn preview(data: &[u8]) -> String {
    let shown = &data[..data.len().min(PREVIEW_LEN)];
    let mut out = String::with_capacity(shown.len() * 3 + 8);
    for (i, byte) in shown.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02X}");
    }
    if data.len() > PREVIEW_LEN {
        let _ = write!(out, " .. (+{} bytes)", data.len() - PREVIEW_LEN);
    }
    out
}
