//! Colour helpers: event backgrounds for the grid, pastel fills for XLSX,
//! and ANSI codes for terminal output.

use crate::config::defaults::{FALLBACK_PASTEL, PASTEL_ALPHA};
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";

/// Parses `#RRGGBB` (any number of leading `#`) into its components.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Turns a hex colour into an `rgba(r, g, b, opacity)` background.
/// Values that are not 6-digit hex are passed back without the `#`.
pub fn hex_to_rgba(hex: &str, opacity: f64) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {opacity})"),
        None => hex.trim_start_matches('#').to_string(),
    }
}

/// Blends the colour with white and returns it as `RRGGBB`.
pub fn pastel_hex(hex: &str) -> String {
    let Some((r, g, b)) = parse_hex_rgb(hex) else {
        return FALLBACK_PASTEL.to_string();
    };

    let blend = |c: u8| (f64::from(c) * PASTEL_ALPHA + 255.0 * (1.0 - PASTEL_ALPHA)) as u8;

    format!("{:02X}{:02X}{:02X}", blend(r), blend(g), blend(b))
}

/// Paints `text` in the event colour for terminal output; unknown colours
/// leave the text untouched.
pub fn paint(text: &str, hex: &str) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => Colour::RGB(r, g, b).bold().paint(text).to_string(),
        None => text.to_string(),
    }
}

pub fn dim(text: &str) -> String {
    format!("{GREY}{text}{RESET}")
}
