use ratatui::style::Color;

/// Parse a `#RRGGBB` hex string into a terminal color
#[must_use]
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Resolve a hex string, falling back to `fallback` when it does not parse
#[must_use]
pub fn hex_or(hex: &str, fallback: Color) -> Color {
    parse_hex(hex).unwrap_or(fallback)
}

/// Linear blend from `from` toward `to`; `t` is clamped to `0.0..=1.0`.
///
/// Only RGB colors can be blended. Named colors snap to `to` once `t`
/// passes the midpoint.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}

/// Fade `color` in over `background` at the given opacity
#[must_use]
pub fn with_opacity(color: Color, background: Color, opacity: f32) -> Color {
    blend(background, color, opacity)
}
