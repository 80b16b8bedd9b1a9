use ratatui::style::Color;
use vitae::utils::color::{blend, hex_or};

#[test]
fn test_hex_or_falls_back() {
    assert_eq!(hex_or("not a color", Color::Gray), Color::Gray);
    assert_eq!(hex_or("#0F172A", Color::Gray), Color::Rgb(0x0F, 0x17, 0x2A));
}

#[test]
fn test_named_colors_snap_at_midpoint() {
    assert_eq!(blend(Color::Red, Color::Blue, 0.4), Color::Red);
    assert_eq!(blend(Color::Red, Color::Blue, 0.5), Color::Blue);
}

#[test]
fn test_blend_clamps_t() {
    let from = Color::Rgb(0, 0, 0);
    let to = Color::Rgb(200, 100, 50);
    assert_eq!(blend(from, to, 2.0), to);
    assert_eq!(blend(from, to, -1.0), from);
}
