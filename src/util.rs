//! General-purpose utility functions

use palette::Srgb;

/// Color of a single grid cell.
pub type Color = Srgb<u8>;

/// Scale and offset applied to a value's ratio before it becomes a gray level.  These are presentation tuning and
/// are kept fixed so that identical inputs always render identically.
pub const GRAY_SCALE: f64 = 200.0;
pub const GRAY_OFFSET: f64 = 20.0;
/// Share of the algorithm's tint in each channel; the gray level makes up the rest.
pub const TINT_WEIGHT: f64 = 0.1;

/// Given an X and Y coordinate in the grid and the grid's width, returns the index of that coordinate in the grid.
pub fn get_index(x: usize, y: usize, width: usize) -> usize {
    debug_assert!(x < width);
    y * width + x
}

/// Maps a value in `0..=range` onto a gray level, `round(ratio * 200 + 20)` clamped into a byte.
pub fn gray_level(value: u64, range: u64) -> u8 {
    let ratio = if range == 0 { 0.0 } else { value as f64 / range as f64 };
    (ratio * GRAY_SCALE + GRAY_OFFSET).round().clamp(0.0, 255.0) as u8
}

/// Converts a raw generator output into the color of its cell: a gray level with a faint cast of `tint`.
///
/// Each channel is `tint * 0.1 + gray * 0.9`, truncated.
pub fn value_to_color(value: u64, range: u64, tint: Color) -> Color {
    let gray = f64::from(gray_level(value, range));
    let blend = |channel: u8| -> u8 {
        (f64::from(channel) * TINT_WEIGHT + gray * (1.0 - TINT_WEIGHT)).clamp(0.0, 255.0) as u8
    };

    Color::new(blend(tint.red), blend(tint.green), blend(tint.blue))
}

/// Formats a color as `#rrggbb`.
pub fn hex_string(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[test]
fn index_is_row_major() {
    assert_eq!(get_index(0, 0, 7), 0);
    assert_eq!(get_index(6, 0, 7), 6);
    assert_eq!(get_index(1, 2, 7), 15);
}

#[test]
fn gray_level_bounds() {
    assert_eq!(gray_level(0, 100), 20);
    assert_eq!(gray_level(100, 100), 220);
    assert_eq!(gray_level(u64::MAX, u64::MAX), 220);
    assert_eq!(gray_level(58598, 233_280), 70);
}

#[test]
fn gray_level_rounds_half_up() {
    // 0.0025 * 200 + 20 = 20.5
    assert_eq!(gray_level(1, 400), 21);
}

#[test]
fn tint_is_blended_at_ten_percent() {
    let tint = Color::new(0x00, 0xd4, 0xff);
    let color = value_to_color(58598, 233_280, tint);
    // gray 70: 0 * 0.1 + 63, 21.2 + 63, 25.5 + 63
    assert_eq!((color.red, color.green, color.blue), (63, 84, 88));
}

#[test]
fn black_tint_darkens_gray() {
    let color = value_to_color(0, 1, Color::new(0, 0, 0));
    assert_eq!((color.red, color.green, color.blue), (18, 18, 18));
}

#[test]
fn hex_formatting() {
    assert_eq!(hex_string(Color::new(0xff, 0x44, 0x66)), "#ff4466");
    assert_eq!(hex_string(Color::new(0, 0, 0)), "#000000");
}
