use crate::constants::WHEEL_COLORS;

/// Palette index for each of `count` sectors.
///
/// Neighbouring sectors never share a colour, including the last and first
/// sector, which touch once the wheel closes.
pub fn sector_colors(count: usize) -> Vec<usize> {
    let palette = WHEEL_COLORS.len();
    let mut indices: Vec<usize> = (0..count).map(|i| i % palette).collect();

    if count > 1 && indices[0] == indices[count - 1] {
        indices[0] = (indices[0] + 1) % palette;
        if indices[0] == indices[1] {
            indices[0] = (indices[0] + 1) % palette;
        }
    }

    indices
}

/// Parse a `#rrggbb` palette entry.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
