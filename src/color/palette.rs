//! Named color presets

use super::Rgb;

/// Create a palette entry from a hex color (0xRRGGBB format)
macro_rules! hex {
    ($color:expr) => {
        Rgb {
            r: (($color >> 16) & 0xFF) as u8,
            g: (($color >> 8) & 0xFF) as u8,
            b: ($color & 0xFF) as u8,
        }
    };
}

pub const WHITE: Rgb = hex!(0xFF_FF_FF);
pub const RED: Rgb = hex!(0xFF_00_00);
pub const GREEN: Rgb = hex!(0x00_FF_00);
pub const BLUE: Rgb = hex!(0x00_00_FF);
pub const YELLOW: Rgb = hex!(0xFF_FF_00);
pub const CYAN: Rgb = hex!(0x00_FF_FF);
pub const MAGENTA: Rgb = hex!(0xFF_00_FF);
pub const BLACK: Rgb = hex!(0x00_00_00);
pub const ORANGE: Rgb = hex!(0xFF_A5_00);
pub const PURPLE: Rgb = hex!(0x80_00_80);
pub const PINK: Rgb = hex!(0xFF_C0_CB);
pub const GRAY: Rgb = hex!(0x80_80_80);
pub const BROWN: Rgb = hex!(0xA5_2A_2A);
pub const TEAL: Rgb = hex!(0x00_80_80);
pub const NAVY: Rgb = hex!(0x00_00_80);
pub const MAROON: Rgb = hex!(0x80_00_00);
pub const OLIVE: Rgb = hex!(0x80_80_00);

// Aliases kept for callers used to the CSS names
pub const LIME: Rgb = GREEN;
pub const FUCHSIA: Rgb = MAGENTA;
