//! Color types and pure color math
//!
//! Colors are plain `smart_leds` values, so frames can be handed to any
//! `smart_leds` driver without conversion.

pub mod palette;

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv as HSV, hsv2rgb};

use crate::error::{Channel, DescriptorError};
use crate::math8::{blend8, scale8};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Number of hue degrees on the color wheel
pub const HUE_DEGREES: u16 = 360;

/// Build a color from raw 32-bit channels, rejecting values above 255.
pub fn checked_rgb(red: u32, green: u32, blue: u32) -> Result<Rgb, DescriptorError> {
    Ok(Rgb {
        r: checked_channel(Channel::Red, red)?,
        g: checked_channel(Channel::Green, green)?,
        b: checked_channel(Channel::Blue, blue)?,
    })
}

fn checked_channel(channel: Channel, value: u32) -> Result<u8, DescriptorError> {
    u8::try_from(value).map_err(|_| DescriptorError::ChannelOutOfRange { channel, value })
}

/// Scale every channel by `level / 255`.
///
/// The result never exceeds the input channel-wise.
#[inline]
pub const fn scale_color(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, level),
        g: scale8(color.g, level),
        b: scale8(color.b, level),
    }
}

/// Linear interpolation between two colors
///
/// # Arguments
/// * `from` - Color at `amount == 0`
/// * `to` - Color at `amount == 255`
/// * `amount` - Blend factor
#[inline]
pub const fn blend_colors(from: Rgb, to: Rgb, amount: u8) -> Rgb {
    Rgb {
        r: blend8(from.r, to.r, amount),
        g: blend8(from.g, to.g, amount),
        b: blend8(from.b, to.b, amount),
    }
}

/// Fully saturated, full brightness color for a hue in degrees.
///
/// Hues wrap, so 360 is the same as 0.
#[allow(clippy::cast_possible_truncation)]
pub fn hue_to_rgb(degrees: u16) -> Rgb {
    let degrees = u32::from(degrees % HUE_DEGREES);
    // smart_leds works on a 256 step wheel
    let hue = ((degrees * 256) / u32::from(HUE_DEGREES)) as u8;
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Hue of a color in degrees (`0..360`).
///
/// Greys have no hue and map to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_degrees(color: Rgb) -> u16 {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    if max == min {
        return 0;
    }

    let delta = i32::from(max - min);
    let (r, g, b) = (i32::from(color.r), i32::from(color.g), i32::from(color.b));
    let sector = if max == color.r {
        60 * (g - b) / delta
    } else if max == color.g {
        120 + 60 * (b - r) / delta
    } else {
        240 + 60 * (r - g) / delta
    };

    sector.rem_euclid(i32::from(HUE_DEGREES)) as u16
}
