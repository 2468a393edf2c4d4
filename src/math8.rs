//! 8-bit fixed-point helpers
//!
//! Levels are expressed as `0..=255`, where 255 means "full". All helpers are
//! integer-only so they stay cheap inside a frame tick.

use embassy_time::Duration;

/// Scale `value` by `level / 255`.
///
/// A level of 255 returns `value` unchanged, a level of 0 returns 0.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, level: u8) -> u8 {
    ((value as u16 * (1 + level as u16)) >> 8) as u8
}

/// Linear interpolation between `from` and `to`.
///
/// `amount` of 0 yields `from`, 255 yields `to`. Rounds to nearest.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(from: u8, to: u8, amount: u8) -> u8 {
    let delta = to as i16 - from as i16;

    let mut acc: u32 = (from as u32) << 16;
    acc = acc.wrapping_add((delta as u32).wrapping_mul(amount as u32).wrapping_mul(257));
    acc = acc.wrapping_add(0x8000);

    (acc >> 16) as u8
}

/// Fraction of `duration` covered by `elapsed`, as a level.
///
/// Saturates at 255 once `elapsed` reaches `duration`. A zero duration is
/// treated as already complete.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    let total = duration.as_millis();
    let done = elapsed.as_millis();
    if done >= total {
        return 255;
    }

    ((done * 255) / total) as u8
}
