use embassy_time::Duration;

use super::{Effect, EffectStatus};
use crate::color::{Rgb, blend_colors, palette::BLACK};
use crate::math8::progress8;

/// Linear ramp from black to the base color, then hold
#[derive(Debug, Clone)]
pub struct FadeInEffect {
    color: Rgb,
    duration: Duration,
    elapsed: Duration,
    settled: bool,
}

impl FadeInEffect {
    pub const fn new(color: Rgb, duration: Duration) -> Self {
        Self {
            color,
            duration,
            elapsed: Duration::from_ticks(0),
            settled: false,
        }
    }

    /// Current ramp level, 255 once the fade is complete
    pub const fn level(&self) -> u8 {
        progress8(self.elapsed, self.duration)
    }
}

impl Effect for FadeInEffect {
    fn render(&mut self, elapsed: Duration, leds: &mut [Rgb]) -> EffectStatus {
        if self.settled {
            return EffectStatus::Running;
        }

        self.elapsed = (self.elapsed + elapsed).min(self.duration);
        let level = self.level();
        leds.fill(blend_colors(BLACK, self.color, level));

        self.settled = level == 255;
        EffectStatus::Running
    }
}
