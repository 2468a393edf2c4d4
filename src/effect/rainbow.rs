//! Rotating rainbow
//!
//! Every LED gets its own hue, offset from its neighbour by a fixed step. The
//! whole wheel rotates once per cycle.

use embassy_time::Duration;

use super::{Effect, EffectStatus};
use crate::color::{HUE_DEGREES, Rgb, hue_to_rgb};

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Hue of the first LED at phase zero
    base_hue: u16,
    /// Hue offset between neighbouring LEDs
    hue_step: u16,
    /// Duration of one full rotation
    cycle: Duration,
    phase: Duration,
}

impl RainbowEffect {
    pub fn new(base_hue: u16, hue_step: u16, cycle: Duration) -> Self {
        Self {
            base_hue: base_hue % HUE_DEGREES,
            hue_step: hue_step % HUE_DEGREES,
            cycle: cycle.max(Duration::from_ticks(1)),
            phase: Duration::from_ticks(0),
        }
    }

    /// Hue added by the time-based rotation, in degrees
    #[allow(clippy::cast_possible_truncation)]
    pub fn rotation(&self) -> u16 {
        let degrees = self.phase.as_ticks() * u64::from(HUE_DEGREES) / self.cycle.as_ticks();
        degrees as u16
    }

    /// Hue of the LED at `index`, in degrees
    #[allow(clippy::cast_possible_truncation)]
    pub fn hue_at(&self, index: usize) -> u16 {
        let wheel = u64::from(HUE_DEGREES);
        let offset = (index as u64 % wheel) * u64::from(self.hue_step);
        let hue = u64::from(self.base_hue) + offset + u64::from(self.rotation());
        (hue % wheel) as u16
    }
}

impl Effect for RainbowEffect {
    fn render(&mut self, elapsed: Duration, leds: &mut [Rgb]) -> EffectStatus {
        let cycle = self.cycle.as_ticks();
        let phase = self.phase.as_ticks() % cycle + elapsed.as_ticks() % cycle;
        self.phase = Duration::from_ticks(phase % cycle);

        for (index, led) in leds.iter_mut().enumerate() {
            *led = hue_to_rgb(self.hue_at(index));
        }
        EffectStatus::Running
    }
}
