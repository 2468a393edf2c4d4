use embassy_time::Duration;

use super::cycle::Cycle;
use super::{Effect, EffectStatus};
use crate::color::{Rgb, palette::BLACK};

/// Toggles between the base color and black every half period
///
/// Each full on/off cycle counts as one blink.
#[derive(Debug, Clone)]
pub struct BlinkEffect {
    color: Rgb,
    cycle: Cycle,
}

impl BlinkEffect {
    /// A `count` of zero blinks forever
    pub fn new(color: Rgb, period: Duration, count: u32) -> Self {
        Self {
            color,
            cycle: Cycle::new(period, count),
        }
    }

    /// Returns true during the lit half of the cycle
    pub fn is_lit(&self) -> bool {
        self.cycle.phase().as_ticks() < self.cycle.period().as_ticks() / 2
    }
}

impl Effect for BlinkEffect {
    fn render(&mut self, elapsed: Duration, leds: &mut [Rgb]) -> EffectStatus {
        if !self.cycle.advance(elapsed) {
            return EffectStatus::Finished;
        }

        leds.fill(if self.is_lit() { self.color } else { BLACK });
        EffectStatus::Running
    }
}
