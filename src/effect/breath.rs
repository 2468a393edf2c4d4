//! Breathing effect
//!
//! Brightness rises over the first half of the period and falls over the
//! second half.

use embassy_time::Duration;

use super::cycle::Cycle;
use super::{Effect, EffectStatus};
use crate::color::{Rgb, scale_color};
use crate::config::BreathCurve;
use crate::math8::progress8;

/// Brightness level of the breath envelope at `phase` inside `period`.
///
/// Non-decreasing over the first half, non-increasing over the second,
/// peaking at 255 in the middle.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn envelope(curve: BreathCurve, phase: Duration, period: Duration) -> u8 {
    match curve {
        BreathCurve::Triangle => {
            let half = Duration::from_ticks(period.as_ticks() / 2);
            if phase < half {
                progress8(phase, half)
            } else {
                255 - progress8(phase - half, half)
            }
        }
        BreathCurve::Sine => {
            let period = period.as_ticks().max(1);
            let position = phase.as_ticks().min(period) as f32 / period as f32;
            let level = (1.0 - libm::cosf(2.0 * core::f32::consts::PI * position)) / 2.0;
            libm::roundf(level * 255.0).clamp(0.0, 255.0) as u8
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreathEffect {
    color: Rgb,
    curve: BreathCurve,
    cycle: Cycle,
}

impl BreathEffect {
    /// A `count` of zero breathes forever
    pub fn new(color: Rgb, period: Duration, curve: BreathCurve, count: u32) -> Self {
        Self {
            color,
            curve,
            cycle: Cycle::new(period, count),
        }
    }

    /// Current envelope level
    pub fn level(&self) -> u8 {
        envelope(self.curve, self.cycle.phase(), self.cycle.period())
    }
}

impl Effect for BreathEffect {
    fn render(&mut self, elapsed: Duration, leds: &mut [Rgb]) -> EffectStatus {
        if !self.cycle.advance(elapsed) {
            return EffectStatus::Finished;
        }

        leds.fill(scale_color(self.color, self.level()));
        EffectStatus::Running
    }
}
