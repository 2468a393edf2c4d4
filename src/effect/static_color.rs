//! Solid color fill
//!
//! Used for both `On` and `Off`. With a step delay the window is lit one LED
//! at a time instead of all at once.

use embassy_time::Duration;

use super::{Effect, EffectStatus};
use crate::color::{Rgb, palette::BLACK};

/// Fills the window with one color and then leaves the buffer alone
///
/// Once settled the effect stops writing, so single LEDs set by the caller
/// afterwards are kept.
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgb,
    /// Delay between lighting two consecutive LEDs
    step_delay: Option<Duration>,
    elapsed: Duration,
    settled: bool,
}

impl StaticColorEffect {
    /// Fill the whole window at once
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            step_delay: None,
            elapsed: Duration::from_ticks(0),
            settled: false,
        }
    }

    /// Effect whose final frame is already on the strip
    pub(crate) const fn settled(color: Rgb) -> Self {
        Self {
            settled: true,
            ..Self::new(color)
        }
    }

    /// Light the window progressively, one more LED every `step_delay`
    pub const fn sweep(color: Rgb, step_delay: Duration) -> Self {
        Self {
            step_delay: Some(step_delay),
            ..Self::new(color)
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Returns true once the final frame has been written
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Number of LEDs lit so far in a window of `len`
    fn lit_count(&self, len: usize) -> usize {
        let Some(delay) = self.step_delay else {
            return len;
        };
        if delay.as_ticks() == 0 {
            return len;
        }
        let steps = self.elapsed.as_ticks() / delay.as_ticks();
        usize::try_from(steps)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .min(len)
    }
}

impl Effect for StaticColorEffect {
    fn render(&mut self, elapsed: Duration, leds: &mut [Rgb]) -> EffectStatus {
        if self.settled {
            return EffectStatus::Running;
        }

        self.elapsed += elapsed;
        let lit = self.lit_count(leds.len());
        let (on, off) = leds.split_at_mut(lit);
        on.fill(self.color);
        off.fill(BLACK);

        self.settled = lit == leds.len();
        EffectStatus::Running
    }
}
