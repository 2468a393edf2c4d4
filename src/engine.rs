//! Effect engine
//!
//! Turns the active [`EffectDescriptor`] into a sequence of frames. Time only
//! moves when [`EffectEngine::tick`] is called, so nothing in here ever waits.

use embassy_time::Duration;

use crate::buffer::PixelBuffer;
use crate::color::palette::BLACK;
use crate::config::EffectTimings;
use crate::effect::{EffectDescriptor, EffectKind, EffectSlot, EffectStatus, StaticColorEffect};
use crate::error::DescriptorError;
use crate::range::LedRange;

/// Runs one effect at a time against a pixel buffer
#[derive(Debug, Clone)]
pub struct EffectEngine {
    timings: EffectTimings,
    descriptor: EffectDescriptor,
    slot: EffectSlot,
    /// False until the first tick after `apply`
    started: bool,
}

impl EffectEngine {
    /// Engine showing `Off` over an already black buffer
    pub fn new(timings: EffectTimings) -> Self {
        Self {
            timings,
            descriptor: EffectDescriptor::off(),
            slot: EffectSlot::Off(StaticColorEffect::settled(BLACK)),
            started: true,
        }
    }

    pub const fn kind(&self) -> EffectKind {
        self.slot.kind()
    }

    pub const fn descriptor(&self) -> &EffectDescriptor {
        &self.descriptor
    }

    pub const fn timings(&self) -> &EffectTimings {
        &self.timings
    }

    /// Replace the running effect.
    ///
    /// The new effect starts on the next tick. On error nothing changes.
    pub fn apply(&mut self, descriptor: EffectDescriptor, len: usize) -> Result<(), DescriptorError> {
        descriptor.validate(len)?;

        trace!(
            "[EffectEngine.apply] {} -> {} (count {})",
            self.descriptor.kind, descriptor.kind, descriptor.count
        );
        self.slot = EffectSlot::from_descriptor(&descriptor, &self.timings);
        self.descriptor = descriptor;
        self.started = false;
        Ok(())
    }

    /// Switch to `Off` and clear the buffer
    pub fn stop<const MAX_LEDS: usize>(&mut self, buffer: &mut PixelBuffer<MAX_LEDS>) {
        self.descriptor = EffectDescriptor::off();
        self.slot = EffectSlot::Off(StaticColorEffect::settled(BLACK));
        self.started = true;
        buffer.clear();
    }

    /// Advance the running effect by `elapsed` and render it into `buffer`
    pub fn tick<const MAX_LEDS: usize>(
        &mut self,
        elapsed: Duration,
        buffer: &mut PixelBuffer<MAX_LEDS>,
    ) {
        let elapsed = if self.started {
            elapsed
        } else {
            // A fresh effect starts at phase zero on this tick
            self.started = true;
            if self.descriptor.range.is_some() {
                buffer.clear();
            }
            Duration::from_ticks(0)
        };

        let range = self
            .descriptor
            .range
            .unwrap_or_else(|| LedRange::full(buffer.len()));
        // Ranges are checked against the buffer length in `apply`
        let Some(leds) = buffer.window_mut(range) else {
            return;
        };

        if self.slot.render(elapsed, leds) == EffectStatus::Finished {
            trace!("[EffectEngine.tick] {} finished", self.descriptor.kind);
            self.stop(buffer);
        }
    }
}
