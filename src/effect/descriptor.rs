use embassy_time::Duration;

use super::EffectKind;
use crate::color::{Rgb, checked_rgb, palette::BLACK};
use crate::error::DescriptorError;
use crate::range::LedRange;

/// Description of the effect a strip should run
///
/// Applying a descriptor replaces whatever was running before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectDescriptor {
    pub kind: EffectKind,
    /// Base color of the effect. Rainbow derives its starting hue from it.
    pub color: Rgb,
    /// Number of cycles for repeatable effects, 0 runs forever
    pub count: u32,
    /// Restrict the effect to a window; LEDs outside it are turned off
    pub range: Option<LedRange>,
    /// Light the window one LED at a time (`On` only)
    pub step_delay: Option<Duration>,
}

impl Default for EffectDescriptor {
    fn default() -> Self {
        Self::off()
    }
}

impl EffectDescriptor {
    pub const fn new(kind: EffectKind, color: Rgb) -> Self {
        Self {
            kind,
            color,
            count: 0,
            range: None,
            step_delay: None,
        }
    }

    pub const fn off() -> Self {
        Self::new(EffectKind::Off, BLACK)
    }

    /// Progressive fill of `range` with `color`, one LED every `step_delay`
    pub const fn sweep(range: LedRange, color: Rgb, step_delay: Duration) -> Self {
        Self::new(EffectKind::On, color)
            .with_range(range)
            .with_step_delay(step_delay)
    }

    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub const fn with_range(mut self, range: LedRange) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub const fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = Some(step_delay);
        self
    }

    /// Check the descriptor against a strip of `len` LEDs
    pub fn validate(&self, len: usize) -> Result<(), DescriptorError> {
        if let Some(range) = self.range {
            if !range.fits(len) {
                return Err(DescriptorError::RangeOutOfBounds {
                    end: range.end(),
                    len,
                });
            }
        }
        if self.step_delay.is_some() && self.kind != EffectKind::On {
            return Err(DescriptorError::StepDelayUnsupported(self.kind));
        }
        Ok(())
    }
}

/// Unchecked effect request, as it arrives from outside the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDescriptor {
    pub kind: u8,
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub count: i32,
}

impl TryFrom<RawDescriptor> for EffectDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let kind = EffectKind::from_raw(raw.kind).ok_or(DescriptorError::UnknownKind(raw.kind))?;
        let color = checked_rgb(raw.red, raw.green, raw.blue)?;
        let count = u32::try_from(raw.count).map_err(|_| DescriptorError::NegativeCount(raw.count))?;
        Ok(Self::new(kind, color).with_count(count))
    }
}
