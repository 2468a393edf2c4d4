//! Effect system with a closed set of effect kinds
//!
//! Every running effect lives in an [`EffectSlot`] variant so the engine can
//! dispatch with a single exhaustive match and no heap allocation.

mod blink;
mod breath;
mod cycle;
mod descriptor;
mod fade_in;
mod rainbow;
mod static_color;

use core::fmt;

use embassy_time::Duration;

pub use blink::BlinkEffect;
pub use breath::{BreathEffect, envelope};
pub use descriptor::{EffectDescriptor, RawDescriptor};
pub use fade_in::FadeInEffect;
pub use rainbow::RainbowEffect;
pub use static_color::StaticColorEffect;

use crate::color::{Rgb, hue_degrees, palette::BLACK};
use crate::config::EffectTimings;

const EFFECT_NAME_OFF: &str = "off";
const EFFECT_NAME_ON: &str = "on";
const EFFECT_NAME_BREATH: &str = "breath";
const EFFECT_NAME_FADE_IN: &str = "fade_in";
const EFFECT_NAME_BLINK_SLOW: &str = "blink_slow";
const EFFECT_NAME_BLINK_FAST: &str = "blink_fast";
const EFFECT_NAME_RAINBOW: &str = "rainbow";

const EFFECT_ID_OFF: u8 = 0;
const EFFECT_ID_ON: u8 = 1;
const EFFECT_ID_BREATH: u8 = 2;
const EFFECT_ID_FADE_IN: u8 = 3;
const EFFECT_ID_BLINK_SLOW: u8 = 4;
const EFFECT_ID_BLINK_FAST: u8 = 5;
const EFFECT_ID_RAINBOW: u8 = 6;

/// Outcome of rendering one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectStatus {
    /// The effect keeps going (or holds its final frame)
    Running,
    /// The effect used up its repeat count; nothing was rendered
    Finished,
}

pub trait Effect {
    /// Advance the effect by `elapsed` and render the resulting frame.
    ///
    /// Static effects may leave `leds` untouched once their final frame has
    /// been written.
    fn render(&mut self, elapsed: Duration, leds: &mut [Rgb]) -> EffectStatus;
}

/// Known effect kinds that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectKind {
    #[default]
    Off = EFFECT_ID_OFF,
    On = EFFECT_ID_ON,
    Breath = EFFECT_ID_BREATH,
    FadeIn = EFFECT_ID_FADE_IN,
    BlinkSlow = EFFECT_ID_BLINK_SLOW,
    BlinkFast = EFFECT_ID_BLINK_FAST,
    Rainbow = EFFECT_ID_RAINBOW,
}

impl EffectKind {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_OFF => Self::Off,
            EFFECT_ID_ON => Self::On,
            EFFECT_ID_BREATH => Self::Breath,
            EFFECT_ID_FADE_IN => Self::FadeIn,
            EFFECT_ID_BLINK_SLOW => Self::BlinkSlow,
            EFFECT_ID_BLINK_FAST => Self::BlinkFast,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => EFFECT_NAME_OFF,
            Self::On => EFFECT_NAME_ON,
            Self::Breath => EFFECT_NAME_BREATH,
            Self::FadeIn => EFFECT_NAME_FADE_IN,
            Self::BlinkSlow => EFFECT_NAME_BLINK_SLOW,
            Self::BlinkFast => EFFECT_NAME_BLINK_FAST,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_OFF => Some(Self::Off),
            EFFECT_NAME_ON => Some(Self::On),
            EFFECT_NAME_BREATH => Some(Self::Breath),
            EFFECT_NAME_FADE_IN => Some(Self::FadeIn),
            EFFECT_NAME_BLINK_SLOW => Some(Self::BlinkSlow),
            EFFECT_NAME_BLINK_FAST => Some(Self::BlinkFast),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effect slot - enum containing the running state of every effect kind
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Off(StaticColorEffect),
    On(StaticColorEffect),
    Breath(BreathEffect),
    FadeIn(FadeInEffect),
    BlinkSlow(BlinkEffect),
    BlinkFast(BlinkEffect),
    Rainbow(RainbowEffect),
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Off(StaticColorEffect::new(BLACK))
    }
}

impl EffectSlot {
    /// Build the initial state for a descriptor
    pub fn from_descriptor(descriptor: &EffectDescriptor, timings: &EffectTimings) -> Self {
        let color = descriptor.color;
        let count = descriptor.count;
        match descriptor.kind {
            EffectKind::Off => Self::default(),
            EffectKind::On => Self::On(match descriptor.step_delay {
                Some(delay) => StaticColorEffect::sweep(color, delay),
                None => StaticColorEffect::new(color),
            }),
            EffectKind::Breath => Self::Breath(BreathEffect::new(
                color,
                timings.breath_period,
                timings.breath_curve,
                count,
            )),
            EffectKind::FadeIn => Self::FadeIn(FadeInEffect::new(color, timings.fade_in)),
            EffectKind::BlinkSlow => {
                Self::BlinkSlow(BlinkEffect::new(color, timings.blink_slow_period, count))
            }
            EffectKind::BlinkFast => {
                Self::BlinkFast(BlinkEffect::new(color, timings.blink_fast_period, count))
            }
            EffectKind::Rainbow => Self::Rainbow(RainbowEffect::new(
                hue_degrees(color),
                timings.rainbow_hue_step,
                timings.rainbow_cycle,
            )),
        }
    }

    /// Render the current effect
    pub fn render(&mut self, elapsed: Duration, leds: &mut [Rgb]) -> EffectStatus {
        match self {
            Self::Off(effect) | Self::On(effect) => effect.render(elapsed, leds),
            Self::Breath(effect) => effect.render(elapsed, leds),
            Self::FadeIn(effect) => effect.render(elapsed, leds),
            Self::BlinkSlow(effect) | Self::BlinkFast(effect) => effect.render(elapsed, leds),
            Self::Rainbow(effect) => effect.render(elapsed, leds),
        }
    }

    /// Get the effect kind for external observation
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Off(_) => EffectKind::Off,
            Self::On(_) => EffectKind::On,
            Self::Breath(_) => EffectKind::Breath,
            Self::FadeIn(_) => EffectKind::FadeIn,
            Self::BlinkSlow(_) => EffectKind::BlinkSlow,
            Self::BlinkFast(_) => EffectKind::BlinkFast,
            Self::Rainbow(_) => EffectKind::Rainbow,
        }
    }
}
