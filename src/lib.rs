//! Non-blocking effect engine for WS2812 LED strips.
//!
//! A [`StripHandle`] owns the pixel buffer, the running effect and the
//! [`Transmitter`] that talks to the hardware. Effects advance only when the
//! handle is ticked, typically by a [`FrameScheduler`] in a periodic task.
//! Other tasks reach the strip through a [`CommandChannel`].
#![no_std]

#[macro_use]
mod trace;

pub mod buffer;
pub mod color;
pub mod command;
pub mod config;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod error;
pub mod math8;
pub mod range;
pub mod scheduler;
pub mod strip;

pub use buffer::PixelBuffer;
pub use color::{Hsv, Rgb, palette};
pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use config::{BreathCurve, EffectTimings, MatrixLayout, StripConfig, Topology};
pub use driver::{SmartLedsTransmitter, Transmitter};
pub use effect::{EffectDescriptor, EffectKind, RawDescriptor};
pub use engine::EffectEngine;
pub use error::{DescriptorError, Error, InitError, Result};
pub use range::LedRange;
pub use scheduler::{FrameResult, FrameScheduler};
pub use strip::StripHandle;

pub use embassy_time::{Duration, Instant};
