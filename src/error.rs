//! Error types
//!
//! Validation errors are reported synchronously and never leave partial state
//! behind. Ticking itself never fails.

use derive_more::{Display, Error, From};

use crate::effect::EffectKind;

/// Convenience alias used across the crate
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Top-level error returned by the strip API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum Error {
    /// LED index is beyond the end of the pixel buffer
    #[display("LED index {index} is out of range for a strip of {len} LEDs")]
    OutOfRange { index: usize, len: usize },
    /// Effect parameters failed validation
    #[display("invalid effect descriptor: {_0}")]
    #[from]
    InvalidDescriptor(DescriptorError),
    /// Strip could not be created
    #[display("strip initialization failed: {_0}")]
    #[from]
    Init(InitError),
    /// Command queue has no free slots
    #[display("command queue is full")]
    QueueFull,
    /// Coordinate addressing was used on a strip topology
    #[display("strip has no matrix layout")]
    NotAMatrix,
}

/// Reasons an effect descriptor is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DescriptorError {
    #[display("{channel} channel value {value} exceeds 255")]
    ChannelOutOfRange { channel: Channel, value: u32 },
    #[display("repeat count {_0} is negative")]
    NegativeCount(#[error(not(source))] i32),
    #[display("unknown effect kind {_0}")]
    UnknownKind(#[error(not(source))] u8),
    #[display("range end {end} is beyond a strip of {len} LEDs")]
    RangeOutOfBounds { end: usize, len: usize },
    #[display("{_0} does not support a step delay")]
    StepDelayUnsupported(#[error(not(source))] EffectKind),
}

/// Color channel named in [`DescriptorError::ChannelOutOfRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Channel {
    #[display("red")]
    Red,
    #[display("green")]
    Green,
    #[display("blue")]
    Blue,
}

/// Reasons a strip handle cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InitError {
    #[display("strip length must be at least one LED")]
    EmptyStrip,
    #[display("strip of {len} LEDs exceeds buffer capacity {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
    #[display("frame interval of {millis} ms is outside 20..=50 ms")]
    FrameInterval { millis: u64 },
    #[display("matrix of {width}x{height} does not cover {len} LEDs")]
    TopologyMismatch { width: u16, height: u16, len: usize },
    #[display("transmission peripheral on pin {pin} is unavailable")]
    PeripheralUnavailable { pin: u8 },
}
