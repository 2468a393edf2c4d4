//! Transmission driver seam
//!
//! The engine never touches hardware. It hands finished frames to a
//! [`Transmitter`], which owns the WS2812 bit timing.

use core::fmt::Debug;

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;
use crate::error::InitError;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The strip handle is generic over it.
pub trait Transmitter {
    /// Take ownership of the peripheral driving `pin`.
    ///
    /// Called once when the strip handle is created.
    fn claim(&mut self, pin: u8) -> Result<(), InitError> {
        let _ = pin;
        Ok(())
    }

    /// Write colors to the LED strip
    fn transmit(&mut self, pixels: &[Rgb]);
}

/// Adapter for any blocking `smart_leds` driver
///
/// Write failures are reported through the trace log and otherwise dropped;
/// the next frame simply tries again.
pub struct SmartLedsTransmitter<W> {
    writer: W,
}

impl<W> SmartLedsTransmitter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the wrapped driver
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Transmitter for SmartLedsTransmitter<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: Debug,
{
    fn transmit(&mut self, pixels: &[Rgb]) {
        if let Err(error) = self.writer.write(pixels.iter().copied()) {
            trace!("[SmartLedsTransmitter] frame dropped: {:?}", error);
        }
    }
}
