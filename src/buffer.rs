//! Pixel buffer
//!
//! The single source of truth for what the strip should display. Writing to
//! it never transmits anything; that is a separate step.

use heapless::Vec;

use crate::color::{Rgb, palette::BLACK};
use crate::error::{Error, InitError, Result};
use crate::range::LedRange;

/// Fixed-length frame of LED colors
///
/// `MAX_LEDS` is the storage capacity; the actual strip length is chosen at
/// creation and never changes.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    pixels: Vec<Rgb, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create an all-black buffer of `len` LEDs
    pub fn new(len: usize) -> Result<Self, InitError> {
        if len == 0 {
            return Err(InitError::EmptyStrip);
        }
        let mut pixels = Vec::new();
        pixels
            .resize(len, BLACK)
            .map_err(|()| InitError::CapacityExceeded {
                len,
                capacity: MAX_LEDS,
            })?;
        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Color at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Set a single LED
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<()> {
        let len = self.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })?;
        *pixel = color;
        Ok(())
    }

    /// Set every LED to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Set every LED to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Mutable view of the LEDs inside `range`
    ///
    /// Returns `None` if the range does not fit the buffer.
    pub fn window_mut(&mut self, range: LedRange) -> Option<&mut [Rgb]> {
        self.pixels.get_mut(range.indices())
    }
}
