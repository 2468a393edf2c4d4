#![allow(dead_code)]

use ws2812_effects::{InitError, Rgb, StripConfig, StripHandle, Transmitter};

/// Driver that keeps every transmitted frame
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Vec<Rgb>>,
    pub busy_pin: Option<u8>,
}

impl Transmitter for Recorder {
    fn claim(&mut self, pin: u8) -> Result<(), InitError> {
        if self.busy_pin == Some(pin) {
            return Err(InitError::PeripheralUnavailable { pin });
        }
        Ok(())
    }

    fn transmit(&mut self, pixels: &[Rgb]) {
        self.frames.push(pixels.to_vec());
    }
}

pub const MAX_LEDS: usize = 32;

pub type TestStrip<'a> = StripHandle<'a, Recorder, MAX_LEDS>;

pub fn strip(len: usize) -> TestStrip<'static> {
    StripHandle::create(StripConfig::new(len, 5), Recorder::default()).unwrap()
}
