//! Strip handle
//!
//! The single owner of a strip's pixel buffer, effect engine and driver.
//! Every caller-facing operation goes through it.

use embassy_time::Duration;

use crate::buffer::PixelBuffer;
use crate::color::{Rgb, palette::RED};
use crate::command::{Command, CommandReceiver};
use crate::config::{StripConfig, Topology};
use crate::driver::Transmitter;
use crate::effect::{EffectDescriptor, EffectKind};
use crate::engine::EffectEngine;
use crate::error::{Error, Result};
use crate::range::LedRange;

/// Default capacity of the command queue
pub const DEFAULT_QUEUE_SIZE: usize = 4;

/// Handle to one physical LED strip
///
/// Created once at startup and passed by reference to whoever drives it.
/// `MAX_LEDS` bounds the buffer storage, `QUEUE_SIZE` the attached command
/// queue.
pub struct StripHandle<'a, D: Transmitter, const MAX_LEDS: usize, const QUEUE_SIZE: usize = DEFAULT_QUEUE_SIZE>
{
    driver: D,
    config: StripConfig,
    buffer: PixelBuffer<MAX_LEDS>,
    engine: EffectEngine,
    commands: Option<CommandReceiver<'a, QUEUE_SIZE>>,
}

impl<'a, D: Transmitter, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    StripHandle<'a, D, MAX_LEDS, QUEUE_SIZE>
{
    /// Validate `config`, claim the driver and return a handle showing `Off`.
    ///
    /// Nothing is transmitted until the first tick or explicit update.
    pub fn create(config: StripConfig, mut driver: D) -> Result<Self> {
        config.validate()?;
        let buffer = PixelBuffer::new(config.len)?;
        driver.claim(config.pin)?;

        trace!(
            "[StripHandle.create] {} LEDs on pin {}, frame every {} ms",
            config.len,
            config.pin,
            config.frame_interval.as_millis()
        );
        Ok(Self {
            driver,
            engine: EffectEngine::new(config.timings),
            config,
            buffer,
            commands: None,
        })
    }

    /// Drain commands from `receiver` at the start of every tick
    #[must_use]
    pub fn with_commands(mut self, receiver: CommandReceiver<'a, QUEUE_SIZE>) -> Self {
        self.commands = Some(receiver);
        self
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Current buffer contents
    pub fn pixels(&self) -> &[Rgb] {
        self.buffer.as_slice()
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.buffer.get(index)
    }

    /// Kind of the running effect
    pub const fn kind(&self) -> EffectKind {
        self.engine.kind()
    }

    /// Descriptor of the running effect
    pub const fn descriptor(&self) -> &EffectDescriptor {
        self.engine.descriptor()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Tear the handle down and give the driver back
    pub fn release(self) -> D {
        self.driver
    }

    /// Set a single LED. Shown on the next transmit.
    pub fn set_led_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.buffer.set(index, color)
    }

    /// Set a single LED of a matrix by coordinates
    pub fn set_pixel_xy(&mut self, x: u16, y: u16, color: Rgb) -> Result<()> {
        let Topology::Matrix(layout) = self.config.topology else {
            return Err(Error::NotAMatrix);
        };
        if x >= layout.width || y >= layout.height {
            return Err(Error::OutOfRange {
                index: usize::from(y) * usize::from(layout.width) + usize::from(x),
                len: self.buffer.len(),
            });
        }
        self.buffer.set((layout.index_of)(x, y), color)
    }

    /// Replace the running effect. Takes effect on the next tick.
    pub fn apply(&mut self, descriptor: EffectDescriptor) -> Result<()> {
        self.engine.apply(descriptor, self.buffer.len())?;
        Ok(())
    }

    /// Generic dispatch: run `kind` with `color`, repeating forever
    pub fn ws2812_set(&mut self, color: Rgb, kind: EffectKind) -> Result<()> {
        self.apply(EffectDescriptor::new(kind, color))
    }

    pub fn led_set_on(&mut self, color: Rgb) -> Result<()> {
        self.ws2812_set(color, EffectKind::On)
    }

    /// Same as [`Self::stop`]
    pub fn led_set_off(&mut self) {
        self.stop();
    }

    pub fn led_set_breath(&mut self, color: Rgb) -> Result<()> {
        self.ws2812_set(color, EffectKind::Breath)
    }

    pub fn led_set_fade_in(&mut self, color: Rgb) -> Result<()> {
        self.ws2812_set(color, EffectKind::FadeIn)
    }

    /// Blink slowly `count` times, 0 blinks until another effect is applied
    pub fn led_set_blink_slow(&mut self, color: Rgb, count: u32) -> Result<()> {
        self.apply(EffectDescriptor::new(EffectKind::BlinkSlow, color).with_count(count))
    }

    /// Blink quickly `count` times, 0 blinks until another effect is applied
    pub fn led_set_blink_fast(&mut self, color: Rgb, count: u32) -> Result<()> {
        self.apply(EffectDescriptor::new(EffectKind::BlinkFast, color).with_count(count))
    }

    /// Rainbow starting from red at the first LED
    pub fn led_set_rainbow(&mut self) -> Result<()> {
        self.ws2812_set(RED, EffectKind::Rainbow)
    }

    /// Light the LEDs between `start` and `end` one after another.
    ///
    /// The bounds may be given in either order.
    pub fn set_led_color_gradient(
        &mut self,
        start: usize,
        end: usize,
        color: Rgb,
        step_delay: Duration,
    ) -> Result<()> {
        self.apply(EffectDescriptor::sweep(
            LedRange::new(start, end),
            color,
            step_delay,
        ))
    }

    /// Switch to `Off`, clear the strip and transmit once
    pub fn stop(&mut self) {
        self.engine.stop(&mut self.buffer);
        self.update_led_display();
    }

    /// Transmit the current buffer right away
    pub fn update_led_display(&mut self) {
        self.driver.transmit(self.buffer.as_slice());
    }

    /// Process one frame
    ///
    /// Applies queued commands, advances the running effect by `elapsed` and
    /// transmits the result. Never blocks.
    pub fn tick(&mut self, elapsed: Duration) {
        self.process_commands();
        self.engine.tick(elapsed, &mut self.buffer);
        self.update_led_display();
    }

    /// Apply everything pending in the command queue (non-blocking)
    fn process_commands(&mut self) {
        let Some(commands) = self.commands else {
            return;
        };

        while let Some(command) = commands.try_receive() {
            let result = match command {
                Command::Apply(descriptor) => self.apply(descriptor),
                Command::Stop => {
                    self.stop();
                    Ok(())
                }
                Command::SetPixel { index, color } => self.set_led_color(index, color),
                Command::Flush => {
                    self.update_led_display();
                    Ok(())
                }
            };
            if let Err(error) = result {
                trace!("[StripHandle.tick] dropped {:?}: {}", command, error);
            }
        }
    }
}
