//! Cross-task command queue
//!
//! Tasks other than the one ticking the strip never touch the pixel buffer.
//! They push [`Command`]s into a bounded queue guarded by `critical-section`,
//! and the strip drains it at the start of every tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;
use crate::effect::EffectDescriptor;
use crate::error::{Error, Result};

/// Request for the task that owns the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the running effect
    Apply(EffectDescriptor),
    /// Switch to `Off` and clear the strip
    Stop,
    /// Set a single LED
    SetPixel { index: usize, color: Rgb },
    /// Transmit the current buffer immediately
    Flush,
}

/// A bounded, interrupt safe command queue.
///
/// Usually placed in a `static` so senders and the receiver can borrow it
/// for `'static`.
pub struct CommandChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Sender that validates requests against a strip of `strip_len` LEDs
    pub const fn sender(&self, strip_len: usize) -> CommandSender<'_, SIZE> {
        CommandSender {
            channel: self,
            strip_len,
        }
    }

    /// Receiver for the task that ticks the strip
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    fn push(&self, command: Command) -> Result<()> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(|_| Error::QueueFull)
        })
    }

    fn pop(&self) -> Option<Command> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`CommandChannel`]
///
/// Requests are validated here, synchronously, so the owning task only ever
/// receives commands it can apply.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
    strip_len: usize,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue a new effect
    pub fn apply(&self, descriptor: EffectDescriptor) -> Result<()> {
        descriptor.validate(self.strip_len)?;
        self.channel.push(Command::Apply(descriptor))
    }

    /// Queue a stop
    pub fn stop(&self) -> Result<()> {
        self.channel.push(Command::Stop)
    }

    /// Queue a single LED change
    pub fn set_led_color(&self, index: usize, color: Rgb) -> Result<()> {
        if index >= self.strip_len {
            return Err(Error::OutOfRange {
                index,
                len: self.strip_len,
            });
        }
        self.channel.push(Command::SetPixel { index, color })
    }

    /// Queue an immediate transmit
    pub fn update_led_display(&self) -> Result<()> {
        self.channel.push(Command::Flush)
    }
}

/// Consumer side of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the oldest pending command, if any
    pub fn try_receive(&self) -> Option<Command> {
        self.channel.pop()
    }
}
