//! Fixed cadence ticking
//!
//! Turns absolute timestamps into the `elapsed` steps a strip expects and
//! keeps frames on the configured interval.

use embassy_time::{Duration, Instant, Timer};

use crate::driver::Transmitter;
use crate::strip::{DEFAULT_QUEUE_SIZE, StripHandle};

/// Timing of one processed frame
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Time advanced by this frame
    pub elapsed: Duration,
    /// When the following frame is due
    pub next_deadline: Instant,
    /// Time left until `next_deadline`, zero when running late
    pub sleep_duration: Duration,
}

/// Periodic driver for a [`StripHandle`]
///
/// Owns the strip while scheduling. Each call to [`FrameScheduler::tick`]
/// advances it by the real time since the previous call. Callers without an
/// executor loop of their own can use [`FrameScheduler::run`]:
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(strip);
/// scheduler.run().await;
/// ```
pub struct FrameScheduler<'a, D: Transmitter, const MAX_LEDS: usize, const QUEUE_SIZE: usize = DEFAULT_QUEUE_SIZE>
{
    strip: StripHandle<'a, D, MAX_LEDS, QUEUE_SIZE>,
    next_frame: Instant,
    last_frame: Option<Instant>,
}

impl<'a, D: Transmitter, const MAX_LEDS: usize, const QUEUE_SIZE: usize>
    FrameScheduler<'a, D, MAX_LEDS, QUEUE_SIZE>
{
    pub const fn new(strip: StripHandle<'a, D, MAX_LEDS, QUEUE_SIZE>) -> Self {
        Self {
            strip,
            next_frame: Instant::from_ticks(0),
            last_frame: None,
        }
    }

    /// Render the frame due at `now`.
    ///
    /// The first frame advances the strip by zero. If we've fallen more than
    /// two frames behind, the deadline is reset to `now` instead of
    /// catching up in a burst.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let frame_interval = self.strip.config().frame_interval;
        if now > self.next_frame + frame_interval * 2 {
            self.next_frame = now;
        }

        let elapsed = self
            .last_frame
            .and_then(|last| now.checked_duration_since(last))
            .unwrap_or(Duration::from_ticks(0));
        self.last_frame = Some(now);
        self.strip.tick(elapsed);

        self.next_frame += frame_interval;
        let sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        FrameResult {
            elapsed,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Tick forever on the `embassy-time` clock
    pub async fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            Timer::at(result.next_deadline).await;
        }
    }

    /// Get a reference to the strip.
    pub const fn strip(&self) -> &StripHandle<'a, D, MAX_LEDS, QUEUE_SIZE> {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut StripHandle<'a, D, MAX_LEDS, QUEUE_SIZE> {
        &mut self.strip
    }

    /// Stop scheduling and hand the strip back
    pub fn into_strip(self) -> StripHandle<'a, D, MAX_LEDS, QUEUE_SIZE> {
        self.strip
    }
}
