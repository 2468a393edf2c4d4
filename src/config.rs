//! Strip and effect configuration

use embassy_time::Duration;

use crate::error::InitError;

/// Default frame interval (50 FPS)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Shortest accepted frame interval
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Longest accepted frame interval
pub const MAX_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Shape of the breath envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathCurve {
    /// Raised cosine, slow at the extremes
    Sine,
    /// Straight ramps up and down
    Triangle,
}

/// Timing parameters shared by all effects of a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTimings {
    /// Duration of one full breath (rise and fall)
    pub breath_period: Duration,
    pub breath_curve: BreathCurve,
    /// Time to ramp from black to the full color
    pub fade_in: Duration,
    /// Full on/off cycle of the slow blink
    pub blink_slow_period: Duration,
    /// Full on/off cycle of the fast blink
    pub blink_fast_period: Duration,
    /// Time for the rainbow to rotate once around the wheel
    pub rainbow_cycle: Duration,
    /// Hue offset between neighbouring LEDs, in degrees
    pub rainbow_hue_step: u16,
}

impl EffectTimings {
    pub const DEFAULT: Self = Self {
        breath_period: Duration::from_millis(2_000),
        breath_curve: BreathCurve::Sine,
        fade_in: Duration::from_millis(1_000),
        blink_slow_period: Duration::from_millis(1_000),
        blink_fast_period: Duration::from_millis(200),
        rainbow_cycle: Duration::from_millis(5_000),
        rainbow_hue_step: 12,
    };
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Coordinate to buffer index mapping for matrix panels
///
/// The crate does not know how panels are wired; the caller supplies the
/// mapping.
#[derive(Debug, Clone, Copy)]
pub struct MatrixLayout {
    pub width: u16,
    pub height: u16,
    /// Maps `(x, y)` to an LED index
    pub index_of: fn(x: u16, y: u16) -> usize,
}

/// Physical arrangement of the LEDs
#[derive(Debug, Clone, Copy, Default)]
pub enum Topology {
    /// A single chain addressed by index
    #[default]
    Strip,
    /// A panel addressed by coordinates through a caller supplied mapping
    Matrix(MatrixLayout),
}

/// Configuration for a strip handle
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Number of LEDs on the strip
    pub len: usize,
    /// Data pin handed to the transmitter when it is claimed
    pub pin: u8,
    pub topology: Topology,
    /// Time between two ticks
    pub frame_interval: Duration,
    pub timings: EffectTimings,
}

impl StripConfig {
    /// Strip topology with default timings
    pub const fn new(len: usize, pin: u8) -> Self {
        Self {
            len,
            pin,
            topology: Topology::Strip,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            timings: EffectTimings::DEFAULT,
        }
    }

    #[must_use]
    pub const fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    #[must_use]
    pub const fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    #[must_use]
    pub const fn with_timings(mut self, timings: EffectTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Check the parts of the configuration that do not depend on hardware
    pub(crate) fn validate(&self) -> Result<(), InitError> {
        if self.len == 0 {
            return Err(InitError::EmptyStrip);
        }
        if self.frame_interval < MIN_FRAME_INTERVAL || self.frame_interval > MAX_FRAME_INTERVAL {
            return Err(InitError::FrameInterval {
                millis: self.frame_interval.as_millis(),
            });
        }
        if let Topology::Matrix(layout) = self.topology {
            let cells = usize::from(layout.width) * usize::from(layout.height);
            if cells != self.len {
                return Err(InitError::TopologyMismatch {
                    width: layout.width,
                    height: layout.height,
                    len: self.len,
                });
            }
        }
        Ok(())
    }
}
