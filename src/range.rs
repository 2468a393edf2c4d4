use core::ops::RangeInclusive;

/// Inclusive window of LED indices
///
/// The bounds are always stored in ascending order, so a range built from
/// `(8, 2)` is the same as one built from `(2, 8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedRange {
    start: usize,
    end: usize,
}

impl LedRange {
    /// Create a range, swapping the bounds if they are given in reverse
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Range covering a whole strip of `len` LEDs
    pub const fn full(len: usize) -> Self {
        Self::new(0, len.saturating_sub(1))
    }

    pub const fn start(self) -> usize {
        self.start
    }

    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of LEDs in the range
    pub const fn count(self) -> usize {
        self.end - self.start + 1
    }

    /// Returns true if every index of the range exists on a strip of `len` LEDs
    pub const fn fits(self, len: usize) -> bool {
        self.end < len
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    pub const fn indices(self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}
