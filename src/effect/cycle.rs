use embassy_time::Duration;

/// Phase accumulator for periodic effects with an optional repeat limit
#[derive(Debug, Clone)]
pub(crate) struct Cycle {
    period: Duration,
    phase: Duration,
    /// Cycles left before the effect ends, `None` repeats forever
    remaining: Option<u32>,
}

impl Cycle {
    /// A `count` of zero repeats forever
    pub(crate) fn new(period: Duration, count: u32) -> Self {
        Self {
            period: period.max(Duration::from_ticks(2)),
            phase: Duration::from_ticks(0),
            remaining: (count > 0).then_some(count),
        }
    }

    pub(crate) const fn period(&self) -> Duration {
        self.period
    }

    /// Position inside the current cycle, always below [`Self::period`]
    pub(crate) const fn phase(&self) -> Duration {
        self.phase
    }

    /// Advance by `elapsed`. Returns false once the last cycle has completed.
    pub(crate) fn advance(&mut self, elapsed: Duration) -> bool {
        let total = self.phase.as_ticks().saturating_add(elapsed.as_ticks());
        let period = self.period.as_ticks();
        let completed = total / period;
        self.phase = Duration::from_ticks(total % period);

        let Some(remaining) = self.remaining.as_mut() else {
            return true;
        };
        let completed = u32::try_from(completed).unwrap_or(u32::MAX);
        *remaining = remaining.saturating_sub(completed);
        *remaining > 0
    }
}
