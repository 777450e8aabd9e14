use std::time::Duration;

/// Decides which frames commit a game tick. Timestamps are the frame times
/// handed in by the driver, measured from any fixed origin.
#[derive(Clone, Debug, Default)]
pub struct TickClock {
    last_tick: Option<Duration>,
}

impl TickClock {
    pub fn new() -> Self {
        TickClock { last_tick: None }
    }

    /// The first frame is always due.
    pub fn is_due(&self, now: Duration, interval: Duration) -> bool {
        match self.last_tick {
            Some(last) => now.saturating_sub(last) >= interval,
            None => true,
        }
    }

    pub fn mark(&mut self, now: Duration) {
        self.last_tick = Some(now);
    }

    pub fn last_tick(&self) -> Option<Duration> {
        self.last_tick
    }
}
