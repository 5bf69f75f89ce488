//! Fixed-period tick timer driven by elapsed milliseconds.

/// Accumulates elapsed time and reports how many fixed-period ticks are due.
///
/// [`TickTimer::reset`] drops any partial period. The owner resets it on
/// every phase change so a stale countdown never fires into a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTimer {
    period_ms: u64,
    elapsed_ms: u64,
}

impl TickTimer {
    /// A timer firing every `period_ms` (at least 1 ms).
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Time accumulated toward the next tick.
    pub fn pending_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Add `dt_ms` and return the number of whole periods that elapsed.
    pub fn advance(&mut self, dt_ms: u64) -> u64 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let due = self.elapsed_ms / self.period_ms;
        self.elapsed_ms %= self.period_ms;
        due
    }

    /// Discard the partial period.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
