//! Event id assignment.
//!
//! Ids are minted once at creation and never regenerated on edit. The
//! provider is injectable so tests can assign deterministic ids.

/// Source of fresh event ids.
pub trait IdProvider {
    fn next_id(&mut self) -> i64;
}

/// Production provider: epoch milliseconds. Monotonic for interactive use,
/// where two events are never created within the same millisecond.
pub struct ClockIds;

impl IdProvider for ClockIds {
    fn next_id(&mut self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Deterministic counter, for tests.
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(next: i64) -> Self {
        Self { next }
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
