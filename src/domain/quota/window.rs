use chrono::{DateTime, Duration, TimeDelta, Utc};

/// Number of ideas a user works with at any time.
pub const TARGET_IDEA_COUNT: u32 = 5;

/// Length of the rolling regeneration window.
pub const WINDOW: TimeDelta = Duration::hours(1);

/// Regeneration allowance of one user at one instant.
///
/// A plan allowing `N` regenerations per hour allows `N + 1` generation
/// events in the window: the first generation is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationQuota {
    pub limit: u32,
    pub events_in_window: u32,
}

impl RegenerationQuota {
    pub const fn new(limit: u32, events_in_window: u32) -> Self {
        Self {
            limit,
            events_in_window,
        }
    }

    const fn allowed_events(self) -> u32 {
        self.limit.saturating_add(1)
    }

    /// Events still available before this call is counted.
    pub const fn remaining(self) -> u32 {
        self.allowed_events().saturating_sub(self.events_in_window)
    }

    /// Events still available once the request being served becomes an event.
    pub const fn remaining_after_dispatch(self) -> u32 {
        self.allowed_events()
            .saturating_sub(self.events_in_window.saturating_add(1))
    }

    pub const fn permits_regeneration(self) -> bool {
        self.events_in_window <= self.limit
    }

    /// Approximate time at which another regeneration becomes possible.
    pub fn next_eligible_at(now: DateTime<Utc>) -> DateTime<Utc> {
        now + WINDOW
    }
}
