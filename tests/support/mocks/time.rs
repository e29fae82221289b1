// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use postpilot_core::application::ports::time::Clock;
use std::sync::Mutex;

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap());

/// Clock frozen at [`FIXED_NOW`] until a test moves it.
pub struct AdjustableClock {
    now: Mutex<DateTime<Utc>>,
}

impl AdjustableClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(*FIXED_NOW),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for AdjustableClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
