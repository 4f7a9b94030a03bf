use chrono::Utc;
use fincast_core::Timestamp;
use fincast_ports::Clock;

/// Wall-clock time source
///
/// Stamps results with the current UTC instant. Schedule-dependent risk
/// scores computed against it change as the project timeline elapses.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
