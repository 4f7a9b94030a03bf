//! Fincast Clock Infrastructure
//!
//! Provides time sources for the analytics engines:
//!
//! - [`SystemClock`] reads the wall clock (production)
//! - [`FixedClock`] is frozen at one instant (tests, replays, "as of" reports)
//!
//! ## Usage
//!
//! ```ignore
//! use fincast_clock::{Clock, FixedClock, SystemClock};
//! use std::sync::Arc;
//!
//! let live: Arc<dyn Clock> = Arc::new(SystemClock::new());
//! let as_of: Arc<dyn Clock> = Arc::new(FixedClock::parse("2024-06-30T00:00:00Z")?);
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use fincast_ports::Clock;
