use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Monetary amount - uses Decimal for precision
/// Currency is carried by the owning record, not the value
pub type Amount = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
