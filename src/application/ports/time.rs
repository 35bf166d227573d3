// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now", injectable so email timestamps are testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
