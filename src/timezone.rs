//! The local calendar date used to anchor the monthly filter.

use time::{Date, OffsetDateTime};

/// Today's date in the local timezone.
///
/// Falls back to UTC if the local offset cannot be determined, which happens
/// on some platforms when more than one thread is running.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
