//! Conversion of Messages `date` columns.
//!
//! Messages stores times relative to 2001-01-01 00:00:00 UTC. Databases
//! written before macOS High Sierra use seconds, later ones nanoseconds.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Seconds between the Unix epoch and 2001-01-01 00:00:00 UTC.
pub const APPLE_EPOCH_OFFSET: i64 = 978_307_200;

/// Raw values beyond this magnitude are nanoseconds (roughly year 5170 in seconds).
const NANOSECOND_THRESHOLD: u64 = 100_000_000_000;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

pub fn to_utc(raw: i64) -> Option<DateTime<Utc>> {
    let (seconds, nanos) = if raw.unsigned_abs() > NANOSECOND_THRESHOLD {
        (
            raw.div_euclid(NANOS_PER_SECOND),
            raw.rem_euclid(NANOS_PER_SECOND) as u32,
        )
    } else {
        (raw, 0)
    };

    DateTime::from_timestamp(seconds.checked_add(APPLE_EPOCH_OFFSET)?, nanos)
}

/// Wall-clock time in the local timezone.
pub fn to_local(raw: i64) -> Option<NaiveDateTime> {
    to_utc(raw).map(|utc| utc.with_timezone(&Local).naive_local())
}
