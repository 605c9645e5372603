use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::domain::error::AdaptError;

/// Localize a wall-clock time in `zone`, resolving DST edge cases by the
/// zone's own rules.
///
/// Ambiguous times (fall-back) resolve to the earliest valid instant. Times
/// inside a spring-forward gap shift forward across the gap, preserving the
/// sub-hour components.
pub fn resolve_local(zone: Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>, AdaptError> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(resolved) => Ok(resolved),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => zone
            .from_local_datetime(&(naive + TimeDelta::hours(1)))
            .earliest()
            .ok_or(AdaptError::UnresolvableLocalTime { naive, zone }),
    }
}

/// Shift an instant by `delta` on the wall clock of `zone`.
///
/// The UTC magnitude of the shift differs from `delta` whenever the shift
/// crosses a DST transition in `zone`.
pub fn shift_local(
    instant: DateTime<Utc>,
    zone: Tz,
    delta: TimeDelta,
) -> Result<DateTime<Utc>, AdaptError> {
    let shifted = instant.with_timezone(&zone).naive_local() + delta;
    Ok(resolve_local(zone, shifted)?.with_timezone(&Utc))
}
