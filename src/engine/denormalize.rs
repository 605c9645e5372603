use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::domain::assumption::Resolution;
use crate::domain::config::MappingConfig;
use crate::domain::error::AdaptError;
use crate::util::tz::{resolve_local, shift_local};

use super::{GASTAG_HOME_ZONE, GASTAG_SHIFT_HOURS};

/// Re-express the canonical UTC instant under the target assumption: gas-day
/// axis, target timezone, boundary convention, and resolution, in that order.
///
/// Reads only `config.target` and `config.is_gas`.
pub fn from_canonical(
    canonical: DateTime<Utc>,
    config: &MappingConfig,
) -> Result<DateTime<Tz>, AdaptError> {
    let target = &config.target;
    let mut instant = canonical;
    if target.is_gastag_aware && config.is_gas == Some(true) {
        let zone = target.implicit_timezone.unwrap_or(GASTAG_HOME_ZONE);
        instant = shift_local(instant, zone, TimeDelta::hours(GASTAG_SHIFT_HOURS))?;
    }
    let zone = target.implicit_timezone.unwrap_or(Tz::UTC);
    let mut local = instant.with_timezone(&zone);
    if target.is_end && target.is_inclusive_end == Some(true) {
        // One resolution step back on the wall clock: a one-day step must
        // land on the previous calendar day even across a 23-hour DST day.
        local = resolve_local(zone, local.naive_local() - target.resolution.to_delta())?;
    }
    truncate_to_resolution(local, target.resolution)
}

/// Drop wall-clock components below the resolution, toward the earlier
/// instant. Day or coarser resolutions truncate to local midnight.
fn truncate_to_resolution(
    value: DateTime<Tz>,
    resolution: Resolution,
) -> Result<DateTime<Tz>, AdaptError> {
    let tick = resolution.to_delta();
    let midnight = value.date_naive().and_time(NaiveTime::MIN);
    let truncated = if tick >= TimeDelta::days(1) {
        midnight
    } else {
        let elapsed = value.naive_local() - midnight;
        match (elapsed.num_microseconds(), tick.num_microseconds()) {
            (Some(elapsed_us), Some(tick_us)) if tick_us > 0 => {
                midnight + TimeDelta::microseconds(elapsed_us - elapsed_us % tick_us)
            }
            _ => midnight,
        }
    };
    if truncated == value.naive_local() {
        // Already aligned; keep the offset the pipeline resolved.
        return Ok(value);
    }
    resolve_local(value.timezone(), truncated)
}
