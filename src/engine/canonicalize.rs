use chrono::{DateTime, Days, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::domain::assumption::ChronoAssumption;
use crate::domain::config::MappingConfig;
use crate::domain::error::AdaptError;
use crate::domain::value::SourceValue;
use crate::util::tz::{resolve_local, shift_local};

use super::{GASTAG_HOME_ZONE, GASTAG_SHIFT_HOURS};

/// Convert a source value into the canonical instant: a timezone-aware UTC
/// date-time that is an exclusive boundary (if the value is an end) at
/// unconstrained resolution.
///
/// Reads only `config.source` and `config.is_gas`.
pub fn to_canonical(
    value: SourceValue,
    config: &MappingConfig,
) -> Result<DateTime<Utc>, AdaptError> {
    let source = &config.source;
    let is_inclusive_end = source.is_end && source.is_inclusive_end == Some(true);
    let mut canonical = match value {
        SourceValue::Date(date) => {
            // A bare date covers the full day, so an inclusive end date
            // becomes the midnight that starts the following day.
            let date = if is_inclusive_end {
                date + Days::new(1)
            } else {
                date
            };
            localize(date.and_time(NaiveTime::MIN), source)?
        }
        SourceValue::Naive(naive) => {
            // The inclusive-to-exclusive step happens on the wall clock,
            // before the zone rules apply.
            let naive = if is_inclusive_end {
                naive + source.resolution.to_delta()
            } else {
                naive
            };
            localize(naive, source)?
        }
        SourceValue::Aware(aware) => {
            let aware = aware.with_timezone(&Utc);
            if is_inclusive_end {
                aware + source.resolution.to_delta()
            } else {
                aware
            }
        }
    };
    if source.is_gastag_aware && config.is_gas == Some(true) {
        // End-of-gas-day instants sit six local hours after the calendar day
        // boundary; remove that offset so the canonical instant is on the
        // calendar-day axis.
        let zone = source.implicit_timezone.unwrap_or(GASTAG_HOME_ZONE);
        canonical = shift_local(canonical, zone, -TimeDelta::hours(GASTAG_SHIFT_HOURS))?;
    }
    Ok(canonical)
}

fn localize(naive: NaiveDateTime, source: &ChronoAssumption) -> Result<DateTime<Utc>, AdaptError> {
    let zone = source.implicit_timezone.ok_or(AdaptError::MissingTimezone)?;
    Ok(resolve_local(zone, naive)?.with_timezone(&Utc))
}
